//! Fixed-point coordinate representation.
//!
//! Degree values are stored as signed 32-bit integers scaled by 10⁷, which
//! keeps the whole-earth longitude range (±1.8·10⁹) inside the signed 32-bit
//! domain with a worst-case spatial error of about one centimeter at the
//! equator. All geometric arithmetic downstream works on these integers.

use crate::error::OutOfBounds;
use h3o::{CellIndex, LatLng, Resolution};

/// Scale factor between degrees and the fixed-point representation.
pub(crate) const SCALE: i32 = 10_000_000;

/// Resolution of the shortcut index.
///
/// ~41k cells covering Earth, ~120 km across. Coarser leaves too many
/// polygons per cell, finer blows up the cell count.
pub(crate) const SHORTCUT_RESOLUTION: Resolution = Resolution::Three;

/// Converts a fixed-point value back to degrees.
pub(crate) fn to_degrees(fixed: i32) -> f64 {
    f64::from(fixed) / f64::from(SCALE)
}

/// Converts an in-range degree value to fixed-point.
///
/// Rounds half away from zero, like the dataset compiler.
fn to_fixed(degrees: f64) -> i32 {
    // In-range inputs stay below i32::MAX after scaling.
    (degrees * f64::from(SCALE)).round() as i32
}

/// A query position, in fixed-point.
///
/// Construction validates the WGS84 ranges and folds the antimeridian, so a
/// `Point` is always addressable in both the polygon store and the shortcut
/// index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Point {
    /// Scaled longitude.
    pub x: i32,
    /// Scaled latitude.
    pub y: i32,
    lng: f64,
    lat: f64,
}

impl Point {
    /// Initializes a query position from degrees.
    ///
    /// A longitude of exactly `+180°` is folded to `-180°` (the dataset is
    /// cropped at the antimeridian, both spellings address the same data).
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`] when the longitude is outside `[-180, 180]` or the
    /// latitude outside `[-90, 90]` (NaN and infinities included).
    pub fn new(lng: f64, lat: f64) -> Result<Self, OutOfBounds> {
        if !(-180.0..=180.0).contains(&lng) {
            return Err(OutOfBounds::new(lng, "longitude not in [-180, 180]"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(OutOfBounds::new(lat, "latitude not in [-90, 90]"));
        }

        let lng = if lng == 180.0 { -180.0 } else { lng };
        Ok(Self {
            x: to_fixed(lng),
            y: to_fixed(lat),
            lng,
            lat,
        })
    }

    /// The shortcut cell containing this position.
    pub fn cell(&self) -> CellIndex {
        // Finiteness was established by `new`.
        LatLng::new(self.lat, self.lng)
            .expect("validated coordinate")
            .to_cell(SHORTCUT_RESOLUTION)
    }
}

#[cfg(test)]
impl Point {
    /// A point directly from fixed-point values, bypassing validation.
    pub(crate) fn from_fixed(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            lng: to_degrees(x),
            lat: to_degrees(y),
        }
    }
}

#[cfg(test)]
#[path = "./coord_tests.rs"]
mod tests;
