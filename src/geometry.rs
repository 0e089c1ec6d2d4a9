//! Degree-space geometry returned by [`get_geometry`].
//!
//! [`get_geometry`]: crate::TimezoneFinder::get_geometry

use crate::coord::to_degrees;
use crate::polygon::PolygonView;

/// A closed ring in degrees, stored as parallel coordinate arrays.
///
/// The first vertex is not repeated at the end; the closing edge is
/// implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    lngs: Vec<f64>,
    lats: Vec<f64>,
}

impl Ring {
    pub(crate) fn from_view(view: &PolygonView<'_>) -> Self {
        let mut lngs = Vec::with_capacity(view.len());
        let mut lats = Vec::with_capacity(view.len());
        for (x, y) in view.vertices() {
            lngs.push(to_degrees(x));
            lats.push(to_degrees(y));
        }

        Self { lngs, lats }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lngs.len()
    }

    /// Whether the ring has no vertices (never true for dataset rings).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lngs.is_empty()
    }

    /// Longitudes, in storage order.
    #[must_use]
    pub fn lngs(&self) -> &[f64] {
        &self.lngs
    }

    /// Latitudes, in storage order.
    #[must_use]
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Vertices as `(lng, lat)` pairs, in storage order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lngs.iter().copied().zip(self.lats.iter().copied())
    }
}

// -----------------------------------------------------------------------------

/// One piece of a zone's territory: a boundary ring and the holes carved
/// out of it.
#[derive(Clone, Debug, PartialEq)]
pub struct ZonePolygon {
    boundary: Ring,
    holes: Vec<Ring>,
}

impl ZonePolygon {
    pub(crate) const fn new(boundary: Ring, holes: Vec<Ring>) -> Self {
        Self { boundary, holes }
    }

    /// The outer boundary.
    #[must_use]
    pub const fn boundary(&self) -> &Ring {
        &self.boundary
    }

    /// The holes, possibly none.
    #[must_use]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }
}

// -----------------------------------------------------------------------------

/// The full multipolygon of one zone, in storage order (largest boundary
/// polygon first).
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneGeometry {
    name: String,
    polygons: Vec<ZonePolygon>,
}

impl ZoneGeometry {
    pub(crate) const fn new(name: String, polygons: Vec<ZonePolygon>) -> Self {
        Self { name, polygons }
    }

    /// The zone's IANA name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The zone's polygons.
    #[must_use]
    pub fn polygons(&self) -> &[ZonePolygon] {
        &self.polygons
    }
}

#[cfg(feature = "geo")]
impl From<&ZoneGeometry> for geo_types::MultiPolygon {
    fn from(geometry: &ZoneGeometry) -> Self {
        geometry
            .polygons()
            .iter()
            .map(|polygon| {
                let exterior = geo_types::LineString::from(
                    polygon.boundary().points().collect::<Vec<_>>(),
                );
                let interiors = polygon
                    .holes()
                    .iter()
                    .map(|hole| {
                        geo_types::LineString::from(
                            hole.points().collect::<Vec<_>>(),
                        )
                    })
                    .collect();
                geo_types::Polygon::new(exterior, interiors)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "./geometry_tests.rs"]
mod tests;
