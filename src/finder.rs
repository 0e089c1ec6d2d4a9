//! The query engine.

use crate::coord::Point;
use crate::dataset::LoadMode;
use crate::error::{LoadError, OutOfBounds, UnknownZone};
use crate::geometry::{Ring, ZoneGeometry, ZonePolygon};
use crate::polygon::PolygonStore;
use crate::shortcut::{Shortcut, ShortcutIndex};
use std::path::Path;

/// Name prefix of the `Etc/GMT±N` zones tiling the oceans.
const OCEAN_PREFIX: &str = "Etc/GMT";

/// Reference to a zone, by id or by IANA name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZoneRef<'a> {
    /// Zone id, i.e. an index into the name table.
    Id(u16),
    /// IANA name, e.g. `Europe/Berlin`.
    Name(&'a str),
}

impl From<u16> for ZoneRef<'static> {
    fn from(id: u16) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for ZoneRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

// -----------------------------------------------------------------------------

/// The timezone lookup engine.
///
/// A finder owns one immutable dataset (polygon store and shortcut index)
/// and answers point queries on the calling thread, without I/O. It is
/// read-only after construction and therefore [`Send`] and [`Sync`]:
/// share one instance across threads freely, no synchronization needed.
///
/// # Example
///
/// ```no_run
/// let finder = tzf::TimezoneFinder::new("/var/lib/tzf/dataset")?;
///
/// assert_eq!(
///     finder.timezone_at(13.358, 52.5061)?,
///     Some("Europe/Berlin"),
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TimezoneFinder {
    polygons: PolygonStore,
    shortcuts: ShortcutIndex,
}

impl TimezoneFinder {
    /// Opens a dataset directory, memory-mapping its files.
    ///
    /// The default mode: a small resident set, at the price of possible
    /// page faults on first touch of cold pages.
    ///
    /// # Errors
    ///
    /// [`LoadError`] when a file is missing, unreadable, malformed or the
    /// files contradict each other.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::open(dir.as_ref(), LoadMode::Mapped)
    }

    /// Opens a dataset directory, reading every file into memory.
    ///
    /// Trades startup latency and resident set size for steady-state
    /// determinism: queries never page-fault. The query code path is
    /// identical to [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// [`LoadError`], as for [`new`](Self::new).
    pub fn in_memory(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::open(dir.as_ref(), LoadMode::InMemory)
    }

    fn open(dir: &Path, mode: LoadMode) -> Result<Self, LoadError> {
        let polygons = PolygonStore::open(dir, mode)?;
        let shortcuts = ShortcutIndex::open(
            dir,
            mode,
            polygons.zone_count(),
            polygons.polygon_count(),
        )?;

        Ok(Self {
            polygons,
            shortcuts,
        })
    }

    /// The timezone containing the given coordinate.
    ///
    /// Returns the name of the first matching zone, `None` when the
    /// coordinate's shortcut cell has candidates but none of them
    /// contains the point (possible over the oceans with a land-only
    /// dataset, never with an ocean dataset).
    ///
    /// Points exactly on a polygon edge are undefined and may resolve to
    /// either side.
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`] when `lng` is outside `[-180, 180]` or `lat`
    /// outside `[-90, 90]`.
    pub fn timezone_at(
        &self,
        lng: f64,
        lat: f64,
    ) -> Result<Option<&str>, OutOfBounds> {
        let point = Point::new(lng, lat)?;
        Ok(match self.shortcuts.lookup(point.cell()) {
            None => None,
            Some(Shortcut::Unique(zone)) => {
                Some(self.polygons.zone_name(zone))
            }
            Some(Shortcut::Candidates(ids)) => self.resolve(point, ids),
        })
    }

    /// Like [`timezone_at`](Self::timezone_at), with ocean zones filtered
    /// out.
    ///
    /// A match whose name starts with `Etc/GMT` becomes `None`; the
    /// filter applies to the result only, never to the lookup itself.
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`], as for [`timezone_at`](Self::timezone_at).
    pub fn timezone_at_land(
        &self,
        lng: f64,
        lat: f64,
    ) -> Result<Option<&str>, OutOfBounds> {
        Ok(self
            .timezone_at(lng, lat)?
            .filter(|name| !name.starts_with(OCEAN_PREFIX)))
    }

    /// The timezone of the coordinate, only if its shortcut cell resolves
    /// to a single zone.
    ///
    /// Never tests a polygon: `Some` if and only if the cell is unique,
    /// `None` for every candidate cell regardless of how it would
    /// resolve. A cheap, deterministic early exit for callers that fall
    /// back to [`timezone_at`](Self::timezone_at) on `None`.
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`], as for [`timezone_at`](Self::timezone_at).
    pub fn unique_timezone_at(
        &self,
        lng: f64,
        lat: f64,
    ) -> Result<Option<&str>, OutOfBounds> {
        let point = Point::new(lng, lat)?;
        Ok(match self.shortcuts.lookup(point.cell()) {
            Some(Shortcut::Unique(zone)) => {
                Some(self.polygons.zone_name(zone))
            }
            _ => None,
        })
    }

    /// The timezone containing the given coordinate.
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`], as for [`timezone_at`](Self::timezone_at).
    #[deprecated(
        since = "0.1.0",
        note = "identical to `timezone_at` since datasets cover the oceans"
    )]
    pub fn certain_timezone_at(
        &self,
        lng: f64,
        lat: f64,
    ) -> Result<Option<&str>, OutOfBounds> {
        self.timezone_at(lng, lat)
    }

    /// Walks a candidate list in stored order.
    fn resolve(&self, point: Point, ids: &[u32]) -> Option<&str> {
        let zones: Vec<u16> =
            ids.iter().map(|&id| self.polygons.zone_of(id)).collect();

        // suffix_uniform[i]: candidates i.. all belong to zones[i]. With
        // an ocean dataset the cell is fully covered by its candidates,
        // so a uniform suffix proves the answer without another ray-cast.
        // The candidate ordering makes these suffixes long.
        let mut suffix_uniform = vec![false; zones.len()];
        for index in (0..zones.len()).rev() {
            if index + 1 == zones.len()
                || (suffix_uniform[index + 1]
                    && zones[index] == zones[index + 1])
            {
                suffix_uniform[index] = true;
            } else {
                break;
            }
        }
        let provable = self.polygons.covers_oceans();

        for (index, &id) in ids.iter().enumerate() {
            if provable && suffix_uniform[index] {
                return Some(self.polygons.zone_name(zones[index]));
            }
            if !self.polygons.bbox(id).contains(point) {
                continue;
            }
            if !self.polygons.polygon(id).contains(point) {
                continue;
            }
            // Inside a hole means inside whatever zone fills the hole;
            // that zone is a later candidate.
            if self.polygons.holes_of(id).any(|hole| hole.contains(point)) {
                continue;
            }
            return Some(self.polygons.zone_name(zones[index]));
        }

        None
    }

    /// The full geometry of a zone, in degrees.
    ///
    /// Boundary polygons come in storage order (largest first), each with
    /// its holes.
    ///
    /// # Errors
    ///
    /// [`UnknownZone`] when the name or id is absent from the dataset.
    pub fn get_geometry<'a>(
        &self,
        zone: impl Into<ZoneRef<'a>>,
    ) -> Result<ZoneGeometry, UnknownZone> {
        let id = match zone.into() {
            ZoneRef::Id(id) => {
                if usize::from(id) >= self.polygons.zone_count() {
                    return Err(UnknownZone::new(id.to_string()));
                }
                id
            }
            ZoneRef::Name(name) => self
                .polygons
                .zone_id(name)
                .ok_or_else(|| UnknownZone::new(name))?,
        };

        let polygons = self
            .polygons
            .polygons_of_zone(id)
            .map(|polygon| {
                ZonePolygon::new(
                    Ring::from_view(&self.polygons.polygon(polygon)),
                    self.polygons
                        .holes_of(polygon)
                        .map(|hole| Ring::from_view(&hole))
                        .collect(),
                )
            })
            .collect();

        Ok(ZoneGeometry::new(
            self.polygons.zone_name(id).to_owned(),
            polygons,
        ))
    }

    /// The zone name table, in id order.
    #[must_use]
    pub fn zone_names(&self) -> &[String] {
        self.polygons.zone_names()
    }

    /// Id of the zone called `name`.
    #[must_use]
    pub fn zone_id(&self, name: &str) -> Option<u16> {
        self.polygons.zone_id(name)
    }

    /// Number of zones in the dataset.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.polygons.zone_count()
    }

    /// Whether the dataset tiles the oceans with `Etc/GMT±N` zones.
    ///
    /// With such a dataset [`timezone_at`](Self::timezone_at) never
    /// returns `None`.
    #[must_use]
    pub fn covers_oceans(&self) -> bool {
        self.polygons.covers_oceans()
    }
}

#[cfg(test)]
#[path = "./finder_tests.rs"]
mod tests;
