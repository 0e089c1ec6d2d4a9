//! Polygon storage and the point-in-polygon kernel.
//!
//! Boundary and hole rings live in two FlatBuffers files as parallel
//! scaled-integer columns. The collections are verified once at load and
//! accessed afterwards through byte extents recorded per ring, so a view
//! is O(1) and zero-copy in both load modes.

use crate::coord::Point;
use crate::dataset::npy::{NpyColumn, ZoneIdColumn};
use crate::dataset::{self, Backing, LoadMode};
use crate::error::LoadError;
use crate::fb;
use ahash::AHashMap;
use log::debug;
use std::{fs, ops::Range, path::Path};

/// Byte extents of one ring's coordinate columns inside its collection.
#[derive(Clone, Copy, Debug)]
struct RingExtent {
    x: usize,
    y: usize,
    len: usize,
}

/// One FlatBuffers file of rings (boundaries or holes).
#[derive(Debug)]
struct RingCollection {
    backing: Backing,
    extents: Vec<RingExtent>,
}

impl RingCollection {
    /// Opens a ring collection and verifies the buffer.
    fn open(path: &Path, mode: LoadMode) -> Result<Self, LoadError> {
        let backing = Backing::open(path, mode)?;
        let mut extents = Vec::new();
        {
            let collection = fb::root_as_polygon_collection(&backing)
                .map_err(|err| LoadError::format(path, err.to_string()))?;
            let base = backing.as_ptr() as usize;
            if let Some(polygons) = collection.polygons() {
                extents.reserve_exact(polygons.len());
                for (id, polygon) in polygons.iter().enumerate() {
                    let xs = polygon.x().ok_or_else(|| {
                        LoadError::format(path, format!("ring {id}: missing x column"))
                    })?;
                    let ys = polygon.y().ok_or_else(|| {
                        LoadError::format(path, format!("ring {id}: missing y column"))
                    })?;
                    if xs.len() != ys.len() {
                        return Err(LoadError::format(
                            path,
                            format!("ring {id}: mismatched column lengths"),
                        ));
                    }
                    if xs.len() < 3 {
                        return Err(LoadError::format(
                            path,
                            format!("ring {id}: fewer than 3 vertices"),
                        ));
                    }
                    extents.push(RingExtent {
                        x: xs.bytes().as_ptr() as usize - base,
                        y: ys.bytes().as_ptr() as usize - base,
                        len: xs.len(),
                    });
                }
            }
        }

        Ok(Self { backing, extents })
    }

    fn len(&self) -> usize {
        self.extents.len()
    }

    fn view(&self, id: usize) -> PolygonView<'_> {
        let extent = self.extents[id];
        PolygonView {
            xs: &self.backing[extent.x..extent.x + 4 * extent.len],
            ys: &self.backing[extent.y..extent.y + 4 * extent.len],
            len: extent.len,
        }
    }
}

// -----------------------------------------------------------------------------

/// Zero-copy columnar view over one ring.
///
/// Vertices are scaled integers; the first vertex is not repeated at the
/// end, the closing edge is implicit.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PolygonView<'a> {
    xs: &'a [u8],
    ys: &'a [u8],
    len: usize,
}

impl PolygonView<'_> {
    /// Number of vertices.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn coordinate(column: &[u8], index: usize) -> i32 {
        let mut le = [0_u8; 4];
        le.copy_from_slice(&column[4 * index..4 * index + 4]);
        i32::from_le_bytes(le)
    }

    /// Vertex at `index`, as `(x, y)` scaled integers.
    #[inline]
    pub fn vertex(&self, index: usize) -> (i32, i32) {
        (
            Self::coordinate(self.xs, index),
            Self::coordinate(self.ys, index),
        )
    }

    /// Iterates over all vertices in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.len).map(|index| self.vertex(index))
    }

    /// Horizontal ray-cast from `point` towards east, counting edge
    /// crossings; an odd count is inside.
    ///
    /// An edge toggles iff exactly one endpoint lies strictly above the
    /// ray (the half-open rule that counts shared vertices at most once
    /// and skips horizontal edges) and the intersection lies strictly
    /// east of the query point. Points exactly on an edge are undefined.
    pub fn contains(&self, point: Point) -> bool {
        let (qx, qy) = (point.x, point.y);
        let mut inside = false;

        let (mut ax, mut ay) = self.vertex(self.len - 1);
        for index in 0..self.len {
            let (bx, by) = self.vertex(index);
            if (ay > qy) != (by > qy) {
                let dx = i64::from(bx) - i64::from(ax);
                let dy = i64::from(by) - i64::from(ay);
                let rise = i64::from(qy) - i64::from(ay);
                let reach = i64::from(qx) - i64::from(ax);
                // Each factor can reach ±3.6e9, so the difference of
                // products can overflow i64; widen to 128 bits.
                let cross = i128::from(dx) * i128::from(rise)
                    - i128::from(reach) * i128::from(dy);
                // dy cannot be 0 here: a straddling edge is never
                // horizontal. The comparison direction follows its sign.
                let crosses = if dy > 0 { cross > 0 } else { cross < 0 };
                if crosses {
                    inside = !inside;
                }
            }
            (ax, ay) = (bx, by);
        }

        inside
    }
}

// -----------------------------------------------------------------------------

/// Axis-aligned bounding box in scaled integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bbox {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl Bbox {
    /// Rejection test: can `point` possibly be inside the polygon?
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        self.xmin <= point.x
            && point.x <= self.xmax
            && self.ymin <= point.y
            && point.y <= self.ymax
    }
}

// -----------------------------------------------------------------------------

/// The immutable polygon side of a dataset.
///
/// Owns the boundary and hole collections, the per-polygon bounding box
/// and zone-id columns, the zone-name table and the hole registry. All
/// cross-file invariants are validated here, once, so lookups can index
/// directly.
#[derive(Debug)]
pub(crate) struct PolygonStore {
    boundaries: RingCollection,
    holes: RingCollection,
    xmin: NpyColumn<i32>,
    xmax: NpyColumn<i32>,
    ymin: NpyColumn<i32>,
    ymax: NpyColumn<i32>,
    zone_ids: ZoneIdColumn,
    zone_positions: NpyColumn<u32>,
    hole_registry: Vec<(u32, u32)>,
    names: Vec<String>,
    ids_by_name: AHashMap<String, u16>,
    covers_oceans: bool,
}

impl PolygonStore {
    /// Loads and cross-validates the polygon side of a dataset.
    pub fn open(dir: &Path, mode: LoadMode) -> Result<Self, LoadError> {
        let names_path = dataset::file(dir, dataset::TIMEZONE_NAMES);
        let raw = fs::read_to_string(&names_path)
            .map_err(|source| LoadError::io(&names_path, source))?;
        let names: Vec<String> = raw.lines().map(str::to_owned).collect();
        if names.is_empty() {
            return Err(LoadError::corrupt(&names_path, "empty name table"));
        }
        if names.len() > usize::from(u16::MAX) + 1 {
            return Err(LoadError::corrupt(
                &names_path,
                format!("{} zones exceed the 16-bit id space", names.len()),
            ));
        }
        let mut ids_by_name = AHashMap::with_capacity(names.len());
        for (id, name) in names.iter().enumerate() {
            if ids_by_name.insert(name.clone(), id as u16).is_some() {
                return Err(LoadError::corrupt(
                    &names_path,
                    format!("duplicate zone name {name:?}"),
                ));
            }
        }
        let covers_oceans = names.iter().any(|name| name.starts_with("Etc/GMT"));

        let boundaries =
            RingCollection::open(&dataset::file(dir, dataset::BOUNDARIES), mode)?;
        let holes =
            RingCollection::open(&dataset::file(dir, dataset::HOLES), mode)?;

        let zone_ids_path = dataset::file(dir, dataset::ZONE_IDS);
        let zone_ids = ZoneIdColumn::open(&zone_ids_path, mode)?;
        if zone_ids.len() != boundaries.len() {
            return Err(LoadError::corrupt(
                &zone_ids_path,
                format!(
                    "{} zone ids for {} polygons",
                    zone_ids.len(),
                    boundaries.len()
                ),
            ));
        }
        for id in 0..zone_ids.len() {
            if usize::from(zone_ids.get(id)) >= names.len() {
                return Err(LoadError::corrupt(
                    &zone_ids_path,
                    format!("polygon {id} references an unknown zone"),
                ));
            }
        }

        let positions_path = dataset::file(dir, dataset::ZONE_POSITIONS);
        let zone_positions = NpyColumn::<u32>::open(&positions_path, mode)?;
        if zone_positions.len() != names.len() + 1 {
            return Err(LoadError::corrupt(
                &positions_path,
                format!(
                    "{} positions for {} zones",
                    zone_positions.len(),
                    names.len()
                ),
            ));
        }
        if zone_positions.get(0) != 0
            || zone_positions.get(names.len()) as usize != boundaries.len()
        {
            return Err(LoadError::corrupt(
                &positions_path,
                "prefix sums do not span the polygon collection",
            ));
        }
        for zone in 0..names.len() {
            let start = zone_positions.get(zone);
            let end = zone_positions.get(zone + 1);
            if start > end {
                return Err(LoadError::corrupt(
                    &positions_path,
                    format!("zone {zone}: decreasing prefix sums"),
                ));
            }
            for id in start..end {
                if usize::from(zone_ids.get(id as usize)) != zone {
                    return Err(LoadError::corrupt(
                        &positions_path,
                        format!("polygon {id} outside its zone range"),
                    ));
                }
            }
        }

        let open_bbox = |name: &str| -> Result<NpyColumn<i32>, LoadError> {
            let path = dataset::file(dir, name);
            let column = NpyColumn::<i32>::open(&path, mode)?;
            if column.len() == boundaries.len() {
                Ok(column)
            } else {
                Err(LoadError::corrupt(
                    &path,
                    format!(
                        "{} bbox entries for {} polygons",
                        column.len(),
                        boundaries.len()
                    ),
                ))
            }
        };
        let xmin = open_bbox(dataset::BBOX_XMIN)?;
        let xmax = open_bbox(dataset::BBOX_XMAX)?;
        let ymin = open_bbox(dataset::BBOX_YMIN)?;
        let ymax = open_bbox(dataset::BBOX_YMAX)?;

        let registry_path = dataset::file(dir, dataset::HOLE_REGISTRY);
        let hole_registry = dataset::read_hole_registry(
            &registry_path,
            boundaries.len(),
            holes.len(),
        )?;

        debug!(
            "dataset at {}: {} zones, {} polygons, {} holes{}",
            dir.display(),
            names.len(),
            boundaries.len(),
            holes.len(),
            if covers_oceans { " (with ocean zones)" } else { "" },
        );

        Ok(Self {
            boundaries,
            holes,
            xmin,
            xmax,
            ymin,
            ymax,
            zone_ids,
            zone_positions,
            hole_registry,
            names,
            ids_by_name,
            covers_oceans,
        })
    }

    /// Number of boundary polygons.
    pub fn polygon_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Number of zones.
    pub fn zone_count(&self) -> usize {
        self.names.len()
    }

    /// Whether the dataset tiles the oceans with `Etc/GMT±N` zones.
    pub const fn covers_oceans(&self) -> bool {
        self.covers_oceans
    }

    /// Boundary polygon `id`.
    pub fn polygon(&self, id: u32) -> PolygonView<'_> {
        self.boundaries.view(id as usize)
    }

    /// Bounding box of boundary polygon `id`.
    pub fn bbox(&self, id: u32) -> Bbox {
        let id = id as usize;
        Bbox {
            xmin: self.xmin.get(id),
            ymin: self.ymin.get(id),
            xmax: self.xmax.get(id),
            ymax: self.ymax.get(id),
        }
    }

    /// Zone of boundary polygon `id`.
    pub fn zone_of(&self, id: u32) -> u16 {
        self.zone_ids.get(id as usize)
    }

    /// Holes carved out of boundary polygon `id` (often none).
    pub fn holes_of(
        &self,
        id: u32,
    ) -> impl Iterator<Item = PolygonView<'_>> + '_ {
        let (first, count) = self.hole_registry[id as usize];
        (first..first + count).map(|hole| self.holes.view(hole as usize))
    }

    /// Boundary polygon ids of `zone`, largest polygon first.
    pub fn polygons_of_zone(&self, zone: u16) -> Range<u32> {
        let zone = usize::from(zone);
        self.zone_positions.get(zone)..self.zone_positions.get(zone + 1)
    }

    /// Name of `zone`.
    pub fn zone_name(&self, zone: u16) -> &str {
        &self.names[usize::from(zone)]
    }

    /// Id of the zone called `name`.
    pub fn zone_id(&self, name: &str) -> Option<u16> {
        self.ids_by_name.get(name).copied()
    }

    /// The zone name table, in id order.
    pub fn zone_names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
#[path = "./polygon_tests.rs"]
mod tests;
