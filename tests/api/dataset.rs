//! Synthetic dataset writer.
//!
//! Produces the exact on-disk layout the engine expects, from a compact
//! description of zones, polygons and shortcut entries. Zone ids are
//! written in the narrow (`u8`) width; the wide variant is covered by the
//! unit tests of the column readers.

use flatbuffers::FlatBufferBuilder;
use h3o::CellIndex;
use ndarray::Array1;
use ndarray_npy::WriteNpyExt;
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;
use tzf::fb;

/// One boundary polygon: a ring in degrees with optional holes.
pub struct PolygonSpec {
    pub boundary: Vec<(f64, f64)>,
    pub holes: Vec<Vec<(f64, f64)>>,
}

impl PolygonSpec {
    pub fn solid(boundary: &[(f64, f64)]) -> Self {
        Self {
            boundary: boundary.to_vec(),
            holes: Vec::new(),
        }
    }

    pub fn with_holes(
        boundary: &[(f64, f64)],
        holes: &[&[(f64, f64)]],
    ) -> Self {
        Self {
            boundary: boundary.to_vec(),
            holes: holes.iter().map(|hole| hole.to_vec()).collect(),
        }
    }
}

/// One zone and its polygons, in storage order.
pub struct ZoneSpec {
    pub name: &'static str,
    pub polygons: Vec<PolygonSpec>,
}

/// Payload of one shortcut entry.
pub enum Shortcut {
    Unique(u16),
    Candidates(Vec<u32>),
}

fn fixed(degrees: f64) -> i32 {
    (degrees * 1e7).round() as i32
}

fn write_npy<T: ndarray_npy::WritableElement>(path: &Path, values: Vec<T>) {
    let file = File::create(path).expect("create npy");
    Array1::from(values).write_npy(file).expect("write npy");
}

fn write_rings(path: &Path, rings: &[&[(f64, f64)]]) {
    let mut fbb = FlatBufferBuilder::new();
    let offsets: Vec<_> = rings
        .iter()
        .map(|ring| {
            let xs: Vec<i32> =
                ring.iter().map(|&(lng, _)| fixed(lng)).collect();
            let ys: Vec<i32> =
                ring.iter().map(|&(_, lat)| fixed(lat)).collect();
            let x = fbb.create_vector(&xs);
            let y = fbb.create_vector(&ys);
            fb::Polygon::create(
                &mut fbb,
                &fb::PolygonArgs {
                    x: Some(x),
                    y: Some(y),
                },
            )
        })
        .collect();
    let polygons = fbb.create_vector(&offsets);
    let collection = fb::PolygonCollection::create(
        &mut fbb,
        &fb::PolygonCollectionArgs {
            polygons: Some(polygons),
        },
    );
    fb::finish_polygon_collection_buffer(&mut fbb, collection);
    fs::write(path, fbb.finished_data()).expect("write rings");
}

fn write_shortcuts(path: &Path, entries: &[(CellIndex, Shortcut)]) {
    let mut sorted: Vec<_> = entries
        .iter()
        .map(|(cell, shortcut)| (u64::from(*cell), shortcut))
        .collect();
    sorted.sort_by_key(|&(id, _)| id);

    let mut fbb = FlatBufferBuilder::new();
    let offsets: Vec<_> = sorted
        .iter()
        .map(|&(h3_id, shortcut)| {
            let (zone_id, poly_ids) = match *shortcut {
                Shortcut::Unique(zone) => (zone, None),
                Shortcut::Candidates(ref ids) => {
                    (0, Some(fbb.create_vector(ids)))
                }
            };
            fb::ShortcutEntry::create(
                &mut fbb,
                &fb::ShortcutEntryArgs {
                    h3_id,
                    zone_id,
                    poly_ids,
                },
            )
        })
        .collect();
    let entries = fbb.create_vector(&offsets);
    let collection = fb::ShortcutCollection::create(
        &mut fbb,
        &fb::ShortcutCollectionArgs {
            entries: Some(entries),
        },
    );
    fb::finish_shortcut_collection_buffer(&mut fbb, collection);
    fs::write(path, fbb.finished_data()).expect("write shortcuts");
}

/// Writes the complete dataset layout into `dir`.
pub fn write_dataset(
    dir: &Path,
    zones: &[ZoneSpec],
    shortcuts: &[(CellIndex, Shortcut)],
) {
    fs::create_dir_all(dir.join("boundaries")).expect("boundaries dir");
    fs::create_dir_all(dir.join("holes")).expect("holes dir");

    let mut names = String::new();
    let mut zone_ids: Vec<u8> = Vec::new();
    let mut zone_positions: Vec<u32> = vec![0];
    let mut boundaries: Vec<&[(f64, f64)]> = Vec::new();
    let mut holes: Vec<&[(f64, f64)]> = Vec::new();
    let mut registry: HashMap<String, (u32, u32)> = HashMap::new();
    let (mut xmin, mut xmax) = (Vec::new(), Vec::new());
    let (mut ymin, mut ymax) = (Vec::new(), Vec::new());

    for (zone, spec) in zones.iter().enumerate() {
        names.push_str(spec.name);
        names.push('\n');
        for polygon in &spec.polygons {
            let id = boundaries.len();
            boundaries.push(&polygon.boundary);
            zone_ids.push(zone as u8);

            let lngs = polygon.boundary.iter().map(|&(lng, _)| fixed(lng));
            let lats = polygon.boundary.iter().map(|&(_, lat)| fixed(lat));
            xmin.push(lngs.clone().min().expect("vertices"));
            xmax.push(lngs.max().expect("vertices"));
            ymin.push(lats.clone().min().expect("vertices"));
            ymax.push(lats.max().expect("vertices"));

            if !polygon.holes.is_empty() {
                registry.insert(
                    id.to_string(),
                    (holes.len() as u32, polygon.holes.len() as u32),
                );
                for hole in &polygon.holes {
                    holes.push(hole);
                }
            }
        }
        zone_positions.push(boundaries.len() as u32);
    }

    fs::write(dir.join("timezone_names.txt"), names).expect("names");
    write_npy(&dir.join("zone_ids.npy"), zone_ids);
    write_npy(&dir.join("zone_positions.npy"), zone_positions);
    write_npy(&dir.join("xmin.npy"), xmin);
    write_npy(&dir.join("xmax.npy"), xmax);
    write_npy(&dir.join("ymin.npy"), ymin);
    write_npy(&dir.join("ymax.npy"), ymax);
    write_rings(&dir.join("boundaries/coordinates.fbs"), &boundaries);
    write_rings(&dir.join("holes/coordinates.fbs"), &holes);
    fs::write(
        dir.join("hole_registry.json"),
        serde_json::to_string(&registry).expect("registry json"),
    )
    .expect("registry");
    write_shortcuts(&dir.join("hybrid_shortcuts_u8.fbs"), shortcuts);
}
