//! Dataset file access.
//!
//! One directory holds one dataset; file names are fixed. Every file is
//! opened either memory-mapped (the default: small resident set, first
//! touch may page-fault) or fully read into an owned buffer (in-memory
//! mode: larger resident set, no fault during queries). The query code
//! path is identical for both.

pub(crate) mod npy;

use crate::error::LoadError;
use log::debug;
use memmap2::Mmap;
use std::{
    collections::HashMap,
    fs,
    fs::File,
    ops::Deref,
    path::{Path, PathBuf},
};

/// Zone id → name table, one UTF-8 name per LF-terminated line.
pub(crate) const TIMEZONE_NAMES: &str = "timezone_names.txt";
/// Per-boundary-polygon zone id, `u8` or `u16`.
pub(crate) const ZONE_IDS: &str = "zone_ids.npy";
/// Prefix sums: polygons of zone `z` live in `[pos[z], pos[z + 1])`.
pub(crate) const ZONE_POSITIONS: &str = "zone_positions.npy";
/// Per-boundary-polygon bounding box columns, scaled integers.
pub(crate) const BBOX_XMIN: &str = "xmin.npy";
pub(crate) const BBOX_XMAX: &str = "xmax.npy";
pub(crate) const BBOX_YMIN: &str = "ymin.npy";
pub(crate) const BBOX_YMAX: &str = "ymax.npy";
/// Boundary rings, FlatBuffers (`schemas/coordinates.fbs`).
pub(crate) const BOUNDARIES: &str = "boundaries/coordinates.fbs";
/// Hole rings, same schema as the boundaries.
pub(crate) const HOLES: &str = "holes/coordinates.fbs";
/// JSON mapping `outer id → [first hole id, count]`.
pub(crate) const HOLE_REGISTRY: &str = "hole_registry.json";
/// Shortcut index, FlatBuffers (`schemas/shortcuts.fbs`); the suffix
/// mirrors the dataset's zone-id width.
pub(crate) const SHORTCUTS_U8: &str = "hybrid_shortcuts_u8.fbs";
pub(crate) const SHORTCUTS_U16: &str = "hybrid_shortcuts_u16.fbs";

/// How dataset files are brought into the address space.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum LoadMode {
    /// Memory-map every file.
    #[default]
    Mapped,
    /// Read every file into an owned buffer up front.
    InMemory,
}

/// Bytes of one dataset file, mapped or owned.
#[derive(Debug)]
pub(crate) enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Backing {
    /// Brings a dataset file into the address space.
    pub fn open(path: &Path, mode: LoadMode) -> Result<Self, LoadError> {
        let backing = match mode {
            LoadMode::Mapped => {
                let file = File::open(path)
                    .map_err(|source| LoadError::io(path, source))?;
                #[allow(unsafe_code)]
                // SAFETY: dataset files are immutable deployment artefacts;
                // nothing rewrites or truncates them while the engine is
                // alive (per the read-only lifecycle contract).
                let map = unsafe { Mmap::map(&file) }
                    .map_err(|source| LoadError::io(path, source))?;
                Self::Mapped(map)
            }
            LoadMode::InMemory => Self::Owned(
                fs::read(path).map_err(|source| LoadError::io(path, source))?,
            ),
        };
        debug!("loaded {} ({} bytes)", path.display(), backing.len());

        Ok(backing)
    }
}

impl Deref for Backing {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        match *self {
            Self::Mapped(ref map) => map,
            Self::Owned(ref bytes) => bytes,
        }
    }
}

/// Resolves a fixed file name inside the dataset directory.
pub(crate) fn file(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Reads and densifies `hole_registry.json`.
///
/// The on-disk registry is JSON with string keys (an artefact of the
/// compiler's serializer); at load time it becomes a dense
/// `Vec<(first_hole_id, count)>` indexed by boundary polygon id, `(0, 0)`
/// for polygons without holes.
pub(crate) fn read_hole_registry(
    path: &Path,
    polygon_count: usize,
    hole_count: usize,
) -> Result<Vec<(u32, u32)>, LoadError> {
    let raw = fs::read(path).map_err(|source| LoadError::io(path, source))?;
    let sparse: HashMap<String, (u32, u32)> = serde_json::from_slice(&raw)
        .map_err(|err| LoadError::format(path, err.to_string()))?;

    let mut dense = vec![(0_u32, 0_u32); polygon_count];
    for (key, (first, count)) in sparse {
        let outer: usize = key.parse().map_err(|_| {
            LoadError::format(path, format!("non-numeric outer id {key:?}"))
        })?;
        if outer >= polygon_count {
            return Err(LoadError::corrupt(
                path,
                format!("outer id {outer} out of range ({polygon_count} polygons)"),
            ));
        }
        if count > 0 && first as usize + count as usize > hole_count {
            return Err(LoadError::corrupt(
                path,
                format!(
                    "hole range {first}+{count} out of range ({hole_count} holes)"
                ),
            ));
        }
        dense[outer] = (first, count);
    }

    Ok(dense)
}

#[cfg(test)]
#[path = "./dataset_tests.rs"]
mod tests;
