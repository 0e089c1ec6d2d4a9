//! The hybrid H3 shortcut index.
//!
//! One entry per resolution-3 cell. A cell either resolves to a single
//! zone outright or carries the ordered list of boundary polygons worth
//! testing; roughly three quarters of all cells are of the first kind,
//! which is what makes the average lookup cheap.

use crate::coord::SHORTCUT_RESOLUTION;
use crate::dataset::{self, Backing, LoadMode};
use crate::error::LoadError;
use crate::fb;
use ahash::AHashMap;
use h3o::CellIndex;
use log::debug;
use std::path::Path;

/// Payload of one shortcut cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Shortcut<'a> {
    /// Every boundary polygon intersecting the cell belongs to this zone.
    Unique(u16),
    /// Candidate boundary polygons, in test order.
    Candidates(&'a [u32]),
}

#[derive(Clone, Copy, Debug)]
enum Payload {
    Unique(u16),
    Candidates { first: u32, len: u32 },
}

/// Map from resolution-3 cell id to shortcut payload.
///
/// The on-disk entries are sorted by cell id; they are folded into a hash
/// table at load time so a query never walks the FlatBuffer, and all
/// candidate lists share a single arena.
#[derive(Debug)]
pub(crate) struct ShortcutIndex {
    cells: AHashMap<u64, Payload>,
    candidates: Vec<u32>,
}

impl ShortcutIndex {
    /// Loads the shortcut file of the dataset, whichever zone-id width it
    /// was built with.
    pub fn open(
        dir: &Path,
        mode: LoadMode,
        zone_count: usize,
        polygon_count: usize,
    ) -> Result<Self, LoadError> {
        let narrow = dataset::file(dir, dataset::SHORTCUTS_U8);
        let path = if narrow.is_file() {
            narrow
        } else {
            dataset::file(dir, dataset::SHORTCUTS_U16)
        };
        let backing = Backing::open(&path, mode)?;
        let collection = fb::root_as_shortcut_collection(&backing)
            .map_err(|err| LoadError::format(&path, err.to_string()))?;
        let entries = collection.entries().ok_or_else(|| {
            LoadError::format(&path, "missing entry vector".to_owned())
        })?;

        let mut cells = AHashMap::with_capacity(entries.len());
        let mut candidates = Vec::new();
        for entry in entries {
            let cell = CellIndex::try_from(entry.h3_id()).map_err(|err| {
                LoadError::corrupt(&path, format!("bad cell id: {err}"))
            })?;
            if cell.resolution() != SHORTCUT_RESOLUTION {
                return Err(LoadError::corrupt(
                    &path,
                    format!("cell {cell} is not at the index resolution"),
                ));
            }

            let payload = match entry.poly_ids() {
                Some(ids) if !ids.is_empty() => {
                    let first = candidates.len() as u32;
                    for id in ids {
                        if id as usize >= polygon_count {
                            return Err(LoadError::corrupt(
                                &path,
                                format!("cell {cell} references polygon {id}"),
                            ));
                        }
                        candidates.push(id);
                    }
                    Payload::Candidates {
                        first,
                        len: ids.len() as u32,
                    }
                }
                _ => {
                    let zone = entry.zone_id();
                    if usize::from(zone) >= zone_count {
                        return Err(LoadError::corrupt(
                            &path,
                            format!("cell {cell} references zone {zone}"),
                        ));
                    }
                    Payload::Unique(zone)
                }
            };
            if cells.insert(u64::from(cell), payload).is_some() {
                return Err(LoadError::corrupt(
                    &path,
                    format!("duplicate entry for cell {cell}"),
                ));
            }
        }
        debug!(
            "shortcut index at {}: {} cells, {} candidate slots",
            path.display(),
            cells.len(),
            candidates.len(),
        );

        Ok(Self { cells, candidates })
    }

    /// Payload of `cell`, if the dataset covers it.
    pub fn lookup(&self, cell: CellIndex) -> Option<Shortcut<'_>> {
        self.cells.get(&u64::from(cell)).map(|payload| match *payload {
            Payload::Unique(zone) => Shortcut::Unique(zone),
            Payload::Candidates { first, len } => Shortcut::Candidates(
                &self.candidates[first as usize..first as usize + len as usize],
            ),
        })
    }
}

#[cfg(test)]
#[path = "./shortcut_tests.rs"]
mod tests;
