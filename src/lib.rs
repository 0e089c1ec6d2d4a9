//! Offline IANA timezone lookup for WGS84 coordinates.
//!
//! `tzf` answers the question "which timezone contains the coordinate
//! `(longitude, latitude)`?" entirely offline: no network, no database,
//! only a precomputed dataset of timezone boundary multipolygons and a
//! hybrid [H3] resolution-3 shortcut index over them.
//!
//! Most shortcut cells resolve to a single zone, so the typical query is
//! one hash lookup; the rest walk a short, pre-ordered candidate list
//! with bounding-box rejection and an integer ray-cast, stopping as soon
//! as the remaining candidates collapse to one zone.
//!
//! ```no_run
//! let finder = tzf::TimezoneFinder::new("/var/lib/tzf/dataset")?;
//!
//! assert_eq!(finder.timezone_at(13.358, 52.5061)?, Some("Europe/Berlin"));
//! assert_eq!(finder.timezone_at_land(0.0, 0.0)?, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A dataset is a directory of files produced by the offline compiler:
//! the zone name table, per-polygon zone ids and bounding boxes (NumPy
//! arrays), boundary and hole rings (FlatBuffers, see `schemas/`), the
//! hole registry and the shortcut index. Files are memory-mapped by
//! default; [`TimezoneFinder::in_memory`] reads them up front instead.
//!
//! [H3]: https://h3geo.org/

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_lifetimes
)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // "It requires the user to type the module name twice."
    // => not true here since internal modules are hidden from the users.
    clippy::module_name_repetitions,
    // Usually yes, but not really applicable for most literals in this crate.
    clippy::unreadable_literal,
    // Scaled-integer geometry: every cast is bounded by construction.
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]

// }}}

mod coord;
mod dataset;
pub mod error;
pub mod fb;
mod finder;
mod geometry;
mod polygon;
mod shortcut;

pub use finder::{TimezoneFinder, ZoneRef};
pub use geometry::{Ring, ZoneGeometry, ZonePolygon};
