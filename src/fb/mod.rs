//! Generated FlatBuffers accessors for the on-disk schemas.
//!
//! Produced by `flatc --rust` from the schema files under `schemas/`;
//! regenerate with `flatc --rust -o src/fb schemas/coordinates.fbs
//! schemas/shortcuts.fbs`. The dataset compiler uses the builder half of
//! this module, the engine only the verified readers.

#[allow(
    dead_code,
    unused_imports,
    unsafe_code,
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::undocumented_unsafe_blocks
)]
mod coordinates_generated;
#[allow(
    dead_code,
    unused_imports,
    unsafe_code,
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::undocumented_unsafe_blocks
)]
mod shortcuts_generated;

pub use coordinates_generated::{
    finish_polygon_collection_buffer, root_as_polygon_collection, Polygon,
    PolygonArgs, PolygonCollection, PolygonCollectionArgs,
};
pub use shortcuts_generated::{
    finish_shortcut_collection_buffer, root_as_shortcut_collection,
    ShortcutCollection, ShortcutCollectionArgs, ShortcutEntry,
    ShortcutEntryArgs,
};
