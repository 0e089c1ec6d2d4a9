// automatically @generated by the FlatBuffers compiler, do not modify


// @generated

use core::mem;
use core::cmp::Ordering;

extern crate flatbuffers;
use self::flatbuffers::{EndianScalar, Follow};

pub enum ShortcutEntryOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct ShortcutEntry<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for ShortcutEntry<'a> {
  type Inner = ShortcutEntry<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> ShortcutEntry<'a> {
  pub const VT_H3_ID: flatbuffers::VOffsetT = 4;
  pub const VT_ZONE_ID: flatbuffers::VOffsetT = 6;
  pub const VT_POLY_IDS: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    ShortcutEntry { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args ShortcutEntryArgs<'args>
  ) -> flatbuffers::WIPOffset<ShortcutEntry<'bldr>> {
    let mut builder = ShortcutEntryBuilder::new(_fbb);
    builder.add_h3_id(args.h3_id);
    if let Some(x) = args.poly_ids { builder.add_poly_ids(x); }
    builder.add_zone_id(args.zone_id);
    builder.finish()
  }


  #[inline]
  pub fn h3_id(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(ShortcutEntry::VT_H3_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn zone_id(&self) -> u16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u16>(ShortcutEntry::VT_ZONE_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn poly_ids(&self) -> Option<flatbuffers::Vector<'a, u32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u32>>>(ShortcutEntry::VT_POLY_IDS, None)}
  }
}

impl flatbuffers::Verifiable for ShortcutEntry<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<u64>("h3_id", Self::VT_H3_ID, false)?
     .visit_field::<u16>("zone_id", Self::VT_ZONE_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u32>>>("poly_ids", Self::VT_POLY_IDS, false)?
     .finish();
    Ok(())
  }
}
pub struct ShortcutEntryArgs<'a> {
    pub h3_id: u64,
    pub zone_id: u16,
    pub poly_ids: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u32>>>,
}
impl<'a> Default for ShortcutEntryArgs<'a> {
  #[inline]
  fn default() -> Self {
    ShortcutEntryArgs {
      h3_id: 0,
      zone_id: 0,
      poly_ids: None,
    }
  }
}

pub struct ShortcutEntryBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> ShortcutEntryBuilder<'a, 'b> {
  #[inline]
  pub fn add_h3_id(&mut self, h3_id: u64) {
    self.fbb_.push_slot::<u64>(ShortcutEntry::VT_H3_ID, h3_id, 0);
  }
  #[inline]
  pub fn add_zone_id(&mut self, zone_id: u16) {
    self.fbb_.push_slot::<u16>(ShortcutEntry::VT_ZONE_ID, zone_id, 0);
  }
  #[inline]
  pub fn add_poly_ids(&mut self, poly_ids: flatbuffers::WIPOffset<flatbuffers::Vector<'b , u32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(ShortcutEntry::VT_POLY_IDS, poly_ids);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> ShortcutEntryBuilder<'a, 'b> {
    let start = _fbb.start_table();
    ShortcutEntryBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<ShortcutEntry<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for ShortcutEntry<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("ShortcutEntry");
      ds.field("h3_id", &self.h3_id());
      ds.field("zone_id", &self.zone_id());
      ds.field("poly_ids", &self.poly_ids());
      ds.finish()
  }
}
pub enum ShortcutCollectionOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct ShortcutCollection<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for ShortcutCollection<'a> {
  type Inner = ShortcutCollection<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> ShortcutCollection<'a> {
  pub const VT_ENTRIES: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    ShortcutCollection { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args ShortcutCollectionArgs<'args>
  ) -> flatbuffers::WIPOffset<ShortcutCollection<'bldr>> {
    let mut builder = ShortcutCollectionBuilder::new(_fbb);
    if let Some(x) = args.entries { builder.add_entries(x); }
    builder.finish()
  }


  #[inline]
  pub fn entries(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<ShortcutEntry<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<ShortcutEntry>>>>(ShortcutCollection::VT_ENTRIES, None)}
  }
}

impl flatbuffers::Verifiable for ShortcutCollection<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<ShortcutEntry>>>>("entries", Self::VT_ENTRIES, false)?
     .finish();
    Ok(())
  }
}
pub struct ShortcutCollectionArgs<'a> {
    pub entries: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<ShortcutEntry<'a>>>>>,
}
impl<'a> Default for ShortcutCollectionArgs<'a> {
  #[inline]
  fn default() -> Self {
    ShortcutCollectionArgs {
      entries: None,
    }
  }
}

pub struct ShortcutCollectionBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> ShortcutCollectionBuilder<'a, 'b> {
  #[inline]
  pub fn add_entries(&mut self, entries: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<ShortcutEntry<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(ShortcutCollection::VT_ENTRIES, entries);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> ShortcutCollectionBuilder<'a, 'b> {
    let start = _fbb.start_table();
    ShortcutCollectionBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<ShortcutCollection<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for ShortcutCollection<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("ShortcutCollection");
      ds.field("entries", &self.entries());
      ds.finish()
  }
}
#[inline]
/// Verifies that a buffer of bytes contains a `ShortcutCollection`
/// and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_shortcut_collection_unchecked`.
pub fn root_as_shortcut_collection(buf: &[u8]) -> Result<ShortcutCollection, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root::<ShortcutCollection>(buf)
}
#[inline]
/// Verifies that a buffer of bytes contains a size prefixed
/// `ShortcutCollection` and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `size_prefixed_root_as_shortcut_collection_unchecked`.
pub fn size_prefixed_root_as_shortcut_collection(buf: &[u8]) -> Result<ShortcutCollection, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::size_prefixed_root::<ShortcutCollection>(buf)
}
#[inline]
/// Verifies, with the given options, that a buffer of bytes
/// contains a `ShortcutCollection` and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_shortcut_collection_unchecked`.
pub fn root_as_shortcut_collection_with_opts<'b, 'o>(
  opts: &'o flatbuffers::VerifierOptions,
  buf: &'b [u8],
) -> Result<ShortcutCollection<'b>, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root_with_opts::<ShortcutCollection<'b>>(opts, buf)
}
#[inline]
/// Verifies, with the given verifier options, that a buffer of
/// bytes contains a size prefixed `ShortcutCollection` and returns
/// it. Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_shortcut_collection_unchecked`.
pub fn size_prefixed_root_as_shortcut_collection_with_opts<'b, 'o>(
  opts: &'o flatbuffers::VerifierOptions,
  buf: &'b [u8],
) -> Result<ShortcutCollection<'b>, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::size_prefixed_root_with_opts::<ShortcutCollection<'b>>(opts, buf)
}
#[inline]
/// Assumes, without verification, that a buffer of bytes contains a ShortcutCollection and returns it.
/// # Safety
/// Callers must trust the given bytes do indeed contain a valid `ShortcutCollection`.
pub unsafe fn root_as_shortcut_collection_unchecked(buf: &[u8]) -> ShortcutCollection {
  flatbuffers::root_unchecked::<ShortcutCollection>(buf)
}
#[inline]
/// Assumes, without verification, that a buffer of bytes contains a size prefixed ShortcutCollection and returns it.
/// # Safety
/// Callers must trust the given bytes do indeed contain a valid size prefixed `ShortcutCollection`.
pub unsafe fn size_prefixed_root_as_shortcut_collection_unchecked(buf: &[u8]) -> ShortcutCollection {
  flatbuffers::size_prefixed_root_unchecked::<ShortcutCollection>(buf)
}
#[inline]
pub fn finish_shortcut_collection_buffer<'a, 'b>(
    fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>,
    root: flatbuffers::WIPOffset<ShortcutCollection<'a>>) {
  fbb.finish(root, None);
}

#[inline]
pub fn finish_size_prefixed_shortcut_collection_buffer<'a, 'b>(fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>, root: flatbuffers::WIPOffset<ShortcutCollection<'a>>) {
  fbb.finish_size_prefixed(root, None);
}
