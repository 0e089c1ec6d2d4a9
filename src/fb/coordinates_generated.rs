// automatically @generated by the FlatBuffers compiler, do not modify


// @generated

use core::mem;
use core::cmp::Ordering;

extern crate flatbuffers;
use self::flatbuffers::{EndianScalar, Follow};

pub enum PolygonOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Polygon<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Polygon<'a> {
  type Inner = Polygon<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Polygon<'a> {
  pub const VT_X: flatbuffers::VOffsetT = 4;
  pub const VT_Y: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Polygon { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args PolygonArgs<'args>
  ) -> flatbuffers::WIPOffset<Polygon<'bldr>> {
    let mut builder = PolygonBuilder::new(_fbb);
    if let Some(x) = args.y { builder.add_y(x); }
    if let Some(x) = args.x { builder.add_x(x); }
    builder.finish()
  }


  #[inline]
  pub fn x(&self) -> Option<flatbuffers::Vector<'a, i32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i32>>>(Polygon::VT_X, None)}
  }
  #[inline]
  pub fn y(&self) -> Option<flatbuffers::Vector<'a, i32>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i32>>>(Polygon::VT_Y, None)}
  }
}

impl flatbuffers::Verifiable for Polygon<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i32>>>("x", Self::VT_X, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i32>>>("y", Self::VT_Y, false)?
     .finish();
    Ok(())
  }
}
pub struct PolygonArgs<'a> {
    pub x: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i32>>>,
    pub y: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i32>>>,
}
impl<'a> Default for PolygonArgs<'a> {
  #[inline]
  fn default() -> Self {
    PolygonArgs {
      x: None,
      y: None,
    }
  }
}

pub struct PolygonBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> PolygonBuilder<'a, 'b> {
  #[inline]
  pub fn add_x(&mut self, x: flatbuffers::WIPOffset<flatbuffers::Vector<'b , i32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Polygon::VT_X, x);
  }
  #[inline]
  pub fn add_y(&mut self, y: flatbuffers::WIPOffset<flatbuffers::Vector<'b , i32>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Polygon::VT_Y, y);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> PolygonBuilder<'a, 'b> {
    let start = _fbb.start_table();
    PolygonBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Polygon<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Polygon<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Polygon");
      ds.field("x", &self.x());
      ds.field("y", &self.y());
      ds.finish()
  }
}
pub enum PolygonCollectionOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PolygonCollection<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PolygonCollection<'a> {
  type Inner = PolygonCollection<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> PolygonCollection<'a> {
  pub const VT_POLYGONS: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PolygonCollection { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args PolygonCollectionArgs<'args>
  ) -> flatbuffers::WIPOffset<PolygonCollection<'bldr>> {
    let mut builder = PolygonCollectionBuilder::new(_fbb);
    if let Some(x) = args.polygons { builder.add_polygons(x); }
    builder.finish()
  }


  #[inline]
  pub fn polygons(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Polygon<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Polygon>>>>(PolygonCollection::VT_POLYGONS, None)}
  }
}

impl flatbuffers::Verifiable for PolygonCollection<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Polygon>>>>("polygons", Self::VT_POLYGONS, false)?
     .finish();
    Ok(())
  }
}
pub struct PolygonCollectionArgs<'a> {
    pub polygons: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Polygon<'a>>>>>,
}
impl<'a> Default for PolygonCollectionArgs<'a> {
  #[inline]
  fn default() -> Self {
    PolygonCollectionArgs {
      polygons: None,
    }
  }
}

pub struct PolygonCollectionBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> PolygonCollectionBuilder<'a, 'b> {
  #[inline]
  pub fn add_polygons(&mut self, polygons: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<Polygon<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PolygonCollection::VT_POLYGONS, polygons);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> PolygonCollectionBuilder<'a, 'b> {
    let start = _fbb.start_table();
    PolygonCollectionBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PolygonCollection<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PolygonCollection<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PolygonCollection");
      ds.field("polygons", &self.polygons());
      ds.finish()
  }
}
#[inline]
/// Verifies that a buffer of bytes contains a `PolygonCollection`
/// and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_polygon_collection_unchecked`.
pub fn root_as_polygon_collection(buf: &[u8]) -> Result<PolygonCollection, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root::<PolygonCollection>(buf)
}
#[inline]
/// Verifies that a buffer of bytes contains a size prefixed
/// `PolygonCollection` and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `size_prefixed_root_as_polygon_collection_unchecked`.
pub fn size_prefixed_root_as_polygon_collection(buf: &[u8]) -> Result<PolygonCollection, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::size_prefixed_root::<PolygonCollection>(buf)
}
#[inline]
/// Verifies, with the given options, that a buffer of bytes
/// contains a `PolygonCollection` and returns it.
/// Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_polygon_collection_unchecked`.
pub fn root_as_polygon_collection_with_opts<'b, 'o>(
  opts: &'o flatbuffers::VerifierOptions,
  buf: &'b [u8],
) -> Result<PolygonCollection<'b>, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root_with_opts::<PolygonCollection<'b>>(opts, buf)
}
#[inline]
/// Verifies, with the given verifier options, that a buffer of
/// bytes contains a size prefixed `PolygonCollection` and returns
/// it. Note that verification is still experimental and may not
/// catch every error, or be maximally performant. For the
/// previous, unchecked, behavior use
/// `root_as_polygon_collection_unchecked`.
pub fn size_prefixed_root_as_polygon_collection_with_opts<'b, 'o>(
  opts: &'o flatbuffers::VerifierOptions,
  buf: &'b [u8],
) -> Result<PolygonCollection<'b>, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::size_prefixed_root_with_opts::<PolygonCollection<'b>>(opts, buf)
}
#[inline]
/// Assumes, without verification, that a buffer of bytes contains a PolygonCollection and returns it.
/// # Safety
/// Callers must trust the given bytes do indeed contain a valid `PolygonCollection`.
pub unsafe fn root_as_polygon_collection_unchecked(buf: &[u8]) -> PolygonCollection {
  flatbuffers::root_unchecked::<PolygonCollection>(buf)
}
#[inline]
/// Assumes, without verification, that a buffer of bytes contains a size prefixed PolygonCollection and returns it.
/// # Safety
/// Callers must trust the given bytes do indeed contain a valid size prefixed `PolygonCollection`.
pub unsafe fn size_prefixed_root_as_polygon_collection_unchecked(buf: &[u8]) -> PolygonCollection {
  flatbuffers::size_prefixed_root_unchecked::<PolygonCollection>(buf)
}
#[inline]
pub fn finish_polygon_collection_buffer<'a, 'b>(
    fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>,
    root: flatbuffers::WIPOffset<PolygonCollection<'a>>) {
  fbb.finish(root, None);
}

#[inline]
pub fn finish_size_prefixed_polygon_collection_buffer<'a, 'b>(fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>, root: flatbuffers::WIPOffset<PolygonCollection<'a>>) {
  fbb.finish_size_prefixed(root, None);
}
