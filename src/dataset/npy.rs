//! Typed columns over NumPy `.npy` files.
//!
//! Header validation and data location are delegated to `ndarray-npy`
//! (dtype, shape and alignment checks); the column then remembers a plain
//! byte offset into its own backing and decodes little-endian values on
//! access. That keeps the column self-owning — no view borrowing from a
//! sibling field — while staying zero-copy.

use super::{Backing, LoadMode};
use crate::error::LoadError;
use ndarray::ArrayView1;
use ndarray_npy::{ViewNpyError, ViewNpyExt};
use std::{marker::PhantomData, path::Path};

/// Element types storable in a dataset column.
pub(crate) trait Scalar: Copy {
    /// Element width in bytes.
    const WIDTH: usize;

    /// Decodes one element from its little-endian bytes.
    fn read_le(bytes: &[u8]) -> Self;

    /// Validates the npy header for this element type and returns the
    /// data section as `(byte offset, element count)`.
    fn locate(buf: &[u8]) -> Result<(usize, usize), ViewNpyError>;
}

macro_rules! scalar_impl {
    ($ty:ty) => {
        impl Scalar for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                let mut le = [0_u8; std::mem::size_of::<$ty>()];
                le.copy_from_slice(bytes);
                Self::from_le_bytes(le)
            }

            fn locate(buf: &[u8]) -> Result<(usize, usize), ViewNpyError> {
                let view = ArrayView1::<$ty>::view_npy(buf)?;
                let offset = view.as_ptr() as usize - buf.as_ptr() as usize;
                Ok((offset, view.len()))
            }
        }
    };
}

scalar_impl!(u8);
scalar_impl!(u16);
scalar_impl!(u32);
scalar_impl!(i32);

/// One `.npy` file holding a 1-D array of `T`.
#[derive(Debug)]
pub(crate) struct NpyColumn<T> {
    backing: Backing,
    offset: usize,
    len: usize,
    marker: PhantomData<T>,
}

impl<T: Scalar> NpyColumn<T> {
    /// Opens and validates a column file.
    pub fn open(path: &Path, mode: LoadMode) -> Result<Self, LoadError> {
        let backing = Backing::open(path, mode)?;
        let (offset, len) = T::locate(&backing)
            .map_err(|err| LoadError::format(path, err.to_string()))?;

        Ok(Self {
            backing,
            offset,
            len,
            marker: PhantomData,
        })
    }

    /// Number of elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Element at `index`. Panics past the end.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        assert!(index < self.len, "column index out of range");
        let start = self.offset + index * T::WIDTH;
        T::read_le(&self.backing[start..start + T::WIDTH])
    }
}

/// The zone-id column, whose width is chosen at dataset build time from
/// the number of zones.
#[derive(Debug)]
pub(crate) enum ZoneIdColumn {
    U8(NpyColumn<u8>),
    U16(NpyColumn<u16>),
}

impl ZoneIdColumn {
    /// Opens `zone_ids.npy`, detecting the stored width.
    pub fn open(path: &Path, mode: LoadMode) -> Result<Self, LoadError> {
        match NpyColumn::<u8>::open(path, mode) {
            Ok(column) => Ok(Self::U8(column)),
            Err(LoadError::Format { .. }) => {
                NpyColumn::<u16>::open(path, mode).map(Self::U16)
            }
            Err(err) => Err(err),
        }
    }

    /// Number of elements.
    pub const fn len(&self) -> usize {
        match *self {
            Self::U8(ref column) => column.len(),
            Self::U16(ref column) => column.len(),
        }
    }

    /// Zone id at `index`, widened to `u16`.
    #[inline]
    pub fn get(&self, index: usize) -> u16 {
        match *self {
            Self::U8(ref column) => u16::from(column.get(index)),
            Self::U16(ref column) => column.get(index),
        }
    }
}
