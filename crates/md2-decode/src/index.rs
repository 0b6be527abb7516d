//! Validated normal indices.

use glam::Vec3;

use crate::error::{DecodeError, DecodeResult};
use crate::normals::normal_vector;

/// An index known to address an entry of [`NORMALS`](crate::normals::NORMALS).
///
/// Use this instead of a raw `u8` when a fallback lookup must be told apart
/// from a real entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NormalIndex(u8);

impl NormalIndex {
    /// Last valid index.
    pub const MAX: Self = Self(161);

    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX.0 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The table entry at this index.
    #[must_use]
    pub fn vector(self) -> Vec3 {
        normal_vector(self.0)
    }

    /// All valid indices in ascending order.
    #[must_use]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<u8> for NormalIndex {
    type Error = DecodeError;

    fn try_from(index: u8) -> DecodeResult<Self> {
        Self::new(index).ok_or(DecodeError::NormalIndexOutOfRange { index })
    }
}

impl From<NormalIndex> for u8 {
    fn from(index: NormalIndex) -> Self {
        index.0
    }
}

impl From<NormalIndex> for Vec3 {
    fn from(index: NormalIndex) -> Self {
        index.vector()
    }
}
