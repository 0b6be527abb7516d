//! Decode helpers for MD2 (Quake II) model data.
//!
//! This crate provides pure synchronous lookups used while unpacking MD2
//! frames. All data is immutable, so every function can be called from any
//! threading context without synchronization.
//!
//! # Key functions
//!
//! - [`get_normal_vector`]: Resolve a per-vertex normal index into a caller's vector
//! - [`normal_vector`]: Same lookup, returning the vector
//! - [`try_normal_vector`]: Lookup that reports out-of-range indices as `None`
//! - [`unpack_normals`]: Resolve a whole frame's normal indices at once
//!
//! Out-of-range indices resolve to [`FALLBACK_NORMAL`] (straight up) rather
//! than failing. Use [`NormalIndex`] where that substitution must be visible.

mod error;

pub mod index;
pub mod normals;

pub use error::{DecodeError, DecodeResult};
pub use index::NormalIndex;
pub use normals::{
    FALLBACK_NORMAL, NORMAL_COUNT, NORMALS, get_normal_vector, iter_normals, normal_vector,
    try_normal_vector, unpack_normals,
};
