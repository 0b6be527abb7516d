use thiserror::Error;

use crate::normals::NORMAL_COUNT;

/// Errors produced by the validating decode paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("normal index {index} is out of range (expected < {count})", count = NORMAL_COUNT)]
    NormalIndexOutOfRange { index: u8 },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
