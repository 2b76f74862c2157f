//! Loader errors

use fuelwire_abi::AbiError;
use fuelwire_spec::{ErrorCode, SpecError};
use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("Bytecode offset is out of bounds: offset {offset}, bytecode length {length}")]
    BytecodeBounds { offset: usize, length: usize },

    #[error("Bytecode offset {0} does not fit in the address space")]
    OffsetTooLarge(BigUint),

    #[error("Too many loader instructions: {count} exceeds u16::MAX")]
    InstructionOverflow { count: usize },
}

impl LoaderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoaderError::Abi(e) => e.code(),
            LoaderError::Spec(e) => e.code(),
            LoaderError::BytecodeBounds { .. } | LoaderError::OffsetTooLarge(_) => {
                ErrorCode::BytecodeBounds
            }
            LoaderError::InstructionOverflow { .. } => ErrorCode::InstructionOverflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
