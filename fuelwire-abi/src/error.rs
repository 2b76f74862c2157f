//! ABI coder errors

use crate::input::ValueError;
use fuelwire_spec::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("Invalid {type_name}: {source}")]
    Encode {
        type_name: String,
        #[source]
        source: ValueError,
    },

    #[error("Invalid {type_name} data size: expected {expected} bytes, found {available} bytes")]
    Decode {
        type_name: String,
        expected: usize,
        available: usize,
    },

    /// Bytes are present but do not form a valid value of the type
    #[error("Invalid {type_name} data at offset {offset}: {reason}")]
    InvalidValue {
        type_name: String,
        offset: usize,
        reason: String,
    },

    #[error("Unknown ABI type: {0}")]
    UnknownType(String),
}

impl AbiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AbiError::Encode { .. } => ErrorCode::EncodeError,
            AbiError::Decode { .. } | AbiError::InvalidValue { .. } => ErrorCode::DecodeError,
            AbiError::UnknownType(_) => ErrorCode::InvalidData,
        }
    }
}

pub type Result<T> = std::result::Result<T, AbiError>;
