//! Provider errors

use fuelwire_abi::AbiError;
use fuelwire_spec::{ErrorCode, SpecError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Invalid receipt type: {0}.")]
    InvalidReceiptType(String),

    #[error("Invalid hex in `{field}`: {value:?}")]
    InvalidHex { field: &'static str, value: String },

    #[error("Invalid number in `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl ProviderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProviderError::InvalidReceiptType(_) => ErrorCode::InvalidReceiptType,
            ProviderError::InvalidHex { .. } | ProviderError::InvalidNumber { .. } => {
                ErrorCode::InvalidData
            }
            ProviderError::Abi(e) => e.code(),
            ProviderError::Spec(e) => e.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
