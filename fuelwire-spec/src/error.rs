//! # Error Types for the wire primitives

use thiserror::Error;

/// Stable classification of every failure raised by the workspace.
///
/// Transport layers branch on this instead of matching display strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A value could not be represented in its declared ABI type
    EncodeError,
    /// Not enough bytes, or a slice of the wrong length
    DecodeError,
    /// Receipt tag outside the known set
    InvalidReceiptType,
    /// An offset read from a program image points past its end
    BytecodeBounds,
    /// Synthesized code does not fit its operand widths
    InstructionOverflow,
    /// Malformed textual input (hex, decimal) or unknown instruction bytes
    InvalidData,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EncodeError => "encode-error",
            ErrorCode::DecodeError => "decode-error",
            ErrorCode::InvalidReceiptType => "invalid-receipt-type",
            ErrorCode::BytecodeBounds => "bytecode-bounds",
            ErrorCode::InstructionOverflow => "instruction-overflow",
            ErrorCode::InvalidData => "invalid-data",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Invalid byte length: expected {expected} bytes, found {found} bytes")]
    InvalidLength { expected: usize, found: usize },

    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),

    #[error("Invalid register id: {0} (valid range: 0-63)")]
    InvalidRegister(u8),

    #[error("Immediate value {value} does not fit in {bits} bits")]
    ImmediateOverflow { value: u64, bits: u32 },
}

impl SpecError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SpecError::InvalidLength { .. } => ErrorCode::DecodeError,
            SpecError::ImmediateOverflow { .. } => ErrorCode::InstructionOverflow,
            SpecError::InvalidHex(_)
            | SpecError::InvalidOpcode(_)
            | SpecError::InvalidRegister(_) => ErrorCode::InvalidData,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
