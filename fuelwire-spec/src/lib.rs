//! # Fuel VM Wire Primitives
//!
//! Byte-exact building blocks shared by the rest of the workspace.
//!
//! ## Key Features
//! - 32-byte identifiers (`Bytes32`) with `0x`-prefixed hex text form
//! - 6-bit register ids with the VM's reserved register table
//! - The instruction subset used by loader bytecode, encoded as 4-byte words
//! - SHA-256 hashing for content identifiers, message ids and asset ids
//!
//! ## Program Image Header
//!
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────────────────
//! 0x08    8     data section offset (big-endian)
//! 0x10    8     configurable section offset (big-endian)
//! ```

pub mod bytes;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod instruction;
pub mod opcode;
pub mod register;

pub use bytes::{decode_hex, Bytes32};
pub use error::{ErrorCode, Result, SpecError};
pub use hash::{sha256, Hasher};
pub use instruction::{Imm06, Imm12, Instruction};
pub use opcode::Opcode;
pub use register::RegId;

/// Length of a VM word, in bytes
pub const WORD_SIZE: usize = 8;

/// Length of an encoded instruction, in bytes.
///
/// Jump targets are expressed in instructions, so the VM multiplies them by this value.
pub const INSTRUCTION_SIZE: usize = 4;

/// Length of a blob identifier, in bytes
pub const BLOB_ID_SIZE: usize = Bytes32::LEN;

/// Byte position of the data section offset inside a program image
pub const DATA_OFFSET_INDEX: usize = 8;

/// Byte position of the configurable section offset inside a program image
pub const CONFIGURABLE_OFFSET_INDEX: usize = 16;

/// Largest integer a double-precision float represents without loss (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// VM word
pub type Word = u64;
