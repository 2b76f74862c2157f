//! # The coder contract
//!
//! A coder turns one ABI type into its canonical bytes and back. Coders hold no
//! mutable state, so a single instance may be shared across threads.
//!
//! Decoding is `(buffer, offset) -> (value, next_offset)`; the buffer is only borrowed.

use crate::error::{AbiError, Result};

/// Number of bytes a coder produces or consumes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodedLength {
    /// Every value occupies exactly this many bytes
    Fixed(usize),
    /// Length depends on the value being encoded
    Dynamic,
}

impl EncodedLength {
    pub fn fixed(self) -> Option<usize> {
        match self {
            EncodedLength::Fixed(len) => Some(len),
            EncodedLength::Dynamic => None,
        }
    }
}

/// Encoder/decoder for one ABI type
pub trait Coder: Send + Sync {
    /// What callers hand to `encode`
    type Input: ?Sized;

    /// What `decode` produces
    type Output;

    /// Coder family, e.g. `"bigNumber"`
    fn name(&self) -> &'static str;

    /// Declared ABI type name, e.g. `"u64"`
    fn type_name(&self) -> &str;

    fn encoded_length(&self) -> EncodedLength;

    /// Encode `value`. Fixed-length coders return exactly `encoded_length` bytes.
    fn encode(&self, value: &Self::Input) -> Result<Vec<u8>>;

    /// Decode one value starting at `offset`, returning it with the offset just past it
    fn decode(&self, data: &[u8], offset: usize) -> Result<(Self::Output, usize)>;
}

/// Borrow exactly `len` bytes at `offset`, or fail naming the type and the shortfall.
///
/// An offset past the end of `data` fails, even for a zero-length read.
pub(crate) fn take<'a>(type_name: &str, data: &'a [u8], offset: usize, len: usize) -> Result<&'a [u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| AbiError::Decode {
            type_name: type_name.to_string(),
            expected: len,
            available: data.len().saturating_sub(offset),
        })
}
