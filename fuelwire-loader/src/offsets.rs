//! Section offsets stored in a program image header

use crate::error::{LoaderError, Result};
use fuelwire_abi::{BigNumberCoder, Coder};
use fuelwire_spec::{CONFIGURABLE_OFFSET_INDEX, DATA_OFFSET_INDEX};
use num_traits::ToPrimitive;

fn read_offset(image: &[u8], index: usize) -> Result<usize> {
    let (offset, _) = BigNumberCoder::u64().decode(image, index)?;
    offset.to_usize().ok_or(LoaderError::OffsetTooLarge(offset))
}

/// Start of the data section (big-endian word at byte 8)
pub fn read_data_offset(image: &[u8]) -> Result<usize> {
    read_offset(image, DATA_OFFSET_INDEX)
}

/// Start of the configurable section (big-endian word at byte 16)
pub fn read_configurable_offset(image: &[u8]) -> Result<usize> {
    read_offset(image, CONFIGURABLE_OFFSET_INDEX)
}

/// Fails if `offset` points past the end of the image
pub(crate) fn checked(image: &[u8], offset: usize) -> Result<usize> {
    if offset > image.len() {
        return Err(LoaderError::BytecodeBounds {
            offset,
            length: image.len(),
        });
    }
    Ok(offset)
}
