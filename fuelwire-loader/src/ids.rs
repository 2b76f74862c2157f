//! Content identifiers of program images
//!
//! The content identifier hashes everything before the configurable section, so
//! overriding configurables never changes it. The legacy identifier hashes
//! everything before the data section and is what older blobs were keyed by.

use crate::error::Result;
use crate::offsets::{checked, read_configurable_offset, read_data_offset};
use fuelwire_spec::{sha256, Bytes32};

/// SHA-256 of `image[..configurable_offset]`
pub fn content_id(image: &[u8]) -> Result<Bytes32> {
    let offset = checked(image, read_configurable_offset(image)?)?;
    Ok(sha256(&image[..offset]))
}

/// SHA-256 of `image[..data_offset]`
pub fn legacy_id(image: &[u8]) -> Result<Bytes32> {
    let offset = checked(image, read_data_offset(image)?)?;
    Ok(sha256(&image[..offset]))
}
