//! Loader bytecode layout
//!
//! ```text
//! ┌──────────────────────┬──────────────┬──────────────────┬─────────────────────┐
//! │ loader instructions  │ blob id (32) │ section len (8)  │ configurable section │
//! └──────────────────────┴──────────────┴──────────────────┴─────────────────────┘
//!                                         only present when the section is non-empty
//! ```

use crate::error::Result;
use crate::instructions::loader_instructions;
use crate::offsets::{checked, read_configurable_offset};
use fuelwire_abi::{BigNumberCoder, BnInput, Coder};
use fuelwire_spec::{Bytes32, Instruction, BLOB_ID_SIZE, INSTRUCTION_SIZE, WORD_SIZE};
use tracing::debug;

/// Synthesized loader program.
///
/// Only built by [`synthesize_loader`], so the recorded offsets always lie inside `bytecode`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderBytecode {
    bytecode: Vec<u8>,
    blob_offset: Option<usize>,
    instruction_count: usize,
}

impl LoaderBytecode {
    /// Deployable bytes
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    pub fn into_bytecode(self) -> Vec<u8> {
        self.bytecode
    }

    /// Length of `instructions ‖ blob id`, i.e. where the section length word starts.
    /// `None` when the program has no configurable section.
    pub fn blob_offset(&self) -> Option<usize> {
        self.blob_offset
    }

    /// Number of loader instructions at the start of the bytecode
    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }

    /// Byte length of the instruction prefix
    pub fn code_len(&self) -> usize {
        self.instruction_count * INSTRUCTION_SIZE
    }

    /// Blob id embedded right after the instructions
    pub fn blob_id(&self) -> Bytes32 {
        let start = self.code_len();
        let mut id = [0u8; 32];
        id.copy_from_slice(&self.bytecode[start..start + BLOB_ID_SIZE]);
        Bytes32::new(id)
    }

    /// Configurable section carried verbatim at the end; empty when there is none
    pub fn configurable_section(&self) -> &[u8] {
        match self.blob_offset {
            Some(offset) => &self.bytecode[offset + WORD_SIZE..],
            None => &[],
        }
    }

    /// Decode the instruction prefix
    pub fn instructions(&self) -> Result<Vec<Instruction>> {
        Ok(Instruction::decode_all(&self.bytecode[..self.code_len()])?)
    }
}

/// Build a loader that fetches `blob_id` and carries the image's configurable section
pub fn synthesize_loader(image: &[u8], blob_id: &Bytes32) -> Result<LoaderBytecode> {
    let offset = checked(image, read_configurable_offset(image)?)?;
    let configurable_section = &image[offset..];
    let has_configurable_section = !configurable_section.is_empty();

    let instructions = loader_instructions(has_configurable_section)?;
    let instruction_count = instructions.len();

    let mut bytecode = Vec::with_capacity(
        instruction_count * INSTRUCTION_SIZE + BLOB_ID_SIZE + WORD_SIZE + configurable_section.len(),
    );
    for instruction in &instructions {
        bytecode.extend_from_slice(&instruction.to_bytes());
    }
    bytecode.extend_from_slice(blob_id.as_slice());

    let blob_offset = if has_configurable_section {
        let blob_offset = bytecode.len();
        let section_len = BigNumberCoder::u64().encode(&BnInput::from(configurable_section.len()))?;
        bytecode.extend_from_slice(&section_len);
        bytecode.extend_from_slice(configurable_section);
        Some(blob_offset)
    } else {
        None
    };

    debug!(
        configurable_offset = offset,
        section_len = configurable_section.len(),
        instruction_count,
        loader_len = bytecode.len(),
        "synthesized loader bytecode"
    );

    Ok(LoaderBytecode {
        bytecode,
        blob_offset,
        instruction_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoaderError;
    use num_bigint::BigUint;

    fn image_with_section(section: &[u8]) -> Vec<u8> {
        let mut image = vec![0u8; 24];
        image[8..16].copy_from_slice(&24u64.to_be_bytes());
        image[16..24].copy_from_slice(&24u64.to_be_bytes());
        image.extend_from_slice(section);
        image
    }

    #[test]
    fn test_layout_with_section() {
        let image = image_with_section(&[0xFF; 16]);
        let blob_id = Bytes32::new([0xAB; 32]);
        let loader = synthesize_loader(&image, &blob_id).unwrap();

        assert_eq!(loader.instruction_count(), 12);
        assert_eq!(loader.blob_offset(), Some(48 + 32));
        assert_eq!(loader.bytecode().len(), 48 + 32 + 8 + 16);
        assert_eq!(loader.blob_id(), blob_id);
        assert_eq!(&loader.bytecode()[80..88], &16u64.to_be_bytes());
        assert_eq!(loader.configurable_section(), &[0xFF; 16]);
    }

    #[test]
    fn test_section_length_decodes_with_u64_coder() {
        let image = image_with_section(&[0xFF; 16]);
        let loader = synthesize_loader(&image, &Bytes32::ZERO).unwrap();
        let len = loader.bytecode().len();
        let (value, next) = BigNumberCoder::u64()
            .decode(loader.bytecode(), len - 16 - 8)
            .unwrap();
        assert_eq!(value, BigUint::from(16u32));
        assert_eq!(next, len - 16);
        assert_eq!(&loader.bytecode()[len - 16..], &[0xFF; 16]);
    }

    #[test]
    fn test_layout_without_section() {
        let image = image_with_section(&[]);
        let blob_id = Bytes32::new([0x01; 32]);
        let loader = synthesize_loader(&image, &blob_id).unwrap();

        assert_eq!(loader.instruction_count(), 8);
        assert_eq!(loader.blob_offset(), None);
        assert_eq!(loader.bytecode().len(), 32 + 32);
        assert!(loader.bytecode().ends_with(blob_id.as_slice()));
        assert!(loader.configurable_section().is_empty());
    }

    #[test]
    fn test_instructions_decode_back() {
        let image = image_with_section(&[1, 2, 3]);
        let loader = synthesize_loader(&image, &Bytes32::ZERO).unwrap();
        assert_eq!(loader.instructions().unwrap(), loader_instructions(true).unwrap());
    }

    #[test]
    fn test_accessors_agree_with_layout() {
        let image = image_with_section(&[7; 5]);
        let loader = synthesize_loader(&image, &Bytes32::new([3; 32])).unwrap();
        let offset = loader.blob_offset().unwrap();
        assert_eq!(offset, loader.code_len() + BLOB_ID_SIZE);
        assert_eq!(loader.bytecode().len(), offset + WORD_SIZE + 5);
        assert_eq!(loader.blob_id(), Bytes32::new([3; 32]));
        assert_eq!(loader.clone().into_bytecode(), loader.bytecode());
    }

    #[test]
    fn test_offset_past_end() {
        let mut image = image_with_section(&[]);
        image[16..24].copy_from_slice(&100u64.to_be_bytes());
        assert_eq!(
            synthesize_loader(&image, &Bytes32::ZERO),
            Err(LoaderError::BytecodeBounds { offset: 100, length: 24 })
        );
    }
}
