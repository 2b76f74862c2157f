//! 32 raw bytes (`b256`), used for ids and digests

use crate::coder::{take, Coder, EncodedLength};
use crate::error::Result;
use fuelwire_spec::Bytes32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct B256Coder;

impl Coder for B256Coder {
    type Input = Bytes32;
    type Output = Bytes32;

    fn name(&self) -> &'static str {
        "b256"
    }

    fn type_name(&self) -> &str {
        "b256"
    }

    fn encoded_length(&self) -> EncodedLength {
        EncodedLength::Fixed(Bytes32::LEN)
    }

    fn encode(&self, value: &Bytes32) -> Result<Vec<u8>> {
        Ok(value.as_slice().to_vec())
    }

    fn decode(&self, data: &[u8], offset: usize) -> Result<(Bytes32, usize)> {
        let bytes = take(self.type_name(), data, offset, Bytes32::LEN)?;
        let mut array = [0u8; 32];
        array.copy_from_slice(bytes);
        Ok((Bytes32::new(array), offset + Bytes32::LEN))
    }
}
