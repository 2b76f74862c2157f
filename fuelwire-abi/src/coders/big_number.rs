//! Fixed-width unsigned integers wider than a host number (`u64`, `u256`)

use crate::coder::{take, Coder, EncodedLength};
use crate::error::{AbiError, Result};
use crate::input::{BnInput, ValueError};
use fuelwire_spec::WORD_SIZE;
use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;

/// Width of a big-number ABI type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BigNumberType {
    U64,
    U256,
}

impl BigNumberType {
    pub const fn encoded_len(self) -> usize {
        match self {
            BigNumberType::U64 => WORD_SIZE,
            BigNumberType::U256 => WORD_SIZE * 4,
        }
    }

    pub const fn bits(self) -> u32 {
        self.encoded_len() as u32 * 8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BigNumberType::U64 => "u64",
            BigNumberType::U256 => "u256",
        }
    }
}

impl FromStr for BigNumberType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "u64" => Ok(BigNumberType::U64),
            "u256" => Ok(BigNumberType::U256),
            other => Err(AbiError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for BigNumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Big-endian, left zero-padded coder for [`BigNumberType`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BigNumberCoder {
    ty: BigNumberType,
}

impl BigNumberCoder {
    pub const fn new(ty: BigNumberType) -> Self {
        Self { ty }
    }

    pub const fn u64() -> Self {
        Self::new(BigNumberType::U64)
    }

    pub const fn u256() -> Self {
        Self::new(BigNumberType::U256)
    }

    /// Build the coder for an ABI type name (`"u64"` or `"u256"`)
    pub fn for_type(type_name: &str) -> Result<Self> {
        Ok(Self::new(type_name.parse()?))
    }

    pub const fn ty(&self) -> BigNumberType {
        self.ty
    }

    fn encode_error(&self, source: ValueError) -> AbiError {
        AbiError::Encode {
            type_name: self.ty.as_str().to_string(),
            source,
        }
    }
}

impl Coder for BigNumberCoder {
    type Input = BnInput;
    type Output = BigUint;

    fn name(&self) -> &'static str {
        "bigNumber"
    }

    fn type_name(&self) -> &str {
        self.ty.as_str()
    }

    fn encoded_length(&self) -> EncodedLength {
        EncodedLength::Fixed(self.ty.encoded_len())
    }

    fn encode(&self, value: &BnInput) -> Result<Vec<u8>> {
        let value = value.to_biguint().map_err(|e| self.encode_error(e))?;

        let width = self.ty.bits();
        if value.bits() > width as u64 {
            return Err(self.encode_error(ValueError::Overflow { bits: value.bits(), width }));
        }

        let len = self.ty.encoded_len();
        let digits = value.to_bytes_be();
        let mut bytes = vec![0u8; len];
        bytes[len - digits.len()..].copy_from_slice(&digits);
        Ok(bytes)
    }

    fn decode(&self, data: &[u8], offset: usize) -> Result<(BigUint, usize)> {
        let len = self.ty.encoded_len();
        let bytes = take(self.ty.as_str(), data, offset, len)?;
        Ok((BigUint::from_bytes_be(bytes), offset + len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_type_names() {
        assert_eq!(BigNumberCoder::for_type("u64").unwrap(), BigNumberCoder::u64());
        assert_eq!(BigNumberCoder::for_type("u256").unwrap().type_name(), "u256");
        assert_eq!(
            BigNumberCoder::for_type("u128"),
            Err(AbiError::UnknownType("u128".into()))
        );
    }

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(BigNumberCoder::u64().encoded_length(), EncodedLength::Fixed(8));
        assert_eq!(BigNumberCoder::u256().encoded_length(), EncodedLength::Fixed(32));
        assert_eq!(BigNumberCoder::u64().name(), "bigNumber");
    }

    #[test]
    fn test_encode_zero_is_padded() {
        assert_eq!(BigNumberCoder::u64().encode(&0u64.into()).unwrap(), vec![0u8; 8]);
        assert_eq!(BigNumberCoder::u256().encode(&0u64.into()).unwrap(), vec![0u8; 32]);
    }

    #[test]
    fn test_encode_max_u64() {
        let bytes = BigNumberCoder::u64().encode(&u64::MAX.into()).unwrap();
        assert_eq!(bytes, vec![0xFF; 8]);
    }

    #[test]
    fn test_encode_overflow() {
        let too_big: BigUint = BigUint::one() << 64;
        let err = BigNumberCoder::u64().encode(&too_big.into()).unwrap_err();
        assert_eq!(
            err,
            AbiError::Encode {
                type_name: "u64".into(),
                source: ValueError::Overflow { bits: 65, width: 64 },
            }
        );

        let max_u256: BigUint = (BigUint::one() << 256) - 1u32;
        assert!(BigNumberCoder::u256().encode(&max_u256.clone().into()).is_ok());
        assert!(BigNumberCoder::u256().encode(&(max_u256 + 1u32).into()).is_err());
    }

    #[test]
    fn test_encode_unsafe_number() {
        let err = BigNumberCoder::u64().encode(&BnInput::Number(1e16)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid u64: number value is too large. Number can only safely handle up to 53 bits."
        );
    }

    #[test]
    fn test_decode_at_offset() {
        let data = [0xAA, 0, 0, 0, 0, 0, 0, 0x01, 0x02, 0xBB];
        let (value, next) = BigNumberCoder::u64().decode(&data, 1).unwrap();
        assert_eq!(value, BigUint::from(0x0102u32));
        assert_eq!(next, 9);
    }

    #[test]
    fn test_decode_short_buffer() {
        let data = [0u8; 31];
        let err = BigNumberCoder::u256().decode(&data, 0).unwrap_err();
        assert_eq!(
            err,
            AbiError::Decode { type_name: "u256".into(), expected: 32, available: 31 }
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_u256() -> impl Strategy<Value = BigUint> {
        prop::array::uniform32(any::<u8>()).prop_map(|bytes| BigUint::from_bytes_be(&bytes))
    }

    proptest! {
        #[test]
        fn test_u64_roundtrip(v in any::<u64>()) {
            let coder = BigNumberCoder::u64();
            let bytes = coder.encode(&v.into()).unwrap();
            prop_assert_eq!(bytes.len(), 8);
            prop_assert_eq!(&bytes[..], &v.to_be_bytes()[..]);
            let (decoded, next) = coder.decode(&bytes, 0).unwrap();
            prop_assert_eq!(decoded, BigUint::from(v));
            prop_assert_eq!(next, 8);
        }

        #[test]
        fn test_u256_roundtrip(v in arb_u256()) {
            let coder = BigNumberCoder::u256();
            let bytes = coder.encode(&BnInput::from(&v)).unwrap();
            prop_assert_eq!(bytes.len(), 32);
            let (decoded, _) = coder.decode(&bytes, 0).unwrap();
            prop_assert_eq!(decoded, v);
        }

        #[test]
        fn test_negative_rejected(v in i64::MIN..0i64) {
            prop_assert!(BigNumberCoder::u64().encode(&v.into()).is_err());
            prop_assert!(BigNumberCoder::u256().encode(&v.into()).is_err());
        }

        #[test]
        fn test_short_buffer_rejected(len in 0usize..8, offset in 0usize..4) {
            let data = vec![0u8; len + offset];
            prop_assert!(BigNumberCoder::u64().decode(&data, offset).is_err());
        }
    }
}
