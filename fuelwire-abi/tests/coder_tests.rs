//! Coders driven through the shared trait

use fuelwire_abi::{
    AbiError, B256Coder, BigNumberCoder, BigNumberType, BnInput, Coder, EncodedLength,
};
use fuelwire_spec::{Bytes32, ErrorCode};
use num_bigint::BigUint;

/// A coder defined outside the crate, used the same way as the built-in ones
struct BoolCoder;

impl Coder for BoolCoder {
    type Input = bool;
    type Output = bool;

    fn name(&self) -> &'static str {
        "boolean"
    }

    fn type_name(&self) -> &str {
        "bool"
    }

    fn encoded_length(&self) -> EncodedLength {
        EncodedLength::Fixed(1)
    }

    fn encode(&self, value: &bool) -> fuelwire_abi::Result<Vec<u8>> {
        Ok(vec![u8::from(*value)])
    }

    fn decode(&self, data: &[u8], offset: usize) -> fuelwire_abi::Result<(bool, usize)> {
        match data.get(offset) {
            Some(0) => Ok((false, offset + 1)),
            Some(1) => Ok((true, offset + 1)),
            Some(byte) => Err(AbiError::InvalidValue {
                type_name: "bool".into(),
                offset,
                reason: format!("byte {byte:#04x} is not 0 or 1"),
            }),
            None => Err(AbiError::Decode {
                type_name: "bool".into(),
                expected: 1,
                available: 0,
            }),
        }
    }
}

/// Decode a value with any fixed-length coder and check it used exactly its length
fn decode_fixed<C: Coder>(coder: &C, data: &[u8], offset: usize) -> C::Output {
    let (value, next) = coder.decode(data, offset).unwrap();
    assert_eq!(Some(next - offset), coder.encoded_length().fixed());
    value
}

#[test]
fn test_custom_coder_plugs_in() {
    assert!(decode_fixed(&BoolCoder, &[0, 1], 1));
    assert_eq!(BoolCoder.encode(&true).unwrap(), vec![1]);
}

#[test]
fn test_custom_coder_rejects_bad_byte_as_decode_error() {
    let err = BoolCoder.decode(&[0, 2], 1).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DecodeError);
    assert_eq!(
        err,
        AbiError::InvalidValue {
            type_name: "bool".into(),
            offset: 1,
            reason: "byte 0x02 is not 0 or 1".into(),
        }
    );
    assert_eq!(BoolCoder.decode(&[], 0).unwrap_err().code(), ErrorCode::DecodeError);
}

#[test]
fn test_sequential_decode() {
    // u64 ‖ b256 ‖ u256, read back with one running offset
    let mut data = BigNumberCoder::u64().encode(&BnInput::from(42u64)).unwrap();
    data.extend(B256Coder.encode(&Bytes32::new([9; 32])).unwrap());
    data.extend(BigNumberCoder::u256().encode(&BnInput::from("0xff")).unwrap());
    assert_eq!(data.len(), 8 + 32 + 32);

    let a = decode_fixed(&BigNumberCoder::u64(), &data, 0);
    let b = decode_fixed(&B256Coder, &data, 8);
    let c = decode_fixed(&BigNumberCoder::u256(), &data, 40);
    assert_eq!(a, BigUint::from(42u32));
    assert_eq!(b, Bytes32::new([9; 32]));
    assert_eq!(c, BigUint::from(255u32));
}

#[test]
fn test_coder_for_type_name() {
    for (name, len) in [("u64", 8), ("u256", 32)] {
        let coder = BigNumberCoder::for_type(name).unwrap();
        assert_eq!(coder.type_name(), name);
        assert_eq!(coder.encoded_length(), EncodedLength::Fixed(len));
    }
    let err = BigNumberCoder::for_type("u8").unwrap_err();
    assert_eq!(err, AbiError::UnknownType("u8".into()));
    assert_eq!("u256".parse::<BigNumberType>().unwrap(), BigNumberType::U256);
}

#[test]
fn test_error_messages_name_the_type() {
    let err = BigNumberCoder::u256().decode(&[0u8; 31], 0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DecodeError);
    assert_eq!(
        err.to_string(),
        "Invalid u256 data size: expected 32 bytes, found 31 bytes"
    );

    let err = BigNumberCoder::u64().encode(&BnInput::Integer(-5)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::EncodeError);
    assert_eq!(err.to_string(), "Invalid u64: value is negative");
}

#[test]
fn test_float_inputs() {
    let coder = BigNumberCoder::u64();
    assert_eq!(
        coder.encode(&BnInput::Number(1000.0)).unwrap(),
        1000u64.to_be_bytes()
    );
    assert!(coder.encode(&BnInput::Number(2f64.powi(60))).is_err());
    assert!(coder.encode(&BnInput::Number(1.5)).is_err());
}
