//! Field readers shared by the receipt and chain decoders

use crate::error::{ProviderError, Result};
use fuelwire_abi::BnInput;
use fuelwire_spec::{decode_hex, Bytes32};
use num_bigint::BigUint;
use num_traits::Zero;

/// Present and non-empty
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// First of `primary`, `fallback` that is present
pub(crate) fn either<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> &'a Option<String> {
    if present(primary).is_some() {
        primary
    } else {
        fallback
    }
}

/// Decimal or `0x` hex integer
pub(crate) fn number(field: &'static str, text: &str) -> Result<BigUint> {
    BnInput::from(text)
        .to_biguint()
        .map_err(|_| ProviderError::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

/// Integer that defaults to zero when absent
pub(crate) fn number_or_zero(field: &'static str, value: &Option<String>) -> Result<BigUint> {
    match present(value) {
        Some(text) => number(field, text),
        None => Ok(BigUint::zero()),
    }
}

pub(crate) fn bytes32(field: &'static str, text: &str) -> Result<Bytes32> {
    text.parse().map_err(|_| ProviderError::InvalidHex {
        field,
        value: text.to_string(),
    })
}

/// 32-byte id that defaults to zero when absent
pub(crate) fn bytes32_or_zero(field: &'static str, value: &Option<String>) -> Result<Bytes32> {
    match present(value) {
        Some(text) => bytes32(field, text),
        None => Ok(Bytes32::ZERO),
    }
}

pub(crate) fn bytes(field: &'static str, text: &str) -> Result<Vec<u8>> {
    decode_hex(text).map_err(|_| ProviderError::InvalidHex {
        field,
        value: text.to_string(),
    })
}

pub(crate) fn bytes_opt(field: &'static str, value: &Option<String>) -> Result<Option<Vec<u8>>> {
    present(value).map(|text| bytes(field, text)).transpose()
}
