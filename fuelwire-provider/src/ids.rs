//! Identifiers derived from receipt fields

use crate::error::Result;
use fuelwire_abi::{B256Coder, BigNumberCoder, BnInput, Coder};
use fuelwire_spec::{Bytes32, Hasher};
use num_bigint::BigUint;

/// `sha256(sender ‖ recipient ‖ nonce ‖ u64_be(amount) ‖ data)`
///
/// Fails if `amount` does not fit in 64 bits.
pub fn message_id(
    sender: &Bytes32,
    recipient: &Bytes32,
    nonce: &Bytes32,
    amount: &BigUint,
    data: &[u8],
) -> Result<Bytes32> {
    let amount = BigNumberCoder::u64().encode(&BnInput::from(amount))?;
    Ok(Hasher::new()
        .chain(B256Coder.encode(sender)?)
        .chain(B256Coder.encode(recipient)?)
        .chain(B256Coder.encode(nonce)?)
        .chain(amount)
        .chain(data)
        .digest())
}

/// `sha256(contract_id ‖ sub_id)`
pub fn minted_asset_id(contract_id: &Bytes32, sub_id: &Bytes32) -> Bytes32 {
    Hasher::new().chain(contract_id).chain(sub_id).digest()
}
