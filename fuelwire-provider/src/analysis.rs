//! Receipt patterns that point at inputs or outputs missing from a transaction

use crate::receipt::{Receipt, ReceiptPanic, ReceiptRevert};
use fuelwire_spec::Word;
use num_bigint::BigUint;

/// Revert value raised when a transfer to an address finds no variable output
pub const FAILED_TRANSFER_TO_ADDRESS_SIGNAL: Word = 0xffff_ffff_ffff_0001;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissingData {
    /// Reverts caused by a missing variable output
    pub missing_output_variables: Vec<ReceiptRevert>,
    /// Panics naming a contract that was not an input
    pub missing_output_contract_ids: Vec<ReceiptPanic>,
}

impl MissingData {
    pub fn is_empty(&self) -> bool {
        self.missing_output_variables.is_empty() && self.missing_output_contract_ids.is_empty()
    }
}

pub fn receipts_with_missing_data(receipts: &[Receipt]) -> MissingData {
    let signal = BigUint::from(FAILED_TRANSFER_TO_ADDRESS_SIGNAL);
    let mut missing = MissingData::default();

    for receipt in receipts {
        match receipt {
            Receipt::Revert(revert) if revert.val == signal => {
                missing.missing_output_variables.push(revert.clone());
            }
            Receipt::Panic(panic) if !panic.contract_id.is_zero() => {
                missing.missing_output_contract_ids.push(panic.clone());
            }
            _ => {}
        }
    }

    missing
}
