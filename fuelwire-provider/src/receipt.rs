//! Typed execution receipts

use crate::error::ProviderError;
use fuelwire_spec::Bytes32;
use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;

/// Receipt tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReceiptType {
    Call,
    Return,
    ReturnData,
    Panic,
    Revert,
    Log,
    LogData,
    Transfer,
    TransferOut,
    ScriptResult,
    MessageOut,
    Mint,
    Burn,
}

impl ReceiptType {
    pub const ALL: [ReceiptType; 13] = [
        ReceiptType::Call,
        ReceiptType::Return,
        ReceiptType::ReturnData,
        ReceiptType::Panic,
        ReceiptType::Revert,
        ReceiptType::Log,
        ReceiptType::LogData,
        ReceiptType::Transfer,
        ReceiptType::TransferOut,
        ReceiptType::ScriptResult,
        ReceiptType::MessageOut,
        ReceiptType::Mint,
        ReceiptType::Burn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReceiptType::Call => "Call",
            ReceiptType::Return => "Return",
            ReceiptType::ReturnData => "ReturnData",
            ReceiptType::Panic => "Panic",
            ReceiptType::Revert => "Revert",
            ReceiptType::Log => "Log",
            ReceiptType::LogData => "LogData",
            ReceiptType::Transfer => "Transfer",
            ReceiptType::TransferOut => "TransferOut",
            ReceiptType::ScriptResult => "ScriptResult",
            ReceiptType::MessageOut => "MessageOut",
            ReceiptType::Mint => "Mint",
            ReceiptType::Burn => "Burn",
        }
    }

    /// Tag as the node's GraphQL enum spells it
    pub fn wire_tag(self) -> &'static str {
        match self {
            ReceiptType::Call => "CALL",
            ReceiptType::Return => "RETURN",
            ReceiptType::ReturnData => "RETURN_DATA",
            ReceiptType::Panic => "PANIC",
            ReceiptType::Revert => "REVERT",
            ReceiptType::Log => "LOG",
            ReceiptType::LogData => "LOG_DATA",
            ReceiptType::Transfer => "TRANSFER",
            ReceiptType::TransferOut => "TRANSFER_OUT",
            ReceiptType::ScriptResult => "SCRIPT_RESULT",
            ReceiptType::MessageOut => "MESSAGE_OUT",
            ReceiptType::Mint => "MINT",
            ReceiptType::Burn => "BURN",
        }
    }
}

impl FromStr for ReceiptType {
    type Err = ProviderError;

    /// Accepts both `RETURN_DATA` and `ReturnData`
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ReceiptType::ALL
            .into_iter()
            .find(|ty| ty.wire_tag() == tag || ty.as_str() == tag)
            .ok_or_else(|| ProviderError::InvalidReceiptType(tag.to_string()))
    }
}

impl fmt::Display for ReceiptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptCall {
    /// Calling contract, zero when called from a script
    pub id: Bytes32,
    /// Called contract
    pub to: Bytes32,
    pub amount: BigUint,
    pub asset_id: Bytes32,
    pub gas: BigUint,
    pub param1: BigUint,
    pub param2: BigUint,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptReturn {
    pub id: Bytes32,
    pub val: BigUint,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptReturnData {
    pub id: Bytes32,
    pub ptr: BigUint,
    pub len: BigUint,
    pub digest: Bytes32,
    /// `None` when the node omitted the payload
    pub data: Option<Vec<u8>>,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptPanic {
    pub id: Bytes32,
    pub reason: BigUint,
    pub pc: BigUint,
    pub is: BigUint,
    /// Contract the script tried to reach without having it as an input
    pub contract_id: Bytes32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptRevert {
    pub id: Bytes32,
    pub val: BigUint,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptLog {
    pub id: Bytes32,
    pub ra: BigUint,
    pub rb: BigUint,
    pub rc: BigUint,
    pub rd: BigUint,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptLogData {
    pub id: Bytes32,
    pub ra: BigUint,
    pub rb: BigUint,
    pub ptr: BigUint,
    pub len: BigUint,
    pub digest: Bytes32,
    pub data: Option<Vec<u8>>,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptTransfer {
    pub id: Bytes32,
    pub to: Bytes32,
    pub amount: BigUint,
    pub asset_id: Bytes32,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptTransferOut {
    pub id: Bytes32,
    pub to: Bytes32,
    pub amount: BigUint,
    pub asset_id: Bytes32,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptScriptResult {
    pub result: BigUint,
    pub gas_used: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptMessageOut {
    pub sender: Bytes32,
    pub recipient: Bytes32,
    pub amount: BigUint,
    pub nonce: Bytes32,
    pub len: BigUint,
    pub data: Vec<u8>,
    pub digest: Bytes32,
    pub message_id: Bytes32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptMint {
    pub sub_id: Bytes32,
    pub contract_id: Bytes32,
    /// `sha256(contract_id ‖ sub_id)`
    pub asset_id: Bytes32,
    pub val: BigUint,
    pub pc: BigUint,
    pub is: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptBurn {
    pub sub_id: Bytes32,
    pub contract_id: Bytes32,
    pub asset_id: Bytes32,
    pub val: BigUint,
    pub pc: BigUint,
    pub is: BigUint,
}

/// One effect of executing a transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Receipt {
    Call(ReceiptCall),
    Return(ReceiptReturn),
    ReturnData(ReceiptReturnData),
    Panic(ReceiptPanic),
    Revert(ReceiptRevert),
    Log(ReceiptLog),
    LogData(ReceiptLogData),
    Transfer(ReceiptTransfer),
    TransferOut(ReceiptTransferOut),
    ScriptResult(ReceiptScriptResult),
    MessageOut(ReceiptMessageOut),
    Mint(ReceiptMint),
    Burn(ReceiptBurn),
}

impl Receipt {
    pub fn receipt_type(&self) -> ReceiptType {
        match self {
            Receipt::Call(_) => ReceiptType::Call,
            Receipt::Return(_) => ReceiptType::Return,
            Receipt::ReturnData(_) => ReceiptType::ReturnData,
            Receipt::Panic(_) => ReceiptType::Panic,
            Receipt::Revert(_) => ReceiptType::Revert,
            Receipt::Log(_) => ReceiptType::Log,
            Receipt::LogData(_) => ReceiptType::LogData,
            Receipt::Transfer(_) => ReceiptType::Transfer,
            Receipt::TransferOut(_) => ReceiptType::TransferOut,
            Receipt::ScriptResult(_) => ReceiptType::ScriptResult,
            Receipt::MessageOut(_) => ReceiptType::MessageOut,
            Receipt::Mint(_) => ReceiptType::Mint,
            Receipt::Burn(_) => ReceiptType::Burn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_spellings() {
        for ty in ReceiptType::ALL {
            assert_eq!(ty.wire_tag().parse::<ReceiptType>().unwrap(), ty);
            assert_eq!(ty.as_str().parse::<ReceiptType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "Nope".parse::<ReceiptType>(),
            Err(ProviderError::InvalidReceiptType("Nope".into()))
        );
        // Tags are case-sensitive
        assert!("call".parse::<ReceiptType>().is_err());
    }

    #[test]
    fn test_receipt_type_of_variant() {
        let receipt = Receipt::ScriptResult(ReceiptScriptResult {
            result: BigUint::from(0u8),
            gas_used: BigUint::from(42u8),
        });
        assert_eq!(receipt.receipt_type(), ReceiptType::ScriptResult);
        assert_eq!(receipt.receipt_type().to_string(), "ScriptResult");
    }
}
