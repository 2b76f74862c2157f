//! # Fuel Node Response Decoding
//!
//! Turns the JSON a Fuel node sends back into typed values:
//!
//! - execution receipts, with message ids and minted asset ids derived on the way
//! - chain and node info, and the provider cache built from them
//! - transaction summaries
//!
//! All integers arrive as strings and are kept as `BigUint`.
//!
//! ## Example
//!
//! ```rust
//! use fuelwire_provider::{decode_receipt, Receipt, ReceiptJson};
//!
//! let json: ReceiptJson = serde_json::from_str(
//!     r#"{ "receiptType": "SCRIPT_RESULT", "result": "0", "gasUsed": "1184" }"#,
//! ).unwrap();
//!
//! match decode_receipt(&json).unwrap() {
//!     Receipt::ScriptResult(result) => assert_eq!(result.gas_used.to_string(), "1184"),
//!     other => panic!("unexpected receipt: {other:?}"),
//! }
//! ```

pub mod analysis;
pub mod chain;
pub mod decode;
pub mod error;
mod fields;
pub mod ids;
pub mod receipt;
pub mod serialization;
pub mod wire;

pub use analysis::{receipts_with_missing_data, MissingData, FAILED_TRANSFER_TO_ADDRESS_SIGNAL};
pub use chain::{
    ChainInfo, ConsensusParameters, ContractParameters, FeeParameters, NodeInfo,
    PredicateParameters, ProviderCache, ScriptParameters, TransactionSummary, TxParameters,
};
pub use decode::{decode_receipt, decode_receipts};
pub use error::{ProviderError, Result};
pub use ids::{message_id, minted_asset_id};
pub use receipt::{
    Receipt, ReceiptBurn, ReceiptCall, ReceiptLog, ReceiptLogData, ReceiptMessageOut, ReceiptMint,
    ReceiptPanic, ReceiptReturn, ReceiptReturnData, ReceiptRevert, ReceiptScriptResult,
    ReceiptTransfer, ReceiptTransferOut, ReceiptType,
};
pub use serialization::{
    deserialize_chain, deserialize_node_info, deserialize_provider_cache,
    deserialize_transaction_summary, serialize_chain, serialize_node_info,
    serialize_provider_cache,
};
pub use wire::{
    ChainInfoJson, Indexation, NodeInfoJson, ProviderCacheJson, ReceiptJson,
    TransactionSummaryJson,
};
