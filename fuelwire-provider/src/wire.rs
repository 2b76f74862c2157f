//! Records as the node's API sends them
//!
//! Integers travel as decimal strings and identifiers as `0x` hex strings, so
//! nothing is lost to a float on the way in.

use serde::{Deserialize, Serialize};

/// One execution receipt as a flat record keyed by `receiptType`.
///
/// Every field except the tag is optional; which ones are present depends on the tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptJson {
    pub receipt_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Older nodes send the contract id here instead of `id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,
}

impl ReceiptJson {
    /// Empty record carrying only a tag
    pub fn tagged(receipt_type: impl Into<String>) -> Self {
        Self {
            receipt_type: receipt_type.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Chain info
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfoJson {
    pub name: String,
    pub da_height: String,
    pub consensus_parameters: ConsensusParametersJson,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusParametersJson {
    pub version: String,
    pub chain_id: String,
    pub base_asset_id: String,
    pub fee_params: FeeParamsJson,
    pub contract_params: ContractParamsJson,
    pub tx_params: TxParamsJson,
    pub predicate_params: PredicateParamsJson,
    pub script_params: ScriptParamsJson,
    pub gas_costs: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeParamsJson {
    pub version: String,
    pub gas_per_byte: String,
    pub gas_price_factor: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractParamsJson {
    pub version: String,
    pub contract_max_size: String,
    pub max_storage_slots: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxParamsJson {
    pub version: String,
    pub max_inputs: String,
    pub max_outputs: String,
    pub max_witnesses: String,
    pub max_gas_per_tx: String,
    pub max_size: String,
    pub max_bytecode_subsections: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredicateParamsJson {
    pub version: String,
    pub max_predicate_length: String,
    pub max_predicate_data_length: String,
    pub max_gas_per_predicate: String,
    pub max_message_data_length: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptParamsJson {
    pub version: String,
    pub max_script_length: String,
    pub max_script_data_length: String,
}

// ============================================================================
// Node info
// ============================================================================

/// Which optional indexes the node maintains. Same shape on the wire and in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexation {
    pub balances: bool,
    pub coins_to_spend: bool,
    pub asset_metadata: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfoJson {
    pub max_depth: String,
    pub max_tx: String,
    pub node_version: String,
    pub utxo_validation: bool,
    pub vm_backtrace: bool,
    pub indexation: Indexation,
}

// ============================================================================
// Cached provider state and transaction summaries
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCacheJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus_parameters_timestamp: Option<u64>,
    pub chain: ChainInfoJson,
    pub node_info: NodeInfoJson,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummaryJson {
    pub id: String,
    pub transaction_bytes: String,
    pub receipts: Vec<ReceiptJson>,
    pub gas_price: String,
}
