//! Chain and node information with integers as big integers

use crate::receipt::Receipt;
use crate::wire::Indexation;
use fuelwire_spec::Bytes32;
use num_bigint::BigUint;

#[derive(Clone, Debug, PartialEq)]
pub struct ChainInfo {
    pub name: String,
    /// Height of the base layer the chain has processed (`daHeight` on the wire)
    pub base_chain_height: BigUint,
    pub consensus_parameters: ConsensusParameters,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusParameters {
    pub version: String,
    pub chain_id: BigUint,
    pub base_asset_id: String,
    pub fee_parameters: FeeParameters,
    pub contract_parameters: ContractParameters,
    pub tx_parameters: TxParameters,
    pub predicate_parameters: PredicateParameters,
    pub script_parameters: ScriptParameters,
    /// Opaque; the gas cost table changes shape between node versions
    pub gas_costs: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeParameters {
    pub version: String,
    pub gas_per_byte: BigUint,
    pub gas_price_factor: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractParameters {
    pub version: String,
    pub contract_max_size: BigUint,
    pub max_storage_slots: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxParameters {
    pub version: String,
    pub max_inputs: BigUint,
    pub max_outputs: BigUint,
    pub max_witnesses: BigUint,
    pub max_gas_per_tx: BigUint,
    pub max_size: BigUint,
    pub max_bytecode_subsections: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredicateParameters {
    pub version: String,
    pub max_predicate_length: BigUint,
    pub max_predicate_data_length: BigUint,
    pub max_gas_per_predicate: BigUint,
    pub max_message_data_length: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptParameters {
    pub version: String,
    pub max_script_length: BigUint,
    pub max_script_data_length: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub max_depth: BigUint,
    pub max_tx: BigUint,
    pub node_version: String,
    pub utxo_validation: bool,
    pub vm_backtrace: bool,
    pub indexation: Indexation,
}

/// Chain and node info a provider can be rebuilt from without a round trip to the node
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderCache {
    /// When the consensus parameters were last fetched (ms since the epoch)
    pub consensus_parameters_timestamp: Option<u64>,
    pub chain: ChainInfo,
    pub node_info: NodeInfo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionSummary {
    pub id: Bytes32,
    pub transaction_bytes: Vec<u8>,
    pub receipts: Vec<Receipt>,
    pub gas_price: BigUint,
}
