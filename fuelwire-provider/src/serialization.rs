//! Conversions between wire records and typed records

use crate::chain::*;
use crate::decode::decode_receipts;
use crate::error::Result;
use crate::fields::{bytes, bytes32, number};
use crate::wire::*;
use tracing::debug;

pub fn deserialize_chain(chain: &ChainInfoJson) -> Result<ChainInfo> {
    let params = &chain.consensus_parameters;
    let fee = &params.fee_params;
    let contract = &params.contract_params;
    let tx = &params.tx_params;
    let predicate = &params.predicate_params;
    let script = &params.script_params;

    Ok(ChainInfo {
        name: chain.name.clone(),
        base_chain_height: number("daHeight", &chain.da_height)?,
        consensus_parameters: ConsensusParameters {
            version: params.version.clone(),
            chain_id: number("chainId", &params.chain_id)?,
            base_asset_id: params.base_asset_id.clone(),
            fee_parameters: FeeParameters {
                version: fee.version.clone(),
                gas_per_byte: number("gasPerByte", &fee.gas_per_byte)?,
                gas_price_factor: number("gasPriceFactor", &fee.gas_price_factor)?,
            },
            contract_parameters: ContractParameters {
                version: contract.version.clone(),
                contract_max_size: number("contractMaxSize", &contract.contract_max_size)?,
                max_storage_slots: number("maxStorageSlots", &contract.max_storage_slots)?,
            },
            tx_parameters: TxParameters {
                version: tx.version.clone(),
                max_inputs: number("maxInputs", &tx.max_inputs)?,
                max_outputs: number("maxOutputs", &tx.max_outputs)?,
                max_witnesses: number("maxWitnesses", &tx.max_witnesses)?,
                max_gas_per_tx: number("maxGasPerTx", &tx.max_gas_per_tx)?,
                max_size: number("maxSize", &tx.max_size)?,
                max_bytecode_subsections: number(
                    "maxBytecodeSubsections",
                    &tx.max_bytecode_subsections,
                )?,
            },
            predicate_parameters: PredicateParameters {
                version: predicate.version.clone(),
                max_predicate_length: number("maxPredicateLength", &predicate.max_predicate_length)?,
                max_predicate_data_length: number(
                    "maxPredicateDataLength",
                    &predicate.max_predicate_data_length,
                )?,
                max_gas_per_predicate: number(
                    "maxGasPerPredicate",
                    &predicate.max_gas_per_predicate,
                )?,
                max_message_data_length: number(
                    "maxMessageDataLength",
                    &predicate.max_message_data_length,
                )?,
            },
            script_parameters: ScriptParameters {
                version: script.version.clone(),
                max_script_length: number("maxScriptLength", &script.max_script_length)?,
                max_script_data_length: number(
                    "maxScriptDataLength",
                    &script.max_script_data_length,
                )?,
            },
            gas_costs: params.gas_costs.clone(),
        },
    })
}

pub fn serialize_chain(chain: &ChainInfo) -> ChainInfoJson {
    let params = &chain.consensus_parameters;
    let fee = &params.fee_parameters;
    let contract = &params.contract_parameters;
    let tx = &params.tx_parameters;
    let predicate = &params.predicate_parameters;
    let script = &params.script_parameters;

    ChainInfoJson {
        name: chain.name.clone(),
        da_height: chain.base_chain_height.to_string(),
        consensus_parameters: ConsensusParametersJson {
            version: params.version.clone(),
            chain_id: params.chain_id.to_string(),
            base_asset_id: params.base_asset_id.clone(),
            fee_params: FeeParamsJson {
                version: fee.version.clone(),
                gas_per_byte: fee.gas_per_byte.to_string(),
                gas_price_factor: fee.gas_price_factor.to_string(),
            },
            contract_params: ContractParamsJson {
                version: contract.version.clone(),
                contract_max_size: contract.contract_max_size.to_string(),
                max_storage_slots: contract.max_storage_slots.to_string(),
            },
            tx_params: TxParamsJson {
                version: tx.version.clone(),
                max_inputs: tx.max_inputs.to_string(),
                max_outputs: tx.max_outputs.to_string(),
                max_witnesses: tx.max_witnesses.to_string(),
                max_gas_per_tx: tx.max_gas_per_tx.to_string(),
                max_size: tx.max_size.to_string(),
                max_bytecode_subsections: tx.max_bytecode_subsections.to_string(),
            },
            predicate_params: PredicateParamsJson {
                version: predicate.version.clone(),
                max_predicate_length: predicate.max_predicate_length.to_string(),
                max_predicate_data_length: predicate.max_predicate_data_length.to_string(),
                max_gas_per_predicate: predicate.max_gas_per_predicate.to_string(),
                max_message_data_length: predicate.max_message_data_length.to_string(),
            },
            script_params: ScriptParamsJson {
                version: script.version.clone(),
                max_script_length: script.max_script_length.to_string(),
                max_script_data_length: script.max_script_data_length.to_string(),
            },
            gas_costs: params.gas_costs.clone(),
        },
    }
}

pub fn deserialize_node_info(node_info: &NodeInfoJson) -> Result<NodeInfo> {
    Ok(NodeInfo {
        max_depth: number("maxDepth", &node_info.max_depth)?,
        max_tx: number("maxTx", &node_info.max_tx)?,
        node_version: node_info.node_version.clone(),
        utxo_validation: node_info.utxo_validation,
        vm_backtrace: node_info.vm_backtrace,
        indexation: node_info.indexation,
    })
}

pub fn serialize_node_info(node_info: &NodeInfo) -> NodeInfoJson {
    NodeInfoJson {
        max_depth: node_info.max_depth.to_string(),
        max_tx: node_info.max_tx.to_string(),
        node_version: node_info.node_version.clone(),
        utxo_validation: node_info.utxo_validation,
        vm_backtrace: node_info.vm_backtrace,
        indexation: node_info.indexation,
    }
}

pub fn deserialize_provider_cache(cache: &ProviderCacheJson) -> Result<ProviderCache> {
    Ok(ProviderCache {
        consensus_parameters_timestamp: cache.consensus_parameters_timestamp,
        chain: deserialize_chain(&cache.chain)?,
        node_info: deserialize_node_info(&cache.node_info)?,
    })
}

pub fn serialize_provider_cache(cache: &ProviderCache) -> ProviderCacheJson {
    ProviderCacheJson {
        consensus_parameters_timestamp: cache.consensus_parameters_timestamp,
        chain: serialize_chain(&cache.chain),
        node_info: serialize_node_info(&cache.node_info),
    }
}

pub fn deserialize_transaction_summary(summary: &TransactionSummaryJson) -> Result<TransactionSummary> {
    let decoded = TransactionSummary {
        id: bytes32("id", &summary.id)?,
        transaction_bytes: bytes("transactionBytes", &summary.transaction_bytes)?,
        receipts: decode_receipts(&summary.receipts)?,
        gas_price: number("gasPrice", &summary.gas_price)?,
    };
    debug!(
        id = %decoded.id,
        receipts = decoded.receipts.len(),
        "deserialized transaction summary"
    );
    Ok(decoded)
}
