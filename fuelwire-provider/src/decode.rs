//! Wire receipt → typed receipt

use crate::error::Result;
use crate::fields::{bytes32_or_zero, bytes_opt, either, number_or_zero};
use crate::ids::{message_id, minted_asset_id};
use crate::receipt::*;
use crate::wire::ReceiptJson;
use tracing::{debug, trace};

/// Decode one receipt, dispatching on its `receiptType` tag
pub fn decode_receipt(json: &ReceiptJson) -> Result<Receipt> {
    let ty: ReceiptType = json.receipt_type.parse()?;
    trace!(receipt_type = %ty, "decoding receipt");

    // Contract-scoped receipts used to carry their id as `contractId`
    let id = || bytes32_or_zero("id", either(&json.id, &json.contract_id));
    let pc = || number_or_zero("pc", &json.pc);
    let is = || number_or_zero("is", &json.is);

    let receipt = match ty {
        ReceiptType::Call => Receipt::Call(ReceiptCall {
            id: id()?,
            to: bytes32_or_zero("to", &json.to)?,
            amount: number_or_zero("amount", &json.amount)?,
            asset_id: bytes32_or_zero("assetId", &json.asset_id)?,
            gas: number_or_zero("gas", &json.gas)?,
            param1: number_or_zero("param1", &json.param1)?,
            param2: number_or_zero("param2", &json.param2)?,
            pc: pc()?,
            is: is()?,
        }),

        ReceiptType::Return => Receipt::Return(ReceiptReturn {
            id: id()?,
            val: number_or_zero("val", &json.val)?,
            pc: pc()?,
            is: is()?,
        }),

        ReceiptType::ReturnData => Receipt::ReturnData(ReceiptReturnData {
            id: id()?,
            ptr: number_or_zero("ptr", &json.ptr)?,
            len: number_or_zero("len", &json.len)?,
            digest: bytes32_or_zero("digest", &json.digest)?,
            data: bytes_opt("data", &json.data)?,
            pc: pc()?,
            is: is()?,
        }),

        // `contractId` is a field of its own here, not a fallback for `id`
        ReceiptType::Panic => Receipt::Panic(ReceiptPanic {
            id: bytes32_or_zero("id", &json.id)?,
            reason: number_or_zero("reason", &json.reason)?,
            pc: pc()?,
            is: is()?,
            contract_id: bytes32_or_zero("contractId", &json.contract_id)?,
        }),

        ReceiptType::Revert => Receipt::Revert(ReceiptRevert {
            id: id()?,
            val: number_or_zero("ra", &json.ra)?,
            pc: pc()?,
            is: is()?,
        }),

        ReceiptType::Log => Receipt::Log(ReceiptLog {
            id: id()?,
            ra: number_or_zero("ra", &json.ra)?,
            rb: number_or_zero("rb", &json.rb)?,
            rc: number_or_zero("rc", &json.rc)?,
            rd: number_or_zero("rd", &json.rd)?,
            pc: pc()?,
            is: is()?,
        }),

        ReceiptType::LogData => Receipt::LogData(ReceiptLogData {
            id: id()?,
            ra: number_or_zero("ra", &json.ra)?,
            rb: number_or_zero("rb", &json.rb)?,
            ptr: number_or_zero("ptr", &json.ptr)?,
            len: number_or_zero("len", &json.len)?,
            digest: bytes32_or_zero("digest", &json.digest)?,
            data: bytes_opt("data", &json.data)?,
            pc: pc()?,
            is: is()?,
        }),

        ReceiptType::Transfer => Receipt::Transfer(ReceiptTransfer {
            id: id()?,
            to: bytes32_or_zero("toAddress", either(&json.to_address, &json.to))?,
            amount: number_or_zero("amount", &json.amount)?,
            asset_id: bytes32_or_zero("assetId", &json.asset_id)?,
            pc: pc()?,
            is: is()?,
        }),

        ReceiptType::TransferOut => Receipt::TransferOut(ReceiptTransferOut {
            id: id()?,
            to: bytes32_or_zero("toAddress", either(&json.to_address, &json.to))?,
            amount: number_or_zero("amount", &json.amount)?,
            asset_id: bytes32_or_zero("assetId", &json.asset_id)?,
            pc: pc()?,
            is: is()?,
        }),

        ReceiptType::ScriptResult => Receipt::ScriptResult(ReceiptScriptResult {
            result: number_or_zero("result", &json.result)?,
            gas_used: number_or_zero("gasUsed", &json.gas_used)?,
        }),

        ReceiptType::MessageOut => {
            let sender = bytes32_or_zero("sender", &json.sender)?;
            let recipient = bytes32_or_zero("recipient", &json.recipient)?;
            let nonce = bytes32_or_zero("nonce", &json.nonce)?;
            let amount = number_or_zero("amount", &json.amount)?;
            let data = bytes_opt("data", &json.data)?.unwrap_or_default();
            let message_id = message_id(&sender, &recipient, &nonce, &amount, &data)?;

            Receipt::MessageOut(ReceiptMessageOut {
                sender,
                recipient,
                amount,
                nonce,
                len: number_or_zero("len", &json.len)?,
                data,
                digest: bytes32_or_zero("digest", &json.digest)?,
                message_id,
            })
        }

        ReceiptType::Mint => {
            let contract_id = id()?;
            let sub_id = bytes32_or_zero("subId", &json.sub_id)?;
            Receipt::Mint(ReceiptMint {
                asset_id: minted_asset_id(&contract_id, &sub_id),
                sub_id,
                contract_id,
                val: number_or_zero("val", &json.val)?,
                pc: pc()?,
                is: is()?,
            })
        }

        ReceiptType::Burn => {
            let contract_id = id()?;
            let sub_id = bytes32_or_zero("subId", &json.sub_id)?;
            Receipt::Burn(ReceiptBurn {
                asset_id: minted_asset_id(&contract_id, &sub_id),
                sub_id,
                contract_id,
                val: number_or_zero("val", &json.val)?,
                pc: pc()?,
                is: is()?,
            })
        }
    };

    Ok(receipt)
}

/// Decode a list of receipts, stopping at the first bad one
pub fn decode_receipts(receipts: &[ReceiptJson]) -> Result<Vec<Receipt>> {
    let decoded = receipts.iter().map(decode_receipt).collect::<Result<Vec<_>>>()?;
    debug!(count = decoded.len(), "decoded receipts");
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderError;
    use fuelwire_spec::{sha256, Bytes32};
    use num_bigint::BigUint;
    use num_traits::Zero;

    fn hex32(fill: u8) -> String {
        Bytes32::new([fill; 32]).to_string()
    }

    #[test]
    fn test_every_tag_decodes_to_its_variant() {
        for ty in ReceiptType::ALL {
            let receipt = decode_receipt(&ReceiptJson::tagged(ty.wire_tag())).unwrap();
            assert_eq!(receipt.receipt_type(), ty);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = decode_receipt(&ReceiptJson::tagged("SELF_DESTRUCT")).unwrap_err();
        assert_eq!(err, ProviderError::InvalidReceiptType("SELF_DESTRUCT".into()));
    }

    #[test]
    fn test_call_fields() {
        let json = ReceiptJson {
            id: Some(hex32(1)),
            to: Some(hex32(2)),
            amount: Some("100".into()),
            asset_id: Some(hex32(3)),
            gas: Some("99999999999999999999".into()),
            param1: Some("1".into()),
            param2: Some("2".into()),
            pc: Some("10368".into()),
            is: Some("10368".into()),
            ..ReceiptJson::tagged("CALL")
        };
        let Receipt::Call(call) = decode_receipt(&json).unwrap() else {
            panic!("expected a call receipt");
        };
        assert_eq!(call.id, Bytes32::new([1; 32]));
        assert_eq!(call.to, Bytes32::new([2; 32]));
        assert_eq!(call.amount, BigUint::from(100u32));
        assert_eq!(call.gas, "99999999999999999999".parse::<BigUint>().unwrap());
        assert_eq!(call.pc, BigUint::from(10368u32));
    }

    #[test]
    fn test_legacy_contract_id_fallback() {
        let json = ReceiptJson {
            contract_id: Some(hex32(9)),
            val: Some("1".into()),
            ..ReceiptJson::tagged("Return")
        };
        let Receipt::Return(ret) = decode_receipt(&json).unwrap() else {
            panic!("expected a return receipt");
        };
        assert_eq!(ret.id, Bytes32::new([9; 32]));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let Receipt::Transfer(transfer) = decode_receipt(&ReceiptJson::tagged("TRANSFER")).unwrap() else {
            panic!("expected a transfer receipt");
        };
        assert_eq!(transfer.id, Bytes32::ZERO);
        assert_eq!(transfer.to, Bytes32::ZERO);
        assert!(transfer.amount.is_zero());
    }

    #[test]
    fn test_transfer_prefers_to_address() {
        let json = ReceiptJson {
            to: Some(hex32(1)),
            to_address: Some(hex32(2)),
            ..ReceiptJson::tagged("TRANSFER_OUT")
        };
        let Receipt::TransferOut(out) = decode_receipt(&json).unwrap() else {
            panic!("expected a transfer out receipt");
        };
        assert_eq!(out.to, Bytes32::new([2; 32]));

        let json = ReceiptJson {
            to: Some(hex32(1)),
            ..ReceiptJson::tagged("TRANSFER")
        };
        let Receipt::Transfer(transfer) = decode_receipt(&json).unwrap() else {
            panic!("expected a transfer receipt");
        };
        assert_eq!(transfer.to, Bytes32::new([1; 32]));
    }

    #[test]
    fn test_panic_keeps_contract_id_separate() {
        let json = ReceiptJson {
            contract_id: Some(hex32(5)),
            reason: Some("4294967296".into()),
            ..ReceiptJson::tagged("PANIC")
        };
        let Receipt::Panic(panic) = decode_receipt(&json).unwrap() else {
            panic!("expected a panic receipt");
        };
        assert_eq!(panic.id, Bytes32::ZERO);
        assert_eq!(panic.contract_id, Bytes32::new([5; 32]));
        assert_eq!(panic.reason, BigUint::from(1u64 << 32));
    }

    #[test]
    fn test_revert_value_comes_from_ra() {
        let json = ReceiptJson {
            ra: Some("18446744073709486081".into()),
            val: Some("1".into()),
            ..ReceiptJson::tagged("REVERT")
        };
        let Receipt::Revert(revert) = decode_receipt(&json).unwrap() else {
            panic!("expected a revert receipt");
        };
        assert_eq!(revert.val, BigUint::from(0xffff_ffff_ffff_0001u64));
    }

    #[test]
    fn test_return_data_payload() {
        let json = ReceiptJson {
            data: Some("0x0102".into()),
            len: Some("2".into()),
            ..ReceiptJson::tagged("RETURN_DATA")
        };
        let Receipt::ReturnData(rd) = decode_receipt(&json).unwrap() else {
            panic!("expected a return data receipt");
        };
        assert_eq!(rd.data, Some(vec![1, 2]));

        let Receipt::LogData(ld) = decode_receipt(&ReceiptJson::tagged("LOG_DATA")).unwrap() else {
            panic!("expected a log data receipt");
        };
        assert_eq!(ld.data, None);
    }

    #[test]
    fn test_message_out_without_data() {
        let mut sender = [0xAA; 32];
        sender[31] = 0x01;
        let mut recipient = [0xBB; 32];
        recipient[31] = 0x02;
        let mut nonce = [0u8; 32];
        nonce[31] = 0x03;

        let json = ReceiptJson {
            sender: Some(Bytes32::new(sender).to_string()),
            recipient: Some(Bytes32::new(recipient).to_string()),
            nonce: Some(Bytes32::new(nonce).to_string()),
            amount: Some("1000".into()),
            ..ReceiptJson::tagged("MESSAGE_OUT")
        };
        let Receipt::MessageOut(message) = decode_receipt(&json).unwrap() else {
            panic!("expected a message out receipt");
        };
        assert!(message.data.is_empty());

        let mut preimage = Vec::new();
        preimage.extend_from_slice(&sender);
        preimage.extend_from_slice(&recipient);
        preimage.extend_from_slice(&nonce);
        preimage.extend_from_slice(&1000u64.to_be_bytes());
        assert_eq!(message.message_id, sha256(&preimage));
    }

    #[test]
    fn test_mint_and_burn_asset_ids() {
        for tag in ["MINT", "BURN"] {
            let json = ReceiptJson {
                id: Some(hex32(1)),
                sub_id: Some(hex32(2)),
                val: Some("5".into()),
                ..ReceiptJson::tagged(tag)
            };
            let expected = minted_asset_id(&Bytes32::new([1; 32]), &Bytes32::new([2; 32]));
            match decode_receipt(&json).unwrap() {
                Receipt::Mint(mint) => assert_eq!(mint.asset_id, expected),
                Receipt::Burn(burn) => assert_eq!(burn.asset_id, expected),
                other => panic!("unexpected receipt {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_fields() {
        let json = ReceiptJson {
            amount: Some("1e3".into()),
            ..ReceiptJson::tagged("TRANSFER")
        };
        assert_eq!(
            decode_receipt(&json),
            Err(ProviderError::InvalidNumber { field: "amount", value: "1e3".into() })
        );

        let json = ReceiptJson {
            amount: Some("1_000".into()),
            ..ReceiptJson::tagged("TRANSFER")
        };
        assert_eq!(
            decode_receipt(&json),
            Err(ProviderError::InvalidNumber { field: "amount", value: "1_000".into() })
        );

        let json = ReceiptJson {
            asset_id: Some("0x12".into()),
            ..ReceiptJson::tagged("TRANSFER")
        };
        assert!(matches!(
            decode_receipt(&json),
            Err(ProviderError::InvalidHex { field: "assetId", .. })
        ));
    }

    #[test]
    fn test_decode_receipts_stops_at_first_error() {
        let good = ReceiptJson::tagged("SCRIPT_RESULT");
        let bad = ReceiptJson::tagged("???");
        assert_eq!(decode_receipts(&[good.clone(), good.clone()]).unwrap().len(), 2);
        assert!(decode_receipts(&[good, bad]).is_err());
    }
}
