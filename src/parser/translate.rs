//! Node transaction results <-> domain transactions

use crate::errors::{ParseError, ParseResult};
use crate::types::rpc::{GetTransactionResult, RpcScriptSig, RpcVin, RpcVout, ScriptPubKeyResult};
use crate::types::{ScriptPubKey, ScriptSig, Tx, Vin, Vout};
use crate::utils::amount::{atoms_to_coins, coins_to_atoms};
use crate::utils::time::{normalize_time, TimeUnit};

/// Translate a node transaction result into the domain model
///
/// `time_unit` names the unit of the result's `time` field; `blocktime` is
/// always seconds.
pub fn tx_from_rpc_result(result: &GetTransactionResult, time_unit: TimeUnit) -> ParseResult<Tx> {
    if result.txid.is_empty() {
        return Err(ParseError::MalformedResult {
            field: "txid",
            reason: "is missing".to_string(),
        });
    }
    if result.hex.is_empty() {
        return Err(ParseError::MalformedResult {
            field: "hex",
            reason: format!("is missing for {}", result.txid),
        });
    }

    let vin = result.vin.iter().map(vin_from_rpc).collect();
    let vout = result
        .vout
        .iter()
        .map(vout_from_rpc)
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Tx {
        hex: result.hex.clone(),
        txid: result.txid.clone(),
        version: result.version,
        locktime: result.lock_time,
        vin,
        vout,
        confirmations: u32::try_from(result.confirmations).unwrap_or(0),
        time: normalize_time(result.time, time_unit),
        blocktime: result.block_time,
    })
}

fn vin_from_rpc(input: &RpcVin) -> Vin {
    Vin {
        coinbase: input.coinbase.clone(),
        stakebase: input.stakebase.clone(),
        txid: input.txid.clone(),
        vout: input.vout,
        script_sig: ScriptSig {
            hex: input
                .script_sig
                .as_ref()
                .map(|s| s.hex.clone())
                .unwrap_or_default(),
        },
        sequence: input.sequence,
        // Resolving input addresses needs the spent output, which the caller owns
        addresses: Vec::new(),
    }
}

fn vout_from_rpc(output: &RpcVout) -> ParseResult<Vout> {
    let value_sat = coins_to_atoms(output.value).ok_or_else(|| ParseError::MalformedResult {
        field: "vout.value",
        reason: format!("{} is not a valid amount (output {})", output.value, output.n),
    })?;

    Ok(Vout {
        value_sat,
        n: output.n,
        script_pub_key: ScriptPubKey {
            hex: output.script_pub_key.hex.clone(),
            addresses: output.script_pub_key.addresses.clone(),
            script_type: output.script_pub_key.script_type.clone(),
        },
        ..Default::default()
    })
}

/// Render a domain transaction in the node's result shape
pub fn tx_to_rpc_result(tx: &Tx) -> GetTransactionResult {
    GetTransactionResult {
        hex: tx.hex.clone(),
        txid: tx.txid.clone(),
        version: tx.version,
        lock_time: tx.locktime,
        vin: tx
            .vin
            .iter()
            .map(|input| RpcVin {
                coinbase: input.coinbase.clone(),
                stakebase: input.stakebase.clone(),
                txid: input.txid.clone(),
                vout: input.vout,
                sequence: input.sequence,
                script_sig: (!input.script_sig.hex.is_empty()).then(|| RpcScriptSig {
                    asm: String::new(),
                    hex: input.script_sig.hex.clone(),
                }),
                ..Default::default()
            })
            .collect(),
        vout: tx
            .vout
            .iter()
            .map(|output| RpcVout {
                value: atoms_to_coins(output.value_sat),
                n: output.n,
                version: 0,
                script_pub_key: ScriptPubKeyResult {
                    hex: output.script_pub_key.hex.clone(),
                    script_type: output.script_pub_key.script_type.clone(),
                    addresses: output.script_pub_key.addresses.clone(),
                    ..Default::default()
                },
            })
            .collect(),
        confirmations: i64::from(tx.confirmations),
        time: tx.time,
        block_time: tx.blocktime,
        ..Default::default()
    }
}
