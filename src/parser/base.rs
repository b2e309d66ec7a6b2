//! Generic UTXO codec shared by bitcoin-derived chains
//!
//! Handles everything that does not depend on chain-specific address rules:
//! wire transaction conversion, the packed storage format and OP_RETURN
//! payload rendering.

use crate::errors::{ParseError, ParseResult};
use crate::parser::UtxoCodec;
use crate::script;
use crate::types::{ScriptPubKey, ScriptSig, Tx, Vin, Vout};
use crate::utils::vlq;
use bitcoin::consensus::encode;
use bitcoin::Transaction;
use byteorder::{BigEndian, ByteOrder};

/// Bytes in front of the JSON body of a packed transaction
pub const PACKED_PREFIX_LEN: usize = 4 + vlq::MAX_LEN_64;

#[derive(Debug, Clone, Default)]
pub struct BitcoinLikeParser;

impl BitcoinLikeParser {
    pub fn new() -> Self {
        Self
    }
}

impl UtxoCodec for BitcoinLikeParser {
    fn tx_from_wire(&self, tx: &Transaction) -> Tx {
        let is_coinbase = tx.is_coinbase();

        let vin = tx
            .input
            .iter()
            .map(|input| {
                if is_coinbase {
                    Vin {
                        coinbase: hex::encode(input.script_sig.as_bytes()),
                        sequence: input.sequence.0,
                        ..Default::default()
                    }
                } else {
                    Vin {
                        txid: input.previous_output.txid.to_string(),
                        vout: input.previous_output.vout,
                        script_sig: ScriptSig {
                            hex: hex::encode(input.script_sig.as_bytes()),
                        },
                        sequence: input.sequence.0,
                        ..Default::default()
                    }
                }
            })
            .collect();

        let vout = tx
            .output
            .iter()
            .enumerate()
            .map(|(n, output)| Vout {
                value_sat: output.value.to_sat(),
                n: n as u32,
                script_pub_key: ScriptPubKey {
                    hex: hex::encode(output.script_pubkey.as_bytes()),
                    ..Default::default()
                },
                ..Default::default()
            })
            .collect();

        Tx {
            hex: encode::serialize_hex(tx),
            txid: tx.compute_txid().to_string(),
            version: tx.version.0,
            locktime: tx.lock_time.to_consensus_u32(),
            vin,
            vout,
            ..Default::default()
        }
    }

    fn pack_tx(&self, tx: &Tx, height: u32, block_time: i64) -> ParseResult<Vec<u8>> {
        let body = serde_json::to_vec(tx)
            .map_err(|e| ParseError::MalformedPackedTx(format!("serialise: {}", e)))?;

        let mut buf = vec![0u8; PACKED_PREFIX_LEN];
        BigEndian::write_u32(&mut buf[0..4], height);
        vlq::put_int(&mut buf[4..], block_time);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    fn unpack_tx(&self, buf: &[u8]) -> ParseResult<(Tx, u32)> {
        if buf.len() < PACKED_PREFIX_LEN {
            return Err(ParseError::MalformedPackedTx(format!(
                "need at least {} bytes, got {}",
                PACKED_PREFIX_LEN,
                buf.len()
            )));
        }

        let height = BigEndian::read_u32(&buf[0..4]);
        let (block_time, _) = vlq::read_int(&buf[4..PACKED_PREFIX_LEN])
            .ok_or_else(|| ParseError::MalformedPackedTx("unterminated block time".to_string()))?;

        let mut tx: Tx = serde_json::from_slice(&buf[PACKED_PREFIX_LEN..])
            .map_err(|e| ParseError::MalformedPackedTx(format!("json body: {}", e)))?;
        if tx.blocktime == 0 {
            tx.blocktime = block_time;
        }
        Ok((tx, height))
    }

    fn try_parse_op_return(&self, script_bytes: &[u8]) -> String {
        script::try_parse_op_return(script_bytes)
    }
}
