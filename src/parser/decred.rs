//! Decred parser
//!
//! Composes the generic [`BitcoinLikeParser`] codec with Decred address rules
//! and the Decred flavour of node results.

use crate::errors::{ParseError, ParseResult};
use crate::params::ChainParams;
use crate::parser::base::BitcoinLikeParser;
use crate::parser::block::decode_raw_block;
use crate::parser::translate::{tx_from_rpc_result, tx_to_rpc_result};
use crate::parser::{BlockChainParser, UtxoCodec};
use crate::script::{self, ScriptClass, DEFAULT_SCRIPT_VERSION};
use crate::types::rpc::GetTransactionResult;
use crate::types::{AddressDescriptor, Block, BlockHeader, Tx, Vout};
use crate::utils::time::TimeUnit;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Parser for Decred blocks, transactions and addresses
#[derive(Clone)]
pub struct DecredParser {
    base: Arc<dyn UtxoCodec>,
    params: &'static ChainParams,
}

impl DecredParser {
    pub fn new(params: &'static ChainParams) -> Self {
        Self::with_codec(params, Arc::new(BitcoinLikeParser::new()))
    }

    /// Build a parser on top of a custom generic codec
    pub fn with_codec(params: &'static ChainParams, base: Arc<dyn UtxoCodec>) -> Self {
        Self { base, params }
    }

    pub fn params(&self) -> &'static ChainParams {
        self.params
    }

    /// Translate an already decoded node transaction result
    pub fn tx_from_result(
        &self,
        result: &GetTransactionResult,
        time_unit: TimeUnit,
    ) -> ParseResult<Tx> {
        tx_from_rpc_result(result, time_unit)
    }
}

impl std::fmt::Debug for DecredParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecredParser")
            .field("network", &self.params.name)
            .finish()
    }
}

impl BlockChainParser for DecredParser {
    fn decode_block(&self, raw: &[u8]) -> ParseResult<Block> {
        let block = decode_raw_block(raw)?;
        debug!(
            "Decoded block with {} transactions (auxpow: {})",
            block.txs.len(),
            block.has_auxpow()
        );

        let txs = block.txs.iter().map(|tx| self.base.tx_from_wire(tx)).collect();

        Ok(Block {
            header: BlockHeader {
                prev: block.header.prev_blockhash.to_string(),
                size: raw.len(),
                time: i64::from(block.header.time),
                merkle_root: block.header.merkle_root.to_string(),
                version: block.header.version.to_consensus(),
                ..Default::default()
            },
            txs,
        })
    }

    fn parse_tx_from_json(&self, raw: &[u8]) -> ParseResult<Tx> {
        let result: GetTransactionResult =
            serde_json::from_slice(raw).map_err(|e| ParseError::MalformedResult {
                field: "transaction",
                reason: e.to_string(),
            })?;
        tx_from_rpc_result(&result, TimeUnit::Milliseconds)
    }

    fn descriptor_from_output(&self, output: &Vout) -> ParseResult<AddressDescriptor> {
        let script_bytes = hex::decode(&output.script_pub_key.hex).map_err(|e| {
            ParseError::InvalidScript(format!("output {}: bad hex: {}", output.n, e))
        })?;

        let (class, addresses) =
            script::extract_pk_script_addrs(DEFAULT_SCRIPT_VERSION, &script_bytes, self.params)?;

        if class == ScriptClass::NullData {
            let payload = self.base.try_parse_op_return(&script_bytes);
            if !payload.is_empty() {
                return Ok(AddressDescriptor::new(payload.into_bytes()));
            }
        }

        Ok(AddressDescriptor::new(addresses.concat().into_bytes()))
    }

    fn descriptor_from_address(&self, address: &str) -> AddressDescriptor {
        AddressDescriptor::from(address.as_bytes())
    }

    fn addresses_from_descriptor(
        &self,
        descriptor: &AddressDescriptor,
    ) -> ParseResult<(Vec<String>, bool)> {
        if descriptor.is_empty() {
            return Ok((Vec::new(), true));
        }
        let address = String::from_utf8_lossy(descriptor.as_bytes()).into_owned();
        Ok((vec![address], true))
    }

    fn pack_tx(&self, tx: &Tx, height: u32, block_time: i64) -> ParseResult<Vec<u8>> {
        self.base.pack_tx(tx, height, block_time)
    }

    fn unpack_tx(&self, buf: &[u8]) -> ParseResult<(Tx, u32)> {
        self.base.unpack_tx(buf)
    }

    fn get_transaction_specific(&self, tx: &Tx) -> ParseResult<Value> {
        serde_json::to_value(tx_to_rpc_result(tx)).map_err(|e| ParseError::MalformedResult {
            field: "transaction",
            reason: e.to_string(),
        })
    }
}
