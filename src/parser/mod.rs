//! Block, transaction and address parsing
//!
//! This module provides the parsing side of the adapter:
//! - **Block** - raw block framing with auxpow skipping
//! - **Base** - generic UTXO codec shared by bitcoin-derived chains
//! - **Translate** - node JSON results to domain transactions
//! - **Decred** - the Decred parser composing all of the above
//!
//! The host engine talks to the adapter through [`BlockChainParser`]; the
//! generic codec is reached through [`UtxoCodec`].

pub mod base;
pub mod block;
pub mod decred;
pub mod translate;

use crate::errors::ParseResult;
use crate::types::{AddressDescriptor, Block, Tx, Vout};
use bitcoin::Transaction;
use serde_json::Value;

// Re-export main types
pub use base::BitcoinLikeParser;
pub use block::{decode_raw_block, RawBlock, VERSION_AUXPOW};
pub use decred::DecredParser;
pub use translate::{tx_from_rpc_result, tx_to_rpc_result};

/// Chain-agnostic transaction codec
pub trait UtxoCodec: Send + Sync {
    /// Convert a decoded wire transaction; output addresses stay unresolved
    fn tx_from_wire(&self, tx: &Transaction) -> Tx;

    /// Serialize a transaction into the storage layout
    fn pack_tx(&self, tx: &Tx, height: u32, block_time: i64) -> ParseResult<Vec<u8>>;

    /// Reverse of [`UtxoCodec::pack_tx`], returning the block height
    fn unpack_tx(&self, buf: &[u8]) -> ParseResult<(Tx, u32)>;

    /// Render an OP_RETURN payload, or an empty string
    fn try_parse_op_return(&self, script: &[u8]) -> String;
}

/// Parser contract consumed by the indexing engine
pub trait BlockChainParser: Send + Sync {
    fn decode_block(&self, raw: &[u8]) -> ParseResult<Block>;

    /// Parse a verbose transaction JSON document whose `time` is in milliseconds
    fn parse_tx_from_json(&self, raw: &[u8]) -> ParseResult<Tx>;

    fn descriptor_from_output(&self, output: &Vout) -> ParseResult<AddressDescriptor>;

    fn descriptor_from_address(&self, address: &str) -> AddressDescriptor;

    /// Addresses for a descriptor plus whether they are searchable
    fn addresses_from_descriptor(
        &self,
        descriptor: &AddressDescriptor,
    ) -> ParseResult<(Vec<String>, bool)>;

    fn pack_tx(&self, tx: &Tx, height: u32, block_time: i64) -> ParseResult<Vec<u8>>;

    fn unpack_tx(&self, buf: &[u8]) -> ParseResult<(Tx, u32)>;

    /// Node-shaped JSON rendering of a transaction
    fn get_transaction_specific(&self, tx: &Tx) -> ParseResult<Value>;
}
