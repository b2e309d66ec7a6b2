//! dcrd RPC integration module
//!
//! This module provides all node-facing functionality:
//! - **Transport** - pooled JSON-RPC over HTTP with safe response decoding
//! - **Client** - [`DecredRpc`], the host-facing chain operations
//!
//! The host engine drives the adapter through the [`BlockChain`] trait.

pub mod client;
pub mod transport;

use crate::errors::RpcResult;
use crate::parser::BlockChainParser;
use crate::types::{Block, BlockHeader, BlockInfo, ChainInfo, Tx};
use async_trait::async_trait;

// Re-export main types
pub use client::DecredRpc;
pub use transport::{safe_decode_response, RpcTransport};

/// Chain operations consumed by the indexing engine
#[async_trait]
pub trait BlockChain: Send + Sync {
    fn parser(&self) -> &dyn BlockChainParser;

    fn is_testnet(&self) -> bool;

    /// `livenet` or `testnet`
    fn network_name(&self) -> &'static str;

    async fn get_chain_info(&self) -> RpcResult<ChainInfo>;

    async fn get_best_block_hash(&self) -> RpcResult<String>;

    async fn get_best_block_height(&self) -> RpcResult<u32>;

    async fn get_block_hash(&self, height: u32) -> RpcResult<String>;

    async fn get_block_header(&self, hash: &str) -> RpcResult<BlockHeader>;

    async fn get_block_header_by_height(&self, height: u32) -> RpcResult<BlockHeader>;

    async fn get_block_info(&self, hash: &str) -> RpcResult<BlockInfo>;

    /// Fetch a block by hash, or by height when `hash` is empty
    async fn get_block(&self, hash: &str, height: u32) -> RpcResult<Block>;

    async fn get_mempool_transactions(&self) -> RpcResult<Vec<String>>;

    async fn get_transaction(&self, txid: &str) -> RpcResult<Tx>;

    async fn get_transaction_for_mempool(&self, txid: &str) -> RpcResult<Tx>;

    /// Fee rate in atoms per kilobyte
    async fn estimate_smart_fee(&self, blocks: u32, conservative: bool) -> RpcResult<u64>;

    /// Fee rate in atoms per kilobyte
    async fn estimate_fee(&self, blocks: u32) -> RpcResult<u64>;

    /// Broadcast a transaction, returning its txid
    async fn send_raw_transaction(&self, tx_hex: &str) -> RpcResult<String>;
}
