use crate::config::RpcConfig;
use crate::errors::{ParseError, RpcError, RpcResult};
use crate::params::{resolve_parameters, ChainParams};
use crate::parser::{BlockChainParser, DecredParser};
use crate::rpc::transport::RpcTransport;
use crate::rpc::BlockChain;
use crate::types::rpc::{
    EstimateSmartFeeResult, GetBestBlockResult, GetBlockChainInfoResult, GetBlockHeaderResult,
    GetNetworkInfoResult, GetTransactionResult,
};
use crate::types::{Block, BlockHeader, BlockInfo, ChainInfo, Tx};
use crate::utils::amount::coins_to_atoms;
use crate::utils::time::TimeUnit;
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

/// dcrd error code for "no information available about transaction"
pub const ERR_NO_TX_INFO: i64 = -5;

/// Decred node client exposing the host-facing chain operations
pub struct DecredRpc {
    transport: RpcTransport,
    parser: DecredParser,
    testnet: bool,
    network: &'static str,
}

impl DecredRpc {
    /// Connect to the node, detect its network and build the matching parser
    pub async fn connect(config: &RpcConfig) -> RpcResult<Self> {
        let transport = RpcTransport::new(config)?;
        let chain_info = fetch_chain_info(&transport).await?;
        info!("Chain name {}", chain_info.chain);

        let params = resolve_parameters(&chain_info.chain);
        let rpc = Self::from_transport(transport, params);
        info!("rpc: block chain {} ({})", params.name, rpc.network);
        Ok(rpc)
    }

    /// Build a client for a known network without contacting the node
    pub fn with_params(config: &RpcConfig, params: &'static ChainParams) -> RpcResult<Self> {
        Ok(Self::from_transport(RpcTransport::new(config)?, params))
    }

    fn from_transport(transport: RpcTransport, params: &'static ChainParams) -> Self {
        let testnet = !params.is_mainnet();
        Self {
            transport,
            parser: DecredParser::new(params),
            testnet,
            network: if testnet { "testnet" } else { "livenet" },
        }
    }

    pub fn decred_parser(&self) -> &DecredParser {
        &self.parser
    }

    async fn block_header_result(&self, hash: &str) -> RpcResult<GetBlockHeaderResult> {
        self.transport
            .call("getblockheader", vec![json!(hash), json!(true)])
            .await
    }
}

async fn fetch_chain_info(transport: &RpcTransport) -> RpcResult<ChainInfo> {
    let chain: GetBlockChainInfoResult = transport.call("getblockchaininfo", vec![]).await?;
    let network: GetNetworkInfoResult = transport.call("getnetworkinfo", vec![]).await?;

    Ok(ChainInfo {
        chain: chain.chain,
        blocks: chain.blocks,
        headers: chain.headers,
        best_block_hash: chain.best_block_hash,
        // Whole units, matching what the indexer reports for other coins
        difficulty: (chain.difficulty.trunc() as i64).to_string(),
        size_on_disk: chain.sync_height,
        version: network.version.to_string(),
        subversion: String::new(),
        protocol_version: network.protocol_version.to_string(),
        time_offset: network.time_offset as f64,
        warnings: String::new(),
    })
}

fn header_from_result(result: GetBlockHeaderResult) -> BlockHeader {
    BlockHeader {
        hash: result.hash,
        prev: result.previous_hash,
        next: result.next_hash,
        height: result.height,
        confirmations: result.confirmations,
        size: result.size as usize,
        time: result.time,
        merkle_root: result.merkle_root,
        version: result.version,
    }
}

fn atoms_per_kb(field: &'static str, coins: f64) -> RpcResult<u64> {
    coins_to_atoms(coins).ok_or_else(|| {
        RpcError::Parse(ParseError::MalformedResult {
            field,
            reason: format!("{} is not a valid fee rate", coins),
        })
    })
}

#[async_trait]
impl BlockChain for DecredRpc {
    fn parser(&self) -> &dyn BlockChainParser {
        &self.parser
    }

    fn is_testnet(&self) -> bool {
        self.testnet
    }

    fn network_name(&self) -> &'static str {
        self.network
    }

    async fn get_chain_info(&self) -> RpcResult<ChainInfo> {
        fetch_chain_info(&self.transport).await
    }

    async fn get_best_block_hash(&self) -> RpcResult<String> {
        let best: GetBestBlockResult = self.transport.call("getbestblock", vec![]).await?;
        Ok(best.hash)
    }

    async fn get_best_block_height(&self) -> RpcResult<u32> {
        let best: GetBestBlockResult = self.transport.call("getbestblock", vec![]).await?;
        u32::try_from(best.height).map_err(|_| {
            RpcError::Parse(ParseError::MalformedResult {
                field: "height",
                reason: format!("{} is out of range", best.height),
            })
        })
    }

    async fn get_block_hash(&self, height: u32) -> RpcResult<String> {
        self.transport.call("getblockhash", vec![json!(height)]).await
    }

    async fn get_block_header(&self, hash: &str) -> RpcResult<BlockHeader> {
        Ok(header_from_result(self.block_header_result(hash).await?))
    }

    async fn get_block_header_by_height(&self, height: u32) -> RpcResult<BlockHeader> {
        let hash = self.get_block_hash(height).await?;
        self.get_block_header(&hash).await
    }

    async fn get_block_info(&self, hash: &str) -> RpcResult<BlockInfo> {
        if hash.is_empty() {
            return Err(RpcError::NotFound("block"));
        }

        Ok(BlockInfo {
            header: self.get_block_header(hash).await?,
            txids: Vec::new(),
        })
    }

    async fn get_block(&self, hash: &str, height: u32) -> RpcResult<Block> {
        let hash = if hash.is_empty() {
            self.get_block_hash(height).await?
        } else {
            hash.to_string()
        };

        let raw_hex: String = self
            .transport
            .call("getblock", vec![json!(hash), json!(false)])
            .await?;
        let raw = hex::decode(&raw_hex)
            .map_err(|e| RpcError::Decode(format!("getblock {}: invalid hex: {}", hash, e)))?;

        let mut block = self.parser.decode_block(&raw)?;
        let header = self.get_block_header(&hash).await?;
        debug!(
            "Block {} at height {} has {} transactions",
            hash,
            header.height,
            block.txs.len()
        );
        block.header = BlockHeader {
            size: block.header.size,
            ..header
        };
        Ok(block)
    }

    async fn get_mempool_transactions(&self) -> RpcResult<Vec<String>> {
        self.transport.call("getrawmempool", vec![]).await
    }

    async fn get_transaction(&self, txid: &str) -> RpcResult<Tx> {
        if txid.is_empty() {
            return Err(RpcError::NotFound("txid"));
        }

        let result: GetTransactionResult = self
            .transport
            .call("getrawtransaction", vec![json!(txid), json!(1)])
            .await
            .map_err(|e| match e {
                RpcError::Node { code, .. } if code == ERR_NO_TX_INFO => {
                    RpcError::UnknownTransaction {
                        txid: txid.to_string(),
                    }
                }
                other => other,
            })?;

        Ok(self.parser.tx_from_result(&result, TimeUnit::Seconds)?)
    }

    async fn get_transaction_for_mempool(&self, txid: &str) -> RpcResult<Tx> {
        self.get_transaction(txid).await
    }

    async fn estimate_smart_fee(&self, blocks: u32, conservative: bool) -> RpcResult<u64> {
        let mode = if conservative { "conservative" } else { "economical" };
        let result: EstimateSmartFeeResult = self
            .transport
            .call("estimatesmartfee", vec![json!(blocks), json!(mode)])
            .await?;
        if !result.errors.is_empty() {
            warn!("estimatesmartfee reported: {}", result.errors.join("; "));
        }
        atoms_per_kb("feerate", result.fee_rate)
    }

    async fn estimate_fee(&self, blocks: u32) -> RpcResult<u64> {
        let fee: f64 = self.transport.call("estimatefee", vec![json!(blocks)]).await?;
        atoms_per_kb("fee", fee)
    }

    async fn send_raw_transaction(&self, tx_hex: &str) -> RpcResult<String> {
        self.transport
            .call("sendrawtransaction", vec![json!(tx_hex)])
            .await
    }
}
