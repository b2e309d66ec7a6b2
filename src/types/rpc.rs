//! dcrd JSON-RPC request and result shapes
//!
//! Every result field is `#[serde(default)]`: dcrd omits zero values for many
//! fields and the adapter validates the ones it needs after decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC request body
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            id: 1,
            method: method.to_string(),
            params,
        }
    }
}

/// Structured error object returned by the node
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// JSON-RPC response envelope
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetBlockChainInfoResult {
    pub chain: String,
    pub blocks: i64,
    pub headers: i64,
    #[serde(rename = "syncheight")]
    pub sync_height: i64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,
    pub difficulty: f64,
    #[serde(rename = "verificationprogress")]
    pub verification_progress: f64,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    #[serde(rename = "initialblockdownload")]
    pub initial_block_download: bool,
    #[serde(rename = "maxblocksize")]
    pub max_block_size: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetNetworkInfoResult {
    pub version: i32,
    #[serde(rename = "protocolversion")]
    pub protocol_version: i32,
    #[serde(rename = "timeoffset")]
    pub time_offset: i64,
    pub connections: i32,
    #[serde(rename = "relayfee")]
    pub relay_fee: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetBestBlockResult {
    pub hash: String,
    pub height: i64,
}

/// Result of `getblockheader <hash> true`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetBlockHeaderResult {
    pub hash: String,
    pub confirmations: i64,
    pub version: i32,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    #[serde(rename = "stakeroot")]
    pub stake_root: String,
    #[serde(rename = "votebits")]
    pub vote_bits: u16,
    #[serde(rename = "finalstate")]
    pub final_state: String,
    pub voters: u16,
    #[serde(rename = "freshstake")]
    pub fresh_stake: u8,
    pub revocations: u8,
    #[serde(rename = "poolsize")]
    pub pool_size: u32,
    pub bits: String,
    #[serde(rename = "sbits")]
    pub stake_difficulty: f64,
    pub height: u32,
    pub size: u32,
    pub time: i64,
    pub nonce: u32,
    #[serde(rename = "extradata")]
    pub extra_data: String,
    #[serde(rename = "stakeversion")]
    pub stake_version: u32,
    pub difficulty: f64,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    #[serde(rename = "previousblockhash")]
    pub previous_hash: String,
    #[serde(rename = "nextblockhash")]
    pub next_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcScriptSig {
    pub asm: String,
    pub hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcVin {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub coinbase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stakebase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub txid: String,
    pub vout: u32,
    pub tree: i8,
    pub sequence: u32,
    #[serde(rename = "amountin")]
    pub amount_in: f64,
    #[serde(rename = "blockheight")]
    pub block_height: u32,
    #[serde(rename = "blockindex")]
    pub block_index: u32,
    #[serde(rename = "scriptSig", skip_serializing_if = "Option::is_none")]
    pub script_sig: Option<RpcScriptSig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptPubKeyResult {
    pub asm: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hex: String,
    #[serde(rename = "reqSigs", skip_serializing_if = "is_zero_i32")]
    pub req_sigs: i32,
    #[serde(rename = "type")]
    pub script_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(rename = "commitamt", skip_serializing_if = "Option::is_none")]
    pub commit_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcVout {
    /// Whole coins
    pub value: f64,
    pub n: u32,
    pub version: u16,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKeyResult,
}

/// Result of `getrawtransaction <txid> 1` and of verbose transaction JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransactionResult {
    pub hex: String,
    pub txid: String,
    pub version: i32,
    #[serde(rename = "locktime")]
    pub lock_time: u32,
    pub vin: Vec<RpcVin>,
    pub vout: Vec<RpcVout>,
    pub expiry: u32,
    #[serde(rename = "blockhash", skip_serializing_if = "String::is_empty")]
    pub block_hash: String,
    #[serde(rename = "blockheight", skip_serializing_if = "is_zero_i64")]
    pub block_height: i64,
    #[serde(rename = "blockindex", skip_serializing_if = "is_zero_u32")]
    pub block_index: u32,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub confirmations: i64,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub time: i64,
    #[serde(rename = "blocktime", skip_serializing_if = "is_zero_i64")]
    pub block_time: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EstimateSmartFeeResult {
    /// Whole coins per kilobyte
    #[serde(rename = "feerate")]
    pub fee_rate: f64,
    pub errors: Vec<String>,
    pub blocks: i64,
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}
