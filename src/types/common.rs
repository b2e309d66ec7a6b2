//! Domain types shared by the decoder, translator and RPC client
//!
//! The serde layout of [`Tx`] is the storage layout used by
//! [`crate::parser::UtxoCodec::pack_tx`], so field order and the
//! skip rules below are part of the on-disk format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, comparable key for "this script pays to this identity"
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressDescriptor(Vec<u8>);

impl AddressDescriptor {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for AddressDescriptor {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for AddressDescriptor {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for AddressDescriptor {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AddressDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSig {
    #[serde(default)]
    pub hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPubKey {
    #[serde(default)]
    pub hex: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    /// Script class label (`pubkeyhash`, `nulldata`, ...), empty when unknown
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub script_type: String,
}

/// Transaction input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vin {
    #[serde(default)]
    pub coinbase: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stakebase: String,
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub vout: u32,
    #[serde(rename = "scriptSig", default)]
    pub script_sig: ScriptSig,
    #[serde(default)]
    pub sequence: u32,
    /// Never absent: coinbase and stakebase inputs carry an empty list
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl Vin {
    /// Input without a spendable previous output
    pub fn is_generated(&self) -> bool {
        !self.coinbase.is_empty() || !self.stakebase.is_empty()
    }
}

/// Transaction output; the value is always held in atoms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vout {
    #[serde(rename = "ValueSat", default)]
    pub value_sat: u64,
    /// Raw `value` echo; stored transactions keep it at zero
    #[serde(rename = "value", default = "zero_number")]
    pub json_value: serde_json::Number,
    #[serde(default)]
    pub n: u32,
    #[serde(rename = "scriptPubKey", default)]
    pub script_pub_key: ScriptPubKey,
}

impl Default for Vout {
    fn default() -> Self {
        Self {
            value_sat: 0,
            json_value: zero_number(),
            n: 0,
            script_pub_key: ScriptPubKey::default(),
        }
    }
}

/// Domain transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    #[serde(default)]
    pub hex: String,
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub locktime: u32,
    #[serde(default)]
    pub vin: Vec<Vin>,
    #[serde(default)]
    pub vout: Vec<Vout>,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub confirmations: u32,
    /// Seconds since epoch
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub time: i64,
    /// Seconds since epoch
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub blocktime: i64,
}

impl Tx {
    /// Sum of all output values in atoms
    pub fn total_out(&self) -> u64 {
        self.vout.iter().map(|v| v.value_sat).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub hash: String,
    pub prev: String,
    pub next: String,
    pub height: u32,
    pub confirmations: i64,
    /// Serialized block size in bytes
    pub size: usize,
    /// Seconds since epoch
    pub time: i64,
    pub merkle_root: String,
    /// Raw header version, including the auxpow flag bit
    pub version: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub txs: Vec<Tx>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub header: BlockHeader,
    pub txids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain: String,
    pub blocks: i64,
    pub headers: i64,
    pub best_block_hash: String,
    pub difficulty: String,
    pub size_on_disk: i64,
    pub version: String,
    pub subversion: String,
    pub protocol_version: String,
    pub time_offset: f64,
    pub warnings: String,
}

fn zero_number() -> serde_json::Number {
    serde_json::Number::from(0u8)
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}
