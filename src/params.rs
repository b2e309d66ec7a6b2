//! Decred network parameters
//!
//! The adapter only needs the pieces of the chain parameters that influence
//! address encoding and network identification. Parameter sets are statics;
//! the registry records which of them have been activated for this process so
//! that repeated or concurrent initialization converges on one registration.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Network magic of the Decred main network
pub const MAINNET_MAGIC: u32 = 0xd9b4_00f9;

/// Network magic of the Decred public test network (testnet3)
pub const TESTNET_MAGIC: u32 = 0xb194_aa75;

/// Network parameters consumed by the address codec and block decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParams {
    /// Human network name as reported by `getblockchaininfo`
    pub name: &'static str,
    /// Network magic
    pub net: u32,
    /// Address id prefixed to secp256k1 pubkey payloads
    pub pubkey_addr_id: [u8; 2],
    /// Address id prefixed to pay-to-pubkey-hash payloads
    pub pubkey_hash_addr_id: [u8; 2],
    /// Address id prefixed to pay-to-script-hash payloads
    pub script_hash_addr_id: [u8; 2],
}

impl ChainParams {
    pub fn is_mainnet(&self) -> bool {
        self.net == MAINNET_MAGIC
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("network name is empty".to_string());
        }
        let ids = [
            self.pubkey_addr_id,
            self.pubkey_hash_addr_id,
            self.script_hash_addr_id,
        ];
        if ids.contains(&[0, 0]) {
            return Err(format!("{}: address id is unset", self.name));
        }
        if ids[0] == ids[1] || ids[0] == ids[2] || ids[1] == ids[2] {
            return Err(format!("{}: address ids collide", self.name));
        }
        Ok(())
    }
}

/// Main network, addresses start with "Dk" / "Ds" / "Dc"
pub static MAINNET_PARAMS: ChainParams = ChainParams {
    name: "mainnet",
    net: MAINNET_MAGIC,
    pubkey_addr_id: [0x13, 0x86],
    pubkey_hash_addr_id: [0x07, 0x3f],
    script_hash_addr_id: [0x07, 0x1a],
};

/// Test network, addresses start with "Tk" / "Ts" / "Tc"
pub static TESTNET_PARAMS: ChainParams = ChainParams {
    name: "testnet3",
    net: TESTNET_MAGIC,
    pubkey_addr_id: [0x28, 0xf7],
    pubkey_hash_addr_id: [0x0f, 0x21],
    script_hash_addr_id: [0x0e, 0xfc],
};

lazy_static! {
    static ref REGISTERED: RwLock<HashMap<u32, &'static ChainParams>> =
        RwLock::new(HashMap::new());
}

/// Register a parameter set for this process
///
/// Returns `true` when this call performed the registration and `false` when
/// the set was already registered. A malformed set is a programming error and
/// aborts.
pub fn register(params: &'static ChainParams) -> bool {
    if let Err(reason) = params.validate() {
        panic!("refusing to register malformed chain parameters: {}", reason);
    }

    if is_registered(params) {
        return false;
    }

    let mut registered = REGISTERED.write().unwrap_or_else(|e| e.into_inner());
    if registered.contains_key(&params.net) {
        return false;
    }
    registered.insert(params.net, params);
    debug!("Registered chain parameters for {}", params.name);
    true
}

/// Whether a parameter set with the same network magic has been registered
pub fn is_registered(params: &ChainParams) -> bool {
    REGISTERED
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .contains_key(&params.net)
}

/// Resolve the parameter set for a network name reported by the node
///
/// Unknown names fall back to mainnet.
pub fn resolve_parameters(network: &str) -> &'static ChainParams {
    register(&MAINNET_PARAMS);

    match network {
        "testnet3" => &TESTNET_PARAMS,
        "mainnet" => &MAINNET_PARAMS,
        _ => &MAINNET_PARAMS,
    }
}
