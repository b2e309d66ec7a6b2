//! Decred adapter - Type System
//!
//! - `common`: Domain model handed to the indexer (Block, Tx, Vin, Vout, AddressDescriptor)
//! - `rpc`: Wire shapes of the dcrd JSON-RPC requests and results

mod common;
pub mod rpc;

pub use common::*;
