//! Decred chain adapter
//!
//! Decodes Decred blocks (including merged-mining auxpow records), translates
//! node transaction results into the indexer's domain model, derives address
//! descriptors and talks to dcrd over JSON-RPC.

pub mod cli;
pub mod config;
pub mod errors;
pub mod params;
pub mod parser;
pub mod rpc;
pub mod script;
pub mod types;
pub mod utils;
