use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::params::{resolve_parameters, ChainParams};
use crate::parser::{BlockChainParser, DecredParser};
use crate::types::{ScriptPubKey, Vout};
use crate::utils::amount::format_atoms_as_dcr;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Parameters for `--network`, falling back to the configured chain
fn network_params(network: Option<&str>) -> &'static ChainParams {
    match network {
        Some(name) => resolve_parameters(name),
        None => resolve_parameters(&AppConfig::get_defaults().network.chain),
    }
}

/// Decode a raw block offline
#[derive(Args)]
pub struct DecodeBlockCommand {
    /// Raw block as hex (omit when using --file)
    #[arg(required_unless_present = "file")]
    pub hex: Option<String>,

    /// Read the hex from a file instead
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Network used for address rendering (mainnet, testnet3); defaults to config
    #[arg(long)]
    pub network: Option<String>,
}

impl DecodeBlockCommand {
    pub fn run(&self) -> AppResult<()> {
        let hex_str = match (&self.hex, &self.file) {
            (Some(hex_str), _) => hex_str.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => return Err(AppError::InvalidInput("no block given".to_string())),
        };
        let raw = hex::decode(hex_str.trim())?;
        info!("Decoding {} byte block", raw.len());

        let parser = DecredParser::new(network_params(self.network.as_deref()));
        let block = parser.decode_block(&raw)?;

        println!(
            "size: {} bytes, time: {}, version: {:#x}",
            block.header.size, block.header.time, block.header.version
        );
        for tx in &block.txs {
            println!("{} {}", tx.txid, format_atoms_as_dcr(tx.total_out()));
            for vout in &tx.vout {
                let descriptor = parser.descriptor_from_output(vout)?;
                let (addresses, _) = parser.addresses_from_descriptor(&descriptor)?;
                println!("  #{} {} {:?}", vout.n, format_atoms_as_dcr(vout.value_sat), addresses);
            }
        }
        Ok(())
    }
}

/// Compute an address descriptor
#[derive(Args)]
pub struct AddressDescriptorCommand {
    /// Address string
    #[arg(long, conflicts_with = "script", required_unless_present = "script")]
    pub address: Option<String>,

    /// Output script as hex
    #[arg(long)]
    pub script: Option<String>,

    /// Network used for script resolution (mainnet, testnet3); defaults to config
    #[arg(long)]
    pub network: Option<String>,
}

impl AddressDescriptorCommand {
    pub fn run(&self) -> AppResult<()> {
        let parser = DecredParser::new(network_params(self.network.as_deref()));

        let descriptor = match (&self.address, &self.script) {
            (Some(address), _) => parser.descriptor_from_address(address),
            (None, Some(script)) => parser.descriptor_from_output(&Vout {
                script_pub_key: ScriptPubKey {
                    hex: script.clone(),
                    ..Default::default()
                },
                ..Default::default()
            })?,
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "either --address or --script is required".to_string(),
                ))
            }
        };

        let (addresses, searchable) = parser.addresses_from_descriptor(&descriptor)?;
        println!("descriptor: {}", descriptor);
        println!("addresses:  {:?} (searchable: {})", addresses, searchable);
        Ok(())
    }
}
