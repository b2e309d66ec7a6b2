use super::RpcArgs;
use crate::errors::{AppError, AppResult};
use crate::rpc::{BlockChain, DecredRpc};
use crate::utils::amount::format_atoms_as_dcr;
use crate::utils::time::timestamp_to_rfc3339;
use clap::Args;
use tracing::{error, info};

async fn connect(args: &RpcArgs) -> AppResult<DecredRpc> {
    let rpc_config = args.rpc_config();
    info!("Connecting to: {}", rpc_config.url);

    DecredRpc::connect(&rpc_config).await.map_err(|e| {
        error!("Failed to connect to dcrd: {}", e);
        AppError::from(e)
    })
}

/// Show chain and network information
#[derive(Args)]
pub struct ChainInfoCommand {
    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl ChainInfoCommand {
    pub async fn run(&self) -> AppResult<()> {
        let rpc = connect(&self.rpc).await?;
        let chain_info = rpc.get_chain_info().await?;
        println!("{}", serde_json::to_string_pretty(&chain_info)?);
        println!("network: {}", rpc.network_name());
        Ok(())
    }
}

/// Show the best block
#[derive(Args)]
pub struct BestBlockCommand {
    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl BestBlockCommand {
    pub async fn run(&self) -> AppResult<()> {
        let rpc = connect(&self.rpc).await?;
        let (hash, height) =
            futures::try_join!(rpc.get_best_block_hash(), rpc.get_best_block_height())?;
        println!("{} {}", height, hash);
        Ok(())
    }
}

/// Fetch and decode a block
#[derive(Args)]
pub struct BlockCommand {
    /// Block height
    #[arg(long, conflicts_with = "hash", required_unless_present = "hash")]
    pub height: Option<u32>,

    /// Block hash
    #[arg(long)]
    pub hash: Option<String>,

    /// Print every transaction as JSON
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl BlockCommand {
    pub async fn run(&self) -> AppResult<()> {
        let rpc = connect(&self.rpc).await?;
        let block = rpc
            .get_block(self.hash.as_deref().unwrap_or(""), self.height.unwrap_or(0))
            .await?;

        println!("Block {} (height {})", block.header.hash, block.header.height);
        println!("  time:          {}", timestamp_to_rfc3339(block.header.time));
        println!("  size:          {} bytes", block.header.size);
        println!("  confirmations: {}", block.header.confirmations);
        println!("  transactions:  {}", block.txs.len());

        for tx in &block.txs {
            if self.verbose {
                println!("{}", serde_json::to_string_pretty(tx)?);
            } else {
                println!("  {} {}", tx.txid, format_atoms_as_dcr(tx.total_out()));
            }
        }
        Ok(())
    }
}

/// Fetch a transaction
#[derive(Args)]
pub struct TxCommand {
    /// Transaction ID
    pub txid: String,

    /// Print the node-shaped JSON instead of the stored layout
    #[arg(long)]
    pub node_format: bool,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl TxCommand {
    pub async fn run(&self) -> AppResult<()> {
        let rpc = connect(&self.rpc).await?;
        let tx = rpc.get_transaction(&self.txid).await?;

        if self.node_format {
            let value = rpc.parser().get_transaction_specific(&tx)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }
        Ok(())
    }
}

/// Broadcast a raw transaction
#[derive(Args)]
pub struct SendRawCommand {
    /// Serialized transaction as hex
    pub hex: String,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl SendRawCommand {
    pub async fn run(&self) -> AppResult<()> {
        hex::decode(&self.hex)?;
        let rpc = connect(&self.rpc).await?;
        let txid = rpc.send_raw_transaction(&self.hex).await?;
        println!("{}", txid);
        Ok(())
    }
}
