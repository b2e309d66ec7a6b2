use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Decred chain adapter
#[derive(Parser)]
#[command(name = "dcr-adapter")]
#[command(about = "Query a Decred node and decode its blocks, transactions and addresses")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show chain and network information reported by the node
    ChainInfo(commands::node::ChainInfoCommand),
    /// Show the best block hash and height
    BestBlock(commands::node::BestBlockCommand),
    /// Fetch and decode a block by height or hash
    Block(commands::node::BlockCommand),
    /// Fetch a transaction by txid
    Tx(commands::node::TxCommand),
    /// Broadcast a raw transaction
    SendRaw(commands::node::SendRawCommand),
    /// Decode a raw block from hex without contacting a node
    DecodeBlock(commands::decode::DecodeBlockCommand),
    /// Compute the address descriptor for an address or output script
    AddressDescriptor(commands::decode::AddressDescriptorCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ChainInfo(command) => command.run().await,
        Commands::BestBlock(command) => command.run().await,
        Commands::Block(command) => command.run().await,
        Commands::Tx(command) => command.run().await,
        Commands::SendRaw(command) => command.run().await,
        Commands::DecodeBlock(command) => command.run(),
        Commands::AddressDescriptor(command) => command.run(),
    }
}
