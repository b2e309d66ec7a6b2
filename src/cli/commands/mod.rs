pub mod decode;
pub mod node;

use crate::config::{AppConfig, RpcConfig};
use clap::Args;

/// Node connection overrides shared by the RPC-backed commands
#[derive(Args, Clone, Debug, Default)]
pub struct RpcArgs {
    /// dcrd RPC URL (overrides config.toml)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// dcrd RPC username (overrides config.toml)
    #[arg(long)]
    pub rpc_username: Option<String>,

    /// dcrd RPC password (overrides config.toml)
    #[arg(long)]
    pub rpc_password: Option<String>,
}

impl RpcArgs {
    /// Configuration with CLI overrides applied
    pub fn rpc_config(&self) -> RpcConfig {
        let mut rpc_config = AppConfig::get_defaults().rpc;

        if let Some(url) = &self.rpc_url {
            rpc_config.url = url.clone();
        }
        if let Some(username) = &self.rpc_username {
            rpc_config.username = username.clone();
        }
        if let Some(password) = &self.rpc_password {
            rpc_config.password = password.clone();
        }
        rpc_config
    }
}
