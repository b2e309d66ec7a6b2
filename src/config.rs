use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub rpc: RpcConfig,
    pub network: NetworkConfig,
}

/// dcrd JSON-RPC endpoint and HTTP client tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub timeout_seconds: u64,
    pub max_idle_connections: usize,
    pub keepalive_seconds: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:9109".to_string(),
            username: "dcrd".to_string(),
            password: "password".to_string(),
            timeout_seconds: 25,
            max_idle_connections: 100,
            keepalive_seconds: 600,
        }
    }
}

/// Network selection used when the node is not asked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Chain name as reported by `getblockchaininfo` (`mainnet`, `testnet3`)
    pub chain: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain: "mainnet".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from an explicit file stem (extension optional)
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let rpc = RpcConfig::default();
        let network = NetworkConfig::default();
        let config = Config::builder()
            // RPC defaults
            .set_default("rpc.url", rpc.url)?
            .set_default("rpc.username", rpc.username)?
            .set_default("rpc.password", rpc.password)?
            .set_default("rpc.timeout_seconds", rpc.timeout_seconds)?
            .set_default("rpc.max_idle_connections", rpc.max_idle_connections as i64)?
            .set_default("rpc.keepalive_seconds", rpc.keepalive_seconds)?
            .set_default("network.chain", network.chain)?
            .add_source(File::with_name(path).required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        // DCR_RPC_* and DCR_NETWORK take precedence over the file
        app_config.apply_env_overrides();
        app_config.validate()?;
        Ok(app_config)
    }

    /// Get default config values, falling back to built-ins when loading fails
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }

    fn apply_env_overrides(&mut self) {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        if let Some(url) = read("DCR_RPC_URL") {
            self.rpc.url = url;
        }
        if let Some(username) = read("DCR_RPC_USERNAME") {
            self.rpc.username = username;
        }
        if let Some(password) = read("DCR_RPC_PASSWORD") {
            self.rpc.password = password;
        }
        if let Some(timeout) = read("DCR_RPC_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.rpc.timeout_seconds = timeout;
        }
        if let Some(chain) = read("DCR_NETWORK") {
            self.network.chain = chain;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc.url.is_empty() {
            return Err(ConfigError::Message("rpc.url must not be empty".to_string()));
        }
        if self.rpc.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "rpc.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
