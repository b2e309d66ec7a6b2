use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Node RPC operations
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Block, transaction and script decoding
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while decoding raw node data into the domain model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fixed-size block header could not be read
    #[error("Malformed block header: {0}")]
    MalformedHeader(String),

    /// Embedded auxiliary proof-of-work record is inconsistent with the buffer
    #[error("Malformed auxpow record ({stage}): {reason}")]
    MalformedAuxProof { stage: &'static str, reason: String },

    /// Transaction list framing is truncated or overflows the buffer
    #[error("Malformed transaction #{index}: {reason}")]
    MalformedTransaction { index: usize, reason: String },

    /// Output script cannot be hex-decoded or tokenized
    #[error("Invalid script: {0}")]
    InvalidScript(String),

    /// Node result is missing a required field or carries an invalid value
    #[error("Malformed result: field '{field}' {reason}")]
    MalformedResult { field: &'static str, reason: String },

    /// Stored transaction blob is truncated or undecodable
    #[error("Malformed packed transaction: {0}")]
    MalformedPackedTx(String),
}

/// RPC error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// Network or HTTP failure before a response body was available
    #[error("RPC call failed: {method} - {message}")]
    Transport { method: String, message: String },

    /// Response body is not valid JSON or does not match the expected shape
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Node returned a structured JSON-RPC error object
    #[error("Node error {code}: {message}")]
    Node { code: i64, message: String },

    /// Node has no information about the requested transaction
    #[error("Transaction not found: {txid}")]
    UnknownTransaction { txid: String },

    /// Caller supplied an empty block hash or transaction id
    #[error("Not found: {0}")]
    NotFound(&'static str),

    /// Successful response whose payload could not be translated
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// HTTP client could not be constructed from configuration
    #[error("Invalid RPC configuration: {0}")]
    InvalidConfig(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for decoding operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<hex::FromHexError> for AppError {
    fn from(err: hex::FromHexError) -> Self {
        AppError::InvalidInput(format!("hex error: {}", err))
    }
}
