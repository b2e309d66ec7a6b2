//! JSON-RPC over HTTP with basic auth
//!
//! One pooled `reqwest::Client` per transport. Response bodies are read in
//! full and decoded inside [`safe_decode_response`], which is the only place
//! where malformed node output is turned into an error.

use crate::config::RpcConfig;
use crate::errors::{RpcError, RpcResult};
use crate::types::rpc::{RpcRequest, RpcResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, error};

/// Bodies shorter than this are echoed back in decode errors
pub const MAX_ECHOED_BODY: usize = 2048;

pub struct RpcTransport {
    client: Client,
    url: String,
    username: String,
    password: String,
    next_id: AtomicU64,
}

impl RpcTransport {
    pub fn new(config: &RpcConfig) -> RpcResult<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_connections)
            .tcp_keepalive(Duration::from_secs(config.keepalive_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RpcError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Invoke `method` and decode its `result` member
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> RpcResult<T> {
        let mut request = RpcRequest::new(method, params);
        request.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!("RPC {} (id {})", method, request.id);

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcError::Transport {
                method: method.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| RpcError::Transport {
            method: method.to_string(),
            message: format!("reading body: {}", e),
        })?;

        // Non-2xx bodies may still carry a JSON-RPC error object
        let decoded = safe_decode_response::<T>(&body).map_err(|e| match e {
            RpcError::Decode(message) if !status.is_success() => {
                RpcError::Decode(format!("{} {}", status, message))
            }
            other => other,
        })?;

        if let Some(err) = decoded.error {
            return Err(RpcError::Node {
                code: err.code,
                message: err.message,
            });
        }

        decoded
            .result
            .ok_or_else(|| RpcError::Decode(format!("{}: response has no result", method)))
    }
}

/// Decode a response body, converting every failure into [`RpcError::Decode`]
///
/// Short non-empty bodies are echoed as `Error: <body>`; anything else is
/// reported as `Internal error` so that large payloads never reach the caller.
pub fn safe_decode_response<T: DeserializeOwned>(body: &[u8]) -> RpcResult<RpcResponse<T>> {
    serde_json::from_slice(body).map_err(|e| {
        error!(
            "Failed to decode RPC response ({} bytes): {}",
            body.len(),
            e
        );
        if !body.is_empty() && body.len() < MAX_ECHOED_BODY {
            RpcError::Decode(format!("Error: {}", String::from_utf8_lossy(body)))
        } else {
            RpcError::Decode("Internal error".to_string())
        }
    })
}
