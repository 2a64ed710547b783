//! # Tools Module
//!
//! The Moralis deep-index client and the tool descriptor groups built on
//! top of it. Every executor is a thin pass-through: build a URL from the
//! parameter mapping, return the raw JSON body.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::info;

use crate::agent::registry::{ToolError, ToolRegistry};

pub mod market;
pub mod nft;
pub mod token;
pub mod wallet;

/// Default deep-index API base URL.
pub const MORALIS_API_BASE_URL: &str = "https://deep-index.moralis.io/api/v2.2";

/// HTTP client for the blockchain data provider.
///
/// Carries an explicit one-time initialization handle instead of an ambient
/// module flag: `ensure_initialized` is idempotent and every request path
/// goes through it.
#[derive(Clone)]
pub struct MoralisClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    ready: Arc<OnceCell<()>>,
}

impl std::fmt::Debug for MoralisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoralisClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl MoralisClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: MORALIS_API_BASE_URL.to_string(),
            ready: Arc::new(OnceCell::new()),
        }
    }

    /// Overrides the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Completes one-time initialization, verifying a credential is
    /// present. Safe to call from every request; only the first call does
    /// any work.
    pub async fn ensure_initialized(&self) -> Result<(), ToolError> {
        self.ready
            .get_or_try_init(|| async {
                if self.api_key.trim().is_empty() {
                    return Err(ToolError::MissingApiKey);
                }
                info!("blockchain data client initialized");
                Ok(())
            })
            .await
            .map(|_| ())
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ToolError> {
        self.ensure_initialized().await?;
        let mut request = self
            .http
            .get(self.url(path))
            .header("accept", "application/json")
            .header("X-API-Key", &self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::into_json(response).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ToolError> {
        self.ensure_initialized().await?;
        let response = self
            .http
            .post(self.url(path))
            .header("accept", "application/json")
            .header("X-API-Key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        Self::into_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn into_json(response: reqwest::Response) -> Result<Value, ToolError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

/// Builds the full registry by concatenating the fixed tool groups.
pub fn build_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register_all(wallet::wallet_tools());
    registry.register_all(token::token_tools());
    registry.register_all(market::market_tools());
    registry.register_all(nft::nft_tools());
    registry
}
