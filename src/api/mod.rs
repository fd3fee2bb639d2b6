mod normalize;
mod query;
mod types;

pub use normalize::*;
pub use query::{build_url, ParamValue, QueryParams};
pub use types::*;

use crate::config::Endpoint;
use crate::error::{error_chain, ApiResult, ExplorerError};
use serde_json::Value;
use tracing::{debug, warn};

/// Client for an Etherscan-compatible explorer API.
///
/// One GET per call, no retries. Every outcome, including transport and
/// decoding failures, comes back as an [`ApiResult`].
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl ExplorerClient {
    pub fn new(endpoint: Endpoint) -> Result<Self, ExplorerError> {
        let http = reqwest::Client::builder()
            .timeout(endpoint.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ExplorerError::Configuration(format!("failed to build HTTP client: {}", error_chain(&e)))
            })?;

        Ok(Self { http, endpoint })
    }

    /// `account/balance` at the latest block
    pub async fn get_balance(&self, address: &str) -> ApiResult<Balance> {
        let params = QueryParams::new()
            .with("address", address)
            .with("tag", "latest");
        let body = self.fetch("account", "balance", &params).await?;
        normalize_balance(&body)
    }

    /// `proxy/eth_blockNumber`
    pub async fn get_last_block(&self) -> ApiResult<u64> {
        let body = self
            .fetch("proxy", "eth_blockNumber", &QueryParams::new())
            .await?;
        normalize_block_number(&body)
    }

    /// `account/txlist` over the block range and ordering in `query`
    pub async fn get_last_transactions(
        &self,
        address: &str,
        query: TxListQuery,
    ) -> ApiResult<Vec<TransactionRecord>> {
        let params = QueryParams::new()
            .with("address", address)
            .with("startblock", query.start_block)
            .with("endblock", query.end_block)
            .with("sort", query.sort.to_string());
        let body = self.fetch("account", "txlist", &params).await?;
        normalize_transactions(&body)
    }

    async fn fetch(&self, module: &str, action: &str, params: &QueryParams) -> ApiResult<Value> {
        let url = build_url(&self.endpoint, module, action, params)?;
        debug!(module, action, host = url.host_str().unwrap_or_default(), "explorer request");

        // without_url() keeps the API key out of error messages
        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                let message = error_chain(&e.without_url());
                warn!(module, action, error = %message, "explorer request failed");
                ExplorerError::Transport(message)
            })?;

        let text = response.text().await.map_err(|e| {
            let message = error_chain(&e.without_url());
            warn!(module, action, error = %message, "failed to read explorer response");
            ExplorerError::Transport(message)
        })?;

        serde_json::from_str(&text).map_err(|e| {
            warn!(module, action, error = %e, "explorer response is not JSON");
            ExplorerError::Parse(format!("JSON decoding failed: {e}"))
        })
    }
}
