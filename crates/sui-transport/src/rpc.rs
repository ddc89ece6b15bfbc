//! Sui fullnode JSON-RPC client.
//!
//! [`SuiRpc`] is the seam the fetcher, aggregator and transaction builder are
//! written against. [`JsonRpcClient`] implements it over HTTP with ureq; the
//! blocking calls are moved onto tokio's blocking pool.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::network::default_rpc_endpoint;
use crate::rpc_types::{
    Balance, NormalizedModule, ObjectDataOptions, ObjectResponseQuery, ObjectsPage,
    SuiObjectResponse,
};

/// The fullnode read methods the client depends on.
#[async_trait]
pub trait SuiRpc: Send + Sync {
    /// One page of objects owned by `owner` (`suix_getOwnedObjects`).
    async fn get_owned_objects(
        &self,
        owner: &str,
        query: &ObjectResponseQuery,
        cursor: Option<&str>,
        limit: Option<usize>,
    ) -> Result<ObjectsPage>;

    /// Objects by id, in request order (`sui_multiGetObjects`).
    async fn multi_get_objects(
        &self,
        ids: &[String],
        options: &ObjectDataOptions,
    ) -> Result<Vec<SuiObjectResponse>>;

    async fn get_all_balances(&self, owner: &str) -> Result<Vec<Balance>>;

    async fn get_normalized_move_module(
        &self,
        package: &str,
        module: &str,
    ) -> Result<NormalizedModule>;
}

#[derive(Clone)]
pub struct JsonRpcClient {
    endpoint: String,
    agent: ureq::Agent,
    next_id: Arc<AtomicU64>,
}

impl JsonRpcClient {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    pub fn mainnet() -> Self {
        Self::new(&default_rpc_endpoint("mainnet"))
    }

    pub fn new(endpoint: &str) -> Self {
        Self::with_timeouts(
            endpoint,
            Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    pub fn with_timeouts(endpoint: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            agent: ureq::AgentBuilder::new()
                .timeout(timeout)
                .timeout_connect(connect_timeout)
                .build(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one JSON-RPC request on the calling thread and return its `result`.
    pub fn call(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(method, id, "json-rpc request");
        let response: Value = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(&request)
            .map_err(|e| anyhow!("JSON-RPC request failed: {}", e))?
            .into_json()
            .map_err(|e| anyhow!("Failed to parse JSON-RPC response: {}", e))?;

        extract_result(method, response)
    }

    async fn call_as<T>(&self, method: &'static str, params: Value) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let result = tokio::task::spawn_blocking(move || client.call(method, params))
            .await
            .map_err(|e| anyhow!("JSON-RPC task failed: {}", e))??;
        serde_json::from_value(result)
            .map_err(|e| anyhow!("Failed to decode {} result: {}", method, e))
    }
}

/// Take the `result` of a JSON-RPC response, or turn its `error` into an error.
pub fn extract_result(method: &str, mut response: Value) -> Result<Value> {
    if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(anyhow!("{} failed ({}): {}", method, code, message));
    }
    response
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| anyhow!("{} response has no result", method))
}

#[async_trait]
impl SuiRpc for JsonRpcClient {
    async fn get_owned_objects(
        &self,
        owner: &str,
        query: &ObjectResponseQuery,
        cursor: Option<&str>,
        limit: Option<usize>,
    ) -> Result<ObjectsPage> {
        let params = json!([owner, query, cursor, limit]);
        self.call_as("suix_getOwnedObjects", params).await
    }

    async fn multi_get_objects(
        &self,
        ids: &[String],
        options: &ObjectDataOptions,
    ) -> Result<Vec<SuiObjectResponse>> {
        let params = json!([ids, options]);
        self.call_as("sui_multiGetObjects", params).await
    }

    async fn get_all_balances(&self, owner: &str) -> Result<Vec<Balance>> {
        self.call_as("suix_getAllBalances", json!([owner])).await
    }

    async fn get_normalized_move_module(
        &self,
        package: &str,
        module: &str,
    ) -> Result<NormalizedModule> {
        self.call_as("sui_getNormalizedMoveModule", json!([package, module]))
            .await
    }
}
