//! GraphQL client for the DEX backend.
//!
//! The backend exposes fixed listing queries (coin settings, trading pairs).
//! Results are returned as the raw `data` object; callers pick the field they
//! need with [`request_field`] and decode it into their own types.
//!
//! ```ignore
//! let client = GraphQLClient::new("https://dex.example/graphql");
//! let data = client.request(COIN_SETTING_QUERY, json!({ "limit": 100 })).await?;
//! ```

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

/// Anything that can execute a GraphQL request and return its `data`.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn request(&self, query: &str, variables: Value) -> Result<Value>;
}

/// Run `query` and decode `data.<field>` into `T`.
pub async fn request_field<T: DeserializeOwned>(
    transport: &dyn GraphQlTransport,
    query: &str,
    variables: Value,
    field: &str,
) -> Result<T> {
    let mut data = transport.request(query, variables).await?;
    let value = data
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| anyhow!("GraphQL response missing field '{}'", field))?;
    serde_json::from_value(value).map_err(|e| anyhow!("Failed to decode '{}': {}", field, e))
}

/// Split a GraphQL response into its `data`, or the error it reports.
///
/// Any non-null `errors` field fails the request, even an empty list. The
/// first error's `extensions.code` becomes the error message; its `message`
/// is used when the backend sends no code.
pub fn extract_data(mut response: Value) -> Result<Value> {
    if let Some(errors) = response.get("errors").filter(|e| !e.is_null()) {
        error!(errors = %errors, "could not execute graphQL request");
        let first = errors.as_array().and_then(|list| list.first());
        let code = first
            .and_then(|f| f.get("extensions"))
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .or_else(|| first.and_then(|f| f.get("message")).and_then(Value::as_str))
            .unwrap_or("unknown error");
        return Err(anyhow!("{}", code));
    }

    match response.get_mut("data").map(Value::take) {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(anyhow!("No data in GraphQL response")),
    }
}

/// Blocking HTTP GraphQL client. Async callers go through [`GraphQlTransport`].
#[derive(Clone)]
pub struct GraphQLClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl GraphQLClient {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Create a client with default timeouts.
    pub fn new(endpoint: &str) -> Self {
        Self::with_timeouts(
            endpoint,
            Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(endpoint: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            agent: ureq::AgentBuilder::new()
                .timeout(timeout)
                .timeout_connect(connect_timeout)
                .build(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a GraphQL query on the calling thread.
    pub fn query(&self, query: &str, variables: Value) -> Result<Value> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        debug!(endpoint = %self.endpoint, "graphql request");
        let response: Value = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| anyhow!("GraphQL request failed: {}", e))?
            .into_json()
            .map_err(|e| anyhow!("Failed to parse GraphQL response: {}", e))?;

        extract_data(response)
    }
}

#[async_trait]
impl GraphQlTransport for GraphQLClient {
    async fn request(&self, query: &str, variables: Value) -> Result<Value> {
        let client = self.clone();
        let query = query.to_string();
        tokio::task::spawn_blocking(move || client.query(&query, variables))
            .await
            .map_err(|e| anyhow!("GraphQL task failed: {}", e))?
    }
}
