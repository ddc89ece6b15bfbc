//! Client configuration.
//!
//! Values come from the environment:
//!
//! | Variable | Default |
//! |---|---|
//! | `SUI_RPC_URL` | mainnet fullnode |
//! | `FLOWX_GRAPHQL_ENDPOINT` | required |
//! | `SUI_HTTP_TIMEOUT_SECS` | 30 |
//! | `SUI_HTTP_CONNECT_TIMEOUT_SECS` | 10 |
//! | `FLOWX_OBJECT_BATCH_SIZE` | 49, at most 50 |

use std::time::Duration;

use anyhow::{anyhow, Result};
use flowx_transport::network::default_rpc_endpoint;
use flowx_types::env_utils::{env_string, env_string_or, env_var_or};
use tracing::warn;

use crate::fetcher::{DEFAULT_OBJECT_BATCH_SIZE, MAX_OBJECT_BATCH_SIZE};

pub const RPC_URL_VAR: &str = "SUI_RPC_URL";
pub const GRAPHQL_ENDPOINT_VAR: &str = "FLOWX_GRAPHQL_ENDPOINT";
pub const TIMEOUT_VAR: &str = "SUI_HTTP_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "SUI_HTTP_CONNECT_TIMEOUT_SECS";
pub const OBJECT_BATCH_SIZE_VAR: &str = "FLOWX_OBJECT_BATCH_SIZE";

/// Page size of the pairs listing query.
pub const DEFAULT_PAIRS_PAGE_SIZE: usize = 100;
/// Page size of the coin settings query.
pub const DEFAULT_COINS_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub graphql_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub object_batch_size: usize,
    pub pairs_page_size: usize,
    pub coins_page_size: usize,
}

impl ClientConfig {
    /// Mainnet RPC and default limits against the given GraphQL endpoint.
    pub fn new(graphql_url: &str) -> Self {
        Self {
            rpc_url: default_rpc_endpoint("mainnet"),
            graphql_url: graphql_url.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            object_batch_size: DEFAULT_OBJECT_BATCH_SIZE,
            pairs_page_size: DEFAULT_PAIRS_PAGE_SIZE,
            coins_page_size: DEFAULT_COINS_PAGE_SIZE,
        }
    }

    pub fn from_env() -> Result<Self> {
        let graphql_url = env_string(GRAPHQL_ENDPOINT_VAR)
            .ok_or_else(|| anyhow!("{} is not set", GRAPHQL_ENDPOINT_VAR))?;
        let defaults = Self::new(&graphql_url);

        Ok(Self {
            rpc_url: env_string_or(RPC_URL_VAR, &defaults.rpc_url),
            timeout: Duration::from_secs(env_var_or(TIMEOUT_VAR, defaults.timeout.as_secs())),
            connect_timeout: Duration::from_secs(env_var_or(
                CONNECT_TIMEOUT_VAR,
                defaults.connect_timeout.as_secs(),
            )),
            object_batch_size: checked_batch_size(env_var_or(
                OBJECT_BATCH_SIZE_VAR,
                defaults.object_batch_size,
            ))?,
            ..defaults
        })
    }

    pub fn with_rpc_url(mut self, rpc_url: &str) -> Self {
        self.rpc_url = rpc_url.to_string();
        self
    }

    pub fn with_object_batch_size(mut self, size: usize) -> Result<Self> {
        self.object_batch_size = checked_batch_size(size)?;
        Ok(self)
    }
}

/// Reject zero and cap at the fullnode's multi-get limit.
fn checked_batch_size(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(anyhow!("object batch size must be at least 1"));
    }
    if size > MAX_OBJECT_BATCH_SIZE {
        warn!(
            requested = size,
            max = MAX_OBJECT_BATCH_SIZE,
            "object batch size above fullnode limit, capping"
        );
        return Ok(MAX_OBJECT_BATCH_SIZE);
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("https://api.example/graphql");
        assert_eq!(config.rpc_url, "https://fullnode.mainnet.sui.io:443");
        assert_eq!(config.object_batch_size, 49);
        assert_eq!(config.pairs_page_size, 100);
        assert_eq!(config.coins_page_size, 100);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_batch_size_bounds() {
        let config = ClientConfig::new("g");
        assert_eq!(config.clone().with_object_batch_size(10).unwrap().object_batch_size, 10);
        assert_eq!(config.clone().with_object_batch_size(50).unwrap().object_batch_size, 50);
        assert_eq!(config.clone().with_object_batch_size(500).unwrap().object_batch_size, 50);
        assert!(config.with_object_batch_size(0).is_err());
    }

    // Single test touching process env so parallel tests don't race on it.
    #[test]
    fn test_from_env() {
        std::env::remove_var(GRAPHQL_ENDPOINT_VAR);
        assert!(ClientConfig::from_env().is_err());

        std::env::set_var(GRAPHQL_ENDPOINT_VAR, " https://api.example/graphql ");
        std::env::set_var(RPC_URL_VAR, "https://fullnode.testnet.sui.io:443");
        std::env::set_var(OBJECT_BATCH_SIZE_VAR, "20");
        std::env::set_var(TIMEOUT_VAR, "not a number");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.graphql_url, "https://api.example/graphql");
        assert_eq!(config.rpc_url, "https://fullnode.testnet.sui.io:443");
        assert_eq!(config.object_batch_size, 20);
        assert_eq!(config.timeout, Duration::from_secs(30));

        for var in [GRAPHQL_ENDPOINT_VAR, RPC_URL_VAR, OBJECT_BATCH_SIZE_VAR, TIMEOUT_VAR] {
            std::env::remove_var(var);
        }
    }
}
