//! The client handle the pool and coin queries hang off.

use std::sync::Arc;

use anyhow::Result;
use flowx_transport::network::infer_network;
use flowx_transport::{GraphQLClient, GraphQlTransport, JsonRpcClient, SuiRpc};
use tracing::info;

use crate::config::{ClientConfig, DEFAULT_COINS_PAGE_SIZE, DEFAULT_PAIRS_PAGE_SIZE};
use crate::fetcher::DEFAULT_OBJECT_BATCH_SIZE;

/// Fullnode and DEX backend collaborators plus query limits.
///
/// Cheap to clone; the collaborators are shared.
#[derive(Clone)]
pub struct FlowxClient {
    rpc: Arc<dyn SuiRpc>,
    graphql: Arc<dyn GraphQlTransport>,
    pub(crate) object_batch_size: usize,
    pub(crate) pairs_page_size: usize,
    pub(crate) coins_page_size: usize,
}

impl FlowxClient {
    /// Client over arbitrary collaborators with default limits.
    pub fn new(rpc: Arc<dyn SuiRpc>, graphql: Arc<dyn GraphQlTransport>) -> Self {
        Self {
            rpc,
            graphql,
            object_batch_size: DEFAULT_OBJECT_BATCH_SIZE,
            pairs_page_size: DEFAULT_PAIRS_PAGE_SIZE,
            coins_page_size: DEFAULT_COINS_PAGE_SIZE,
        }
    }

    /// Client over HTTP collaborators built from `config`.
    pub fn from_config(config: &ClientConfig) -> Self {
        info!(
            network = %infer_network(&config.rpc_url),
            rpc = %config.rpc_url,
            graphql = %config.graphql_url,
            "creating FlowX client"
        );
        let rpc = JsonRpcClient::with_timeouts(
            &config.rpc_url,
            config.timeout,
            config.connect_timeout,
        );
        let graphql = GraphQLClient::with_timeouts(
            &config.graphql_url,
            config.timeout,
            config.connect_timeout,
        );
        Self {
            rpc: Arc::new(rpc),
            graphql: Arc::new(graphql),
            object_batch_size: config.object_batch_size,
            pairs_page_size: config.pairs_page_size,
            coins_page_size: config.coins_page_size,
        }
    }

    /// [`ClientConfig::from_env`] followed by [`FlowxClient::from_config`].
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(&ClientConfig::from_env()?))
    }

    pub fn with_object_batch_size(mut self, size: usize) -> Self {
        self.object_batch_size = size;
        self
    }

    pub fn rpc(&self) -> &dyn SuiRpc {
        self.rpc.as_ref()
    }

    pub fn graphql(&self) -> &dyn GraphQlTransport {
        self.graphql.as_ref()
    }
}
