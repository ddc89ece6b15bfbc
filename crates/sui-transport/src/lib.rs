//! FlowX Transport Layer
//!
//! Network access for the FlowX client:
//! - [`rpc`]: Sui fullnode JSON-RPC (owned objects, object batches, balances,
//!   normalized modules)
//! - [`graphql`]: the DEX backend's GraphQL endpoint
//! - [`network`]: well-known fullnode endpoints
//!
//! Both clients are blocking ureq agents behind async traits, so callers can
//! swap in their own implementations.
//!
//! # Example
//!
//! ```ignore
//! use flowx_transport::{GraphQLClient, JsonRpcClient, SuiRpc};
//!
//! let rpc = JsonRpcClient::mainnet();
//! let balances = rpc.get_all_balances("0x...").await?;
//! ```

pub mod graphql;
pub mod network;
pub mod rpc;
pub mod rpc_types;

pub use graphql::{request_field, GraphQLClient, GraphQlTransport};
pub use rpc::{JsonRpcClient, SuiRpc};
pub use rpc_types::{
    Balance, NormalizedFunction, NormalizedModule, ObjectContent, ObjectDataFilter,
    ObjectDataOptions, ObjectResponseQuery, ObjectsPage, Page, SuiObjectData, SuiObjectResponse,
};
