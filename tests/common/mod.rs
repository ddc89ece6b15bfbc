#![allow(unused_imports, dead_code)]
//! Shared test utilities for integration tests.
//!
//! # Modules
//!
//! - `mocks`: in-memory fullnode and GraphQL backends
//! - `assertions`: assertion helpers with readable failure messages
//! - `network`: gating for tests that talk to real endpoints

pub mod assertions;
pub mod mocks;
pub mod network;

pub use assertions::{assert_err, assert_error_contains, assert_ok};
pub use mocks::{
    balance, coin_object, pool_object, MockGraphQl, MockRpc, ROUTER_MODULE, ROUTER_PACKAGE,
};
pub use network::{graphql_endpoint, should_run_network_tests};
