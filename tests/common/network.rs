//! Network-dependent test utilities.
//!
//! Tests against real endpoints are `#[ignore]`d and additionally skip
//! themselves when `RUN_NETWORK_TESTS` is not set.

use std::env;

/// Environment variable to enable network tests.
pub const RUN_NETWORK_TESTS_VAR: &str = "RUN_NETWORK_TESTS";

/// Environment variable naming the DEX GraphQL endpoint.
pub const GRAPHQL_ENDPOINT_VAR: &str = "FLOWX_GRAPHQL_ENDPOINT";

/// True when `RUN_NETWORK_TESTS` is set to a non-empty value.
pub fn should_run_network_tests() -> bool {
    dotenv::dotenv().ok();
    env::var(RUN_NETWORK_TESTS_VAR)
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

#[allow(dead_code)]
pub fn graphql_endpoint() -> Option<String> {
    dotenv::dotenv().ok();
    env::var(GRAPHQL_ENDPOINT_VAR).ok().filter(|v| !v.is_empty())
}

/// Skip the current test unless network tests are enabled.
#[macro_export]
macro_rules! skip_if_no_network {
    () => {
        if !$crate::common::network::should_run_network_tests() {
            eprintln!(
                "Skipping {}: {} not set",
                module_path!(),
                $crate::common::network::RUN_NETWORK_TESTS_VAR
            );
            return;
        }
    };
}
