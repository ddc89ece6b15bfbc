//! Well-known endpoints and network inference.

const MAINNET_RPC: &str = "https://fullnode.mainnet.sui.io:443";
const TESTNET_RPC: &str = "https://fullnode.testnet.sui.io:443";
const DEVNET_RPC: &str = "https://fullnode.devnet.sui.io:443";

pub fn infer_network_from_url(url: &str) -> Option<&'static str> {
    let lower = url.to_lowercase();
    if lower.contains("testnet") {
        Some("testnet")
    } else if lower.contains("devnet") {
        Some("devnet")
    } else if lower.contains("mainnet") {
        Some("mainnet")
    } else {
        None
    }
}

/// Infer the network from an RPC endpoint, defaulting to mainnet.
pub fn infer_network(rpc_url: &str) -> String {
    infer_network_from_url(rpc_url)
        .unwrap_or("mainnet")
        .to_string()
}

pub fn default_rpc_endpoint(network: &str) -> String {
    match network {
        "testnet" => TESTNET_RPC.to_string(),
        "devnet" => DEVNET_RPC.to_string(),
        _ => MAINNET_RPC.to_string(),
    }
}
