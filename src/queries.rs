//! DEX backend GraphQL documents and their result shapes.

use flowx_types::CoinMetadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const COIN_SETTING_QUERY: &str = r#"
query GetCoinsSettings($limit: Int) {
  getCoinsSettings(limit: $limit) {
    items {
      type
      decimals
      symbol
      name
      iconUrl
    }
  }
}
"#;

pub const GET_PAIRS: &str = r#"
query GetPairs($size: Int) {
  getPairs(size: $size) {
    lpObjectId
    lpType
    coinX
    coinY
    reserveX
    reserveY
    totalLiquidity
    volume24H
    fee24H
    apr
  }
}
"#;

/// `getCoinsSettings` result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinSettings {
    #[serde(default)]
    pub items: Vec<CoinMetadata>,
}

/// One `getPairs` entry. Only the pool object id is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRecord {
    pub lp_object_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
