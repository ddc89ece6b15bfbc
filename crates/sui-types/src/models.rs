//! Application records produced by the pool and coin queries.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Coin settings as listed by the DEX backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinMetadata {
    #[serde(rename = "type")]
    pub coin_type: String,
    pub decimals: u32,
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// A pool reserve: either a bare amount or the on-chain `Coin`/`Balance` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReserveBalance {
    Raw(String),
    Record(BalanceRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    pub fields: BalanceFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceFields {
    pub balance: String,
}

impl ReserveBalance {
    /// The raw integer amount, whichever shape the reserve came in.
    pub fn amount(&self) -> &str {
        match self {
            ReserveBalance::Raw(amount) => amount,
            ReserveBalance::Record(record) => &record.fields.balance,
        }
    }
}

/// Derived state of one liquidity pool object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub object_id: String,
    pub reserve_x: ReserveBalance,
    pub reserve_y: ReserveBalance,
    pub total_lp_supply: String,
    pub lp_type: String,
    /// Zero-stripped coin type, see [`crate::type_parsing::format_coin_type`].
    pub coin_x: String,
    pub coin_y: String,
    pub fee_rate: BigDecimal,
}

/// Total balance an owner holds of one coin type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoinBalance {
    #[serde(rename = "type")]
    pub coin_type: String,
    pub balance: u128,
}

/// Amount of each pool coin redeemable for one LP token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveAmount {
    pub amount_x: BigDecimal,
    pub amount_y: BigDecimal,
}
