//! Pool, coin and balance queries.
//!
//! Pools come from two sources: the DEX backend lists the pairs and the
//! fullnode holds each pair's pool object. The two are joined on the
//! normalized pool object id, so the fullnode may answer in any order.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use bigdecimal::BigDecimal;
use flowx_transport::{request_field, ObjectContent, ObjectDataOptions, SuiObjectData};
use flowx_types::address::normalize_address;
use flowx_types::amount::{convert_amount_decimal, parse_decimal};
use flowx_types::{
    format_coin_type, get_lp_type, CoinBalance, CoinMetadata, PoolInfo, ReserveBalance,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::client::FlowxClient;
use crate::fetcher::multi_get_objects_chunked;
use crate::queries::{CoinSettings, PairRecord, COIN_SETTING_QUERY, GET_PAIRS};

/// On-chain fee rates are in basis points.
const FEE_RATE_DECIMALS: u32 = 4;

/// Fee rate of pools that do not store one on chain: 0.3%.
pub fn default_fee_rate() -> BigDecimal {
    BigDecimal::new(3.into(), 3)
}

/// A backend pair joined with the state of its pool object.
///
/// Serializes flat: the pair's own fields followed by the pool fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub lp_object_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(flatten)]
    pub info: PoolInfo,
}

impl Pool {
    fn join(pair: PairRecord, info: PoolInfo) -> Result<Self> {
        let mut extra = pair.extra;
        // Pool fields take precedence over pair fields of the same name.
        if let Value::Object(info_fields) = serde_json::to_value(&info)? {
            extra.retain(|key, _| !info_fields.contains_key(key));
        }
        Ok(Self {
            lp_object_id: pair.lp_object_id,
            extra,
            info,
        })
    }
}

/// Coins, balances and pools fetched together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicData {
    pub coins: Vec<CoinMetadata>,
    pub coin_balances: Vec<CoinBalance>,
    pub pools: Vec<Pool>,
}

/// `content.fields.value.fields` of a pool object.
#[derive(Debug, Deserialize)]
struct PoolFields {
    reserve_x: ReserveBalance,
    reserve_y: ReserveBalance,
    lp_supply: LpSupply,
    #[serde(default)]
    fee_rate: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct LpSupply {
    #[serde(rename = "type", default)]
    type_: Option<String>,
    fields: LpSupplyFields,
}

#[derive(Debug, Deserialize)]
struct LpSupplyFields {
    value: String,
}

fn reserve_coin_type(reserve: &ReserveBalance, side: &str, object_id: &str) -> Result<String> {
    match reserve {
        ReserveBalance::Record(record) => match &record.type_ {
            Some(type_) => format_coin_type(type_),
            None => Err(anyhow!("pool {} reserve_{} has no type", object_id, side)),
        },
        ReserveBalance::Raw(_) => Err(anyhow!(
            "pool {} reserve_{} is not a coin record",
            object_id,
            side
        )),
    }
}

fn parse_fee_rate(raw: Option<&Value>) -> Result<BigDecimal> {
    let text = match raw {
        None | Some(Value::Null) => return Ok(default_fee_rate()),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(default_fee_rate()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => return Err(anyhow!("unexpected fee_rate {}", other)),
    };
    Ok(convert_amount_decimal(&parse_decimal(&text)?, FEE_RATE_DECIMALS))
}

/// Derive [`PoolInfo`] from a pool object fetched with content.
pub fn parse_pool_info(object: &SuiObjectData) -> Result<PoolInfo> {
    let object_id = &object.object_id;
    let fields = match &object.content {
        Some(ObjectContent::MoveObject { fields, .. }) => fields,
        _ => return Err(anyhow!("pool {} has no Move object content", object_id)),
    };
    let pool_fields = fields
        .get("value")
        .and_then(|value| value.get("fields"))
        .cloned()
        .ok_or_else(|| anyhow!("pool {} content has no value.fields", object_id))?;
    let pool: PoolFields = serde_json::from_value(pool_fields)
        .with_context(|| format!("malformed pool object {}", object_id))?;

    let coin_x = reserve_coin_type(&pool.reserve_x, "x", object_id)?;
    let coin_y = reserve_coin_type(&pool.reserve_y, "y", object_id)?;
    let lp_type = get_lp_type(pool.lp_supply.type_.as_deref(), &coin_x, &coin_y)?;
    let fee_rate = parse_fee_rate(pool.fee_rate.as_ref())?;

    Ok(PoolInfo {
        object_id: object_id.clone(),
        reserve_x: pool.reserve_x,
        reserve_y: pool.reserve_y,
        total_lp_supply: pool.lp_supply.fields.value,
        lp_type,
        coin_x,
        coin_y,
        fee_rate,
    })
}

impl FlowxClient {
    /// Pool state for each id, in the order the fullnode returns it.
    pub async fn get_pool_infos(&self, lp_object_ids: &[String]) -> Result<Vec<PoolInfo>> {
        let options = ObjectDataOptions::new().with_content();
        let responses =
            multi_get_objects_chunked(self.rpc(), lp_object_ids, &options, self.object_batch_size)
                .await?;

        responses
            .iter()
            .map(|response| {
                let object = response.data.as_ref().ok_or_else(|| {
                    anyhow!(
                        "pool object missing: {}",
                        response.error.clone().unwrap_or_default()
                    )
                })?;
                parse_pool_info(object)
            })
            .collect()
    }

    /// Every listed pair with its pool state, in listing order.
    pub async fn get_pools(&self) -> Result<Vec<Pool>> {
        let pairs: Option<Vec<PairRecord>> = request_field(
            self.graphql(),
            GET_PAIRS,
            json!({ "size": self.pairs_page_size }),
            "getPairs",
        )
        .await?;
        let pairs = pairs.unwrap_or_default();

        let ids: Vec<String> = pairs.iter().map(|p| p.lp_object_id.clone()).collect();
        let infos: HashMap<String, PoolInfo> = self
            .get_pool_infos(&ids)
            .await?
            .into_iter()
            .map(|info| -> Result<(String, PoolInfo)> {
                Ok((normalize_address(&info.object_id)?, info))
            })
            .collect::<Result<_>>()?;

        let pools = pairs
            .into_iter()
            .map(|pair| {
                let key = normalize_address(&pair.lp_object_id)
                    .context("pair lists a bad lpObjectId")?;
                let info = infos
                    .get(&key)
                    .cloned()
                    .ok_or_else(|| anyhow!("no pool object for pair {}", pair.lp_object_id))?;
                Pool::join(pair, info)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(pairs = ids.len(), pools = pools.len(), "joined pairs with pool objects");
        Ok(pools)
    }

    /// Coins listed by the DEX backend.
    pub async fn get_coins(&self) -> Result<Vec<CoinMetadata>> {
        let settings: CoinSettings = request_field(
            self.graphql(),
            COIN_SETTING_QUERY,
            json!({ "limit": self.coins_page_size }),
            "getCoinsSettings",
        )
        .await?;
        Ok(settings.items)
    }

    /// Balances of `address` sorted by coin type, then balance.
    ///
    /// No address means no balances; the fullnode is not called.
    pub async fn get_coins_balance(&self, address: Option<&str>) -> Result<Vec<CoinBalance>> {
        let Some(address) = address.filter(|a| !a.is_empty()) else {
            return Ok(Vec::new());
        };

        let mut balances = self
            .rpc()
            .get_all_balances(address)
            .await?
            .into_iter()
            .map(|b| {
                let balance = b.total_balance.parse::<u128>().map_err(|e| {
                    anyhow!("invalid balance {} for {}: {}", b.total_balance, b.coin_type, e)
                })?;
                Ok(CoinBalance {
                    coin_type: b.coin_type,
                    balance,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        balances.sort();
        Ok(balances)
    }

    /// Coins, balances and pools, fetched concurrently.
    pub async fn get_basic_data(&self, address: Option<&str>) -> Result<BasicData> {
        let (coins, coin_balances, pools) = tokio::try_join!(
            self.get_coins(),
            self.get_coins_balance(address),
            self.get_pools()
        )?;
        Ok(BasicData {
            coins,
            coin_balances,
            pools,
        })
    }
}
