//! In-memory collaborators.
//!
//! [`MockRpc`] serves canned owned-object pages, objects, balances and
//! normalized modules and records what it was asked. [`MockGraphQl`] answers
//! the pairs and coin-settings queries.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use flowx_transport::graphql::extract_data;
use flowx_transport::{
    Balance, GraphQlTransport, NormalizedModule, ObjectDataOptions, ObjectResponseQuery,
    ObjectsPage, Page, SuiObjectData, SuiObjectResponse, SuiRpc,
};
use flowx_types::address::normalize_address;
use serde_json::{json, Value};

pub const ROUTER_PACKAGE: &str = "0xba153169476e8c3114962261d1edc70de5ad9781b83cc617ecc8c1923191cae0";
pub const ROUTER_MODULE: &str = "router";

/// Recorded `suix_getOwnedObjects` call.
#[derive(Debug, Clone)]
pub struct OwnedCall {
    pub owner: String,
    pub cursor: Option<String>,
    pub limit: Option<usize>,
    pub query: ObjectResponseQuery,
}

#[derive(Default)]
pub struct MockRpc {
    pub owned_pages: Vec<ObjectsPage>,
    pub fail_on_page: Option<usize>,
    pub objects: Vec<SuiObjectData>,
    /// Answer multi-gets in reverse order.
    pub reverse_multi_get: bool,
    /// Answer the n-th requested id with `objects[n]`, whatever its id.
    pub positional_multi_get: bool,
    pub balances: Vec<Balance>,
    pub modules: Vec<NormalizedModule>,

    pub owned_calls: Mutex<Vec<OwnedCall>>,
    pub multi_get_calls: Mutex<Vec<Vec<String>>>,
    pub balance_calls: AtomicUsize,
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `objects` as owned-object pages of `page_size` entries.
    pub fn with_owned_objects(mut self, objects: Vec<SuiObjectData>, page_size: usize) -> Self {
        let chunks: Vec<Vec<SuiObjectData>> = if objects.is_empty() {
            vec![Vec::new()]
        } else {
            objects.chunks(page_size).map(|c| c.to_vec()).collect()
        };
        let count = chunks.len();
        self.owned_pages = chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| Page {
                data: chunk.into_iter().map(SuiObjectResponse::from_data).collect(),
                next_cursor: Some(format!("page-{}", i + 1)),
                has_next_page: i + 1 < count,
            })
            .collect();
        self
    }

    pub fn with_objects(mut self, objects: Vec<SuiObjectData>) -> Self {
        self.objects = objects;
        self
    }

    /// Serve `objects` in request order regardless of the ids asked for.
    pub fn with_positional_objects(mut self, objects: Vec<SuiObjectData>) -> Self {
        self.objects = objects;
        self.positional_multi_get = true;
        self
    }

    pub fn with_balances(mut self, balances: Vec<Balance>) -> Self {
        self.balances = balances;
        self
    }

    pub fn with_router_module(mut self) -> Self {
        self.modules.push(router_module());
        self
    }

    pub fn owned_calls(&self) -> Vec<OwnedCall> {
        self.owned_calls.lock().unwrap().clone()
    }

    pub fn multi_get_calls(&self) -> Vec<Vec<String>> {
        self.multi_get_calls.lock().unwrap().clone()
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuiRpc for MockRpc {
    async fn get_owned_objects(
        &self,
        owner: &str,
        query: &ObjectResponseQuery,
        cursor: Option<&str>,
        limit: Option<usize>,
    ) -> Result<ObjectsPage> {
        self.owned_calls.lock().unwrap().push(OwnedCall {
            owner: owner.to_string(),
            cursor: cursor.map(str::to_string),
            limit,
            query: query.clone(),
        });

        let index = match cursor {
            None => 0,
            Some(c) => c
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| anyhow!("unknown cursor {}", c))?,
        };
        if self.fail_on_page == Some(index) {
            return Err(anyhow!("page {} unavailable", index));
        }
        self.owned_pages
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow!("no page {}", index))
    }

    async fn multi_get_objects(
        &self,
        ids: &[String],
        _options: &ObjectDataOptions,
    ) -> Result<Vec<SuiObjectResponse>> {
        self.multi_get_calls.lock().unwrap().push(ids.to_vec());

        let mut responses: Vec<SuiObjectResponse> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let wanted = normalize_address(id).ok();
                let found = if self.positional_multi_get {
                    self.objects.get(i)
                } else {
                    self.objects.iter().find(|o| {
                        wanted.is_some() && normalize_address(&o.object_id).ok() == wanted
                    })
                };
                match found {
                    Some(object) => SuiObjectResponse::from_data(object.clone()),
                    None => SuiObjectResponse {
                        data: None,
                        error: Some(json!({ "code": "notExists", "object_id": id })),
                    },
                }
            })
            .collect();
        if self.reverse_multi_get {
            responses.reverse();
        }
        Ok(responses)
    }

    async fn get_all_balances(&self, _owner: &str) -> Result<Vec<Balance>> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.balances.clone())
    }

    async fn get_normalized_move_module(
        &self,
        package: &str,
        module: &str,
    ) -> Result<NormalizedModule> {
        self.modules
            .iter()
            .find(|m| {
                normalize_address(&m.address).ok() == normalize_address(package).ok()
                    && m.name == module
            })
            .cloned()
            .ok_or_else(|| anyhow!("module {}::{} not found", package, module))
    }
}

/// GraphQL backend serving fixed pairs and coin settings.
#[derive(Default)]
pub struct MockGraphQl {
    pub pairs: Value,
    pub coins: Value,
    /// When set, every request answers with this `errors` array.
    pub errors: Option<Value>,
    pub calls: Mutex<Vec<(String, Value)>>,
}

impl MockGraphQl {
    pub fn new(pairs: Value, coins: Value) -> Self {
        Self {
            pairs,
            coins,
            ..Self::default()
        }
    }

    pub fn failing(errors: Value) -> Self {
        Self {
            errors: Some(errors),
            ..Self::default()
        }
    }

    pub fn variables_for(&self, field: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(query, _)| query.contains(field))
            .map(|(_, vars)| vars.clone())
    }
}

#[async_trait]
impl GraphQlTransport for MockGraphQl {
    async fn request(&self, query: &str, variables: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), variables));

        let response = if let Some(errors) = &self.errors {
            json!({ "data": null, "errors": errors })
        } else if query.contains("getPairs") {
            json!({ "data": { "getPairs": self.pairs } })
        } else if query.contains("getCoinsSettings") {
            json!({ "data": { "getCoinsSettings": { "items": self.coins } } })
        } else {
            json!({ "errors": [{ "message": "unknown query" }] })
        };
        extract_data(response)
    }
}

/// A plain owned object.
pub fn coin_object(id: &str) -> SuiObjectData {
    serde_json::from_value(json!({
        "objectId": id,
        "version": "7",
        "digest": "8qbFpMeJmtjNbFFmRkFxH5SAM5eQ7xDjjHBvJRZHYbCG",
        "type": "0x2::coin::Coin<0x2::sui::SUI>",
        "owner": { "AddressOwner": "0xcafe" },
        "content": {
            "dataType": "moveObject",
            "type": "0x2::coin::Coin<0x2::sui::SUI>",
            "hasPublicTransfer": true,
            "fields": { "balance": "100", "id": { "id": id } }
        }
    }))
    .unwrap()
}

/// A FlowX pair metadata object with 1 LP backed by 1 X (9 decimals) and 2 Y (6 decimals).
///
/// `coin_x` and `coin_y` are the inner coin types as they appear on chain.
pub fn pool_object(id: &str, coin_x: &str, coin_y: &str, fee_rate: Option<Value>) -> SuiObjectData {
    let mut fields = json!({
        "reserve_x": {
            "type": format!("0x2::coin::Coin<{}>", coin_x),
            "fields": { "balance": "1000000000", "id": { "id": "0x10" } }
        },
        "reserve_y": {
            "type": format!("0x2::coin::Coin<{}>", coin_y),
            "fields": { "balance": "2000000", "id": { "id": "0x11" } }
        },
        "lp_supply": {
            "type": format!(
                "0x2::balance::Supply<{}::pair::LP<{}, {}>>",
                ROUTER_PACKAGE, coin_x, coin_y
            ),
            "fields": { "value": "1000000000" }
        },
        "k_last": "0"
    });
    if let Some(rate) = fee_rate {
        fields["fee_rate"] = rate;
    }

    serde_json::from_value(json!({
        "objectId": id,
        "version": "3",
        "digest": "4mVyqgVTn5BkqTHV5mJeUKvZdP8ZG43ZL8sKoq6Ph1Rr",
        "content": {
            "dataType": "moveObject",
            "type": "0x2::dynamic_field::Field<0x1::string::String, 0xba::pair::PairMetadata>",
            "hasPublicTransfer": false,
            "fields": {
                "id": { "id": id },
                "name": "LP-A-B",
                "value": {
                    "type": format!("{}::pair::PairMetadata", ROUTER_PACKAGE),
                    "fields": fields
                }
            }
        }
    }))
    .unwrap()
}

pub fn balance(coin_type: &str, total: &str) -> Balance {
    Balance {
        coin_type: coin_type.to_string(),
        coin_object_count: 1,
        total_balance: total.to_string(),
    }
}

/// `router` module exposing a swap and a liquidity call.
fn router_module() -> NormalizedModule {
    let container = json!({ "MutableReference": { "Struct": {
        "address": ROUTER_PACKAGE, "module": "factory", "name": "Container", "typeArguments": []
    }}});
    let coin_param = |index: u16| {
        json!({ "Struct": {
            "address": "0x2", "module": "coin", "name": "Coin",
            "typeArguments": [{ "TypeParameter": index }]
        }})
    };
    let tx_context = json!({ "MutableReference": { "Struct": {
        "address": "0x2", "module": "tx_context", "name": "TxContext", "typeArguments": []
    }}});

    serde_json::from_value(json!({
        "fileFormatVersion": 6,
        "address": ROUTER_PACKAGE,
        "name": ROUTER_MODULE,
        "friends": [],
        "structs": {},
        "exposedFunctions": {
            "swap_exact_input": {
                "visibility": "Public",
                "isEntry": true,
                "typeParameters": [{ "abilities": [] }, { "abilities": [] }],
                "parameters": [container, coin_param(0), "U64", "Address", tx_context],
                "return": []
            },
            "add_liquidity": {
                "visibility": "Public",
                "isEntry": true,
                "typeParameters": [{ "abilities": [] }, { "abilities": [] }],
                "parameters": [
                    container,
                    coin_param(0),
                    coin_param(1),
                    "U64",
                    "U64",
                    { "Struct": {
                        "address": "0x1", "module": "option", "name": "Option",
                        "typeArguments": ["U64"]
                    }},
                    { "Struct": {
                        "address": "0x1", "module": "string", "name": "String",
                        "typeArguments": []
                    }},
                    tx_context
                ],
                "return": []
            }
        }
    }))
    .unwrap()
}
