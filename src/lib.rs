//! FlowX DEX client for Sui
//!
//! Client-side utilities for the FlowX exchange:
//!
//! - **Pools and coins**: join backend pair listings with on-chain pool objects,
//!   list coins and owner balances ([`pools`])
//! - **Object reads**: cursor-following owned-object listings and chunked
//!   multi-gets ([`fetcher`])
//! - **Move calls**: classify parameters as pure values or objects from the
//!   published function signature ([`tx`])
//! - **Formatting**: coin types, LP types and decimal amounts, re-exported
//!   from `flowx_types`
//!
//! ```ignore
//! use flowx_sui::FlowxClient;
//!
//! let client = FlowxClient::from_env()?;
//! let data = client.get_basic_data(Some("0x...")).await?;
//! ```

pub mod client;
pub mod config;
pub mod fetcher;
pub mod pools;
pub mod queries;
pub mod tx;
pub mod util;

pub use client::FlowxClient;
pub use config::ClientConfig;
pub use fetcher::{
    chunk_ids, fetch_owned_objects, get_fully_owned_objects, multi_get_objects_chunked,
    DEFAULT_OBJECT_BATCH_SIZE, MAX_LIMIT_PER_RPC_CALL, MAX_OBJECT_BATCH_SIZE,
};
pub use pools::{default_fee_rate, parse_pool_info, BasicData, Pool};
pub use tx::{append_move_call, init_tx_block, MoveCallParam};
pub use util::{last, now_in_milliseconds, sort_data, wait};

pub use flowx_types::{
    calculate_receive_amount, convert_amount_decimal, format_coin_type, get_balance_amount,
    get_decimal_amount, get_lp_type, standardize_type, sui_type_mini_normalize, CoinBalance,
    CoinMetadata, PoolInfo, ReceiveAmount, ReserveBalance, TransactionBlock, LP_DECIMAL,
};
