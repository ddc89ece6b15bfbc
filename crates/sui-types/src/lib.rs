//! Shared types for the FlowX Sui client workspace.
//!
//! Everything here is synchronous and free of I/O:
//!
//! - [`address`] and [`type_parsing`]: canonical forms of ids and type strings
//! - [`amount`]: decimal scaling of on-chain amounts
//! - [`models`]: pool, coin and balance records
//! - [`normalized`]: normalized Move types and pure-argument encoding
//! - [`transaction`]: the programmable transaction accumulator

pub mod address;
pub mod amount;
pub mod env_utils;
pub mod models;
pub mod normalized;
pub mod transaction;
pub mod type_parsing;

pub use amount::{
    calculate_receive_amount, convert_amount_decimal, get_balance_amount, get_decimal_amount,
    LP_DECIMAL, RECEIVE_AMOUNT_PRECISION,
};
pub use models::{
    BalanceFields, BalanceRecord, CoinBalance, CoinMetadata, PoolInfo, ReceiveAmount,
    ReserveBalance,
};
pub use normalized::{encode_pure, pure_serialization_type, NormalizedType, PureType};
pub use transaction::{PtbArgument, PtbCommand, TransactionBlock, TransactionInput};
pub use type_parsing::{
    format_coin_type, get_lp_type, standardize_type, sui_type_mini_normalize, SUI_FULL_TYPE,
    SUI_TYPE,
};
