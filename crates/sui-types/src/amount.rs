//! Decimal scaling between on-chain integer amounts and display amounts.
//!
//! Amounts are [`BigDecimal`]s. Scaling by a power of ten only moves the
//! decimal point, so [`get_decimal_amount`] and [`get_balance_amount`] are
//! exact for any number of digits and any `decimals`. The one division,
//! in [`calculate_receive_amount`], is rounded to
//! [`RECEIVE_AMOUNT_PRECISION`] significant digits.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use bigdecimal::{BigDecimal, Zero};

use crate::models::{CoinMetadata, PoolInfo, ReceiveAmount};

/// Decimal places of FlowX LP coins.
pub const LP_DECIMAL: u32 = 9;

/// Significant digits kept by [`calculate_receive_amount`].
pub const RECEIVE_AMOUNT_PRECISION: u64 = 32;

/// Parse a decimal amount, accepting plain ("1.5") and scientific ("1e-9") notation.
pub fn parse_decimal(amount: &str) -> Result<BigDecimal> {
    let amount = amount.trim();
    BigDecimal::from_str(amount)
        .map_err(|e| anyhow!("invalid decimal amount '{}': {}", amount, e))
}

/// `value * 10^exponent`, by moving the decimal point.
fn shift(value: &BigDecimal, exponent: i64) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, scale - exponent).normalized()
}

/// Scale a display amount up to its on-chain integer form: `amount * 10^decimals`.
///
/// ```
/// use flowx_types::amount::get_decimal_amount;
///
/// assert_eq!(get_decimal_amount("1.5", 9).unwrap(), "1500000000");
/// assert_eq!(get_decimal_amount("2", 30).unwrap(), format!("2{}", "0".repeat(30)));
/// ```
pub fn get_decimal_amount(amount: &str, decimals: u32) -> Result<String> {
    Ok(shift(&parse_decimal(amount)?, i64::from(decimals)).to_plain_string())
}

/// Scale an on-chain integer amount down to display form: `amount / 10^decimals`.
pub fn get_balance_amount(amount: &str, decimals: u32) -> Result<BigDecimal> {
    Ok(convert_amount_decimal(&parse_decimal(amount)?, decimals))
}

/// [`get_balance_amount`] for an already parsed value.
pub fn convert_amount_decimal(amount: &BigDecimal, decimals: u32) -> BigDecimal {
    shift(amount, -i64::from(decimals))
}

/// Amount of each pool coin one LP token is worth.
///
/// Missing pool info yields zero amounts.
pub fn calculate_receive_amount(
    pool: Option<&PoolInfo>,
    coin_x: &CoinMetadata,
    coin_y: &CoinMetadata,
) -> Result<ReceiveAmount> {
    let Some(pool) = pool else {
        return Ok(ReceiveAmount::default());
    };

    let lp_supply = get_balance_amount(&pool.total_lp_supply, LP_DECIMAL)?;
    if lp_supply.is_zero() {
        return Err(anyhow!("pool {} has no LP supply", pool.object_id));
    }

    let share = |reserve: &str, decimals: u32| -> Result<BigDecimal> {
        let reserve = get_balance_amount(reserve, decimals)?;
        Ok((reserve / &lp_supply)
            .with_prec(RECEIVE_AMOUNT_PRECISION)
            .normalized())
    };

    Ok(ReceiveAmount {
        amount_x: share(pool.reserve_x.amount(), coin_x.decimals)?,
        amount_y: share(pool.reserve_y.amount(), coin_y.decimals)?,
    })
}
