//! Type string formatting.
//!
//! On-chain type strings arrive with inconsistent address padding depending on
//! the data source ("0x2::sui::SUI" from one endpoint, the 64-digit form from
//! another). These helpers convert between the padded form used for lookups
//! and the stripped form stored on pool records.

use anyhow::{anyhow, Result};

use crate::address::{remove_leading_zeros, SUI_ADDRESS_HEX_LENGTH};

/// Native coin type in its short form.
pub const SUI_TYPE: &str = "0x2::sui::SUI";

/// Native coin type with a full-width address.
pub const SUI_FULL_TYPE: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI";

const COIN_WRAPPER_PREFIX: &str = "0x2::coin::Coin<";
const LP_SUPPLY_MARKER: &str = "Supply";

/// Left-pad every embedded hex address in `type_str` to 64 digits.
///
/// The native SUI type is returned as-is.
///
/// ```
/// use flowx_types::type_parsing::standardize_type;
///
/// assert_eq!(
///     standardize_type("0x1::a::B"),
///     "0x0000000000000000000000000000000000000000000000000000000000000001::a::B"
/// );
/// assert_eq!(standardize_type("0x2::sui::SUI"), "0x2::sui::SUI");
/// ```
pub fn standardize_type(type_str: &str) -> String {
    if type_str == SUI_TYPE {
        return SUI_TYPE.to_string();
    }

    let bytes = type_str.as_bytes();
    let mut out = String::with_capacity(type_str.len() + SUI_ADDRESS_HEX_LENGTH);
    let mut i = 0;
    let mut copied = 0;

    while i + 2 < bytes.len() {
        if bytes[i] == b'0' && bytes[i + 1] == b'x' && bytes[i + 2].is_ascii_hexdigit() {
            let start = i + 2;
            let mut end = start;
            while end < bytes.len()
                && end - start < SUI_ADDRESS_HEX_LENGTH
                && bytes[end].is_ascii_hexdigit()
            {
                end += 1;
            }
            out.push_str(&type_str[copied..i]);
            out.push_str(&format!("0x{:0>64}", &type_str[start..end]));
            copied = end;
            i = end;
        } else {
            i += 1;
        }
    }
    out.push_str(&type_str[copied..]);
    out
}

/// Collapse the padded native coin type to its short form.
pub fn sui_type_mini_normalize(type_str: &str) -> &str {
    if type_str == SUI_FULL_TYPE {
        SUI_TYPE
    } else {
        type_str
    }
}

/// Unwrap `0x2::coin::Coin<T>` and return `T` with its address zero-stripped.
///
/// ```
/// use flowx_types::type_parsing::format_coin_type;
///
/// let coin = format_coin_type(
///     "0x2::coin::Coin<0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI>",
/// )
/// .unwrap();
/// assert_eq!(coin, "0x2::sui::SUI");
/// assert!(format_coin_type("0x2::sui::SUI").is_err());
/// ```
pub fn format_coin_type(type_str: &str) -> Result<String> {
    let inner = type_str
        .strip_prefix(COIN_WRAPPER_PREFIX)
        .and_then(|rest| rest.strip_suffix('>'))
        .filter(|inner| !inner.is_empty())
        .ok_or_else(|| anyhow!("not a coin type: {}", type_str))?;

    let body = inner.get(2..).unwrap_or("");
    Ok(format!("0x{}", remove_leading_zeros(body)))
}

/// Build the LP coin type for a pool from its `Supply<...>` type.
///
/// Returns an empty string when there is no supply type.
///
/// ```
/// use flowx_types::type_parsing::get_lp_type;
///
/// let lp = get_lp_type(
///     Some("0x2::balance::Supply<0xba::pair::LP<0x2::sui::SUI, 0xc::usdc::USDC>>"),
///     "0xa::a::A",
///     "0xb::b::B",
/// )
/// .unwrap();
/// assert_eq!(lp, "0xba::pair::LP<0xa::a::A, 0xb::b::B>");
/// assert_eq!(get_lp_type(None, "0xA", "0xB").unwrap(), "");
/// ```
pub fn get_lp_type(lp_supply_type: Option<&str>, coin_x: &str, coin_y: &str) -> Result<String> {
    let lp_supply_type = match lp_supply_type {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(String::new()),
    };

    let segment = lp_supply_type
        .split(LP_SUPPLY_MARKER)
        .nth(1)
        .ok_or_else(|| anyhow!("not an LP supply type: {}", lp_supply_type))?;

    // Drop the `<` that follows the marker and its matching trailing `>`.
    let inner = segment
        .get(1..segment.len().saturating_sub(1))
        .unwrap_or("");
    let base = inner.split('<').next().unwrap_or("");

    Ok(format!("{}<{}, {}>", base, coin_x, coin_y))
}
