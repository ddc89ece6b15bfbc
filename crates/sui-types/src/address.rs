//! Address normalization utilities.
//!
//! Sui addresses and object ids are 32-byte values, but they show up in
//! several textual forms:
//! - Short form: "0x2"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000002"
//! - Without prefix: "2"
//!
//! Everything that compares ids across data sources (GraphQL pair records vs.
//! RPC object responses) goes through [`normalize_address`].

use anyhow::{bail, Result};
use move_core_types::account_address::AccountAddress;

/// Number of hex digits in a full-width Sui address.
pub const SUI_ADDRESS_HEX_LENGTH: usize = 64;

/// Normalize an address to lowercase with 0x prefix and full 64 hex characters.
///
/// The `0x` prefix is optional on input. Anything other than 1 to 64 hex
/// digits is rejected rather than padded or cut, so two distinct ids never
/// normalize to the same string.
///
/// # Examples
///
/// ```
/// use flowx_types::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0x2").unwrap(),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// assert!(normalize_address("0xnope").is_err());
/// ```
pub fn normalize_address(addr: &str) -> Result<String> {
    let trimmed = addr.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.is_empty()
        || hex.len() > SUI_ADDRESS_HEX_LENGTH
        || !hex.chars().all(|c| c.is_ascii_hexdigit())
    {
        bail!("invalid sui address: {:?}", addr);
    }
    Ok(format!("0x{:0>64}", hex.to_ascii_lowercase()))
}

/// Normalize an address to short form (minimal hex digits).
///
/// ```
/// use flowx_types::address::normalize_address_short;
///
/// assert_eq!(normalize_address_short("0x00abc").unwrap(), "0xabc");
/// ```
pub fn normalize_address_short(addr: &str) -> Result<String> {
    let normalized = normalize_address(addr)?;
    let trimmed = normalized[2..].trim_start_matches('0');
    if trimmed.is_empty() {
        Ok("0x0".to_string())
    } else {
        Ok(format!("0x{}", trimmed))
    }
}

/// Parse a string address into an AccountAddress.
pub fn parse_address(addr: &str) -> Option<AccountAddress> {
    if !is_valid_sui_address(addr) {
        return None;
    }
    AccountAddress::from_hex_literal(&normalize_address(addr).ok()?).ok()
}

/// True when `addr` is `0x` followed by 1 to 64 hex digits.
///
/// This is the check transaction building applies to pure `address` arguments.
pub fn is_valid_sui_address(addr: &str) -> bool {
    match addr.strip_prefix("0x").or_else(|| addr.strip_prefix("0X")) {
        Some(hex) => {
            !hex.is_empty()
                && hex.len() <= SUI_ADDRESS_HEX_LENGTH
                && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Strip every leading `0` character.
pub fn remove_leading_zeros(hex: &str) -> &str {
    hex.trim_start_matches('0')
}

/// Same as [`remove_leading_zeros`], returning an owned string.
pub fn strip_zeros(s: &str) -> String {
    remove_leading_zeros(s).to_string()
}

/// Prefix `0x` unless it is already there.
pub fn add_zeros_x(text: &str) -> String {
    if text.starts_with("0x") {
        text.to_string()
    } else {
        format!("0x{}", text)
    }
}
