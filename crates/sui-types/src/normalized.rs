//! Normalized Move types and pure-argument handling.
//!
//! [`NormalizedType`] mirrors the JSON shape the fullnode returns for
//! function signatures (`sui_getNormalizedMoveModule`). Transaction building
//! uses [`pure_serialization_type`] to decide whether a parameter can be
//! passed inline, and [`encode_pure`] to produce its BCS bytes.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use move_core_types::account_address::AccountAddress;
use move_core_types::u256::U256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::{is_valid_sui_address, parse_address};

/// A Move type as reported by the fullnode's normalized module view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Address,
    Signer,
    Struct {
        address: String,
        module: String,
        name: String,
        #[serde(rename = "typeArguments", default)]
        type_arguments: Vec<NormalizedType>,
    },
    Vector(Box<NormalizedType>),
    TypeParameter(u16),
    Reference(Box<NormalizedType>),
    MutableReference(Box<NormalizedType>),
}

impl NormalizedType {
    fn is_struct(&self, addr: &str, module_name: &str, struct_name: &str) -> bool {
        match self {
            NormalizedType::Struct {
                address,
                module,
                name,
                ..
            } => {
                parse_address(address).is_some()
                    && parse_address(address) == parse_address(addr)
                    && module == module_name
                    && name == struct_name
            }
            _ => false,
        }
    }
}

/// Serialization type of a value that can be passed as a pure argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PureType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Address,
    /// ASCII string, or `vector<u8>` supplied as a string.
    String,
    Utf8String,
    Vector(Box<PureType>),
}

impl fmt::Display for PureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PureType::Bool => write!(f, "bool"),
            PureType::U8 => write!(f, "u8"),
            PureType::U16 => write!(f, "u16"),
            PureType::U32 => write!(f, "u32"),
            PureType::U64 => write!(f, "u64"),
            PureType::U128 => write!(f, "u128"),
            PureType::U256 => write!(f, "u256"),
            PureType::Address => write!(f, "address"),
            PureType::String => write!(f, "string"),
            PureType::Utf8String => write!(f, "utf8string"),
            PureType::Vector(inner) => write!(f, "vector<{}>", inner),
        }
    }
}

fn expect_number(value: Option<&Value>, allow_string: bool) -> Result<()> {
    match value {
        None | Some(Value::Number(_)) => Ok(()),
        Some(Value::String(s))
            if allow_string && !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) =>
        {
            Ok(())
        }
        Some(other) => Err(anyhow!("Expect {} to be number", other)),
    }
}

/// Resolve the pure serialization type of `value` for a declared parameter type.
///
/// Returns `Ok(None)` when the parameter must be passed as an object.
/// A value whose JSON kind does not fit the declared primitive is an error.
pub fn pure_serialization_type(
    normalized: &NormalizedType,
    value: Option<&Value>,
) -> Result<Option<PureType>> {
    let value = value.filter(|v| !v.is_null());

    let pure = match normalized {
        NormalizedType::Bool => {
            if let Some(v) = value {
                if !v.is_boolean() {
                    return Err(anyhow!("Expect {} to be boolean", v));
                }
            }
            PureType::Bool
        }
        NormalizedType::U8 => {
            expect_number(value, false)?;
            PureType::U8
        }
        NormalizedType::U16 => {
            expect_number(value, false)?;
            PureType::U16
        }
        NormalizedType::U32 => {
            expect_number(value, false)?;
            PureType::U32
        }
        NormalizedType::U64 => {
            expect_number(value, true)?;
            PureType::U64
        }
        NormalizedType::U128 => {
            expect_number(value, true)?;
            PureType::U128
        }
        NormalizedType::U256 => {
            expect_number(value, true)?;
            PureType::U256
        }
        NormalizedType::Address => {
            if let Some(v) = value {
                let s = v
                    .as_str()
                    .ok_or_else(|| anyhow!("Expect {} to be string", v))?;
                if !is_valid_sui_address(s) {
                    return Err(anyhow!("Invalid Sui Address {}", s));
                }
            }
            PureType::Address
        }
        NormalizedType::Signer => {
            return Err(anyhow!("unknown pure normalized type {:?}", normalized));
        }
        NormalizedType::Vector(inner) => {
            if **inner == NormalizedType::U8 && value.map_or(true, Value::is_string) {
                return Ok(Some(PureType::String));
            }
            let first = match value {
                Some(Value::Array(items)) => items.first(),
                Some(other) => return Err(anyhow!("Expect {} to be a array", other)),
                None => None,
            };
            match pure_serialization_type(inner, first)? {
                Some(inner) => PureType::Vector(Box::new(inner)),
                None => return Ok(None),
            }
        }
        NormalizedType::Struct { type_arguments, .. } => {
            if normalized.is_struct("0x1", "ascii", "String") {
                PureType::String
            } else if normalized.is_struct("0x1", "string", "String") {
                PureType::Utf8String
            } else if normalized.is_struct("0x2", "object", "ID") {
                PureType::Address
            } else if normalized.is_struct("0x1", "option", "Option") {
                let inner = type_arguments
                    .first()
                    .cloned()
                    .ok_or_else(|| anyhow!("Option type without a type argument"))?;
                return pure_serialization_type(&NormalizedType::Vector(Box::new(inner)), value);
            } else {
                return Ok(None);
            }
        }
        NormalizedType::TypeParameter(_)
        | NormalizedType::Reference(_)
        | NormalizedType::MutableReference(_) => return Ok(None),
    };

    Ok(Some(pure))
}

/// A pure argument resolved to its Move value, serialized with BCS.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum PureValue {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    U256(U256),
    Address(AccountAddress),
    String(String),
    Vector(Vec<PureValue>),
}

impl PureValue {
    fn from_json(ty: &PureType, value: &Value) -> Result<Self> {
        Ok(match ty {
            PureType::Bool => PureValue::Bool(
                value
                    .as_bool()
                    .ok_or_else(|| anyhow!("Expected bool, got {}", value))?,
            ),
            PureType::U8 => {
                PureValue::U8(u8::try_from(parse_u128(value)?).context("u8 out of range")?)
            }
            PureType::U16 => {
                PureValue::U16(u16::try_from(parse_u128(value)?).context("u16 out of range")?)
            }
            PureType::U32 => {
                PureValue::U32(u32::try_from(parse_u128(value)?).context("u32 out of range")?)
            }
            PureType::U64 => {
                PureValue::U64(u64::try_from(parse_u128(value)?).context("u64 out of range")?)
            }
            PureType::U128 => PureValue::U128(parse_u128(value)?),
            PureType::U256 => {
                let s = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    other => return Err(anyhow!("Expected u256, got {}", other)),
                };
                let n = U256::from_str(&s)
                    .map_err(|e| anyhow!("Failed to parse '{}' as u256: {:?}", s, e))?;
                PureValue::U256(n)
            }
            PureType::Address => {
                let s = value
                    .as_str()
                    .ok_or_else(|| anyhow!("Expected address string, got {}", value))?;
                let addr = parse_address(s).ok_or_else(|| anyhow!("Invalid Sui Address {}", s))?;
                PureValue::Address(addr)
            }
            PureType::String | PureType::Utf8String => PureValue::String(
                value
                    .as_str()
                    .ok_or_else(|| anyhow!("Expected string, got {}", value))?
                    .to_string(),
            ),
            PureType::Vector(inner) => match value {
                Value::Null => PureValue::Vector(Vec::new()),
                Value::Array(items) => PureValue::Vector(
                    items
                        .iter()
                        .map(|item| PureValue::from_json(inner, item))
                        .collect::<Result<_>>()?,
                ),
                other => return Err(anyhow!("Expected array, got {}", other)),
            },
        })
    }
}

/// BCS-encode `value` as `ty`.
pub fn encode_pure(ty: &PureType, value: &Value) -> Result<Vec<u8>> {
    let pure = PureValue::from_json(ty, value)?;
    bcs::to_bytes(&pure).with_context(|| format!("Failed to serialize {} as {}", value, ty))
}

fn parse_u128(value: &Value) -> Result<u128> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(u128::from)
            .ok_or_else(|| anyhow!("Expected unsigned integer, got {}", n)),
        Value::String(s) => s
            .parse()
            .with_context(|| format!("Failed to parse '{}' as integer", s)),
        other => Err(anyhow!("Expected number or numeric string, got {}", other)),
    }
}
