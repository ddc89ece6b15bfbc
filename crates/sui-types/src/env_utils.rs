//! Environment variable parsing utilities.
//!
//! Replaces the repeated pattern:
//!
//! ```ignore
//! std::env::var("VAR_NAME")
//!     .ok()
//!     .and_then(|v| v.parse::<u64>().ok())
//!     .unwrap_or(default_value)
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
///
/// ```
/// use flowx_types::env_utils::env_var;
///
/// let value: Option<u64> = env_var("FLOWX_DOC_UNSET_VAR");
/// assert!(value.is_none());
/// ```
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Parse an environment variable with a default value.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Non-blank string value of an environment variable.
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get an environment variable as a string with a default value.
pub fn env_string_or(key: &str, default: &str) -> String {
    env_string(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_parsing() {
        std::env::set_var("FLOWX_TEST_U64", "42");
        let val: Option<u64> = env_var("FLOWX_TEST_U64");
        assert_eq!(val, Some(42));

        let missing: Option<u64> = env_var("FLOWX_NONEXISTENT_VAR_1");
        assert_eq!(missing, None);

        std::env::remove_var("FLOWX_TEST_U64");
    }

    #[test]
    fn test_env_var_or() {
        std::env::set_var("FLOWX_TEST_WITH_DEFAULT", "not-a-number");
        let val: u64 = env_var_or("FLOWX_TEST_WITH_DEFAULT", 50);
        assert_eq!(val, 50);
        std::env::remove_var("FLOWX_TEST_WITH_DEFAULT");
    }

    #[test]
    fn test_env_string() {
        std::env::set_var("FLOWX_TEST_BLANK", "   ");
        assert_eq!(env_string("FLOWX_TEST_BLANK"), None);
        assert_eq!(env_string_or("FLOWX_TEST_BLANK", "fallback"), "fallback");

        std::env::set_var("FLOWX_TEST_STRING", " hello ");
        assert_eq!(env_string("FLOWX_TEST_STRING").as_deref(), Some("hello"));

        std::env::remove_var("FLOWX_TEST_BLANK");
        std::env::remove_var("FLOWX_TEST_STRING");
    }
}
