//! Environment variable helpers for the demo's runtime knobs.

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default.
///
/// Unset and unparsable values both fall back to `default`.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    parse_or(std::env::var(key).ok().as_deref(), default)
}

/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// Any other set value is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    bool_or(std::env::var(key).ok().as_deref(), default)
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn bool_or(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(val) => matches!(val.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}
