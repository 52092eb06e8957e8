//! Reserved generic status codes shared by every consumer.
//!
//! # Layout
//!
//! Each severity band reserves the low ordinals for the generic table
//! below. Values here are a contract: they are never reassigned.
//!
//! | Band    | Base         | Reserved ordinals       |
//! |---------|--------------|-------------------------|
//! | success | `0x00000000` | `0x00`                  |
//! | info    | `0x40000000` | `0x00..=0x0B`           |
//! | warning | `0x80000000` | `0x00`                  |
//! | error   | `0xC0000000` | `0x00..=0x0E`           |
//!
//! # Application codes
//!
//! Applications pick ordinals at or above [`USER_SUB_CODE_START`] in the
//! band that matches the outcome:
//!
//! ```rust
//! use serror::{codes, Severity, StatusCode};
//!
//! const ERR_DISK_QUOTA: StatusCode =
//!     StatusCode::new(Severity::Error, codes::USER_SUB_CODE_START + 1);
//!
//! assert!(ERR_DISK_QUOTA.is_error());
//! assert!(codes::name_of(ERR_DISK_QUOTA).is_none());
//! ```
//!
//! This is a convention, nothing checks it. Two libraries that both pick
//! `USER_SUB_CODE_START + 1` in the error band will produce the same code.

mod info;
mod warn;
mod error;
mod io;

pub use info::*;
pub use warn::*;
pub use error::*;
pub use io::from_io_kind;

use crate::StatusCode;

/// Plain success, no extra information.
pub const SUCCESS: StatusCode = StatusCode::from_bits(0x0000_0000);

/// First sub-code ordinal left free for applications in every band.
pub const USER_SUB_CODE_START: u32 = 0x1000;

/// One row of the reserved table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedCode {
    pub code: StatusCode,
    pub name: &'static str,
    pub description: &'static str,
}

const fn row(code: StatusCode, name: &'static str, description: &'static str) -> ReservedCode {
    ReservedCode { code, name, description }
}

/// The full reserved table, ordered by band then ordinal.
pub const RESERVED: &[ReservedCode] = &[
    row(SUCCESS,                  "SUCCESS",                  "success"),

    row(INFO_ALREADY_INITIALIZED, "INFO_ALREADY_INITIALIZED", "already initialized"),
    row(INFO_NOT_INITIALIZED,     "INFO_NOT_INITIALIZED",     "not initialized"),
    row(INFO_ALREADY_RUNNING,     "INFO_ALREADY_RUNNING",     "already running"),
    row(INFO_NOT_RUNNING,         "INFO_NOT_RUNNING",         "not running"),
    row(INFO_ALREADY_REQUESTED,   "INFO_ALREADY_REQUESTED",   "already requested"),
    row(INFO_ALREADY_REGISTERED,  "INFO_ALREADY_REGISTERED",  "already registered"),
    row(INFO_NOT_REGISTERED,      "INFO_NOT_REGISTERED",      "not registered"),
    row(INFO_ALREADY_SET,         "INFO_ALREADY_SET",         "already set"),
    row(INFO_NOT_SET,             "INFO_NOT_SET",             "not set"),
    row(INFO_EXPIRED,             "INFO_EXPIRED",             "expired"),
    row(INFO_NOT_FOUND,           "INFO_NOT_FOUND",           "not found"),
    row(INFO_ALREADY_EXISTS,      "INFO_ALREADY_EXISTS",      "already exists"),

    row(WARN_STILL_RUNNING,       "WARN_STILL_RUNNING",       "still running"),

    row(ERR_ALLOCATION,           "ERR_ALLOCATION",           "allocation failed"),
    row(ERR_NOT_INITIALIZED,      "ERR_NOT_INITIALIZED",      "not initialized"),
    row(ERR_NOT_REQUESTED,        "ERR_NOT_REQUESTED",        "not requested"),
    row(ERR_NOT_FOUND,            "ERR_NOT_FOUND",            "not found"),
    row(ERR_DOES_NOT_EXIST,       "ERR_DOES_NOT_EXIST",       "does not exist"),
    row(ERR_ALREADY_EXISTS,       "ERR_ALREADY_EXISTS",       "already exists"),
    row(ERR_PARSE,                "ERR_PARSE",                "parse error"),
    row(ERR_UNKNOWN,              "ERR_UNKNOWN",              "unknown error"),
    row(ERR_INVALID_DATA,         "ERR_INVALID_DATA",         "invalid data"),
    row(ERR_OPEN,                 "ERR_OPEN",                 "open failed"),
    row(ERR_CLOSE,                "ERR_CLOSE",                "close failed"),
    row(ERR_EXECUTE,              "ERR_EXECUTE",              "execution failed"),
    row(ERR_BUSY,                 "ERR_BUSY",                 "busy"),
    row(ERR_NOT_ALLOWED,          "ERR_NOT_ALLOWED",          "not allowed"),
    row(ERR_STILL_RUNNING,        "ERR_STILL_RUNNING",        "still running"),
];

/// Look up a reserved row by code.
pub fn reserved(code: StatusCode) -> Option<&'static ReservedCode> {
    RESERVED.iter().find(|r| r.code == code)
}

/// Name of a reserved code (`"ERR_PARSE"`), or `None` for application codes.
///
/// ```
/// use serror::codes;
///
/// assert_eq!(codes::name_of(codes::ERR_BUSY), Some("ERR_BUSY"));
/// assert_eq!(codes::name_of(serror::StatusCode::from_bits(0x4000_1000)), None);
/// ```
pub fn name_of(code: StatusCode) -> Option<&'static str> {
    reserved(code).map(|r| r.name)
}

/// Reverse lookup by constant name, case-insensitive.
pub fn by_name(name: &str) -> Option<StatusCode> {
    RESERVED
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name))
        .map(|r| r.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use std::collections::HashSet;

    #[test]
    fn table_values_are_fixed() {
        assert_eq!(SUCCESS.bits(), 0x0000_0000);
        assert_eq!(INFO_ALREADY_INITIALIZED.bits(), 0x4000_0000);
        assert_eq!(INFO_NOT_REGISTERED.bits(), 0x4000_0006);
        assert_eq!(INFO_ALREADY_EXISTS.bits(), 0x4000_000B);
        assert_eq!(WARN_STILL_RUNNING.bits(), 0x8000_0000);
        assert_eq!(ERR_ALLOCATION.bits(), 0xC000_0000);
        assert_eq!(ERR_PARSE.bits(), 0xC000_0006);
        assert_eq!(ERR_STILL_RUNNING.bits(), 0xC000_000E);
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = HashSet::new();
        for r in RESERVED {
            assert!(seen.insert(r.code), "duplicate code {:?}", r.code);
        }
        assert_eq!(RESERVED.len(), 29);
    }

    #[test]
    fn names_match_band_prefix() {
        for r in RESERVED {
            let expected = match r.code.severity() {
                Severity::Success => "SUCCESS",
                Severity::Info => "INFO_",
                Severity::Warning => "WARN_",
                Severity::Error => "ERR_",
            };
            assert!(r.name.starts_with(expected), "{} in {} band", r.name, r.code.severity());
        }
    }

    #[test]
    fn reserved_ordinals_below_user_start() {
        for r in RESERVED {
            assert!(r.code.sub_code() < USER_SUB_CODE_START, "{}", r.name);
        }
    }

    #[test]
    fn info_codes_never_fail() {
        for r in RESERVED.iter().filter(|r| r.code.is_info()) {
            assert!(r.code.is_succeeded(), "{}", r.name);
        }
    }

    #[test]
    fn lookup_both_ways() {
        assert_eq!(name_of(ERR_NOT_ALLOWED), Some("ERR_NOT_ALLOWED"));
        assert_eq!(by_name("err_not_allowed"), Some(ERR_NOT_ALLOWED));
        assert_eq!(by_name("INFO_EXPIRED"), Some(INFO_EXPIRED));
        assert_eq!(by_name("nope"), None);
        assert_eq!(reserved(ERR_BUSY).map(|r| r.description), Some("busy"));
    }
}
