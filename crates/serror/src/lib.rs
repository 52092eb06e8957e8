//! # serror: status codes and failure traces
//!
//! Severity-encoded 32-bit status codes plus a failure context that
//! records every step of an error's trip up the call stack.
//!
//! ## Design
//!
//! A [`StatusCode`] is a plain `i32`. Its top two bits are the severity:
//!
//! | Bits 31..30 | Severity  | Range                     | Failed? |
//! |-------------|-----------|---------------------------|---------|
//! | `00`        | success   | `0x00000000..=0x3FFFFFFF` | no      |
//! | `01`        | info      | `0x40000000..=0x7FFFFFFF` | no      |
//! | `10`        | warning   | `0x80000000..=0xBFFFFFFF` | yes     |
//! | `11`        | error     | `0xC0000000..=0xFFFFFFFF` | yes     |
//!
//! so "did it fail" is a sign test. The low 30 bits are the sub-code;
//! [`codes`] holds the reserved table.
//!
//! A [`FailureContext`] starts at the raise point with one [`TraceEntry`]
//! and gains one more per re-raise. Its trace renders one line per entry:
//!
//! ```text
//! 1760000000 0xC0000006 parser.rs:12 unexpected `}`
//! 1760000000 0xC0000009 loader.rs:40 cannot load settings
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use serror::{codes, raise, raise_if_failed, FailureExt, SResult, StatusCode};
//!
//! fn lookup(key: &str) -> StatusCode {
//!     if key.is_empty() { codes::ERR_NOT_FOUND } else { codes::SUCCESS }
//! }
//!
//! fn parse(key: &str) -> SResult<u32> {
//!     raise_if_failed!(lookup(key), "lookup `{}`", key);
//!     if key.len() > 8 {
//!         raise!(codes::ERR_PARSE, "key too long");
//!     }
//!     Ok(key.len() as u32)
//! }
//!
//! fn load(key: &str) -> SResult<u32> {
//!     parse(key).reraise(codes::ERR_OPEN, "load settings")
//! }
//!
//! let err = load("").unwrap_err();
//! assert_eq!(err.current_code(), codes::ERR_OPEN);
//! assert_eq!(err.first().code, codes::ERR_NOT_FOUND);
//! assert_eq!(err.trace().lines().count(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! | Flag        | Effect |
//! |-------------|--------|
//! | `backtrace` | Captures `std::backtrace::Backtrace` when a context is raised |
//! | `metrics`   | Per-severity AtomicU64 raise counters, Prometheus dump |
//! | `serde`     | `Serialize`/`Deserialize` for codes, locations, entries, contexts |
//!
//! ## Logging
//!
//! Raising emits a `tracing` event at `DEBUG`, each re-raise one at
//! `TRACE`, both under the `serror` target. Nothing is printed unless the
//! application installs a subscriber.

#[macro_use]
mod macros;

mod code;
pub mod codes;
mod location;
mod entry;
mod context;
mod convert;

cfg_if::cfg_if! {
    if #[cfg(feature = "metrics")] {
        pub mod metrics;
        use self::metrics as counters;
    } else {
        mod counters {
            use crate::StatusCode;

            #[inline(always)]
            pub fn record_raise(_code: StatusCode) {}

            #[inline(always)]
            pub fn record_reraise(_code: StatusCode) {}
        }
    }
}

// ── Public API ────────────────────────────────────────────────────

pub use code::{ParseStatusCodeError, Severity, StatusCode, SEVERITY_MASK, SUB_CODE_MASK};
pub use location::Location;
pub use entry::{ParseTraceError, TraceEntry};
pub use context::FailureContext;
pub use convert::{FailureExt, ResultExt};

/// Convenience Result alias.
pub type SResult<T> = Result<T, FailureContext>;
