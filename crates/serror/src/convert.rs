use std::error::Error;
use std::io;

use crate::{codes, FailureContext, Location, SResult, StatusCode};

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for FailureContext {
    /// Raise at the `?` site with the closest reserved code.
    ///
    /// The io error stays reachable through `Error::source`.
    #[track_caller]
    fn from(err: io::Error) -> Self {
        let code = codes::from_io_kind(err.kind());
        FailureContext::at(Location::caller(), code, err.to_string()).with_source(err)
    }
}

// ── StatusCode::check ─────────────────────────────────────────────

impl StatusCode {
    /// Function form of `raise_if_failed!`, located at the caller.
    ///
    /// ```
    /// use serror::{codes, SResult};
    ///
    /// fn start() -> SResult<()> {
    ///     codes::INFO_ALREADY_RUNNING.check("start worker")?;
    ///     codes::ERR_BUSY.check("start worker")?;
    ///     Ok(())
    /// }
    ///
    /// assert_eq!(start().unwrap_err().current_code(), codes::ERR_BUSY);
    /// ```
    #[track_caller]
    pub fn check(self, message: impl Into<String>) -> SResult<StatusCode> {
        FailureContext::check(self, Location::caller(), message)
    }
}

// ── ResultExt ─────────────────────────────────────────────────────

/// Raise a [`FailureContext`] from any foreign `Result`.
///
/// ```
/// use serror::{codes, ResultExt, SResult};
///
/// fn port(text: &str) -> SResult<u16> {
///     text.parse::<u16>().raise_as(codes::ERR_PARSE, "port number")
/// }
///
/// let err = port("http").unwrap_err();
/// assert_eq!(err.current_code(), codes::ERR_PARSE);
/// assert!(std::error::Error::source(&err).is_some());
/// ```
pub trait ResultExt<T> {
    /// Raise with `code` at the caller, keeping the error as the source.
    #[track_caller]
    fn raise_as(self, code: StatusCode, message: impl Into<String>) -> SResult<T>;

    /// Like [`raise_as`](Self::raise_as), message built only on failure.
    #[track_caller]
    fn raise_as_with<M, F>(self, code: StatusCode, message: F) -> SResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn raise_as(self, code: StatusCode, message: impl Into<String>) -> SResult<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(FailureContext::at(Location::caller(), code, message).with_source(e)),
        }
    }

    #[track_caller]
    fn raise_as_with<M, F>(self, code: StatusCode, message: F) -> SResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(FailureContext::at(Location::caller(), code, message()).with_source(e)),
        }
    }
}

// ── FailureExt ────────────────────────────────────────────────────

/// Re-raise on an [`SResult`] without unpacking it.
///
/// ```
/// use serror::{codes, raise, FailureExt, SResult};
///
/// fn read_header() -> SResult<u32> {
///     raise!(codes::ERR_PARSE, "short header")
/// }
///
/// fn open() -> SResult<u32> {
///     read_header().reraise(codes::ERR_OPEN, "open archive")
/// }
///
/// let err = open().unwrap_err();
/// assert_eq!(err.current_code(), codes::ERR_OPEN);
/// assert_eq!(err.first().code, codes::ERR_PARSE);
/// ```
pub trait FailureExt<T> {
    /// Append a step at the caller when `self` is `Err`.
    #[track_caller]
    fn reraise(self, code: StatusCode, message: impl Into<String>) -> SResult<T>;

    /// Like [`reraise`](Self::reraise), message built only on failure.
    #[track_caller]
    fn reraise_with<M, F>(self, code: StatusCode, message: F) -> SResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T> FailureExt<T> for SResult<T> {
    #[track_caller]
    fn reraise(self, code: StatusCode, message: impl Into<String>) -> SResult<T> {
        match self {
            Ok(v) => Ok(v),
            Err(mut ctx) => {
                ctx.reraise_at(Location::caller(), code, message);
                Err(ctx)
            }
        }
    }

    #[track_caller]
    fn reraise_with<M, F>(self, code: StatusCode, message: F) -> SResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(v) => Ok(v),
            Err(mut ctx) => {
                ctx.reraise_at(Location::caller(), code, message());
                Err(ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_missing() -> SResult<Vec<u8>> {
        let data = std::fs::read("/definitely/not/here/serror-test")?;
        Ok(data)
    }

    #[test]
    fn io_error_via_question_mark() {
        let err = open_missing().unwrap_err();
        assert_eq!(err.current_code(), codes::ERR_NOT_FOUND);
        assert_eq!(err.len(), 1);
        assert!(err.first().location.origin().ends_with("convert.rs"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_custom_kind() {
        let io_err = io::Error::new(io::ErrorKind::InvalidData, "bad utf-8");
        let ctx = FailureContext::from(io_err);
        assert_eq!(ctx.current_code(), codes::ERR_INVALID_DATA);
        assert_eq!(ctx.first().message, "bad utf-8");
    }

    #[test]
    fn check_uses_caller_location() {
        let line = line!() + 1;
        let err = codes::ERR_EXECUTE.check("run job").unwrap_err();
        assert_eq!(err.first().location.line(), line);
        assert!(err.first().location.origin().ends_with("convert.rs"));

        assert_eq!(codes::INFO_EXPIRED.check("cache").ok(), Some(codes::INFO_EXPIRED));
    }

    #[test]
    fn raise_as_wraps_foreign_error() {
        let parsed: Result<i32, _> = "x1".parse::<i32>();
        let line = line!() + 1;
        let err = parsed.raise_as(codes::ERR_PARSE, "read count").unwrap_err();

        assert_eq!(err.current_code(), codes::ERR_PARSE);
        assert_eq!(err.first().location.line(), line);
        assert_eq!(err.first().message, "read count");
        assert!(err.source().is_some());
    }

    #[test]
    fn raise_as_passes_ok_through() {
        let ok: Result<i32, io::Error> = Ok(7);
        assert_eq!(ok.raise_as(codes::ERR_OPEN, "unused").ok(), Some(7));
    }

    #[test]
    fn lazy_messages_only_on_failure() {
        let mut built = 0;
        let ok: Result<u8, io::Error> = Ok(1);
        let _ = ok.raise_as_with(codes::ERR_OPEN, || {
            built += 1;
            "open"
        });
        let fine: SResult<u8> = Ok(1);
        let _ = fine.reraise_with(codes::ERR_OPEN, || {
            built += 1;
            "open"
        });
        assert_eq!(built, 0);

        let failed: SResult<u8> = Err(FailureContext::new("a.rs", 1, codes::ERR_BUSY, "busy"));
        let err = failed
            .reraise_with(codes::ERR_EXECUTE, || format!("attempt {}", 3))
            .unwrap_err();
        assert_eq!(err.last().message, "attempt 3");
    }

    #[test]
    fn reraise_chain_on_results() {
        fn leaf() -> SResult<()> {
            Err(FailureContext::new("leaf.rs", 5, codes::ERR_NOT_FOUND, "no key"))
        }
        fn middle() -> SResult<()> {
            leaf().reraise(codes::ERR_INVALID_DATA, "bad record")
        }
        fn top() -> SResult<()> {
            middle().reraise(codes::ERR_EXECUTE, "import failed")
        }

        let err = top().unwrap_err();
        let codes_seen: Vec<_> = err.entries().iter().map(|e| e.code).collect();
        assert_eq!(codes_seen, [codes::ERR_NOT_FOUND, codes::ERR_INVALID_DATA, codes::ERR_EXECUTE]);
        assert!(err.last().location.origin().ends_with("convert.rs"));
    }
}
