use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::{Location, Severity, SResult, StatusCode, TraceEntry};

/// The record of one failure as it propagates.
///
/// Created once at the raise point, then extended by every frame that
/// re-raises it on the way up. Entries are append-only, so the trace reads
/// oldest first and the current code is always the last entry's code.
///
/// ```
/// use serror::{codes, FailureContext};
///
/// let mut ctx = FailureContext::new("parser.rs", 12, codes::ERR_PARSE, "unexpected `}`");
/// ctx.reraise("loader.rs", 40, codes::ERR_OPEN, "cannot load settings");
///
/// assert_eq!(ctx.current_code(), codes::ERR_OPEN);
/// assert_eq!(ctx.len(), 2);
/// assert!(ctx.trace().lines().last().unwrap().ends_with("loader.rs:40 cannot load settings"));
/// ```
///
/// `clone()` is an independent snapshot: re-raising the original later does
/// not touch the copy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Snapshot"))]
#[derive(Clone)]
pub struct FailureContext {
    code: StatusCode,
    entries: Vec<TraceEntry>,

    #[cfg_attr(feature = "serde", serde(skip))]
    source: Option<Arc<dyn Error + Send + Sync>>,

    #[cfg(feature = "backtrace")]
    #[cfg_attr(feature = "serde", serde(skip))]
    backtrace: Option<String>,
}

/// Deserialization goes through the entries alone so an empty trace is
/// rejected and the current code is always re-derived from the last entry.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Snapshot {
    entries: Vec<TraceEntry>,
}

#[cfg(feature = "serde")]
impl TryFrom<Snapshot> for FailureContext {
    type Error = &'static str;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let code = snapshot
            .entries
            .last()
            .map(|e| e.code)
            .ok_or("failure context has no entries")?;
        Ok(Self {
            code,
            entries: snapshot.entries,
            source: None,
            #[cfg(feature = "backtrace")]
            backtrace: None,
        })
    }
}

// ── Constructors ──────────────────────────────────────────────────

impl FailureContext {
    /// Start a new context with its first entry, timestamped now.
    ///
    /// Any code is accepted, including non-failing ones.
    pub fn new(
        origin: impl Into<Cow<'static, str>>,
        line: u32,
        code: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self::at(Location::new(origin, line), code, message)
    }

    /// Start a new context at an existing [`Location`].
    ///
    /// Prefer the `failure!` / `raise!` macros, which fill in the location.
    pub fn at(location: Location, code: StatusCode, message: impl Into<String>) -> Self {
        Self::from_entry(TraceEntry::new(code, location, message))
    }

    /// Start a new context from a pre-built first entry.
    pub fn from_entry(entry: TraceEntry) -> Self {
        tracing::debug!(
            code = %entry.code,
            severity = %entry.code.severity(),
            origin = entry.location.origin(),
            line = entry.location.line(),
            detail = %entry.message,
            "failure raised"
        );

        crate::counters::record_raise(entry.code);

        #[allow(unused_mut)]
        let mut ctx = Self {
            code: entry.code,
            entries: vec![entry],
            source: None,
            #[cfg(feature = "backtrace")]
            backtrace: None,
        };

        #[cfg(feature = "backtrace")]
        ctx.capture_backtrace();

        ctx
    }

    /// Raise only for a failed code.
    ///
    /// `Ok(code)` for success and info codes, with no context created.
    /// Otherwise `Err` with a fresh context at `location`.
    ///
    /// ```
    /// use serror::{codes, FailureContext, Location};
    ///
    /// let here = Location::new("io.rs", 9);
    /// assert!(FailureContext::check(codes::INFO_NOT_FOUND, here.clone(), "lookup").is_ok());
    ///
    /// let err = FailureContext::check(codes::ERR_NOT_FOUND, here, "lookup").unwrap_err();
    /// assert_eq!(err.current_code(), codes::ERR_NOT_FOUND);
    /// ```
    pub fn check(
        code: StatusCode,
        location: Location,
        message: impl Into<String>,
    ) -> SResult<StatusCode> {
        if code.is_failed() {
            Err(Self::at(location, code, message))
        } else {
            Ok(code)
        }
    }

    /// Attach the foreign error that caused this failure.
    pub fn with_source<E>(mut self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(error));
        self
    }

    /// Keeps nothing when capture is disabled (`RUST_BACKTRACE` unset).
    #[cfg(feature = "backtrace")]
    fn capture_backtrace(&mut self) {
        use std::backtrace::{Backtrace, BacktraceStatus};

        if self.backtrace.is_none() {
            let bt = Backtrace::capture();
            if bt.status() == BacktraceStatus::Captured {
                self.backtrace = Some(bt.to_string());
            }
        }
    }
}

// ── Re-raising ────────────────────────────────────────────────────

impl FailureContext {
    /// Append a step and make `code` the current code.
    ///
    /// Earlier entries are left untouched.
    pub fn reraise(
        &mut self,
        origin: impl Into<Cow<'static, str>>,
        line: u32,
        code: StatusCode,
        message: impl Into<String>,
    ) {
        self.reraise_at(Location::new(origin, line), code, message);
    }

    /// [`reraise`](Self::reraise) at an existing [`Location`].
    pub fn reraise_at(&mut self, location: Location, code: StatusCode, message: impl Into<String>) {
        self.push(TraceEntry::new(code, location, message));
    }

    /// By-value re-raise, handy inside `map_err`.
    pub fn reraised(mut self, location: Location, code: StatusCode, message: impl Into<String>) -> Self {
        self.reraise_at(location, code, message);
        self
    }

    /// Append a pre-built entry.
    pub fn push(&mut self, entry: TraceEntry) {
        tracing::trace!(
            code = %entry.code,
            origin = entry.location.origin(),
            line = entry.location.line(),
            depth = (self.entries.len() + 1) as u64,
            "failure re-raised"
        );

        crate::counters::record_reraise(entry.code);

        self.code = entry.code;
        self.entries.push(entry);
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl FailureContext {
    /// The most recently assigned code.
    #[inline]
    pub fn current_code(&self) -> StatusCode {
        self.code
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Render every entry, oldest first, each line newline-terminated.
    pub fn trace(&self) -> String {
        use std::fmt::Write;

        let mut out = String::with_capacity(self.entries.len() * 64);
        for entry in &self.entries {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}", entry);
        }
        out
    }

    /// All entries, oldest first. Never empty.
    #[inline]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// The entry recorded at the original raise point.
    #[inline]
    pub fn first(&self) -> &TraceEntry {
        &self.entries[0]
    }

    /// The most recent entry.
    #[inline]
    pub fn last(&self) -> &TraceEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[cfg(feature = "backtrace")]
    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref()
    }

    /// Drop the trace and keep the code.
    #[inline]
    pub fn into_code(self) -> StatusCode {
        self.code
    }
}

impl From<FailureContext> for StatusCode {
    fn from(ctx: FailureContext) -> Self {
        ctx.code
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl Error for FailureContext {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ── Display / Debug ───────────────────────────────────────────────

impl fmt::Display for FailureContext {
    /// Same text as [`FailureContext::trace`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FailureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("FailureContext");
        d.field("code", &self.code);
        d.field("entries", &self.entries);

        if let Some(src) = &self.source {
            d.field("source", &src.to_string());
        }

        #[cfg(feature = "backtrace")]
        if self.backtrace.is_some() {
            d.field("backtrace", &"<captured>");
        }

        d.finish()
    }
}
