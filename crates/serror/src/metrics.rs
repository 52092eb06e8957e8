//! Process-wide failure counters.
//!
//! Enabled with `feature = "metrics"`. Every raise bumps the counter of
//! the raised code's severity, every re-raise bumps one shared counter.
//! Each bump is one `fetch_add(1, Relaxed)`.
//!
//! ```text
//! FailureContext::from_entry        FailureContext::push
//!       │                                 │
//!       ▼  slot(severity)                 ▼
//! RAISED[0..4].fetch_add           RERAISED.fetch_add
//!       │                                 │
//!       └──────────────┬──────────────────┘
//!                      ▼  scrape / shutdown dump
//!        dump_string() / dump_prometheus()
//! ```

use core::sync::atomic::{AtomicU64, Ordering};
use std::fmt::Write;

use crate::{Severity, StatusCode};

static RAISED: [AtomicU64; 4] = {
    const ZERO: AtomicU64 = AtomicU64::new(0);
    [ZERO; 4]
};

static RERAISED: AtomicU64 = AtomicU64::new(0);

#[inline(always)]
fn slot(severity: Severity) -> usize {
    (severity.bits() >> 30) as usize
}

/// Count a new context raised with `code`.
#[inline(always)]
pub fn record_raise(code: StatusCode) {
    RAISED[slot(code.severity())].fetch_add(1, Ordering::Relaxed);
}

/// Count one re-raise step. The code is accepted for future per-band splits
/// but currently only the total is kept.
#[inline(always)]
pub fn record_reraise(_code: StatusCode) {
    RERAISED.fetch_add(1, Ordering::Relaxed);
}

/// Contexts raised so far with a code of `severity`.
#[inline]
pub fn raised(severity: Severity) -> u64 {
    RAISED[slot(severity)].load(Ordering::Relaxed)
}

/// Re-raise steps recorded so far.
#[inline]
pub fn reraised() -> u64 {
    RERAISED.load(Ordering::Relaxed)
}

/// Reset every counter.
pub fn reset_all() {
    for counter in RAISED.iter() {
        counter.store(0, Ordering::Relaxed);
    }
    RERAISED.store(0, Ordering::Relaxed);
}

/// Point-in-time copy of all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Indexed like [`Severity::ALL`].
    pub raised: [u64; 4],
    pub reraised: u64,
}

impl Snapshot {
    pub fn raised(&self, severity: Severity) -> u64 {
        self.raised[slot(severity)]
    }

    /// Raises in the warning and error bands.
    pub fn failed(&self) -> u64 {
        self.raised(Severity::Warning) + self.raised(Severity::Error)
    }
}

pub fn snapshot() -> Snapshot {
    let mut snap = Snapshot {
        reraised: reraised(),
        ..Snapshot::default()
    };
    for severity in Severity::ALL {
        snap.raised[slot(severity)] = raised(severity);
    }
    snap
}

// ── Dump ──────────────────────────────────────────────────────────

/// Human-readable counter table.
pub fn dump_string() -> String {
    let snap = snapshot();
    let mut out = String::new();
    for severity in Severity::ALL {
        let _ = writeln!(out, "raised   {:<8} {}", severity.name(), snap.raised(severity));
    }
    let _ = writeln!(out, "reraised {:<8} {}", "", snap.reraised);
    out
}

/// Counters in Prometheus text exposition format.
pub fn dump_prometheus() -> String {
    let snap = snapshot();
    let mut out = String::from(
        "# HELP serror_raised_total Failure contexts raised, by severity of the raised code\n\
         # TYPE serror_raised_total counter\n",
    );
    for severity in Severity::ALL {
        let _ = writeln!(
            out,
            "serror_raised_total{{severity=\"{}\"}} {}",
            severity.name(),
            snap.raised(severity)
        );
    }
    out.push_str(
        "# HELP serror_reraised_total Re-raise steps appended to failure contexts\n\
         # TYPE serror_reraised_total counter\n",
    );
    let _ = writeln!(out, "serror_reraised_total {}", snap.reraised);
    out
}
