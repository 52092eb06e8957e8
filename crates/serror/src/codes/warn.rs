//! Warning band (`0x80000000 | ordinal`).

use crate::{Severity, StatusCode};

/// Something is still running that was expected to have stopped.
pub const WARN_STILL_RUNNING: StatusCode = StatusCode::new(Severity::Warning, 0x00);
