//! Error band (`0xC0000000 | ordinal`).

use crate::{Severity, StatusCode};

// ── Resources / lifecycle ─────────────────────────────────────────

pub const ERR_ALLOCATION:      StatusCode = StatusCode::new(Severity::Error, 0x00);
pub const ERR_NOT_INITIALIZED: StatusCode = StatusCode::new(Severity::Error, 0x01);
pub const ERR_NOT_REQUESTED:   StatusCode = StatusCode::new(Severity::Error, 0x02);

// ── Lookup ────────────────────────────────────────────────────────

pub const ERR_NOT_FOUND:       StatusCode = StatusCode::new(Severity::Error, 0x03);
pub const ERR_DOES_NOT_EXIST:  StatusCode = StatusCode::new(Severity::Error, 0x04);
pub const ERR_ALREADY_EXISTS:  StatusCode = StatusCode::new(Severity::Error, 0x05);

// ── Data ──────────────────────────────────────────────────────────

pub const ERR_PARSE:           StatusCode = StatusCode::new(Severity::Error, 0x06);
pub const ERR_UNKNOWN:         StatusCode = StatusCode::new(Severity::Error, 0x07);
pub const ERR_INVALID_DATA:    StatusCode = StatusCode::new(Severity::Error, 0x08);

// ── Operations ────────────────────────────────────────────────────

pub const ERR_OPEN:            StatusCode = StatusCode::new(Severity::Error, 0x09);
pub const ERR_CLOSE:           StatusCode = StatusCode::new(Severity::Error, 0x0A);
pub const ERR_EXECUTE:         StatusCode = StatusCode::new(Severity::Error, 0x0B);
pub const ERR_BUSY:            StatusCode = StatusCode::new(Severity::Error, 0x0C);
pub const ERR_NOT_ALLOWED:     StatusCode = StatusCode::new(Severity::Error, 0x0D);
pub const ERR_STILL_RUNNING:   StatusCode = StatusCode::new(Severity::Error, 0x0E);
