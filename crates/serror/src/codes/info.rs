//! Info band (`0x40000000 | ordinal`).
//!
//! Informational outcomes: the operation did not do anything, but nothing
//! went wrong either. Never treated as failures.

use crate::{Severity, StatusCode};

pub const INFO_ALREADY_INITIALIZED: StatusCode = StatusCode::new(Severity::Info, 0x00);
pub const INFO_NOT_INITIALIZED:     StatusCode = StatusCode::new(Severity::Info, 0x01);
pub const INFO_ALREADY_RUNNING:     StatusCode = StatusCode::new(Severity::Info, 0x02);
pub const INFO_NOT_RUNNING:         StatusCode = StatusCode::new(Severity::Info, 0x03);
pub const INFO_ALREADY_REQUESTED:   StatusCode = StatusCode::new(Severity::Info, 0x04);
pub const INFO_ALREADY_REGISTERED:  StatusCode = StatusCode::new(Severity::Info, 0x05);
pub const INFO_NOT_REGISTERED:      StatusCode = StatusCode::new(Severity::Info, 0x06);
pub const INFO_ALREADY_SET:         StatusCode = StatusCode::new(Severity::Info, 0x07);
pub const INFO_NOT_SET:             StatusCode = StatusCode::new(Severity::Info, 0x08);
pub const INFO_EXPIRED:             StatusCode = StatusCode::new(Severity::Info, 0x09);
pub const INFO_NOT_FOUND:           StatusCode = StatusCode::new(Severity::Info, 0x0A);
pub const INFO_ALREADY_EXISTS:      StatusCode = StatusCode::new(Severity::Info, 0x0B);
