//! Mapping from `std::io::ErrorKind` onto the reserved error band.

use std::io;

use super::{
    ERR_ALLOCATION, ERR_ALREADY_EXISTS, ERR_BUSY, ERR_INVALID_DATA, ERR_NOT_ALLOWED, ERR_NOT_FOUND,
    ERR_PARSE, ERR_UNKNOWN,
};
use crate::StatusCode;

/// Closest reserved error code for an I/O failure kind.
///
/// ```
/// use std::io::ErrorKind;
/// use serror::codes;
///
/// assert_eq!(codes::from_io_kind(ErrorKind::NotFound), codes::ERR_NOT_FOUND);
/// assert_eq!(codes::from_io_kind(ErrorKind::TimedOut), codes::ERR_UNKNOWN);
/// ```
pub fn from_io_kind(kind: io::ErrorKind) -> StatusCode {
    match kind {
        io::ErrorKind::NotFound         => ERR_NOT_FOUND,
        io::ErrorKind::AlreadyExists    => ERR_ALREADY_EXISTS,
        io::ErrorKind::PermissionDenied => ERR_NOT_ALLOWED,
        io::ErrorKind::InvalidInput     => ERR_INVALID_DATA,
        io::ErrorKind::InvalidData      => ERR_INVALID_DATA,
        io::ErrorKind::UnexpectedEof    => ERR_PARSE,
        io::ErrorKind::OutOfMemory      => ERR_ALLOCATION,
        io::ErrorKind::WouldBlock       => ERR_BUSY,
        io::ErrorKind::AddrInUse        => ERR_BUSY,
        _                               => ERR_UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn every_kind_lands_in_error_band() {
        let kinds = [
            io::ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::ConnectionReset,
            io::ErrorKind::WouldBlock,
            io::ErrorKind::InvalidData,
            io::ErrorKind::UnexpectedEof,
            io::ErrorKind::Other,
        ];
        for kind in kinds {
            assert!(from_io_kind(kind).is_error(), "{:?}", kind);
        }
    }

    #[test]
    fn known_kinds() {
        assert_eq!(from_io_kind(io::ErrorKind::AlreadyExists), ERR_ALREADY_EXISTS);
        assert_eq!(from_io_kind(io::ErrorKind::PermissionDenied), ERR_NOT_ALLOWED);
        assert_eq!(from_io_kind(io::ErrorKind::OutOfMemory), ERR_ALLOCATION);
        assert_eq!(from_io_kind(io::ErrorKind::ConnectionRefused), ERR_UNKNOWN);
    }
}
