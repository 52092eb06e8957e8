//! Severity-encoded 32-bit status codes.
//!
//! A `StatusCode` is an `i32` whose two highest bits select a [`Severity`]
//! and whose remaining 30 bits carry a sub-code:
//!
//! ```text
//! ┌──────────┬─────────────────────────────────────────┐
//! │  31..30  │                 29..0                   │
//! │ severity │               sub-code                  │
//! └──────────┴─────────────────────────────────────────┘
//!   00 success   01 info   10 warning   11 error
//! ```
//!
//! Warning and error both set bit 31, so "failed" is a sign check.

use core::fmt;
use core::str::FromStr;

/// Bits 31–30: the severity selector.
pub const SEVERITY_MASK: u32 = 0xC000_0000;

/// Bits 29–0: the sub-code.
pub const SUB_CODE_MASK: u32 = 0x3FFF_FFFF;

/// Severity band of a [`StatusCode`].
///
/// Discriminants are the band bit patterns, so the derived `Ord` is the
/// total order `Success < Info < Warning < Error`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Success = 0x0000_0000,
    Info    = 0x4000_0000,
    Warning = 0x8000_0000,
    Error   = 0xC000_0000,
}

impl Severity {
    /// All four bands, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Classify raw bits by masking with [`SEVERITY_MASK`].
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & SEVERITY_MASK {
            0x0000_0000 => Severity::Success,
            0x4000_0000 => Severity::Info,
            0x8000_0000 => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// The band's bit pattern (`0x00000000`, `0x40000000`, ...).
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Warning and error bands are failures; success and info are not.
    #[inline]
    pub const fn is_failed(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 32-bit status code: severity in bits 31–30, sub-code in bits 29–0.
///
/// Any `i32` is a valid code. Define your own with [`StatusCode::new`]:
///
/// ```
/// use serror::{Severity, StatusCode};
///
/// const ERR_QUEUE_FULL: StatusCode = StatusCode::new(Severity::Error, 0x1001);
///
/// assert_eq!(ERR_QUEUE_FULL.bits(), 0xC000_1001);
/// assert!(ERR_QUEUE_FULL.is_failed());
/// assert_eq!(ERR_QUEUE_FULL.to_string(), "0xC0001001");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct StatusCode(pub i32);

impl StatusCode {
    /// OR the low 30 bits of `sub_code` into the severity band.
    #[inline]
    pub const fn new(severity: Severity, sub_code: u32) -> Self {
        Self((severity.bits() | (sub_code & SUB_CODE_MASK)) as i32)
    }

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Reinterpret an unsigned bit pattern, e.g. `0xC0000006`.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits as i32)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn severity(self) -> Severity {
        Severity::from_bits(self.bits())
    }

    #[inline]
    pub const fn sub_code(self) -> u32 {
        self.bits() & SUB_CODE_MASK
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        self.bits() & SEVERITY_MASK == Severity::Success as u32
    }

    #[inline]
    pub const fn is_info(self) -> bool {
        self.bits() & SEVERITY_MASK == Severity::Info as u32
    }

    #[inline]
    pub const fn is_warning(self) -> bool {
        self.bits() & SEVERITY_MASK == Severity::Warning as u32
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        self.bits() & SEVERITY_MASK == Severity::Error as u32
    }

    /// True for warning and error codes. A plain sign check.
    #[inline]
    pub const fn is_failed(self) -> bool {
        self.0 < 0
    }

    /// True for success and info codes.
    #[inline]
    pub const fn is_succeeded(self) -> bool {
        self.0 >= 0
    }

    /// `Ok(self)` when succeeded, `Err(self)` when failed.
    ///
    /// Lets `?` carry a failed code out of a function returning
    /// `Result<_, StatusCode>`:
    ///
    /// ```
    /// use serror::{codes, StatusCode};
    ///
    /// fn step(code: StatusCode) -> Result<u32, StatusCode> {
    ///     code.into_result()?;
    ///     Ok(1)
    /// }
    ///
    /// assert_eq!(step(codes::INFO_ALREADY_SET), Ok(1));
    /// assert_eq!(step(codes::ERR_BUSY), Err(codes::ERR_BUSY));
    /// ```
    #[inline]
    pub const fn into_result(self) -> Result<StatusCode, StatusCode> {
        if self.is_failed() {
            Err(self)
        } else {
            Ok(self)
        }
    }

    /// Name of the code in the reserved generic table, if it is one.
    pub fn name(self) -> Option<&'static str> {
        crate::codes::name_of(self)
    }
}

impl From<i32> for StatusCode {
    #[inline]
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<StatusCode> for i32 {
    #[inline]
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl fmt::Display for StatusCode {
    /// `0x` followed by eight uppercase hex digits, as written in traces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.bits())
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}({})", name, self),
            None => write!(f, "StatusCode({})", self),
        }
    }
}

impl fmt::UpperHex for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.bits(), f)
    }
}

impl fmt::LowerHex for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.bits(), f)
    }
}

// ── Parsing ───────────────────────────────────────────────────────

/// Error returned when parsing a [`StatusCode`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStatusCodeError {
    #[error("empty status code")]
    Empty,
    #[error("invalid hex status code `{0}`")]
    InvalidHex(String),
    #[error("hex status code `{0}` is wider than 8 digits")]
    TooWide(String),
    #[error("invalid decimal status code `{0}`")]
    InvalidDecimal(String),
}

impl FromStr for StatusCode {
    type Err = ParseStatusCodeError;

    /// Accepts `0x`-prefixed hex (up to 8 digits, any case) or a signed
    /// decimal `i32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseStatusCodeError::Empty);
        }

        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseStatusCodeError::InvalidHex(s.to_string()));
            }
            if hex.len() > 8 {
                return Err(ParseStatusCodeError::TooWide(s.to_string()));
            }
            return u32::from_str_radix(hex, 16)
                .map(StatusCode::from_bits)
                .map_err(|_| ParseStatusCodeError::InvalidHex(s.to_string()));
        }

        s.parse::<i32>()
            .map(StatusCode)
            .map_err(|_| ParseStatusCodeError::InvalidDecimal(s.to_string()))
    }
}
