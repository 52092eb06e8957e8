//! One step of a failure trace and its one-line text form.
//!
//! ```text
//! <unix-seconds> 0x<8 hex digits> <origin>:<line> <message>
//! 1760000000 0xC0000006 config.rs:42 bad header
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::code::ParseStatusCodeError;
use crate::{Location, StatusCode};

/// Wall-clock seconds since the Unix epoch. A clock before 1970 reads as 0.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// A single raise or re-raise step.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Seconds since the Unix epoch when the step was recorded.
    pub timestamp: u64,
    pub code: StatusCode,
    pub location: Location,
    pub message: String,
}

impl TraceEntry {
    /// Record a step now.
    pub fn new(code: StatusCode, location: Location, message: impl Into<String>) -> Self {
        Self::at_time(unix_now(), code, location, message)
    }

    /// Record a step with an explicit timestamp.
    pub fn at_time(
        timestamp: u64,
        code: StatusCode,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            code,
            location,
            message: message.into(),
        }
    }

    /// Parse a whole trace, one entry per non-empty line.
    ///
    /// ```
    /// use serror::{codes, TraceEntry};
    ///
    /// let text = "1760000000 0xC0000006 config.rs:42 bad header\n\
    ///             1760000001 0xC0000009 main.rs:7 cannot start\n";
    /// let entries = TraceEntry::parse_trace(text).unwrap();
    /// assert_eq!(entries.len(), 2);
    /// assert_eq!(entries[1].code, codes::ERR_OPEN);
    /// assert_eq!(entries[0].location.origin(), "config.rs");
    /// ```
    pub fn parse_trace(text: &str) -> Result<Vec<TraceEntry>, ParseTraceError> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                line.parse::<TraceEntry>().map_err(|e| ParseTraceError::AtLine {
                    line: idx + 1,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

impl fmt::Display for TraceEntry {
    /// The trace line without its terminating newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.timestamp, self.code, self.location, self.message)
    }
}

// ── Parsing ───────────────────────────────────────────────────────

/// Error returned when a trace line does not follow the line format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTraceError {
    #[error("trace line ends before the {0} field")]
    Missing(&'static str),
    #[error("invalid timestamp `{0}`")]
    Timestamp(String),
    #[error("status code `{0}` is not `0x` followed by 8 hex digits")]
    CodeFormat(String),
    #[error("invalid status code")]
    Code(#[from] ParseStatusCodeError),
    #[error("invalid location `{0}`")]
    Location(String),
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseTraceError>,
    },
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for TraceEntry {
    type Err = ParseTraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('\n').unwrap_or(s);
        let s = s.strip_suffix('\r').unwrap_or(s);

        let (timestamp, rest) = s.split_once(' ').ok_or(ParseTraceError::Missing("code"))?;
        if !all_digits(timestamp) {
            return Err(ParseTraceError::Timestamp(timestamp.to_string()));
        }
        let timestamp = timestamp
            .parse::<u64>()
            .map_err(|_| ParseTraceError::Timestamp(timestamp.to_string()))?;

        let (code, rest) = rest.split_once(' ').ok_or(ParseTraceError::Missing("location"))?;
        if code.len() != 10 || !code.starts_with("0x") {
            return Err(ParseTraceError::CodeFormat(code.to_string()));
        }
        let code: StatusCode = code.parse()?;

        // The origin runs up to the first ':'; the line number up to the next space.
        let (origin, rest) = rest
            .split_once(':')
            .ok_or_else(|| ParseTraceError::Location(rest.to_string()))?;
        let (line, message) = rest.split_once(' ').unwrap_or((rest, ""));
        if origin.is_empty() || !all_digits(line) {
            return Err(ParseTraceError::Location(format!("{}:{}", origin, line)));
        }
        let line = line
            .parse::<u32>()
            .map_err(|_| ParseTraceError::Location(format!("{}:{}", origin, line)))?;

        Ok(TraceEntry::at_time(
            timestamp,
            code,
            Location::new(origin.to_string(), line),
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use regex::Regex;

    fn line_format() -> Regex {
        Regex::new(r"^\d{10} 0x[0-9A-F]{8} [^:]+:\d+ .*$").unwrap()
    }

    #[test]
    fn now_is_ten_digits() {
        let entry = TraceEntry::new(codes::ERR_BUSY, Location::new("worker.rs", 3), "queue full");
        assert!(line_format().is_match(&entry.to_string()), "{}", entry);
        assert_eq!(entry.timestamp.to_string().len(), 10);
    }

    #[test]
    fn display_layout() {
        let entry = TraceEntry::at_time(
            1_760_000_000,
            StatusCode(0x20),
            Location::new("fileName", 10),
            "message",
        );
        assert_eq!(entry.to_string(), "1760000000 0x00000020 fileName:10 message");
    }

    #[test]
    fn negative_code_renders_as_bits() {
        let entry = TraceEntry::at_time(1_760_000_000, codes::ERR_PARSE, Location::new("p.rs", 1), "x");
        assert_eq!(entry.to_string(), "1760000000 0xC0000006 p.rs:1 x");
    }

    #[test]
    fn parse_rendered_line() {
        let entry = TraceEntry::at_time(
            1_760_000_123,
            codes::ERR_OPEN,
            Location::new("storage.rs", 88),
            "open failed: path a/b c",
        );
        let parsed: TraceEntry = entry.to_string().parse().unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn parse_empty_message() {
        let parsed: TraceEntry = "1760000000 0x40000007 x.rs:5 ".parse().unwrap();
        assert_eq!(parsed.message, "");
        assert_eq!(parsed.code, codes::INFO_ALREADY_SET);

        let bare: TraceEntry = "1760000000 0x40000007 x.rs:5\n".parse().unwrap();
        assert_eq!(bare, parsed);
    }

    #[test]
    fn parse_rejects_bad_fields() {
        assert_eq!("1760000000".parse::<TraceEntry>(), Err(ParseTraceError::Missing("code")));
        assert!(matches!("17x 0x00000000 a:1 m".parse::<TraceEntry>(), Err(ParseTraceError::Timestamp(_))));
        assert!(matches!("1760000000 0x0000 a:1 m".parse::<TraceEntry>(), Err(ParseTraceError::CodeFormat(_))));
        assert!(matches!("1760000000 0x0000000G a:1 m".parse::<TraceEntry>(), Err(ParseTraceError::Code(_))));
        assert!(matches!("1760000000 0x00000000 nocolon m".parse::<TraceEntry>(), Err(ParseTraceError::Location(_))));
        assert!(matches!("1760000000 0x00000000 a:b m".parse::<TraceEntry>(), Err(ParseTraceError::Location(_))));
        assert!(matches!("1760000000 0x00000000 :1 m".parse::<TraceEntry>(), Err(ParseTraceError::Location(_))));
    }

    #[test]
    fn parse_trace_reports_line_number() {
        let text = "1760000000 0x00000020 fileName:10 message\nnot a trace line\n";
        match TraceEntry::parse_trace(text) {
            Err(ParseTraceError::AtLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected AtLine error, got {:?}", other),
        }
    }

    #[test]
    fn parse_trace_skips_blank_lines() {
        let text = "1760000000 0x00000020 fileName:10 message\n\n1760000001 0x00000040 fileName2:30 message 2\n";
        let entries = TraceEntry::parse_trace(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].message, "message 2");
    }
}
