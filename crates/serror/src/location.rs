//! Source location tags attached to every trace entry.

use std::borrow::Cow;
use std::fmt;

/// Where a raise or re-raise happened: an origin identifier and a line.
///
/// The origin is opaque. It is usually a source file from `file!()`, but
/// any string works as long as it contains no `:`, which would make the
/// `origin:line` tag ambiguous to trace readers. That is not checked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Location {
    origin: Cow<'static, str>,
    line: u32,
}

impl Location {
    /// ```
    /// use serror::Location;
    ///
    /// let loc = Location::new("loader.rs", 42);
    /// assert_eq!(loc.to_string(), "loader.rs:42");
    /// ```
    pub fn new(origin: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self { origin: origin.into(), line }
    }

    /// Location of the caller of the function this is used in.
    ///
    /// Functions marked `#[track_caller]` report their own caller.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }

    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static std::panic::Location<'static>> for Location {
    fn from(loc: &'static std::panic::Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.origin, self.line)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({}:{})", self.origin, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_origins() {
        let a = Location::new("fileName", 10);
        let b = Location::new(String::from("fileName"), 10);
        assert_eq!(a, b);
        assert_eq!(a.origin(), "fileName");
        assert_eq!(a.line(), 10);
    }

    #[test]
    fn display_format() {
        assert_eq!(Location::new("fileName2", 30).to_string(), "fileName2:30");
        assert_eq!(format!("{:?}", Location::new("a.rs", 1)), "Location(a.rs:1)");
    }

    #[test]
    fn caller_points_here() {
        let line = line!() + 1;
        let loc = Location::caller();
        assert_eq!(loc.line(), line);
        assert!(loc.origin().ends_with("location.rs"), "{}", loc.origin());
    }

    #[test]
    fn here_macro_points_here() {
        let loc = crate::here!();
        assert_eq!(loc.line(), line!() - 1);
        assert_eq!(loc.origin(), file!());
    }

    #[test]
    fn track_caller_propagates() {
        #[track_caller]
        fn where_am_i() -> Location {
            Location::caller()
        }
        let line = line!() + 1;
        let loc = where_am_i();
        assert_eq!(loc.line(), line);
    }
}
