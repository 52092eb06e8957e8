/// [`Location`](crate::Location) of the macro call site.
///
/// ```
/// let loc = serror::here!();
/// assert_eq!(loc.origin(), file!());
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::Location::new(file!(), line!())
    };
}

/// Message argument handling shared by the raising macros.
///
/// A string literal is run through `format!` (so inline `{name}` captures
/// work), a literal with arguments is formatted, anything else is passed
/// through as `impl Into<String>`.
#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    ($msg:literal $(,)?) => {
        ::std::format!($msg)
    };
    ($fmt:literal, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
    ($msg:expr $(,)?) => {
        $msg
    };
}

/// Build a [`FailureContext`](crate::FailureContext) at the call site.
///
/// # Forms
///
/// ```ignore
/// failure!(codes::ERR_PARSE, "unexpected token")
/// failure!(codes::ERR_PARSE, "unexpected token `{}` at {}", tok, pos)
/// failure!(codes::ERR_PARSE, message_string)
/// ```
///
/// The code may be a `StatusCode` or a raw `i32`.
#[macro_export]
macro_rules! failure {
    ($code:expr, $($msg:tt)+) => {
        $crate::FailureContext::at(
            $crate::here!(),
            $crate::StatusCode::from($code),
            $crate::__message!($($msg)+),
        )
    };
}

/// Create a context at the call site and return it as `Err`.
///
/// The enclosing function's error type only needs `From<FailureContext>`.
///
/// ```
/// use serror::{codes, raise, SResult};
///
/// fn open(path: &str) -> SResult<()> {
///     raise!(codes::ERR_OPEN, "cannot open {path}");
/// }
///
/// let err = open("a.toml").unwrap_err();
/// assert_eq!(err.current_code(), codes::ERR_OPEN);
/// assert!(err.trace().ends_with(" cannot open a.toml\n"));
/// ```
#[macro_export]
macro_rules! raise {
    ($code:expr, $($msg:tt)+) => {
        return ::core::result::Result::Err(::core::convert::From::from(
            $crate::failure!($code, $($msg)+),
        ))
    };
}

/// Append a step at the call site to an existing context and return it as
/// `Err`.
///
/// ```
/// use serror::{codes, raise, reraise, SResult};
///
/// fn parse() -> SResult<u32> {
///     raise!(codes::ERR_PARSE, "bad digit");
/// }
///
/// fn load() -> SResult<u32> {
///     match parse() {
///         Ok(v) => Ok(v),
///         Err(ctx) => reraise!(ctx, codes::ERR_OPEN, "loading settings"),
///     }
/// }
///
/// let err = load().unwrap_err();
/// assert_eq!(err.len(), 2);
/// assert_eq!(err.first().code, codes::ERR_PARSE);
/// assert_eq!(err.current_code(), codes::ERR_OPEN);
/// ```
#[macro_export]
macro_rules! reraise {
    ($ctx:expr, $code:expr, $($msg:tt)+) => {{
        let mut __ctx: $crate::FailureContext = $ctx;
        __ctx.reraise_at(
            $crate::here!(),
            $crate::StatusCode::from($code),
            $crate::__message!($($msg)+),
        );
        return ::core::result::Result::Err(::core::convert::From::from(__ctx));
    }};
}

/// Raise only if the code is failed (warning or error).
///
/// Success and info codes fall through without creating anything; the
/// message is not even evaluated.
///
/// ```
/// use serror::{codes, raise_if_failed, SResult, StatusCode};
///
/// fn step(code: StatusCode) -> SResult<&'static str> {
///     raise_if_failed!(code, "step failed");
///     Ok("done")
/// }
///
/// assert_eq!(step(codes::INFO_ALREADY_RUNNING).unwrap(), "done");
/// assert!(step(codes::WARN_STILL_RUNNING).is_err());
/// ```
#[macro_export]
macro_rules! raise_if_failed {
    ($code:expr, $($msg:tt)+) => {{
        let __code = $crate::StatusCode::from($code);
        if __code.is_failed() {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::FailureContext::at($crate::here!(), __code, $crate::__message!($($msg)+)),
            ));
        }
    }};
}

/// Return a failed code as-is from a function that returns codes.
///
/// The function's return type needs `From<StatusCode>` (`StatusCode` or
/// `i32`). For `Result<_, StatusCode>` use `code.into_result()?` instead.
///
/// ```
/// use serror::{codes, return_if_failed, StatusCode};
///
/// fn init(first: StatusCode, second: StatusCode) -> StatusCode {
///     return_if_failed!(first);
///     return_if_failed!(second);
///     codes::SUCCESS
/// }
///
/// assert_eq!(init(codes::SUCCESS, codes::ERR_BUSY), codes::ERR_BUSY);
/// assert_eq!(init(codes::INFO_ALREADY_SET, codes::SUCCESS), codes::SUCCESS);
/// ```
#[macro_export]
macro_rules! return_if_failed {
    ($code:expr $(,)?) => {{
        let __code = $crate::StatusCode::from($code);
        if __code.is_failed() {
            return ::core::convert::From::from(__code);
        }
    }};
}

/// `break` out of the enclosing (or labelled) loop on a failed code.
///
/// ```ignore
/// for job in jobs {
///     break_if_failed!(job.run());
/// }
/// 'outer: loop {
///     loop { break_if_failed!(step(), 'outer); }
/// }
/// ```
#[macro_export]
macro_rules! break_if_failed {
    ($code:expr $(,)?) => {
        if $crate::StatusCode::from($code).is_failed() {
            break;
        }
    };
    ($code:expr, $label:lifetime $(,)?) => {
        if $crate::StatusCode::from($code).is_failed() {
            break $label;
        }
    };
}

/// `continue` the enclosing (or labelled) loop on a failed code.
#[macro_export]
macro_rules! continue_if_failed {
    ($code:expr $(,)?) => {
        if $crate::StatusCode::from($code).is_failed() {
            continue;
        }
    };
    ($code:expr, $label:lifetime $(,)?) => {
        if $crate::StatusCode::from($code).is_failed() {
            continue $label;
        }
    };
}

/// Raise if a condition is false.
///
/// ```ignore
/// ensure!(port != 0, codes::ERR_INVALID_DATA, "port must be set");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr, $($msg:tt)+) => {
        if !$cond {
            $crate::raise!($code, $($msg)+);
        }
    };
}
