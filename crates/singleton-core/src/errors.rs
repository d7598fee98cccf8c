//! Error types for the singleton workspace.
//!
//! Nothing about acquiring the singleton or bumping its counter can fail.
//! The only fallible edges are the scripted demonstration (its output sink
//! and its final consistency check), so the enum stays small. The
//! `ensure!` and `ensure_post!` macros build its variants.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (raised by [`ensure_post!`](crate::ensure_post)).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Writing to the output sink failed.
    #[error("output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Output(err.to_string())
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use singleton_core::{ensure, errors::Error};
/// fn at_least_one(n: u64) -> singleton_core::errors::Result<u64> {
///     ensure!(n >= 1, "need at least one iteration, got {n}");
///     Ok(n)
/// }
/// assert!(at_least_one(3).is_ok());
/// assert!(matches!(at_least_one(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use singleton_core::{ensure_post, errors::Error};
/// fn doubled(x: u64) -> singleton_core::errors::Result<u64> {
///     let result = x * 2;
///     ensure_post!(result % 2 == 0, "result must be even, got {result}");
///     Ok(result)
/// }
/// assert_eq!(doubled(4), Ok(8));
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_becomes_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert_eq!(err, Error::Output("pipe closed".to_string()));
        assert_eq!(err.to_string(), "output error: pipe closed");
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Precondition("counter is 3".into()).to_string(),
            "precondition not satisfied: counter is 3"
        );
        assert_eq!(
            Error::Postcondition("counter is 9".into()).to_string(),
            "postcondition not satisfied: counter is 9"
        );
    }
}
