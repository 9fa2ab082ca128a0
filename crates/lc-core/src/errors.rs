//! Error types for leavecal.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single [`Error`] enum below.  The `ensure!` and `fail!` macros
//! are the short forms used for precondition checks.

use thiserror::Error;

/// The top-level error type used throughout leavecal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A date could not be constructed (out of range, bad month, ...).
    #[error("date error: {0}")]
    Date(String),

    /// A textual value could not be parsed.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What was being parsed (e.g. `"weekday"`).
        what: &'static str,
        /// The offending input.
        input: String,
    },

    /// Precondition violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration is missing or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// A JSON payload could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading a file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl Error {
    /// Shorthand for [`Error::Parse`].
    pub fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Error::Parse {
            what,
            input: input.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout leavecal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lc_core::ensure;
/// fn positive(x: i32) -> lc_core::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Config(...))` immediately.
///
/// # Example
/// ```
/// use lc_core::fail;
/// fn always_err() -> lc_core::Result<()> {
///     fail!("no working days configured");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Config(format!($($msg)*)))
    };
}
