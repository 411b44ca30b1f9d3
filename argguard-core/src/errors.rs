//! Error Types for Misused Checks
//!
//! ## Design Philosophy
//!
//! A failed precondition is not an error value in this crate - it is an
//! abort carrying the caller's message. The types here cover the *other*
//! failure kind: the check itself was fed something it cannot work with.
//! That is a programming error at the call site, and its message describes
//! the misuse (the offending type, the broken pattern) instead of the
//! caller's business message.
//!
//! Keeping the two kinds apart matters for anyone catching the abort in a
//! test harness: a coercion failure on `greater_than` means the call is
//! wrong, not that the compared values were out of order.
//!
//! ## Error Categories
//!
//! ### Coercion Misuse
//! - `NotCoercible`: an operand kind that has no 64-bit float representation
//!   was passed to a numeric comparison
//!
//! ### Pattern Misuse
//! - `InvalidPattern`: the regular expression handed to a match check does
//!   not compile
//!
//! ## Probing Without Panics
//!
//! [`ArgValue::to_f64`](crate::value::ArgValue::to_f64) is public and
//! returns `GuardResult`, so coercion can be inspected as a plain `Result`:
//!
//! ```
//! use argguard_core::{ArgValue, GuardError};
//!
//! let err = ArgValue::from("not a number").to_f64().unwrap_err();
//! assert!(matches!(err, GuardError::NotCoercible { type_name: "str" }));
//! ```

use thiserror_no_std::Error;

/// Result type for the fallible internals of the checks
pub type GuardResult<T> = Result<T, GuardError>;

/// A check was fed something it cannot work with
#[derive(Error, Debug, Clone)]
pub enum GuardError {
    /// Operand kind has no 64-bit float representation
    #[error("cannot convert `{type_name}` to f64")]
    NotCoercible {
        /// Name of the offending operand kind
        type_name: &'static str,
    },

    /// Regular expression handed to a match check does not compile
    #[cfg(feature = "pattern")]
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern text as supplied by the caller
        pattern: String,
        /// Compile error reported by the regex engine
        reason: regex::Error,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for GuardError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotCoercible { type_name } => {
                defmt::write!(fmt, "cannot convert `{}` to f64", type_name)
            }
            #[cfg(feature = "pattern")]
            Self::InvalidPattern { pattern, .. } => {
                defmt::write!(fmt, "invalid pattern `{}`", pattern.as_str())
            }
        }
    }
}
