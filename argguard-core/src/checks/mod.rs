//! Precondition Checks
//!
//! ## Overview
//!
//! One function pair per precondition. Each check computes a boolean
//! condition from its inputs and feeds it to the core primitive
//! ([`is_true_with`]): if the condition holds the call returns with no
//! observable effect, otherwise it panics with the caller's message.
//!
//! ## Check Families
//!
//! ### Presence
//! [`not_nil`] - the argument must not be the absent value for its type
//! (`None`, a null raw pointer). Present-but-empty values pass.
//!
//! ### Boolean
//! [`is_true`] - the caller has already computed the condition. This is
//! the escape hatch for predicates the built-in comparisons do not cover,
//! and the primitive everything else is built on.
//!
//! ### Numeric Ordering
//! [`greater_than`], [`less_than`], [`between`] - operands of
//! independently chosen numeric kinds, compared as `f64` after coercion
//! through [`ArgValue::to_f64`](crate::value::ArgValue::to_f64).
//! `between` is strictly exclusive on both ends: a value equal to either
//! bound fails. Callers needing inclusive bounds must widen them.
//!
//! ### Pattern
//! [`matches`] (feature `pattern`) - a string must contain at least one
//! match of a regular expression. Unanchored unless the pattern anchors
//! itself.
//!
//! ## Message Forms
//!
//! Every check comes as a pair: a fixed-message form taking `&str`, and a
//! `_with` form taking a closure built only on the failure path. The
//! fixed form is a thin delegate to the `_with` form, so the check logic
//! exists once. Format-style call sites use the exported macros instead:
//!
//! ```should_panic
//! let port = 70_000u32;
//! argguard_core::between!(port, 0, 65_536, "port out of range: {}", port);
//! ```
//!
//! ## Failure Kinds
//!
//! A false condition panics with the caller's message. Feeding a check
//! something it cannot work with - a text operand in a comparison, a
//! pattern that does not compile - panics with the
//! [`GuardError`](crate::errors::GuardError) rendering instead. The two
//! never mix: a coercion abort bypasses the caller's message entirely.

use crate::value::ArgValue;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

mod boolean;
mod nil;
mod ordering;
#[cfg(feature = "pattern")]
mod pattern;
mod range;

pub use boolean::{is_true, is_true_with};
pub use nil::{not_nil, not_nil_with};
pub use ordering::{greater_than, greater_than_with, less_than, less_than_with};
#[cfg(feature = "pattern")]
pub use pattern::{matches, matches_with};
pub use range::{between, between_with};

/// Coerce an operand or abort with the misuse message.
///
/// The abort deliberately carries the coercion error, not the caller's
/// message: a non-coercible operand is a broken call site, not a failed
/// comparison.
pub(crate) fn coerced(value: ArgValue<'_>) -> f64 {
    match value.to_f64() {
        Ok(as_f64) => as_f64,
        Err(err) => {
            log_debug!("operand coercion failed: {}", err);
            panic!("{}", err)
        }
    }
}
