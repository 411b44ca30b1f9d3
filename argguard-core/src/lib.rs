//! Core precondition checks for ArgGuard
//!
//! Validates function arguments right at the function boundary and aborts
//! with a descriptive message when an argument is unacceptable.
//!
//! Key constraints:
//! - Every check is a pure function of its arguments
//! - No shared state, no I/O, safe from any thread
//! - Failure messages are built only on the failure path
//!
//! ```should_panic
//! fn monthly_salary(total: i64, num_months: i64) -> i64 {
//!     argguard_core::greater_than!(num_months, 0, "num_months must be positive, got {}", num_months);
//!     total / num_months
//! }
//!
//! // Panics: "num_months must be positive, got 0"
//! monthly_salary(50_000, 0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod checks;
pub mod errors;
pub mod traits;
pub mod value;

mod macros;

// Public API
pub use checks::{
    between, between_with, greater_than, greater_than_with, is_true, is_true_with, less_than,
    less_than_with, not_nil, not_nil_with,
};
#[cfg(feature = "pattern")]
pub use checks::{matches, matches_with};
pub use errors::{GuardError, GuardResult};
pub use traits::Nullable;
pub use value::ArgValue;

/// Support machinery for the exported macros. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
