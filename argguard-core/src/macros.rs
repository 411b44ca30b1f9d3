//! Format-style forms of the checks
//!
//! Each macro delegates to the matching `_with` function with a
//! `format!` closure, so format arguments are evaluated only when the
//! check fails.

/// Checks that a condition is true, panicking with the formatted
/// message otherwise.
///
/// ```should_panic
/// let count = 0;
/// argguard_core::is_true!(count > 0, "count must be positive, got {}", count);
/// ```
#[macro_export]
macro_rules! is_true {
    ($condition:expr, $($msg:tt)+) => {
        $crate::is_true_with($condition, || $crate::__private::format!($($msg)+))
    };
}

/// Checks that an argument is not the absent value for its type,
/// panicking with the formatted message otherwise.
///
/// ```should_panic
/// let address: Option<&str> = None;
/// argguard_core::not_nil!(&address, "address must be provided");
/// ```
#[macro_export]
macro_rules! not_nil {
    ($arg:expr, $($msg:tt)+) => {
        $crate::not_nil_with($arg, || $crate::__private::format!($($msg)+))
    };
}

/// Checks that the first operand is strictly greater than the second,
/// panicking with the formatted message otherwise.
#[macro_export]
macro_rules! greater_than {
    ($arg:expr, $other:expr, $($msg:tt)+) => {
        $crate::greater_than_with($arg, $other, || $crate::__private::format!($($msg)+))
    };
}

/// Checks that the first operand is strictly less than the second,
/// panicking with the formatted message otherwise.
#[macro_export]
macro_rules! less_than {
    ($arg:expr, $other:expr, $($msg:tt)+) => {
        $crate::less_than_with($arg, $other, || $crate::__private::format!($($msg)+))
    };
}

/// Checks that an operand lies strictly between two bounds, panicking
/// with the formatted message otherwise. Both bounds are excluded.
#[macro_export]
macro_rules! between {
    ($arg:expr, $from:expr, $to:expr, $($msg:tt)+) => {
        $crate::between_with($arg, $from, $to, || $crate::__private::format!($($msg)+))
    };
}

/// Checks that a string contains at least one match of a regular
/// expression, panicking with the formatted message otherwise.
///
/// ```should_panic
/// argguard_core::is_match!("abc", "[d-z]", "unexpected input: {}", "abc");
/// ```
#[cfg(feature = "pattern")]
#[macro_export]
macro_rules! is_match {
    ($arg:expr, $pattern:expr, $($msg:tt)+) => {
        $crate::matches_with($arg, $pattern, || $crate::__private::format!($($msg)+))
    };
}
