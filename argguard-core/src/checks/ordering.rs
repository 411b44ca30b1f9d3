//! Strict ordering checks
//!
//! Operands may be of independently chosen numeric kinds; both sides are
//! coerced into `f64` before comparison. IEEE-754 semantics apply as-is,
//! so a NaN operand never orders above or below anything and the check
//! fails with the caller's message.

use core::fmt::Display;

use super::{boolean::is_true_with, coerced};
use crate::value::ArgValue;

/// Checks that `arg` is strictly greater than `other`, panicking with
/// `msg` otherwise. The comparison is made in `f64`.
pub fn greater_than<'a, A, B>(arg: A, other: B, msg: &str)
where
    A: Into<ArgValue<'a>>,
    B: Into<ArgValue<'a>>,
{
    greater_than_with(arg, other, || msg);
}

/// Checks that `arg` is strictly greater than `other`, panicking with
/// the lazily built message otherwise. The comparison is made in `f64`.
pub fn greater_than_with<'a, A, B, M, F>(arg: A, other: B, msg: F)
where
    A: Into<ArgValue<'a>>,
    B: Into<ArgValue<'a>>,
    M: Display,
    F: FnOnce() -> M,
{
    let arg = coerced(arg.into());
    let other = coerced(other.into());
    is_true_with(arg > other, msg);
}

/// Checks that `arg` is strictly less than `other`, panicking with
/// `msg` otherwise. The comparison is made in `f64`.
pub fn less_than<'a, A, B>(arg: A, other: B, msg: &str)
where
    A: Into<ArgValue<'a>>,
    B: Into<ArgValue<'a>>,
{
    less_than_with(arg, other, || msg);
}

/// Checks that `arg` is strictly less than `other`, panicking with the
/// lazily built message otherwise. The comparison is made in `f64`.
pub fn less_than_with<'a, A, B, M, F>(arg: A, other: B, msg: F)
where
    A: Into<ArgValue<'a>>,
    B: Into<ArgValue<'a>>,
    M: Display,
    F: FnOnce() -> M,
{
    let arg = coerced(arg.into());
    let other = coerced(other.into());
    is_true_with(arg < other, msg);
}
