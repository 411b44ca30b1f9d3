//! Open-range membership check

use core::fmt::Display;

use super::{boolean::is_true_with, coerced};
use crate::value::ArgValue;

/// Checks that `arg` lies strictly between `from` and `to`, panicking
/// with `msg` otherwise.
///
/// The range is open on both ends: a value equal to either bound fails.
pub fn between<'a, A, L, H>(arg: A, from: L, to: H, msg: &str)
where
    A: Into<ArgValue<'a>>,
    L: Into<ArgValue<'a>>,
    H: Into<ArgValue<'a>>,
{
    between_with(arg, from, to, || msg);
}

/// Checks that `arg` lies strictly between `from` and `to`, panicking
/// with the lazily built message otherwise.
///
/// The range is open on both ends: a value equal to either bound fails.
pub fn between_with<'a, A, L, H, M, F>(arg: A, from: L, to: H, msg: F)
where
    A: Into<ArgValue<'a>>,
    L: Into<ArgValue<'a>>,
    H: Into<ArgValue<'a>>,
    M: Display,
    F: FnOnce() -> M,
{
    let arg = coerced(arg.into());
    let from = coerced(from.into());
    let to = coerced(to.into());
    is_true_with(arg > from && arg < to, msg);
}
