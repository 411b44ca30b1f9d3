//! Presence check

use core::fmt::Display;

use super::boolean::is_true_with;
use crate::traits::Nullable;

/// Checks that `arg` is not the absent value for its type, panicking
/// with `msg` otherwise.
pub fn not_nil<T>(arg: &T, msg: &str)
where
    T: Nullable + ?Sized,
{
    not_nil_with(arg, || msg);
}

/// Checks that `arg` is not the absent value for its type, panicking
/// with the lazily built message otherwise.
pub fn not_nil_with<T, M, F>(arg: &T, msg: F)
where
    T: Nullable + ?Sized,
    M: Display,
    F: FnOnce() -> M,
{
    is_true_with(!arg.is_nil(), msg);
}
