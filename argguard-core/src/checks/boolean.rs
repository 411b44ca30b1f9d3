//! Boolean check and the core assertion primitive
//!
//! Every other check reduces its inputs to a boolean and lands here.

use core::fmt::Display;

/// Checks that `condition` is true, panicking with `msg` otherwise.
pub fn is_true(condition: bool, msg: &str) {
    is_true_with(condition, || msg);
}

/// Checks that `condition` is true, panicking with the lazily built
/// message otherwise.
///
/// The closure runs only on the failure path; a passing check never
/// formats anything.
pub fn is_true_with<M, F>(condition: bool, msg: F)
where
    M: Display,
    F: FnOnce() -> M,
{
    if !condition {
        panic!("{}", msg());
    }
}
