//! Regular-expression match check

use core::fmt::Display;

use regex::Regex;

use super::boolean::is_true_with;
use crate::errors::GuardError;

/// Checks that `arg` contains at least one match of the regular
/// expression `pattern`, panicking with `msg` otherwise.
///
/// The match is unanchored; anchor with `^`/`$` inside the pattern for a
/// full-string match.
pub fn matches(arg: &str, pattern: &str, msg: &str) {
    matches_with(arg, pattern, || msg);
}

/// Checks that `arg` contains at least one match of the regular
/// expression `pattern`, panicking with the lazily built message
/// otherwise.
///
/// A pattern that does not compile panics with the
/// [`GuardError::InvalidPattern`] rendering instead of `msg`.
pub fn matches_with<M, F>(arg: &str, pattern: &str, msg: F)
where
    M: Display,
    F: FnOnce() -> M,
{
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(reason) => {
            let err = GuardError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason,
            };
            log_debug!("pattern compilation failed: {}", err);
            panic!("{}", err)
        }
    };
    is_true_with(re.is_match(arg), msg);
}
