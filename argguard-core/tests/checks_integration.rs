//! Integration tests for the check surface
//!
//! Exercises every check pair end to end, including:
//! - The abort payload carried by a failed check
//! - Misuse aborts staying distinct from violation aborts
//! - Lazy message construction on the success path

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use argguard_core::{
    between, between_with, greater_than, greater_than_with, is_true, is_true_with, less_than,
    matches, matches_with, not_nil, not_nil_with,
};

/// Run a closure that must panic and hand back the rendered payload.
fn panic_message(check: impl FnOnce()) -> String {
    let payload = catch_unwind(AssertUnwindSafe(check)).expect_err("panic expected");
    if let Some(owned) = payload.downcast_ref::<String>() {
        owned.clone()
    } else if let Some(fixed) = payload.downcast_ref::<&str>() {
        (*fixed).to_string()
    } else {
        panic!("unexpected panic payload type");
    }
}

#[test]
fn passing_checks_return_normally() {
    not_nil(&Some("address"), "msg");
    is_true(true, "msg");
    greater_than(100, 10, "msg");
    less_than(10, 100, "msg");
    between(50, 10, 100, "msg");
    matches("abc", "[a-z]", "msg");
}

#[test]
fn failing_checks_carry_the_caller_message() {
    let msg = panic_message(|| greater_than(10, 100, "num_months must be positive"));
    assert_eq!(msg, "num_months must be positive");

    let msg = panic_message(|| between(1, 10, 100, "value out of range"));
    assert_eq!(msg, "value out of range");

    let msg = panic_message(|| matches("abc", "[d-z]", "unexpected input"));
    assert_eq!(msg, "unexpected input");
}

#[test]
fn empty_message_aborts_with_empty_payload() {
    let msg = panic_message(|| is_true(false, ""));
    assert_eq!(msg, "");
}

#[test]
fn fixed_messages_are_taken_literally() {
    // Braces in a fixed message are text, never format directives.
    let msg = panic_message(|| is_true(false, "50% of {cases}"));
    assert_eq!(msg, "50% of {cases}");
}

#[test]
fn coercion_abort_is_distinct_from_a_failed_comparison() {
    let msg = panic_message(|| greater_than("abc", 1, "caller message"));
    assert_eq!(msg, "cannot convert `str` to f64");
    assert!(!msg.contains("caller message"));
}

#[test]
fn pattern_abort_is_distinct_from_a_failed_match() {
    let msg = panic_message(|| matches("abc", "[d-", "caller message"));
    assert!(msg.starts_with("invalid pattern `[d-`"));
    assert!(!msg.contains("caller message"));
}

#[test]
fn messages_are_built_only_on_failure() {
    let builds = AtomicUsize::new(0);
    let probe = || {
        builds.fetch_add(1, Ordering::Relaxed);
        "probed message"
    };

    not_nil_with(&Some(1), probe);
    is_true_with(true, probe);
    greater_than_with(2, 1, probe);
    between_with(5, 1, 10, probe);
    matches_with("abc", "[a-z]", probe);
    assert_eq!(builds.load(Ordering::Relaxed), 0);

    let msg = panic_message(|| is_true_with(false, probe));
    assert_eq!(msg, "probed message");
    assert_eq!(builds.load(Ordering::Relaxed), 1);
}

#[test]
fn macro_messages_format_on_failure_only() {
    let builds = AtomicUsize::new(0);
    let count = |value: i64| {
        builds.fetch_add(1, Ordering::Relaxed);
        value
    };

    argguard_core::greater_than!(100, 10, "got {}", count(100));
    assert_eq!(builds.load(Ordering::Relaxed), 0);

    let msg = panic_message(|| argguard_core::greater_than!(10, 100, "got {}", count(10)));
    assert_eq!(msg, "got 10");
    assert_eq!(builds.load(Ordering::Relaxed), 1);
}

#[test]
fn boundary_values_fail_the_open_range() {
    assert_eq!(panic_message(|| between(10, 10, 100, "msg")), "msg");
    assert_eq!(panic_message(|| between(100, 10, 100, "msg")), "msg");
    between(11, 10, 100, "msg");
    between(99, 10, 100, "msg");
}

#[test]
fn heterogeneous_operands_share_a_comparison_domain() {
    use std::time::Duration;

    greater_than(Duration::from_secs(90), 60u8, "deadline too tight");
    less_than(0.5f32, 1i128, "msg");
    between(Duration::from_millis(500), 0, 1, "msg");
}
