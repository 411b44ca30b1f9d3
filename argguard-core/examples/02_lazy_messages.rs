//! Lazy failure messages: closures and format-style macros.
//!
//! Run with: cargo run --example 02_lazy_messages

use std::time::Duration;

use argguard_core::{greater_than_with, is_true, matches_with};

fn expensive_context() -> String {
    // Stands in for anything costly: a snapshot dump, a config render.
    println!("(building failure context...)");
    "full request context: ...".to_string()
}

fn handle_request(id: &str, budget: Duration, spent: Duration) {
    // The closure runs only when the check fails, so the happy path
    // never pays for the message.
    greater_than_with(budget, spent, || expensive_context());

    matches_with(id, "^[a-z0-9-]+$", || format!("malformed request id: {id}"));

    argguard_core::between!(
        spent.as_millis(),
        0,
        60_000,
        "request {} spent {:?}, over the hard cap",
        id,
        spent
    );

    println!("request {id} accepted");
}

fn main() {
    handle_request("req-001", Duration::from_secs(2), Duration::from_millis(350));

    // The fixed-message forms stay literal, braces included.
    is_true(true, "a fixed message is never treated as a {template}");

    println!("done");
}
