//! Basic argument checks at a function boundary.
//!
//! Run with: cargo run --example 01_basic_checks

use std::panic::catch_unwind;

use argguard_core::{between, greater_than, not_nil};

fn monthly_salary(total: i64, num_months: i64) -> i64 {
    greater_than(num_months, 0, "num_months must be positive and not zero");
    total / num_months
}

fn register_guest(name: Option<&str>, age: u32) -> String {
    not_nil(&name, "name must be provided");
    between(age, 17, 120, "guests must be adults");
    format!("registered {} ({})", name.unwrap_or_default(), age)
}

fn main() {
    println!("50000 over 12 months: {} per month", monthly_salary(50_000, 12));
    println!("{}", register_guest(Some("Ada"), 36));

    // A violated precondition aborts the call with the check's message.
    let failure = catch_unwind(|| monthly_salary(50_000, 0));
    match failure {
        Err(payload) => {
            let msg = payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_default();
            println!("rejected as expected: {msg}");
        }
        Ok(_) => unreachable!("zero months must not be accepted"),
    }
}
