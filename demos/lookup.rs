//! Lookup Outcomes
//!
//! This example demonstrates returning outcomes from a lookup, checking the
//! state before unwrapping, and converting outcomes between types.
//!
//! Key concepts:
//! - Success and failure returned by value, never thrown
//! - Error messages composed from fragments with `err!`
//! - Explicit casts between outcome value types
//! - Narrowing to a payload-less status
//!
//! Run with: cargo run --example lookup

use outcome::{err, Outcome, UnitOutcome};

const INVENTORY: [(&str, i32); 3] = [("bolts", 120), ("nuts", 75), ("washers", 0)];

fn find_stock(item: &str) -> Outcome<i32> {
    match INVENTORY.iter().find(|(name, _)| *name == item) {
        Some((_, count)) => Outcome::success(*count),
        None => err!("not found ", item).into(),
    }
}

fn check_available(item: &str) -> UnitOutcome {
    let stock = find_stock(item);
    if stock.is_failure() {
        return stock.to_unit_outcome();
    }
    if *stock.unwrap_value() == 0 {
        return err!(item, " out of stock").into();
    }
    UnitOutcome::ok()
}

fn main() {
    println!("=== Lookup Outcome Example ===\n");

    for item in ["bolts", "screws"] {
        let stock = find_stock(item);
        if stock.is_success() {
            println!("{item}: {} in stock", stock.unwrap_value());
        } else {
            println!("{item}: lookup failed ({})", stock.unwrap_error());
        }
    }

    println!("\n--- Casting ---");
    let as_float = find_stock("nuts").cast::<f64>();
    println!("nuts as f64: {:?}", as_float);
    let missing = find_stock("rivets").cast::<f64>();
    println!("rivets as f64: {:?}", missing);

    println!("\n--- Availability ---");
    for item in ["bolts", "washers", "rivets"] {
        match check_available(item) {
            Outcome::Success(()) => println!("{item}: available"),
            Outcome::Failure(error) => println!("{item}: unavailable, {error}"),
        }
    }

    println!("\n--- Uninitialized ---");
    let pending: Outcome<i32> = Outcome::default();
    println!("default outcome: {}", pending.unwrap_error());
}
