//! Basic usage of the outcome types and adapters

use outcome_api::{try_async, try_fn, when, CaughtPanic, Outcome, Variant};

fn parse_port(raw: &str) -> u16 {
    raw.parse().unwrap()
}

fn main() {
    // Method 1: wrap a risky synchronous call
    println!("=== Method 1: try_fn ===");
    let good = try_fn(|| parse_port("8080"));
    println!("parsed: {:?}", good.ok());

    let bad = try_fn(|| parse_port("not-a-port"));

    // Method 2: dispatch with matchers
    println!("\n=== Method 2: match_with ===");
    let message = bad.match_with([
        when(Variant::Ok, |o: &Outcome<u16, CaughtPanic>| {
            format!("listening on {}", o.ok().unwrap())
        }),
        when(Variant::Err, |o| {
            format!("bad port ({})", o.err().unwrap())
        }),
    ]);
    println!("{}", message);
    println!("fell back to {}", bad.unwrap_or(80));

    // Method 3: wrap a pending asynchronous computation
    println!("\n=== Method 3: try_async ===");
    let outcome = futures::executor::block_on(try_async(async { "OK" }));
    println!("settled: {:?}", outcome.ok());
}
