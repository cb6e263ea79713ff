//! Public API for explicit operation outcomes
//!
//! This crate wraps risky work into [`Outcome`] values: [`try_fn`] runs a
//! synchronous call and captures a panic as an `Err`, [`try_async`] does the
//! same for a future. Consumers inspect the resulting value directly or
//! dispatch on it with [`when`] matchers.

#![warn(missing_docs)]

pub mod caught;
pub mod future;
pub mod sync;

// Re-export key types
pub use caught::CaughtPanic;
pub use future::try_async;
pub use sync::try_fn;

// Re-export the value types from core
pub use outcome_core::{when, Matcher, Outcome, Variant};
