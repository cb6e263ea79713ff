//! Tagged outcome values for operations that may fail
//!
//! This crate provides the [`Outcome`] value type, its inspection and
//! combinator surface, and the [`Matcher`]/[`when`] facility for
//! first-match-wins dispatch over an outcome's variant.

#![warn(missing_docs)]

pub mod matcher;
pub mod outcome;

// Re-export key types
pub use matcher::{when, Matcher};
pub use outcome::{Outcome, Variant};
