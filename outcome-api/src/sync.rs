//! Synchronous adapter: run a call, capture a panic as an `Err`

use std::panic::{self, AssertUnwindSafe};

use outcome_core::Outcome;

use crate::caught::CaughtPanic;

/// Runs `f` once on the caller's thread and wraps what happens.
///
/// A normal return becomes `Ok`; a panic's payload is captured verbatim as
/// `Err`. The adapter itself never panics, and `f`'s side effects happen
/// exactly once either way. Arguments travel by closure capture:
///
/// ```
/// use outcome_api::try_fn;
///
/// fn join(a: u8, b: u8, c: u8) -> Vec<u8> {
///     vec![a, b, c]
/// }
///
/// let outcome = try_fn(|| join(1, 2, 3));
/// assert_eq!(outcome.unwrap(), vec![1, 2, 3]);
/// ```
pub fn try_fn<T>(f: impl FnOnce() -> T) -> Outcome<T, CaughtPanic> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            let caught = CaughtPanic::new(payload);
            log::debug!("try_fn captured a panic: {}", caught);
            Outcome::Err(caught)
        }
    }
}
