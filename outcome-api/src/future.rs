//! Asynchronous adapter: await a future, capture a panic as an `Err`

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use outcome_core::Outcome;

use crate::caught::CaughtPanic;

/// Awaits `future` and wraps how it settles.
///
/// Resolution becomes `Ok`; a panic during polling is captured verbatim as
/// `Err` and never re-raised. The only suspension point is the wrapped
/// future itself: no timeout, no extra spawned work, no cancellation of our
/// own. The future this function returns is an ordinary one, so an external
/// deferred or cancellation layer is free to own and wrap it.
///
/// ```
/// # futures::executor::block_on(async {
/// use outcome_api::try_async;
///
/// let outcome = try_async(async { "OK" }).await;
/// assert_eq!(outcome.unwrap(), "OK");
/// # });
/// ```
pub async fn try_async<F: Future>(future: F) -> Outcome<F::Output, CaughtPanic> {
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            let caught = CaughtPanic::new(payload);
            log::debug!("try_async captured a panic: {}", caught);
            Outcome::Err(caught)
        }
    }
}
