//! Condition + transform pairs for dispatching on an outcome's variant

use core::fmt;

use crate::outcome::{Outcome, Variant};

type Condition<'a, T, E> = Box<dyn Fn(&Outcome<T, E>) -> bool + 'a>;
type Transform<'a, T, E, R> = Box<dyn FnOnce(&Outcome<T, E>) -> R + 'a>;

/// A condition + transform pair consumed by [`Outcome::match_with`].
///
/// [`when`] is the normal construction path; [`Matcher::new`] accepts a
/// hand-written condition for the rare custom dispatch.
pub struct Matcher<'a, T, E, R> {
    condition: Condition<'a, T, E>,
    transform: Transform<'a, T, E, R>,
}

impl<'a, T, E, R> Matcher<'a, T, E, R> {
    /// Builds a matcher from an arbitrary condition and transform.
    pub fn new(
        condition: impl Fn(&Outcome<T, E>) -> bool + 'a,
        transform: impl FnOnce(&Outcome<T, E>) -> R + 'a,
    ) -> Self {
        Self {
            condition: Box::new(condition),
            transform: Box::new(transform),
        }
    }

    /// Whether this matcher applies to the given outcome.
    pub fn matches(&self, outcome: &Outcome<T, E>) -> bool {
        (self.condition)(outcome)
    }

    /// Transforms the given outcome. Consumes the matcher.
    pub fn apply(self, outcome: &Outcome<T, E>) -> R {
        (self.transform)(outcome)
    }
}

impl<T, E, R> fmt::Debug for Matcher<'_, T, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}

/// Creates a matcher that applies to outcomes of the given variant.
///
/// The transform receives the whole outcome, not just its payload.
///
/// # Example
///
/// ```
/// use outcome_core::{when, Outcome, Variant};
///
/// let outcome: Outcome<u32, String> = Outcome::Ok(13);
/// let message = outcome.match_with([
///     when(Variant::Ok, |o: &Outcome<u32, String>| {
///         format!("{} is prime!", o.ok().copied().unwrap_or(0))
///     }),
///     when(Variant::Err, |o| format!("failed: {:?}", o.err())),
/// ]);
/// assert_eq!(message, "13 is prime!");
/// ```
pub fn when<'a, T, E, R>(
    variant: Variant,
    transform: impl FnOnce(&Outcome<T, E>) -> R + 'a,
) -> Matcher<'a, T, E, R> {
    Matcher::new(move |outcome| outcome.variant() == variant, transform)
}
