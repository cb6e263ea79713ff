//! The outcome value type and its inspection/combinator surface

use core::fmt;

use crate::matcher::Matcher;

/// Tag identifying which shape an [`Outcome`] takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Success shape, carries a value
    Ok,
    /// Failure shape, carries an error
    Err,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Ok => f.write_str("Ok"),
            Variant::Err => f.write_str("Err"),
        }
    }
}

/// The outcome of an operation that may fail.
///
/// Exactly one of the two variants holds for the lifetime of the value; the
/// variant is fixed at construction and the payload is never mutated. Because
/// the variant is the enum discriminant, `Outcome::Err(0)` and
/// `Outcome::Err("")` are unambiguously errors regardless of what the payload
/// looks like.
///
/// Combinators either hand back one of their operands unchanged or build a
/// new value; nothing is copied behind the caller's back.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The operation produced a value
    Ok(T),
    /// The operation failed with an error
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns true iff this outcome is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns true iff this outcome is `Err`.
    ///
    /// Always the complement of [`is_ok`](Self::is_ok).
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The variant tag by itself.
    pub fn variant(&self) -> Variant {
        match self {
            Outcome::Ok(_) => Variant::Ok,
            Outcome::Err(_) => Variant::Err,
        }
    }

    /// The success payload, if any.
    pub fn ok(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// The error payload, if any.
    pub fn err(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Err`, with the error payload as the cause.
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {error:?}")
            }
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ok`, with the success payload as the cause.
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => {
                panic!("called `Outcome::unwrap_err()` on an `Ok` value: {value:?}")
            }
            Outcome::Err(error) => error,
        }
    }

    /// Returns the success payload, or `default` on `Err`. No failure path.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the success payload, or the result of `fallback` on `Err`.
    ///
    /// `fallback` runs exactly once on `Err` and never on `Ok`.
    pub fn unwrap_or_else(self, fallback: impl FnOnce(E) -> T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => fallback(error),
        }
    }

    /// Returns self if `Ok`, else `other` unchanged.
    pub fn or(self, other: Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Outcome::Ok(_) => self,
            Outcome::Err(_) => other,
        }
    }

    /// Returns `other` unchanged if `Ok`, else self's error carried over.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts into the standard library's `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Applies the first matcher whose condition holds, in the order given.
    ///
    /// Exhaustiveness is a runtime contract, not a static one: the scan is
    /// linear and first-match-wins.
    ///
    /// # Panics
    ///
    /// Panics if no matcher's condition holds.
    pub fn match_with<'m, R>(
        &self,
        matchers: impl IntoIterator<Item = Matcher<'m, T, E, R>>,
    ) -> R
    where
        T: 'm,
        E: 'm,
    {
        for matcher in matchers {
            if matcher.matches(self) {
                return matcher.apply(self);
            }
        }
        panic!(
            "non-exhaustive match: no matcher condition held for an `{}` outcome",
            self.variant()
        )
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_tag_is_authoritative_for_empty_payloads() {
        // The tag decides the variant, never payload truthiness.
        assert!(Outcome::<i32, i32>::Err(0).is_err());
        assert!(Outcome::<&str, &str>::Err("").is_err());
        assert!(Outcome::<i32, i32>::Ok(0).is_ok());
        assert!(Outcome::<&str, &str>::Ok("").is_ok());
    }

    #[test]
    fn accessors_are_optional_on_both_sides() {
        let ok: Outcome<i32, &str> = Outcome::Ok(7);
        assert_eq!(ok.ok(), Some(&7));
        assert_eq!(ok.err(), None);

        let err: Outcome<i32, &str> = Outcome::Err("bad");
        assert_eq!(err.ok(), None);
        assert_eq!(err.err(), Some(&"bad"));
    }

    #[test]
    fn as_ref_preserves_the_variant() {
        let ok: Outcome<String, String> = Outcome::Ok("v".to_string());
        assert_eq!(ok.as_ref().unwrap(), &"v".to_string());

        let err: Outcome<String, String> = Outcome::Err("e".to_string());
        assert_eq!(err.as_ref().unwrap_err(), &"e".to_string());
    }

    #[test]
    fn result_conversions_round_trip() {
        let outcome: Outcome<i32, &str> = Ok::<_, &str>(3).into();
        assert_eq!(outcome, Outcome::Ok(3));
        assert_eq!(outcome.into_result(), Ok(3));

        let outcome: Outcome<i32, &str> = Err::<i32, _>("nope").into();
        assert_eq!(Result::from(outcome), Err("nope"));
    }
}
