//! Verbatim panic payloads captured by the adapters

use std::any::Any;
use std::fmt;

use thiserror::Error;

/// A panic payload captured by [`try_fn`](crate::try_fn) or
/// [`try_async`](crate::try_async).
///
/// The boxed payload is exactly what `catch_unwind` produced; it is never
/// stringified or rewrapped. [`message`](Self::message) reads the common
/// `&str`/`String` payloads, [`downcast`](Self::downcast) and
/// [`into_inner`](Self::into_inner) hand the payload back untouched.
#[derive(Error)]
#[error("caught panic: {}", payload_message(.payload).unwrap_or("<non-string payload>"))]
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, when the payload is a `&str` or `String`.
    pub fn message(&self) -> Option<&str> {
        payload_message(&self.payload)
    }

    /// Attempts to downcast the payload to a concrete type.
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// The raw payload, exactly as the panic produced it.
    pub fn into_inner(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

// The payload itself is not Debug, so render the message when there is one.
impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CaughtPanic")
            .field(&self.message().unwrap_or("<non-string payload>"))
            .finish()
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.as_str())
    } else {
        None
    }
}
