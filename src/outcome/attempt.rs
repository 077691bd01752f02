//! Bridging panics and fallible operations into `Outcome`.
//!
//! [`Outcome::attempt`] is the only place where a panic becomes a domain
//! failure. A panic raised by the handler itself is not caught.

use std::panic::{self, AssertUnwindSafe};

use super::Outcome;
use crate::config;
use crate::error::Fault;

/// Runs `operation`, capturing an unwinding panic as a [`Fault`].
fn capture<T, F>(operation: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(operation)).map_err(|payload| {
        let fault = Fault::from_panic(payload);
        trace_fault(&fault);
        fault
    })
}

#[cfg(feature = "tracing")]
pub fn trace_fault(fault: &Fault) {
    tracing::debug!(fault = %fault, "operation panicked; converting to failure");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_fault(_: &Fault) {}

impl<T, E> Outcome<T, E> {
    /// Runs `operation` and turns a panic into a failure.
    ///
    /// On normal return the value becomes a success. If `operation` panics,
    /// the panic is captured as a [`Fault`] and `on_fault(fault)` becomes the
    /// failure error. A panic inside `on_fault` propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::attempt(|| panic!("boom"), |fault| fault.into_message());
    /// assert_eq!(outcome.error(), "boom");
    ///
    /// let outcome: Outcome<i32> = Outcome::attempt(|| 2 + 2, |fault| fault.into_message());
    /// assert_eq!(outcome, Outcome::success(4));
    /// ```
    pub fn attempt<F, H>(operation: F, on_fault: H) -> Self
    where
        F: FnOnce() -> T,
        H: FnOnce(Fault) -> E,
    {
        match capture(operation) {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(on_fault(fault)),
        }
    }

    /// Like [`attempt`](Self::attempt) for an operation that already returns
    /// an outcome; its own failure is kept as is.
    pub fn attempt_outcome<F, H>(operation: F, on_fault: H) -> Self
    where
        F: FnOnce() -> Self,
        H: FnOnce(Fault) -> E,
    {
        capture(operation).unwrap_or_else(|fault| Self::Failure(on_fault(fault)))
    }

    /// Runs an operation returning a standard `Result`, mapping its error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let parsed: Outcome<i32> = Outcome::from_fallible(|| "12".parse::<i32>(), |error| error.to_string());
    /// assert_eq!(parsed, Outcome::success(12));
    /// ```
    pub fn from_fallible<X, F, H>(operation: F, on_error: H) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        H: FnOnce(X) -> E,
    {
        match operation() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(on_error(error)),
        }
    }
}

impl<T> Outcome<T, String> {
    /// Like [`attempt`](Self::attempt), projecting the fault with
    /// [`config::default_fault_message`].
    pub fn attempt_default<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::attempt(operation, |fault| config::default_fault_message(&fault))
    }
}
