//! Outcome type - success carrying a value, or failure carrying an error.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. The two channels
//! are mutually exclusive by construction: exactly one of
//! [`try_get_value`](Outcome::try_get_value) and
//! [`try_get_error`](Outcome::try_get_error) is `Just` for every outcome, and
//! the panicking accessors ([`value`](Outcome::value),
//! [`error`](Outcome::error)) treat reading the other channel as a contract
//! violation.
//!
//! The error type defaults to `String`, so `Outcome<T>` reads as "a `T` or an
//! error message".
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::Outcome;
//!
//! fn divide(dividend: i32, divisor: i32) -> Outcome<i32> {
//!     Outcome::failure_if(divisor == 0, dividend, "division by zero".to_string())
//!         .map(|dividend| dividend / divisor.max(1))
//! }
//!
//! assert_eq!(divide(10, 2).to_string(), "Success(5)");
//! assert_eq!(divide(1, 0).to_string(), "Failure(division by zero)");
//! ```

mod apply;
mod attempt;
mod combinators;
mod combine;
mod factory;

#[cfg(feature = "async")]
pub(crate) use attempt::trace_fault;

use std::fmt;

use crate::error::ContractViolation;
use crate::maybe::Maybe;
use crate::unit::Unit;

/// The result of an operation: a value on success, an error on failure.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure error type, `String` unless stated otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E = String> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

/// An outcome that only reports success or failure.
pub type UnitOutcome<E = String> = Outcome<Unit, E>;

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Panicking Accessors
    // =========================================================================

    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOfFailure`] on a `Failure`; the
    /// message includes the `Display` rendering of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::success(3);
    /// assert_eq!(*outcome.value(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => ContractViolation::ValueOfFailure {
                error: error.to_string(),
            }
            .raise(),
        }
    }

    /// Returns a reference to the failure error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ErrorOfSuccess`] on a `Success`.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Self::Success(_) => ContractViolation::ErrorOfSuccess.raise(),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOfFailure`] on a `Failure`; the
    /// message includes the `Display` rendering of the error.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => ContractViolation::ValueOfFailure {
                error: error.to_string(),
            }
            .raise(),
        }
    }

    /// Returns the failure error, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ErrorOfSuccess`] on a `Success`.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Success(_) => ContractViolation::ErrorOfSuccess.raise(),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Non-panicking Accessors
    // =========================================================================

    /// Returns the success value if there is one.
    #[inline]
    pub const fn try_get_value(&self) -> Maybe<&T> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// Returns the failure error if there is one.
    #[inline]
    pub const fn try_get_error(&self) -> Maybe<&E> {
        match self {
            Self::Success(_) => Maybe::Nothing,
            Self::Failure(error) => Maybe::Just(error),
        }
    }

    /// Returns both channels at once; exactly one of them is `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::{Maybe, Outcome};
    ///
    /// let outcome: Outcome<i32> = Outcome::failure("offline".to_string());
    /// let (value, error) = outcome.value_and_error();
    /// assert_eq!(value, Maybe::Nothing);
    /// assert_eq!(error, Maybe::just(&"offline".to_string()));
    /// ```
    #[inline]
    pub const fn value_and_error(&self) -> (Maybe<&T>, Maybe<&E>) {
        (self.try_get_value(), self.try_get_error())
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Borrows both channels as a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with a reference to the error of a `Failure`.
    #[inline]
    pub const fn as_result(&self) -> Result<&T, &E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// Useful for propagating a failure with `?` inside functions returning
    /// `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the error of a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Keeps the success value and drops the error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// Keeps the error and drops the success value.
    #[inline]
    pub fn to_error_maybe(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Nothing,
            Self::Failure(error) => Maybe::Just(error),
        }
    }

    // =========================================================================
    // Re-typing
    // =========================================================================

    /// Re-wraps the error of a failure under a new success type.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ConvertFailureOfSuccess`] on a
    /// `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let failed: Outcome<i32> = Outcome::failure("no user".to_string());
    /// let converted: Outcome<String> = failed.convert_failure();
    /// assert_eq!(converted.error(), "no user");
    /// ```
    #[inline]
    #[track_caller]
    pub fn convert_failure<U>(self) -> Outcome<U, E> {
        match self {
            Self::Success(_) => ContractViolation::ConvertFailureOfSuccess.raise(),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Narrows to an outcome without a success payload.
    #[inline]
    pub fn to_unit(self) -> UnitOutcome<E> {
        match self {
            Self::Success(_) => Outcome::Success(Unit),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Narrows to an outcome without a success payload, stringifying the error.
    #[inline]
    pub fn to_unit_message(self) -> UnitOutcome<String>
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(_) => Outcome::Success(Unit),
            Self::Failure(error) => Outcome::Failure(error.to_string()),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(value)` becomes `Success(value)` and `Err(error)` becomes
    /// `Failure(error)`; the channel of the source is always preserved.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
