//! Maybe type - a value that may or may not be present.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. Every combinator keeps the
//! absent case absent without ever reading a payload that is not there; the
//! only way to observe the payload of `Nothing` is one of the panicking
//! accessors ([`Maybe::value`], [`Maybe::unwrap_value`],
//! [`Maybe::expect_value`]), which treat it as a contract violation.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::Maybe;
//!
//! let present = Maybe::just(5);
//! let absent: Maybe<i32> = Maybe::nothing();
//!
//! assert_eq!(present.map(|x| x * x), Maybe::just(25));
//! assert_eq!(absent.map(|x| x * x), Maybe::Nothing);
//!
//! // Host nullable interop
//! let from_option: Maybe<i32> = Some(3).into();
//! assert_eq!(from_option, Maybe::just(3));
//! assert_eq!(Option::<i32>::from(from_option), Some(3));
//! ```

mod apply;
mod combinators;
mod conversion;

pub use conversion::AsMaybe;

use std::fmt;

use crate::error::ContractViolation;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Type Parameters
///
/// * `T` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::Maybe;
///
/// let name = Maybe::just("Alice");
/// let greeting = name.match_with(|name| format!("Hello, {name}"), || "Hello".to_string());
/// assert_eq!(greeting, "Hello, Alice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Maybe` may be `Nothing`, which should be handled"]
pub enum Maybe<T> {
    /// No value is present.
    Nothing,
    /// A value is present.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert!(Maybe::just(1).has_value());
    /// assert!(!Maybe::<i32>::nothing().has_value());
    /// ```
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn has_no_value(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts `&mut Maybe<T>` into `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Panicking Accessors
    // =========================================================================

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::NoValue`] if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(*Maybe::just(42).value(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => ContractViolation::NoValue.raise(),
        }
    }

    /// Returns the value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::NoValue`] if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).map(|x| x * x).unwrap_value(), 25);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_value(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => ContractViolation::NoValue.raise(),
        }
    }

    /// Returns the value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use lambars_outcome::Maybe;
    ///
    /// let missing: Maybe<i32> = Maybe::nothing();
    /// missing.expect_value("configuration key `port` is required");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_value(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => fmt::Display::fmt(value, formatter),
            Self::Nothing => formatter.write_str("No value"),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the value once if present, nothing otherwise.
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_option().into_iter()
    }
}
