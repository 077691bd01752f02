//! Monad type class - sequencing computations with dependency.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::typeclass::Monad;
//! use lambars_outcome::Outcome;
//!
//! fn parse_positive(input: &str) -> Outcome<i32> {
//!     Outcome::from(input.parse::<i32>().map_err(|error| error.to_string()))
//!         .flat_map(|n| Outcome::success_if(n > 0, n, "not positive".to_string()))
//! }
//!
//! assert_eq!(parse_positive("7"), Outcome::success(7));
//! assert_eq!(parse_positive("-7"), Outcome::failure("not positive".to_string()));
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type class for applicatives whose next step may depend on the
/// previous value.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// An absent or failed `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.bind(function)
    }
}
