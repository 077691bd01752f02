//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::typeclass::Functor;
//! use lambars_outcome::Maybe;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::just(5)), Maybe::just("#5".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::typeclass::Functor;
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    /// assert_eq!(Maybe::<i32>::nothing().replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_error(E::clone)
    }
}
