//! Applicative type class - applying functions within a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! Self::pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! Self::pure(f).apply(Self::pure(x)) == Self::pure(f(x))
//! ```
//!
//! # Inherent `pure`
//!
//! `Maybe` and `Outcome` also have an inherent `pure` that lifts a function
//! for `apply_to*`. Inherent items win over trait items, so `Maybe::pure(x)`
//! always resolves to the inherent form and wraps `x` as-is. Reach the trait
//! form with a qualified path: `<Maybe<_> as Applicative>::pure(x)`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::typeclass::Applicative;
//! use lambars_outcome::Maybe;
//!
//! let lifted: Maybe<i32> = <Maybe<()> as Applicative>::pure(42);
//! assert_eq!(lifted, Maybe::just(42));
//!
//! let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::just(3));
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two applicative values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function held in `self` to the value held in `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Maybe::pure(function).apply_to2(self, other)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Maybe::pure(function).apply_to3(self, second, third)
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.apply_to(other)
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Outcome::pure(function).apply_to2(self, other)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Outcome::pure(function).apply_to3(self, second, third)
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.apply_to(other)
    }
}
