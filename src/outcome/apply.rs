//! Applicative combination for `Outcome`.
//!
//! Participants are inspected in argument order (function first) and the
//! first failure found is returned; no errors are accumulated here. Use
//! `Outcome::combine` or `Outcome::combine_errors` to collect every failure.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Applies an outcome-wrapped function to this value.
    ///
    /// A failed function wins over a failed value.
    #[inline]
    pub fn apply<U, F>(self, function: Outcome<F, E>) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        function.apply_to(self)
    }
}

impl<F, E> Outcome<F, E> {
    /// Lifts a plain function into a successful outcome.
    ///
    /// This inherent form shadows [`Applicative::pure`](crate::typeclass::Applicative::pure)
    /// in `Self::pure(..)` paths; call the trait form as
    /// `<Self as Applicative>::pure(..)`.
    #[inline]
    pub const fn pure(function: F) -> Self {
        Self::Success(function)
    }

    /// Applies the held function to one argument.
    #[inline]
    pub fn apply_to<A, R>(self, first: Outcome<A, E>) -> Outcome<R, E>
    where
        F: FnOnce(A) -> R,
    {
        let function = match self {
            Self::Success(function) => function,
            Self::Failure(error) => return Outcome::Failure(error),
        };
        first.map(function)
    }

    /// Applies the held function to two arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let add: Outcome<_, String> = Outcome::pure(|a: i32, b: i32| a + b);
    /// let sum = add.apply_to2(Outcome::success(1), Outcome::failure("second".to_string()));
    /// assert_eq!(sum.error(), "second");
    /// ```
    #[inline]
    pub fn apply_to2<A, B, R>(self, first: Outcome<A, E>, second: Outcome<B, E>) -> Outcome<R, E>
    where
        F: FnOnce(A, B) -> R,
    {
        match (self, first, second) {
            (Self::Success(function), Outcome::Success(first), Outcome::Success(second)) => {
                Outcome::Success(function(first, second))
            }
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Applies the held function to three arguments.
    #[inline]
    pub fn apply_to3<A, B, C, R>(
        self,
        first: Outcome<A, E>,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
    ) -> Outcome<R, E>
    where
        F: FnOnce(A, B, C) -> R,
    {
        match (self, first, second, third) {
            (
                Self::Success(function),
                Outcome::Success(first),
                Outcome::Success(second),
                Outcome::Success(third),
            ) => Outcome::Success(function(first, second, third)),
            (Self::Failure(error), _, _, _)
            | (_, Outcome::Failure(error), _, _)
            | (_, _, Outcome::Failure(error), _)
            | (_, _, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Applies the held function to four arguments.
    #[inline]
    pub fn apply_to4<A, B, C, D, R>(
        self,
        first: Outcome<A, E>,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        fourth: Outcome<D, E>,
    ) -> Outcome<R, E>
    where
        F: FnOnce(A, B, C, D) -> R,
    {
        match (self, first, second, third, fourth) {
            (
                Self::Success(function),
                Outcome::Success(first),
                Outcome::Success(second),
                Outcome::Success(third),
                Outcome::Success(fourth),
            ) => Outcome::Success(function(first, second, third, fourth)),
            (Self::Failure(error), _, _, _, _)
            | (_, Outcome::Failure(error), _, _, _)
            | (_, _, Outcome::Failure(error), _, _)
            | (_, _, _, Outcome::Failure(error), _)
            | (_, _, _, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}
