//! Applicative combination for `Maybe`.
//!
//! A function held in a `Maybe` is applied to values held in other maybes.
//! The result is `Nothing` as soon as any participant, the function
//! included, is `Nothing`.

use super::Maybe;

impl<T> Maybe<T> {
    /// Applies a maybe-wrapped function to this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// let increment = Maybe::pure(|x: i32| x + 1);
    /// assert_eq!(Maybe::just(1).apply(increment), Maybe::just(2));
    /// assert_eq!(Maybe::<i32>::nothing().apply(Maybe::pure(|x: i32| x + 1)), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn apply<U, F>(self, function: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        function.apply_to(self)
    }
}

impl<F> Maybe<F> {
    /// Lifts a plain function into a `Maybe`.
    ///
    /// This inherent form shadows [`Applicative::pure`](crate::typeclass::Applicative::pure)
    /// in `Self::pure(..)` paths; call the trait form as
    /// `<Self as Applicative>::pure(..)`.
    #[inline]
    pub const fn pure(function: F) -> Self {
        Self::Just(function)
    }

    /// Applies the held function to one argument.
    #[inline]
    pub fn apply_to<A, R>(self, first: Maybe<A>) -> Maybe<R>
    where
        F: FnOnce(A) -> R,
    {
        match (self, first) {
            (Self::Just(function), Maybe::Just(first)) => Maybe::Just(function(first)),
            _ => Maybe::Nothing,
        }
    }

    /// Applies the held function to two arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// let add = Maybe::pure(|a: i32, b: i32| a + b);
    /// assert_eq!(add.apply_to2(Maybe::just(1), Maybe::just(2)), Maybe::just(3));
    /// ```
    #[inline]
    pub fn apply_to2<A, B, R>(self, first: Maybe<A>, second: Maybe<B>) -> Maybe<R>
    where
        F: FnOnce(A, B) -> R,
    {
        match (self, first, second) {
            (Self::Just(function), Maybe::Just(first), Maybe::Just(second)) => {
                Maybe::Just(function(first, second))
            }
            _ => Maybe::Nothing,
        }
    }

    /// Applies the held function to three arguments.
    #[inline]
    pub fn apply_to3<A, B, C, R>(
        self,
        first: Maybe<A>,
        second: Maybe<B>,
        third: Maybe<C>,
    ) -> Maybe<R>
    where
        F: FnOnce(A, B, C) -> R,
    {
        match (self, first, second, third) {
            (Self::Just(function), Maybe::Just(first), Maybe::Just(second), Maybe::Just(third)) => {
                Maybe::Just(function(first, second, third))
            }
            _ => Maybe::Nothing,
        }
    }

    /// Applies the held function to four arguments.
    #[inline]
    pub fn apply_to4<A, B, C, D, R>(
        self,
        first: Maybe<A>,
        second: Maybe<B>,
        third: Maybe<C>,
        fourth: Maybe<D>,
    ) -> Maybe<R>
    where
        F: FnOnce(A, B, C, D) -> R,
    {
        match (self, first, second, third, fourth) {
            (
                Self::Just(function),
                Maybe::Just(first),
                Maybe::Just(second),
                Maybe::Just(third),
                Maybe::Just(fourth),
            ) => Maybe::Just(function(first, second, third, fourth)),
            _ => Maybe::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add3(a: i32, b: i32, c: i32) -> i32 {
        a + b + c
    }

    #[rstest]
    fn apply_with_missing_function_is_nothing() {
        let missing: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert_eq!(Maybe::just(1).apply(missing), Maybe::Nothing);
    }

    #[rstest]
    #[case(Maybe::just(1), Maybe::just(2), Maybe::just(3), Maybe::just(6))]
    #[case(Maybe::Nothing, Maybe::just(2), Maybe::just(3), Maybe::Nothing)]
    #[case(Maybe::just(1), Maybe::Nothing, Maybe::just(3), Maybe::Nothing)]
    #[case(Maybe::just(1), Maybe::just(2), Maybe::Nothing, Maybe::Nothing)]
    fn apply_to3_propagates_any_nothing(
        #[case] first: Maybe<i32>,
        #[case] second: Maybe<i32>,
        #[case] third: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        let function = Maybe::pure(add3);
        assert_eq!(function.apply_to3(first, second, third), expected);
    }

    #[rstest]
    fn apply_to4_combines_all_values() {
        let concat = Maybe::pure(|a: &str, b: &str, c: &str, d: &str| format!("{a}{b}{c}{d}"));
        let result = concat.apply_to4(
            Maybe::just("l"),
            Maybe::just("a"),
            Maybe::just("m"),
            Maybe::just("b"),
        );
        assert_eq!(result, Maybe::just("lamb".to_string()));
    }
}
