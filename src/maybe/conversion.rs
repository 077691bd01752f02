//! Conversions between `Maybe`, `Outcome` and the standard `Option`.

use super::Maybe;
use crate::outcome::Outcome;
use crate::unit::Unit;

impl<T> Maybe<T> {
    // =========================================================================
    // Outcome Conversion
    // =========================================================================

    /// Converts into an outcome, using `error` when no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::{Maybe, Outcome};
    ///
    /// let found: Outcome<i32> = Maybe::just(1).to_outcome("missing".to_string());
    /// assert_eq!(found, Outcome::success(1));
    ///
    /// let missing: Outcome<i32> = Maybe::nothing().to_outcome("missing".to_string());
    /// assert_eq!(missing, Outcome::failure("missing".to_string()));
    /// ```
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error),
        }
    }

    /// Converts into an outcome, computing the error only when no value is present.
    #[inline]
    pub fn to_outcome_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error()),
        }
    }

    /// Treats the presence of any value as a failure carrying `error`.
    ///
    /// `Just(_)` becomes `Failure(error)` and `Nothing` becomes `Success(Unit)`.
    /// Note the inverted polarity compared to [`to_outcome`](Self::to_outcome).
    #[inline]
    pub fn to_unit_outcome_with<E>(self, error: E) -> Outcome<Unit, E> {
        match self {
            Self::Just(_) => Outcome::Failure(error),
            Self::Nothing => Outcome::Success(Unit),
        }
    }

    /// Like [`to_unit_outcome_with`](Self::to_unit_outcome_with), computing
    /// the error from the present value.
    #[inline]
    pub fn to_unit_outcome_else<E, F>(self, error: F) -> Outcome<Unit, E>
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Just(value) => Outcome::Failure(error(value)),
            Self::Nothing => Outcome::Success(Unit),
        }
    }

    /// Binds an outcome-producing function, treating `Nothing` as a success.
    ///
    /// A missing input is not an error: `Nothing` becomes `Success(Nothing)`
    /// without invoking `bind`. A present input is passed to `bind`; its
    /// success is wrapped in `Just` and its failure is propagated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::{Maybe, Outcome};
    ///
    /// fn parse(text: &str) -> Outcome<i32> {
    ///     text.parse::<i32>().map_err(|error| error.to_string()).into()
    /// }
    ///
    /// assert_eq!(Maybe::just("7").bind_optional(parse), Outcome::success(Maybe::just(7)));
    /// assert_eq!(Maybe::<&str>::nothing().bind_optional(parse), Outcome::success(Maybe::nothing()));
    /// assert!(Maybe::just("x").bind_optional(parse).is_failure());
    /// ```
    #[inline]
    pub fn bind_optional<U, E, F>(self, bind: F) -> Outcome<Maybe<U>, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Just(value) => bind(value).map(Maybe::Just),
            Self::Nothing => Outcome::Success(Maybe::Nothing),
        }
    }

    // =========================================================================
    // Host Nullable Interop
    // =========================================================================

    /// Converts into the standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Borrows the value as a standard `Option<&T>`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<E> Maybe<E> {
    /// Treats the held value as an error.
    ///
    /// `Just(error)` becomes `Failure(error)` and `Nothing` becomes
    /// `Success(Unit)`. Meant for maybes whose payload *is* an error, such as
    /// the result of a validation that reports the first problem found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::{Maybe, Outcome, Unit};
    ///
    /// fn first_problem(name: &str) -> Maybe<String> {
    ///     if name.is_empty() { Maybe::just("name is empty".to_string()) } else { Maybe::nothing() }
    /// }
    ///
    /// assert_eq!(first_problem("").to_unit_outcome(), Outcome::failure("name is empty".to_string()));
    /// assert_eq!(first_problem("Ada").to_unit_outcome(), Outcome::<Unit>::success(Unit));
    /// ```
    #[inline]
    pub fn to_unit_outcome(self) -> Outcome<Unit, E> {
        match self {
            Self::Just(error) => Outcome::Failure(error),
            Self::Nothing => Outcome::Success(Unit),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `None` becomes `Nothing`; `Some(value)` becomes `Just(value)`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

/// Extension for turning a standard `Option` into a [`Maybe`].
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::maybe::{AsMaybe, Maybe};
///
/// assert_eq!(Some(1).as_maybe(), Maybe::just(1));
/// assert_eq!(None::<i32>.as_maybe(), Maybe::Nothing);
/// ```
pub trait AsMaybe<T> {
    /// Converts into a `Maybe`.
    #[allow(clippy::wrong_self_convention)]
    fn as_maybe(self) -> Maybe<T>;
}

impl<T> AsMaybe<T> for Option<T> {
    #[inline]
    fn as_maybe(self) -> Maybe<T> {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5))]
    #[case(None)]
    fn option_round_trips(#[case] option: Option<i32>) {
        assert_eq!(option.as_maybe().into_option(), option);
    }

    #[rstest]
    fn reference_payload_round_trips() {
        let text = String::from("shared");
        let option = Some(&text);
        let maybe: Maybe<&String> = option.into();
        assert_eq!(Option::<&String>::from(maybe), Some(&text));
    }

    #[rstest]
    fn to_outcome_else_is_lazy() {
        let outcome: Outcome<i32, String> = Maybe::just(1).to_outcome_else(|| unreachable!());
        assert_eq!(outcome, Outcome::Success(1));
    }

    #[rstest]
    fn to_unit_outcome_with_inverts_presence() {
        assert_eq!(
            Maybe::just(1).to_unit_outcome_with("present"),
            Outcome::Failure("present")
        );
        assert_eq!(
            Maybe::<i32>::nothing().to_unit_outcome_with("present"),
            Outcome::Success(Unit)
        );
    }

    #[rstest]
    fn to_unit_outcome_else_sees_the_value() {
        let outcome: Outcome<Unit, String> =
            Maybe::just(3).to_unit_outcome_else(|value| format!("unexpected {value}"));
        assert_eq!(outcome, Outcome::Failure("unexpected 3".to_string()));
    }

    #[rstest]
    fn bind_optional_skips_bind_on_nothing() {
        let outcome: Outcome<Maybe<i32>, String> =
            Maybe::<i32>::nothing().bind_optional(|_| unreachable!());
        assert_eq!(outcome, Outcome::Success(Maybe::Nothing));
    }

    #[rstest]
    fn bind_optional_propagates_failure() {
        let outcome: Outcome<Maybe<i32>, &str> =
            Maybe::just(1).bind_optional(|_| Outcome::Failure("rejected"));
        assert_eq!(outcome, Outcome::Failure("rejected"));
    }
}
