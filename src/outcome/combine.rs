//! Combining several outcomes into one.
//!
//! The combined outcome succeeds only if every input succeeds. Otherwise all
//! failing errors, in input order, are merged into one error: by a caller
//! supplied composer, through [`Semigroup`], or by joining their messages.

use std::fmt;

use super::Outcome;
use crate::config;
use crate::maybe::Maybe;
use crate::typeclass::Semigroup;

fn failing_errors<T, E, I>(results: I) -> Vec<E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    results
        .into_iter()
        .filter_map(|outcome| outcome.to_error_maybe().into_option())
        .collect()
}

impl<E> Outcome<bool, E> {
    /// Combines `results`, composing every failing error with `composer`.
    ///
    /// Returns `Success(true)` when every input succeeds, in which case
    /// `composer` is not called. Otherwise `composer` receives all failing
    /// errors in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let results: Vec<Outcome<i32>> = vec![
    ///     Outcome::success(1),
    ///     Outcome::failure("name is empty".to_string()),
    ///     Outcome::failure("age is negative".to_string()),
    /// ];
    /// let combined = Outcome::combine(results, |errors| errors.join("; "));
    /// assert_eq!(combined.error(), "name is empty; age is negative");
    /// ```
    pub fn combine<T, I, F>(results: I, composer: F) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
        F: FnOnce(Vec<E>) -> E,
    {
        let errors = failing_errors(results);
        if errors.is_empty() {
            Self::Success(true)
        } else {
            Self::Failure(composer(errors))
        }
    }

    /// Combines `results`, merging failing errors pairwise with [`Semigroup::combine`].
    ///
    /// The errors are folded left to right: `e1.combine(e2).combine(e3)`.
    pub fn combine_errors<T, I>(results: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
        E: Semigroup,
    {
        match E::reduce_all(failing_errors(results)) {
            Some(error) => Self::Failure(error),
            None => Self::Success(true),
        }
    }
}

impl Outcome<bool, String> {
    /// Combines `results`, joining the failing errors' messages with the
    /// configured separator (see [`config::error_messages_separator`]).
    pub fn combine_messages<T, E, I>(results: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
        E: fmt::Display,
    {
        Self::combine_messages_with_separator(results, &config::error_messages_separator())
    }

    /// Combines `results`, joining the failing errors' messages with `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let results: Vec<Outcome<(), u16>> = vec![Outcome::failure(404), Outcome::success(()), Outcome::failure(500)];
    /// let combined = Outcome::combine_messages_with_separator(results, " & ");
    /// assert_eq!(combined.error(), "404 & 500");
    /// ```
    pub fn combine_messages_with_separator<T, E, I>(results: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
        E: fmt::Display,
    {
        let messages: Vec<String> = failing_errors(results)
            .iter()
            .map(ToString::to_string)
            .collect();
        if messages.is_empty() {
            Self::Success(true)
        } else {
            Self::Failure(messages.join(separator))
        }
    }
}

impl<T, E> Outcome<Vec<T>, E> {
    /// Collects every success value, or merges every failing error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let results: Vec<Outcome<i32, Vec<&str>>> = vec![Outcome::success(1), Outcome::success(2)];
    /// assert_eq!(Outcome::combine_values(results), Outcome::success(vec![1, 2]));
    /// ```
    pub fn combine_values<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
        E: Semigroup,
    {
        let mut values = Vec::new();
        let mut errors: Option<E> = None;
        for outcome in results {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => {
                    errors = Some(match errors {
                        Some(accumulated) => accumulated.combine(error),
                        None => error,
                    });
                }
            }
        }
        match errors {
            Some(error) => Self::Failure(error),
            None => Self::Success(values),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns the first failing outcome in `results`, if any.
    ///
    /// Scanning stops at the first failure.
    pub fn first_failure_or_none<I>(results: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        results
            .into_iter()
            .find(Self::is_failure)
            .into()
    }
}
