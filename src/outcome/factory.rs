//! Constructors for `Outcome`.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Succeeds with `value` if `condition` holds, fails with `error` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let adult: Outcome<u32> = Outcome::success_if(21 >= 18, 21, "too young".to_string());
    /// assert_eq!(adult, Outcome::success(21));
    /// ```
    #[inline]
    pub fn success_if(condition: bool, value: T, error: E) -> Self {
        if condition {
            Self::Success(value)
        } else {
            Self::Failure(error)
        }
    }

    /// Like [`success_if`](Self::success_if), evaluating `predicate` for the condition.
    #[inline]
    pub fn success_if_with<P>(predicate: P, value: T, error: E) -> Self
    where
        P: FnOnce() -> bool,
    {
        Self::success_if(predicate(), value, error)
    }

    /// Fails with `error` if `condition` holds, succeeds with `value` otherwise.
    ///
    /// Always equal to `success_if(!condition, value, error)`.
    #[inline]
    pub fn failure_if(condition: bool, value: T, error: E) -> Self {
        Self::success_if(!condition, value, error)
    }

    /// Like [`failure_if`](Self::failure_if), evaluating `predicate` for the condition.
    #[inline]
    pub fn failure_if_with<P>(predicate: P, value: T, error: E) -> Self
    where
        P: FnOnce() -> bool,
    {
        Self::failure_if(predicate(), value, error)
    }

    /// Wraps `value` in a success.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps the value produced by `function` in a success.
    #[inline]
    pub fn of_with<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::Success(function())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn failure_if_complements_success_if(#[case] condition: bool) {
        let failure_if: Outcome<i32, &str> = Outcome::failure_if(condition, 1, "e");
        let success_if: Outcome<i32, &str> = Outcome::success_if(!condition, 1, "e");
        assert_eq!(failure_if, success_if);
    }

    #[rstest]
    fn predicate_forms_evaluate_once() {
        let calls = Cell::new(0);
        let predicate = || {
            calls.set(calls.get() + 1);
            true
        };
        let outcome: Outcome<i32, &str> = Outcome::success_if_with(predicate, 1, "e");
        assert_eq!(outcome, Outcome::Success(1));
        assert_eq!(calls.get(), 1);

        let outcome: Outcome<i32, &str> = Outcome::failure_if_with(|| true, 1, "e");
        assert_eq!(outcome, Outcome::Failure("e"));
    }

    #[rstest]
    fn of_always_succeeds() {
        let outcome: Outcome<i32> = Outcome::of(3);
        assert!(outcome.is_success());
        let computed: Outcome<i32> = Outcome::of_with(|| 4);
        assert_eq!(computed, Outcome::Success(4));
    }
}
