//! Railway combinators for `Outcome`.
//!
//! Success-side combinators run only on `Success` and pass a `Failure`
//! through untouched; failure-side combinators do the opposite.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::success(2);
    /// assert_eq!(outcome.map(|x| x * 10), Outcome::success(20));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the failure error.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Chains an operation that may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// fn positive(n: i32) -> Outcome<i32> {
    ///     Outcome::success_if(n > 0, n, format!("{n} is not positive"))
    /// }
    ///
    /// assert_eq!(Outcome::success(3).bind(positive), Outcome::success(3));
    /// assert_eq!(Outcome::success(-1).bind(positive).to_string(), "Failure(-1 is not positive)");
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`bind`](Self::bind), threading `context` into `function`.
    #[inline]
    pub fn bind_with<C, U, F>(self, context: C, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T, C) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value, context),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Runs `function` on success and keeps the original value if it succeeds.
    ///
    /// A failure from `function` replaces the outcome.
    #[inline]
    pub fn check<U, F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => match function(&value) {
                Outcome::Success(_) => Self::Success(value),
                Outcome::Failure(error) => Self::Failure(error),
            },
            Self::Failure(error) => Self::Failure(error),
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the outcome by running exactly one of the two branches.
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Passes the whole outcome to `function`, whatever its channel.
    #[inline]
    pub fn finally<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Fails with `error` unless `predicate` holds for the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let age: Outcome<u32> = Outcome::success(15);
    /// let adult = age.ensure(|age| *age >= 18, "must be an adult".to_string());
    /// assert_eq!(adult.error(), "must be an adult");
    /// ```
    #[inline]
    #[must_use]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`ensure`](Self::ensure), computing the error from the rejected value.
    #[inline]
    #[must_use]
    pub fn ensure_with<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error(&value))
                }
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the success value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the failure error and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Gives a failure a chance to recover.
    ///
    /// `function` receives the error and may return a success, or a failure
    /// with a different error type. A success passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// let cached: Outcome<i32, &str> = Outcome::failure("cache miss");
    /// let recovered: Outcome<i32, String> = cached.compensate(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn compensate<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Replaces a failure with the outcome computed by `fallback`.
    ///
    /// `fallback` is only invoked for a `Failure`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => fallback(),
        }
    }

    /// Returns the success value, or `fallback` on failure.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value, or computes one from the error.
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapses one level of nesting, keeping whichever failure came first.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}
