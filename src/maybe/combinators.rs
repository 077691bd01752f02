//! Transforming, inspecting and extracting combinators for `Maybe`.

use super::Maybe;

impl<T> Maybe<T> {
    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `selector` to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).map(|x| x * 2), Maybe::just(10));
    /// assert_eq!(Maybe::<i32>::nothing().map(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(selector(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Like [`map`](Self::map), threading `context` into `selector`.
    ///
    /// Lets a non-capturing function carry extra state without a closure.
    #[inline]
    pub fn map_with<C, U, F>(self, context: C, selector: F) -> Maybe<U>
    where
        F: FnOnce(T, C) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(selector(value, context)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
    /// }
    ///
    /// assert_eq!(Maybe::just(8).bind(half).bind(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(6).bind(half).bind(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => selector(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Like [`bind`](Self::bind), threading `context` into `selector`.
    #[inline]
    pub fn bind_with<C, U, F>(self, context: C, selector: F) -> Maybe<U>
    where
        F: FnOnce(T, C) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => selector(value, context),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`map`](Self::map).
    #[inline]
    pub fn select<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(selector)
    }

    /// Alias for [`bind`](Self::bind).
    #[inline]
    pub fn select_many<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(selector)
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the maybe by running exactly one of the two branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.match_with(|n| format!("got {n}"), || "empty".to_string());
    /// assert_eq!(describe(Maybe::just(1)), "got 1");
    /// assert_eq!(describe(Maybe::nothing()), "empty");
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, on_just: S, on_nothing: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Runs `action` on the value if present.
    #[inline]
    pub fn execute<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = self {
            action(value);
        }
    }

    /// Runs `action` if no value is present.
    #[inline]
    pub fn execute_no_value<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.has_no_value() {
            action();
        }
    }

    /// Runs `action` on the value if present and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.execute(action);
        self
    }

    // =========================================================================
    // Extraction With Fallback
    // =========================================================================

    /// Returns the value, or `fallback` if absent.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback,
        }
    }

    /// Returns the value, or computes a fallback if absent.
    ///
    /// `fallback` is only invoked for `Nothing`.
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    /// Returns the value, or `T::default()` if absent.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    /// Applies `selector` to the value, or returns `fallback` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(Maybe::just("abc").map_or(0, str::len), 3);
    /// assert_eq!(Maybe::<&str>::nothing().map_or(0, str::len), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, selector: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => selector(value),
            Self::Nothing => fallback,
        }
    }

    /// Applies `selector` to the value, or computes a fallback if absent.
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, selector: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => selector(value),
            Self::Nothing => fallback(),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// The predicate is not invoked for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).filter(|n| n % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).filter(|n| n % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Just(value) = self
            && predicate(&value)
        {
            return Self::Just(value);
        }
        Self::Nothing
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Replaces `Nothing` with `Just(fallback)`.
    #[inline]
    #[must_use]
    pub fn or(self, fallback: T) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => Self::Just(fallback),
        }
    }

    /// Replaces `Nothing` with `Just(fallback())`.
    ///
    /// `fallback` is only invoked for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::nothing().or_else(|| 7).unwrap_value(), 7);
    /// assert_eq!(Maybe::just(1).or_else(|| unreachable!()), Maybe::just(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => Self::Just(fallback()),
        }
    }

    /// Replaces `Nothing` with a whole replacement maybe.
    #[inline]
    #[must_use]
    pub fn or_maybe(self, fallback: Self) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => fallback,
        }
    }

    /// Replaces `Nothing` with a computed replacement maybe.
    ///
    /// `fallback` is only invoked for `Nothing`.
    #[inline]
    #[must_use]
    pub fn or_else_maybe<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => fallback(),
        }
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => Maybe::Just((left, right)),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
    /// assert_eq!(Maybe::just(Maybe::<i32>::nothing()).flatten(), Maybe::Nothing);
    /// assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}
