//! Semigroup type class - types with an associative binary operation.
//!
//! Error aggregation in [`Outcome::combine_errors`](crate::Outcome::combine_errors)
//! and [`Outcome::combine_values`](crate::Outcome::combine_values) merges
//! failing errors through this trait.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use crate::maybe::Maybe;
use crate::unit::Unit;

/// A type class for types with an associative binary operation.
///
/// Implement it for custom error types by hand, or derive it for structs
/// whose fields are all semigroups with `#[derive(Semigroup)]`.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Folds all elements left to right: `e1.combine(e2).combine(e3)`.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(parts), Some(String::from("abc")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Crate Type Implementations
// =============================================================================

impl Semigroup for Unit {
    fn combine(self, _other: Self) -> Self {
        Self
    }
}

/// `Maybe` forms a semigroup when its payload is a semigroup.
///
/// - `Just(a).combine(Just(b))` = `Just(a.combine(b))`
/// - `Just(a).combine(Nothing)` = `Just(a)`
/// - `Nothing.combine(Just(b))` = `Just(b)`
/// - `Nothing.combine(Nothing)` = `Nothing`
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // String and Vec
    // =========================================================================

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        let result = left.combine_ref(&right);
        assert_eq!(result, "Hello, World!");
        assert_eq!(left, "Hello, ");
        assert_eq!(right, "World!");
    }

    #[rstest]
    #[case(1, "ab")]
    #[case(3, "ababab")]
    fn string_combine_n(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(String::from("ab").combine_n(count), expected);
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = String::from("ab").combine_n(0);
    }

    #[rstest]
    fn vec_combine_does_not_require_clone() {
        struct Opaque(u8);
        let combined = vec![Opaque(1)].combine(vec![Opaque(2)]);
        assert_eq!(combined.iter().map(|o| o.0).collect::<Vec<_>>(), vec![1, 2]);
    }

    // =========================================================================
    // Maybe and Unit
    // =========================================================================

    #[rstest]
    #[case(Maybe::just("a".to_string()), Maybe::just("b".to_string()), Maybe::just("ab".to_string()))]
    #[case(Maybe::just("a".to_string()), Maybe::Nothing, Maybe::just("a".to_string()))]
    #[case(Maybe::Nothing, Maybe::just("b".to_string()), Maybe::just("b".to_string()))]
    #[case(Maybe::Nothing, Maybe::Nothing, Maybe::Nothing)]
    fn maybe_combine(
        #[case] left: Maybe<String>,
        #[case] right: Maybe<String>,
        #[case] expected: Maybe<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn unit_combine_is_trivial() {
        assert_eq!(Unit.combine(Unit), Unit);
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let left = (String::from("a"), vec![1]);
        let right = (String::from("b"), vec![2]);
        assert_eq!(left.combine(right), (String::from("ab"), vec![1, 2]));
    }

    #[rstest]
    fn reduce_all_folds_left() {
        let parts = vec![vec![1], vec![2, 3], vec![4]];
        assert_eq!(Vec::reduce_all(parts), Some(vec![1, 2, 3, 4]));
    }
}
