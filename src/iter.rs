//! Sequence helpers producing or consuming `Maybe`.
//!
//! Every helper consumes its source iterator at most once and never mutates
//! the underlying collection. Adapters are lazy: building a new adapter over
//! a fresh iterator re-runs the filtering from the start.

use std::iter::FusedIterator;

use crate::maybe::Maybe;

/// Extension methods for iterators, in the style of `Iterator` adapters.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::iter::MaybeIterator;
/// use lambars_outcome::Maybe;
///
/// let entries = vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)];
/// let present: Vec<i32> = entries.iter().copied().choose().collect();
/// assert_eq!(present, vec![1, 3]);
///
/// assert_eq!([4, 5, 6].into_iter().find_maybe(|n| n % 5 == 0), Maybe::just(5));
/// ```
pub trait MaybeIterator: Iterator + Sized {
    /// Yields the payloads of the `Just` items, in order.
    fn choose<T>(self) -> Choose<Self>
    where
        Self: Iterator<Item = Maybe<T>>,
    {
        Choose { iterator: self }
    }

    /// Yields `selector(payload)` for every `Just` item, in order.
    fn choose_map<T, U, F>(self, selector: F) -> ChooseMap<Self, F>
    where
        Self: Iterator<Item = Maybe<T>>,
        F: FnMut(T) -> U,
    {
        ChooseMap {
            iterator: self,
            selector,
        }
    }

    /// Returns the first item, if any.
    fn try_first(mut self) -> Maybe<Self::Item> {
        self.next().into()
    }

    /// Returns the last item, if any.
    fn try_last(self) -> Maybe<Self::Item> {
        self.last().into()
    }

    /// Returns the first item satisfying `predicate`, if any.
    fn find_maybe<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }
}

impl<I: Iterator> MaybeIterator for I {}

/// Iterator returned by [`MaybeIterator::choose`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Choose<I> {
    iterator: I,
}

impl<T, I> Iterator for Choose<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iterator.find_map(Maybe::into_option)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iterator.size_hint().1)
    }
}

impl<T, I> FusedIterator for Choose<I> where I: FusedIterator<Item = Maybe<T>> {}

/// Iterator returned by [`MaybeIterator::choose_map`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChooseMap<I, F> {
    iterator: I,
    selector: F,
}

impl<T, U, I, F> Iterator for ChooseMap<I, F>
where
    I: Iterator<Item = Maybe<T>>,
    F: FnMut(T) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let value = self.iterator.find_map(Maybe::into_option)?;
        Some((self.selector)(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iterator.size_hint().1)
    }
}
