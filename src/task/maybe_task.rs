//! Lifted `Maybe` combinators over futures.

use std::future::{Future, IntoFuture};

use futures::future::{self, Ready};

use super::OutcomeTask;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A future resolving to a [`Maybe`], with the `Maybe` combinators lifted
/// over it.
///
/// Every combinator awaits the wrapped future to completion before running
/// its function, so a chain runs strictly left to right. Nothing happens
/// until the task is awaited. Dropping the task cancels it.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::Maybe;
///
/// # futures::executor::block_on(async {
/// let greeting = Maybe::just("world")
///     .map_async(|name| async move { format!("hello {name}") })
///     .filter(|text| text.len() > 5)
///     .value_or("nobody".to_string())
///     .await;
/// assert_eq!(greeting, "hello world");
/// # });
/// ```
#[derive(Debug, Clone)]
#[must_use = "tasks do nothing unless awaited"]
pub struct MaybeTask<F> {
    future: F,
}

impl<F> MaybeTask<F> {
    /// Wraps `future`.
    pub const fn new(future: F) -> Self {
        Self { future }
    }

    /// Returns the wrapped future.
    pub fn into_inner(self) -> F {
        self.future
    }
}

impl<T, F> MaybeTask<F>
where
    F: Future<Output = Maybe<T>>,
{
    /// Lifted [`Maybe::map`].
    pub fn map<U, M>(self, selector: M) -> MaybeTask<impl Future<Output = Maybe<U>>>
    where
        M: FnOnce(T) -> U,
    {
        MaybeTask::new(async move { self.future.await.map(selector) })
    }

    /// Maps the payload with an asynchronous selector.
    ///
    /// The selector's future is awaited only when a value is present.
    pub fn map_async<U, M, Fut>(self, selector: M) -> MaybeTask<impl Future<Output = Maybe<U>>>
    where
        M: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        MaybeTask::new(async move {
            match self.future.await {
                Maybe::Just(value) => Maybe::Just(selector(value).await),
                Maybe::Nothing => Maybe::Nothing,
            }
        })
    }

    /// Lifted [`Maybe::bind`].
    pub fn bind<U, B>(self, selector: B) -> MaybeTask<impl Future<Output = Maybe<U>>>
    where
        B: FnOnce(T) -> Maybe<U>,
    {
        MaybeTask::new(async move { self.future.await.bind(selector) })
    }

    /// Binds the payload with a selector returning a future of `Maybe`.
    pub fn bind_async<U, B, Fut>(self, selector: B) -> MaybeTask<impl Future<Output = Maybe<U>>>
    where
        B: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        MaybeTask::new(async move {
            match self.future.await {
                Maybe::Just(value) => selector(value).await,
                Maybe::Nothing => Maybe::Nothing,
            }
        })
    }

    /// Lifted [`Maybe::filter`].
    pub fn filter<P>(self, predicate: P) -> MaybeTask<impl Future<Output = Maybe<T>>>
    where
        P: FnOnce(&T) -> bool,
    {
        MaybeTask::new(async move { self.future.await.filter(predicate) })
    }

    /// Lifted [`Maybe::or_else`].
    pub fn or_else<D>(self, fallback: D) -> MaybeTask<impl Future<Output = Maybe<T>>>
    where
        D: FnOnce() -> T,
    {
        MaybeTask::new(async move { self.future.await.or_else(fallback) })
    }

    /// Falls back to an asynchronously produced value when absent.
    pub fn or_else_async<D, Fut>(self, fallback: D) -> MaybeTask<impl Future<Output = Maybe<T>>>
    where
        D: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        MaybeTask::new(async move {
            match self.future.await {
                Maybe::Just(value) => Maybe::Just(value),
                Maybe::Nothing => Maybe::Just(fallback().await),
            }
        })
    }

    /// Lifted [`Maybe::match_with`].
    #[allow(clippy::future_not_send)]
    pub async fn match_with<R, S, N>(self, on_just: S, on_nothing: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.future.await.match_with(on_just, on_nothing)
    }

    /// Lifted [`Maybe::value_or`].
    #[allow(clippy::future_not_send)]
    pub async fn value_or(self, fallback: T) -> T {
        self.future.await.value_or(fallback)
    }

    /// Lifted [`Maybe::to_outcome`].
    pub fn to_outcome<E>(self, error: E) -> OutcomeTask<impl Future<Output = Outcome<T, E>>> {
        OutcomeTask::new(async move { self.future.await.to_outcome(error) })
    }
}

impl<F: Future> IntoFuture for MaybeTask<F> {
    type Output = F::Output;
    type IntoFuture = F;

    fn into_future(self) -> F {
        self.future
    }
}

/// Wraps any future of `Maybe` into a [`MaybeTask`].
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::task::IntoMaybeTask;
/// use lambars_outcome::Maybe;
///
/// # futures::executor::block_on(async {
/// let doubled = async { Maybe::just(21) }.into_maybe_task().map(|n| n * 2).await;
/// assert_eq!(doubled, Maybe::just(42));
/// # });
/// ```
pub trait IntoMaybeTask<T>: Future<Output = Maybe<T>> + Sized {
    /// Wraps `self`.
    fn into_maybe_task(self) -> MaybeTask<Self> {
        MaybeTask::new(self)
    }
}

impl<T, F> IntoMaybeTask<T> for F where F: Future<Output = Maybe<T>> {}

impl<T> Maybe<T> {
    /// Lifts this value into an already-resolved [`MaybeTask`].
    pub fn into_task(self) -> MaybeTask<Ready<Self>> {
        MaybeTask::new(future::ready(self))
    }

    /// Maps the payload with an asynchronous selector.
    pub fn map_async<U, M, Fut>(self, selector: M) -> MaybeTask<impl Future<Output = Maybe<U>>>
    where
        M: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.into_task().map_async(selector)
    }

    /// Binds the payload with a selector returning a future of `Maybe`.
    pub fn bind_async<U, B, Fut>(self, selector: B) -> MaybeTask<impl Future<Output = Maybe<U>>>
    where
        B: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        self.into_task().bind_async(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[tokio::test]
    async fn chain_runs_left_to_right() {
        let order = std::sync::Mutex::new(Vec::new());
        let result = Maybe::just(1)
            .map_async(|n| {
                order.lock().unwrap().push("map");
                async move { n + 1 }
            })
            .bind(|n| {
                order.lock().unwrap().push("bind");
                Maybe::just(n * 10)
            })
            .await;
        assert_eq!(result, Maybe::just(20));
        assert_eq!(*order.lock().unwrap(), vec!["map", "bind"]);
    }

    #[rstest]
    #[tokio::test]
    async fn nothing_skips_async_selector() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::nothing()
            .map_async(|n| {
                called.set(true);
                async move { n }
            })
            .await;
        assert_eq!(result, Maybe::Nothing);
        assert!(!called.get());
    }

    #[rstest]
    #[tokio::test]
    async fn task_is_lazy_until_awaited() {
        let called = Cell::new(false);
        let task = Maybe::just(3).into_task().map(|n| {
            called.set(true);
            n
        });
        assert!(!called.get());
        assert_eq!(task.await, Maybe::just(3));
        assert!(called.get());
    }

    #[rstest]
    #[tokio::test]
    async fn or_else_async_fills_absent_value() {
        let filled = Maybe::<i32>::nothing()
            .into_task()
            .or_else_async(|| async { 9 })
            .await;
        assert_eq!(filled, Maybe::just(9));
    }

    #[rstest]
    #[tokio::test]
    async fn to_outcome_bridges_to_outcome_task() {
        let outcome = Maybe::<i32>::nothing()
            .into_task()
            .to_outcome("missing")
            .map(|n| n + 1)
            .await;
        assert_eq!(outcome, Outcome::Failure("missing"));
    }
}
