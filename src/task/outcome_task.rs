//! Lifted `Outcome` combinators and asynchronous factories.

use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::{self, Ready};

use crate::error::Fault;
use crate::outcome::Outcome;
use crate::outcome::trace_fault;

/// A future resolving to an [`Outcome`], with the `Outcome` combinators
/// lifted over it.
///
/// Each stage awaits the previous one before running, and a failure skips
/// every success-side stage exactly as the synchronous combinators do.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::Outcome;
///
/// # futures::executor::block_on(async {
/// let checked: Outcome<u32> = Outcome::of_async(async { 17 })
///     .ensure(|age| *age >= 18, "too young".to_string())
///     .map(|age| age + 1)
///     .await;
/// assert_eq!(checked, Outcome::failure("too young".to_string()));
/// # });
/// ```
#[derive(Debug, Clone)]
#[must_use = "tasks do nothing unless awaited"]
pub struct OutcomeTask<F> {
    future: F,
}

impl<F> OutcomeTask<F> {
    /// Wraps `future`.
    pub const fn new(future: F) -> Self {
        Self { future }
    }

    /// Returns the wrapped future.
    pub fn into_inner(self) -> F {
        self.future
    }
}

impl<T, E, F> OutcomeTask<F>
where
    F: Future<Output = Outcome<T, E>>,
{
    /// Lifted [`Outcome::map`].
    pub fn map<U, M>(self, function: M) -> OutcomeTask<impl Future<Output = Outcome<U, E>>>
    where
        M: FnOnce(T) -> U,
    {
        OutcomeTask::new(async move { self.future.await.map(function) })
    }

    /// Maps the success value with an asynchronous function.
    pub fn map_async<U, M, Fut>(self, function: M) -> OutcomeTask<impl Future<Output = Outcome<U, E>>>
    where
        M: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        OutcomeTask::new(async move {
            match self.future.await {
                Outcome::Success(value) => Outcome::Success(function(value).await),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Lifted [`Outcome::bind`].
    pub fn bind<U, B>(self, function: B) -> OutcomeTask<impl Future<Output = Outcome<U, E>>>
    where
        B: FnOnce(T) -> Outcome<U, E>,
    {
        OutcomeTask::new(async move { self.future.await.bind(function) })
    }

    /// Binds the success value with a function returning a future of `Outcome`.
    pub fn bind_async<U, B, Fut>(self, function: B) -> OutcomeTask<impl Future<Output = Outcome<U, E>>>
    where
        B: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        OutcomeTask::new(async move {
            match self.future.await {
                Outcome::Success(value) => function(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Lifted [`Outcome::map_error`].
    pub fn map_error<E2, M>(self, function: M) -> OutcomeTask<impl Future<Output = Outcome<T, E2>>>
    where
        M: FnOnce(E) -> E2,
    {
        OutcomeTask::new(async move { self.future.await.map_error(function) })
    }

    /// Lifted [`Outcome::ensure`].
    pub fn ensure<P>(self, predicate: P, error: E) -> OutcomeTask<impl Future<Output = Outcome<T, E>>>
    where
        P: FnOnce(&T) -> bool,
    {
        OutcomeTask::new(async move { self.future.await.ensure(predicate, error) })
    }

    /// Lifted [`Outcome::tap`].
    pub fn tap<A>(self, action: A) -> OutcomeTask<impl Future<Output = Outcome<T, E>>>
    where
        A: FnOnce(&T),
    {
        OutcomeTask::new(async move { self.future.await.tap(action) })
    }

    /// Lifted [`Outcome::compensate`].
    pub fn compensate<E2, C>(self, function: C) -> OutcomeTask<impl Future<Output = Outcome<T, E2>>>
    where
        C: FnOnce(E) -> Outcome<T, E2>,
    {
        OutcomeTask::new(async move { self.future.await.compensate(function) })
    }

    /// Lifted [`Outcome::match_with`].
    #[allow(clippy::future_not_send)]
    pub async fn match_with<R, S, N>(self, on_success: S, on_failure: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce(E) -> R,
    {
        self.future.await.match_with(on_success, on_failure)
    }
}

impl<F: Future> IntoFuture for OutcomeTask<F> {
    type Output = F::Output;
    type IntoFuture = F;

    fn into_future(self) -> F {
        self.future
    }
}

/// Wraps any future of `Outcome` into an [`OutcomeTask`].
pub trait IntoOutcomeTask<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Wraps `self`.
    fn into_outcome_task(self) -> OutcomeTask<Self> {
        OutcomeTask::new(self)
    }
}

impl<T, E, F> IntoOutcomeTask<T, E> for F where F: Future<Output = Outcome<T, E>> {}

impl<T, E> Outcome<T, E> {
    /// Lifts this outcome into an already-resolved [`OutcomeTask`].
    pub fn into_task(self) -> OutcomeTask<Ready<Self>> {
        OutcomeTask::new(future::ready(self))
    }

    /// Maps the success value with an asynchronous function.
    pub fn map_async<U, M, Fut>(self, function: M) -> OutcomeTask<impl Future<Output = Outcome<U, E>>>
    where
        M: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.into_task().map_async(function)
    }

    /// Binds the success value with a function returning a future of `Outcome`.
    pub fn bind_async<U, B, Fut>(self, function: B) -> OutcomeTask<impl Future<Output = Outcome<U, E>>>
    where
        B: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        self.into_task().bind_async(function)
    }

    /// Awaits `future` and wraps its value in a success.
    pub fn of_async<Fut>(future: Fut) -> OutcomeTask<impl Future<Output = Self>>
    where
        Fut: Future<Output = T>,
    {
        OutcomeTask::new(async move { Self::Success(future.await) })
    }

    /// Awaits `predicate`, then behaves like [`Outcome::success_if`].
    pub fn success_if_async<P>(predicate: P, value: T, error: E) -> OutcomeTask<impl Future<Output = Self>>
    where
        P: Future<Output = bool>,
    {
        OutcomeTask::new(async move { Self::success_if(predicate.await, value, error) })
    }

    /// Awaits `predicate`, then behaves like [`Outcome::failure_if`].
    pub fn failure_if_async<P>(predicate: P, value: T, error: E) -> OutcomeTask<impl Future<Output = Self>>
    where
        P: Future<Output = bool>,
    {
        OutcomeTask::new(async move { Self::failure_if(predicate.await, value, error) })
    }

    /// Asynchronous [`Outcome::attempt`].
    ///
    /// A panic while creating or polling the operation's future becomes
    /// `Failure(on_fault(fault))`. A panic inside `on_fault` propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_outcome::Outcome;
    ///
    /// # futures::executor::block_on(async {
    /// let outcome: Outcome<i32> = Outcome::attempt_async(
    ///     || async { panic!("connection reset") },
    ///     |fault| format!("request failed: {fault}"),
    /// )
    /// .await;
    /// assert_eq!(outcome.error(), "request failed: connection reset");
    /// # });
    /// ```
    pub fn attempt_async<O, Fut, H>(operation: O, on_fault: H) -> OutcomeTask<impl Future<Output = Self>>
    where
        O: FnOnce() -> Fut,
        Fut: Future<Output = T>,
        H: FnOnce(Fault) -> E,
    {
        OutcomeTask::new(async move {
            match AssertUnwindSafe(async move { operation().await }).catch_unwind().await {
                Ok(value) => Self::Success(value),
                Err(payload) => {
                    let fault = Fault::from_panic(payload);
                    trace_fault(&fault);
                    Self::Failure(on_fault(fault))
                }
            }
        })
    }

    /// Like [`attempt_async`](Self::attempt_async), with an asynchronous
    /// fault handler.
    ///
    /// The handler's future is awaited only when the operation panicked.
    pub fn attempt_async_with<O, Fut, H, HFut>(operation: O, on_fault: H) -> OutcomeTask<impl Future<Output = Self>>
    where
        O: FnOnce() -> Fut,
        Fut: Future<Output = T>,
        H: FnOnce(Fault) -> HFut,
        HFut: Future<Output = E>,
    {
        OutcomeTask::new(async move {
            match AssertUnwindSafe(async move { operation().await }).catch_unwind().await {
                Ok(value) => Self::Success(value),
                Err(payload) => {
                    let fault = Fault::from_panic(payload);
                    trace_fault(&fault);
                    Self::Failure(on_fault(fault).await)
                }
            }
        })
    }
}
