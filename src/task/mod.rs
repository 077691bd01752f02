//! Asynchronous lifted forms of the `Maybe` and `Outcome` combinators.
//!
//! Instead of an async copy of every combinator, a future of `Maybe` or
//! `Outcome` is wrapped once in [`MaybeTask`] or [`OutcomeTask`]. The
//! wrapper's combinators await the inner future and then delegate to the
//! synchronous combinator of the same name. Both wrappers implement
//! [`IntoFuture`](std::future::IntoFuture), so a chain is run with `.await`.
//!
//! No combinator spawns work or polls two futures concurrently. A task is
//! cancelled by dropping it.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::task::IntoOutcomeTask;
//! use lambars_outcome::Outcome;
//!
//! async fn load_quota(user: &str) -> Outcome<u32> {
//!     Outcome::success_if(user == "admin", 100, format!("unknown user {user}"))
//! }
//!
//! # futures::executor::block_on(async {
//! let remaining = load_quota("admin")
//!     .into_outcome_task()
//!     .map(|quota| quota - 1)
//!     .match_with(|left| left.to_string(), |error| error)
//!     .await;
//! assert_eq!(remaining, "99");
//! # });
//! ```

mod maybe_task;
mod outcome_task;

pub use maybe_task::{IntoMaybeTask, MaybeTask};
pub use outcome_task::{IntoOutcomeTask, OutcomeTask};
