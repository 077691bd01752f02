//! Integration tests for the lifted asynchronous forms.

#![cfg(feature = "async")]

use lambars_outcome::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

async fn fetch_user(id: u32) -> Maybe<String> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    Maybe::from((id == 1).then(|| "ada".to_string()))
}

async fn fetch_score(name: String) -> Outcome<u32> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    Outcome::success_if(name == "ada", 97, format!("no score for {name}"))
}

async fn read_socket() -> u32 {
    tokio::time::sleep(Duration::from_millis(1)).await;
    panic!("socket closed")
}

// =============================================================================
// MaybeTask
// =============================================================================

#[rstest]
#[case(1, "ADA")]
#[case(2, "anonymous")]
#[tokio::test]
async fn maybe_task_chains_over_future(#[case] id: u32, #[case] expected: &str) {
    let name = fetch_user(id)
        .into_maybe_task()
        .map(|name| name.to_uppercase())
        .value_or("anonymous".to_string())
        .await;
    assert_eq!(name, expected);
}

#[rstest]
#[tokio::test]
async fn maybe_bind_async_sequences_lookups() {
    let lookup = Maybe::just(1_u32).bind_async(fetch_user).await;
    assert_eq!(lookup, Maybe::just("ada".to_string()));

    let missing = Maybe::just(9_u32).bind_async(fetch_user).await;
    assert_eq!(missing, Maybe::Nothing);
}

#[rstest]
#[tokio::test]
async fn maybe_task_match_with_runs_one_branch() {
    let rendered = fetch_user(2)
        .into_maybe_task()
        .match_with(|name| format!("user {name}"), || "unknown user".to_string())
        .await;
    assert_eq!(rendered, "unknown user");
}

// =============================================================================
// OutcomeTask
// =============================================================================

#[rstest]
#[tokio::test]
async fn maybe_task_feeds_outcome_task() {
    let score = fetch_user(1)
        .into_maybe_task()
        .to_outcome("user not found".to_string())
        .bind_async(fetch_score)
        .map(|score| score + 1)
        .await;
    assert_eq!(score, Outcome::success(98));
}

#[rstest]
#[tokio::test]
async fn outcome_task_failure_skips_later_stages() {
    let later_stages = AtomicUsize::new(0);
    let outcome = fetch_user(5)
        .into_maybe_task()
        .to_outcome("user not found".to_string())
        .bind_async(|name| {
            later_stages.fetch_add(1, Ordering::SeqCst);
            fetch_score(name)
        })
        .tap(|_| {
            later_stages.fetch_add(1, Ordering::SeqCst);
        })
        .map_error(|error| format!("lookup failed: {error}"))
        .await;
    assert_eq!(outcome, Outcome::failure("lookup failed: user not found".to_string()));
    assert_eq!(later_stages.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn stages_run_strictly_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&log);
    let second = Arc::clone(&log);
    let outcome: Outcome<u32> = Outcome::of_async(async { 1 })
        .map_async(|n| async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            first.lock().await.push("slow stage");
            n + 1
        })
        .bind_async(|n| async move {
            second.lock().await.push("fast stage");
            Outcome::success(n * 10)
        })
        .await;
    assert_eq!(outcome, Outcome::success(20));
    assert_eq!(*log.lock().await, vec!["slow stage", "fast stage"]);
}

#[rstest]
#[tokio::test]
async fn ensure_and_compensate_lifted() {
    let outcome: Outcome<u32> = Outcome::success(3)
        .into_task()
        .ensure(|n| *n > 5, "too small".to_string())
        .compensate(|_| Outcome::<u32, String>::success(5))
        .await;
    assert_eq!(outcome, Outcome::success(5));
}

#[rstest]
#[case(true, Outcome::success(1))]
#[case(false, Outcome::failure("closed".to_string()))]
#[tokio::test]
async fn success_if_async_awaits_predicate(#[case] open: bool, #[case] expected: Outcome<u32>) {
    let is_open = async move {
        tokio::task::yield_now().await;
        open
    };
    assert_eq!(Outcome::success_if_async(is_open, 1, "closed".to_string()).await, expected);
}

#[rstest]
#[tokio::test]
async fn attempt_async_turns_panic_into_failure() {
    let outcome: Outcome<u32> =
        Outcome::attempt_async(read_socket, |fault| format!("io: {}", fault.message())).await;
    assert_eq!(outcome, Outcome::failure("io: socket closed".to_string()));
}

#[rstest]
#[tokio::test]
async fn attempt_async_with_awaits_fault_handler() {
    let outcome: Outcome<u32> = Outcome::attempt_async_with(read_socket, |fault| async move {
        tokio::task::yield_now().await;
        format!("reported: {}", fault.message())
    })
    .await;
    assert_eq!(outcome, Outcome::failure("reported: socket closed".to_string()));
}

#[rstest]
#[tokio::test]
async fn attempt_async_with_skips_handler_without_panic() {
    let handled = AtomicUsize::new(0);
    let outcome: Outcome<u32> = Outcome::attempt_async_with(
        || async { 7 },
        |fault| {
            handled.fetch_add(1, Ordering::SeqCst);
            async move { fault.into_message() }
        },
    )
    .await;
    assert_eq!(outcome, Outcome::success(7));
    assert_eq!(handled.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn dropping_a_task_cancels_it() {
    let started = Arc::new(AtomicUsize::new(0));
    let observer = Arc::clone(&started);
    let task = Maybe::just(1).map_async(move |n| async move {
        observer.fetch_add(1, Ordering::SeqCst);
        n
    });
    drop(task);
    tokio::task::yield_now().await;
    assert_eq!(started.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn tasks_are_send_when_payloads_are() {
    let handle = tokio::spawn(
        Outcome::<u32>::of_async(async { 4 })
            .map(|n| n * 2)
            .into_future(),
    );
    assert_eq!(handle.await.unwrap(), Outcome::success(8));
}
