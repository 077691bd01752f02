//! Benchmark for the lifted asynchronous forms.
//!
//! Uses `criterion::to_async()` so the runtime is entered once per sample
//! rather than once per iteration.

#![cfg(feature = "async")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambars_outcome::prelude::*;
use std::hint::black_box;

// =============================================================================
// MaybeTask Benchmarks
// =============================================================================

fn benchmark_maybe_task(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("maybe_task");

    group.bench_function("map_bind_ready", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let result = Maybe::just(black_box(3))
                .into_task()
                .map(|x| x + 1)
                .bind(|x| Maybe::just(x * 2))
                .await;
            black_box(result)
        });
    });

    group.bench_function("bind_async", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let result = Maybe::just(black_box(3))
                .bind_async(|x| async move { Maybe::just(x * 2) })
                .await;
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// OutcomeTask Benchmarks
// =============================================================================

fn benchmark_outcome_task(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("outcome_task");

    for depth in [1_u32, 8, 32] {
        group.bench_with_input(BenchmarkId::new("map_async_chain", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut total: Outcome<u32> = Outcome::success(0);
                for _ in 0..depth {
                    total = total.map_async(|value| async move { value + 1 }).await;
                }
                black_box(total)
            });
        });
    }

    group.bench_function("attempt_async_no_panic", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let result: Outcome<u32> =
                Outcome::attempt_async(|| async { black_box(40) + 2 }, |fault| fault.into_message()).await;
            black_box(result)
        });
    });

    group.bench_function("plain_async_baseline", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let value = async { black_box(40) + 2 }.await;
            black_box(value)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_maybe_task, benchmark_outcome_task);

criterion_main!(benches);
