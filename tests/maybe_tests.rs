//! Integration tests for `Maybe` combinators and conversions.

use lambars_outcome::prelude::*;
use rstest::{fixture, rstest};
use std::cell::Cell;

#[fixture]
fn present() -> Maybe<i32> {
    Maybe::just(5)
}

#[fixture]
fn absent() -> Maybe<i32> {
    Maybe::nothing()
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn map_then_unwrap_value() {
    assert_eq!(Maybe::just(5).map(|x| x * x).unwrap_value(), 25);
}

#[rstest]
fn or_else_then_unwrap_value() {
    assert_eq!(Maybe::<i32>::nothing().or_else(|| 7).unwrap_value(), 7);
}

#[rstest]
#[should_panic(expected = "Maybe has no value.")]
fn unwrap_value_of_nothing_panics(absent: Maybe<i32>) {
    let _ = absent.unwrap_value();
}

#[rstest]
#[should_panic(expected = "configuration key is missing")]
fn expect_value_uses_caller_message(absent: Maybe<i32>) {
    let _ = absent.expect_value("configuration key is missing");
}

#[rstest]
#[should_panic(expected = "Maybe has no value.")]
fn value_reference_of_nothing_panics(absent: Maybe<i32>) {
    let _ = absent.value();
}

#[rstest]
#[case(Maybe::just(3), 3)]
#[case(Maybe::Nothing, 0)]
fn value_or_default(#[case] input: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(input.value_or_default(), expected);
}

#[rstest]
fn map_or_else_is_lazy_on_present(present: Maybe<i32>) {
    let calls = Cell::new(0);
    let rendered = present.map_or_else(
        || {
            calls.set(calls.get() + 1);
            "none".to_string()
        },
        |n| n.to_string(),
    );
    assert_eq!(rendered, "5");
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Or laziness
// =============================================================================

#[rstest]
fn or_fallbacks_are_not_invoked_when_present(present: Maybe<i32>) {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);

    assert_eq!(present.or_else(|| { count(); 1 }), present);
    assert_eq!(present.or_else_maybe(|| { count(); Maybe::just(1) }), present);
    assert_eq!(present.value_or_else(|| { count(); 1 }), 5);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn or_fallbacks_replace_nothing(absent: Maybe<i32>) {
    assert_eq!(absent.or(1), Maybe::just(1));
    assert_eq!(absent.or_maybe(Maybe::Nothing), Maybe::Nothing);
    assert_eq!(absent.or_else_maybe(|| Maybe::just(2)), Maybe::just(2));
}

// =============================================================================
// Filtering and side effects
// =============================================================================

#[rstest]
#[case(Maybe::just(4), Maybe::just(4))]
#[case(Maybe::just(3), Maybe::Nothing)]
#[case(Maybe::Nothing, Maybe::Nothing)]
fn filter_keeps_matching_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn filter_on_nothing_skips_predicate(absent: Maybe<i32>) {
    let result = absent.filter(|_| unreachable!("predicate must not run"));
    assert_eq!(result, Maybe::Nothing);
}

#[rstest]
fn execute_runs_exactly_one_side() {
    let hits = Cell::new((0, 0));
    let record = |maybe: &Maybe<i32>| {
        maybe.execute(|_| hits.set((hits.get().0 + 1, hits.get().1)));
        maybe.execute_no_value(|| hits.set((hits.get().0, hits.get().1 + 1)));
    };
    record(&Maybe::just(1));
    record(&Maybe::Nothing);
    record(&Maybe::just(2));
    assert_eq!(hits.get(), (2, 1));
}

#[rstest]
fn match_with_runs_exactly_one_branch(present: Maybe<i32>, absent: Maybe<i32>) {
    let describe = |maybe: Maybe<i32>| maybe.match_with(|n| format!("got {n}"), || "empty".to_string());
    assert_eq!(describe(present), "got 5");
    assert_eq!(describe(absent), "empty");
}

// =============================================================================
// Bind and aliases
// =============================================================================

fn parse(text: &str) -> Maybe<i32> {
    Maybe::from(text.parse::<i32>().ok())
}

#[rstest]
#[case("12", Maybe::just(12))]
#[case("x", Maybe::Nothing)]
fn select_many_matches_bind(#[case] text: &str, #[case] expected: Maybe<i32>) {
    let source = Maybe::just(text);
    assert_eq!(source.bind(parse), expected);
    assert_eq!(source.select_many(parse), expected);
}

#[rstest]
fn map_with_threads_context(present: Maybe<i32>) {
    let offset = 10;
    assert_eq!(present.map_with(offset, |n, off| n + off), Maybe::just(15));
    assert_eq!(
        present.bind_with(offset, |n, off| Maybe::just(n * off)),
        Maybe::just(50)
    );
}

#[rstest]
fn flatten_collapses_one_level() {
    assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
    assert_eq!(Maybe::just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), Maybe::Nothing);
}

// =============================================================================
// Applicative
// =============================================================================

#[rstest]
fn apply_to4_combines_all_present_values() {
    let sum = Maybe::pure(|a: i32, b: i32, c: i32, d: i32| a + b + c + d).apply_to4(
        Maybe::just(1),
        Maybe::just(2),
        Maybe::just(3),
        Maybe::just(4),
    );
    assert_eq!(sum, Maybe::just(10));
}

#[rstest]
fn apply_with_absent_function_is_nothing() {
    let function: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    assert_eq!(Maybe::just(1).apply(function), Maybe::Nothing);
}

#[rstest]
fn zip_pairs_values(present: Maybe<i32>, absent: Maybe<i32>) {
    assert_eq!(present.zip(Maybe::just("a")), Maybe::just((5, "a")));
    assert_eq!(absent.zip(Maybe::just("a")), Maybe::Nothing);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn to_outcome_uses_error_only_when_absent(present: Maybe<i32>, absent: Maybe<i32>) {
    assert_eq!(present.to_outcome("missing"), Outcome::Success(5));
    assert_eq!(absent.to_outcome("missing"), Outcome::Failure("missing"));

    let calls = Cell::new(0);
    let _ = present.to_outcome_else(|| {
        calls.set(calls.get() + 1);
        "missing"
    });
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn to_unit_outcome_treats_presence_as_failure() {
    let validation_error: Maybe<&str> = Maybe::just("name is empty");
    assert_eq!(validation_error.to_unit_outcome(), Outcome::Failure("name is empty"));

    let clean: Maybe<&str> = Maybe::Nothing;
    assert_eq!(clean.to_unit_outcome(), Outcome::Success(Unit));

    assert_eq!(
        Maybe::just(3).to_unit_outcome_with("duplicate"),
        Outcome::Failure("duplicate")
    );
    assert_eq!(
        Maybe::just(3).to_unit_outcome_else(|n| format!("duplicate id {n}")),
        Outcome::Failure("duplicate id 3".to_string())
    );
}

#[rstest]
fn bind_optional_treats_nothing_as_success(absent: Maybe<i32>) {
    let calls = Cell::new(0);
    let outcome: Outcome<Maybe<i32>, String> = absent.bind_optional(|n| {
        calls.set(calls.get() + 1);
        Outcome::Success(n)
    });
    assert_eq!(outcome, Outcome::Success(Maybe::Nothing));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(Maybe::just(4), Outcome::Success(Maybe::just(2)))]
#[case(Maybe::just(3), Outcome::Failure("odd".to_string()))]
fn bind_optional_propagates_bind_outcome(
    #[case] input: Maybe<i32>,
    #[case] expected: Outcome<Maybe<i32>, String>,
) {
    let halved = input.bind_optional(|n| Outcome::success_if(n % 2 == 0, n / 2, "odd".to_string()));
    assert_eq!(halved, expected);
}

#[rstest]
fn option_interop_round_trips() {
    for source in [Some(3), None] {
        assert_eq!(source.as_maybe().into_option(), source);
        assert_eq!(Option::<i32>::from(Maybe::from(source)), source);
    }
    let text = Maybe::just(String::from("hi"));
    assert_eq!(text.as_option(), Some(&String::from("hi")));
}

#[rstest]
fn iterates_zero_or_one_item(present: Maybe<i32>, absent: Maybe<i32>) {
    assert_eq!(present.into_iter().collect::<Vec<_>>(), vec![5]);
    assert_eq!((&absent).into_iter().count(), 0);
}

// =============================================================================
// Representation
// =============================================================================

#[rstest]
fn display_and_ordering(present: Maybe<i32>, absent: Maybe<i32>) {
    assert_eq!(present.to_string(), "5");
    assert_eq!(absent.to_string(), "No value");
    assert!(absent < present);
    assert_eq!(Maybe::<String>::default(), Maybe::Nothing);
}
