//! Unit tests for `Outcome<T, E>`.
//!
//! `Outcome` represents a computation that either succeeded or failed:
//! - `Success(T)`: the computation produced a value
//! - `Failure(E)`: the computation failed with a describable payload

use rstest::rstest;
use std::cell::Cell;
use std::fmt;
use twofold::{
    GenericFailure, Maybe, Outcome, UnexpectedFailure, UnexpectedSuccess, err, err_generic, ok,
    ok_unit,
};

/// A caller-defined failure type; only `Debug + Display` are required.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadError {
    Missing(String),
    Corrupt { offset: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(formatter, "missing file {name}"),
            Self::Corrupt { offset } => write!(formatter, "corrupt at byte {offset}"),
        }
    }
}

// =============================================================================
// Construction and Inspection
// =============================================================================

#[rstest]
fn outcome_ok_is_success() {
    let value: Outcome<i32, String> = ok(1);
    assert!(value.is_success());
    assert!(!value.is_failure());
}

#[rstest]
fn outcome_err_is_failure() {
    let value: Outcome<i32, LoadError> = err(LoadError::Corrupt { offset: 3 });
    assert!(value.is_failure());
    assert!(!value.is_success());
}

#[rstest]
fn outcome_ok_unit_carries_unit() {
    let value: Outcome<(), String> = ok_unit();
    assert_eq!(value, Outcome::Success(()));
}

#[rstest]
fn outcome_err_generic_failures_are_equal() {
    let first: Outcome<i32, GenericFailure> = err_generic();
    let second: Outcome<i32, GenericFailure> = err_generic();
    assert_eq!(first, second);
    assert_eq!(first.unwrap_err().to_string(), "generic failure");
}

#[rstest]
fn outcome_predicates() {
    let success: Outcome<i32, &str> = ok(4);
    let failure: Outcome<i32, &str> = err("bad");
    assert!(success.is_success_and(|n| *n == 4));
    assert!(!failure.is_success_and(|_| true));
    assert!(failure.is_failure_and(|e| e.starts_with('b')));
    assert!(success.contains(&4));
    assert!(failure.contains_err(&"bad"));
    assert!(!success.contains_err(&"bad"));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn outcome_unwrap_success() {
    assert_eq!(ok::<_, String>("done").unwrap(), "done");
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value: missing file a.txt")]
fn outcome_unwrap_failure_panics_with_payload() {
    err::<i32, _>(LoadError::Missing("a.txt".to_string())).unwrap();
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap_err()` on a `Success` value")]
fn outcome_unwrap_err_success_panics() {
    ok::<i32, String>(1).unwrap_err();
}

#[rstest]
#[should_panic(expected = "reading header: corrupt at byte 12")]
fn outcome_expect_failure_panics_with_reason() {
    err::<i32, _>(LoadError::Corrupt { offset: 12 }).expect("reading header");
}

#[rstest]
#[should_panic(expected = "should have failed")]
fn outcome_expect_err_success_panics_with_reason() {
    ok::<i32, String>(1).expect_err("should have failed");
}

#[rstest]
fn outcome_try_unwrap_returns_typed_errors() {
    assert_eq!(
        err::<i32, _>("nope").try_unwrap(),
        Err(UnexpectedFailure {
            reason: None,
            failure: "nope"
        })
    );
    assert_eq!(
        ok::<i32, &str>(1).try_unwrap_err(),
        Err(UnexpectedSuccess { reason: None })
    );
    assert_eq!(err::<i32, _>("nope").try_unwrap_err(), Ok("nope"));
}

#[rstest]
fn outcome_unwrap_or_family() {
    assert_eq!(ok::<i32, &str>(1).unwrap_or(0), 1);
    assert_eq!(err::<i32, &str>("x").unwrap_or(0), 0);
    assert_eq!(err::<usize, &str>("four").unwrap_or_else(str::len), 4);
    assert_eq!(err::<Vec<i32>, &str>("x").unwrap_or_default(), Vec::<i32>::new());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn outcome_map_transforms_success_only() {
    assert_eq!(ok::<i32, &str>(2).map(|n| n + 1), ok(3));
    assert_eq!(err::<i32, &str>("x").map(|n| n + 1), err("x"));
}

#[rstest]
fn outcome_map_err_transforms_failure_only() {
    assert_eq!(err::<i32, &str>("four").map_err(str::len), err(4));
    assert_eq!(ok::<i32, &str>(1).map_err(str::len), ok(1));
}

#[rstest]
fn outcome_map_or_else_selects_branch() {
    let render = |value: Outcome<i32, &str>| value.map_or_else(|e| format!("error: {e}"), |n| n.to_string());
    assert_eq!(render(ok(5)), "5");
    assert_eq!(render(err("bad")), "error: bad");
    assert_eq!(err::<i32, &str>("x").map_or(-1, |n| n * 2), -1);
}

#[rstest]
fn outcome_matches_selects_branch() {
    let length = |value: Outcome<String, LoadError>| value.matches(|s| s.len(), |_| 0);
    assert_eq!(length(ok("abc".to_string())), 3);
    assert_eq!(length(err(LoadError::Corrupt { offset: 0 })), 0);
}

#[rstest]
fn outcome_flatten_one_level() {
    let nested: Outcome<Outcome<i32, &str>, &str> = ok(ok(1));
    assert_eq!(nested.flatten(), ok(1));
    let inner_failure: Outcome<Outcome<i32, &str>, &str> = ok(err("inner"));
    assert_eq!(inner_failure.flatten(), err("inner"));
    let outer_failure: Outcome<Outcome<i32, &str>, &str> = err("outer");
    assert_eq!(outer_failure.flatten(), err("outer"));
}

// =============================================================================
// Sequencing and Fallback
// =============================================================================

#[rstest]
fn outcome_flat_map_short_circuits() {
    let calls = Cell::new(0);
    let result = err::<i32, &str>("first").flat_map(|n| {
        calls.set(calls.get() + 1);
        ok(n)
    });
    assert_eq!(result, err("first"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn outcome_flat_map_err_recovers() {
    let recovered: Outcome<i32, String> = err::<i32, &str>("missing").flat_map_err(|_| ok(0));
    assert_eq!(recovered, ok(0));
    let rethrown: Outcome<i32, String> =
        err::<i32, &str>("missing").flat_map_err(|e| err(e.to_uppercase()));
    assert_eq!(rethrown, err("MISSING".to_string()));
}

#[rstest]
#[case(ok(1), ok(2), ok(2))]
#[case(err("a"), ok(2), err("a"))]
#[case(ok(1), err("b"), err("b"))]
#[case(err("a"), err("b"), err("a"))]
fn outcome_and_returns_first_failure(
    #[case] left: Outcome<i32, &'static str>,
    #[case] right: Outcome<i32, &'static str>,
    #[case] expected: Outcome<i32, &'static str>,
) {
    assert_eq!(left.and(right), expected);
}

#[rstest]
#[case(ok(1), ok(2), ok(1))]
#[case(err("a"), ok(2), ok(2))]
#[case(ok(1), err("b"), ok(1))]
#[case(err("a"), err("b"), err("b"))]
fn outcome_or_returns_second_failure(
    #[case] left: Outcome<i32, &'static str>,
    #[case] right: Outcome<i32, &'static str>,
    #[case] expected: Outcome<i32, &'static str>,
) {
    assert_eq!(left.or(right), expected);
}

#[rstest]
fn outcome_or_else_receives_failure() {
    let fallback = err::<i32, &str>("primary").or_else(|e| err::<i32, String>(format!("{e} then backup")));
    assert_eq!(fallback, err("primary then backup".to_string()));
}

#[rstest]
fn outcome_and_then_is_flat_map() {
    let parse = |s: &str| Outcome::from(s.parse::<i32>()).map_err(|e| e.to_string());
    assert_eq!(ok::<&str, String>("12").and_then(parse), ok(12));
    assert!(ok::<&str, String>("x").and_then(parse).is_failure());
}

// =============================================================================
// Taps
// =============================================================================

#[rstest]
fn outcome_taps_fire_on_their_branch() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let kept = ok::<i32, &str>(3)
        .if_success(|n| successes.set(successes.get() + n))
        .if_failure(|_| failures.set(failures.get() + 1));
    assert_eq!(kept, ok(3));

    err::<i32, &str>("x")
        .if_success(|_| successes.set(100))
        .if_failure(|_| failures.set(failures.get() + 1));

    assert_eq!(successes.get(), 3);
    assert_eq!(failures.get(), 1);
}

// =============================================================================
// Conversion and Iteration
// =============================================================================

#[rstest]
fn outcome_to_maybe_conversions() {
    assert_eq!(ok::<i32, &str>(1).ok_to_option(), Maybe::Present(1));
    assert_eq!(err::<i32, &str>("x").ok_to_option(), Maybe::Absent);
    assert_eq!(err::<i32, &str>("x").err_to_option(), Maybe::Present("x"));
    assert_eq!(ok::<i32, &str>(1).err_to_option(), Maybe::Absent);
}

#[rstest]
fn outcome_result_conversions() {
    let from_result: Outcome<i32, String> = Outcome::from(Err("boom".to_string()));
    assert_eq!(from_result, err("boom".to_string()));
    assert_eq!(ok::<i32, &str>(2).into_result(), Ok(2));
    assert_eq!(Result::<i32, &str>::from(err("x")), Err("x"));
}

#[rstest]
fn outcome_iterates_success_payload() {
    assert_eq!(ok::<i32, &str>(7).iter().copied().collect::<Vec<_>>(), vec![7]);
    assert_eq!(err::<i32, &str>("x").iter().count(), 0);
    assert_eq!(ok::<i32, &str>(7).into_iter().collect::<Vec<_>>(), vec![7]);
}
