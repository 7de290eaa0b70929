//! Property-based tests for `Outcome` laws.
//!
//! - **Functor identity and composition** over the success channel
//! - **Monad left identity, right identity and associativity**
//! - **Failure-channel fallback**: `or` keeps the second failure, `and`
//!   keeps the first
//! - **Cross conversion** between `Outcome`, `Maybe` and `Result`

use proptest::prelude::*;
use twofold::typeclass::Semigroup;
use twofold::{Maybe, Outcome, err, ok};

fn any_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{1,6}").prop_map(Outcome::from)
}

fn checked_double(n: i32) -> Outcome<i32, String> {
    n.checked_mul(2)
        .map_or_else(|| err(format!("overflow doubling {n}")), ok)
}

fn non_negative(n: i32) -> Outcome<i32, String> {
    if n >= 0 { ok(n) } else { err(format!("negative {n}")) }
}

// =============================================================================
// Functor and Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_functor_identity(value in any_outcome()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_outcome_functor_composition(value in any_outcome()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(
            value.clone().map(function1).map(function2),
            value.map(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(ok(value).flat_map(checked_double), checked_double(value));
    }

    #[test]
    fn prop_outcome_right_identity(value in any_outcome()) {
        prop_assert_eq!(value.clone().flat_map(ok), value);
    }

    #[test]
    fn prop_outcome_associativity(value in any_outcome()) {
        prop_assert_eq!(
            value.clone().flat_map(checked_double).flat_map(non_negative),
            value.flat_map(|x| checked_double(x).flat_map(non_negative))
        );
    }

    #[test]
    fn prop_outcome_map_err_leaves_success(value in any::<i32>()) {
        prop_assert_eq!(ok::<i32, String>(value).map_err(|e| e.len()), ok(value));
    }
}

// =============================================================================
// Fallback
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_or_keeps_second_failure(left in any_outcome(), right in any_outcome()) {
        let expected = if left.is_success() { left.clone() } else { right.clone() };
        prop_assert_eq!(left.or(right), expected);
    }

    #[test]
    fn prop_outcome_and_keeps_first_failure(left in any_outcome(), right in any_outcome()) {
        let expected = if left.is_failure() { left.clone() } else { right.clone() };
        prop_assert_eq!(left.and(right), expected);
    }

    #[test]
    fn prop_outcome_unwrap_or_matches_result(value in any_outcome(), default in any::<i32>()) {
        prop_assert_eq!(value.clone().unwrap_or(default), value.into_result().unwrap_or(default));
    }

    #[test]
    fn prop_outcome_semigroup_first_failure(
        first in prop::result::maybe_ok("[a-z]{0,3}", any::<u8>()),
        second in prop::result::maybe_ok("[a-z]{0,3}", any::<u8>())
    ) {
        let left = Outcome::from(first.clone());
        let right = Outcome::from(second.clone());
        let expected = match (first, second) {
            (Ok(a), Ok(b)) => Ok(a + &b),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        prop_assert_eq!(left.combine(right).into_result(), expected);
    }
}

// =============================================================================
// Cross Conversion
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_exactly_one_side_converts(value in any_outcome()) {
        let success_side = value.clone().ok_to_option();
        let failure_side = value.clone().err_to_option();
        prop_assert_ne!(success_side.is_present(), failure_side.is_present());
        prop_assert_eq!(success_side.is_present(), value.is_success());
    }

    #[test]
    fn prop_maybe_to_outcome_and_back(value in prop::option::of(any::<i32>())) {
        let maybe = Maybe::from(value);
        prop_assert_eq!(maybe.ok_or("absent").ok_to_option(), maybe);
    }

    #[test]
    fn prop_outcome_result_round_trip(value in any_outcome()) {
        prop_assert_eq!(Outcome::from(value.clone().into_result()), value);
    }
}
