#![cfg(feature = "async")]
//! Property-based tests for the laws of `AsyncPresence` and `AsyncOutcome`.
//!
//! Every law is checked twice: the two sides agree with each other, and the
//! awaited asynchronous chain agrees with the same chain run on the
//! synchronous container.
//!
//! - **Functor**: `map(id) == id` and `map(f).map(g) == map(g . f)`
//! - **Monad associativity** across `and_then` and `and_then_async`
//! - **Short-circuit identities** for `and`, `or` and `xor`
//! - **Absorption** by `absent()` and `failure(e)`

use std::future::{Ready, ready};

use proptest::prelude::*;
use railway::control::{Outcome, Presence};
use railway::effect::{AsyncOutcome, AsyncPresence};

fn presence_strategy() -> impl Strategy<Value = Presence<i32>> {
    any::<Option<i32>>().prop_map(Presence::from)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    any::<Result<i32, String>>().prop_map(Outcome::from)
}

fn block_on<F: Future>(future: F) -> F::Output {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    runtime.block_on(future)
}

fn halve(value: i32) -> Presence<i32> {
    if value % 2 == 0 { Presence::present(value / 2) } else { Presence::absent() }
}

fn shrink(value: i32) -> Presence<i32> {
    if value > 0 { Presence::present(value - 1) } else { Presence::absent() }
}

fn checked_double(value: i32) -> Outcome<i32, String> {
    value
        .checked_mul(2)
        .map_or_else(|| Outcome::failure("overflow".to_string()), Outcome::success)
}

fn non_negative(value: i32) -> Outcome<i32, String> {
    if value >= 0 {
        Outcome::success(value)
    } else {
        Outcome::failure(format!("{value} is negative"))
    }
}

// =============================================================================
// AsyncPresence Functor and Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_async_presence_identity_law(value in presence_strategy()) {
        let awaited = block_on(AsyncPresence::from(value).map(|x| x));
        prop_assert_eq!(awaited, value);
    }

    #[test]
    fn prop_async_presence_composition_law(value in presence_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        let left = block_on(AsyncPresence::from(value).map(function1).map(function2));
        let right = block_on(AsyncPresence::from(value).map(move |x| function2(function1(x))));
        prop_assert_eq!(left, right);
        prop_assert_eq!(left, value.map(function1).map(function2));
    }

    #[test]
    fn prop_async_presence_map_async_agrees_with_map(value in presence_strategy()) {
        let awaited = block_on(AsyncPresence::from(value).map_async(|x| ready(x.wrapping_sub(7))));
        prop_assert_eq!(awaited, value.map(|x| x.wrapping_sub(7)));
    }

    #[test]
    fn prop_async_presence_associativity_law(value in presence_strategy()) {
        let left = block_on(
            AsyncPresence::from(value)
                .and_then(halve)
                .and_then_async(|x| ready(shrink(x))),
        );
        let right = block_on(
            AsyncPresence::from(value)
                .and_then_async(|x| AsyncPresence::from(halve(x)).and_then(shrink)),
        );
        prop_assert_eq!(left, right);
        prop_assert_eq!(left, value.and_then(halve).and_then(shrink));
    }

    #[test]
    fn prop_async_presence_left_identity(value in any::<i32>()) {
        let awaited = block_on(AsyncPresence::present(value).and_then_async(|x| ready(halve(x))));
        prop_assert_eq!(awaited, halve(value));
    }

    #[test]
    fn prop_async_presence_right_identity(value in presence_strategy()) {
        let awaited = block_on(AsyncPresence::from(value).and_then_async(AsyncPresence::present));
        prop_assert_eq!(awaited, value);
    }
}

// =============================================================================
// AsyncPresence Combination and Absorption
// =============================================================================

proptest! {
    #[test]
    fn prop_async_presence_and_or_xor_agree_with_sync(
        left in presence_strategy(),
        right in presence_strategy(),
    ) {
        prop_assert_eq!(
            block_on(AsyncPresence::from(left).and::<i32, _>(right)),
            left.and(right)
        );
        prop_assert_eq!(block_on(AsyncPresence::from(left).or(right)), left.or(right));
        prop_assert_eq!(block_on(AsyncPresence::from(left).xor(right)), left.xor(right));
    }

    #[test]
    fn prop_async_presence_absent_is_identity_for_or_and_xor(value in presence_strategy()) {
        prop_assert_eq!(block_on(AsyncPresence::<i32>::absent().or(value)), value);
        prop_assert_eq!(block_on(AsyncPresence::from(value).or(Presence::<i32>::absent())), value);
        prop_assert_eq!(block_on(AsyncPresence::from(value).xor(Presence::<i32>::absent())), value);
        prop_assert_eq!(block_on(AsyncPresence::<i32>::absent().xor(value)), value);
    }

    #[test]
    fn prop_async_presence_absent_absorbs_and(value in presence_strategy()) {
        prop_assert_eq!(
            block_on(AsyncPresence::<i32>::absent().and::<i32, _>(value)),
            Presence::Absent
        );
        prop_assert_eq!(
            block_on(AsyncPresence::from(value).and::<i32, _>(Presence::<i32>::absent())),
            Presence::Absent
        );
    }

    #[test]
    fn prop_async_presence_absent_absorbs_transforms(offset in any::<i32>()) {
        let settled = block_on(
            AsyncPresence::<i32>::absent()
                .map(move |x| x.wrapping_add(offset))
                .and_then_async(|_| -> Ready<Presence<i32>> { panic!("must not run") })
                .filter(|_| panic!("must not run"))
                .zip_with(Presence::present(offset), |x: i32, y: i32| x.wrapping_add(y)),
        );
        prop_assert_eq!(settled, Presence::Absent);
    }
}

// =============================================================================
// AsyncOutcome Functor and Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_async_outcome_identity_law(value in outcome_strategy()) {
        let awaited = block_on(AsyncOutcome::from(value.clone()).map(|x| x));
        prop_assert_eq!(awaited, value);
    }

    #[test]
    fn prop_async_outcome_composition_law(value in outcome_strategy()) {
        let function1 = |n: i32| n.wrapping_mul(5);
        let function2 = |n: i32| n.to_string();

        let left = block_on(AsyncOutcome::from(value.clone()).map(function1).map(function2));
        let right = block_on(
            AsyncOutcome::from(value.clone()).map(move |x| function2(function1(x))),
        );
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left, value.map(function1).map(function2));
    }

    #[test]
    fn prop_async_outcome_associativity_law(value in outcome_strategy()) {
        let left = block_on(
            AsyncOutcome::from(value.clone())
                .and_then(checked_double)
                .and_then_async(|x| ready(non_negative(x))),
        );
        let right = block_on(
            AsyncOutcome::from(value.clone())
                .and_then_async(|x| AsyncOutcome::from(checked_double(x)).and_then(non_negative)),
        );
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left, value.and_then(checked_double).and_then(non_negative));
    }

    #[test]
    fn prop_async_outcome_right_identity(value in outcome_strategy()) {
        let awaited = block_on(
            AsyncOutcome::from(value.clone()).and_then_async(AsyncOutcome::success),
        );
        prop_assert_eq!(awaited, value);
    }
}

// =============================================================================
// AsyncOutcome Combination and Absorption
// =============================================================================

proptest! {
    #[test]
    fn prop_async_outcome_and_or_agree_with_sync(
        left in outcome_strategy(),
        right in outcome_strategy(),
    ) {
        prop_assert_eq!(
            block_on(AsyncOutcome::from(left.clone()).and::<i32, _>(right.clone())),
            left.clone().and(right.clone())
        );
        prop_assert_eq!(
            block_on(AsyncOutcome::from(left.clone()).or::<String, _>(right.clone())),
            left.or(right)
        );
    }

    #[test]
    fn prop_async_outcome_failure_absorbs_success_transforms(error in any::<String>()) {
        let settled = block_on(
            AsyncOutcome::<i32, String>::failure(error.clone())
                .map(|x| x.wrapping_add(1))
                .map_async(|_| -> Ready<i32> { panic!("must not run") })
                .and_then(checked_double)
                .and_then_async(|_| -> Ready<Outcome<i32, String>> { panic!("must not run") })
                .and::<i32, _>(Outcome::<i32, String>::success(0)),
        );
        prop_assert_eq!(settled, Outcome::Failure(error));
    }

    #[test]
    fn prop_async_outcome_success_ignores_error_transforms(value in any::<i32>()) {
        let settled = block_on(
            AsyncOutcome::<i32, String>::success(value)
                .map_err_async(|_| -> Ready<usize> { panic!("must not run") })
                .or_else(|_| -> Outcome<i32, u8> { panic!("must not run") })
                .or::<u8, _>(Outcome::<i32, u8>::failure(0)),
        );
        prop_assert_eq!(settled, Outcome::Success(value));
    }
}
