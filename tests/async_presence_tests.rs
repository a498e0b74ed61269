//! Tests for `AsyncPresence<T>`.
//!
//! Every combinator defers to the synchronous `Presence` after the wrapped
//! future settles, so these tests focus on sequencing, laziness and the
//! async-suffixed variants.

#![cfg(feature = "async")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use railway::control::{Outcome, Presence, UnwrapError};
use railway::effect::AsyncPresence;
use rstest::rstest;

async fn later<T>(value: T) -> T {
    tokio::time::sleep(Duration::from_millis(1)).await;
    value
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[tokio::test]
async fn constructors_settle_to_their_presence() {
    assert_eq!(AsyncPresence::present(1).await, Presence::Present(1));
    assert_eq!(AsyncPresence::<i32>::absent().await, Presence::Absent);
    assert_eq!(Presence::present("x").to_async().await, Presence::Present("x"));
    assert_eq!(
        AsyncPresence::from_future(async { Presence::present(2) }).await,
        Presence::Present(2)
    );
}

#[rstest]
#[tokio::test]
async fn from_option_future_converts_the_option() {
    let found = AsyncPresence::from_option_future(async { Some(3) });
    let missing = AsyncPresence::<i32>::from_option_future(async { None });
    assert_eq!(found.await, Presence::Present(3));
    assert_eq!(missing.await, Presence::Absent);
}

#[rstest]
#[tokio::test]
async fn nothing_runs_until_awaited() {
    let counter = Arc::new(AtomicUsize::new(0));
    let observed = Arc::clone(&counter);
    let pending = AsyncPresence::new(async move {
        observed.fetch_add(1, Ordering::SeqCst);
        Presence::present(1)
    })
    .map(|value| value + 1);

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(pending.await, Presence::Present(2));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
#[tokio::test]
async fn stages_run_in_call_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&log);
    let second = Arc::clone(&log);
    let third = Arc::clone(&log);

    let result = AsyncPresence::present(1)
        .map_async(move |value| async move {
            later(()).await;
            first.lock().unwrap().push("map_async");
            value + 1
        })
        .map(move |value| {
            second.lock().unwrap().push("map");
            value * 10
        })
        .and_then_async(move |value| async move {
            third.lock().unwrap().push("and_then_async");
            Presence::present(value + 5)
        })
        .await;

    assert_eq!(result, Presence::Present(25));
    assert_eq!(*log.lock().unwrap(), vec!["map_async", "map", "and_then_async"]);
}

#[rstest]
#[tokio::test]
async fn absent_skips_every_transform() {
    let counter = Arc::new(AtomicUsize::new(0));
    let map_counter = Arc::clone(&counter);
    let then_counter = Arc::clone(&counter);

    let result = AsyncPresence::<i32>::absent()
        .map(move |value| {
            map_counter.fetch_add(1, Ordering::SeqCst);
            value
        })
        .and_then_async(move |value| async move {
            then_counter.fetch_add(1, Ordering::SeqCst);
            Presence::present(value)
        })
        .await;

    assert_eq!(result, Presence::Absent);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Filtering and Filling
// =============================================================================

#[rstest]
#[case(4, Presence::Present(4))]
#[case(3, Presence::Absent)]
#[tokio::test]
async fn filter_async_awaits_predicate(#[case] input: i32, #[case] expected: Presence<i32>) {
    let filtered = AsyncPresence::present(input)
        .filter_async(|value| {
            let even = value % 2 == 0;
            async move { later(even).await }
        })
        .await;
    assert_eq!(filtered, expected);
}

#[rstest]
#[tokio::test]
async fn filter_and_insert_mirror_sync_behavior() {
    assert_eq!(AsyncPresence::present(3).filter(|value| *value > 5).await, Presence::Absent);
    assert_eq!(AsyncPresence::absent().insert(9).await, Presence::Present(9));
    assert_eq!(AsyncPresence::present(1).insert(9).await, Presence::Present(1));
    assert_eq!(AsyncPresence::absent().insert_with(|| 4).await, Presence::Present(4));
    assert_eq!(
        AsyncPresence::absent().insert_with_async(|| later(8)).await,
        Presence::Present(8)
    );
}

#[rstest]
#[tokio::test]
async fn or_else_variants_only_run_when_absent() {
    let recovered = AsyncPresence::<i32>::absent().or_else(|| Presence::present(1)).await;
    assert_eq!(recovered, Presence::Present(1));

    let kept = AsyncPresence::present(2)
        .or_else_async(|| later(Presence::present(99)))
        .await;
    assert_eq!(kept, Presence::Present(2));
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
#[tokio::test]
async fn and_or_xor_accept_sync_or_async_operands() {
    let sync_operand: Presence<&str> = Presence::present("b");
    assert_eq!(AsyncPresence::present(1).and(sync_operand).await, Presence::Present("b"));
    assert_eq!(
        AsyncPresence::<i32>::absent().and(AsyncPresence::present("b")).await,
        Presence::Absent
    );

    assert_eq!(
        AsyncPresence::<i32>::absent().or(AsyncPresence::present(2)).await,
        Presence::Present(2)
    );

    let absent: Presence<i32> = Presence::absent();
    assert_eq!(AsyncPresence::present(1).xor(absent).await, Presence::Present(1));
    assert_eq!(AsyncPresence::present(1).xor(Presence::present(2)).await, Presence::Absent);
}

#[rstest]
#[tokio::test]
async fn zip_variants_combine_values() {
    assert_eq!(
        AsyncPresence::present(2).zip(Presence::present(3)).await,
        Presence::Present((2, 3))
    );
    assert_eq!(
        AsyncPresence::present(2)
            .zip_with(AsyncPresence::present(3), |a: i32, b: i32| a + b)
            .unwrap()
            .await,
        5
    );
    assert_eq!(
        AsyncPresence::present(2)
            .zip_with_async(Presence::<i32>::absent(), |a: i32, b: i32| later(a + b))
            .await,
        Presence::Absent
    );
}

// =============================================================================
// Terminal Operations
// =============================================================================

#[rstest]
#[tokio::test]
async fn terminal_operations_return_plain_values() {
    assert_eq!(AsyncPresence::present(5).unwrap().await, 5);
    assert_eq!(AsyncPresence::<i32>::absent().unwrap_or(7).await, 7);
    assert_eq!(AsyncPresence::<i32>::absent().unwrap_or_else(|| 8).await, 8);
    assert_eq!(
        AsyncPresence::<i32>::absent().try_unwrap().await,
        Err(UnwrapError::EmptyAccess)
    );
    assert_eq!(
        AsyncPresence::present(2).fold(|value| value * 3, || 0).await,
        6
    );
    assert!(AsyncPresence::present(2).test(|value| *value == 2).await);
    assert!(!AsyncPresence::<i32>::absent().test_async(|_| async { true }).await);
    assert_eq!(AsyncPresence::present(1).into_option().await, Some(1));
}

#[tokio::test]
#[should_panic(expected = "on an `Absent` value")]
async fn unwrap_on_absent_panics() {
    let _ = AsyncPresence::<i32>::absent().unwrap().await;
}

// =============================================================================
// Conversion and Sharing
// =============================================================================

#[rstest]
#[tokio::test]
async fn to_outcome_variants_build_the_error_lazily() {
    let missing = AsyncPresence::<i32>::absent().to_outcome(|| "E");
    assert_eq!(missing.await, Outcome::Failure("E"));

    let found = AsyncPresence::present(1).to_outcome_async(|| later("unused"));
    let found: Outcome<i32, &str> = found.await;
    assert_eq!(found, Outcome::Success(1));

    let missing = AsyncPresence::<i32>::absent().to_outcome_async(|| later("late"));
    assert_eq!(missing.unwrap_err().await, "late");
}

#[rstest]
#[tokio::test]
async fn shared_lets_several_observers_await_one_computation() {
    let counter = Arc::new(AtomicUsize::new(0));
    let observed = Arc::clone(&counter);
    let shared = AsyncPresence::new(async move {
        observed.fetch_add(1, Ordering::SeqCst);
        Presence::present(String::from("once"))
    })
    .shared();

    let (first, second) = tokio::join!(shared.clone(), shared);
    assert_eq!(first, second);
    assert_eq!(first, Presence::Present(String::from("once")));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn independent_chains_can_run_on_other_tasks() {
    let handle = tokio::spawn(AsyncPresence::present(2).map_async(|value| later(value * 2)));
    let joined = handle.await.unwrap();
    assert_eq!(joined, Presence::Present(4));
}
