//! Property-based tests for the type class instances.
//!
//! The trait methods are called through their trait-specific names
//! (`fmap`, `flat_map`, `alt`) because the inherent `map` and `and_then`
//! would otherwise take precedence.

#![cfg(feature = "typeclass")]

use proptest::prelude::*;
use railway::control::{Outcome, Presence};
use railway::typeclass::{Alternative, Applicative, Bifunctor, Functor, Monad};

fn presence_strategy() -> impl Strategy<Value = Presence<i32>> {
    any::<Option<i32>>().prop_map(Presence::from)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    any::<Result<i32, String>>().prop_map(Outcome::from)
}

fn decrement(value: i32) -> Presence<i32> {
    value.checked_sub(1).into()
}

fn negate(value: i32) -> Outcome<i32, String> {
    value
        .checked_neg()
        .map_or_else(|| Outcome::failure("overflow".to_string()), Outcome::success)
}

// =============================================================================
// Functor
// =============================================================================

proptest! {
    #[test]
    fn prop_presence_fmap_identity(value in presence_strategy()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_outcome_fmap_composition(value in outcome_strategy()) {
        let function1 = |n: i32| n.wrapping_mul(5);
        let function2 = |n: i32| n.to_string();

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_fmap_ref_agrees_with_fmap(value in outcome_strategy()) {
        prop_assert_eq!(value.fmap_ref(|x| x.wrapping_add(1)), value.fmap(|x| x.wrapping_add(1)));
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    #[test]
    fn prop_presence_homomorphism(value in any::<i32>()) {
        let function = |x: i32| x.wrapping_mul(2);
        let left = <Presence<()>>::pure(function).apply(<Presence<()>>::pure(value));
        prop_assert_eq!(left, <Presence<()>>::pure(function(value)));
    }

    #[test]
    fn prop_outcome_applicative_identity(value in outcome_strategy()) {
        let identity: Outcome<fn(i32) -> i32, String> = Outcome::success(|x| x);
        prop_assert_eq!(identity.apply(value.clone()), value);
    }

    #[test]
    fn prop_presence_map2_matches_zip_with(left in presence_strategy(), right in presence_strategy()) {
        prop_assert_eq!(
            left.map2(right, i32::wrapping_add),
            left.zip_with(right, i32::wrapping_add)
        );
    }
}

// =============================================================================
// Monad
// =============================================================================

proptest! {
    #[test]
    fn prop_presence_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Presence<()>>::pure(value).flat_map(decrement), decrement(value));
    }

    #[test]
    fn prop_presence_right_identity(value in presence_strategy()) {
        prop_assert_eq!(value.flat_map(Presence::present), value);
    }

    #[test]
    fn prop_outcome_associativity(value in outcome_strategy()) {
        let left = value.clone().flat_map(negate).flat_map(negate);
        let right = value.flat_map(|x| negate(x).flat_map(negate));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Alternative and Bifunctor
// =============================================================================

proptest! {
    #[test]
    fn prop_alternative_identity(value in presence_strategy()) {
        prop_assert_eq!(<Presence<i32>>::empty::<i32>().alt(value), value);
        prop_assert_eq!(value.alt(<Presence<i32>>::empty::<i32>()), value);
    }

    #[test]
    fn prop_alternative_associativity(
        first in presence_strategy(),
        second in presence_strategy(),
        third in presence_strategy(),
    ) {
        prop_assert_eq!(first.alt(second).alt(third), first.alt(second.alt(third)));
    }

    #[test]
    fn prop_bifunctor_identity(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().bimap(|e| e, |x| x), value);
    }

    #[test]
    fn prop_bifunctor_consistency(value in outcome_strategy()) {
        let by_bimap = value.clone().bimap(|e: String| e.len(), |x: i32| x.wrapping_add(1));
        let by_parts = value.first(|e: String| e.len()).second(|x: i32| x.wrapping_add(1));
        prop_assert_eq!(by_bimap, by_parts);
    }
}
