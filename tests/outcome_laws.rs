//! Property-based tests for the laws `Outcome` satisfies.
//!
//! ## Functor Laws
//!
//! 1. **Identity**: `fa.map(|x| x) == fa`
//! 2. **Composition**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! 3. **Left Identity**: `ok(a).flat_map(f) == f(a)`
//! 4. **Right Identity**: `m.flat_map(ok) == m`
//! 5. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! The same laws hold on the failure side for `map_error` and `flat_map_error`.

use explicit::{Outcome, err, ok};
use proptest::prelude::*;

fn any_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,8}").prop_map(Outcome::from)
}

fn halve(value: i32) -> Outcome<i32, String> {
    if value % 2 == 0 {
        ok(value / 2)
    } else {
        err(format!("{value} is odd"))
    }
}

fn bounded(value: i32) -> Outcome<i32, String> {
    if value.unsigned_abs() < 1000 {
        ok(value)
    } else {
        err("out of range".to_string())
    }
}

fn recover_short(error: String) -> Outcome<i32, String> {
    if error.len() < 4 {
        ok(0)
    } else {
        err(error)
    }
}

proptest! {
    #[test]
    fn prop_outcome_functor_identity(value in any_outcome()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_outcome_functor_composition(value in any_outcome()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);
        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_map_error_identity(value in any_outcome()) {
        prop_assert_eq!(value.clone().map_error(|e| e), value);
    }

    #[test]
    fn prop_outcome_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(ok::<i32, String>(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_outcome_monad_right_identity(value in any_outcome()) {
        prop_assert_eq!(value.clone().flat_map(ok), value);
    }

    #[test]
    fn prop_outcome_monad_associativity(value in any_outcome()) {
        let left = value.clone().flat_map(halve).flat_map(bounded);
        let right = value.flat_map(|x| halve(x).flat_map(bounded));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_flat_map_error_right_identity(value in any_outcome()) {
        prop_assert_eq!(value.clone().flat_map_error(err), value);
    }

    #[test]
    fn prop_outcome_flat_map_error_left_identity(error in "[a-z]{0,8}") {
        let failure: Outcome<i32, String> = err(error.clone());
        prop_assert_eq!(failure.flat_map_error(recover_short), recover_short(error));
    }

    #[test]
    fn prop_outcome_projections_are_exclusive(value in any_outcome()) {
        let has_value = value.clone().value().is_some();
        let has_error = value.clone().error().is_some();
        prop_assert!(has_value != has_error);
        prop_assert_eq!(has_value, value.is_ok());
    }

    #[test]
    fn prop_outcome_agrees_with_result(value in prop::result::maybe_ok(any::<i32>(), any::<u8>())) {
        let outcome = Outcome::from(value);
        let doubled: Result<i32, u8> = outcome.map(|x| x.wrapping_mul(2)).into();
        prop_assert_eq!(doubled, value.map(|x| x.wrapping_mul(2)));
    }
}

#[cfg(feature = "typeclass")]
mod typeclass_laws {
    use super::*;
    use explicit::typeclass::{Applicative, Bifunctor, Functor};

    proptest! {
        #[test]
        fn prop_fmap_agrees_with_map(value in any_outcome()) {
            prop_assert_eq!(value.clone().fmap(|x| x.wrapping_sub(3)), value.map(|x| x.wrapping_sub(3)));
        }

        #[test]
        fn prop_bimap_identity(value in any_outcome()) {
            prop_assert_eq!(value.clone().bimap(|e| e, |x| x), value);
        }

        #[test]
        fn prop_bimap_is_first_then_second(value in any_outcome()) {
            let left = value.clone().bimap(|e: String| e.len(), |x: i32| x.wrapping_neg());
            let right = value.first(|e: String| e.len()).second(|x: i32| x.wrapping_neg());
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_map2_returns_first_failure(x in any_outcome(), y in any_outcome()) {
            let expected = match (&x, &y) {
                (Outcome::Failure(error), _) | (Outcome::Success(_), Outcome::Failure(error)) => {
                    err(error.clone())
                }
                (Outcome::Success(a), Outcome::Success(b)) => ok(a.wrapping_add(*b)),
            };
            prop_assert_eq!(x.map2(y, i32::wrapping_add), expected);
        }
    }
}
