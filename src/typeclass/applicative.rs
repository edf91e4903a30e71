//! `Applicative`: lifting plain values and combining independent ones.
//!
//! `pure` wraps a value as `Present` or `Success`. `map2` and `map3` run a
//! function only when every argument holds a value. Otherwise the result is
//! `Absent`, or the first `Failure` counted from the left. Errors are never
//! merged, so validation stops reporting at the first bad field.
//!
//! Instances are expected to satisfy
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))
//! value.map2(pure(()), |a, _| a) == value
//! ```
//!
//! ```rust
//! use explicit::typeclass::Applicative;
//! use explicit::{Maybe, none, some};
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, some(42));
//!
//! assert_eq!(some(3).map2(some(4), |a, b| a + b), some(7));
//! assert_eq!(some(3).map2(none::<i32>(), |a, b| a + b), none());
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Functors that can lift a plain value and zip independent values.
pub trait Applicative: Functor {
    /// Wraps `value` in the success variant of this constructor.
    ///
    /// ```rust
    /// use explicit::typeclass::Applicative;
    /// use explicit::{Outcome, ok};
    ///
    /// let lifted: Outcome<String, ()> = <Outcome<(), ()>>::pure("hello".to_string());
    /// assert_eq!(lifted, ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Calls `function` with both payloads when both are present.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Three-argument form of [`Applicative::map2`].
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two payloads.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Calls a wrapped function with a wrapped argument.
    ///
    /// ```rust
    /// use explicit::typeclass::Applicative;
    /// use explicit::{Maybe, some};
    ///
    /// let increment: Maybe<fn(i32) -> i32> = Maybe::Present(|x| x + 1);
    /// assert_eq!(increment.apply(some(5)), some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{none, some};
    use crate::outcome::{err, ok};
    use rstest::rstest;

    #[rstest]
    fn maybe_map3_requires_all_present() {
        assert_eq!(some(1).map3(some(2), some(3), |a, b, c| a + b + c), some(6));
        assert_eq!(some(1).map3(none::<i32>(), some(3), |a, b, c| a + b + c), none());
    }

    #[rstest]
    fn outcome_map2_returns_first_failure() {
        let first: Outcome<i32, &str> = err("first");
        let second: Outcome<i32, &str> = err("second");
        assert_eq!(first.map2(second, |a, b| a + b), err("first"));
    }

    #[rstest]
    fn outcome_map3_returns_first_failure_in_argument_order() {
        let first: Outcome<i32, &str> = ok(1);
        let second: Outcome<i32, &str> = err("second");
        let third: Outcome<i32, &str> = err("third");
        assert_eq!(first.map3(second, third, |a, b, c| a + b + c), err("second"));
    }

    #[rstest]
    fn product_pairs_payloads() {
        assert_eq!(some(1).product(some("a")), some((1, "a")));
        assert_eq!(some(1).product(none::<&str>()), none());
    }

    #[rstest]
    fn outcome_homomorphism_law() {
        let function = |x: i32| x * 3;
        let left: Outcome<i32, String> = <Outcome<(), String>>::pure(7).fmap(function);
        let right: Outcome<i32, String> = <Outcome<(), String>>::pure(function(7));
        assert_eq!(left, right);
    }

    #[rstest]
    fn validate_multiple_fields() {
        fn parse_age(input: &str) -> Outcome<u32, String> {
            input.parse::<u32>().map_err(|error| error.to_string()).into()
        }

        fn parse_name(input: &str) -> Outcome<String, String> {
            if input.is_empty() {
                err("name is empty".to_string())
            } else {
                ok(input.to_string())
            }
        }

        let person = parse_name("Ferris").map2(parse_age("7"), |name, age| format!("{name}:{age}"));
        assert_eq!(person, ok("Ferris:7".to_string()));

        let invalid = parse_name("").map2(parse_age("seven"), |name, age| format!("{name}:{age}"));
        assert_eq!(invalid, err("name is empty".to_string()));
    }
}
