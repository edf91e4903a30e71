//! `Monad`: chaining steps that depend on earlier results.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where the next
//! computation depends on the value produced by the previous one. For
//! [`Maybe`] and [`Outcome`] the chain stops at the first `Absent` or
//! `Failure`; later functions are never called.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                  // left identity
//! m.flat_map(pure) == m                                        // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use explicit::typeclass::Monad;
//! use explicit::{Maybe, none, some};
//!
//! fn parse_positive(input: &str) -> Maybe<i32> {
//!     match input.parse::<i32>() {
//!         Ok(n) if n > 0 => some(n),
//!         _ => none(),
//!     }
//! }
//!
//! assert_eq!(some("42").flat_map(parse_positive), some(42));
//! assert_eq!(some("-1").flat_map(parse_positive), none());
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Applicatives whose next step may depend on the previous payload.
pub trait Monad: Applicative {
    /// Feeds the payload to `function` and returns its container as is.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Returns `next` when `self` holds a value, ignoring that value.
    ///
    /// An `Absent` or `Failure` in `self` wins and `next` is dropped.
    ///
    /// ```rust
    /// use explicit::typeclass::Monad;
    /// use explicit::{Outcome, err, ok};
    ///
    /// let started: Outcome<(), &str> = ok(());
    /// assert_eq!(started.then(ok(5)), ok(5));
    ///
    /// let failed: Outcome<(), &str> = err("not started");
    /// assert_eq!(failed.then(ok(5)), err("not started"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        Self::flat_map(self, function)
    }
}
