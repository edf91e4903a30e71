//! Capability contracts for optional values and success-or-failure values.
//!
//! [`MaybeLike`] and [`OutcomeLike`] describe the operations of [`Maybe`] and
//! [`Outcome`] without naming the concrete type, so code can be written once
//! and accept either this crate's types or the standard `Option` and
//! `Result`. Return types are rebound through generic associated types, the
//! same technique the `typeclass::TypeConstructor` trait uses.
//!
//! # Examples
//!
//! ```rust
//! use explicit::{MaybeLike, some};
//!
//! fn describe<M: MaybeLike<u32>>(port: M) -> String {
//!     port.fold(|port| format!("listening on {port}"), || "disabled".to_string())
//! }
//!
//! assert_eq!(describe(some(8080)), "listening on 8080");
//! assert_eq!(describe(None::<u32>), "disabled");
//! ```

use crate::error::violate;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// The operations shared by every optional-value type.
///
/// Implementations must keep the semantics of [`Maybe`]: functions passed
/// to `map` and `flat_map` are never called when the value is absent, and
/// `unwrap` raises an [`InvariantViolation`](crate::InvariantViolation)
/// rather than a plain panic.
pub trait MaybeLike<T>: Sized {
    /// The same container holding an `A`.
    type Mapped<A>: MaybeLike<A>;

    /// The success-or-failure type produced by [`MaybeLike::ok_or`].
    type Converted<E>: OutcomeLike<T, E>;

    /// Returns `true` if a value is present.
    fn is_some(&self) -> bool;

    /// Returns `true` if no value is present.
    fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Applies a function to the contained value.
    fn map<A, F>(self, function: F) -> Self::Mapped<A>
    where
        F: FnOnce(T) -> A;

    /// Applies a function returning the same container, flattening one level.
    fn flat_map<A, F>(self, function: F) -> Self::Mapped<A>
    where
        F: FnOnce(T) -> Self::Mapped<A>;

    /// Calls `on_present` with the value, or `on_absent` if there is none.
    fn fold<A, F, G>(self, on_present: F, on_absent: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce() -> A;

    /// Converts into a success-or-failure value, failing with `error` when absent.
    fn ok_or<E>(self, error: E) -> Self::Converted<E>;

    /// Returns the contained value, or `default`.
    fn unwrap_or(self, default: T) -> T;

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`InvariantViolation`](crate::InvariantViolation) if
    /// no value is present.
    fn unwrap(self) -> T;
}

/// The operations shared by every success-or-failure type.
///
/// # Examples
///
/// ```rust
/// use explicit::{OutcomeLike, ok};
///
/// fn port_or_default<O: OutcomeLike<u16, String>>(configured: O) -> u16 {
///     configured.map_error(|reason| reason.len()).unwrap_or(80)
/// }
///
/// assert_eq!(port_or_default(ok::<u16, String>(8080)), 8080);
/// assert_eq!(port_or_default(Err::<u16, String>("unset".into())), 80);
/// ```
pub trait OutcomeLike<T, E>: Sized {
    /// The same container holding an `A` as its success value.
    type Mapped<A>: OutcomeLike<A, E>;

    /// The same container holding an `A` as its error.
    type MappedError<A>: OutcomeLike<T, A>;

    /// Returns `true` on success.
    fn is_ok(&self) -> bool;

    /// Returns `true` on failure.
    fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Applies a function to the success value.
    fn map<A, F>(self, function: F) -> Self::Mapped<A>
    where
        F: FnOnce(T) -> A;

    /// Applies a function to the error.
    fn map_error<A, F>(self, function: F) -> Self::MappedError<A>
    where
        F: FnOnce(E) -> A;

    /// Chains a fallible computation on the success value.
    fn flat_map<A, F>(self, function: F) -> Self::Mapped<A>
    where
        F: FnOnce(T) -> Self::Mapped<A>;

    /// Chains a computation on the error.
    fn flat_map_error<A, F>(self, function: F) -> Self::MappedError<A>
    where
        F: FnOnce(E) -> Self::MappedError<A>;

    /// Calls exactly one of `on_success` and `on_failure`.
    fn fold<A, F, G>(self, on_success: F, on_failure: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce(E) -> A;

    /// Returns the success value, or `default`.
    fn unwrap_or(self, default: T) -> T;

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`InvariantViolation`](crate::InvariantViolation) on failure.
    fn unwrap(self) -> T;

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`InvariantViolation`](crate::InvariantViolation) on success.
    fn unwrap_error(self) -> E;
}

// =============================================================================
// Maybe<T> / Outcome<T, E> Implementations
// =============================================================================

impl<T> MaybeLike<T> for Maybe<T> {
    type Mapped<A> = Maybe<A>;
    type Converted<E> = Outcome<T, E>;

    #[inline]
    fn is_some(&self) -> bool {
        Maybe::is_some(self)
    }

    #[inline]
    fn map<A, F>(self, function: F) -> Maybe<A>
    where
        F: FnOnce(T) -> A,
    {
        Maybe::map(self, function)
    }

    #[inline]
    fn flat_map<A, F>(self, function: F) -> Maybe<A>
    where
        F: FnOnce(T) -> Maybe<A>,
    {
        Maybe::flat_map(self, function)
    }

    #[inline]
    fn fold<A, F, G>(self, on_present: F, on_absent: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce() -> A,
    {
        Maybe::fold(self, on_present, on_absent)
    }

    #[inline]
    fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        Maybe::ok_or(self, error)
    }

    #[inline]
    fn unwrap_or(self, default: T) -> T {
        Maybe::unwrap_or(self, default)
    }

    #[inline]
    #[track_caller]
    fn unwrap(self) -> T {
        Maybe::unwrap(self)
    }
}

impl<T, E> OutcomeLike<T, E> for Outcome<T, E> {
    type Mapped<A> = Outcome<A, E>;
    type MappedError<A> = Outcome<T, A>;

    #[inline]
    fn is_ok(&self) -> bool {
        Outcome::is_ok(self)
    }

    #[inline]
    fn map<A, F>(self, function: F) -> Outcome<A, E>
    where
        F: FnOnce(T) -> A,
    {
        Outcome::map(self, function)
    }

    #[inline]
    fn map_error<A, F>(self, function: F) -> Outcome<T, A>
    where
        F: FnOnce(E) -> A,
    {
        Outcome::map_error(self, function)
    }

    #[inline]
    fn flat_map<A, F>(self, function: F) -> Outcome<A, E>
    where
        F: FnOnce(T) -> Outcome<A, E>,
    {
        Outcome::flat_map(self, function)
    }

    #[inline]
    fn flat_map_error<A, F>(self, function: F) -> Outcome<T, A>
    where
        F: FnOnce(E) -> Outcome<T, A>,
    {
        Outcome::flat_map_error(self, function)
    }

    #[inline]
    fn fold<A, F, G>(self, on_success: F, on_failure: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce(E) -> A,
    {
        Outcome::fold(self, on_success, on_failure)
    }

    #[inline]
    fn unwrap_or(self, default: T) -> T {
        Outcome::unwrap_or(self, default)
    }

    #[inline]
    #[track_caller]
    fn unwrap(self) -> T {
        Outcome::unwrap(self)
    }

    #[inline]
    #[track_caller]
    fn unwrap_error(self) -> E {
        Outcome::unwrap_error(self)
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<T> MaybeLike<T> for Option<T> {
    type Mapped<A> = Option<A>;
    type Converted<E> = Result<T, E>;

    #[inline]
    fn is_some(&self) -> bool {
        Option::is_some(self)
    }

    #[inline]
    fn map<A, F>(self, function: F) -> Option<A>
    where
        F: FnOnce(T) -> A,
    {
        Option::map(self, function)
    }

    #[inline]
    fn flat_map<A, F>(self, function: F) -> Option<A>
    where
        F: FnOnce(T) -> Option<A>,
    {
        self.and_then(function)
    }

    #[inline]
    fn fold<A, F, G>(self, on_present: F, on_absent: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce() -> A,
    {
        self.map_or_else(on_absent, on_present)
    }

    #[inline]
    fn ok_or<E>(self, error: E) -> Result<T, E> {
        Option::ok_or(self, error)
    }

    #[inline]
    fn unwrap_or(self, default: T) -> T {
        Option::unwrap_or(self, default)
    }

    #[inline]
    #[track_caller]
    fn unwrap(self) -> T {
        match self {
            Some(value) => value,
            None => violate("Option::unwrap", "None"),
        }
    }
}

impl<T, E> OutcomeLike<T, E> for Result<T, E> {
    type Mapped<A> = Result<A, E>;
    type MappedError<A> = Result<T, A>;

    #[inline]
    fn is_ok(&self) -> bool {
        Result::is_ok(self)
    }

    #[inline]
    fn map<A, F>(self, function: F) -> Result<A, E>
    where
        F: FnOnce(T) -> A,
    {
        Result::map(self, function)
    }

    #[inline]
    fn map_error<A, F>(self, function: F) -> Result<T, A>
    where
        F: FnOnce(E) -> A,
    {
        self.map_err(function)
    }

    #[inline]
    fn flat_map<A, F>(self, function: F) -> Result<A, E>
    where
        F: FnOnce(T) -> Result<A, E>,
    {
        self.and_then(function)
    }

    #[inline]
    fn flat_map_error<A, F>(self, function: F) -> Result<T, A>
    where
        F: FnOnce(E) -> Result<T, A>,
    {
        self.or_else(function)
    }

    #[inline]
    fn fold<A, F, G>(self, on_success: F, on_failure: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce(E) -> A,
    {
        self.map_or_else(on_failure, on_success)
    }

    #[inline]
    fn unwrap_or(self, default: T) -> T {
        Result::unwrap_or(self, default)
    }

    #[inline]
    #[track_caller]
    fn unwrap(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => violate("Result::unwrap", "Err"),
        }
    }

    #[inline]
    #[track_caller]
    fn unwrap_error(self) -> E {
        match self {
            Ok(_) => violate("Result::unwrap_error", "Ok"),
            Err(error) => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvariantViolation;
    use crate::maybe::{none, some};
    use crate::outcome::{err, ok};
    use rstest::rstest;

    fn describe<M: MaybeLike<i32>>(value: M) -> String {
        value
            .map(|x| x * 2)
            .fold(|x| format!("doubled {x}"), || "absent".to_string())
    }

    fn render<O: OutcomeLike<i32, String>>(value: O) -> String {
        value
            .map(|x| x + 1)
            .map_error(|reason| reason.to_uppercase())
            .fold(|x| format!("ok {x}"), |reason| format!("error {reason}"))
    }

    #[rstest]
    fn test_maybe_and_option_agree() {
        assert_eq!(describe(some(21)), describe(Some(21)));
        assert_eq!(describe(none::<i32>()), describe(None::<i32>));
        assert_eq!(describe(some(21)), "doubled 42");
        assert_eq!(describe(None::<i32>), "absent");
    }

    #[rstest]
    fn test_outcome_and_result_agree() {
        assert_eq!(render(ok::<i32, String>(1)), render(Ok::<i32, String>(1)));
        assert_eq!(
            render(err::<i32, String>("boom".into())),
            render(Err::<i32, String>("boom".into()))
        );
        assert_eq!(render(Err::<i32, String>("boom".into())), "error BOOM");
    }

    #[rstest]
    #[case(Some(4), true)]
    #[case(None, false)]
    fn test_option_ok_or_converts_to_result(#[case] value: Option<i32>, #[case] expected: bool) {
        let converted = MaybeLike::ok_or(value, "missing");
        assert_eq!(OutcomeLike::is_ok(&converted), expected);
        assert_eq!(OutcomeLike::is_error(&converted), !expected);
    }

    #[rstest]
    fn test_result_flat_map_error_recovers() {
        let failed: Result<i32, &str> = Err("boom");
        let recovered: Result<i32, ()> = OutcomeLike::flat_map_error(failed, |_| Ok(0));
        assert_eq!(recovered, Ok(0));
    }

    #[rstest]
    fn test_option_unwrap_raises_invariant_violation() {
        let payload = std::panic::catch_unwind(|| MaybeLike::unwrap(None::<i32>)).unwrap_err();
        let violation = payload
            .downcast_ref::<InvariantViolation>()
            .expect("payload should be an InvariantViolation");
        assert_eq!(violation.operation, "Option::unwrap");
        assert_eq!(violation.variant, "None");
    }

    #[rstest]
    fn test_result_unwrap_error_raises_invariant_violation() {
        let payload =
            std::panic::catch_unwind(|| OutcomeLike::unwrap_error(Ok::<i32, String>(1))).unwrap_err();
        let violation = payload
            .downcast_ref::<InvariantViolation>()
            .expect("payload should be an InvariantViolation");
        assert_eq!(violation.operation, "Result::unwrap_error");
        assert_eq!(violation.variant, "Ok");
    }
}
