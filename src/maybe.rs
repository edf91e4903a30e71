//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, which is either `Present(T)`
//! or `Absent`. Absence is a regular, matchable value rather than an implicit
//! null, so every caller has to decide what happens when nothing is there.
//!
//! # Examples
//!
//! ```rust
//! use explicit::{Maybe, none, some};
//!
//! fn find_port(name: &str) -> Maybe<u16> {
//!     match name {
//!         "http" => some(80),
//!         "https" => some(443),
//!         _ => none(),
//!     }
//! }
//!
//! let label = find_port("https").fold(|port| format!("port {port}"), || "unknown".to_string());
//! assert_eq!(label, "port 443");
//!
//! assert_eq!(find_port("gopher").unwrap_or(0), 0);
//! ```

use crate::error::violate;
use crate::outcome::Outcome;

/// A value that is either `Present(T)` or `Absent`.
///
/// Every transforming operation consumes the `Maybe` and returns a new one;
/// a value never changes variant in place.
///
/// # Examples
///
/// ```rust
/// use explicit::{Maybe, some};
///
/// let doubled = some(21).map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Present(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

/// Creates a `Present` value.
///
/// # Examples
///
/// ```rust
/// use explicit::some;
///
/// assert!(some("value").is_some());
/// ```
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Creates an `Absent` value.
///
/// # Examples
///
/// ```rust
/// use explicit::none;
///
/// assert!(none::<i32>().is_none());
/// ```
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::Absent
}

impl<T> Maybe<T> {
    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// On `Absent` the function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Maybe, none, some};
    ///
    /// assert_eq!(some("hello").map(str::len), some(5));
    /// assert_eq!(none::<&str>().map(str::len), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<A, F>(self, function: F) -> Maybe<A>
    where
        F: FnOnce(T) -> A,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a function that itself returns a `Maybe`, flattening one level.
    ///
    /// On `Absent` the function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Maybe, none, some};
    ///
    /// fn half(value: i32) -> Maybe<i32> {
    ///     if value % 2 == 0 { some(value / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).flat_map(half).flat_map(half), some(2));
    /// assert_eq!(some(6).flat_map(half).flat_map(half), none());
    /// ```
    #[inline]
    pub fn flat_map<A, F>(self, function: F) -> Maybe<A>
    where
        F: FnOnce(T) -> Maybe<A>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Eliminates the `Maybe` by calling exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{none, some};
    ///
    /// assert_eq!(some(3).fold(|x| x * 10, || 0), 30);
    /// assert_eq!(none::<i32>().fold(|x| x * 10, || 0), 0);
    /// ```
    #[inline]
    pub fn fold<A, F, G>(self, on_present: F, on_absent: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Converts into an [`Outcome`], using `error` when no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Outcome, none, some};
    ///
    /// assert_eq!(some(1).ok_or("missing"), Outcome::Success(1));
    /// assert_eq!(none::<i32>().ok_or("missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Returns the contained value, or `default` if absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`InvariantViolation`](crate::InvariantViolation)
    /// payload if called on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::some;
    ///
    /// assert_eq!(some(7).unwrap(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => violate("Maybe::unwrap", "Absent"),
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Borrows the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::some;
    ///
    /// let name = some(String::from("ferris"));
    /// assert_eq!(name.as_ref().map(|s| s.len()).unwrap_or(0), 6);
    /// assert!(name.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns an iterator over zero or one element.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::from(self.as_ref()).into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Maybe, none, some};
    ///
    /// assert_eq!(some(some(1)).flatten(), some(1));
    /// assert_eq!(some(none::<i32>()).flatten(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvariantViolation;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_some_is_some() {
        let value = some(42);
        assert!(value.is_some());
        assert!(!value.is_none());
    }

    #[rstest]
    fn test_none_is_none() {
        let value: Maybe<i32> = none();
        assert!(value.is_none());
        assert!(!value.is_some());
    }

    #[rstest]
    fn test_map_skips_function_on_absent() {
        let calls = Cell::new(0);
        let result = none::<i32>().map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(result, Maybe::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_flat_map_skips_function_on_absent() {
        let calls = Cell::new(0);
        let result = none::<i32>().flat_map(|x| {
            calls.set(calls.get() + 1);
            some(x)
        });
        assert_eq!(result, Maybe::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_does_not_flatten() {
        let nested = some(1).map(some);
        assert_eq!(nested, some(some(1)));
    }

    #[rstest]
    #[case(some(5), 5)]
    #[case(none(), -1)]
    fn test_unwrap_or(#[case] value: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(value.unwrap_or(-1), expected);
    }

    #[rstest]
    fn test_unwrap_on_absent_raises_invariant_violation() {
        let payload = std::panic::catch_unwind(|| none::<i32>().unwrap()).unwrap_err();
        let violation = payload
            .downcast_ref::<InvariantViolation>()
            .expect("payload should be an InvariantViolation");
        assert_eq!(violation.operation, "Maybe::unwrap");
        assert_eq!(violation.variant, "Absent");
        assert_eq!(violation.location.file(), file!());
    }

    #[rstest]
    fn test_default_is_absent() {
        assert_eq!(Maybe::<String>::default(), Maybe::Absent);
    }

    #[rstest]
    fn test_iteration_yields_at_most_one_element() {
        assert_eq!(some(3).into_iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(none::<i32>().iter().count(), 0);
    }
}
