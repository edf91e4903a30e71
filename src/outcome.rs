//! Outcome type - a computed value or an error.
//!
//! This module provides the `Outcome<T, E>` type, which is either
//! `Success(T)` or `Failure(E)`. It plays the role of a result type while
//! leaving the prelude `Result` untouched, and it converts losslessly to and
//! from `std::result::Result` so it can cross `?` boundaries with `.into()`.
//!
//! Combinators act on the matching variant only and pass the other one
//! through unchanged:
//!
//! ```rust
//! use explicit::{Outcome, err, ok};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|x| x * 2);
//! assert_eq!(doubled, ok(42));
//!
//! let failed = parse("twenty-one").map(|x| x * 2).map_error(|_| "not a number");
//! assert_eq!(failed, err("not a number"));
//! ```

use crate::error::violate;
use crate::maybe::Maybe;

/// A value that is either `Success(T)` or `Failure(E)`.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error
///
/// # Examples
///
/// ```rust
/// use explicit::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// assert_eq!(success.fold(|x| x.to_string(), |e| e), "42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

/// Creates a `Success` value.
///
/// # Examples
///
/// ```rust
/// use explicit::{Outcome, ok};
///
/// let value: Outcome<i32, ()> = ok(1);
/// assert!(value.is_ok());
/// ```
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Creates a `Failure` value.
///
/// # Examples
///
/// ```rust
/// use explicit::{Outcome, err};
///
/// let value: Outcome<(), &str> = err("boom");
/// assert!(value.is_error());
/// ```
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// A `Failure` is returned unchanged and the function is never called.
    #[inline]
    pub fn map<A, F>(self, function: F) -> Outcome<A, E>
    where
        F: FnOnce(T) -> A,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the error.
    ///
    /// A `Success` is returned unchanged and the function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Outcome, err, ok};
    ///
    /// let failure: Outcome<i32, &str> = err("io");
    /// assert_eq!(failure.map_error(str::len), err(2));
    ///
    /// let success: Outcome<i32, &str> = ok(1);
    /// assert_eq!(success.map_error(str::len), ok(1));
    /// ```
    #[inline]
    pub fn map_error<A, F>(self, function: F) -> Outcome<T, A>
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Applies a function returning an `Outcome` to the success value,
    /// flattening one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Outcome, err, ok};
    ///
    /// fn checked_div(numerator: i32, denominator: i32) -> Outcome<i32, &'static str> {
    ///     if denominator == 0 { err("division by zero") } else { ok(numerator / denominator) }
    /// }
    ///
    /// assert_eq!(ok(100).flat_map(|x| checked_div(x, 5)), ok(20));
    /// assert_eq!(ok(100).flat_map(|x| checked_div(x, 0)), err("division by zero"));
    /// ```
    #[inline]
    pub fn flat_map<A, F>(self, function: F) -> Outcome<A, E>
    where
        F: FnOnce(T) -> Outcome<A, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function returning an `Outcome` to the error, flattening one
    /// level. This is the recovery path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Outcome, err, ok};
    ///
    /// let failure: Outcome<u16, &str> = err("no port configured");
    /// let recovered: Outcome<u16, ()> = failure.flat_map_error(|_| ok(8080));
    /// assert_eq!(recovered, ok(8080));
    /// ```
    #[inline]
    pub fn flat_map_error<A, F>(self, function: F) -> Outcome<T, A>
    where
        F: FnOnce(E) -> Outcome<T, A>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Outcome` by calling exactly one of two functions.
    #[inline]
    pub fn fold<A, F, G>(self, on_success: F, on_failure: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce(E) -> A,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`InvariantViolation`](crate::InvariantViolation)
    /// payload if called on `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => violate("Outcome::unwrap", "Failure"),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Unwinds with an [`InvariantViolation`](crate::InvariantViolation)
    /// payload if called on `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Success(_) => violate("Outcome::unwrap_error", "Success"),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Keeps the success value, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Maybe, Outcome, err, ok};
    ///
    /// let success: Outcome<i32, &str> = ok(3);
    /// assert_eq!(success.value(), Maybe::Present(3));
    ///
    /// let failure: Outcome<i32, &str> = err("boom");
    /// assert_eq!(failure.value(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn value(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }

    /// Keeps the error, discarding any success value.
    #[inline]
    pub fn error(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Absent,
            Self::Failure(error) => Maybe::Present(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::{Outcome, err};
    ///
    /// fn load() -> Result<i32, String> {
    ///     let outcome: Outcome<i32, String> = err("missing".to_string());
    ///     let result: Result<i32, String> = outcome.into();
    ///     let value = result?;
    ///     Ok(value)
    /// }
    ///
    /// assert_eq!(load(), Err("missing".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
