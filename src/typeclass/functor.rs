//! `Functor`: structure-preserving `fmap`.
//!
//! `fmap` rewrites the `Present` or `Success` payload and leaves the
//! variant alone. An `Absent` stays `Absent` and a `Failure` keeps its
//! error. For the inherent types this is exactly `map`; the trait exists so
//! generic code can ask for it.
//!
//! Instances are expected to satisfy
//!
//! ```text
//! value.fmap(|x| x) == value
//! value.fmap(f).fmap(g) == value.fmap(|x| g(f(x)))
//! ```
//!
//! ```rust
//! use explicit::typeclass::Functor;
//! use explicit::{Maybe, none, some};
//!
//! fn label<F: Functor<Inner = u16>>(port: F) -> F::WithType<String> {
//!     port.fmap(|port| format!(":{port}"))
//! }
//!
//! assert_eq!(label(some(8080)), some(":8080".to_string()));
//! assert_eq!(label(none::<u16>()), Maybe::Absent);
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Containers whose payload can be rewritten without touching the variant.
pub trait Functor: TypeConstructor {
    /// Consumes `self` and rewrites the payload with `function`.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Like [`Functor::fmap`], but borrows the payload and leaves `self`
    /// usable.
    ///
    /// ```rust
    /// use explicit::typeclass::Functor;
    /// use explicit::{Maybe, some};
    ///
    /// let name = some("ferris".to_string());
    /// let length: Maybe<usize> = name.fmap_ref(|s| s.len());
    /// assert_eq!(length, some(6));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}
