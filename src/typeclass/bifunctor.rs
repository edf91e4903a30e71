//! `Bifunctor`: mapping either side of a two-parameter type.
//!
//! `Outcome<T, E>` implements `Bifunctor<E, T>`. The error is the first
//! parameter and the value the second, so `first` is
//! [`Outcome::map_error`] and `second` is [`Outcome::map`]. That keeps
//! `second` in agreement with `Functor::fmap`.
//!
//! Instances are expected to satisfy
//!
//! ```text
//! value.bimap(|e| e, |x| x) == value
//! value.bimap(f, g) == value.first(f).second(g)
//! ```
//!
//! ```rust
//! use explicit::typeclass::Bifunctor;
//! use explicit::{Outcome, err, ok};
//!
//! let failure: Outcome<i32, String> = err("bad input".to_string());
//! assert_eq!(failure.bimap(|e| e.len(), |x| x * 2), err(9));
//!
//! let success: Outcome<i32, String> = ok(21);
//! assert_eq!(success.bimap(|e| e.len(), |x| x * 2), ok(42));
//! ```

use crate::outcome::Outcome;

/// Two-parameter types where either parameter can be rewritten.
pub trait Bifunctor<A, B> {
    /// `Self` with its parameters replaced by `C` and `D`.
    ///
    /// For `Outcome<T, E>` this is `Outcome<D, C>`.
    type Target<C, D>;

    /// Rewrites whichever side is populated, using the matching function.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Rewrites the first parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Rewrites the second parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Borrowing form of [`Bifunctor::bimap`].
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_error(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}
