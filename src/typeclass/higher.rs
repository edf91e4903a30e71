//! `TypeConstructor`: rebinding the payload type of a container.
//!
//! Rust cannot abstract over `Maybe<_>` or `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] records the applied type
//! (`Inner`) and how to re-apply the constructor to another type
//! (`WithType<B>`), which is all [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use explicit::typeclass::TypeConstructor;
//! use explicit::{Maybe, some};
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let replaced: Maybe<String> = absent_like(some(42));
//! assert_eq!(replaced, Maybe::Absent);
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A container type seen as a constructor applied to its payload type.
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be `F` again.
pub trait TypeConstructor {
    /// The payload type: `i32` for both `Maybe<i32>` and `Outcome<i32, E>`.
    type Inner;

    /// The container rebuilt around a payload of type `B`.
    ///
    /// `Outcome<T, E>::WithType<B>` is `Outcome<B, E>`: the error type is
    /// part of the constructor and never changes.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
