//! Generic functional interfaces for [`Maybe`](crate::Maybe) and
//! [`Outcome`](crate::Outcome).
//!
//! - [`Functor`]: `fmap`
//! - [`Applicative`]: `pure`, `map2`, `map3`, `product` and `apply`
//! - [`Monad`]: `flat_map` and `then`
//! - [`Bifunctor`]: mapping either side of an `Outcome`
//!
//! The traits abstract over the container, not its payload. Rust has no
//! syntax for that, so [`TypeConstructor`] carries the payload type and a
//! generic associated type that rebuilds the container around another one.
//!
//! # Examples
//!
//! ```rust
//! use explicit::typeclass::{Applicative, Functor};
//! use explicit::{Outcome, err, ok};
//!
//! fn halve(value: i32) -> Outcome<i32, String> {
//!     if value % 2 == 0 { ok(value / 2) } else { err(format!("{value} is odd")) }
//! }
//!
//! let total = ok::<i32, String>(8)
//!     .flat_map(halve)
//!     .map2(ok(10), |a, b| a + b)
//!     .fmap(|sum| sum * 10);
//! assert_eq!(total, ok(140));
//!
//! assert_eq!(ok::<i32, String>(3).flat_map(halve), err("3 is odd".to_string()));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
