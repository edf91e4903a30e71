//! # explicit
//!
//! Explicit optional values and success-or-failure values for Rust, with an
//! adapter that turns panicking code into values.
//!
//! ## Overview
//!
//! - **[`Maybe`]**: `Present(T)` or `Absent`, built with [`some`] and [`none`]
//! - **[`Outcome`]**: `Success(T)` or `Failure(E)`, built with [`ok`] and [`err`]
//! - **Contracts**: [`MaybeLike`] and [`OutcomeLike`] for code generic over
//!   any optional or success-or-failure type, including `Option` and `Result`
//! - **Interop**: [`interop::call`] and [`interop::call_async`] capture panics
//!   as `Failure` values
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and `Bifunctor`
//!   instances in [`typeclass`]
//!
//! The unchecked `unwrap` family is the only place that can fail at runtime;
//! it unwinds with an [`InvariantViolation`].
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (enabled by default)
//! - `interop`: The panic adapter (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Outcome`
//! - `tracing`: Log captured panics and invariant violations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use explicit::prelude::*;
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { some("ferris") } else { none() }
//! }
//!
//! let greeting = lookup(1)
//!     .ok_or("no such user")
//!     .map(|name| format!("hello, {name}"))
//!     .fold(|text| text, |reason| reason.to_string());
//! assert_eq!(greeting, "hello, ferris");
//!
//! assert_eq!(lookup(2).map(str::len).unwrap_or(0), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the types, constructors and contracts.
///
/// # Usage
///
/// ```rust
/// use explicit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contract::{MaybeLike, OutcomeLike};
    pub use crate::error::InvariantViolation;
    pub use crate::maybe::{Maybe, none, some};
    pub use crate::outcome::{Outcome, err, ok};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "interop")]
    pub use crate::interop::{Fault, UnknownError, call, call_async, raise};
}

mod contract;
mod error;
mod maybe;
mod outcome;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "interop")]
pub mod interop;

pub use contract::{MaybeLike, OutcomeLike};
pub use error::InvariantViolation;
pub use maybe::{Maybe, none, some};
pub use outcome::{Outcome, err, ok};

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Outcome<i32, &'static str>: Send, Sync, Copy);
static_assertions::assert_impl_all!(InvariantViolation: Send, Sync, std::error::Error);
#[cfg(feature = "interop")]
static_assertions::assert_impl_all!(interop::UnknownError: Send, Sync, std::error::Error);
