//! Adapter from panicking computations to [`Outcome`].
//!
//! [`call`] runs a closure and [`call_async`] awaits a future; either way a
//! panic never escapes. A normal result becomes `Success`, and a panic
//! becomes `Failure` holding a [`Fault`]:
//!
//! - if the panic payload is error-shaped (see [`is_error_shaped`]) the
//!   original error is returned as is, so it can be downcast back to its
//!   concrete type;
//! - any other payload, such as the `&str` or `String` produced by
//!   `panic!`, is boxed in an [`UnknownError`] that keeps the raw payload.
//!
//! [`raise`] is the way to unwind with an error-shaped payload. The
//! `try_` variants additionally fold an `Err` returned by the computation
//! into the same failure channel.
//!
//! Capturing relies on unwinding; under `panic = "abort"` a panic still
//! terminates the process.
//!
//! # Examples
//!
//! ```rust
//! use explicit::interop::{UnknownError, call, raise};
//!
//! let parsed = call(|| "42".parse::<i32>().unwrap_or(0));
//! assert_eq!(parsed.unwrap(), 42);
//!
//! let failed = call(|| -> i32 { raise(std::io::Error::other("disk full")) });
//! let fault = failed.unwrap_error();
//! assert_eq!(fault.to_string(), "disk full");
//! assert!(fault.downcast_ref::<std::io::Error>().is_some());
//!
//! let unknown = call(|| -> i32 { std::panic::panic_any(7_u8) });
//! let fault = unknown.unwrap_error();
//! let unknown = fault.downcast_ref::<UnknownError>().unwrap();
//! assert_eq!(unknown.downcast_meta::<u8>(), Some(7));
//! ```

use std::any::Any;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures::FutureExt;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

use crate::error::InvariantViolation;
use crate::outcome::Outcome;

/// The error-shaped failure produced by the adapter.
pub type Fault = Box<dyn std::error::Error + Send + Sync + 'static>;

type Payload = Box<dyn Any + Send + 'static>;

// =============================================================================
// UnknownError
// =============================================================================

/// Carries a panic payload that was not error-shaped.
///
/// Displays as `"Unknown error"`. The raw payload is kept as `meta` for
/// diagnostics.
///
/// # Examples
///
/// ```rust
/// use explicit::interop::UnknownError;
///
/// let error = UnknownError::new(Box::new("connection reset"));
/// assert_eq!(error.to_string(), "Unknown error");
/// assert_eq!(error.meta_str(), Some("connection reset"));
/// ```
pub struct UnknownError {
    text: Option<String>,
    meta: Mutex<Payload>,
}

impl UnknownError {
    /// The fixed message of every `UnknownError`.
    pub const MESSAGE: &'static str = "Unknown error";

    /// Wraps a raw payload.
    pub fn new(meta: Payload) -> Self {
        let text = meta
            .downcast_ref::<&'static str>()
            .map(|text| (*text).to_string())
            .or_else(|| meta.downcast_ref::<String>().cloned());
        Self {
            text,
            meta: Mutex::new(meta),
        }
    }

    /// Returns the payload as text when it was a `&'static str` or a
    /// `String`, which is what `panic!` produces.
    pub fn meta_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Locks and borrows the raw payload.
    ///
    /// The payload stays locked until the guard is dropped; calling another
    /// `meta` accessor on the same error while holding it deadlocks.
    pub fn meta(&self) -> MutexGuard<'_, Payload> {
        self.meta.lock()
    }

    /// Borrows the payload as an `X`, or returns `None` if it has another
    /// type.
    ///
    /// Works for payloads that are not `Clone`, and only needs a shared
    /// reference, so it can be used through a borrowed [`Fault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::interop::{UnknownError, call};
    ///
    /// struct Ticket(u32);
    ///
    /// let outcome = call(|| -> () { std::panic::panic_any(Ticket(3)) });
    /// let fault = outcome.as_ref().unwrap_error();
    /// let unknown = fault.downcast_ref::<UnknownError>().unwrap();
    /// assert_eq!(unknown.downcast_meta_ref::<Ticket>().map(|ticket| ticket.0), Some(3));
    /// ```
    pub fn downcast_meta_ref<X: Any>(&self) -> Option<MappedMutexGuard<'_, X>> {
        MutexGuard::try_map(self.meta.lock(), |meta| (**meta).downcast_mut::<X>()).ok()
    }

    /// Returns a copy of the payload if it has type `X`.
    pub fn downcast_meta<X: Any + Clone>(&self) -> Option<X> {
        self.meta.lock().downcast_ref::<X>().cloned()
    }

    /// Returns `true` if the payload has type `X`.
    pub fn meta_is<X: Any>(&self) -> bool {
        self.meta.lock().is::<X>()
    }

    /// Borrows the payload mutably.
    pub fn meta_mut(&mut self) -> &mut (dyn Any + Send) {
        &mut **self.meta.get_mut()
    }

    /// Returns the raw payload.
    pub fn into_meta(self) -> Payload {
        self.meta.into_inner()
    }
}

impl std::fmt::Debug for UnknownError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = formatter.debug_struct("UnknownError");
        match self.meta_str() {
            Some(text) => debug.field("meta", &text),
            None => debug.field("meta", &format_args!("<opaque>")),
        };
        debug.finish()
    }
}

impl std::fmt::Display for UnknownError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for UnknownError {}

// =============================================================================
// Payload Classification
// =============================================================================

/// Returns `true` if a panic payload is already an error.
///
/// Error-shaped payloads are the [`Fault`] boxes unwound by [`raise`] and the
/// [`InvariantViolation`]s unwound by the unchecked unwraps. The adapter
/// passes these through unchanged and wraps everything else in an
/// [`UnknownError`].
///
/// A payload is matched by its exact type, because `dyn Any` cannot be
/// asked whether it implements `Error`. A concrete error passed to
/// `panic_any`, such as an `std::io::Error`, or a `Box<dyn Error + Send>`
/// that is not `Sync`, is therefore not error-shaped. It still reaches the
/// caller as the `meta` of the [`UnknownError`]. Unwind with [`raise`] to
/// keep the error itself.
///
/// # Examples
///
/// ```rust
/// use explicit::interop::{Fault, is_error_shaped};
///
/// let fault: Fault = "boom".into();
/// assert!(is_error_shaped(&fault));
/// assert!(!is_error_shaped(&"boom"));
/// ```
pub fn is_error_shaped(payload: &(dyn Any + Send)) -> bool {
    payload.is::<Fault>() || payload.is::<InvariantViolation>()
}

fn capture(payload: Payload) -> Fault {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        error_shaped = is_error_shaped(&*payload),
        "captured panic from wrapped computation"
    );

    let payload = match payload.downcast::<Fault>() {
        Ok(fault) => return *fault,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<InvariantViolation>() {
        Ok(violation) => return violation,
        Err(payload) => payload,
    };
    Box::new(UnknownError::new(payload))
}

fn settle<T, X>(result: Result<T, X>) -> Outcome<T, Fault>
where
    X: Into<Fault>,
{
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            let fault: Fault = error.into();
            #[cfg(feature = "tracing")]
            tracing::trace!(%fault, "wrapped computation returned an error");
            Outcome::Failure(fault)
        }
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Unwinds with an error-shaped payload.
///
/// Unlike `panic!`, this does not invoke the panic hook, and [`call`] returns
/// the error itself instead of wrapping it in an [`UnknownError`].
///
/// # Examples
///
/// ```rust
/// use explicit::interop::{call, raise};
///
/// let outcome = call(|| -> () { raise("invalid header") });
/// assert_eq!(outcome.unwrap_error().to_string(), "invalid header");
/// ```
pub fn raise(error: impl Into<Fault>) -> ! {
    let fault: Fault = error.into();
    std::panic::resume_unwind(Box::new(fault))
}

/// Runs `function` immediately, turning a panic into a `Failure`.
///
/// # Examples
///
/// ```rust
/// use explicit::interop::{UnknownError, call};
///
/// let outcome = call(|| -> i32 { panic!("x") });
/// let fault = outcome.unwrap_error();
/// let unknown = fault.downcast_ref::<UnknownError>().unwrap();
/// assert_eq!(unknown.meta_str(), Some("x"));
/// ```
pub fn call<T, F>(function: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(capture(payload)),
    }
}

/// Runs a fallible `function`; both a returned `Err` and a panic become a
/// `Failure`.
///
/// # Examples
///
/// ```rust
/// use explicit::interop::try_call;
///
/// let outcome = try_call(|| "not a number".parse::<i32>());
/// assert!(outcome.is_error());
/// ```
pub fn try_call<T, X, F>(function: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Fault>,
{
    call(function).flat_map(settle)
}

/// Builds a future with `function` and awaits it, turning a panic into a
/// `Failure`.
///
/// Panics raised while building the future and while polling it are both
/// captured. The returned future is `Send` when `function` and its future
/// are.
///
/// # Examples
///
/// ```rust
/// use explicit::interop::call_async;
///
/// # futures::executor::block_on(async {
/// let outcome = call_async(|| async { "test" }).await;
/// assert_eq!(outcome.unwrap(), "test");
/// # });
/// ```
#[allow(clippy::future_not_send)]
pub async fn call_async<T, F, Fut>(function: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let future = match catch_unwind(AssertUnwindSafe(function)) {
        Ok(future) => future,
        Err(payload) => return Outcome::Failure(capture(payload)),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(capture(payload)),
    }
}

/// Awaits a fallible future; a resolved `Err` and a panic both become a
/// `Failure`.
#[allow(clippy::future_not_send)]
pub async fn try_call_async<T, X, F, Fut>(function: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    X: Into<Fault>,
{
    call_async(function).await.flat_map(settle)
}
