//! The fatal error kind raised by the unchecked unwrap family.
//!
//! `Maybe::unwrap`, `Outcome::unwrap` and `Outcome::unwrap_error` are the
//! only operations in this crate that can fail at runtime. When they are
//! called on the wrong variant they unwind with an [`InvariantViolation`]
//! payload instead of a formatted string, so the failure can be told apart
//! from any other panic:
//!
//! ```rust
//! use explicit::{InvariantViolation, none};
//!
//! let payload = std::panic::catch_unwind(|| none::<i32>().unwrap()).unwrap_err();
//! let violation = payload.downcast::<InvariantViolation>().unwrap();
//! assert_eq!(violation.operation, "Maybe::unwrap");
//! assert_eq!(violation.variant, "Absent");
//! ```

use std::panic::Location;

/// Represents a call to an unchecked unwrap on the wrong variant.
///
/// This is a programmer error. It is never produced by `map`, `flat_map`,
/// `fold` or any other variant-appropriate combinator.
///
/// # Examples
///
/// ```rust
/// use explicit::InvariantViolation;
///
/// let violation = InvariantViolation::new("Outcome::unwrap_error", "Success");
/// assert!(
///     violation
///         .to_string()
///         .starts_with("called `Outcome::unwrap_error` on a `Success` value")
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The operation that was called, e.g. `"Maybe::unwrap"`.
    pub operation: &'static str,
    /// The variant it was called on, e.g. `"Absent"`.
    pub variant: &'static str,
    /// Where the operation was called from.
    pub location: &'static Location<'static>,
}

impl InvariantViolation {
    /// Creates a violation located at the caller.
    #[track_caller]
    pub fn new(operation: &'static str, variant: &'static str) -> Self {
        Self {
            operation,
            variant,
            location: Location::caller(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let article = if self.variant.starts_with(['A', 'E', 'I', 'O', 'U']) {
            "an"
        } else {
            "a"
        };
        write!(
            formatter,
            "called `{}` on {} `{}` value at {}",
            self.operation, article, self.variant, self.location
        )
    }
}

impl std::error::Error for InvariantViolation {}

/// Unwinds with an [`InvariantViolation`] located at the caller.
#[track_caller]
#[cold]
pub(crate) fn violate(operation: &'static str, variant: &'static str) -> ! {
    let violation = InvariantViolation::new(operation, variant);

    #[cfg(feature = "tracing")]
    tracing::error!(
        operation = violation.operation,
        variant = violation.variant,
        location = %violation.location,
        "invariant violation"
    );

    std::panic::panic_any(violation)
}
