//! Tracing integration.
//!
//! Inspect-shaped helpers that emit a `tracing` event when a failure or an
//! absence passes a labelled point, returning the container unchanged.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt;

use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;

/// Extension trait emitting an error event for failures flowing past.
///
/// # Examples
///
/// ```
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
/// use outcome_rail::{Failure, Outcome};
///
/// let o: Outcome<i32, &str> = Failure("boom");
/// let same = o.trace_failure("loading config");
/// assert_eq!(same, Failure("boom"));
/// ```
pub trait OutcomeTraceExt<T, E> {
    /// Emits a `tracing` error event when self is a `Failure`; pass-through
    /// otherwise.
    #[must_use]
    fn trace_failure(self, label: &str) -> Self;
}

impl<T, E: fmt::Display> OutcomeTraceExt<T, E> for Outcome<T, E> {
    #[inline]
    fn trace_failure(self, label: &str) -> Self {
        self.inspect_err(|error| {
            tracing::error!(target: "outcome_rail", %error, "{label}");
        })
    }
}

/// Extension trait emitting a warning event for absences flowing past.
pub trait MaybeTraceExt<T> {
    /// Emits a `tracing` warning event when self is `Absent`; pass-through
    /// otherwise.
    #[must_use]
    fn trace_absent(self, label: &str) -> Self;
}

impl<T> MaybeTraceExt<T> for Maybe<T> {
    #[inline]
    fn trace_absent(self, label: &str) -> Self {
        if self.is_absent() {
            tracing::warn!(target: "outcome_rail", "{label}: value absent");
        }
        self
    }
}
