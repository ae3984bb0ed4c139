//! Conversion helpers between the containers, their std counterparts, and
//! the external fault capability.
//!
//! These adapters make it straightforward to adopt the containers
//! incrementally: wrap std results at the edges, transpose nested
//! containers, and funnel arbitrary caught failures through the taxonomy's
//! single conversion point.

use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;

/// Converts an [`Outcome`] to the standard [`Result`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Success;
///
/// assert_eq!(outcome_to_result(Success::<_, &str>(1)), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Wraps a standard [`Result`] into an [`Outcome`].
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts a [`Maybe`] to the standard [`Option`].
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.into_option()
}

/// Wraps a standard [`Option`] into a [`Maybe`].
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    Maybe::from_option(option)
}

/// Transposes an outcome of a maybe into a maybe of an outcome.
///
/// `Success(Absent)` becomes `Absent`; a failure stays visible inside the
/// `Present`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::transpose_outcome;
/// use outcome_rail::{Absent, Maybe, Outcome, Present, Success};
///
/// let o: Outcome<Maybe<i32>, &str> = Success(Present(3));
/// assert_eq!(transpose_outcome(o), Present(Success(3)));
///
/// let o: Outcome<Maybe<i32>, &str> = Success(Absent);
/// assert_eq!(transpose_outcome(o), Absent);
/// ```
#[inline]
pub fn transpose_outcome<T, E>(outcome: Outcome<Maybe<T>, E>) -> Maybe<Outcome<T, E>> {
    match outcome {
        Outcome::Success(Maybe::Present(value)) => Maybe::Present(Outcome::Success(value)),
        Outcome::Success(Maybe::Absent) => Maybe::Absent,
        Outcome::Failure(error) => Maybe::Present(Outcome::Failure(error)),
    }
}

/// Transposes a maybe of an outcome into an outcome of a maybe.
///
/// `Absent` becomes `Success(Absent)`; a present failure becomes the
/// overall failure.
#[inline]
pub fn transpose_maybe<T, E>(maybe: Maybe<Outcome<T, E>>) -> Outcome<Maybe<T>, E> {
    match maybe {
        Maybe::Present(Outcome::Success(value)) => Outcome::Success(Maybe::Present(value)),
        Maybe::Present(Outcome::Failure(error)) => Outcome::Failure(error),
        Maybe::Absent => Outcome::Success(Maybe::Absent),
    }
}

/// Converts an arbitrary caught failure value into the standard recoverable
/// fault kind, enforcing the panic-propagation policy.
///
/// The contract, in order:
///
/// 1. A [`Panic`](crate::Panic) payload is re-raised unchanged, never
///    wrapped into a fault.
/// 2. A value already satisfying the fault capability (a
///    [`StdFault`](crate::StdFault), or the boxed-error idiom
///    `Box<dyn Error + Send + Sync>`) comes back as the standard kind with
///    the original as its origin.
/// 3. Anything else (a primitive, a unit, a mismatched shape) raises a
///    [`Panic`](crate::Panic) describing the mismatch.
///
/// # Panics
///
/// Re-raises `Panic` payloads and panics on values that do not satisfy the
/// fault capability, per the contract above.
///
/// # Examples
///
/// ```
/// use std::error::Error;
/// use outcome_rail::convert::to_std_fault;
/// use outcome_rail::Fault;
///
/// let error: Box<dyn Error + Send + Sync> = "0x".parse::<i32>().unwrap_err().into();
/// let fault = to_std_fault(Box::new(error));
/// assert!(fault.origin().is_some());
/// ```
#[cfg(feature = "std")]
pub fn to_std_fault(value: Box<dyn core::any::Any + Send>) -> crate::types::fault::StdFault {
    use core::error::Error;

    use crate::types::fault::{panic_fault, Panic, StdFault};

    let value = match value.downcast::<Panic>() {
        Ok(panic) => std::panic::resume_unwind(panic),
        Err(value) => value,
    };
    let value = match value.downcast::<StdFault>() {
        Ok(fault) => return *fault,
        Err(value) => value,
    };
    match value.downcast::<Box<dyn Error + Send + Sync>>() {
        Ok(error) => StdFault::from_boxed(*error),
        Err(_) => panic_fault("caught value does not satisfy the fault capability".into()),
    }
}
