//! Synchronous interpreter for step sequences.
//!
//! [`run`] lets a linear sequence of container-producing steps read as
//! straight-line code: the driver feeds each unwrapped success payload into
//! the next step and stops at the first failure, without nested
//! [`and_then`](crate::Outcome::and_then) calls at every join point.

use crate::traits::step_sequence::StepSequence;
use crate::types::outcome::Outcome;
use crate::types::step::{Step, Yielded};

/// Drives a step sequence to completion, short-circuiting on the first
/// yielded `Failure`.
///
/// The sequence is resumed with the unwrapped success payload of its most
/// recent yield. On a yielded `Failure` the sequence is notified through
/// [`terminate`](StepSequence::terminate) and that failure becomes the
/// overall result; later steps are never invoked. A normally finished
/// sequence (or one yielding a terminal [`Yielded::Value`]) produces a
/// `Success` around its plain final value.
///
/// All steps share one failure type; a step with a different error converts
/// with [`map_err`](crate::Outcome::map_err) before yielding.
///
/// # Examples
///
/// ```
/// use outcome_rail::{from_fn, run, Failure, Outcome, Step, Success, Yielded};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
///     if b == 0 {
///         Failure("division by zero")
///     } else {
///         Success(a / b)
///     }
/// }
///
/// let mut stage = 0;
/// let sequence = from_fn(move |input: Option<i32>| {
///     stage += 1;
///     match (stage, input) {
///         (1, _) => Step::Yield(Yielded::Outcome(divide(10, 2))),
///         (2, Some(v)) => Step::Yield(Yielded::Outcome(divide(v, 0))),
///         (_, input) => Step::Done(input.unwrap_or(0)),
///     }
/// });
///
/// // The second step fails, so the third is never reached.
/// assert_eq!(run(sequence), Failure("division by zero"));
/// ```
pub fn run<S, T, E, R>(mut sequence: S) -> Outcome<R, E>
where
    S: StepSequence<T, Yield = Yielded<T, E, R>, Output = R>,
{
    let mut step = sequence.start();
    loop {
        let yielded = match step {
            Step::Done(value) => return Outcome::Success(value),
            Step::Yield(yielded) => yielded,
        };
        match yielded {
            Yielded::Outcome(Outcome::Success(value)) => step = sequence.resume(value),
            Yielded::Outcome(Outcome::Failure(error)) => {
                sequence.terminate();
                return Outcome::Failure(error);
            }
            Yielded::Value(value) => return Outcome::Success(value),
        }
    }
}
