//! Asynchronous interpreter for step sequences.
//!
//! The async analogue of [`run`](crate::interpret::run): each step may yield
//! a plain container or a deferred one, and a deferred yield is resolved
//! before the continue/short-circuit decision is made.

use core::future::Future;

use crate::async_ext::outcome_future::{BoxOutcomeFuture, OutcomeFuture};
use crate::traits::step_sequence::StepSequence;
use crate::types::outcome::Outcome;
use crate::types::step::Step;

/// The yield shape of asynchronous sequences driven by [`run_async`].
///
/// Deferred steps are type-erased so one sequence can mix futures of
/// different concrete types; see
/// [`OutcomeFuture::boxed`](crate::async_ext::OutcomeFuture::boxed).
pub enum AsyncYielded<'a, T, E, R> {
    /// An already-resolved intermediate container.
    Ready(Outcome<T, E>),
    /// A deferred intermediate container, awaited before the loop continues.
    Deferred(BoxOutcomeFuture<'a, T, E>),
    /// A terminal plain value, wrapped as the overall success.
    Value(R),
}

/// Drives a step sequence whose yields may be deferred, short-circuiting on
/// the first failure.
///
/// Each yielded value is resolved first (`Ready` immediately, `Deferred` by
/// awaiting it); a resolved `Failure` notifies the sequence through
/// [`terminate`](StepSequence::terminate) and becomes the overall result
/// without any further step running. Steps execute strictly sequentially,
/// never two in flight, and failures are observed in yield order.
///
/// The result is delivered through an [`OutcomeFuture`] so downstream
/// composition can keep chaining without an explicit resolution step.
///
/// # Examples
///
/// ```ignore
/// use outcome_rail::async_ext::{run_async, AsyncYielded, OutcomeFuture};
/// use outcome_rail::{from_fn, Failure, Outcome, Step, Success};
///
/// fn divide(a: i32, b: i32) -> OutcomeFuture<impl std::future::Future<Output = Outcome<i32, String>>> {
///     OutcomeFuture::new(async move {
///         if b == 0 {
///             Failure("division by zero".to_string())
///         } else {
///             Success(a / b)
///         }
///     })
/// }
///
/// let mut stage = 0;
/// let sequence = from_fn(move |input: Option<i32>| {
///     stage += 1;
///     match (stage, input) {
///         (1, _) => Step::Yield(AsyncYielded::Deferred(divide(10, 2).boxed())),
///         (2, Some(v)) => Step::Yield(AsyncYielded::Deferred(divide(v, 0).boxed())),
///         (_, input) => Step::Done(input.unwrap_or(0)),
///     }
/// });
///
/// let outcome = run_async(sequence).await;
/// assert_eq!(outcome, Failure("division by zero".to_string()));
/// ```
pub fn run_async<'a, S, T, E, R>(
    mut sequence: S,
) -> OutcomeFuture<impl Future<Output = Outcome<R, E>> + 'a>
where
    S: StepSequence<T, Yield = AsyncYielded<'a, T, E, R>, Output = R> + 'a,
    T: 'a,
    E: 'a,
    R: 'a,
{
    OutcomeFuture::new(async move {
        let mut step = sequence.start();
        loop {
            let yielded = match step {
                Step::Done(value) => return Outcome::Success(value),
                Step::Yield(yielded) => yielded,
            };
            let outcome = match yielded {
                AsyncYielded::Ready(outcome) => outcome,
                AsyncYielded::Deferred(deferred) => deferred.await,
                AsyncYielded::Value(value) => return Outcome::Success(value),
            };
            match outcome {
                Outcome::Success(value) => step = sequence.resume(value),
                Outcome::Failure(error) => {
                    sequence.terminate();
                    return Outcome::Failure(error);
                }
            }
        }
    })
}
