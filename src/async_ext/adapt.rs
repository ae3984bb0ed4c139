//! Async halves of the function adapters.

use core::future::Future;

use crate::async_ext::interpret::{run_async, AsyncYielded};
use crate::async_ext::outcome_future::{BoxOutcomeFuture, OutcomeFuture};
use crate::traits::step_sequence::StepSequence;
use crate::types::outcome::Outcome;

/// Wraps a future-returning function so its return value is always an
/// [`OutcomeFuture`], even when the function hands back a raw future.
///
/// # Examples
///
/// ```ignore
/// use outcome_rail::async_ext::async_outcome_fn;
/// use outcome_rail::{Failure, Outcome, Success};
///
/// async fn divide(args: (i32, i32)) -> Outcome<i32, &'static str> {
///     let (a, b) = args;
///     if b == 0 { Failure("division by zero") } else { Success(a / b) }
/// }
///
/// let mut wrapped = async_outcome_fn(divide);
/// assert_eq!(wrapped((10, 2)).await, Success(5));
/// ```
#[inline]
pub fn async_outcome_fn<A, Fut, T, E, F>(mut f: F) -> impl FnMut(A) -> OutcomeFuture<Fut>
where
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    move |arg| OutcomeFuture::new(f(arg))
}

/// Wraps an async step-sequence producer into an ordinary function that runs
/// the produced sequence through [`run_async`] and returns the deferred
/// result.
#[inline]
pub fn async_sequence_fn<'a, A, S, T, E, R, F>(
    mut f: F,
) -> impl FnMut(A) -> BoxOutcomeFuture<'a, R, E>
where
    F: FnMut(A) -> S,
    S: StepSequence<T, Yield = AsyncYielded<'a, T, E, R>, Output = R> + 'a,
    T: 'a,
    E: 'a,
    R: 'a,
{
    move |arg| run_async(f(arg)).boxed()
}
