//! Function adapters that pin the unified container type onto ordinary
//! functions, so chains compose without manual coercion at every call site.

use crate::interpret::run;
use crate::traits::step_sequence::StepSequence;
use crate::types::outcome::Outcome;
use crate::types::step::Yielded;

/// Wraps a function returning any `Into<Outcome>` shape so its return value
/// is the unified [`Outcome`] container. Pure coercion; no behavior change.
///
/// # Examples
///
/// ```
/// use outcome_rail::{adapt::outcome_fn, Failure, Success};
///
/// // Returns `Result`, the std shape.
/// fn divide(args: (i32, i32)) -> Result<i32, &'static str> {
///     let (a, b) = args;
///     if b == 0 { Err("division by zero") } else { Ok(a / b) }
/// }
///
/// let mut wrapped = outcome_fn(divide);
/// assert_eq!(wrapped((10, 2)), Success(5));
/// assert_eq!(wrapped((1, 0)), Failure("division by zero"));
/// ```
#[inline]
pub fn outcome_fn<A, R, T, E, F>(mut f: F) -> impl FnMut(A) -> Outcome<T, E>
where
    F: FnMut(A) -> R,
    R: Into<Outcome<T, E>>,
{
    move |arg| f(arg).into()
}

/// Wraps a step-sequence producer into an ordinary function that runs the
/// produced sequence through [`run`] and returns the resulting container.
///
/// # Examples
///
/// ```
/// use outcome_rail::{adapt::sequence_fn, from_fn, Step, Success, Yielded};
///
/// let mut double_plus = sequence_fn(|base: i32| {
///     from_fn(move |input: Option<i32>| match input {
///         None => Step::Yield(Yielded::Outcome(Success::<_, &str>(base * 2))),
///         Some(v) => Step::Done(v + 1),
///     })
/// });
///
/// assert_eq!(double_plus(5), Success(11));
/// ```
#[inline]
pub fn sequence_fn<A, S, T, E, R, F>(mut f: F) -> impl FnMut(A) -> Outcome<R, E>
where
    F: FnMut(A) -> S,
    S: StepSequence<T, Yield = Yielded<T, E, R>, Output = R>,
{
    move |arg| run(f(arg))
}
