//! The suspend/resume protocol driven by the interpreters.

use crate::types::step::Step;

/// A unit of code that yields intermediate values one at a time and finishes
/// with a plain final value, driven by an interpreter.
///
/// `Input` is the payload the driver feeds back: the unwrapped success value
/// of the most recently yielded container. Implementations are explicit
/// state machines; for small sequences the [`from_fn`] closure adapter is
/// usually enough.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Step, StepSequence, Success, Yielded};
///
/// struct Doubler;
///
/// impl StepSequence<i32> for Doubler {
///     type Yield = Yielded<i32, &'static str, i32>;
///     type Output = i32;
///
///     fn start(&mut self) -> Step<Self::Yield, i32> {
///         Step::Yield(Yielded::Outcome(Success(21)))
///     }
///
///     fn resume(&mut self, input: i32) -> Step<Self::Yield, i32> {
///         Step::Done(input * 2)
///     }
/// }
///
/// assert_eq!(outcome_rail::run(Doubler), Success(42));
/// ```
pub trait StepSequence<Input> {
    /// What the sequence yields at each intermediate step.
    type Yield;

    /// The final plain value.
    type Output;

    /// Produces the first step, before any input exists.
    fn start(&mut self) -> Step<Self::Yield, Self::Output>;

    /// Feeds back the unwrapped payload of the previous yield and produces
    /// the next step.
    fn resume(&mut self, input: Input) -> Step<Self::Yield, Self::Output>;

    /// Notifies the sequence that the driver stopped early because a yielded
    /// container resolved to a failure. The default does nothing.
    fn terminate(&mut self) {}
}

/// A step sequence backed by a closure. Created by [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

/// Adapts a closure into a [`StepSequence`].
///
/// The closure receives `None` on the starting call and `Some(input)` on
/// every resume.
///
/// # Examples
///
/// ```
/// use outcome_rail::{from_fn, run, Step, Success, Yielded};
///
/// let sequence = from_fn(|input: Option<i32>| match input {
///     None => Step::Yield(Yielded::Outcome(Success::<_, &str>(20))),
///     Some(v) => Step::Done(v + 2),
/// });
///
/// assert_eq!(run(sequence), Success(22));
/// ```
pub fn from_fn<I, Y, R, F>(f: F) -> FromFn<F>
where
    F: FnMut(Option<I>) -> Step<Y, R>,
{
    FromFn { f }
}

impl<I, Y, R, F> StepSequence<I> for FromFn<F>
where
    F: FnMut(Option<I>) -> Step<Y, R>,
{
    type Yield = Y;
    type Output = R;

    #[inline]
    fn start(&mut self) -> Step<Y, R> {
        (self.f)(None)
    }

    #[inline]
    fn resume(&mut self, input: I) -> Step<Y, R> {
        (self.f)(Some(input))
    }
}
