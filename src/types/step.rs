//! Data shapes of the suspend/resume step protocol.

use crate::types::outcome::Outcome;

/// One observation of a step sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Step<Y, R> {
    /// The sequence yielded an intermediate value.
    Yield(Y),
    /// The sequence finished with its final plain value.
    Done(R),
}

/// The yield shape of synchronous sequences driven by [`run`](crate::interpret::run).
///
/// The interpreter only ever matches on this tag, so it never needs runtime
/// type inspection of what a sequence produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Yielded<T, E, R> {
    /// An intermediate container. A `Failure` short-circuits the sequence.
    Outcome(Outcome<T, E>),
    /// A terminal plain value, wrapped as the overall success.
    ///
    /// This keeps the permissive policy for non-container yields explicit:
    /// yielding one ends the sequence immediately.
    Value(R),
}
