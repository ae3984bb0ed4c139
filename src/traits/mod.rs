//! Behavior traits: the suspend/resume protocol driven by the interpreters.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{from_fn, run, Step, Success, Yielded};
//!
//! let sequence = from_fn(|input: Option<i32>| match input {
//!     None => Step::Yield(Yielded::Outcome(Success::<_, &str>(1))),
//!     Some(v) => Step::Done(v + 1),
//! });
//! assert_eq!(run(sequence), Success(2));
//! ```

pub mod step_sequence;

pub use step_sequence::{from_fn, FromFn, StepSequence};
