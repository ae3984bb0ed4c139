//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Containers**: [`Outcome`] (with `Success`/`Failure`), [`Maybe`]
//!   (with `Present`/`Absent`), the [`FaultOutcome`] alias
//! - **Protocol**: [`Step`], [`Yielded`], [`StepSequence`], [`from_fn`],
//!   [`run`]
//! - **Faults**: [`Fault`], [`StdFault`], [`Panic`]
//! - **Adapters**: [`outcome_fn`], [`sequence_fn`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse(input: &str) -> FaultOutcome<i32> {
//!     match input.parse::<i32>() {
//!         Ok(v) => Success(v),
//!         Err(e) => Failure(StdFault::wrap(e)),
//!     }
//! }
//!
//! let doubled = parse("21").map(|v| v * 2);
//! assert_eq!(doubled.unwrap(), 42);
//! ```

pub use crate::adapt::{outcome_fn, sequence_fn};
pub use crate::interpret::run;
pub use crate::traits::{from_fn, FromFn, StepSequence};
pub use crate::types::maybe::Maybe;
pub use crate::types::maybe::Maybe::{Absent, Present};
pub use crate::types::outcome::Outcome;
pub use crate::types::outcome::Outcome::{Failure, Success};
pub use crate::types::{Fault, FaultOutcome, Panic, Step, StdFault, Yielded};
