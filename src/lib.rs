//! Composable error handling on two algebraic containers, with a
//! generator-style interpreter for straight-line early-returning chains and
//! deferred wrappers for asynchronous composition.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Container Chains
//!
//! ```
//! use outcome_rail::{Failure, Outcome, Success};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
//!     if b == 0 {
//!         Failure("division by zero")
//!     } else {
//!         Success(a / b)
//!     }
//! }
//!
//! let result = divide(10, 2).and_then(|v| divide(v, 0)).map(|v| v + 1);
//! assert_eq!(result, Failure("division by zero"));
//! ```
//!
//! ## Step Sequences
//!
//! A linear sequence of container-producing steps reads as straight-line
//! code; the interpreter feeds each success payload into the next step and
//! stops at the first failure.
//!
//! ```
//! use outcome_rail::{from_fn, run, Failure, Outcome, Step, Success, Yielded};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
//!     if b == 0 {
//!         Failure("division by zero")
//!     } else {
//!         Success(a / b)
//!     }
//! }
//!
//! let mut stage = 0;
//! let sequence = from_fn(move |input: Option<i32>| {
//!     stage += 1;
//!     match (stage, input) {
//!         (1, _) => Step::Yield(Yielded::Outcome(divide(10, 2))),
//!         (2, Some(v)) => Step::Yield(Yielded::Outcome(divide(v, 0))),
//!         (_, input) => Step::Done(input.unwrap_or(0)),
//!     }
//! });
//!
//! assert_eq!(run(sequence), Failure("division by zero"));
//! ```
//!
//! ## Deferred Composition (requires `async`)
//!
//! ```ignore
//! use outcome_rail::async_ext::OutcomeFuture;
//! use outcome_rail::Success;
//!
//! let outcome = OutcomeFuture::new(async { Success::<_, &str>(21) })
//!     .map(|v| v * 2)
//!     .await;
//! assert_eq!(outcome, Success(42));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Function adapters that pin the unified container type onto functions
pub mod adapt;
/// Conversions between containers, std types, and the fault capability
pub mod convert;
/// Synchronous interpreter for step sequences
pub mod interpret;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The suspend/resume protocol trait
pub mod traits;
/// Container data types, the fault capability, and protocol shapes
pub mod types;

/// Deferred containers and the asynchronous interpreter (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - sync prelude plus the deferred surface (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export the common surface at the root; the container variants follow
// the std prelude's Ok/Err idiom.
pub use interpret::run;
pub use traits::{from_fn, FromFn, StepSequence};
pub use types::maybe::Maybe;
pub use types::maybe::Maybe::{Absent, Present};
pub use types::outcome::Outcome;
pub use types::outcome::Outcome::{Failure, Success};
pub use types::{Fault, FaultOutcome, Panic, Step, StdFault, Yielded};
