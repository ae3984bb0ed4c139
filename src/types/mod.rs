//! Container data types and protocol shapes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Failure, Outcome, Success};
//!
//! let o: Outcome<i32, &str> = Success(20);
//! let chained = o.and_then(|v| if v > 10 { Success(v) } else { Failure("too small") });
//! assert_eq!(chained, Success(20));
//! ```

pub mod fault;
pub mod maybe;
pub mod outcome;
pub mod step;

pub use fault::{Fault, Panic, StdFault};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use step::{Step, Yielded};

/// Outcome alias carrying the standard recoverable fault kind.
///
/// # Examples
///
/// ```
/// use outcome_rail::{FaultOutcome, StdFault, Success};
///
/// fn parse(input: &str) -> FaultOutcome<i32> {
///     match input.parse::<i32>() {
///         Ok(v) => Success(v),
///         Err(e) => outcome_rail::Failure(StdFault::wrap(e)),
///     }
/// }
///
/// assert!(parse("42").is_success());
/// assert!(parse("x").is_failure());
/// ```
pub type FaultOutcome<T> = Outcome<T, StdFault>;
