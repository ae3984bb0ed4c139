//! Async extensions: deferred containers and the asynchronous interpreter.
//!
//! Everything here composes over a single pending resolution; suspension
//! happens only where a deferred container is awaited, and no operation
//! introduces parallelism.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
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

mod adapt;
mod interpret;
mod maybe_future;
mod outcome_future;

pub use adapt::{async_outcome_fn, async_sequence_fn};
pub use interpret::{run_async, AsyncYielded};
pub use maybe_future::{BoxMaybeFuture, MaybeFuture};
pub use outcome_future::{BoxOutcomeFuture, OutcomeFuture};
