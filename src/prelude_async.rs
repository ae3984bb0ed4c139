//! Async prelude - everything from the sync [`prelude`](crate::prelude)
//! plus the deferred surface.
//!
//! # Usage
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch(id: u64) -> Outcome<u64, &'static str> {
//!     OutcomeFuture::new(async move { Success(id) })
//!         .map(|v| v + 1)
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! - Everything from the sync [`prelude`](crate::prelude)
//! - **Deferred containers**: [`OutcomeFuture`], [`MaybeFuture`] and their
//!   boxed aliases
//! - **Interpreter**: [`run_async`], [`AsyncYielded`]
//! - **Adapters**: [`async_outcome_fn`], [`async_sequence_fn`]

pub use crate::prelude::*;

pub use crate::async_ext::{
    async_outcome_fn, async_sequence_fn, run_async, AsyncYielded, BoxMaybeFuture,
    BoxOutcomeFuture, MaybeFuture, OutcomeFuture,
};
