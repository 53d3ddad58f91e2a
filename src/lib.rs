//! BulkheadMachines - Bulkhead isolation for async call paths
//!
//! This crate provides an admission-control policy with:
//! - Dual capacity limits: N calls executing, up to M more queued
//! - Constant-time rejection once both capacities are exhausted
//! - Cooperative cancellation while queued and while executing
//! - A synchronous rejection callback carrying the call's context
//!
//! Backlog is expressed purely as extra capacity on the admission counter;
//! there is no queue data structure, so excess callers are turned away in
//! O(1) without consuming a wait slot.
//!
//! # Example
//!
//! ```rust
//! use bulkhead_machines::{Bulkhead, CallContext};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bulkhead = Bulkhead::builder("orders-db")
//!     .max_parallelization(10)
//!     .max_queuing_actions(20)
//!     .on_rejected(|ctx| eprintln!("orders-db full, dropped {:?}", ctx.operation_key()))
//!     .build()
//!     .expect("valid configuration");
//!
//! let context = CallContext::new("lookup").with_value("correlation_id", "req-42");
//! let cancel = CancellationToken::new();
//!
//! let result = bulkhead
//!     .call(&context, &cancel, |_cancel| async {
//!         // Your protected call here
//!         Ok::<_, String>("row")
//!     })
//!     .await;
//!
//! assert_eq!(result.unwrap(), "row");
//! # }
//! ```

pub mod builder;
pub mod bulkhead;
pub mod callbacks;
pub mod context;
pub mod errors;
mod gate;

pub use builder::BulkheadBuilder;
pub use bulkhead::Bulkhead;
pub use callbacks::{Callbacks, RejectionCallback};
pub use context::CallContext;
pub use errors::{BulkheadError, ConfigError};
