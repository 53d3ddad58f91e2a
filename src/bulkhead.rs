//! Bulkhead policy object and execution wrapper
//!
//! A [`Bulkhead`] bounds how many calls may execute concurrently through a
//! protected path and how many more may wait for a free slot. Callers beyond
//! both limits are rejected in constant time, so a slow downstream cannot
//! pile up unbounded waiters and exhaust the process.

use crate::callbacks::Callbacks;
use crate::context::CallContext;
use crate::errors::{BulkheadError, ConfigError};
use crate::gate::{Admission, AdmissionGate};
use std::future::Future;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Admission-controlled execution policy with dual capacity limits
///
/// `max_parallelization` calls run at once; `max_queuing_actions` more may
/// wait for a slot; everything beyond that is rejected immediately. One
/// instance is created per protected resource and shared across callers.
#[derive(Debug)]
pub struct Bulkhead {
    name: String,
    max_parallelization: usize,
    max_queuing_actions: usize,
    gate: AdmissionGate,
    callbacks: Callbacks,
}

impl Bulkhead {
    /// Create a bulkhead with no rejection callback (use builder() for more options)
    pub fn new(
        name: impl Into<String>,
        max_parallelization: usize,
        max_queuing_actions: usize,
    ) -> Result<Self, ConfigError> {
        Self::with_callbacks(
            name.into(),
            max_parallelization,
            max_queuing_actions,
            Callbacks::new(),
        )
    }

    /// Create a bulkhead with callbacks (used by builder)
    pub(crate) fn with_callbacks(
        name: String,
        max_parallelization: usize,
        max_queuing_actions: usize,
        callbacks: Callbacks,
    ) -> Result<Self, ConfigError> {
        if max_parallelization == 0 {
            return Err(ConfigError::ZeroParallelization);
        }

        // Saturating so a huge queue capacity never wraps; clamped to what
        // the semaphore can represent.
        let total_admitted = max_parallelization
            .saturating_add(max_queuing_actions)
            .min(Semaphore::MAX_PERMITS);

        Ok(Self {
            gate: AdmissionGate::new(max_parallelization, total_admitted),
            name,
            max_parallelization,
            max_queuing_actions,
            callbacks,
        })
    }

    /// Create a new bulkhead builder
    pub fn builder(name: impl Into<String>) -> crate::builder::BulkheadBuilder {
        crate::builder::BulkheadBuilder::new(name)
    }

    /// Execute a unit of work under bulkhead protection
    ///
    /// Admission is decided by a zero-wait probe: if both the execution and
    /// queue capacities are taken, the call fails with
    /// [`BulkheadError::Rejected`] after firing the rejection callback, and
    /// never waits. An admitted call waits (cancellably) for an execution
    /// slot, then runs `work` with a clone of the cancellation token.
    ///
    /// The work's own result or failure is passed through verbatim. Both
    /// permits are released on every exit path, execution slot first.
    pub async fn call<T, E, F, Fut>(
        &self,
        context: &CallContext,
        cancel: &CancellationToken,
        work: F,
    ) -> Result<T, BulkheadError<E>>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        // A caller that has already given up is cancelled, not rejected.
        if cancel.is_cancelled() {
            return Err(BulkheadError::Cancelled {
                policy: self.name.clone(),
            });
        }

        let admitted = match self.gate.try_admit() {
            Admission::Admitted(permit) => permit,
            Admission::Rejected => {
                debug!(policy = %self.name, "bulkhead at capacity, rejecting call");
                // Caller-owned hook; its panics propagate. No permits were
                // taken, so there is nothing to release here.
                self.callbacks.trigger_rejected(context);
                return Err(BulkheadError::Rejected {
                    policy: self.name.clone(),
                });
            }
        };

        let execution = match self.gate.acquire_execution(cancel).await {
            Some(permit) => permit,
            None => {
                drop(admitted);
                return Err(BulkheadError::Cancelled {
                    policy: self.name.clone(),
                });
            }
        };

        let result = work(cancel.clone()).await;

        // Execution slot frees before the admitted slot. Should `work`
        // panic instead, locals unwind in reverse declaration order, which
        // releases the permits in the same order.
        drop(execution);
        drop(admitted);

        result.map_err(BulkheadError::Execution)
    }

    /// Get the policy name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the execution capacity
    pub fn max_parallelization(&self) -> usize {
        self.max_parallelization
    }

    /// Get the queue capacity
    pub fn max_queuing_actions(&self) -> usize {
        self.max_queuing_actions
    }

    /// Free execution slots at this instant
    ///
    /// Advisory snapshot for observability; concurrent callers may change it
    /// between two reads. Never use it to decide admission.
    pub fn execution_slots_available(&self) -> usize {
        self.gate.execution_available()
    }

    /// Capacity left purely for queuing at this instant
    ///
    /// Same advisory caveat as [`execution_slots_available`](Self::execution_slots_available).
    pub fn queue_slots_available(&self) -> usize {
        self.gate
            .admitted_available()
            .saturating_sub(self.gate.execution_available())
    }
}
