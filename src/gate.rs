//! Dual-capacity admission gate backed by counting semaphores
//!
//! One pool bounds the total admitted calls (executing + queued), a second
//! bounds the calls actually executing. Backlog is expressed purely as the
//! extra capacity of the admitted pool; there is no queue data structure.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::sync::CancellationToken;

/// Outcome of the non-blocking admission probe
pub(crate) enum Admission {
    /// The call is in the system, holding one admitted permit
    Admitted(OwnedSemaphorePermit),
    /// Both capacities exhausted; no permit was taken
    Rejected,
}

/// The two token pools of a bulkhead
///
/// Each pool is an internally-synchronized counting semaphore; the gate
/// takes no locks of its own. Both pools are owned by exactly one policy
/// instance and are never closed.
#[derive(Debug)]
pub(crate) struct AdmissionGate {
    admitted: Arc<Semaphore>,
    execution: Arc<Semaphore>,
}

impl AdmissionGate {
    pub(crate) fn new(max_parallelization: usize, total_admitted: usize) -> Self {
        Self {
            admitted: Arc::new(Semaphore::new(total_admitted)),
            execution: Arc::new(Semaphore::new(max_parallelization)),
        }
    }

    /// Zero-wait probe of the admitted pool
    ///
    /// This is the only admission decision: a single atomic try-acquire,
    /// so the gate never over-admits under contention.
    pub(crate) fn try_admit(&self) -> Admission {
        match Arc::clone(&self.admitted).try_acquire_owned() {
            Ok(permit) => Admission::Admitted(permit),
            // The pool is never closed, so any error means no permits
            Err(_) => Admission::Rejected,
        }
    }

    /// Wait for an execution permit, honoring the cancellation signal
    ///
    /// Returns `None` if the signal fires first. The wait is biased toward
    /// cancellation so an already-cancelled caller never claims a slot.
    pub(crate) async fn acquire_execution(
        &self,
        cancel: &CancellationToken,
    ) -> Option<OwnedSemaphorePermit> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            permit = Arc::clone(&self.execution).acquire_owned() => {
                Some(permit.expect("execution pool is never closed"))
            }
        }
    }

    /// Free execution permits at this instant
    pub(crate) fn execution_available(&self) -> usize {
        self.execution.available_permits()
    }

    /// Free admitted permits at this instant
    pub(crate) fn admitted_available(&self) -> usize {
        self.admitted.available_permits()
    }
}
