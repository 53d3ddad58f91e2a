//! Error types for bulkhead operations

use std::error::Error;
use std::fmt;

/// Errors that can occur while executing a call through a bulkhead
///
/// Rejection and cancellation are the only outcomes this crate introduces;
/// the wrapped operation's own failure is passed through unchanged via
/// `Execution`.
#[derive(Debug)]
pub enum BulkheadError<E = Box<dyn Error + Send + Sync>> {
    /// Both capacities are exhausted, the call was refused without waiting
    Rejected { policy: String },
    /// The cancellation signal fired before the call started executing
    Cancelled { policy: String },
    /// The wrapped operation failed
    Execution(E),
}

impl<E> BulkheadError<E> {
    /// Returns `true` if this is a rejection (the backpressure signal)
    pub fn is_rejected(&self) -> bool {
        matches!(self, BulkheadError::Rejected { .. })
    }

    /// Returns `true` if the call was cancelled by its caller
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BulkheadError::Cancelled { .. })
    }
}

impl<E: fmt::Display> fmt::Display for BulkheadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkheadError::Rejected { policy } => {
                write!(f, "Bulkhead '{}' rejected the call (at capacity)", policy)
            }
            BulkheadError::Cancelled { policy } => {
                write!(f, "Bulkhead '{}' call was cancelled", policy)
            }
            BulkheadError::Execution(e) => write!(f, "Bulkhead execution failed: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for BulkheadError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BulkheadError::Execution(e) => Some(e),
            _ => None,
        }
    }
}

/// Invalid construction parameters, raised eagerly before any pool is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_parallelization` must be greater than 0
    ZeroParallelization,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroParallelization => {
                write!(f, "max_parallelization must be greater than 0")
            }
        }
    }
}

impl Error for ConfigError {}
