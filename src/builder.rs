//! Builder API for ergonomic bulkhead configuration

use crate::bulkhead::Bulkhead;
use crate::callbacks::Callbacks;
use crate::context::CallContext;
use crate::errors::ConfigError;
use std::sync::Arc;

/// Builder for creating bulkheads with fluent API
pub struct BulkheadBuilder {
    name: String,
    max_parallelization: usize,
    max_queuing_actions: usize,
    callbacks: Callbacks,
}

impl BulkheadBuilder {
    /// Create a new builder for a bulkhead with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_parallelization: 1,
            max_queuing_actions: 0,
            callbacks: Callbacks::new(),
        }
    }

    /// Set how many calls may execute concurrently (default 1)
    ///
    /// Must be greater than 0; validated by [`build`](Self::build).
    pub fn max_parallelization(mut self, max: usize) -> Self {
        self.max_parallelization = max;
        self
    }

    /// Set how many additional calls may wait for a free slot (default 0)
    ///
    /// With a queue of 0, any call beyond `max_parallelization` is rejected
    /// immediately.
    pub fn max_queuing_actions(mut self, max: usize) -> Self {
        self.max_queuing_actions = max;
        self
    }

    /// Set callback for when a call is rejected
    ///
    /// Invoked synchronously with the rejected call's context, before the
    /// rejection error surfaces. Typically used for logging or metrics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bulkhead_machines::Bulkhead;
    ///
    /// let bulkhead = Bulkhead::builder("payments")
    ///     .max_parallelization(10)
    ///     .max_queuing_actions(20)
    ///     .on_rejected(|ctx| eprintln!("payments full, dropped {:?}", ctx.operation_key()))
    ///     .build()
    ///     .expect("valid configuration");
    /// # drop(bulkhead);
    /// ```
    pub fn on_rejected<F>(mut self, f: F) -> Self
    where
        F: Fn(&CallContext) + Send + Sync + 'static,
    {
        self.callbacks.on_rejected = Some(Arc::new(f));
        self
    }

    /// Build the bulkhead, validating the configuration
    pub fn build(self) -> Result<Bulkhead, ConfigError> {
        Bulkhead::with_callbacks(
            self.name,
            self.max_parallelization,
            self.max_queuing_actions,
            self.callbacks,
        )
    }
}
