//! Callback system for bulkhead rejection events

use crate::context::CallContext;
use std::sync::Arc;

/// Caller-supplied hook fired when admission is refused
pub type RejectionCallback = Arc<dyn Fn(&CallContext) + Send + Sync>;

/// Callbacks for bulkhead events
///
/// The rejection hook runs synchronously inside the rejection path. Its
/// failures are not caught; a panicking hook propagates to the caller of
/// the admission attempt.
#[derive(Clone)]
pub struct Callbacks {
    pub on_rejected: Option<RejectionCallback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self { on_rejected: None }
    }

    pub fn trigger_rejected(&self, context: &CallContext) {
        if let Some(ref callback) = self.on_rejected {
            callback(context);
        }
    }
}

impl Default for Callbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_rejected", &self.on_rejected.is_some())
            .finish()
    }
}
