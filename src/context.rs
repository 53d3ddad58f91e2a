//! Ambient call context passed through bulkhead executions
//!
//! The context is a caller-supplied bag of key/value metadata (correlation
//! ids, tenant names, ...). The bulkhead itself never reads it; it is handed
//! to the rejection callback so caller-owned hooks can log or tag metrics.

use std::collections::HashMap;

/// Key/value metadata attached to a single call through a bulkhead
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    operation_key: Option<String>,
    values: HashMap<String, String>,
}

impl CallContext {
    /// Create a context identifying the operation being executed
    pub fn new(operation_key: impl Into<String>) -> Self {
        Self {
            operation_key: Some(operation_key.into()),
            values: HashMap::new(),
        }
    }

    /// Create an empty context with no operation key
    pub fn empty() -> Self {
        Self::default()
    }

    /// The operation key, if one was set
    pub fn operation_key(&self) -> Option<&str> {
        self.operation_key.as_deref()
    }

    /// Attach a metadata value, builder-style
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Insert a metadata value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a metadata value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of metadata entries (excluding the operation key)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no metadata entries are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over metadata entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
