//! Sources of example values for generated code blocks.

use std::collections::HashMap;

/// Looks up example text by key.
///
/// Implementations must be shareable across threads so that sections can
/// be produced in parallel.
pub trait ExampleSource: Send + Sync {
    /// Get the example text for `key`, if one exists.
    fn example(&self, key: &str) -> Option<String>;
}

/// An in-memory [`ExampleSource`].
#[derive(Debug, Clone, Default)]
pub struct StaticExamples {
    values: HashMap<String, String>,
}

impl StaticExamples {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an example value (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace an example value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the number of stored examples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no examples are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ExampleSource for StaticExamples {
    fn example(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<F> ExampleSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn example(&self, key: &str) -> Option<String> {
        self(key)
    }
}
