//! GC arena
//!
//! Heap values created by native code are pushed here so a collector would
//! see them as roots until the creating frame restores the arena index.

use tkbridge_sdk::{ScriptError, ScriptResult, Value};

/// Bounded stack of protected heap values
pub struct Arena {
    values: Vec<Value>,
    capacity: usize,
}

impl Arena {
    /// Create an empty arena
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Protect a value. Immediates are ignored.
    pub fn push(&mut self, value: &Value) -> ScriptResult<()> {
        if !value.is_heap() {
            return Ok(());
        }
        if self.values.len() >= self.capacity {
            return Err(ScriptError::runtime("arena overflow"));
        }
        self.values.push(value.clone());
        Ok(())
    }

    /// Current index
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Release everything above `index`
    pub fn truncate(&mut self, index: usize) {
        self.values.truncate(index);
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
