//! Interpreter options

use serde::Deserialize;

/// Default arena size, matching the classic embedded interpreter build
pub const DEFAULT_ARENA_CAPACITY: usize = 100;

/// Options for [`crate::Interp::new`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostOptions {
    /// Maximum number of protected heap values per frame stack
    pub arena_capacity: usize,
    /// Maximum nesting of method and closure invocations
    pub max_depth: usize,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            arena_capacity: DEFAULT_ARENA_CAPACITY,
            max_depth: 256,
        }
    }
}
