//! Scoped GC arena protection

use crate::context::ScriptRuntime;
use crate::error::{ScriptError, ScriptResult};

/// Saves the runtime's arena index on acquisition and restores it on drop,
/// so every exit path (including `?`) releases what was allocated inside.
pub struct ArenaGuard<'a> {
    rt: &'a dyn ScriptRuntime,
    index: usize,
}

impl<'a> ArenaGuard<'a> {
    /// Save the arena. Fails with `RuntimeError("arena overflow")` when the
    /// arena has no room left.
    pub fn acquire(rt: &'a dyn ScriptRuntime) -> ScriptResult<Self> {
        let index = rt.arena_save();
        if index >= rt.arena_capacity() {
            return Err(ScriptError::runtime("arena overflow"));
        }
        Ok(ArenaGuard { rt, index })
    }

    /// Index saved at acquisition
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Drop for ArenaGuard<'_> {
    fn drop(&mut self) {
        self.rt.arena_restore(self.index);
    }
}
