//! Synthetic input events
//!
//! A headless toolkit has no display server; events are posted by the
//! embedding program and consumed by [`crate::Toolkit::run`].

use crate::toolkit::NativeId;

/// One user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Click or keyboard activation
    Activate(NativeId),
    /// Replace the text of an input, then activate it
    Type(NativeId, String),
    /// Select a browser line (1-based), then activate the browser
    Select(NativeId, i32),
    /// Window close request
    Close(NativeId),
}

impl Event {
    /// Target object
    pub fn target(&self) -> NativeId {
        match self {
            Event::Activate(id) | Event::Type(id, _) | Event::Select(id, _) | Event::Close(id) => {
                *id
            }
        }
    }
}
