//! Toolkit errors

use std::error::Error;

use crate::toolkit::{BufferId, NativeId};

/// Result type for toolkit calls
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Failure reported by a widget callback.
///
/// The toolkit never inspects it; the code that registered the callback
/// unwraps it again with [`CallbackError::downcast`].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CallbackError(Box<dyn Error>);

impl CallbackError {
    /// Wrap any error
    pub fn new(err: impl Error + 'static) -> Self {
        CallbackError(Box::new(err))
    }

    /// Recover a concrete error type
    pub fn downcast<E: Error + 'static>(self) -> Result<E, CallbackError> {
        self.0.downcast::<E>().map(|e| *e).map_err(CallbackError)
    }
}

/// Toolkit errors
#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    /// Native object has been destroyed (or never existed)
    #[error("native object {0} has been destroyed")]
    Destroyed(NativeId),

    /// Text buffer has been destroyed
    #[error("text buffer {0} has been destroyed")]
    BufferDestroyed(BufferId),

    /// Operation needs another kind of native object
    #[error("{id} is a {actual}, expected {expected}")]
    WrongKind {
        /// Target object
        id: NativeId,
        /// Kind the operation needs
        expected: &'static str,
        /// Kind of the target
        actual: &'static str,
    },

    /// A callback failed inside the event loop
    #[error("callback failed: {0}")]
    Callback(CallbackError),
}
