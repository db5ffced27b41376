//! Mapping toolkit failures onto script exceptions

use tkbridge_sdk::{ScriptError, ScriptResult};
use tkbridge_toolkit::{ToolkitError, ToolkitResult};

/// Convert a toolkit error into the exception the script sees.
///
/// A failing callback carries the `ScriptError` its closure raised; that
/// error is unwrapped so the script gets its own exception back from `run`.
pub fn script_error(err: ToolkitError) -> ScriptError {
    match err {
        ToolkitError::WrongKind {
            expected, actual, ..
        } => ScriptError::type_mismatch(expected, actual),
        ToolkitError::Destroyed(id) => {
            ScriptError::runtime(format!("native object {} has been destroyed", id))
        }
        ToolkitError::BufferDestroyed(id) => {
            ScriptError::runtime(format!("text buffer {} has been destroyed", id))
        }
        ToolkitError::Callback(inner) => match inner.downcast::<ScriptError>() {
            Ok(err) => err,
            Err(other) => ScriptError::runtime(format!("callback failed: {}", other)),
        },
    }
}

/// `.script()` on toolkit results
pub trait NativeResultExt<T> {
    /// Map the error with [`script_error`]
    fn script(self) -> ScriptResult<T>;
}

impl<T> NativeResultExt<T> for ToolkitResult<T> {
    fn script(self) -> ScriptResult<T> {
        self.map_err(script_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkbridge_toolkit::{CallbackError, Toolkit, WidgetKind};

    #[test]
    fn test_mapping() {
        let tk = Toolkit::default();
        let button = tk.create_widget(WidgetKind::Button, 0, 0, 1, 1, None);
        let err = tk.children(button).script().unwrap_err();
        assert_eq!(err, ScriptError::type_mismatch("Group", "Button"));

        tk.destroy(button).unwrap();
        let err = tk.show(button).script().unwrap_err();
        assert_eq!(err.class_name(), "RuntimeError");

        let raised = ScriptError::raised("IOError", "closed");
        let err = script_error(ToolkitError::Callback(CallbackError::new(raised.clone())));
        assert_eq!(err, raised);
    }
}
