//! Error types raised into the scripting runtime

/// Result type for every call that can raise into the script
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Scripting-level exceptions.
///
/// Each variant maps onto an exception class of the scripting runtime
/// (see [`ScriptError::class_name`]). Errors are raised synchronously at the
/// call that detects them and are never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    /// Wrong arity or argument type for a constructor or accessor
    #[error("ArgumentError: {0}")]
    ArgumentError(String),

    /// An object carries no handle of the expected kind
    #[error("TypeError: wrong argument type {got} (expected {expected})")]
    TypeMismatch {
        /// Expected kind name
        expected: String,
        /// Actual kind or class name
        got: String,
    },

    /// Allocation failure, arena exhaustion, or a missing native object
    #[error("RuntimeError: {0}")]
    RuntimeError(String),

    /// Method lookup failed along the whole ancestor chain
    #[error("NoMethodError: undefined method '{method}' for {receiver}")]
    NoMethodError {
        /// Method name
        method: String,
        /// Receiver description
        receiver: String,
    },

    /// Constant lookup failed
    #[error("NameError: uninitialized constant {0}")]
    NameError(String),

    /// Exception raised by script code itself
    #[error("{class}: {message}")]
    Raised {
        /// Exception class name
        class: String,
        /// Exception message
        message: String,
    },
}

impl ScriptError {
    /// Build an `ArgumentError`
    pub fn argument(msg: impl Into<String>) -> Self {
        ScriptError::ArgumentError(msg.into())
    }

    /// Build a `RuntimeError`
    pub fn runtime(msg: impl Into<String>) -> Self {
        ScriptError::RuntimeError(msg.into())
    }

    /// Build a `TypeMismatch`
    pub fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        ScriptError::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Build a script-level raise
    pub fn raised(class: impl Into<String>, message: impl Into<String>) -> Self {
        ScriptError::Raised {
            class: class.into(),
            message: message.into(),
        }
    }

    /// Name of the scripting exception class this error surfaces as
    pub fn class_name(&self) -> &str {
        match self {
            ScriptError::ArgumentError(_) => "ArgumentError",
            ScriptError::TypeMismatch { .. } => "TypeError",
            ScriptError::RuntimeError(_) => "RuntimeError",
            ScriptError::NoMethodError { .. } => "NoMethodError",
            ScriptError::NameError(_) => "NameError",
            ScriptError::Raised { class, .. } => class,
        }
    }
}

impl From<String> for ScriptError {
    fn from(s: String) -> Self {
        ScriptError::RuntimeError(s)
    }
}

impl From<&str> for ScriptError {
    fn from(s: &str) -> Self {
        ScriptError::RuntimeError(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(ScriptError::argument("x").class_name(), "ArgumentError");
        assert_eq!(ScriptError::runtime("x").class_name(), "RuntimeError");
        assert_eq!(ScriptError::type_mismatch("a", "b").class_name(), "TypeError");
        assert_eq!(ScriptError::raised("StopIteration", "done").class_name(), "StopIteration");
    }

    #[test]
    fn test_display() {
        let err = ScriptError::type_mismatch("fltk3_widget", "String");
        assert_eq!(
            err.to_string(),
            "TypeError: wrong argument type String (expected fltk3_widget)"
        );
        assert_eq!(ScriptError::from("arena overflow").to_string(), "RuntimeError: arena overflow");
    }
}
