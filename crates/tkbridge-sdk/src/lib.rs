//! tkbridge SDK - the scripting-runtime surface native extensions program against
//!
//! This crate provides the value representation, heap records, typed
//! argument extraction and the [`ScriptRuntime`] trait. An extension such as
//! the widget bridge depends only on this crate; a concrete interpreter
//! implements [`ScriptRuntime`].
//!
//! # Example
//!
//! ```ignore
//! use tkbridge_sdk::{method_fn, ScriptRuntime, Value};
//!
//! fn install(rt: &dyn ScriptRuntime) -> tkbridge_sdk::ScriptResult<()> {
//!     let module = rt.define_module("Greeter")?;
//!     rt.define_module_function(
//!         &module,
//!         "hello",
//!         method_fn(|rt, call| rt.new_string(&format!("hello {}", call.string(0)?))),
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod arena;
pub mod args;
pub mod context;
pub mod error;
pub mod object;
pub mod value;

// ============================================================================
// Re-exports
// ============================================================================

pub use arena::ArenaGuard;
pub use args::{ArgTag, Call, Shape};
pub use context::{RuntimeRef, ScriptRuntime};
pub use error::{ScriptError, ScriptResult};
pub use object::{
    ancestors, method_fn, Class, ClassRef, Data, DataRef, DataType, MethodFn, Object, ObjectRef,
    Proc, ProcFn, ProcRef,
};
pub use value::{Value, ValueType};
