//! Abstract interpreter operations
//!
//! Defines the interface a scripting runtime implements for native
//! extensions. Bindings program against this trait and never see
//! interpreter internals.

use std::any::Any;
use std::rc::{Rc, Weak};

use crate::error::ScriptResult;
use crate::object::{ClassRef, DataType, MethodFn, ObjectRef, ProcRef};
use crate::value::Value;

/// Weak runtime reference stored in native-side records
pub type RuntimeRef = Weak<dyn ScriptRuntime>;

/// Abstract interpreter for native extensions.
///
/// All calls happen on the interpreter thread. Implementations may call
/// back into native methods from any of the dispatching operations, so they
/// must not hold internal borrows across a method or closure invocation.
pub trait ScriptRuntime {
    /// Weak reference to this runtime, for native records that outlive a call
    fn runtime_ref(&self) -> RuntimeRef;

    // ========================================================================
    // Declarations
    // ========================================================================

    /// The root class; top-level constants live on it
    fn object_class(&self) -> ClassRef;

    /// Define (or reopen) a top-level module
    fn define_module(&self, name: &str) -> ScriptResult<ClassRef>;

    /// Define (or reopen) a class nested in `outer` with the given parent
    fn define_class_under(
        &self,
        outer: &ClassRef,
        name: &str,
        parent: &ClassRef,
    ) -> ScriptResult<ClassRef>;

    /// Bind an instance method
    fn define_method(&self, class: &ClassRef, name: &str, f: MethodFn);

    /// Bind a module function
    fn define_module_function(&self, module: &ClassRef, name: &str, f: MethodFn);

    /// Resolve a `::`-separated constant path to a class
    fn class_get(&self, path: &str) -> ScriptResult<ClassRef>;

    // ========================================================================
    // Instances and values
    // ========================================================================

    /// Allocate an instance without running `initialize`
    fn allocate(&self, class: &ClassRef) -> ScriptResult<ObjectRef>;

    /// Allocate an instance and dispatch `initialize`
    fn new_instance(
        &self,
        class: &ClassRef,
        args: &[Value],
        block: Option<&ProcRef>,
    ) -> ScriptResult<Value>;

    /// Read an instance slot
    fn iv_get(&self, obj: &ObjectRef, name: &str) -> Value;

    /// Write an instance slot
    fn iv_set(&self, obj: &ObjectRef, name: &str, value: Value);

    /// Allocate a string
    fn new_string(&self, s: &str) -> ScriptResult<Value>;

    /// Allocate a type-tagged opaque payload
    fn wrap_data(&self, data_type: &'static DataType, payload: Rc<dyn Any>) -> ScriptResult<Value>;

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Call a method by name
    fn funcall(
        &self,
        recv: &Value,
        name: &str,
        args: &[Value],
        block: Option<&ProcRef>,
    ) -> ScriptResult<Value>;

    /// Invoke a closure
    fn yield_proc(&self, block: &ProcRef, args: &[Value]) -> ScriptResult<Value>;

    // ========================================================================
    // GC arena
    // ========================================================================

    /// Current arena index
    fn arena_save(&self) -> usize;

    /// Drop arena entries above `index`
    fn arena_restore(&self, index: usize);

    /// Maximum number of arena entries
    fn arena_capacity(&self) -> usize;
}
