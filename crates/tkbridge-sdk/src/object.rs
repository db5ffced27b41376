//! Heap records: classes, instances, closures and opaque data
//!
//! These are the shapes the scripting runtime hands to native code. The
//! runtime owns method dispatch and instance creation; the records here only
//! carry state.

use std::any::Any;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use crate::args::Call;
use crate::context::ScriptRuntime;
use crate::error::{ScriptError, ScriptResult};
use crate::value::Value;

/// Shared class reference
pub type ClassRef = Rc<Class>;
/// Shared instance reference
pub type ObjectRef = Rc<Object>;
/// Shared closure reference
pub type ProcRef = Rc<Proc>;
/// Shared opaque data reference
pub type DataRef = Rc<Data>;

/// Native method body
pub type MethodFn = Rc<dyn Fn(&dyn ScriptRuntime, Call<'_>) -> ScriptResult<Value>>;

/// Wrap a closure as a [`MethodFn`]
pub fn method_fn<F>(f: F) -> MethodFn
where
    F: Fn(&dyn ScriptRuntime, Call<'_>) -> ScriptResult<Value> + 'static,
{
    Rc::new(f)
}

// ============================================================================
// Class
// ============================================================================

/// A scripting class or module.
///
/// Classes form a single-inheritance chain through `parent`. Modules have no
/// parent and cannot be instantiated; they hold constants and module
/// functions.
pub struct Class {
    name: String,
    path: String,
    parent: Option<ClassRef>,
    is_module: bool,
    methods: RefCell<BTreeMap<String, MethodFn>>,
    singleton_methods: RefCell<BTreeMap<String, MethodFn>>,
    constants: RefCell<BTreeMap<String, Value>>,
}

impl Class {
    /// Create a class record
    pub fn new_class(name: &str, path: &str, parent: Option<ClassRef>) -> ClassRef {
        Rc::new(Class {
            name: name.to_string(),
            path: path.to_string(),
            parent,
            is_module: false,
            methods: RefCell::new(BTreeMap::new()),
            singleton_methods: RefCell::new(BTreeMap::new()),
            constants: RefCell::new(BTreeMap::new()),
        })
    }

    /// Create a module record
    pub fn new_module(name: &str, path: &str) -> ClassRef {
        Rc::new(Class {
            name: name.to_string(),
            path: path.to_string(),
            parent: None,
            is_module: true,
            methods: RefCell::new(BTreeMap::new()),
            singleton_methods: RefCell::new(BTreeMap::new()),
            constants: RefCell::new(BTreeMap::new()),
        })
    }

    /// Short name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name (`FLTK3::Widget`)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Declared parent class
    pub fn parent(&self) -> Option<&ClassRef> {
        self.parent.as_ref()
    }

    /// Whether this record is a module
    pub fn is_module(&self) -> bool {
        self.is_module
    }

    /// Add or replace an instance method
    pub fn define_method(&self, name: &str, f: MethodFn) {
        self.methods.borrow_mut().insert(name.to_string(), f);
    }

    /// Add or replace a singleton (class-level or module) method
    pub fn define_singleton_method(&self, name: &str, f: MethodFn) {
        self.singleton_methods.borrow_mut().insert(name.to_string(), f);
    }

    /// Instance method declared on this class itself
    pub fn own_method(&self, name: &str) -> Option<MethodFn> {
        self.methods.borrow().get(name).cloned()
    }

    /// Names of instance methods declared on this class itself
    pub fn own_method_names(&self) -> Vec<String> {
        self.methods.borrow().keys().cloned().collect()
    }

    /// Look up an instance method along the parent chain
    pub fn find_method(&self, name: &str) -> Option<MethodFn> {
        if let Some(f) = self.own_method(name) {
            return Some(f);
        }
        let mut cursor = self.parent.clone();
        while let Some(class) = cursor {
            if let Some(f) = class.own_method(name) {
                return Some(f);
            }
            cursor = class.parent.clone();
        }
        None
    }

    /// Look up a singleton method along the parent chain
    pub fn find_singleton_method(&self, name: &str) -> Option<MethodFn> {
        if let Some(f) = self.singleton_methods.borrow().get(name) {
            return Some(f.clone());
        }
        let mut cursor = self.parent.clone();
        while let Some(class) = cursor {
            if let Some(f) = class.singleton_methods.borrow().get(name) {
                return Some(f.clone());
            }
            cursor = class.parent.clone();
        }
        None
    }

    /// Whether an instance of this class answers `name`
    pub fn responds_to(&self, name: &str) -> bool {
        self.find_method(name).is_some()
    }

    /// Set a constant
    pub fn set_const(&self, name: &str, value: Value) {
        self.constants.borrow_mut().insert(name.to_string(), value);
    }

    /// Get a constant declared directly on this class or module
    pub fn const_get(&self, name: &str) -> Option<Value> {
        self.constants.borrow().get(name).cloned()
    }

    /// Constant names, sorted
    pub fn constant_names(&self) -> Vec<String> {
        self.constants.borrow().keys().cloned().collect()
    }

    /// Whether `self` is `other` or inherits from it
    pub fn is_a(&self, other: &Class) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let mut cursor = self.parent.clone();
        while let Some(class) = cursor {
            if std::ptr::eq(&*class, other) {
                return true;
            }
            cursor = class.parent.clone();
        }
        false
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("path", &self.path)
            .field("parent", &self.parent.as_ref().map(|p| p.path.clone()))
            .field("is_module", &self.is_module)
            .finish()
    }
}

/// The class itself followed by every ancestor, nearest first
pub fn ancestors(class: &ClassRef) -> Vec<ClassRef> {
    let mut chain = vec![class.clone()];
    let mut cursor = class.parent.clone();
    while let Some(parent) = cursor {
        cursor = parent.parent.clone();
        chain.push(parent);
    }
    chain
}

// ============================================================================
// Object
// ============================================================================

/// A class instance with its instance-variable slots.
///
/// Slot names that do not start with `@` cannot be reached from script code.
pub struct Object {
    class: ClassRef,
    ivars: RefCell<HashMap<String, Value>>,
}

impl Object {
    /// Create an empty instance. Runtimes call this from `allocate`.
    pub fn new(class: ClassRef) -> ObjectRef {
        Rc::new(Object {
            class,
            ivars: RefCell::new(HashMap::new()),
        })
    }

    /// Instance class
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Read a slot, `nil` when unset
    pub fn get_ivar(&self, name: &str) -> Value {
        self.ivars.borrow().get(name).cloned().unwrap_or(Value::Nil)
    }

    /// Write a slot
    pub fn set_ivar(&self, name: &str, value: Value) {
        self.ivars.borrow_mut().insert(name.to_string(), value);
    }

    /// Whether a slot has been written
    pub fn has_ivar(&self, name: &str) -> bool {
        self.ivars.borrow().contains_key(name)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}>", self.class.path())
    }
}

// ============================================================================
// Proc
// ============================================================================

/// Closure body
pub type ProcFn = dyn Fn(&dyn ScriptRuntime, &[Value]) -> ScriptResult<Value>;

/// A scripting closure
pub struct Proc {
    body: Box<ProcFn>,
}

impl Proc {
    /// Wrap a Rust closure
    pub fn new<F>(f: F) -> ProcRef
    where
        F: Fn(&dyn ScriptRuntime, &[Value]) -> ScriptResult<Value> + 'static,
    {
        Rc::new(Proc { body: Box::new(f) })
    }

    /// Run the body directly. Prefer [`ScriptRuntime::yield_proc`], which
    /// protects the arena around the call.
    pub fn call(&self, rt: &dyn ScriptRuntime, args: &[Value]) -> ScriptResult<Value> {
        (self.body)(rt, args)
    }
}

// ============================================================================
// Data
// ============================================================================

/// Type tag for opaque data payloads
#[derive(Debug, PartialEq, Eq)]
pub struct DataType {
    /// Tag name reported in type errors
    pub name: &'static str,
}

/// An opaque native payload tagged with its [`DataType`]
pub struct Data {
    data_type: &'static DataType,
    payload: Rc<dyn Any>,
}

impl Data {
    /// Tag a payload
    pub fn new(data_type: &'static DataType, payload: Rc<dyn Any>) -> DataRef {
        Rc::new(Data { data_type, payload })
    }

    /// Payload tag
    pub fn data_type(&self) -> &'static DataType {
        self.data_type
    }

    /// Untyped payload
    pub fn payload(&self) -> &Rc<dyn Any> {
        &self.payload
    }

    /// Extract the payload, checking the tag first
    pub fn get<T: Any>(&self, expected: &'static DataType) -> ScriptResult<Rc<T>> {
        if self.data_type.name != expected.name {
            return Err(ScriptError::type_mismatch(expected.name, self.data_type.name));
        }
        self.payload
            .clone()
            .downcast::<T>()
            .map_err(|_| ScriptError::type_mismatch(expected.name, self.data_type.name))
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Data {}>", self.data_type.name)
    }
}
