//! The dynamically typed scripting value
//!
//! Immediate values (nil, booleans, integers, floats) are stored inline.
//! Heap values are reference-counted records owned by the runtime's object
//! graph; cloning a `Value` clones the reference, never the record.

use std::fmt;
use std::rc::Rc;

use crate::object::{ClassRef, DataRef, ObjectRef, ProcRef};

/// A scripting value.
#[derive(Clone, Default)]
pub enum Value {
    /// `nil`
    #[default]
    Nil,
    /// `true` / `false`
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// Immutable string
    Str(Rc<str>),
    /// Class instance
    Object(ObjectRef),
    /// Class or module
    Class(ClassRef),
    /// Closure
    Proc(ProcRef),
    /// Type-tagged opaque payload
    Data(DataRef),
}

/// Coarse type of a value, used for argument checks and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `nil`
    Nil,
    /// Boolean
    Bool,
    /// Integer
    Int,
    /// Float
    Float,
    /// String
    Str,
    /// Instance
    Object,
    /// Class or module
    Class,
    /// Closure
    Proc,
    /// Opaque data
    Data,
}

impl ValueType {
    /// Scripting-visible type name
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Nil => "nil",
            ValueType::Bool => "true/false",
            ValueType::Int => "Integer",
            ValueType::Float => "Float",
            ValueType::Str => "String",
            ValueType::Object => "Object",
            ValueType::Class => "Class",
            ValueType::Proc => "Proc",
            ValueType::Data => "Data",
        }
    }
}

impl Value {
    /// The `nil` value
    #[inline]
    pub const fn nil() -> Self {
        Value::Nil
    }

    /// Build a string value that is not tracked by any runtime arena
    pub fn str(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Check if value is nil
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Scripting truthiness: everything except `nil` and `false`
    #[inline]
    pub const fn truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Get the coarse type
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Nil => ValueType::Nil,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::Object(_) => ValueType::Object,
            Value::Class(_) => ValueType::Class,
            Value::Proc(_) => ValueType::Proc,
            Value::Data(_) => ValueType::Data,
        }
    }

    /// Type name for diagnostics. Instances report their class path and
    /// opaque data reports its data type name.
    pub fn type_name(&self) -> String {
        match self {
            Value::Object(obj) => obj.class().path().to_string(),
            Value::Data(data) => data.data_type().name.to_string(),
            other => other.value_type().name().to_string(),
        }
    }

    /// Extract boolean value
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract float value. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Extract string contents
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract instance reference
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Extract class reference
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Value::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Extract closure reference
    pub fn as_proc(&self) -> Option<&ProcRef> {
        match self {
            Value::Proc(p) => Some(p),
            _ => None,
        }
    }

    /// Extract opaque data reference
    pub fn as_data(&self) -> Option<&DataRef> {
        match self {
            Value::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Whether the value lives on the heap (and so needs arena protection)
    pub const fn is_heap(&self) -> bool {
        matches!(
            self,
            Value::Str(_) | Value::Object(_) | Value::Class(_) | Value::Proc(_) | Value::Data(_)
        )
    }

    /// Identity comparison: immediates by value, heap values by address
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Proc(a), Value::Proc(b)) => Rc::ptr_eq(a, b),
            (Value::Data(a), Value::Data(b)) => Rc::ptr_eq(a, b),
            _ => self == other,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Proc(a), Value::Proc(b)) => Rc::ptr_eq(a, b),
            (Value::Data(a), Value::Data(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::Object(obj) => write!(f, "#<{}>", obj.class().path()),
            Value::Class(class) => write!(f, "{}", class.path()),
            Value::Proc(_) => write!(f, "#<Proc>"),
            Value::Data(data) => write!(f, "#<Data {}>", data.data_type().name),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

impl From<ClassRef> for Value {
    fn from(class: ClassRef) -> Self {
        Value::Class(class)
    }
}

impl From<ProcRef> for Value {
    fn from(p: ProcRef) -> Self {
        Value::Proc(p)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Nil)
    }
}
