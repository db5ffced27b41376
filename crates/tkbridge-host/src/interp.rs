//! Reference interpreter
//!
//! `Interp` implements [`ScriptRuntime`] with a constant table rooted at
//! `Object`, method lookup up the declared parent chain, `initialize`
//! dispatch on instance creation, and a bounded GC arena. There is no
//! parser: embedding code and tests drive it by calling methods by name.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tkbridge_sdk::{
    Call, Class, ClassRef, Data, DataType, MethodFn, Object, ObjectRef, Proc, ProcRef,
    RuntimeRef, ScriptError, ScriptResult, ScriptRuntime, Value,
};
use tracing::{debug, trace};

use crate::arena::Arena;
use crate::options::HostOptions;

/// Single-threaded interpreter
pub struct Interp {
    this: Weak<Interp>,
    object_class: ClassRef,
    arena: RefCell<Arena>,
    depth: Cell<usize>,
    max_depth: usize,
}

impl Interp {
    /// Create an interpreter with an empty constant table
    pub fn new(options: HostOptions) -> Rc<Interp> {
        debug!(
            arena_capacity = options.arena_capacity,
            max_depth = options.max_depth,
            "interpreter created"
        );
        Rc::new_cyclic(|this| Interp {
            this: this.clone(),
            object_class: Class::new_class("Object", "Object", None),
            arena: RefCell::new(Arena::new(options.arena_capacity)),
            depth: Cell::new(0),
            max_depth: options.max_depth,
        })
    }

    /// Pin a heap value in the arena of the current frame
    pub fn protect(&self, value: &Value) -> ScriptResult<()> {
        self.arena.borrow_mut().push(value)
    }

    /// Number of values currently pinned
    pub fn arena_len(&self) -> usize {
        self.arena.borrow().len()
    }

    /// Build a closure
    pub fn proc<F>(&self, f: F) -> ProcRef
    where
        F: Fn(&dyn ScriptRuntime, &[Value]) -> ScriptResult<Value> + 'static,
    {
        Proc::new(f)
    }

    /// Call a method without a block
    pub fn call(&self, recv: &Value, name: &str, args: &[Value]) -> ScriptResult<Value> {
        self.funcall(recv, name, args, None)
    }

    /// Call a method with a block
    pub fn call_with_block(
        &self,
        recv: &Value,
        name: &str,
        args: &[Value],
        block: &ProcRef,
    ) -> ScriptResult<Value> {
        self.funcall(recv, name, args, Some(block))
    }

    /// Resolve a constant path as a value
    pub fn constant(&self, path: &str) -> ScriptResult<Value> {
        self.class_get(path).map(Value::Class)
    }

    /// Run `f` one frame deeper, restoring the arena afterwards
    fn enter<T>(&self, f: impl FnOnce() -> ScriptResult<T>) -> ScriptResult<T> {
        let depth = self.depth.get();
        if depth >= self.max_depth {
            return Err(ScriptError::raised("SystemStackError", "stack level too deep"));
        }
        let index = self.arena_save();
        self.depth.set(depth + 1);
        let result = f();
        self.depth.set(depth);
        self.arena_restore(index);
        result
    }

    fn invoke(
        &self,
        f: &MethodFn,
        recv: &Value,
        args: &[Value],
        block: Option<&ProcRef>,
    ) -> ScriptResult<Value> {
        self.enter(|| f(self, Call::new(recv, args, block)))
    }

    fn builtin(
        &self,
        recv: &Value,
        name: &str,
        args: &[Value],
        block: Option<&ProcRef>,
    ) -> ScriptResult<Value> {
        let call = Call::new(recv, args, block);
        match (recv, name) {
            (_, "==") => {
                call.expect_arity(1)?;
                Ok(Value::Bool(recv.identical(call.arg(0)?)))
            }
            (_, "nil?") => Ok(Value::Bool(recv.is_nil())),
            (Value::Object(obj), "class") => Ok(Value::Class(obj.class().clone())),
            (Value::Class(class), "new") if !class.is_module() => {
                self.new_instance(class, args, block)
            }
            (Value::Class(class), "name") => self.new_string(class.path()),
            _ => Err(ScriptError::NoMethodError {
                method: name.to_string(),
                receiver: recv.type_name(),
            }),
        }
    }
}

impl ScriptRuntime for Interp {
    fn runtime_ref(&self) -> RuntimeRef {
        let this: Weak<dyn ScriptRuntime> = self.this.clone();
        this
    }

    fn object_class(&self) -> ClassRef {
        self.object_class.clone()
    }

    fn define_module(&self, name: &str) -> ScriptResult<ClassRef> {
        match self.object_class.const_get(name) {
            Some(Value::Class(module)) if module.is_module() => Ok(module),
            Some(other) => Err(ScriptError::type_mismatch("Module", other.type_name())),
            None => {
                let module = Class::new_module(name, name);
                self.object_class.set_const(name, Value::Class(module.clone()));
                debug!(module = name, "module defined");
                Ok(module)
            }
        }
    }

    fn define_class_under(
        &self,
        outer: &ClassRef,
        name: &str,
        parent: &ClassRef,
    ) -> ScriptResult<ClassRef> {
        match outer.const_get(name) {
            Some(Value::Class(class)) if !class.is_module() => {
                let same_parent = class.parent().is_some_and(|p| Rc::ptr_eq(p, parent));
                if same_parent {
                    Ok(class)
                } else {
                    Err(ScriptError::raised(
                        "TypeError",
                        format!("superclass mismatch for class {}", name),
                    ))
                }
            }
            Some(other) => Err(ScriptError::type_mismatch("Class", other.type_name())),
            None => {
                let path = if Rc::ptr_eq(outer, &self.object_class) {
                    name.to_string()
                } else {
                    format!("{}::{}", outer.path(), name)
                };
                let class = Class::new_class(name, &path, Some(parent.clone()));
                outer.set_const(name, Value::Class(class.clone()));
                trace!(class = %path, parent = parent.path(), "class defined");
                Ok(class)
            }
        }
    }

    fn define_method(&self, class: &ClassRef, name: &str, f: MethodFn) {
        class.define_method(name, f);
    }

    fn define_module_function(&self, module: &ClassRef, name: &str, f: MethodFn) {
        module.define_singleton_method(name, f);
    }

    fn class_get(&self, path: &str) -> ScriptResult<ClassRef> {
        let mut cursor = self.object_class.clone();
        for segment in path.split("::") {
            match cursor.const_get(segment) {
                Some(Value::Class(class)) => cursor = class,
                _ => return Err(ScriptError::NameError(path.to_string())),
            }
        }
        Ok(cursor)
    }

    fn allocate(&self, class: &ClassRef) -> ScriptResult<ObjectRef> {
        if class.is_module() {
            return Err(ScriptError::NoMethodError {
                method: "new".to_string(),
                receiver: class.path().to_string(),
            });
        }
        let obj = Object::new(class.clone());
        self.protect(&Value::Object(obj.clone()))?;
        Ok(obj)
    }

    fn new_instance(
        &self,
        class: &ClassRef,
        args: &[Value],
        block: Option<&ProcRef>,
    ) -> ScriptResult<Value> {
        let value = Value::Object(self.allocate(class)?);
        match class.find_method("initialize") {
            Some(init) => {
                self.invoke(&init, &value, args, block)?;
            }
            None if !args.is_empty() => {
                return Err(ScriptError::argument(format!(
                    "wrong number of arguments (given {}, expected 0)",
                    args.len()
                )));
            }
            None => {}
        }
        Ok(value)
    }

    fn iv_get(&self, obj: &ObjectRef, name: &str) -> Value {
        obj.get_ivar(name)
    }

    fn iv_set(&self, obj: &ObjectRef, name: &str, value: Value) {
        obj.set_ivar(name, value);
    }

    fn new_string(&self, s: &str) -> ScriptResult<Value> {
        let value = Value::from(s);
        self.protect(&value)?;
        Ok(value)
    }

    fn wrap_data(&self, data_type: &'static DataType, payload: Rc<dyn Any>) -> ScriptResult<Value> {
        let value = Value::Data(Data::new(data_type, payload));
        self.protect(&value)?;
        Ok(value)
    }

    fn funcall(
        &self,
        recv: &Value,
        name: &str,
        args: &[Value],
        block: Option<&ProcRef>,
    ) -> ScriptResult<Value> {
        let method = match recv {
            Value::Object(obj) => obj.class().find_method(name),
            Value::Class(class) => class.find_singleton_method(name),
            _ => None,
        };
        match method {
            Some(f) => self.invoke(&f, recv, args, block),
            None => self.enter(|| self.builtin(recv, name, args, block)),
        }
    }

    fn yield_proc(&self, block: &ProcRef, args: &[Value]) -> ScriptResult<Value> {
        self.enter(|| block.call(self, args))
    }

    fn arena_save(&self) -> usize {
        self.arena.borrow().len()
    }

    fn arena_restore(&self, index: usize) {
        self.arena.borrow_mut().truncate(index);
    }

    fn arena_capacity(&self) -> usize {
        self.arena.borrow().capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkbridge_sdk::method_fn;

    fn interp() -> Rc<Interp> {
        Interp::new(HostOptions::default())
    }

    #[test]
    fn test_initialize_dispatch_and_inheritance() {
        let rt = interp();
        let module = rt.define_module("Shapes").unwrap();
        let base = rt
            .define_class_under(&module, "Base", &rt.object_class())
            .unwrap();
        let leaf = rt.define_class_under(&module, "Leaf", &base).unwrap();
        assert_eq!(leaf.path(), "Shapes::Leaf");

        rt.define_method(
            &base,
            "initialize",
            method_fn(|rt, call| {
                let obj = call.receiver_object()?;
                rt.iv_set(obj, "size", Value::Int(call.int(0)?));
                Ok(Value::Nil)
            }),
        );
        rt.define_method(
            &base,
            "size",
            method_fn(|rt, call| Ok(rt.iv_get(call.receiver_object()?, "size"))),
        );

        let class = rt.constant("Shapes::Leaf").unwrap();
        let obj = rt.call(&class, "new", &[Value::Int(7)]).unwrap();
        assert_eq!(rt.call(&obj, "size", &[]).unwrap(), Value::Int(7));
        assert_eq!(rt.call(&obj, "class", &[]).unwrap(), class);
        assert_eq!(rt.call(&obj, "==", &[obj.clone()]).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_missing_methods_and_constants() {
        let rt = interp();
        let module = rt.define_module("M").unwrap();
        let class = rt
            .define_class_under(&module, "C", &rt.object_class())
            .unwrap();
        let obj = rt.new_instance(&class, &[], None).unwrap();
        assert!(matches!(
            rt.call(&obj, "nope", &[]),
            Err(ScriptError::NoMethodError { .. })
        ));
        assert!(matches!(
            rt.new_instance(&class, &[Value::Int(1)], None),
            Err(ScriptError::ArgumentError(_))
        ));
        assert!(matches!(rt.class_get("M::D"), Err(ScriptError::NameError(_))));
        assert!(rt.call(&Value::Class(module), "new", &[]).is_err());
    }

    #[test]
    fn test_reopen_checks_superclass() {
        let rt = interp();
        let module = rt.define_module("M").unwrap();
        let a = rt.define_class_under(&module, "A", &rt.object_class()).unwrap();
        let again = rt.define_class_under(&module, "A", &rt.object_class()).unwrap();
        assert!(Rc::ptr_eq(&a, &again));
        assert!(rt.define_class_under(&module, "A", &a).is_err());
        assert!(Rc::ptr_eq(&rt.define_module("M").unwrap(), &module));
    }

    #[test]
    fn test_calls_restore_arena() {
        let rt = interp();
        let module = rt.define_module("M").unwrap();
        rt.define_module_function(
            &module,
            "churn",
            method_fn(|rt, _| {
                for i in 0..50 {
                    rt.new_string(&i.to_string())?;
                }
                Ok(Value::Nil)
            }),
        );
        let recv = Value::Class(module);
        for _ in 0..10 {
            rt.call(&recv, "churn", &[]).unwrap();
        }
        assert_eq!(rt.arena_len(), 0);
    }

    #[test]
    fn test_arena_overflow() {
        let rt = Interp::new(HostOptions {
            arena_capacity: 3,
            ..HostOptions::default()
        });
        for _ in 0..3 {
            rt.new_string("x").unwrap();
        }
        assert_eq!(
            rt.new_string("x").unwrap_err(),
            ScriptError::runtime("arena overflow")
        );
    }

    #[test]
    fn test_recursion_limit() {
        let rt = Interp::new(HostOptions {
            max_depth: 16,
            ..HostOptions::default()
        });
        let module = rt.define_module("M").unwrap();
        rt.define_module_function(
            &module,
            "again",
            method_fn(|rt, call| rt.funcall(call.receiver, "again", &[], None)),
        );
        let err = rt.call(&Value::Class(module), "again", &[]).unwrap_err();
        assert_eq!(err.class_name(), "SystemStackError");
    }

    #[test]
    fn test_yield_passes_arguments() {
        let rt = interp();
        let block = rt.proc(|_, args| Ok(Value::Int(args.len() as i64)));
        let got = rt.yield_proc(&block, &[Value::Nil, Value::Nil]).unwrap();
        assert_eq!(got, Value::Int(2));
    }
}
