//! Shared setup for the bridge integration tests

#![allow(dead_code)]

use std::rc::Rc;

use tkbridge::{Bridge, BridgeSection};
use tkbridge_host::{HostOptions, Interp};
use tkbridge_sdk::{ScriptResult, ScriptRuntime, Value};
use tkbridge_toolkit::Toolkit;

pub struct Harness {
    pub rt: Rc<Interp>,
    pub bridge: Rc<Bridge>,
}

pub fn setup() -> Harness {
    setup_with(Toolkit::default(), HostOptions::default())
}

pub fn setup_with(toolkit: Toolkit, options: HostOptions) -> Harness {
    let rt = Interp::new(options);
    let bridge = Bridge::install(&*rt, Rc::new(toolkit), &BridgeSection::default())
        .expect("bridge installs");
    Harness { rt, bridge }
}

impl Harness {
    /// `FLTK3::<class>.new(*args)`
    pub fn new(&self, class: &str, args: &[Value]) -> ScriptResult<Value> {
        let class = self.rt.constant(&format!("FLTK3::{}", class))?;
        self.rt.call(&class, "new", args)
    }

    /// Like [`Harness::new`] for calls that must succeed
    pub fn make(&self, class: &str, args: &[Value]) -> Value {
        self.new(class, args)
            .unwrap_or_else(|err| panic!("FLTK3::{}.new failed: {}", class, err))
    }

    pub fn call(&self, recv: &Value, name: &str, args: &[Value]) -> ScriptResult<Value> {
        self.rt.call(recv, name, args)
    }

    /// Call that must succeed
    pub fn send(&self, recv: &Value, name: &str, args: &[Value]) -> Value {
        self.call(recv, name, args)
            .unwrap_or_else(|err| panic!("{} failed: {}", name, err))
    }

    /// `FLTK3.<name>(*args)`
    pub fn module_call(&self, name: &str, args: &[Value]) -> ScriptResult<Value> {
        let module = Value::Class(self.bridge.module().clone());
        self.rt.call(&module, name, args)
    }

    pub fn toolkit(&self) -> &Toolkit {
        self.bridge.toolkit()
    }

    pub fn runtime(&self) -> &dyn ScriptRuntime {
        &*self.rt
    }
}

pub fn geometry(x: i64, y: i64, w: i64, h: i64) -> Vec<Value> {
    vec![Value::Int(x), Value::Int(y), Value::Int(w), Value::Int(h)]
}

pub fn labelled(x: i64, y: i64, w: i64, h: i64, label: &str) -> Vec<Value> {
    let mut args = geometry(x, y, w, h);
    args.push(Value::str(label));
    args
}
