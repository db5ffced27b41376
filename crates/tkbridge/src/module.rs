//! Module functions: the event loop, dialogs and the font table

use std::rc::Rc;

use tkbridge_sdk::{ArenaGuard, Call, ScriptResult, ScriptRuntime, Value};
use tracing::debug;

use crate::bridge::Bridge;
use crate::error::NativeResultExt;

type Function = fn(&Bridge, &dyn ScriptRuntime, Call<'_>) -> ScriptResult<Value>;

const FUNCTIONS: &[(&str, Function)] = &[
    ("run", run),
    ("alert", alert),
    ("ask", ask),
    ("set_fonts", set_fonts),
    ("font_name", font_name),
];

pub(crate) fn install(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    for &(name, f) in FUNCTIONS {
        rt.define_module_function(bridge.module(), name, bridge.method(f));
    }
    Ok(())
}

fn run(bridge: &Bridge, _rt: &dyn ScriptRuntime, call: Call<'_>) -> ScriptResult<Value> {
    call.expect_arity(0)?;
    debug!("entering event loop");
    let status = bridge.toolkit().run().script();
    debug!(ok = status.is_ok(), "event loop returned");
    Ok(Value::Int(status?.into()))
}

fn alert(bridge: &Bridge, _rt: &dyn ScriptRuntime, call: Call<'_>) -> ScriptResult<Value> {
    call.expect_arity(1)?;
    bridge.toolkit().alert(call.string(0)?);
    Ok(Value::Nil)
}

fn ask(bridge: &Bridge, _rt: &dyn ScriptRuntime, call: Call<'_>) -> ScriptResult<Value> {
    call.expect_arity(1)?;
    Ok(Value::Bool(bridge.toolkit().ask(call.string(0)?)))
}

fn set_fonts(bridge: &Bridge, _rt: &dyn ScriptRuntime, call: Call<'_>) -> ScriptResult<Value> {
    call.expect_arity(1)?;
    let count = bridge.toolkit().set_fonts(call.string(0)?);
    Ok(Value::Int(count as i64))
}

fn font_name(bridge: &Bridge, rt: &dyn ScriptRuntime, call: Call<'_>) -> ScriptResult<Value> {
    call.expect_arity(1)?;
    match bridge.toolkit().font_name(call.int(0)?) {
        Some(name) => {
            let _arena = ArenaGuard::acquire(rt)?;
            rt.new_string(&name)
        }
        None => Ok(Value::Nil),
    }
}
