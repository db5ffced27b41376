//! Text buffers and their association with text views

use std::rc::Rc;

use tkbridge_sdk::{ArenaGuard, ScriptError, ScriptResult, ScriptRuntime, Value};

use crate::bridge::Bridge;
use crate::error::NativeResultExt;
use crate::handle::{attach, resolve, BufferTag, Ownership};

pub(crate) fn install(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    bridge.define(rt, "TextBuffer", "initialize", |bridge, rt, call| {
        if call.argc() != 0 {
            return Err(ScriptError::argument("invalid argument"));
        }
        let obj = call.receiver_object()?;
        let id = bridge.toolkit().create_buffer();
        attach::<BufferTag>(rt, obj, Some(id), Ownership::Owner)?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "TextBuffer", "text", |bridge, rt, call| {
        call.expect_arity(0)?;
        let id = bridge.buffer_of(call.receiver)?;
        let text = bridge.toolkit().buffer_text(id).script()?;
        let _arena = ArenaGuard::acquire(rt)?;
        rt.new_string(&text)
    })?;

    bridge.define(rt, "TextBuffer", "text=", |bridge, _rt, call| {
        call.expect_arity(1)?;
        let id = bridge.buffer_of(call.receiver)?;
        bridge.toolkit().set_buffer_text(id, call.string(0)?).script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "TextBuffer", "append", |bridge, _rt, call| {
        call.expect_arity(1)?;
        let id = bridge.buffer_of(call.receiver)?;
        bridge.toolkit().buffer_append(id, call.string(0)?).script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "TextBuffer", "length", |bridge, _rt, call| {
        call.expect_arity(0)?;
        let id = bridge.buffer_of(call.receiver)?;
        let length = bridge.toolkit().buffer_length(id).script()?;
        Ok(Value::Int(length as i64))
    })?;

    bridge.define(rt, "TextBuffer", "==", |_bridge, _rt, call| {
        call.expect_arity(1)?;
        let this = resolve::<BufferTag>(call.receiver)?.native_opt();
        let same = match resolve::<BufferTag>(call.arg(0)?) {
            Ok(other) => other.native_opt() == this,
            Err(_) => false,
        };
        Ok(Value::Bool(same))
    })?;

    // The getter wraps whatever buffer the view shows in a fresh alias
    // instance, null when it shows none.
    bridge.define(rt, "TextDisplay", "buffer", |bridge, rt, call| {
        call.expect_arity(0)?;
        let id = bridge.native_of(call.receiver)?;
        let buffer = bridge.toolkit().display_buffer(id).script()?;
        let _arena = ArenaGuard::acquire(rt)?;
        let obj = rt.allocate(&bridge.class("TextBuffer")?)?;
        attach::<BufferTag>(rt, &obj, buffer, Ownership::Alias)?;
        Ok(Value::Object(obj))
    })?;

    bridge.define(rt, "TextDisplay", "buffer=", |bridge, _rt, call| {
        call.expect_arity(1)?;
        let id = bridge.native_of(call.receiver)?;
        let buffer = resolve::<BufferTag>(call.arg(0)?)?;
        bridge
            .toolkit()
            .set_display_buffer(id, buffer.native_opt())
            .script()?;
        Ok(Value::Nil)
    })?;

    Ok(())
}
