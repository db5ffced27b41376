//! Group scoping and containment
//!
//! `begin` makes the group the parent of widgets constructed afterwards.
//! The block form yields the group and always ends the scope, also when the
//! block raises.

use std::rc::Rc;

use tkbridge_sdk::{ArenaGuard, ScriptResult, ScriptRuntime, Value};

use crate::bridge::Bridge;
use crate::error::NativeResultExt;
use crate::handle::{resolve, wrap_native, WidgetTag};

pub(crate) fn install(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    bridge.define(rt, "Group", "begin", |bridge, rt, call| {
        call.expect_arity(0)?;
        let id = bridge.native_of(call.receiver)?;
        let tk = bridge.toolkit();
        tk.begin(id).script()?;
        let Some(block) = call.block else {
            return Ok(Value::Nil);
        };
        let result = rt.yield_proc(block, std::slice::from_ref(call.receiver));
        let ended = tk.end(id).script();
        result?;
        ended?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Group", "end", |bridge, _rt, call| {
        call.expect_arity(0)?;
        let id = bridge.native_of(call.receiver)?;
        bridge.toolkit().end(id).script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Group", "resizable", |bridge, rt, call| {
        call.expect_arity(0)?;
        let id = bridge.native_of(call.receiver)?;
        let target = bridge.toolkit().resizable(id).script()?;
        let _arena = ArenaGuard::acquire(rt)?;
        let raw = wrap_native::<WidgetTag>(rt, target)?;
        rt.new_instance(&bridge.class("Widget")?, &[raw], None)
    })?;

    bridge.define(rt, "Group", "resizable=", |bridge, _rt, call| {
        call.expect_arity(1)?;
        let id = bridge.native_of(call.receiver)?;
        let target = resolve::<WidgetTag>(call.arg(0)?)?;
        bridge
            .toolkit()
            .set_resizable(id, target.native_opt())
            .script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Group", "children", |bridge, _rt, call| {
        call.expect_arity(0)?;
        let id = bridge.native_of(call.receiver)?;
        let count = bridge.toolkit().children(id).script()?.len();
        Ok(Value::Int(count as i64))
    })?;

    bridge.define(rt, "Group", "child", |bridge, rt, call| {
        call.expect_arity(1)?;
        let id = bridge.native_of(call.receiver)?;
        let Ok(index) = usize::try_from(call.int(0)?) else {
            return Ok(Value::Nil);
        };
        let Some(child) = bridge.toolkit().child(id, index).script()? else {
            return Ok(Value::Nil);
        };
        let _arena = ArenaGuard::acquire(rt)?;
        let raw = wrap_native::<WidgetTag>(rt, Some(child))?;
        rt.new_instance(&bridge.class("Widget")?, &[raw], None)
    })?;

    Ok(())
}
