//! Widget methods beyond the scalar accessors

use std::path::Path;
use std::rc::Rc;

use tkbridge_sdk::{ArenaGuard, ScriptError, ScriptResult, ScriptRuntime, Value};
use tkbridge_toolkit::IntProperty;

use crate::accessor::to_i32;
use crate::bridge::Bridge;
use crate::callback;
use crate::error::NativeResultExt;
use crate::handle::{resolve, wrap_native, WidgetTag};

pub(crate) fn install(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    install_widget(bridge, rt)?;
    install_window(bridge, rt)?;
    install_browser(bridge, rt)
}

fn install_widget(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    bridge.define(rt, "Widget", "show", |bridge, _rt, call| {
        call.expect_arity(0)?;
        bridge.toolkit().show(bridge.native_of(call.receiver)?).script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Widget", "hide", |bridge, _rt, call| {
        call.expect_arity(0)?;
        bridge.toolkit().hide(bridge.native_of(call.receiver)?).script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Widget", "visible", |bridge, _rt, call| {
        call.expect_arity(0)?;
        let visible = bridge.toolkit().visible(bridge.native_of(call.receiver)?).script()?;
        Ok(Value::Bool(visible))
    })?;

    bridge.define(rt, "Widget", "box", |bridge, rt, call| {
        call.expect_arity(0)?;
        let id = bridge.native_of(call.receiver)?;
        let style = bridge.toolkit().box_style(id).script()?;
        let _arena = ArenaGuard::acquire(rt)?;
        let raw = wrap_native::<WidgetTag>(rt, style)?;
        rt.new_instance(&bridge.class("Box")?, &[raw], None)
    })?;

    bridge.define(rt, "Widget", "box=", |bridge, _rt, call| {
        call.expect_arity(1)?;
        let id = bridge.native_of(call.receiver)?;
        let style = resolve::<WidgetTag>(call.arg(0)?)?;
        bridge
            .toolkit()
            .set_box_style(id, style.native_opt())
            .script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Widget", "==", |_bridge, _rt, call| {
        call.expect_arity(1)?;
        let this = resolve::<WidgetTag>(call.receiver)?.native_opt();
        let same = match resolve::<WidgetTag>(call.arg(0)?) {
            Ok(other) => other.native_opt() == this,
            Err(_) => false,
        };
        Ok(Value::Bool(same))
    })?;

    bridge.define(rt, "Widget", "callback", callback::register)?;

    bridge.define(rt, "Widget", "do_callback", |bridge, _rt, call| {
        call.expect_arity(0)?;
        bridge
            .toolkit()
            .do_callback(bridge.native_of(call.receiver)?)
            .script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Widget", "destroy", |bridge, _rt, call| {
        call.expect_arity(0)?;
        bridge
            .toolkit()
            .destroy(bridge.native_of(call.receiver)?)
            .script()?;
        Ok(Value::Nil)
    })
}

fn install_window(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    // Window#show takes the host program's argv; it is accepted and ignored.
    bridge.define(rt, "Window", "show", |bridge, _rt, call| {
        call.expect_arity_range(0, 1)?;
        bridge.toolkit().show(bridge.native_of(call.receiver)?).script()?;
        Ok(Value::Nil)
    })
}

fn install_browser(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    bridge.define(rt, "Browser", "load", |bridge, _rt, call| {
        call.expect_arity(1)?;
        let id = bridge.native_of(call.receiver)?;
        let path = Path::new(call.string(0)?);
        let loaded = bridge.toolkit().browser_load(id, path).script()?;
        Ok(Value::Int(i64::from(loaded)))
    })?;

    bridge.define(rt, "Browser", "add", |bridge, _rt, call| {
        call.expect_arity(1)?;
        let id = bridge.native_of(call.receiver)?;
        bridge.toolkit().browser_add(id, call.string(0)?).script()?;
        Ok(Value::Nil)
    })?;

    bridge.define(rt, "Browser", "size", |bridge, _rt, call| {
        call.expect_arity(0)?;
        let id = bridge.native_of(call.receiver)?;
        let size = bridge.toolkit().browser_size(id).script()?;
        Ok(Value::Int(size as i64))
    })?;

    // text          -> selected line
    // text(n)       -> line n
    // text(n, str)  -> replace line n
    bridge.define(rt, "Browser", "text", |bridge, rt, call| {
        let id = bridge.native_of(call.receiver)?;
        let tk = bridge.toolkit();
        let line = match call.argc() {
            0 => tk.int_property(id, IntProperty::BrowserValue).script()?,
            1 | 2 => to_i32(call.int(0)?)?,
            given => {
                return Err(ScriptError::argument(format!(
                    "wrong number of arguments (given {}, expected 0..2)",
                    given
                )))
            }
        };
        if call.argc() == 2 {
            tk.set_browser_text(id, line, call.string(1)?).script()?;
            return Ok(Value::Nil);
        }
        match tk.browser_text(id, line).script()? {
            Some(text) => {
                let _arena = ArenaGuard::acquire(rt)?;
                rt.new_string(&text)
            }
            None => Ok(Value::Nil),
        }
    })
}
