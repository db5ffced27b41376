//! Callback trampoline
//!
//! `widget.callback(value) { |widget, value| ... }` stores the block and the
//! value in hidden instance slots and points the native callback at
//! [`trampoline`]. The native context is a [`CallbackBinding`], which keeps
//! the instance alive for as long as the toolkit holds the callback. The
//! slots are read again on every invocation, so re-registering replaces
//! both the closure and the value.

use std::any::Any;
use std::rc::Rc;

use tkbridge_sdk::{ArenaGuard, Call, ObjectRef, ScriptResult, ScriptRuntime, Value};
use tkbridge_toolkit::{CallbackError, NativeId};
use tracing::{trace, warn};

use crate::bridge::Bridge;
use crate::error::NativeResultExt;
use crate::handle::{resolve, WidgetHandle, WidgetTag};

/// Hidden slot holding the closure
pub const CALLBACK_SLOT: &str = "callback";

/// Hidden slot holding the user value
pub const VALUE_SLOT: &str = "value";

/// Native-side context of a registered callback
pub struct CallbackBinding {
    handle: Rc<WidgetHandle>,
    instance: ObjectRef,
}

/// `callback(value = nil) { |widget, value| }`
pub(crate) fn register(bridge: &Bridge, rt: &dyn ScriptRuntime, call: Call<'_>) -> ScriptResult<Value> {
    let handle = resolve::<WidgetTag>(call.receiver)?;
    let id = handle.native()?;
    call.expect_arity_range(0, 1)?;
    let block = call.block()?;
    let instance = call.receiver_object()?.clone();

    rt.iv_set(&instance, CALLBACK_SLOT, Value::Proc(block.clone()));
    rt.iv_set(&instance, VALUE_SLOT, call.opt(0).cloned().unwrap_or_default());

    let binding = CallbackBinding { handle, instance };
    bridge.toolkit().set_callback(id, trampoline, Rc::new(binding)).script()?;
    Ok(Value::Nil)
}

/// Native entry point for every scripted callback
pub fn trampoline(id: NativeId, context: &dyn Any) -> Result<(), CallbackError> {
    let Some(binding) = context.downcast_ref::<CallbackBinding>() else {
        warn!(%id, "callback context is not a script binding");
        return Ok(());
    };
    let Some(rt) = binding.handle.runtime() else {
        warn!(%id, "callback fired after its runtime was closed");
        return Ok(());
    };
    invoke(&*rt, &binding.instance).map_err(CallbackError::new)
}

fn invoke(rt: &dyn ScriptRuntime, instance: &ObjectRef) -> ScriptResult<()> {
    let _arena = ArenaGuard::acquire(rt)?;
    let block = rt.iv_get(instance, CALLBACK_SLOT);
    let Some(block) = block.as_proc() else {
        return Ok(());
    };
    let value = rt.iv_get(instance, VALUE_SLOT);
    trace!(class = instance.class().path(), "invoking callback");
    rt.yield_proc(block, &[Value::Object(instance.clone()), value])?;
    Ok(())
}
