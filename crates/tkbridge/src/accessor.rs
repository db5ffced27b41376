//! Property accessors
//!
//! Every scalar property is declared once in [`PROPERTIES`]. Installation
//! turns each entry into a getter `name` and a setter `name=` on the class
//! that introduces it; subclasses pick them up through inheritance.

use std::rc::Rc;

use tkbridge_sdk::{ArenaGuard, Call, ScriptError, ScriptResult, ScriptRuntime, Value};
use tkbridge_toolkit::{FloatProperty, IntProperty, NativeId, StrProperty};
use tracing::debug;

use crate::bridge::Bridge;
use crate::error::NativeResultExt;

/// Toolkit property and its value type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Integer, converted through `i32`
    Int(IntProperty),
    /// Float
    Float(FloatProperty),
    /// String; an absent string reads as `nil`
    Str(StrProperty),
}

/// One accessor pair
#[derive(Debug, Clone, Copy)]
pub struct PropertyDecl {
    /// Class that introduces the property
    pub class: &'static str,
    /// Script-side name
    pub name: &'static str,
    /// Backing toolkit property
    pub property: Property,
}

const fn decl(class: &'static str, name: &'static str, property: Property) -> PropertyDecl {
    PropertyDecl {
        class,
        name,
        property,
    }
}

/// Scalar property table
pub const PROPERTIES: &[PropertyDecl] = &[
    decl("Widget", "x", Property::Int(IntProperty::X)),
    decl("Widget", "y", Property::Int(IntProperty::Y)),
    decl("Widget", "w", Property::Int(IntProperty::W)),
    decl("Widget", "h", Property::Int(IntProperty::H)),
    decl("Widget", "labelfont", Property::Int(IntProperty::LabelFont)),
    decl("Widget", "labelsize", Property::Int(IntProperty::LabelSize)),
    decl("Widget", "label", Property::Str(StrProperty::Label)),
    decl("Input", "value", Property::Str(StrProperty::InputValue)),
    decl("ValueOutput", "value", Property::Float(FloatProperty::Value)),
    decl("ValueOutput", "precision", Property::Int(IntProperty::Precision)),
    decl("Browser", "value", Property::Int(IntProperty::BrowserValue)),
];

pub(crate) fn install(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    for entry in PROPERTIES {
        let property = entry.property;
        bridge.define(rt, entry.class, entry.name, move |bridge, rt, call| {
            get(bridge, rt, call, property)
        })?;
        let setter = format!("{}=", entry.name);
        bridge.define(rt, entry.class, &setter, move |bridge, _rt, call| {
            set(bridge, call, property)
        })?;
    }
    debug!(count = PROPERTIES.len(), "property accessors installed");
    Ok(())
}

fn get(bridge: &Bridge, rt: &dyn ScriptRuntime, call: Call<'_>, property: Property) -> ScriptResult<Value> {
    call.expect_arity(0)?;
    let id = bridge.native_of(call.receiver)?;
    let tk = bridge.toolkit();
    match property {
        Property::Int(p) => Ok(Value::Int(tk.int_property(id, p).script()?.into())),
        Property::Float(p) => Ok(Value::Float(tk.float_property(id, p).script()?)),
        Property::Str(p) => {
            let _arena = ArenaGuard::acquire(rt)?;
            match tk.str_property(id, p).script()? {
                Some(text) => rt.new_string(&text),
                None => Ok(Value::Nil),
            }
        }
    }
}

fn set(bridge: &Bridge, call: Call<'_>, property: Property) -> ScriptResult<Value> {
    call.expect_arity(1)?;
    let id: NativeId = bridge.native_of(call.receiver)?;
    let tk = bridge.toolkit();
    match property {
        Property::Int(p) => tk.set_int_property(id, p, to_i32(call.int(0)?)?).script()?,
        Property::Float(p) => tk.set_float_property(id, p, call.float(0)?).script()?,
        Property::Str(p) => tk.set_str_property(id, p, call.string(0)?).script()?,
    }
    Ok(Value::Nil)
}

/// Narrow a script integer to the toolkit's `int`
pub(crate) fn to_i32(value: i64) -> ScriptResult<i32> {
    i32::try_from(value)
        .map_err(|_| ScriptError::argument(format!("integer {} out of range", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_unique_per_class() {
        for (i, a) in PROPERTIES.iter().enumerate() {
            for b in &PROPERTIES[i + 1..] {
                assert!(a.class != b.class || a.name != b.name, "{}#{}", a.class, a.name);
            }
        }
    }

    #[test]
    fn test_to_i32() {
        assert_eq!(to_i32(-7).unwrap(), -7);
        assert_eq!(to_i32(i64::from(i32::MAX)).unwrap(), i32::MAX);
        assert_eq!(to_i32(1 << 40).unwrap_err().class_name(), "ArgumentError");
    }
}
