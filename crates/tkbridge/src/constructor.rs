//! Constructor dispatch
//!
//! `initialize` picks its form from the argument shape:
//!
//! | form      | shape   | result                               |
//! |-----------|---------|--------------------------------------|
//! | adopt     | `o`     | alias of an existing native object   |
//! | geometry  | `iiii`  | new native object, no label          |
//! | labelled  | `iiiis` | new native object with a label       |
//! | sized     | `iis`   | windows only, placed at the origin   |
//!
//! Windows take only the sized and labelled forms. Anything else is an
//! `ArgumentError`. Classes without a native constructor of their own
//! (`Group`, `Box`) accept only the adopt form.

use tkbridge_sdk::{Call, ObjectRef, ScriptError, ScriptResult, ScriptRuntime, Shape, Value};
use tkbridge_toolkit::{BoxStyle, WidgetKind};
use tracing::trace;

use crate::accessor::to_i32;
use crate::bridge::Bridge;
use crate::handle::{adopt, attach, Ownership, WidgetTag};

const ADOPT: Shape = Shape::new("o");
const GEOMETRY: Shape = Shape::new("iiii");
const GEOMETRY_LABEL: Shape = Shape::new("iiiis");
const WINDOW_SIZED: Shape = Shape::new("iis");

/// How a class builds its native object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStyle {
    /// Geometry with an optional label
    Widget(WidgetKind),
    /// Size with a label, or geometry with a label
    Window(WidgetKind),
    /// No native constructor; adopt only
    View(&'static str),
    /// Box style leaf, optional label
    Style(BoxStyle),
}

pub(crate) fn initialize(
    bridge: &Bridge,
    rt: &dyn ScriptRuntime,
    call: Call<'_>,
    style: InitStyle,
) -> ScriptResult<Value> {
    let obj = call.receiver_object()?;
    match style {
        InitStyle::Widget(kind) => {
            if !try_adopt(rt, obj, call.args)? {
                let (x, y, w, h, label) = geometry(call.args)?;
                create(bridge, rt, obj, kind, (x, y, w, h), label)?;
            }
        }
        InitStyle::Window(kind) => {
            let (x, y, w, h, label) = window_geometry(call.args)?;
            create(bridge, rt, obj, kind, (x, y, w, h), label)?;
        }
        InitStyle::View(name) => {
            let cannot_alloc =
                || ScriptError::runtime(format!("can't alloc {}::{}", bridge.module().path(), name));
            if !ADOPT.matches(call.args) {
                return Err(cannot_alloc());
            }
            adopt::<WidgetTag>(rt, obj, &call.args[0]).map_err(|err| match err {
                ScriptError::TypeMismatch { .. } => cannot_alloc(),
                other => other,
            })?;
        }
        InitStyle::Style(box_style) => {
            let label = match call.args {
                [] => None,
                [Value::Str(label)] => Some(&**label),
                _ => return Err(invalid()),
            };
            let id = bridge.toolkit().create_box(box_style, label);
            attach::<WidgetTag>(rt, obj, Some(id), Ownership::Owner)?;
            trace!(style = box_style.name(), %id, "box style constructed");
        }
    }
    Ok(Value::Nil)
}

fn invalid() -> ScriptError {
    ScriptError::argument("invalid argument")
}

/// Adopt when the shape is a single object. The object must carry a widget
/// handle.
fn try_adopt(rt: &dyn ScriptRuntime, obj: &ObjectRef, args: &[Value]) -> ScriptResult<bool> {
    if !ADOPT.matches(args) {
        return Ok(false);
    }
    adopt::<WidgetTag>(rt, obj, &args[0]).map_err(|err| match err {
        ScriptError::TypeMismatch { .. } => invalid(),
        other => other,
    })?;
    Ok(true)
}

type Geometry<'a> = (i32, i32, i32, i32, Option<&'a str>);

fn geometry(args: &[Value]) -> ScriptResult<Geometry<'_>> {
    let label = if GEOMETRY_LABEL.matches(args) {
        args[4].as_str()
    } else if GEOMETRY.matches(args) {
        None
    } else {
        return Err(invalid());
    };
    Ok((int(args, 0)?, int(args, 1)?, int(args, 2)?, int(args, 3)?, label))
}

fn window_geometry(args: &[Value]) -> ScriptResult<Geometry<'_>> {
    if WINDOW_SIZED.matches(args) {
        Ok((0, 0, int(args, 0)?, int(args, 1)?, args[2].as_str()))
    } else if GEOMETRY_LABEL.matches(args) {
        geometry(args)
    } else {
        Err(invalid())
    }
}

fn int(args: &[Value], i: usize) -> ScriptResult<i32> {
    to_i32(args[i].as_int().ok_or_else(invalid)?)
}

fn create(
    bridge: &Bridge,
    rt: &dyn ScriptRuntime,
    obj: &ObjectRef,
    kind: WidgetKind,
    (x, y, w, h): (i32, i32, i32, i32),
    label: Option<&str>,
) -> ScriptResult<()> {
    let id = bridge.toolkit().create_widget(kind, x, y, w, h, label);
    attach::<WidgetTag>(rt, obj, Some(id), Ownership::Owner)?;
    trace!(kind = kind.name(), %id, "widget constructed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_forms() {
        let args = [Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)];
        assert_eq!(geometry(&args).unwrap(), (1, 2, 3, 4, None));

        let labelled = [
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4),
            Value::str("ok"),
        ];
        assert_eq!(geometry(&labelled).unwrap(), (1, 2, 3, 4, Some("ok")));

        let short = [Value::Int(1), Value::Int(2)];
        assert_eq!(geometry(&short).unwrap_err(), invalid());

        let floats = [Value::Float(1.0), Value::Int(2), Value::Int(3), Value::Int(4)];
        assert_eq!(geometry(&floats).unwrap_err(), invalid());
    }

    #[test]
    fn test_window_geometry_forms() {
        let sized = [Value::Int(30), Value::Int(40), Value::str("w")];
        assert_eq!(window_geometry(&sized).unwrap(), (0, 0, 30, 40, Some("w")));

        let placed = [
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4),
            Value::str("w"),
        ];
        assert_eq!(window_geometry(&placed).unwrap(), (1, 2, 3, 4, Some("w")));

        let unlabelled = [Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)];
        assert_eq!(window_geometry(&unlabelled).unwrap_err(), invalid());
        assert_eq!(window_geometry(&[Value::Nil]).unwrap_err(), invalid());
    }

    #[test]
    fn test_geometry_overflow() {
        let args = [Value::Int(1 << 40), Value::Int(0), Value::Int(1), Value::Int(1)];
        assert_eq!(geometry(&args).unwrap_err().class_name(), "ArgumentError");
    }
}
