//! Module functions: run, dialogs and fonts

mod common;

use common::{setup, setup_with};
use tkbridge_host::HostOptions;
use tkbridge_sdk::{ScriptError, Value};
use tkbridge_toolkit::{Event, ScriptedDialogs, Toolkit, ToolkitOptions, STANDARD_FONTS};

#[test]
fn test_run_without_windows_returns_at_once() {
    let h = setup();
    assert_eq!(h.module_call("run", &[]).unwrap(), Value::Int(0));
    let err = h.module_call("run", &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");
}

#[test]
fn test_run_until_last_window_closes() {
    let h = setup();
    let a = h.make("Window", &[Value::Int(10), Value::Int(10), Value::str("a")]);
    h.send(&a, "end", &[]);
    let b = h.make("Window", &[Value::Int(10), Value::Int(10), Value::str("b")]);
    h.send(&b, "end", &[]);
    h.send(&a, "show", &[]);
    h.send(&b, "show", &[Value::Nil]);

    let a_id = h.bridge.native_of(&a).unwrap();
    let b_id = h.bridge.native_of(&b).unwrap();
    h.toolkit().post(Event::Close(a_id));
    h.toolkit().post(Event::Close(b_id));
    h.toolkit().post(Event::Activate(a_id));

    assert_eq!(h.module_call("run", &[]).unwrap(), Value::Int(0));
    assert_eq!(h.toolkit().shown_windows(), 0);
    // the loop stops before the trailing event
    assert_eq!(h.toolkit().pending(), 1);
}

#[test]
fn test_dialogs() {
    let dialogs = ScriptedDialogs::with_answers([true, false]);
    let toolkit = Toolkit::with_dialogs(ToolkitOptions::default(), Box::new(dialogs.clone()));
    let h = setup_with(toolkit, HostOptions::default());

    assert_eq!(h.module_call("alert", &[Value::str("saved")]).unwrap(), Value::Nil);
    assert_eq!(h.module_call("ask", &[Value::str("quit?")]).unwrap(), Value::Bool(true));
    assert_eq!(h.module_call("ask", &[Value::str("sure?")]).unwrap(), Value::Bool(false));
    assert_eq!(h.module_call("ask", &[Value::str("again?")]).unwrap(), Value::Bool(false));
    assert_eq!(dialogs.messages(), ["saved", "quit?", "sure?", "again?"]);

    let err = h.module_call("alert", &[Value::Int(3)]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");
}

#[test]
fn test_fonts() {
    let options = ToolkitOptions {
        system_fonts: vec![
            "DejaVu Sans".to_string(),
            "DejaVu Serif".to_string(),
            "Noto Mono".to_string(),
        ],
    };
    let h = setup_with(Toolkit::new(options), HostOptions::default());

    assert_eq!(h.module_call("font_name", &[Value::Int(0)]).unwrap(), Value::str(STANDARD_FONTS[0]));
    assert_eq!(h.module_call("font_name", &[Value::Int(16)]).unwrap(), Value::Nil);
    assert_eq!(h.module_call("font_name", &[Value::Int(-1)]).unwrap(), Value::Nil);

    assert_eq!(h.module_call("set_fonts", &[Value::str("-*-dejavu-*")]).unwrap(), Value::Int(18));
    assert_eq!(h.module_call("font_name", &[Value::Int(17)]).unwrap(), Value::str("DejaVu Serif"));
    assert_eq!(h.module_call("set_fonts", &[Value::str("")]).unwrap(), Value::Int(19));

    let err = h.module_call("font_name", &[Value::str("0")]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");
}

#[test]
fn test_module_is_not_instantiable() {
    let h = setup();
    let err = h.module_call("new", &[]).unwrap_err();
    assert!(matches!(err, ScriptError::NoMethodError { .. }));
}
