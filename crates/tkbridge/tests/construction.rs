//! Constructor dispatch, the class tree and handle resolution

mod common;

use std::rc::Rc;

use common::{geometry, labelled, setup, setup_with};
use tkbridge::{Bridge, BridgeSection, Ownership, WidgetTag};
use tkbridge_host::{HostOptions, Interp};
use tkbridge_sdk::{ancestors, ScriptError, ScriptRuntime, Value};
use tkbridge_toolkit::Toolkit;

#[test]
fn test_widget_shapes() {
    let h = setup();
    assert!(h.new("Widget", &geometry(1, 2, 3, 4)).is_ok());

    let labelled_widget = h.make("Widget", &labelled(1, 2, 3, 4, "label"));
    assert_eq!(h.send(&labelled_widget, "label", &[]), Value::str("label"));

    let three = [Value::Int(1), Value::Int(2), Value::Int(3)];
    assert_eq!(
        h.new("Widget", &three).unwrap_err(),
        ScriptError::argument("invalid argument")
    );
    assert_eq!(
        h.new("Widget", &[Value::str("x")]).unwrap_err(),
        ScriptError::argument("invalid argument")
    );
    assert_eq!(
        h.new("Widget", &[]).unwrap_err(),
        ScriptError::argument("invalid argument")
    );
    // the window-only size shape is not open to plain widgets
    let sized = [Value::Int(100), Value::Int(50), Value::str("w")];
    assert!(h.new("Button", &sized).is_err());
}

#[test]
fn test_adopt_shares_native_state() {
    let h = setup();
    let a = h.make("Input", &geometry(0, 0, 80, 20));
    let b = h.make("Input", &[a.clone()]);

    h.send(&a, "value=", &[Value::str("typed")]);
    assert_eq!(h.send(&b, "value", &[]), Value::str("typed"));
    h.send(&b, "x=", &[Value::Int(42)]);
    assert_eq!(h.send(&a, "x", &[]), Value::Int(42));

    assert_eq!(h.send(&a, "==", &[b.clone()]), Value::Bool(true));
    let handle = tkbridge::handle::resolve::<WidgetTag>(&b).unwrap();
    assert_eq!(handle.ownership(), Ownership::Alias);
    let owner = tkbridge::handle::resolve::<WidgetTag>(&a).unwrap();
    assert_eq!(owner.ownership(), Ownership::Owner);
    assert_eq!(handle.native_opt(), owner.native_opt());
    // adopting allocates nothing natively
    assert_eq!(h.toolkit().object_count(), 1);
}

#[test]
fn test_adopt_requires_widget_handle() {
    let h = setup();
    let plain = Value::Object(h.rt.allocate(&h.rt.object_class()).unwrap());
    assert_eq!(
        h.new("Widget", &[plain]).unwrap_err(),
        ScriptError::argument("invalid argument")
    );
    let buffer = h.make("TextBuffer", &[]);
    assert_eq!(
        h.new("Button", &[buffer]).unwrap_err(),
        ScriptError::argument("invalid argument")
    );
}

#[test]
fn test_window_shapes() {
    let h = setup();
    let sized = h.make("Window", &[Value::Int(300), Value::Int(200), Value::str("main")]);
    assert_eq!(h.send(&sized, "x", &[]), Value::Int(0));
    assert_eq!(h.send(&sized, "w", &[]), Value::Int(300));
    assert_eq!(h.send(&sized, "label", &[]), Value::str("main"));
    h.send(&sized, "end", &[]);

    let placed = h.make("DoubleWindow", &labelled(10, 20, 30, 40, "dbl"));
    assert_eq!(h.send(&placed, "y", &[]), Value::Int(20));
    h.send(&placed, "end", &[]);

    let err = h.new("Window", &[Value::Int(1), Value::Int(2)]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");
}

#[test]
fn test_windows_reject_widget_shapes() {
    let h = setup();
    let invalid = ScriptError::argument("invalid argument");
    assert_eq!(h.new("Window", &geometry(0, 0, 10, 10)).unwrap_err(), invalid);

    let button = h.make("Button", &geometry(0, 0, 10, 10));
    assert_eq!(h.new("Window", &[button.clone()]).unwrap_err(), invalid);
    assert_eq!(h.new("DoubleWindow", &[button]).unwrap_err(), invalid);
}

#[test]
fn test_adopt_keeps_arena_errors() {
    let options = HostOptions {
        arena_capacity: 8,
        ..HostOptions::default()
    };
    let h = setup_with(Toolkit::default(), options);
    let window = h.make("Window", &[Value::Int(100), Value::Int(100), Value::str("w")]);
    let button = h.make("Button", &geometry(0, 0, 10, 10));

    // room for the new instance but not for its handle
    while h.rt.arena_len() < 7 {
        h.rt.protect(&Value::from("pinned")).unwrap();
    }
    let overflow = ScriptError::runtime("arena overflow");
    assert_eq!(h.new("Group", &[window]).unwrap_err(), overflow);
    assert_eq!(h.new("Button", &[button]).unwrap_err(), overflow);
}

#[test]
fn test_alloc_error_names_configured_module() {
    let rt = Interp::new(HostOptions::default());
    let section = BridgeSection {
        module: "Gui".to_string(),
    };
    let _bridge = Bridge::install(&*rt, Rc::new(Toolkit::default()), &section).unwrap();
    let group = rt.constant("Gui::Group").unwrap();
    let err = rt.call(&group, "new", &[]).unwrap_err();
    assert_eq!(err, ScriptError::runtime("can't alloc Gui::Group"));
}

#[test]
fn test_views_only_adopt() {
    let h = setup();
    let err = h.new("Group", &geometry(0, 0, 10, 10)).unwrap_err();
    assert_eq!(err, ScriptError::runtime("can't alloc FLTK3::Group"));
    let err = h.new("Box", &[]).unwrap_err();
    assert_eq!(err, ScriptError::runtime("can't alloc FLTK3::Box"));
    let plain = Value::Object(h.rt.allocate(&h.rt.object_class()).unwrap());
    assert_eq!(h.new("Group", &[plain]).unwrap_err().class_name(), "RuntimeError");

    let window = h.make("Window", &[Value::Int(100), Value::Int(100), Value::str("w")]);
    let group = h.make("Group", &[window.clone()]);
    h.send(&group, "end", &[]);
    assert_eq!(h.toolkit().current_group(), None);
}

#[test]
fn test_box_style_shapes() {
    let h = setup();
    let plain = h.make("UpBox", &[]);
    assert_eq!(h.send(&plain, "label", &[]), Value::Nil);
    let named = h.make("EngravedFrame", &[Value::str("framed")]);
    assert_eq!(h.send(&named, "label", &[]), Value::str("framed"));

    assert_eq!(h.new("DownBox", &[Value::Int(1)]).unwrap_err().class_name(), "ArgumentError");
    assert_eq!(
        h.new("DownBox", &[Value::str("a"), Value::str("b")]).unwrap_err().class_name(),
        "ArgumentError"
    );
}

#[test]
fn test_class_tree() {
    let h = setup();
    let path = |name: &str| {
        ancestors(&h.bridge.class(name).unwrap())
            .iter()
            .map(|c| c.path().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(path("SelectBrowser"), ["FLTK3::SelectBrowser", "FLTK3::Browser", "FLTK3::Widget", "Object"]);
    assert_eq!(
        path("TextEditor"),
        ["FLTK3::TextEditor", "FLTK3::TextDisplay", "FLTK3::Group", "FLTK3::Widget", "Object"]
    );
    assert_eq!(
        path("DoubleWindow"),
        ["FLTK3::DoubleWindow", "FLTK3::Window", "FLTK3::Group", "FLTK3::Widget", "Object"]
    );
    assert_eq!(path("PlasticUpFrame"), ["FLTK3::PlasticUpFrame", "FLTK3::Box", "FLTK3::Widget", "Object"]);
    assert_eq!(path("TextBuffer"), ["FLTK3::TextBuffer", "Object"]);

    let boxed = h.bridge.class("Box").unwrap();
    let leaves = tkbridge_toolkit::BoxStyle::ALL
        .iter()
        .filter(|style| h.bridge.class(style.name()).unwrap().is_a(&boxed))
        .count();
    assert_eq!(leaves, 48);

    assert!(h.bridge.class("Nope").is_err());
    assert!(h.rt.class_get("FLTK3::Window").is_ok());
}

#[test]
fn test_derived_instances_respond_to_ancestor_methods() {
    let h = setup();
    let editor = h.make("TextEditor", &geometry(0, 0, 10, 10));
    for name in ["x", "label", "show", "box", "callback", "begin", "resizable", "buffer"] {
        assert!(
            h.bridge.class("TextEditor").unwrap().responds_to(name),
            "TextEditor#{}",
            name
        );
    }
    h.send(&editor, "show", &[]);
    assert_eq!(h.send(&editor, "visible", &[]), Value::Bool(true));
    assert!(!h.bridge.class("Button").unwrap().responds_to("begin"));
}

#[test]
fn test_destroyed_native_is_runtime_error() {
    let h = setup();
    let button = h.make("Button", &geometry(0, 0, 10, 10));
    let alias = h.make("Widget", &[button.clone()]);
    h.send(&button, "destroy", &[]);
    let err = h.call(&alias, "x", &[]).unwrap_err();
    assert_eq!(err.class_name(), "RuntimeError");
}

#[test]
fn test_calls_after_bridge_dropped() {
    let h = setup();
    let widget = h.make("Widget", &geometry(0, 0, 1, 1));
    let rt = h.rt.clone();
    drop(h);
    let err = rt.call(&widget, "x", &[]).unwrap_err();
    assert_eq!(err, ScriptError::runtime("widget bridge has been shut down"));
}
