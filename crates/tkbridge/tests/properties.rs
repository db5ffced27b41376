//! Accessor round-trips through the scripting surface

mod common;

use common::{geometry, labelled, setup};
use tkbridge::accessor::{Property, PROPERTIES};
use tkbridge_host::{HostOptions, Interp};
use tkbridge_sdk::{ScriptError, Value};
use tkbridge_toolkit::Toolkit;

const INT_BOUNDARIES: [i64; 5] = [0, 1, -1, i32::MAX as i64, i32::MIN as i64];

#[test]
fn test_numeric_properties_round_trip() {
    let h = setup();
    for decl in PROPERTIES {
        let Property::Int(_) = decl.property else {
            continue;
        };
        let widget = h.make(decl.class, &geometry(0, 0, 10, 10));
        let setter = format!("{}=", decl.name);
        for v in INT_BOUNDARIES {
            h.send(&widget, &setter, &[Value::Int(v)]);
            assert_eq!(
                h.send(&widget, decl.name, &[]),
                Value::Int(v),
                "{}#{}",
                decl.class,
                decl.name
            );
        }
    }
}

#[test]
fn test_string_properties_round_trip() {
    let h = setup();
    for decl in PROPERTIES {
        let Property::Str(_) = decl.property else {
            continue;
        };
        let widget = h.make(decl.class, &geometry(0, 0, 10, 10));
        let setter = format!("{}=", decl.name);
        for s in ["hello", "", "ünïcödé"] {
            h.send(&widget, &setter, &[Value::str(s)]);
            assert_eq!(h.send(&widget, decl.name, &[]), Value::str(s), "{}#{}", decl.class, decl.name);
        }
    }
}

#[test]
fn test_float_property_round_trip() {
    let h = setup();
    let output = h.make("ValueOutput", &geometry(0, 0, 50, 20));
    for v in [0.0, -2.5, 1e9] {
        h.send(&output, "value=", &[Value::Float(v)]);
        assert_eq!(h.send(&output, "value", &[]), Value::Float(v));
    }
    // integers widen
    h.send(&output, "value=", &[Value::Int(3)]);
    assert_eq!(h.send(&output, "value", &[]), Value::Float(3.0));
}

#[test]
fn test_constructor_geometry_and_label() {
    let h = setup();
    let button = h.make("Button", &labelled(5, 6, 70, 25, "go"));
    assert_eq!(h.send(&button, "x", &[]), Value::Int(5));
    assert_eq!(h.send(&button, "y", &[]), Value::Int(6));
    assert_eq!(h.send(&button, "w", &[]), Value::Int(70));
    assert_eq!(h.send(&button, "h", &[]), Value::Int(25));
    assert_eq!(h.send(&button, "label", &[]), Value::str("go"));
    assert_eq!(h.send(&button, "labelsize", &[]), Value::Int(14));
}

#[test]
fn test_missing_label_reads_nil() {
    let h = setup();
    let widget = h.make("Widget", &geometry(0, 0, 1, 1));
    assert_eq!(h.send(&widget, "label", &[]), Value::Nil);
}

#[test]
fn test_subclasses_inherit_accessors() {
    let h = setup();
    let editor = h.make("TextEditor", &geometry(1, 2, 3, 4));
    assert_eq!(h.send(&editor, "w", &[]), Value::Int(3));
    let select = h.make("SelectBrowser", &geometry(0, 0, 10, 10));
    h.send(&select, "value=", &[Value::Int(2)]);
    assert_eq!(h.send(&select, "value", &[]), Value::Int(2));
}

#[test]
fn test_kind_specific_accessors_are_not_on_widget() {
    let h = setup();
    let widget = h.make("Widget", &geometry(0, 0, 1, 1));
    assert!(matches!(
        h.call(&widget, "precision", &[]),
        Err(ScriptError::NoMethodError { .. })
    ));
}

#[test]
fn test_setter_argument_checks() {
    let h = setup();
    let widget = h.make("Widget", &geometry(0, 0, 1, 1));

    let err = h.call(&widget, "x=", &[Value::str("1")]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");

    let err = h.call(&widget, "x=", &[Value::Int(1), Value::Int(2)]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");

    let err = h.call(&widget, "x=", &[Value::Int(i64::from(i32::MAX) + 1)]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");

    let err = h.call(&widget, "label=", &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");

    let err = h.call(&widget, "w", &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.class_name(), "ArgumentError");
}

#[test]
fn test_accessor_on_non_widget_is_type_mismatch() {
    let h = setup();
    let buffer = h.make("TextBuffer", &[]);
    let x = h
        .bridge
        .class("Widget")
        .unwrap()
        .find_method("x")
        .unwrap();
    let err = x(h.runtime(), tkbridge_sdk::Call::new(&buffer, &[], None)).unwrap_err();
    assert_eq!(err, ScriptError::type_mismatch("fltk3_widget", "fltk3_textbuffer"));
}

#[test]
fn test_string_getter_needs_arena_room() {
    let options = HostOptions {
        arena_capacity: 8,
        ..HostOptions::default()
    };
    let h = common::setup_with(Toolkit::default(), options);
    let widget = h.make("Widget", &labelled(0, 0, 1, 1, "full"));

    let rt: &Interp = &h.rt;
    while rt.arena_len() < 8 {
        rt.protect(&Value::from("pinned")).unwrap();
    }
    let err = h.call(&widget, "label", &[]).unwrap_err();
    assert_eq!(err, ScriptError::runtime("arena overflow"));
    // integer getters allocate nothing
    assert_eq!(h.send(&widget, "x", &[]), Value::Int(0));
}
