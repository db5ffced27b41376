//! Class hierarchy mirror
//!
//! The scripting classes follow the toolkit's inheritance chain. Each class
//! is declared once with its parent; inherited behavior comes from the
//! runtime's method lookup, never from re-declaring methods on subclasses.

use std::rc::Rc;

use tkbridge_sdk::{ScriptResult, ScriptRuntime};
use tkbridge_toolkit::{BoxStyle, WidgetKind};
use tracing::debug;

use crate::bridge::Bridge;
use crate::constructor::{self, InitStyle};

/// One mirrored class
#[derive(Debug, Clone, Copy)]
pub struct ClassDecl {
    /// Short name inside the module
    pub name: &'static str,
    /// Parent class, `None` for `Object`
    pub parent: Option<&'static str>,
    /// Constructor, `None` when the class installs its own
    pub init: Option<InitStyle>,
}

const fn widget(kind: WidgetKind, parent: &'static str) -> ClassDecl {
    ClassDecl {
        name: kind.name(),
        parent: Some(parent),
        init: Some(InitStyle::Widget(kind)),
    }
}

/// Widget classes, parents first. Box style leaves follow from
/// [`BoxStyle::ALL`].
pub const CLASSES: &[ClassDecl] = &[
    ClassDecl {
        name: "Widget",
        parent: None,
        init: Some(InitStyle::Widget(WidgetKind::Widget)),
    },
    widget(WidgetKind::Button, "Widget"),
    widget(WidgetKind::ValueOutput, "Widget"),
    widget(WidgetKind::Input, "Widget"),
    widget(WidgetKind::CheckButton, "Widget"),
    widget(WidgetKind::RadioButton, "Widget"),
    widget(WidgetKind::Browser, "Widget"),
    widget(WidgetKind::SelectBrowser, "Browser"),
    ClassDecl {
        name: "Group",
        parent: Some("Widget"),
        init: Some(InitStyle::View("Group")),
    },
    widget(WidgetKind::TextDisplay, "Group"),
    widget(WidgetKind::TextEditor, "TextDisplay"),
    ClassDecl {
        name: "Window",
        parent: Some("Group"),
        init: Some(InitStyle::Window(WidgetKind::Window)),
    },
    ClassDecl {
        name: "DoubleWindow",
        parent: Some("Window"),
        init: Some(InitStyle::Window(WidgetKind::DoubleWindow)),
    },
    ClassDecl {
        name: "Box",
        parent: Some("Widget"),
        init: Some(InitStyle::View("Box")),
    },
    ClassDecl {
        name: "TextBuffer",
        parent: None,
        init: None,
    },
];

/// Every declaration: the widget table followed by one leaf per box style
pub fn declarations() -> impl Iterator<Item = ClassDecl> {
    CLASSES.iter().copied().chain(BoxStyle::ALL.iter().map(|style| ClassDecl {
        name: style.name(),
        parent: Some("Box"),
        init: Some(InitStyle::Style(*style)),
    }))
}

/// Declare every class and bind its constructor
pub(crate) fn install(bridge: &Rc<Bridge>, rt: &dyn ScriptRuntime) -> ScriptResult<()> {
    let mut count = 0usize;
    for decl in declarations() {
        let parent = match decl.parent {
            Some(name) => bridge.class(name)?,
            None => rt.object_class(),
        };
        let class = rt.define_class_under(bridge.module(), decl.name, &parent)?;
        if let Some(style) = decl.init {
            rt.define_method(
                &class,
                "initialize",
                bridge.method(move |bridge, rt, call| {
                    constructor::initialize(bridge, rt, call, style)
                }),
            );
        }
        bridge.register_class(decl.name, class);
        count += 1;
    }
    debug!(count, "class tree declared");
    Ok(())
}

/// Indented rendering of the tree, one class per line
pub fn tree_lines(module: &str) -> Vec<String> {
    let decls: Vec<ClassDecl> = declarations().collect();
    let mut lines = vec![module.to_string()];
    let mut stack: Vec<(&'static str, usize)> = decls
        .iter()
        .rev()
        .filter(|d| d.parent.is_none())
        .map(|d| (d.name, 1))
        .collect();
    while let Some((name, depth)) = stack.pop() {
        lines.push(format!("{}{}::{}", "  ".repeat(depth), module, name));
        stack.extend(
            decls
                .iter()
                .rev()
                .filter(|d| d.parent == Some(name))
                .map(|d| (d.name, depth + 1)),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_declared_first() {
        let decls: Vec<_> = declarations().collect();
        for (i, decl) in decls.iter().enumerate() {
            if let Some(parent) = decl.parent {
                assert!(
                    decls[..i].iter().any(|d| d.name == parent),
                    "{} declared before {}",
                    decl.name,
                    parent
                );
            }
        }
        assert_eq!(decls.len(), CLASSES.len() + 48);
    }

    #[test]
    fn test_tree_lines() {
        let lines = tree_lines("FLTK3");
        assert_eq!(lines[0], "FLTK3");
        assert_eq!(lines[1], "  FLTK3::Widget");
        assert_eq!(lines[2], "    FLTK3::Button");
        let window = lines.iter().position(|l| l.trim() == "FLTK3::Window").unwrap();
        assert_eq!(lines[window + 1], "        FLTK3::DoubleWindow");
        assert_eq!(lines.last().map(String::as_str), Some("  FLTK3::TextBuffer"));
        assert_eq!(lines.len(), 1 + CLASSES.len() + 48);
    }
}
