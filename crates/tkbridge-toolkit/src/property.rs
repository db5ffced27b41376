//! Addressable widget properties

use crate::kind::{NativeKind, WidgetKind};

/// Integer-valued properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntProperty {
    /// Left edge
    X,
    /// Top edge
    Y,
    /// Width
    W,
    /// Height
    H,
    /// Label font index
    LabelFont,
    /// Label size in points
    LabelSize,
    /// Selected browser line, 1-based, 0 for none
    BrowserValue,
    /// Digits shown by a value output
    Precision,
}

/// Float-valued properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatProperty {
    /// Value shown by a value output
    Value,
}

/// String-valued properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrProperty {
    /// Widget label
    Label,
    /// Text held by an input
    InputValue,
}

/// Kind whose instances carry a property, `None` when every object does
pub(crate) trait Owner {
    fn owner(self) -> Option<&'static str>;
    fn applies_to(self, kind: NativeKind) -> bool;
}

impl Owner for IntProperty {
    fn owner(self) -> Option<&'static str> {
        match self {
            IntProperty::BrowserValue => Some(WidgetKind::Browser.name()),
            IntProperty::Precision => Some(WidgetKind::ValueOutput.name()),
            _ => None,
        }
    }

    fn applies_to(self, kind: NativeKind) -> bool {
        match self {
            IntProperty::BrowserValue => kind.widget().is_some_and(WidgetKind::is_browser),
            IntProperty::Precision => kind == NativeKind::Widget(WidgetKind::ValueOutput),
            _ => true,
        }
    }
}

impl Owner for FloatProperty {
    fn owner(self) -> Option<&'static str> {
        Some(WidgetKind::ValueOutput.name())
    }

    fn applies_to(self, kind: NativeKind) -> bool {
        kind == NativeKind::Widget(WidgetKind::ValueOutput)
    }
}

impl Owner for StrProperty {
    fn owner(self) -> Option<&'static str> {
        match self {
            StrProperty::Label => None,
            StrProperty::InputValue => Some(WidgetKind::Input.name()),
        }
    }

    fn applies_to(self, kind: NativeKind) -> bool {
        match self {
            StrProperty::Label => true,
            StrProperty::InputValue => kind == NativeKind::Widget(WidgetKind::Input),
        }
    }
}
