//! Native object kinds

use std::fmt;

/// Concrete widget classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Plain widget
    Widget,
    /// Push button
    Button,
    /// Read-only numeric display
    ValueOutput,
    /// Single-line text input
    Input,
    /// Check box button
    CheckButton,
    /// Radio button
    RadioButton,
    /// Line list
    Browser,
    /// Line list with a selection
    SelectBrowser,
    /// Container
    Group,
    /// Read-only text view
    TextDisplay,
    /// Editable text view
    TextEditor,
    /// Top-level or nested window
    Window,
    /// Double-buffered window
    DoubleWindow,
}

impl WidgetKind {
    /// Class name
    pub const fn name(self) -> &'static str {
        match self {
            WidgetKind::Widget => "Widget",
            WidgetKind::Button => "Button",
            WidgetKind::ValueOutput => "ValueOutput",
            WidgetKind::Input => "Input",
            WidgetKind::CheckButton => "CheckButton",
            WidgetKind::RadioButton => "RadioButton",
            WidgetKind::Browser => "Browser",
            WidgetKind::SelectBrowser => "SelectBrowser",
            WidgetKind::Group => "Group",
            WidgetKind::TextDisplay => "TextDisplay",
            WidgetKind::TextEditor => "TextEditor",
            WidgetKind::Window => "Window",
            WidgetKind::DoubleWindow => "DoubleWindow",
        }
    }

    /// Container kinds accept children
    pub const fn is_group(self) -> bool {
        matches!(
            self,
            WidgetKind::Group
                | WidgetKind::TextDisplay
                | WidgetKind::TextEditor
                | WidgetKind::Window
                | WidgetKind::DoubleWindow
        )
    }

    /// Whether construction leaves the new container current.
    /// Text views end themselves.
    pub const fn begins_on_create(self) -> bool {
        matches!(
            self,
            WidgetKind::Group | WidgetKind::Window | WidgetKind::DoubleWindow
        )
    }

    /// Window kinds
    pub const fn is_window(self) -> bool {
        matches!(self, WidgetKind::Window | WidgetKind::DoubleWindow)
    }

    /// Browser kinds
    pub const fn is_browser(self) -> bool {
        matches!(self, WidgetKind::Browser | WidgetKind::SelectBrowser)
    }

    /// Text view kinds
    pub const fn is_text_display(self) -> bool {
        matches!(self, WidgetKind::TextDisplay | WidgetKind::TextEditor)
    }
}

macro_rules! box_styles {
    ($($style:ident),+ $(,)?) => {
        /// Concrete box and frame styles
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum BoxStyle {
            $($style),+
        }

        impl BoxStyle {
            /// Every style, in declaration order
            pub const ALL: &'static [BoxStyle] = &[$(BoxStyle::$style),+];

            /// Class name
            pub const fn name(self) -> &'static str {
                match self {
                    $(BoxStyle::$style => stringify!($style)),+
                }
            }
        }
    };
}

box_styles! {
    NoBox,
    FlatBox,
    UpBox,
    DownBox,
    ThinUpBox,
    ThinDownBox,
    EngravedBox,
    EmbossedBox,
    BorderBox,
    ShadowBox,
    RoundedBox,
    RShadowBox,
    RFlatBox,
    RoundUpBox,
    RoundDownBox,
    DiamondUpBox,
    DiamondDownBox,
    OvalBox,
    OShadowBox,
    OFlatBox,
    PlasticUpBox,
    PlasticDownBox,
    PlasticThinUpBox,
    PlasticThinDownBox,
    PlasticRoundUpBox,
    PlasticRoundDownBox,
    ClassicUpBox,
    ClassicDownBox,
    ClassicThinUpBox,
    ClassicThinDownBox,
    ClassicRoundUpBox,
    ClassicRoundDownBox,
    BorderFrame,
    UpFrame,
    DownFrame,
    ThinUpFrame,
    ThinDownFrame,
    EngravedFrame,
    EmbossedFrame,
    ShadowFrame,
    RoundedFrame,
    OvalFrame,
    PlasticUpFrame,
    PlasticDownFrame,
    ClassicUpFrame,
    ClassicDownFrame,
    ClassicThinUpFrame,
    ClassicThinDownFrame,
}

impl BoxStyle {
    /// Style by class name
    pub fn from_name(name: &str) -> Option<BoxStyle> {
        BoxStyle::ALL.iter().copied().find(|style| style.name() == name)
    }

    /// Frame styles draw only the border
    pub fn is_frame(self) -> bool {
        self.name().ends_with("Frame")
    }
}

/// Kind of any native object in the widget arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    /// A widget
    Widget(WidgetKind),
    /// A box style
    Box(BoxStyle),
}

impl NativeKind {
    /// Class name
    pub const fn name(self) -> &'static str {
        match self {
            NativeKind::Widget(kind) => kind.name(),
            NativeKind::Box(style) => style.name(),
        }
    }

    /// Widget kind, if a widget
    pub const fn widget(self) -> Option<WidgetKind> {
        match self {
            NativeKind::Widget(kind) => Some(kind),
            NativeKind::Box(_) => None,
        }
    }

    /// Whether the object is a box style
    pub const fn is_box(self) -> bool {
        matches!(self, NativeKind::Box(_))
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
