//! tkbridge toolkit - a headless retained-mode widget toolkit
//!
//! Widgets, box styles and text buffers live in generational arenas and are
//! addressed by copyable ids. Containers own their children and track an
//! implicit "current group" new widgets attach to. Each widget has a single
//! callback slot; a synthetic event queue drives [`Toolkit::run`].

#![warn(missing_docs)]

pub mod dialogs;
pub mod error;
pub mod event;
pub mod fonts;
pub mod kind;
pub mod options;
pub mod property;
pub mod slab;
pub mod toolkit;

// ============================================================================
// Re-exports
// ============================================================================

pub use dialogs::{Dialogs, ScriptedDialogs};
pub use error::{CallbackError, ToolkitError, ToolkitResult};
pub use event::Event;
pub use fonts::{FontTable, STANDARD_FONTS};
pub use kind::{BoxStyle, NativeKind, WidgetKind};
pub use options::ToolkitOptions;
pub use property::{FloatProperty, IntProperty, StrProperty};
pub use toolkit::{BufferId, CallbackFn, NativeId, Toolkit};
