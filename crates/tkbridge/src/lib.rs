//! Widget toolkit bindings for an embedded scripting runtime
//!
//! [`Bridge::install`] declares a top-level module (`FLTK3` by default)
//! holding one class per native widget kind, wired up so that scripts build
//! and drive native widgets:
//!
//! ```text
//! win = FLTK3::Window.new(300, 180, "hello")
//! button = FLTK3::Button.new(10, 10, 100, 30, "click")
//! button.callback(0) { |w, v| w.label = "clicked" }
//! win.end
//! win.show
//! FLTK3.run
//! ```
//!
//! Each scripting instance owns a handle that points at its native object.
//! See [`handle`] for the ownership rules.

#![warn(missing_docs)]

pub mod accessor;
pub mod bridge;
pub mod callback;
pub mod config;
pub mod constructor;
pub mod error;
pub mod handle;
pub mod hierarchy;

mod buffer;
mod group;
mod module;
mod widget;

pub use bridge::Bridge;
pub use config::{BridgeConfig, BridgeSection, ConfigError, LogSection};
pub use error::{script_error, NativeResultExt};
pub use handle::{
    BufferHandle, BufferTag, Handle, HandleKind, Ownership, WidgetHandle, WidgetTag,
    CONTEXT_SLOT, TEXT_BUFFER_TYPE, WIDGET_TYPE,
};
pub use hierarchy::tree_lines;
