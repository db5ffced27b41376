//! tkbridge host - a small single-threaded scripting runtime
//!
//! Implements [`tkbridge_sdk::ScriptRuntime`] far enough to exercise native
//! extensions end to end: classes and modules, method lookup through the
//! parent chain, instance slots, closures and a bounded GC arena.

#![warn(missing_docs)]

pub mod arena;
pub mod interp;
pub mod options;

pub use interp::Interp;
pub use options::{HostOptions, DEFAULT_ARENA_CAPACITY};
