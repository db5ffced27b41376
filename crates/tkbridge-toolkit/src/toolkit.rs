//! The widget arena and event loop
//!
//! Every native object lives in one generational arena owned by
//! [`Toolkit`]. Containers own their children: destroying a container
//! destroys everything below it. All methods take `&self`; internal state
//! sits behind a `RefCell` that is never borrowed while a callback runs, so
//! callbacks may freely call back into the toolkit.

use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::dialogs::{Dialogs, ScriptedDialogs};
use crate::error::{CallbackError, ToolkitError, ToolkitResult};
use crate::event::Event;
use crate::fonts::FontTable;
use crate::kind::{BoxStyle, NativeKind, WidgetKind};
use crate::options::ToolkitOptions;
use crate::property::{FloatProperty, IntProperty, Owner, StrProperty};
use crate::slab::{Slab, SlotId};

/// Id of a native widget or box style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeId(SlotId);

impl fmt::Display for NativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Id of a native text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(SlotId);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The single callback slot of a widget: a plain function plus the opaque
/// context it receives
pub type CallbackFn = fn(NativeId, &dyn Any) -> Result<(), CallbackError>;

#[derive(Clone)]
struct CallbackSlot {
    func: CallbackFn,
    context: Rc<dyn Any>,
}

enum KindData {
    Plain,
    Input { value: String },
    ValueOutput { value: f64, precision: i32 },
    Browser { lines: Vec<String>, selected: i32 },
    Display { buffer: Option<BufferId> },
}

impl KindData {
    fn for_kind(kind: NativeKind) -> Self {
        match kind.widget() {
            Some(WidgetKind::Input) => KindData::Input {
                value: String::new(),
            },
            Some(WidgetKind::ValueOutput) => KindData::ValueOutput {
                value: 0.0,
                precision: 0,
            },
            Some(WidgetKind::Browser | WidgetKind::SelectBrowser) => KindData::Browser {
                lines: Vec::new(),
                selected: 0,
            },
            Some(WidgetKind::TextDisplay | WidgetKind::TextEditor) => {
                KindData::Display { buffer: None }
            }
            _ => KindData::Plain,
        }
    }
}

struct Node {
    kind: NativeKind,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    label: Option<String>,
    label_font: i32,
    label_size: i32,
    visible: bool,
    box_style: Option<NativeId>,
    parent: Option<NativeId>,
    children: Vec<NativeId>,
    resizable: Option<NativeId>,
    callback: Option<CallbackSlot>,
    data: KindData,
}

impl Node {
    fn new(kind: NativeKind, geometry: (i32, i32, i32, i32), label: Option<&str>) -> Self {
        let is_window = kind.widget().is_some_and(WidgetKind::is_window);
        Node {
            kind,
            x: geometry.0,
            y: geometry.1,
            w: geometry.2,
            h: geometry.3,
            label: label.map(str::to_string),
            label_font: 0,
            label_size: 14,
            visible: !is_window,
            box_style: None,
            parent: None,
            children: Vec::new(),
            resizable: None,
            callback: None,
            data: KindData::for_kind(kind),
        }
    }
}

struct TextBuffer {
    text: String,
}

struct State {
    nodes: Slab<Node>,
    buffers: Slab<TextBuffer>,
    current: Option<NativeId>,
    events: VecDeque<Event>,
    fonts: FontTable,
}

impl State {
    fn node(&self, id: NativeId) -> ToolkitResult<&Node> {
        self.nodes.get(id.0).ok_or(ToolkitError::Destroyed(id))
    }

    fn node_mut(&mut self, id: NativeId) -> ToolkitResult<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(ToolkitError::Destroyed(id))
    }

    fn group(&self, id: NativeId) -> ToolkitResult<&Node> {
        let node = self.node(id)?;
        if node.kind.widget().is_some_and(WidgetKind::is_group) {
            Ok(node)
        } else {
            Err(wrong_kind(id, "Group", node.kind))
        }
    }

    fn group_mut(&mut self, id: NativeId) -> ToolkitResult<&mut Node> {
        self.group(id)?;
        self.node_mut(id)
    }

    fn buffer(&self, id: BufferId) -> ToolkitResult<&TextBuffer> {
        self.buffers.get(id.0).ok_or(ToolkitError::BufferDestroyed(id))
    }

    fn buffer_mut(&mut self, id: BufferId) -> ToolkitResult<&mut TextBuffer> {
        self.buffers
            .get_mut(id.0)
            .ok_or(ToolkitError::BufferDestroyed(id))
    }

    fn insert(&mut self, node: Node, attach: bool) -> NativeId {
        let kind = node.kind;
        let id = NativeId(self.nodes.insert(node));
        if attach {
            if let Some(parent) = self.current.filter(|p| self.nodes.contains(p.0)) {
                if let Ok(node) = self.node_mut(id) {
                    node.parent = Some(parent);
                }
                if let Ok(group) = self.node_mut(parent) {
                    group.children.push(id);
                }
            }
        }
        if kind.widget().is_some_and(WidgetKind::begins_on_create) {
            self.current = Some(id);
        }
        debug!(%id, kind = kind.name(), "native object created");
        id
    }

    fn shown_windows(&self) -> usize {
        self.nodes
            .iter()
            .filter(|(_, node)| {
                node.parent.is_none()
                    && node.visible
                    && node.kind.widget().is_some_and(WidgetKind::is_window)
            })
            .count()
    }
}

fn wrong_kind(id: NativeId, expected: &'static str, actual: NativeKind) -> ToolkitError {
    ToolkitError::WrongKind {
        id,
        expected,
        actual: actual.name(),
    }
}

fn owned_by<P: Owner + Copy>(id: NativeId, node: &Node, property: P) -> ToolkitResult<()> {
    if property.applies_to(node.kind) {
        Ok(())
    } else {
        Err(wrong_kind(id, property.owner().unwrap_or("Widget"), node.kind))
    }
}

/// Headless retained-mode toolkit
pub struct Toolkit {
    state: RefCell<State>,
    dialogs: Box<dyn Dialogs>,
    options: ToolkitOptions,
}

impl Toolkit {
    /// Create a toolkit with scripted dialogs that answer `false`
    pub fn new(options: ToolkitOptions) -> Self {
        Self::with_dialogs(options, Box::new(ScriptedDialogs::new()))
    }

    /// Create a toolkit with the given dialog implementation
    pub fn with_dialogs(options: ToolkitOptions, dialogs: Box<dyn Dialogs>) -> Self {
        Self {
            state: RefCell::new(State {
                nodes: Slab::new(),
                buffers: Slab::new(),
                current: None,
                events: VecDeque::new(),
                fonts: FontTable::new(),
            }),
            dialogs,
            options,
        }
    }

    // ========================================================================
    // Construction and teardown
    // ========================================================================

    /// Construct a widget inside the current group
    pub fn create_widget(
        &self,
        kind: WidgetKind,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        label: Option<&str>,
    ) -> NativeId {
        let node = Node::new(NativeKind::Widget(kind), (x, y, w, h), label);
        self.state.borrow_mut().insert(node, true)
    }

    /// Construct a free-standing box style object
    pub fn create_box(&self, style: BoxStyle, label: Option<&str>) -> NativeId {
        let node = Node::new(NativeKind::Box(style), (0, 0, 0, 0), label);
        self.state.borrow_mut().insert(node, false)
    }

    /// Destroy an object and everything it contains
    pub fn destroy(&self, id: NativeId) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        let parent = state.node(id)?.parent;
        if let Some(parent) = parent {
            if let Ok(group) = state.node_mut(parent) {
                group.children.retain(|child| *child != id);
                if group.resizable == Some(id) {
                    group.resizable = None;
                }
            }
        }
        let mut doomed = vec![id];
        let mut released = Vec::new();
        while let Some(next) = doomed.pop() {
            if let Some(node) = state.nodes.remove(next.0) {
                debug!(id = %next, kind = node.kind.name(), "native object destroyed");
                doomed.extend(node.children.iter().copied());
                released.push(node);
            }
        }
        if state.current.is_some_and(|c| !state.nodes.contains(c.0)) {
            let fallback = parent.filter(|p| state.nodes.contains(p.0));
            state.current = fallback;
        }
        drop(state);
        // Callback contexts may hold script objects; release them unborrowed
        drop(released);
        Ok(())
    }

    /// Whether `id` is live
    pub fn exists(&self, id: NativeId) -> bool {
        self.state.borrow().nodes.contains(id.0)
    }

    /// Kind of a live object
    pub fn kind(&self, id: NativeId) -> ToolkitResult<NativeKind> {
        Ok(self.state.borrow().node(id)?.kind)
    }

    /// Number of live native objects
    pub fn object_count(&self) -> usize {
        self.state.borrow().nodes.len()
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Read an integer property
    pub fn int_property(&self, id: NativeId, property: IntProperty) -> ToolkitResult<i32> {
        let state = self.state.borrow();
        let node = state.node(id)?;
        owned_by(id, node, property)?;
        Ok(match (property, &node.data) {
            (IntProperty::X, _) => node.x,
            (IntProperty::Y, _) => node.y,
            (IntProperty::W, _) => node.w,
            (IntProperty::H, _) => node.h,
            (IntProperty::LabelFont, _) => node.label_font,
            (IntProperty::LabelSize, _) => node.label_size,
            (IntProperty::BrowserValue, KindData::Browser { selected, .. }) => *selected,
            (IntProperty::Precision, KindData::ValueOutput { precision, .. }) => *precision,
            _ => return Err(wrong_kind(id, property.owner().unwrap_or("Widget"), node.kind)),
        })
    }

    /// Write an integer property
    pub fn set_int_property(
        &self,
        id: NativeId,
        property: IntProperty,
        value: i32,
    ) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(id)?;
        owned_by(id, node, property)?;
        let kind = node.kind;
        let slot = match (property, &mut node.data) {
            (IntProperty::X, _) => &mut node.x,
            (IntProperty::Y, _) => &mut node.y,
            (IntProperty::W, _) => &mut node.w,
            (IntProperty::H, _) => &mut node.h,
            (IntProperty::LabelFont, _) => &mut node.label_font,
            (IntProperty::LabelSize, _) => &mut node.label_size,
            (IntProperty::BrowserValue, KindData::Browser { selected, .. }) => selected,
            (IntProperty::Precision, KindData::ValueOutput { precision, .. }) => precision,
            _ => return Err(wrong_kind(id, property.owner().unwrap_or("Widget"), kind)),
        };
        *slot = value;
        Ok(())
    }

    /// Read a float property
    pub fn float_property(&self, id: NativeId, property: FloatProperty) -> ToolkitResult<f64> {
        let state = self.state.borrow();
        let node = state.node(id)?;
        owned_by(id, node, property)?;
        match (property, &node.data) {
            (FloatProperty::Value, KindData::ValueOutput { value, .. }) => Ok(*value),
            _ => Err(wrong_kind(id, "ValueOutput", node.kind)),
        }
    }

    /// Write a float property
    pub fn set_float_property(
        &self,
        id: NativeId,
        property: FloatProperty,
        value: f64,
    ) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(id)?;
        owned_by(id, node, property)?;
        match (property, &mut node.data) {
            (FloatProperty::Value, KindData::ValueOutput { value: slot, .. }) => {
                *slot = value;
                Ok(())
            }
            _ => Err(wrong_kind(id, "ValueOutput", node.kind)),
        }
    }

    /// Read a string property; `None` when the object has no such string
    pub fn str_property(&self, id: NativeId, property: StrProperty) -> ToolkitResult<Option<String>> {
        let state = self.state.borrow();
        let node = state.node(id)?;
        owned_by(id, node, property)?;
        match (property, &node.data) {
            (StrProperty::Label, _) => Ok(node.label.clone()),
            (StrProperty::InputValue, KindData::Input { value }) => Ok(Some(value.clone())),
            _ => Err(wrong_kind(id, "Input", node.kind)),
        }
    }

    /// Write a string property
    pub fn set_str_property(
        &self,
        id: NativeId,
        property: StrProperty,
        value: &str,
    ) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(id)?;
        owned_by(id, node, property)?;
        match (property, &mut node.data) {
            (StrProperty::Label, _) => node.label = Some(value.to_string()),
            (StrProperty::InputValue, KindData::Input { value: slot }) => {
                *slot = value.to_string()
            }
            _ => return Err(wrong_kind(id, "Input", node.kind)),
        }
        Ok(())
    }

    // ========================================================================
    // Visibility and box style
    // ========================================================================

    /// Make an object visible
    pub fn show(&self, id: NativeId) -> ToolkitResult<()> {
        self.state.borrow_mut().node_mut(id)?.visible = true;
        Ok(())
    }

    /// Hide an object
    pub fn hide(&self, id: NativeId) -> ToolkitResult<()> {
        self.state.borrow_mut().node_mut(id)?.visible = false;
        Ok(())
    }

    /// Visibility flag
    pub fn visible(&self, id: NativeId) -> ToolkitResult<bool> {
        Ok(self.state.borrow().node(id)?.visible)
    }

    /// Current box style object
    pub fn box_style(&self, id: NativeId) -> ToolkitResult<Option<NativeId>> {
        Ok(self.state.borrow().node(id)?.box_style)
    }

    /// Set the box style; `style` must be a box style object
    pub fn set_box_style(&self, id: NativeId, style: Option<NativeId>) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        if let Some(style) = style {
            let kind = state.node(style)?.kind;
            if !kind.is_box() {
                return Err(wrong_kind(style, "Box", kind));
            }
        }
        state.node_mut(id)?.box_style = style;
        Ok(())
    }

    // ========================================================================
    // Groups
    // ========================================================================

    /// Make a group current
    pub fn begin(&self, id: NativeId) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        state.group(id)?;
        state.current = Some(id);
        trace!(%id, "group begin");
        Ok(())
    }

    /// Make the group's parent current
    pub fn end(&self, id: NativeId) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        state.current = state.group(id)?.parent;
        trace!(%id, "group end");
        Ok(())
    }

    /// Group new widgets attach to
    pub fn current_group(&self) -> Option<NativeId> {
        let state = self.state.borrow();
        state.current.filter(|id| state.nodes.contains(id.0))
    }

    /// Containing group
    pub fn parent(&self, id: NativeId) -> ToolkitResult<Option<NativeId>> {
        Ok(self.state.borrow().node(id)?.parent)
    }

    /// Children of a group, in insertion order
    pub fn children(&self, id: NativeId) -> ToolkitResult<Vec<NativeId>> {
        Ok(self.state.borrow().group(id)?.children.clone())
    }

    /// Child `index` of a group
    pub fn child(&self, id: NativeId, index: usize) -> ToolkitResult<Option<NativeId>> {
        Ok(self.state.borrow().group(id)?.children.get(index).copied())
    }

    /// Child that absorbs resizing
    pub fn resizable(&self, id: NativeId) -> ToolkitResult<Option<NativeId>> {
        Ok(self.state.borrow().group(id)?.resizable)
    }

    /// Set the child that absorbs resizing. Ownership is unchanged.
    pub fn set_resizable(&self, id: NativeId, target: Option<NativeId>) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        if let Some(target) = target {
            state.node(target)?;
        }
        state.group_mut(id)?.resizable = target;
        Ok(())
    }

    // ========================================================================
    // Callbacks and the event loop
    // ========================================================================

    /// Register the callback, replacing any previous one
    pub fn set_callback(
        &self,
        id: NativeId,
        func: CallbackFn,
        context: Rc<dyn Any>,
    ) -> ToolkitResult<()> {
        let previous = {
            let mut state = self.state.borrow_mut();
            let node = state.node_mut(id)?;
            node.callback.replace(CallbackSlot { func, context })
        };
        drop(previous);
        debug!(%id, "callback registered");
        Ok(())
    }

    /// Whether a callback is registered
    pub fn has_callback(&self, id: NativeId) -> ToolkitResult<bool> {
        Ok(self.state.borrow().node(id)?.callback.is_some())
    }

    /// Invoke the registered callback, if any
    pub fn do_callback(&self, id: NativeId) -> ToolkitResult<()> {
        let slot = self.state.borrow().node(id)?.callback.clone();
        match slot {
            Some(slot) => (slot.func)(id, &*slot.context).map_err(ToolkitError::Callback),
            None => Ok(()),
        }
    }

    /// Queue an event for [`Toolkit::run`]
    pub fn post(&self, event: Event) {
        self.state.borrow_mut().events.push_back(event);
    }

    /// Number of queued events
    pub fn pending(&self) -> usize {
        self.state.borrow().events.len()
    }

    /// Number of shown top-level windows
    pub fn shown_windows(&self) -> usize {
        self.state.borrow().shown_windows()
    }

    /// Apply one event
    pub fn handle(&self, event: Event) -> ToolkitResult<()> {
        let id = event.target();
        match event {
            Event::Activate(_) => {}
            Event::Type(_, text) => self.set_str_property(id, StrProperty::InputValue, &text)?,
            Event::Select(_, line) => self.set_int_property(id, IntProperty::BrowserValue, line)?,
            Event::Close(_) => {
                if !self.has_callback(id)? {
                    return self.hide(id);
                }
            }
        }
        self.do_callback(id)
    }

    /// Process events until no top-level window is shown or the queue is
    /// empty. Events aimed at destroyed objects are dropped. The first
    /// failing callback stops the loop.
    pub fn run(&self) -> ToolkitResult<i32> {
        debug!(
            windows = self.shown_windows(),
            pending = self.pending(),
            "event loop started"
        );
        let mut handled = 0usize;
        while self.shown_windows() > 0 {
            let next = self.state.borrow_mut().events.pop_front();
            let Some(event) = next else { break };
            trace!(?event, "dispatch");
            match self.handle(event) {
                Ok(()) => handled += 1,
                Err(ToolkitError::Destroyed(id)) => trace!(%id, "event for destroyed object dropped"),
                Err(err) => {
                    debug!(handled, "event loop stopped by callback failure");
                    return Err(err);
                }
            }
        }
        debug!(handled, "event loop finished");
        Ok(0)
    }

    // ========================================================================
    // Browsers
    // ========================================================================

    fn with_lines<T>(
        &self,
        id: NativeId,
        f: impl FnOnce(&mut Vec<String>, &mut i32) -> T,
    ) -> ToolkitResult<T> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(id)?;
        match &mut node.data {
            KindData::Browser { lines, selected } => Ok(f(lines, selected)),
            _ => Err(wrong_kind(id, "Browser", node.kind)),
        }
    }

    /// Append a line
    pub fn browser_add(&self, id: NativeId, line: &str) -> ToolkitResult<()> {
        self.with_lines(id, |lines, _| lines.push(line.to_string()))
    }

    /// Replace the lines with the contents of a file. Returns `false`, and
    /// leaves the lines untouched, when the file cannot be read.
    pub fn browser_load(&self, id: NativeId, path: &Path) -> ToolkitResult<bool> {
        self.kind(id)?;
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(%id, path = %path.display(), error = %err, "browser load failed");
                self.with_lines(id, |_, _| ())?;
                return Ok(false);
            }
        };
        self.with_lines(id, |lines, selected| {
            *lines = contents.lines().map(str::to_string).collect();
            *selected = 0;
        })?;
        Ok(true)
    }

    /// Line `line` (1-based)
    pub fn browser_text(&self, id: NativeId, line: i32) -> ToolkitResult<Option<String>> {
        self.with_lines(id, |lines, _| line_index(line).and_then(|i| lines.get(i).cloned()))
    }

    /// Replace line `line` (1-based); out-of-range lines are ignored
    pub fn set_browser_text(&self, id: NativeId, line: i32, text: &str) -> ToolkitResult<()> {
        self.with_lines(id, |lines, _| {
            if let Some(slot) = line_index(line).and_then(|i| lines.get_mut(i)) {
                *slot = text.to_string();
            }
        })
    }

    /// Number of lines
    pub fn browser_size(&self, id: NativeId) -> ToolkitResult<usize> {
        self.with_lines(id, |lines, _| lines.len())
    }

    // ========================================================================
    // Text buffers
    // ========================================================================

    /// Allocate an empty text buffer
    pub fn create_buffer(&self) -> BufferId {
        let id = BufferId(self.state.borrow_mut().buffers.insert(TextBuffer {
            text: String::new(),
        }));
        debug!(%id, "text buffer created");
        id
    }

    /// Free a text buffer. Views still pointing at it read as detached.
    pub fn destroy_buffer(&self, id: BufferId) -> ToolkitResult<()> {
        self.state
            .borrow_mut()
            .buffers
            .remove(id.0)
            .ok_or(ToolkitError::BufferDestroyed(id))?;
        debug!(%id, "text buffer destroyed");
        Ok(())
    }

    /// Buffer contents
    pub fn buffer_text(&self, id: BufferId) -> ToolkitResult<String> {
        Ok(self.state.borrow().buffer(id)?.text.clone())
    }

    /// Replace buffer contents
    pub fn set_buffer_text(&self, id: BufferId, text: &str) -> ToolkitResult<()> {
        self.state.borrow_mut().buffer_mut(id)?.text = text.to_string();
        Ok(())
    }

    /// Append to a buffer
    pub fn buffer_append(&self, id: BufferId, text: &str) -> ToolkitResult<()> {
        self.state.borrow_mut().buffer_mut(id)?.text.push_str(text);
        Ok(())
    }

    /// Buffer length in bytes
    pub fn buffer_length(&self, id: BufferId) -> ToolkitResult<usize> {
        Ok(self.state.borrow().buffer(id)?.text.len())
    }

    /// Buffer shown by a text view
    pub fn display_buffer(&self, id: NativeId) -> ToolkitResult<Option<BufferId>> {
        let state = self.state.borrow();
        let node = state.node(id)?;
        match &node.data {
            KindData::Display { buffer } => Ok(buffer.filter(|b| state.buffers.contains(b.0))),
            _ => Err(wrong_kind(id, "TextDisplay", node.kind)),
        }
    }

    /// Attach a buffer to a text view; neither side takes ownership
    pub fn set_display_buffer(&self, id: NativeId, buffer: Option<BufferId>) -> ToolkitResult<()> {
        let mut state = self.state.borrow_mut();
        if let Some(buffer) = buffer {
            state.buffer(buffer)?;
        }
        let node = state.node_mut(id)?;
        match &mut node.data {
            KindData::Display { buffer: slot } => {
                *slot = buffer;
                Ok(())
            }
            _ => Err(wrong_kind(id, "TextDisplay", node.kind)),
        }
    }

    // ========================================================================
    // Dialogs and fonts
    // ========================================================================

    /// Modal message
    pub fn alert(&self, message: &str) {
        self.dialogs.alert(message);
    }

    /// Modal yes/no question
    pub fn ask(&self, message: &str) -> bool {
        self.dialogs.ask(message)
    }

    /// Load matching system fonts; returns the table size
    pub fn set_fonts(&self, pattern: &str) -> usize {
        let count = self.state.borrow_mut().fonts.load(
            pattern,
            self.options.system_fonts.iter().map(String::as_str),
        );
        debug!(pattern, count, "fonts loaded");
        count
    }

    /// Font name by index
    pub fn font_name(&self, index: i64) -> Option<String> {
        self.state.borrow().fonts.name(index).map(str::to_string)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(ToolkitOptions::default())
    }
}

fn line_index(line: i32) -> Option<usize> {
    usize::try_from(line).ok()?.checked_sub(1)
}
