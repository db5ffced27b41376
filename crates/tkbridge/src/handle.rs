//! Handle model
//!
//! A handle binds one native object id to the scripting instance that owns
//! it and to the runtime that created it. The handle sits in the instance's
//! hidden `context` slot as a type-tagged data payload, so resolving it is a
//! slot read plus a tag check.
//!
//! Dropping a handle releases the record only. Native objects belong to the
//! toolkit's container tree; an alias handle outliving its native object
//! resolves to a destroyed id, which the toolkit reports on the next access.

use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use tkbridge_sdk::{
    DataType, Object, ObjectRef, RuntimeRef, ScriptError, ScriptResult, ScriptRuntime, Value,
};
use tkbridge_toolkit::{BufferId, NativeId};
use tracing::trace;

/// Data tag of widget handles
pub static WIDGET_TYPE: DataType = DataType {
    name: "fltk3_widget",
};

/// Data tag of text buffer handles
pub static TEXT_BUFFER_TYPE: DataType = DataType {
    name: "fltk3_textbuffer",
};

/// Hidden instance slot holding the handle
pub const CONTEXT_SLOT: &str = "context";

/// Whether a handle was created by allocating its native object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Allocated the native object at construction
    Owner,
    /// Wraps a native object owned elsewhere
    Alias,
}

/// Kind marker for [`Handle`]
pub trait HandleKind: 'static {
    /// Native id type
    type Native: Copy + Eq + fmt::Debug + fmt::Display + 'static;

    /// Payload tag
    fn data_type() -> &'static DataType;
}

/// Marker for widget handles
#[derive(Debug)]
pub enum WidgetTag {}

/// Marker for text buffer handles
#[derive(Debug)]
pub enum BufferTag {}

impl HandleKind for WidgetTag {
    type Native = NativeId;

    fn data_type() -> &'static DataType {
        &WIDGET_TYPE
    }
}

impl HandleKind for BufferTag {
    type Native = BufferId;

    fn data_type() -> &'static DataType {
        &TEXT_BUFFER_TYPE
    }
}

/// Binding of a native object to its scripting instance
pub struct Handle<K: HandleKind> {
    native: Option<K::Native>,
    ownership: Ownership,
    instance: Weak<Object>,
    runtime: RuntimeRef,
    _kind: PhantomData<K>,
}

/// Widget handle
pub type WidgetHandle = Handle<WidgetTag>;

/// Text buffer handle
pub type BufferHandle = Handle<BufferTag>;

impl<K: HandleKind> Handle<K> {
    fn new(
        native: Option<K::Native>,
        ownership: Ownership,
        instance: Weak<Object>,
        runtime: RuntimeRef,
    ) -> Self {
        Self {
            native,
            ownership,
            instance,
            runtime,
            _kind: PhantomData,
        }
    }

    /// Native id; a null alias is a `RuntimeError`
    pub fn native(&self) -> ScriptResult<K::Native> {
        self.native.ok_or_else(|| {
            ScriptError::runtime(format!("{} handle is null", K::data_type().name))
        })
    }

    /// Native id, `None` for a null alias
    pub fn native_opt(&self) -> Option<K::Native> {
        self.native
    }

    /// Ownership flag
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Whether this handle aliases a native object owned elsewhere
    pub fn is_alias(&self) -> bool {
        self.ownership == Ownership::Alias
    }

    /// Owning instance, while it is alive
    pub fn instance(&self) -> Option<ObjectRef> {
        self.instance.upgrade()
    }

    /// Creating runtime, while it is alive
    pub fn runtime(&self) -> Option<Rc<dyn ScriptRuntime>> {
        self.runtime.upgrade()
    }
}

impl<K: HandleKind> Drop for Handle<K> {
    fn drop(&mut self) {
        trace!(
            kind = K::data_type().name,
            native = ?self.native,
            ownership = ?self.ownership,
            "handle released"
        );
    }
}

impl<K: HandleKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &K::data_type().name)
            .field("native", &self.native)
            .field("ownership", &self.ownership)
            .finish()
    }
}

/// Create a handle for `obj` and store it in the context slot
pub fn attach<K: HandleKind>(
    rt: &dyn ScriptRuntime,
    obj: &ObjectRef,
    native: Option<K::Native>,
    ownership: Ownership,
) -> ScriptResult<Rc<Handle<K>>> {
    let handle = Rc::new(Handle::<K>::new(
        native,
        ownership,
        Rc::downgrade(obj),
        rt.runtime_ref(),
    ));
    let data = rt.wrap_data(K::data_type(), handle.clone())?;
    rt.iv_set(obj, CONTEXT_SLOT, data);
    trace!(
        kind = K::data_type().name,
        native = ?native,
        ?ownership,
        class = obj.class().path(),
        "handle attached"
    );
    Ok(handle)
}

/// Wrap a native id as a bare data payload with no owning instance.
///
/// The payload is meant to be passed straight to a constructor, whose adopt
/// form turns it into an alias handle for the new instance.
pub fn wrap_native<K: HandleKind>(
    rt: &dyn ScriptRuntime,
    native: Option<K::Native>,
) -> ScriptResult<Value> {
    let handle = Rc::new(Handle::<K>::new(
        native,
        Ownership::Alias,
        Weak::new(),
        rt.runtime_ref(),
    ));
    rt.wrap_data(K::data_type(), handle)
}

/// Resolve the handle of an instance (or of a bare payload)
pub fn resolve<K: HandleKind>(value: &Value) -> ScriptResult<Rc<Handle<K>>> {
    let expected = K::data_type().name;
    match value {
        Value::Object(obj) => match obj.get_ivar(CONTEXT_SLOT) {
            Value::Data(data) => data.get::<Handle<K>>(K::data_type()),
            _ => Err(ScriptError::type_mismatch(expected, obj.class().path())),
        },
        Value::Data(data) => data.get::<Handle<K>>(K::data_type()),
        other => Err(ScriptError::type_mismatch(expected, other.type_name())),
    }
}

/// Give `obj` an alias handle over the native object `source` refers to
pub fn adopt<K: HandleKind>(
    rt: &dyn ScriptRuntime,
    obj: &ObjectRef,
    source: &Value,
) -> ScriptResult<Rc<Handle<K>>> {
    let native = resolve::<K>(source)?.native_opt();
    attach::<K>(rt, obj, native, Ownership::Alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkbridge_host::{HostOptions, Interp};
    use tkbridge_toolkit::{Toolkit, WidgetKind};

    #[test]
    fn test_attach_and_resolve() {
        let rt = Interp::new(HostOptions::default());
        let tk = Toolkit::default();
        let id = tk.create_widget(WidgetKind::Widget, 0, 0, 1, 1, None);
        let obj = rt.allocate(&rt.object_class()).unwrap();

        let handle = attach::<WidgetTag>(&*rt, &obj, Some(id), Ownership::Owner).unwrap();
        let value = Value::Object(obj.clone());
        let resolved = resolve::<WidgetTag>(&value).unwrap();
        assert!(Rc::ptr_eq(&handle, &resolved));
        assert_eq!(resolved.native().unwrap(), id);
        assert!(!resolved.is_alias());
        assert!(Rc::ptr_eq(&resolved.instance().unwrap(), &obj));
        assert!(resolved.runtime().is_some());

        assert!(matches!(
            resolve::<BufferTag>(&value),
            Err(ScriptError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_plain_values() {
        let rt = Interp::new(HostOptions::default());
        let obj = rt.allocate(&rt.object_class()).unwrap();
        let err = resolve::<WidgetTag>(&Value::Object(obj)).unwrap_err();
        assert_eq!(err, ScriptError::type_mismatch("fltk3_widget", "Object"));
        assert!(resolve::<WidgetTag>(&Value::str("x")).is_err());
    }

    #[test]
    fn test_adopt_makes_alias() {
        let rt = Interp::new(HostOptions::default());
        let tk = Toolkit::default();
        let id = tk.create_widget(WidgetKind::Widget, 0, 0, 1, 1, None);

        let raw = wrap_native::<WidgetTag>(&*rt, Some(id)).unwrap();
        let obj = rt.allocate(&rt.object_class()).unwrap();
        let alias = adopt::<WidgetTag>(&*rt, &obj, &raw).unwrap();
        assert!(alias.is_alias());
        assert_eq!(alias.native_opt(), Some(id));

        let null = wrap_native::<WidgetTag>(&*rt, None).unwrap();
        let handle = resolve::<WidgetTag>(&null).unwrap();
        assert!(handle.instance().is_none());
        assert_eq!(handle.native().unwrap_err().class_name(), "RuntimeError");
    }
}
