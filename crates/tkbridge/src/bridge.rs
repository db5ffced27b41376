//! Installation and shared bridge state

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tkbridge_sdk::{
    method_fn, Call, ClassRef, MethodFn, ScriptError, ScriptResult, ScriptRuntime, Value,
};
use tkbridge_toolkit::{BufferId, NativeId, Toolkit};
use tracing::debug;

use crate::config::BridgeSection;
use crate::handle::{resolve, BufferTag, WidgetTag};
use crate::{accessor, buffer, group, hierarchy, module, widget};

/// The installed binding: the toolkit plus the mirrored classes.
///
/// Method closures hold a weak reference to the bridge; keep the returned
/// `Rc` alive for as long as scripts may call into the module.
pub struct Bridge {
    toolkit: Rc<Toolkit>,
    module: ClassRef,
    classes: RefCell<HashMap<&'static str, ClassRef>>,
}

impl Bridge {
    /// Declare the module, its functions and the whole class tree
    pub fn install(
        rt: &dyn ScriptRuntime,
        toolkit: Rc<Toolkit>,
        config: &BridgeSection,
    ) -> ScriptResult<Rc<Bridge>> {
        let module = rt.define_module(&config.module)?;
        let bridge = Rc::new(Bridge {
            toolkit,
            module,
            classes: RefCell::new(HashMap::new()),
        });

        module::install(&bridge, rt)?;
        hierarchy::install(&bridge, rt)?;
        accessor::install(&bridge, rt)?;
        widget::install(&bridge, rt)?;
        group::install(&bridge, rt)?;
        buffer::install(&bridge, rt)?;

        debug!(
            module = %config.module,
            classes = bridge.classes.borrow().len(),
            "widget bridge installed"
        );
        Ok(bridge)
    }

    /// The toolkit scripts drive
    pub fn toolkit(&self) -> &Rc<Toolkit> {
        &self.toolkit
    }

    /// The top-level module
    pub fn module(&self) -> &ClassRef {
        &self.module
    }

    /// A mirrored class by short name
    pub fn class(&self, name: &str) -> ScriptResult<ClassRef> {
        self.classes
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ScriptError::NameError(format!("{}::{}", self.module.path(), name)))
    }

    /// Native widget behind a scripting value
    pub fn native_of(&self, value: &Value) -> ScriptResult<NativeId> {
        resolve::<WidgetTag>(value)?.native()
    }

    /// Native text buffer behind a scripting value
    pub fn buffer_of(&self, value: &Value) -> ScriptResult<BufferId> {
        resolve::<BufferTag>(value)?.native()
    }

    pub(crate) fn register_class(&self, name: &'static str, class: ClassRef) {
        self.classes.borrow_mut().insert(name, class);
    }

    /// Wrap a bridge-aware method body
    pub(crate) fn method<F>(self: &Rc<Self>, f: F) -> MethodFn
    where
        F: Fn(&Bridge, &dyn ScriptRuntime, Call<'_>) -> ScriptResult<Value> + 'static,
    {
        let bridge = Rc::downgrade(self);
        method_fn(move |rt, call| {
            let bridge = bridge
                .upgrade()
                .ok_or_else(|| ScriptError::runtime("widget bridge has been shut down"))?;
            f(&bridge, rt, call)
        })
    }

    /// Bind a bridge-aware instance method on a mirrored class
    pub(crate) fn define<F>(
        self: &Rc<Self>,
        rt: &dyn ScriptRuntime,
        class: &str,
        name: &str,
        f: F,
    ) -> ScriptResult<()>
    where
        F: Fn(&Bridge, &dyn ScriptRuntime, Call<'_>) -> ScriptResult<Value> + 'static,
    {
        let class = self.class(class)?;
        rt.define_method(&class, name, self.method(f));
        Ok(())
    }
}
