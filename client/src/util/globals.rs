//! Page callbacks exported by page scripts as `window` functions.

use js_sys::{Function, Reflect};
use page_switcher::{Callback, CallbackTable, HandlerError, PageHandler};
use wasm_bindgen::{JsCast, JsValue};

/// Handler calling `window[name]()`.
///
/// The function is looked up on every call, so scripts loaded after the
/// switcher was built are still picked up. An undefined name is reported as
/// [`HandlerError::Undefined`].
pub struct GlobalFunction {
    name: String,
}

impl GlobalFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn failed(&self, err: &JsValue) -> HandlerError {
        HandlerError::Failed { name: self.name.clone(), message: format!("{err:?}") }
    }
}

impl PageHandler for GlobalFunction {
    fn call(&self) -> Result<(), HandlerError> {
        let window = web_sys::window().ok_or_else(|| HandlerError::Undefined(self.name.clone()))?;
        let value = Reflect::get(&window, &JsValue::from_str(&self.name)).map_err(|e| self.failed(&e))?;
        let Some(function) = value.dyn_ref::<Function>() else {
            return Err(HandlerError::Undefined(self.name.clone()));
        };
        function.call0(&window).map_err(|e| self.failed(&e))?;
        Ok(())
    }
}

/// Register every callback against the page function of the same name.
pub fn install_globals(table: &mut CallbackTable) {
    for callback in Callback::ALL {
        table.register(callback, GlobalFunction::new(callback.global_name()));
    }
}
