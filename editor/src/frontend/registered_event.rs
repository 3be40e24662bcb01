use std::borrow::Cow;

use tracing::warn;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Event;
use web_sys::EventTarget;

/// An event listener that is detached when dropped.
pub struct RegisteredEvent {
    target: EventTarget,
    event_type: Cow<'static, str>,
    listener: Closure<dyn Fn(Event)>,
}

impl RegisteredEvent {
    pub fn register(
        target: &EventTarget,
        event_type: impl Into<Cow<'static, str>>,
        listener: Closure<dyn Fn(Event)>,
    ) -> Result<Self, JsValue> {
        let event_type = event_type.into();
        let () = target
            .add_event_listener_with_callback(&event_type, listener.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            listener,
        })
    }
}

impl Drop for RegisteredEvent {
    fn drop(&mut self) {
        let Self {
            target,
            event_type,
            listener,
        } = self;
        if let Err(error) = target
            .remove_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())
        {
            warn!(%event_type, "Failed to detach event listener: {error:?}");
        }
    }
}
