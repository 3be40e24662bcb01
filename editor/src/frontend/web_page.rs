use std::rc::Rc;

use futures::future::LocalBoxFuture;
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;
use web_sys::Event;
use web_sys::js_sys::Reflect;

use super::registered_event::RegisteredEvent;
use crate::host::Page;

/// The browser page, seen through `document`.
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Page for WebPage {
    type Listener = RegisteredEvent;

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn value_of(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        Reflect::get(&element, &JsValue::from_str("value"))
            .ok()?
            .as_string()
    }

    fn listen(
        &self,
        id: &str,
        event_type: &'static str,
        callback: Rc<dyn Fn()>,
    ) -> Option<Self::Listener> {
        let element = self.document.get_element_by_id(id)?;
        let listener: Closure<dyn Fn(Event)> = Closure::new(move |_: Event| callback());
        RegisteredEvent::register(&element, event_type, listener)
            .inspect_err(|error| warn!(%id, event_type, "Failed to attach event listener: {error:?}"))
            .ok()
    }

    fn scroll_to_top(&self, id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        element.set_scroll_top(0);
        return true;
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}
