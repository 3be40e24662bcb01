#![cfg(feature = "client")]

use nameth::NamedEnumValues as _;
use nameth::nameth;
use tracing::debug;
use tracing::info;
use tracing_subscriber_wasm::MakeConsoleWriter;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsError;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::CustomEvent;
use web_sys::Document;
use web_sys::Element;
use web_sys::Event;
use web_sys::js_sys::Reflect;

use self::monaco::Monaco;
use self::registered_event::RegisteredEvent;
use self::web_page::WebPage;
use crate::bootstrapper::Bootstrapper;
use crate::config::BootstrapConfig;
use crate::config::ConfigError;

mod monaco;
mod registered_event;
mod web_page;

const READY_EVENT: &str = "DOMContentLoaded";

type WebBootstrapper = Bootstrapper<WebPage, Monaco>;

/// Entry point called by the page once the wasm module is instantiated.
///
/// `config` is a [BootstrapConfig] given as a JS object, a JSON string, or
/// `undefined` for the defaults.
#[wasm_bindgen]
pub fn start(config: JsValue) -> Result<(), JsError> {
    setup_logging();
    info!("Starting the editor bootstrapper");

    let config = parse_config(config)?;
    let window = web_sys::window().ok_or(StartError::Window)?;
    let document = window.document().ok_or(StartError::Document)?;

    let bootstrapper = Bootstrapper::new(
        config,
        WebPage::new(document.clone()),
        Monaco::new(document.clone()),
    );
    bootstrapper.configure();

    let mut listeners = vec![on_partial_update(&document, &bootstrapper)?];
    if is_loading(&document) {
        listeners.push(on_ready(&document, &bootstrapper)?);
    } else {
        debug!("The document is already loaded");
        bootstrapper.on_ready();
    }

    // The document listeners live as long as the page.
    std::mem::forget(listeners);
    Ok(())
}

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .without_time()
        .try_init();
}

fn parse_config(config: JsValue) -> Result<BootstrapConfig, StartError> {
    if config.is_undefined() || config.is_null() {
        return Ok(BootstrapConfig::default());
    }
    if let Some(json) = config.as_string() {
        return Ok(BootstrapConfig::from_json(&json)?);
    }
    serde_wasm_bindgen::from_value(config).map_err(|error| StartError::ConfigObject(error.to_string()))
}

fn is_loading(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|ready_state| ready_state.as_string())
        .is_none_or(|ready_state| ready_state == "loading")
}

fn on_ready(
    document: &Document,
    bootstrapper: &WebBootstrapper,
) -> Result<RegisteredEvent, StartError> {
    let bootstrapper = bootstrapper.clone();
    let listener: Closure<dyn Fn(Event)> = Closure::new(move |_: Event| bootstrapper.on_ready());
    RegisteredEvent::register(document, READY_EVENT, listener).map_err(StartError::Listen)
}

fn on_partial_update(
    document: &Document,
    bootstrapper: &WebBootstrapper,
) -> Result<RegisteredEvent, StartError> {
    let event_type = bootstrapper.config().partial_update_event.clone();
    let bootstrapper = bootstrapper.clone();
    let listener: Closure<dyn Fn(Event)> = Closure::new(move |event: Event| {
        let Some(region_id) = swapped_region_id(&event) else {
            debug!("The partial update has no target");
            return;
        };
        bootstrapper.on_partial_update(&region_id);
    });
    RegisteredEvent::register(document, event_type, listener).map_err(StartError::Listen)
}

/// Reads `event.detail.target.id`.
fn swapped_region_id(event: &Event) -> Option<String> {
    let event = event.dyn_ref::<CustomEvent>()?;
    let target = Reflect::get(&event.detail(), &JsValue::from_str("target")).ok()?;
    let target = target.dyn_into::<Element>().ok()?;
    Some(target.id())
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum StartError {
    #[error("[{n}] The window is not available", n = self.name())]
    Window,

    #[error("[{n}] The document is not available", n = self.name())]
    Document,

    #[error("[{n}] {0}", n = self.name())]
    ConfigJson(#[from] ConfigError),

    #[error("[{n}] Invalid configuration: {0}", n = self.name())]
    ConfigObject(String),

    #[error("[{n}] Failed to attach event listener: {0:?}", n = self.name())]
    Listen(JsValue),
}
