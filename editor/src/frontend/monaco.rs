//! Bindings to the Monaco editor, loaded through its AMD `require` loader.

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt as _;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;
use web_sys::Element;
use web_sys::js_sys::Array;

use crate::host::EditorInstance;
use crate::host::EditorLibrary;
use crate::host::EditorOptions;
use crate::host::LibraryError;

const EDITOR_MAIN: &str = "vs/editor/editor.main";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = require, catch)]
    fn require_modules(
        modules: &Array,
        on_loaded: &JsValue,
        on_error: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = require, js_name = config, catch)]
    fn require_config(config: &JsValue) -> Result<(), JsValue>;

    #[derive(Clone)]
    pub type MonacoEditor;

    #[wasm_bindgen(js_namespace = ["monaco", "editor"], js_name = create, catch)]
    fn create_editor(container: &Element, options: &JsValue) -> Result<MonacoEditor, JsValue>;

    #[wasm_bindgen(js_namespace = ["monaco", "editor"], js_name = setModelLanguage)]
    fn set_model_language(model: &JsValue, language: &str);

    #[wasm_bindgen(method, js_name = getModel)]
    fn get_model(this: &MonacoEditor) -> JsValue;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_text(this: &MonacoEditor) -> String;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_text(this: &MonacoEditor, value: &str);

    #[wasm_bindgen(method, js_name = dispose)]
    fn dispose_editor(this: &MonacoEditor);
}

pub struct Monaco {
    document: Document,
}

impl Monaco {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

#[derive(serde::Serialize)]
struct RequireConfig<'t> {
    paths: RequirePaths<'t>,
}

#[derive(serde::Serialize)]
struct RequirePaths<'t> {
    vs: &'t str,
}

impl EditorLibrary for Monaco {
    type Editor = MonacoEditor;

    fn configure(&self, asset_base: &str) {
        let config = RequireConfig {
            paths: RequirePaths { vs: asset_base },
        };
        let configured = serde_wasm_bindgen::to_value(&config)
            .map_err(JsValue::from)
            .and_then(|config| require_config(&config));
        if let Err(error) = configured {
            warn!("Failed to configure the module loader: {error:?}");
        }
    }

    fn load(&self) -> LocalBoxFuture<'static, Result<(), LibraryError>> {
        let (tx, rx) = oneshot::channel();
        let tx = Rc::new(Cell::new(Some(tx)));

        // Only one of the two callbacks ever runs.
        let on_loaded = Closure::once_into_js({
            let tx = tx.clone();
            move || {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(Ok(()));
                }
            }
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            if let Some(tx) = tx.take() {
                let _ = tx.send(Err(LibraryError::Load(format!("{error:?}"))));
            }
        });

        let modules = Array::of1(&JsValue::from_str(EDITOR_MAIN));
        if let Err(error) = require_modules(&modules, &on_loaded, &on_error) {
            let error = LibraryError::Load(format!("{error:?}"));
            return futures::future::ready(Err(error)).boxed_local();
        }
        rx.map(|loaded| {
            loaded.unwrap_or_else(|oneshot::Canceled| {
                Err(LibraryError::Load("The module loader dropped the callback".into()))
            })
        })
        .boxed_local()
    }

    fn create(
        &self,
        container_id: &str,
        options: &EditorOptions,
    ) -> Result<Self::Editor, LibraryError> {
        let container = self
            .document
            .get_element_by_id(container_id)
            .ok_or_else(|| LibraryError::Create(format!("#{container_id} not found")))?;
        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|error| LibraryError::Create(error.to_string()))?;
        create_editor(&container, &options).map_err(|error| LibraryError::Create(format!("{error:?}")))
    }
}

impl EditorInstance for MonacoEditor {
    fn set_language(&self, language: &str) {
        set_model_language(&self.get_model(), language);
    }

    fn set_value(&self, value: &str) {
        self.set_text(value);
    }

    fn value(&self) -> String {
        self.get_text()
    }

    fn dispose(&self) {
        self.dispose_editor();
    }
}
