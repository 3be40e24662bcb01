//! The two seams of the bootstrapper: the page it lives on and the editor library it drives.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use nameth::NamedEnumValues as _;
use nameth::nameth;

/// DOM access, event listeners and task spawning on the page's UI thread.
pub trait Page {
    /// Keeps an event listener attached until dropped.
    type Listener: 'static;

    fn has_element(&self, id: &str) -> bool;

    /// The current value of a form control.
    fn value_of(&self, id: &str) -> Option<String>;

    /// Returns `None` if there is no element with the given id.
    fn listen(
        &self,
        id: &str,
        event_type: &'static str,
        callback: Rc<dyn Fn()>,
    ) -> Option<Self::Listener>;

    /// Returns false if there is no element with the given id.
    fn scroll_to_top(&self, id: &str) -> bool;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// The external code editor library.
pub trait EditorLibrary {
    type Editor: EditorInstance + 'static;

    /// Declares where the library loads its runtime modules from.
    fn configure(&self, asset_base: &str);

    /// Loads the editor runtime. Resolves once editors can be created.
    fn load(&self) -> LocalBoxFuture<'static, Result<(), LibraryError>>;

    fn create(
        &self,
        container_id: &str,
        options: &EditorOptions,
    ) -> Result<Self::Editor, LibraryError>;
}

pub trait EditorInstance {
    /// Sets the language mode of the editor's document.
    fn set_language(&self, language: &str);

    /// Replaces the displayed text.
    fn set_value(&self, value: &str);

    fn value(&self) -> String;

    fn dispose(&self);
}

/// Options given to the editor factory.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub value: String,
    pub language: String,
    pub automatic_layout: bool,
}

#[nameth]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("[{n}] Failed to load the editor runtime: {0}", n = self.name())]
    Load(String),

    #[error("[{n}] Failed to create the editor: {0}", n = self.name())]
    Create(String),
}
