use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::AbortHandle;
use futures::future::Abortable;
use futures::future::Aborted;
use nameth::NamedEnumValues as _;
use nameth::nameth;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::config::BootstrapConfig;
use super::host::EditorInstance;
use super::host::EditorLibrary;
use super::host::EditorOptions;
use super::host::LibraryError;
use super::host::Page;
use super::snippets::default_snippet;


/// Language mode used when the page has no language selector.
const PLAIN_TEXT: &str = "plaintext";

/// Mounts the code editor into its container and keeps it in sync with the
/// language selector.
///
/// The bootstrapper owns a single editor slot: mounting again replaces (and
/// disposes) the previous editor along with the listeners that were attached
/// for it, and cancels any load that has not completed yet.
pub struct Bootstrapper<P: Page, L: EditorLibrary> {
    inner: Rc<BootstrapperInner<P, L>>,
}

struct BootstrapperInner<P: Page, L: EditorLibrary> {
    config: BootstrapConfig,
    page: P,
    library: L,
    configured: Cell<bool>,
    slot: RefCell<EditorSlot<P, L>>,
}

struct EditorSlot<P: Page, L: EditorLibrary> {
    pending: Option<AbortHandle>,
    mounted: Option<MountedEditor<P, L>>,
}

struct MountedEditor<P: Page, L: EditorLibrary> {
    editor: L::Editor,
    _listeners: Vec<P::Listener>,
}

/// Handle on the editor runtime load started by [Bootstrapper::mount].
#[derive(Clone, Debug)]
pub struct PendingMount(AbortHandle);

impl<P: Page + 'static, L: EditorLibrary + 'static> Bootstrapper<P, L> {
    pub fn new(config: BootstrapConfig, page: P, library: L) -> Self {
        Self {
            inner: Rc::new(BootstrapperInner {
                config,
                page,
                library,
                configured: Cell::new(false),
                slot: RefCell::new(EditorSlot {
                    pending: None,
                    mounted: None,
                }),
            }),
        }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.inner.config
    }

    /// Tells the editor library where to load its runtime from.
    ///
    /// Only the first call reaches the library. [Self::mount] calls it if needed.
    pub fn configure(&self) {
        let inner = &*self.inner;
        if inner.configured.replace(true) {
            return;
        }
        debug!(asset_base = %inner.config.asset_base, "Configure the editor library");
        inner.library.configure(&inner.config.asset_base);
    }

    /// Creates the editor once the runtime is loaded.
    ///
    /// Does nothing and returns `None` when the page has no editor container.
    pub fn mount(&self, initial_content: Option<String>) -> Option<PendingMount> {
        let inner = &*self.inner;
        let container_id = &inner.config.container_id;
        if !inner.page.has_element(container_id) {
            debug!(%container_id, "No editor on this page");
            return None;
        }

        info!("Initiating the editor");
        self.configure();
        let initial_content = initial_content.or_else(|| self.preserved_edits());

        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        let previous = inner
            .slot
            .borrow_mut()
            .pending
            .replace(abort_handle.clone());
        if let Some(previous) = previous {
            debug!("Cancel the previous editor load");
            previous.abort();
        }

        let this = Rc::downgrade(&self.inner);
        let load = Abortable::new(inner.library.load(), abort_registration).map(move |loaded| {
            let Some(inner) = this.upgrade() else {
                return;
            };
            Self { inner }.on_loaded(loaded, initial_content);
        });
        inner.page.spawn(load.boxed_local());
        Some(PendingMount(abort_handle))
    }

    /// Switches the editor to the selected language and shows that language's snippet.
    pub fn reset_for_language(&self) -> Result<(), BootstrapError> {
        let language = self.selected_language();
        let slot = self.inner.slot.borrow();
        let mounted = slot.mounted.as_ref().ok_or(BootstrapError::NoEditor)?;
        info!(%language, "Reset the editor");
        mounted.editor.set_language(&language);
        mounted.editor.set_value(default_snippet(&language));
        Ok(())
    }

    /// Cancels any pending load, disposes the editor and detaches its listeners.
    pub fn unmount(&self) {
        let (pending, mounted) = {
            let mut slot = self.inner.slot.borrow_mut();
            (slot.pending.take(), slot.mounted.take())
        };
        if let Some(pending) = pending {
            pending.abort();
        }
        if mounted.is_some() {
            info!("Unmount the editor");
        }
        drop(mounted);
    }

    pub fn on_ready(&self) {
        self.mount(None);
    }

    /// Reacts to a region of the page being replaced.
    pub fn on_partial_update(&self, region_id: &str) {
        let inner = &*self.inner;
        let config = &inner.config;
        if config.remounts_on(region_id) {
            info!(%region_id, "Resetting the editor");
            if self.mount(None).is_none() {
                self.unmount();
            }
        }
        if region_id == config.results_region_id && !inner.page.scroll_to_top(region_id) {
            debug!(%region_id, "The results region is gone");
        }
    }

    fn on_loaded(
        &self,
        loaded: Result<Result<(), LibraryError>, Aborted>,
        initial_content: Option<String>,
    ) {
        let Ok(loaded) = loaded else {
            debug!("The editor load was cancelled");
            return;
        };
        self.inner.slot.borrow_mut().pending = None;
        let mounted = loaded
            .map_err(BootstrapError::from)
            .and_then(|()| self.create_editor(initial_content));
        if let Err(error) = mounted {
            warn!("Failed to mount the editor: {error}");
        }
    }

    fn create_editor(&self, initial_content: Option<String>) -> Result<(), BootstrapError> {
        let inner = &*self.inner;
        let config = &inner.config;
        if !inner.page.has_element(&config.container_id) {
            debug!("The editor container is gone");
            return Ok(());
        }

        let language = self.selected_language();
        let options = EditorOptions {
            value: initial_content.unwrap_or_else(|| default_snippet(&language).to_owned()),
            language,
            automatic_layout: config.automatic_layout,
        };
        let editor = inner.library.create(&config.container_id, &options)?;
        let listeners = self.attach_listeners();
        let previous = inner.slot.borrow_mut().mounted.replace(MountedEditor {
            editor,
            _listeners: listeners,
        });
        // Disposed after the slot is released.
        drop(previous);
        Ok(())
    }

    fn attach_listeners(&self) -> Vec<P::Listener> {
        let inner = &*self.inner;
        let this = Rc::downgrade(&self.inner);
        let reset: Rc<dyn Fn()> = Rc::new(move || {
            let Some(inner) = this.upgrade() else {
                return;
            };
            if let Err(error) = (Self { inner }).reset_for_language() {
                warn!("{error}");
            }
        });
        [
            (&inner.config.reset_button_id, "click"),
            (&inner.config.language_select_id, "change"),
        ]
        .into_iter()
        .filter_map(|(id, event_type)| {
            let listener = inner.page.listen(id, event_type, reset.clone());
            if listener.is_none() {
                debug!(%id, event_type, "Nothing to listen to");
            }
            listener
        })
        .collect()
    }

    fn selected_language(&self) -> String {
        let inner = &*self.inner;
        inner
            .page
            .value_of(&inner.config.language_select_id)
            .unwrap_or_else(|| PLAIN_TEXT.to_owned())
    }

    fn preserved_edits(&self) -> Option<String> {
        if !self.inner.config.preserve_edits {
            return None;
        }
        let slot = self.inner.slot.borrow();
        slot.mounted.as_ref().map(|mounted| mounted.editor.value())
    }
}

impl<P: Page, L: EditorLibrary> Clone for Bootstrapper<P, L> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: Page, L: EditorLibrary> Drop for MountedEditor<P, L> {
    fn drop(&mut self) {
        self.editor.dispose();
    }
}

impl PendingMount {
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error("[{n}] No editor is mounted", n = self.name())]
    NoEditor,

    #[error("[{n}] {0}", n = self.name())]
    Library(#[from] LibraryError),
}
