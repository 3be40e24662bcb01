mod bootstrapper;
mod config;
mod frontend;
mod host;
mod language;
mod snippets;

pub use self::bootstrapper::BootstrapError;
pub use self::bootstrapper::Bootstrapper;
pub use self::bootstrapper::PendingMount;
pub use self::config::BootstrapConfig;
pub use self::config::ConfigError;
pub use self::host::EditorInstance;
pub use self::host::EditorLibrary;
pub use self::host::EditorOptions;
pub use self::host::LibraryError;
pub use self::host::Page;
pub use self::language::Language;
pub use self::language::UnknownLanguage;
pub use self::snippets::default_snippet;

#[cfg(feature = "client")]
pub use self::frontend::start;
