use nameth::NamedEnumValues as _;
use nameth::nameth;

const MONACO_ASSET_BASE: &str = "https://cdn.jsdelivr.net/npm/monaco-editor@0.47.0/min/vs";

/// Where the editor lives on the page and where its runtime is loaded from.
///
/// Every field is optional when deserializing, missing fields take the
/// values of [BootstrapConfig::default].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootstrapConfig {
    /// Base location of the editor's AMD modules, mapped to the `vs` prefix.
    pub asset_base: String,

    pub container_id: String,
    pub language_select_id: String,
    pub reset_button_id: String,

    /// Region that is scrolled back to the top whenever it gets swapped.
    pub results_region_id: String,

    /// Regions that contain the editor container: swapping any of them remounts the editor.
    pub remount_regions: Vec<String>,

    /// Name of the event fired after a partial page update.
    pub partial_update_event: String,

    pub automatic_layout: bool,

    /// Carry the current text over when the editor is remounted.
    pub preserve_edits: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            asset_base: MONACO_ASSET_BASE.into(),
            container_id: "code-editor".into(),
            language_select_id: "language-select".into(),
            reset_button_id: "reset-button".into(),
            results_region_id: "results".into(),
            remount_regions: vec!["main".into()],
            partial_update_event: "htmx:afterSwap".into(),
            automatic_layout: true,
            preserve_edits: false,
        }
    }
}

impl BootstrapConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Whether swapping the given region replaces the editor container.
    pub fn remounts_on(&self, region_id: &str) -> bool {
        region_id == self.container_id
            || self.remount_regions.iter().any(|region| region == region_id)
    }
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("[{n}] {0}", n = self.name())]
    Parse(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::BootstrapConfig;
    use super::MONACO_ASSET_BASE;

    #[test]
    fn defaults() {
        let config = BootstrapConfig::default();
        assert_eq!(MONACO_ASSET_BASE, config.asset_base);
        assert_eq!("code-editor", config.container_id);
        assert_eq!("language-select", config.language_select_id);
        assert_eq!("reset-button", config.reset_button_id);
        assert_eq!("results", config.results_region_id);
        assert_eq!("htmx:afterSwap", config.partial_update_event);
        assert!(config.automatic_layout);
        assert!(!config.preserve_edits);
    }

    #[test]
    fn empty_json() {
        assert_eq!(
            BootstrapConfig::default(),
            BootstrapConfig::from_json("{}").unwrap()
        );
    }

    #[test]
    fn partial_json() {
        let config = BootstrapConfig::from_json(
            r#"{ "containerId": "editor", "remountRegions": ["page", "panel"], "preserveEdits": true }"#,
        )
        .unwrap();
        assert_eq!("editor", config.container_id);
        assert_that!(config.remount_regions.clone())
            .is_equal_to(vec!["page".to_owned(), "panel".to_owned()]);
        assert!(config.preserve_edits);
        assert_eq!("language-select", config.language_select_id);
        assert_eq!(MONACO_ASSET_BASE, config.asset_base);
    }

    #[test]
    fn invalid_json() {
        let error = BootstrapConfig::from_json(r#"{ "automaticLayout": "yes" }"#).unwrap_err();
        assert_that!(error.to_string()).starts_with("[Parse] ");
    }

    #[test]
    fn remounts_on() {
        let config = BootstrapConfig::default();
        assert!(config.remounts_on("main"));
        assert!(config.remounts_on("code-editor"));
        assert!(!config.remounts_on("results"));
        assert!(!config.remounts_on("sidebar"));
    }
}
