use std::fmt;
use std::str::FromStr;

/// The languages offered by the page's language selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Python,
    JavaScript,
    Cpp,
    C,
    Rust,
}

impl Language {
    pub const ALL: [Self; 6] = [
        Self::Go,
        Self::Python,
        Self::JavaScript,
        Self::Cpp,
        Self::C,
        Self::Rust,
    ];

    /// The identifier used both as the selector's value and as the editor's language mode.
    pub fn id(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Rust => "rust",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.id() == id)
            .ok_or_else(|| UnknownLanguage(id.to_owned()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::Language;
    use super::UnknownLanguage;

    #[test]
    fn parse_ids() {
        for language in Language::ALL {
            assert_eq!(Ok(language), language.id().parse());
            assert_eq!(language.id(), language.to_string());
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            Err(UnknownLanguage("haskell".into())),
            "haskell".parse::<Language>()
        );
        assert_eq!(
            Err(UnknownLanguage("Rust".into())),
            "Rust".parse::<Language>()
        );
    }

    #[test]
    fn serde_uses_ids() {
        assert_that!(serde_json::to_string(&Language::JavaScript).unwrap())
            .is_equal_to("\"javascript\"".to_owned());
        let cpp: Language = serde_json::from_str("\"cpp\"").unwrap();
        assert_eq!(Language::Cpp, cpp);
    }
}
