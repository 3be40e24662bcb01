//! Starter code shown in the editor for each language.

use super::language::Language;

const GO: &str = r#"package main

func main() {
    // your Go solution here
}
"#;

const PYTHON: &str = r#"def main():
    # your Python solution here

if __name__ == "__main__":
    main()
"#;

const JAVASCRIPT: &str = r#"function main() {
    // your JS solution here
}

main();
"#;

const CPP: &str = r#"int main() {
  // your C++ solution here
  return 0;
}"#;

const C: &str = r#"int main() {
  // your C solution here
  return 0;
}"#;

const RUST: &str = r#"fn main() {
    // your Rust solution here
}"#;

impl Language {
    pub fn snippet(self) -> &'static str {
        match self {
            Self::Go => GO,
            Self::Python => PYTHON,
            Self::JavaScript => JAVASCRIPT,
            Self::Cpp => CPP,
            Self::C => C,
            Self::Rust => RUST,
        }
    }
}

/// Returns the starter code for a language identifier, or an empty string if
/// the identifier is not one of the known languages.
pub fn default_snippet(language_id: &str) -> &'static str {
    language_id
        .parse::<Language>()
        .map(Language::snippet)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::Language;
    use super::default_snippet;

    #[test]
    fn every_language_has_a_snippet() {
        for language in Language::ALL {
            assert!(!default_snippet(language.id()).is_empty());
            assert_eq!(language.snippet(), default_snippet(language.id()));
        }
    }

    #[test]
    fn snippets_mention_their_language() {
        assert_that!(default_snippet("go")).starts_with("package main");
        assert_that!(default_snippet("cpp")).contains("C++");
        assert_that!(default_snippet("c")).contains("your C solution");
        assert_that!(default_snippet("rust")).starts_with("fn main()");
        assert_that!(default_snippet("python")).contains("__main__");
        assert_that!(default_snippet("javascript")).ends_with("main();\n");
    }

    #[test]
    fn unknown_language_is_empty() {
        assert_eq!("", default_snippet("cobol"));
        assert_eq!("", default_snippet(""));
    }
}
