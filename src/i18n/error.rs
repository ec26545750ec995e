use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the strict variants of the i18n API.
///
/// The lenient entry points (`LanguageSwitcher::switch_to`,
/// `LanguageSwitcher::resolve`) never return these; they log and recover.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unknown language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Invalid key path: '{0}'")]
    InvalidKeyPath(String),

    #[error("Key path '{path}' is missing from the default '{language}' dictionary")]
    MissingDefaultEntry { path: String, language: &'static str },

    #[error("Failed to parse '{language}' dictionary: {source}")]
    Load {
        language: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Default '{language}' dictionary not found at {}", path.display())]
    MissingDefaultDictionary {
        language: &'static str,
        path: PathBuf,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_message() {
        let err = I18nError::UnsupportedLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Unknown language code: 'fr'");
    }

    #[test]
    fn test_missing_default_entry_message() {
        let err = I18nError::MissingDefaultEntry {
            path: "hero.tagline".to_string(),
            language: "en",
        };
        assert!(err.to_string().contains("hero.tagline"));
        assert!(err.to_string().contains("'en'"));
    }
}
