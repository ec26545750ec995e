//! Language type: validated language representation with a fixed direction.
//!
//! A `Language` can only be obtained from the registry (or the constants
//! below), so its direction is always the one declared for its code.

use crate::i18n::{I18nError, LanguageRegistry};
use serde::Serialize;
use std::fmt;

/// Text layout orientation attached to a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The value used for the document `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported language.
///
/// Equality is value equality over all three fields, which is what the
/// switch round-trip guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ar")
    code: &'static str,

    /// Display label in the language itself (e.g., "English", "العربية")
    name: &'static str,

    direction: Direction,
}

impl Language {
    /// English, the default and fallback language.
    pub const ENGLISH: Language = Language::new("en", "English", Direction::Ltr);

    /// Arabic, laid out right-to-left.
    pub const ARABIC: Language = Language::new("ar", "العربية", Direction::Rtl);

    pub(crate) const fn new(code: &'static str, name: &'static str, direction: Direction) -> Self {
        Self {
            code,
            name,
            direction,
        }
    }

    /// Look up a supported language by code.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err(I18nError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .copied()
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }

    /// The registry's default language.
    pub fn default_language() -> Language {
        *LanguageRegistry::get().default_language()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    /// Check if this is the language every lookup falls back to.
    pub fn is_default(&self) -> bool {
        LanguageRegistry::get().default_language().code == self.code
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
