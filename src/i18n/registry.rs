//! Language registry: single source of truth for all supported languages.
//!
//! The registry is initialized once on first access and is immutable
//! thereafter. Its order is display order for language menus.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<Language>,
    default_index: usize,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
            default_index: 0,
        })
    }

    /// Get a language by its code.
    ///
    /// # Returns
    /// * `Some(&Language)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.code() == code)
    }

    /// All supported languages in declaration order.
    pub fn list(&self) -> &[Language] {
        &self.languages
    }

    /// The language whose dictionary backs every fallback lookup.
    pub fn default_language(&self) -> &Language {
        &self.languages[self.default_index]
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The supported set. The first entry is the default.
fn default_languages() -> Vec<Language> {
    vec![Language::ENGLISH, Language::ARABIC]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_list_preserves_declaration_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list()
            .iter()
            .map(Language::code)
            .collect();
        assert_eq!(codes, vec!["en", "ar"]);
    }

    #[test]
    fn test_default_is_first_entry() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.default_language(), &registry.list()[0]);
        assert_eq!(registry.default_language().code(), "en");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("ar"));
        assert!(!registry.is_supported("es"));
    }

    #[test]
    fn test_codes_are_unique() {
        let list = LanguageRegistry::get().list();
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
