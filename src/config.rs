use crate::i18n::LanguageRegistry;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_RTL_FONT: &str = "var(--font-arabic)";
pub const DEFAULT_LTR_FONT: &str = "Inter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    // Language
    pub initial_language: String,

    // Content
    pub locales_dir: Option<PathBuf>,

    // Fonts
    pub rtl_font: String,
    pub ltr_font: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            initial_language: LanguageRegistry::get().default_language().code().to_string(),
            locales_dir: None,
            rtl_font: DEFAULT_RTL_FONT.to_string(),
            ltr_font: DEFAULT_LTR_FONT.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let initial_language = match std::env::var("SITE_DEFAULT_LANGUAGE") {
            Ok(code) if LanguageRegistry::get().is_supported(code.trim()) => code.trim().to_string(),
            Ok(code) => {
                warn!(
                    "SITE_DEFAULT_LANGUAGE '{}' is not supported, using '{}'",
                    code, defaults.initial_language
                );
                defaults.initial_language
            }
            Err(_) => defaults.initial_language,
        };

        let locales_dir = match std::env::var("SITE_LOCALES_DIR") {
            Ok(dir) if !dir.trim().is_empty() => {
                let dir = PathBuf::from(dir.trim());
                if !dir.is_dir() {
                    anyhow::bail!("SITE_LOCALES_DIR {} is not a directory", dir.display());
                }
                Some(dir)
            }
            _ => None,
        };

        Ok(Self {
            initial_language,
            locales_dir,

            // Fonts
            rtl_font: std::env::var("SITE_RTL_FONT").unwrap_or(defaults.rtl_font),
            ltr_font: std::env::var("SITE_LTR_FONT").unwrap_or(defaults.ltr_font),
        })
    }

    /// Load the content dictionary this config points at.
    pub fn load_dictionary(&self) -> Result<crate::i18n::ContentDictionary> {
        match &self.locales_dir {
            Some(dir) => crate::i18n::ContentDictionary::load_dir(dir)
                .with_context(|| format!("Failed to load dictionaries from {}", dir.display())),
            None => crate::i18n::ContentDictionary::embedded()
                .context("Failed to parse embedded dictionaries"),
        }
    }
}
