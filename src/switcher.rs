//! Active-language state, switching and content resolution.
//!
//! `LanguageSwitcher` holds exactly one active language. Every successful
//! switch (and construction) publishes a fresh `PresentationContext` to the
//! document environment before returning.

use crate::config::SiteConfig;
use crate::i18n::{
    keys, ContentDictionary, ContentNode, I18nError, KeyPath, Language, LanguageRegistry,
    MetricsReport, ResolutionMetrics, ResolvedFrom,
};
use crate::presentation::{DocumentEnvironment, FontTokens, PresentationContext, RecordingDocument};
use anyhow::Result;
use tracing::{debug, error, info, warn};

/// Result of a switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The active language changed and the document was updated
    Switched,
    /// The requested language was already active; nothing was published
    AlreadyActive,
    /// The code is not supported; state is unchanged
    Ignored,
}

pub struct LanguageSwitcher<D: DocumentEnvironment = RecordingDocument> {
    active: Language,
    dictionary: ContentDictionary,
    fonts: FontTokens,
    presentation: PresentationContext,
    document: D,
    metrics: ResolutionMetrics,
}

impl<D: DocumentEnvironment> LanguageSwitcher<D> {
    /// Create a switcher with the registry default active.
    pub fn new(dictionary: ContentDictionary, fonts: FontTokens, document: D) -> Self {
        Self::with_language(Language::default_language(), dictionary, fonts, document)
    }

    /// Create a switcher with `initial` active and publish its presentation once.
    pub fn with_language(
        initial: Language,
        dictionary: ContentDictionary,
        fonts: FontTokens,
        mut document: D,
    ) -> Self {
        let presentation = build_presentation(&initial, &dictionary, &fonts);
        document.apply(&presentation);
        debug!("Initial language {} published", initial);

        Self {
            active: initial,
            dictionary,
            fonts,
            presentation,
            document,
            metrics: ResolutionMetrics::new(),
        }
    }

    /// Build a switcher from configuration, loading dictionaries as configured.
    pub fn from_config(config: &SiteConfig, document: D) -> Result<Self> {
        let dictionary = config.load_dictionary()?;
        let initial = Language::from_code(&config.initial_language)
            .unwrap_or_else(|_| Language::default_language());
        Ok(Self::with_language(
            initial,
            dictionary,
            FontTokens::from(config),
            document,
        ))
    }

    /// The active language.
    pub fn current(&self) -> Language {
        self.active
    }

    /// Supported languages in display order.
    pub fn list_supported(&self) -> &'static [Language] {
        LanguageRegistry::get().list()
    }

    /// Switch the active language.
    ///
    /// Unsupported codes are ignored: the state is left as it was and a
    /// warning is logged. This never fails.
    pub fn switch_to(&mut self, code: &str) -> SwitchOutcome {
        match Language::from_code(code) {
            Ok(language) => self.activate(language),
            Err(_) => {
                warn!("Ignoring switch to unsupported language '{}'", code);
                self.metrics.record_ignored_switch();
                SwitchOutcome::Ignored
            }
        }
    }

    /// Like [`switch_to`](Self::switch_to) but reports unsupported codes.
    pub fn try_switch_to(&mut self, code: &str) -> Result<SwitchOutcome, I18nError> {
        let language = Language::from_code(code)?;
        Ok(self.activate(language))
    }

    fn activate(&mut self, language: Language) -> SwitchOutcome {
        if language == self.active {
            return SwitchOutcome::AlreadyActive;
        }

        let previous = self.active;
        self.active = language;
        self.presentation = build_presentation(&self.active, &self.dictionary, &self.fonts);
        self.document.apply(&self.presentation);
        self.metrics.record_switch();

        info!(
            "Language switched from {} to {} (dir={})",
            previous.code(),
            language.code(),
            language.direction()
        );
        SwitchOutcome::Switched
    }

    /// Resolve content for the active language, falling back to the default.
    ///
    /// A path missing from the default dictionary too is a content bug: it is
    /// logged at error level and an empty node is returned.
    pub fn resolve(&self, key_path: &str) -> ContentNode<'_> {
        match self.try_resolve(key_path) {
            Ok(node) => node,
            Err(err) => {
                error!("{}", err);
                ContentNode::missing()
            }
        }
    }

    /// Resolve content, reporting paths missing from every dictionary.
    pub fn try_resolve(&self, key_path: &str) -> Result<ContentNode<'_>, I18nError> {
        let path = KeyPath::parse(key_path).map_err(|err| {
            self.metrics.record_miss();
            err
        })?;

        match self.dictionary.resolve(&self.active, &path) {
            Some((node, ResolvedFrom::Active)) => {
                self.metrics.record_direct_hit();
                Ok(node)
            }
            Some((node, ResolvedFrom::Fallback)) => {
                self.metrics.record_fallback_hit();
                Ok(node)
            }
            None => {
                self.metrics.record_miss();
                Err(I18nError::MissingDefaultEntry {
                    path: path.to_string(),
                    language: LanguageRegistry::get().default_language().code(),
                })
            }
        }
    }

    /// Text at `key_path`, or `""` when the node is missing or not text.
    pub fn text(&self, key_path: &str) -> &str {
        self.resolve(key_path).text()
    }

    pub fn presentation(&self) -> &PresentationContext {
        &self.presentation
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn dictionary(&self) -> &ContentDictionary {
        &self.dictionary
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}

fn build_presentation(
    language: &Language,
    dictionary: &ContentDictionary,
    fonts: &FontTokens,
) -> PresentationContext {
    let text = |key: &str| {
        KeyPath::parse(key)
            .ok()
            .and_then(|path| dictionary.resolve(language, &path))
            .map(|(node, _)| node.text().to_string())
            .unwrap_or_default()
    };

    PresentationContext::new(
        language,
        fonts,
        &text(keys::META_TITLE),
        &text(keys::META_DESCRIPTION),
    )
}
