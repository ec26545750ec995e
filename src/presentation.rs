//! Document-level presentation state derived from the active language.
//!
//! The switcher is the only writer. A `DocumentEnvironment` receives every
//! published context and applies it to whatever hosts the views.

use crate::i18n::{Direction, Language};
use serde::Serialize;

/// CSS custom property that carries the primary font family.
pub const FONT_VARIABLE: &str = "--font-primary";

/// Font family tokens selected by text direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontTokens {
    pub rtl: String,
    pub ltr: String,
}

impl FontTokens {
    pub fn new(rtl: impl Into<String>, ltr: impl Into<String>) -> Self {
        Self {
            rtl: rtl.into(),
            ltr: ltr.into(),
        }
    }

    pub fn for_direction(&self, direction: Direction) -> &str {
        match direction {
            Direction::Rtl => &self.rtl,
            Direction::Ltr => &self.ltr,
        }
    }
}

impl From<&crate::config::SiteConfig> for FontTokens {
    fn from(config: &crate::config::SiteConfig) -> Self {
        Self::new(config.rtl_font.clone(), config.ltr_font.clone())
    }
}

/// Snapshot of every document attribute that depends on the active language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationContext {
    pub direction: Direction,
    pub lang: &'static str,
    pub font_family: String,
    pub title: String,
    pub description: String,
}

impl PresentationContext {
    pub fn new(language: &Language, fonts: &FontTokens, title: &str, description: &str) -> Self {
        Self {
            direction: language.direction(),
            lang: language.code(),
            font_family: fonts.for_direction(language.direction()).to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Attributes for the root element.
    pub fn html_attributes(&self) -> [(&'static str, &str); 2] {
        [("dir", self.direction.as_str()), ("lang", self.lang)]
    }

    pub fn css_variables(&self) -> [(&'static str, &str); 1] {
        [(FONT_VARIABLE, self.font_family.as_str())]
    }

    /// `(attribute, key, content)` triples for the head's meta tags.
    pub fn meta_tags(&self) -> [(&'static str, &'static str, &str); 3] {
        [
            ("name", "description", self.description.as_str()),
            ("property", "og:title", self.title.as_str()),
            ("property", "og:description", self.description.as_str()),
        ]
    }
}

/// Receiver of published presentation contexts.
pub trait DocumentEnvironment {
    fn apply(&mut self, context: &PresentationContext);
}

/// In-memory document that records every context it is given.
#[derive(Debug, Default, Clone)]
pub struct RecordingDocument {
    current: Option<PresentationContext>,
    history: Vec<PresentationContext>,
}

impl RecordingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PresentationContext> {
        self.current.as_ref()
    }

    pub fn dir(&self) -> Option<Direction> {
        self.current.as_ref().map(|ctx| ctx.direction)
    }

    pub fn lang(&self) -> Option<&'static str> {
        self.current.as_ref().map(|ctx| ctx.lang)
    }

    /// Every context applied so far, oldest first.
    pub fn history(&self) -> &[PresentationContext] {
        &self.history
    }
}

impl DocumentEnvironment for RecordingDocument {
    fn apply(&mut self, context: &PresentationContext) {
        self.current = Some(context.clone());
        self.history.push(context.clone());
    }
}

impl<D: DocumentEnvironment + ?Sized> DocumentEnvironment for Box<D> {
    fn apply(&mut self, context: &PresentationContext) {
        (**self).apply(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts() -> FontTokens {
        FontTokens::new("var(--font-arabic)", "Inter")
    }

    #[test]
    fn test_font_selected_by_direction() {
        let fonts = fonts();
        assert_eq!(fonts.for_direction(Direction::Rtl), "var(--font-arabic)");
        assert_eq!(fonts.for_direction(Direction::Ltr), "Inter");
    }

    #[test]
    fn test_context_for_arabic() {
        let ctx = PresentationContext::new(&Language::ARABIC, &fonts(), "عنوان", "وصف");
        assert_eq!(ctx.direction, Direction::Rtl);
        assert_eq!(ctx.lang, "ar");
        assert_eq!(ctx.font_family, "var(--font-arabic)");
        assert_eq!(ctx.html_attributes(), [("dir", "rtl"), ("lang", "ar")]);
        assert_eq!(ctx.css_variables(), [("--font-primary", "var(--font-arabic)")]);
    }

    #[test]
    fn test_meta_tags_share_description() {
        let ctx = PresentationContext::new(&Language::ENGLISH, &fonts(), "Title", "Desc");
        let tags = ctx.meta_tags();
        assert_eq!(tags[0], ("name", "description", "Desc"));
        assert_eq!(tags[1], ("property", "og:title", "Title"));
        assert_eq!(tags[2], ("property", "og:description", "Desc"));
    }

    #[test]
    fn test_recording_document_tracks_history() {
        let mut document = RecordingDocument::new();
        assert!(document.current().is_none());

        document.apply(&PresentationContext::new(&Language::ENGLISH, &fonts(), "", ""));
        document.apply(&PresentationContext::new(&Language::ARABIC, &fonts(), "", ""));

        assert_eq!(document.history().len(), 2);
        assert_eq!(document.dir(), Some(Direction::Rtl));
        assert_eq!(document.lang(), Some("ar"));
    }

    #[test]
    fn test_boxed_environment_forwards() {
        let mut document: Box<RecordingDocument> = Box::default();
        DocumentEnvironment::apply(
            &mut document,
            &PresentationContext::new(&Language::ENGLISH, &fonts(), "", ""),
        );
        assert_eq!(document.lang(), Some("en"));
    }
}
