pub mod config;
pub mod i18n;
pub mod presentation;
pub mod switcher;

pub use config::SiteConfig;
pub use i18n::{ContentDictionary, ContentNode, Direction, I18nError, Language};
pub use presentation::{DocumentEnvironment, FontTokens, PresentationContext, RecordingDocument};
pub use switcher::{LanguageSwitcher, SwitchOutcome};
