//! Internationalization (i18n) module for the site's two languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and the default
//! - `language`: `Language` and `Direction` value types
//! - `content`: Per-language content dictionaries and key-path lookup with fallback
//! - `keys`: Key paths the views resolve
//! - `validator`: Translation dictionary validation
//! - `metrics`: Resolution observability
//!
//! # Example
//!
//! ```rust
//! use aisleep_site::i18n::{ContentDictionary, KeyPath, Language};
//!
//! let dictionary = ContentDictionary::embedded().unwrap();
//! let path = KeyPath::parse("hero.headline").unwrap();
//! let (node, _) = dictionary.resolve(&Language::ARABIC, &path).unwrap();
//! assert_eq!(node.text(), "أعد تعريف مستقبل النوم");
//! ```

mod content;
mod error;
pub mod keys;
mod language;
mod metrics;
mod registry;
mod validator;

pub use content::{ContentDictionary, ContentNode, KeyPath, ResolvedFrom};
pub use error::I18nError;
pub use language::{Direction, Language};
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::LanguageRegistry;
pub use validator::{DictionaryValidator, ValidationReport};
