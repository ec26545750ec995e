//! Per-language content dictionaries and key-path lookup.
//!
//! Dictionaries are nested JSON trees keyed by language code. A key path
//! such as `news.articles.1.title` walks object keys and, for numeric
//! segments, array indices.

use crate::i18n::{I18nError, Language, LanguageRegistry};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

const EMBEDDED_EN: &str = include_str!("locales/en.json");
const EMBEDDED_AR: &str = include_str!("locales/ar.json");

static MISSING: Value = Value::Null;

/// A parsed, validated key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    /// All-digit segment: an array index, or an object key spelled exactly as written
    Index(usize, String),
}

impl KeyPath {
    /// Parse a dot-separated key path. Empty paths and empty segments are rejected.
    pub fn parse(raw: &str) -> Result<Self, I18nError> {
        if raw.is_empty() {
            return Err(I18nError::InvalidKeyPath(raw.to_string()));
        }

        let segments = raw
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    Err(I18nError::InvalidKeyPath(raw.to_string()))
                } else if let Some(index) = part
                    .bytes()
                    .all(|b| b.is_ascii_digit())
                    .then(|| part.parse::<usize>().ok())
                    .flatten()
                {
                    Ok(Segment::Index(index, part.to_string()))
                } else {
                    Ok(Segment::Key(part.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Walk `root` along this path. `null` is treated as absent.
    fn walk<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut node = root;
        for segment in &self.segments {
            node = match (segment, node) {
                (Segment::Key(key), Value::Object(map)) => map.get(key)?,
                (Segment::Index(i, _), Value::Array(items)) => items.get(*i)?,
                (Segment::Index(_, key), Value::Object(map)) => map.get(key)?,
                _ => return None,
            };
        }
        (!node.is_null()).then_some(node)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Borrowed view onto a resolved piece of content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentNode<'a> {
    value: &'a Value,
}

impl<'a> ContentNode<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The node returned when a path is missing everywhere.
    pub fn missing() -> ContentNode<'static> {
        ContentNode { value: &MISSING }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_null()
    }

    /// The string value, if this node is a text leaf.
    pub fn as_text(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    /// The string value, or `""` for anything that is not a text leaf.
    pub fn text(&self) -> &'a str {
        self.as_text().unwrap_or("")
    }

    /// Child at `segment` (object key or array index), missing if absent.
    pub fn get(&self, segment: &str) -> ContentNode<'a> {
        let child = match self.value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        child.map(ContentNode::new).unwrap_or(ContentNode {
            value: &MISSING,
        })
    }

    /// Children of an array node. Empty for any other kind.
    pub fn items(&self) -> impl Iterator<Item = ContentNode<'a>> + 'a {
        self.value
            .as_array()
            .map(|items| items.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(ContentNode::new)
    }

    pub fn as_value(&self) -> &'a Value {
        self.value
    }
}

/// Where a resolved node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    Active,
    Fallback,
}

/// Read-only mapping from language code to its content tree.
#[derive(Debug, Clone)]
pub struct ContentDictionary {
    entries: HashMap<&'static str, Value>,
}

impl ContentDictionary {
    /// Dictionaries compiled into the binary.
    pub fn embedded() -> Result<Self, I18nError> {
        let mut entries = HashMap::new();
        for (language, source) in [(Language::ENGLISH, EMBEDDED_EN), (Language::ARABIC, EMBEDDED_AR)] {
            let tree = serde_json::from_str(source).map_err(|source| I18nError::Load {
                language: language.code(),
                source,
            })?;
            entries.insert(language.code(), tree);
        }
        Ok(Self { entries })
    }

    /// Load `<code>.json` for every supported language from `dir`.
    ///
    /// A missing translation file is skipped, since lookups fall back to the
    /// default language. A missing default file is an error.
    pub fn load_dir(dir: &Path) -> Result<Self, I18nError> {
        let registry = LanguageRegistry::get();
        let default_code = registry.default_language().code();
        let mut entries = HashMap::new();

        for language in registry.list() {
            let path = dir.join(format!("{}.json", language.code()));
            if !path.exists() {
                if language.code() == default_code {
                    return Err(I18nError::MissingDefaultDictionary {
                        language: default_code,
                        path,
                    });
                }
                warn!(
                    "No dictionary for {} at {}, lookups will fall back to '{}'",
                    language,
                    path.display(),
                    default_code
                );
                continue;
            }

            let contents = std::fs::read_to_string(&path).map_err(|source| I18nError::Io {
                path: path.clone(),
                source,
            })?;
            let tree = serde_json::from_str(&contents).map_err(|source| I18nError::Load {
                language: language.code(),
                source,
            })?;
            entries.insert(language.code(), tree);
        }

        info!(
            "Loaded {} content dictionaries from {}",
            entries.len(),
            dir.display()
        );
        Ok(Self { entries })
    }

    /// Build a dictionary from already-parsed trees. Unsupported codes are dropped.
    pub fn from_trees<I>(trees: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        let registry = LanguageRegistry::get();
        let entries = trees
            .into_iter()
            .filter(|(code, _)| {
                let supported = registry.is_supported(code);
                if !supported {
                    warn!("Ignoring dictionary for unsupported language '{}'", code);
                }
                supported
            })
            .collect();
        Self { entries }
    }

    /// The whole tree for one language.
    pub fn tree(&self, code: &str) -> Option<&Value> {
        self.entries.get(code)
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Raw lookup in a single language, without fallback.
    pub fn lookup(&self, code: &str, path: &KeyPath) -> Option<&Value> {
        self.entries.get(code).and_then(|tree| path.walk(tree))
    }

    /// Look up `path` for `active`, falling back to the registry default.
    ///
    /// Active content whose kind (text, list, object, ...) differs from the
    /// default's at the same path is treated as malformed and skipped.
    pub fn resolve(&self, active: &Language, path: &KeyPath) -> Option<(ContentNode<'_>, ResolvedFrom)> {
        let default = LanguageRegistry::get().default_language();
        let active_value = self.lookup(active.code(), path);
        if default.code() == active.code() {
            return active_value.map(|value| (ContentNode::new(value), ResolvedFrom::Active));
        }

        let default_value = self.lookup(default.code(), path);
        match (active_value, default_value) {
            (Some(value), Some(expected)) if same_kind(value, expected) => {
                Some((ContentNode::new(value), ResolvedFrom::Active))
            }
            (Some(value), None) => Some((ContentNode::new(value), ResolvedFrom::Active)),
            (found, Some(expected)) => {
                if found.is_some() {
                    warn!(
                        "'{}' for {} does not match the '{}' content shape, using '{}' content",
                        path,
                        active.code(),
                        default.code(),
                        default.code()
                    );
                } else {
                    debug!(
                        "'{}' missing for {}, using '{}' content",
                        path,
                        active.code(),
                        default.code()
                    );
                }
                Some((ContentNode::new(expected), ResolvedFrom::Fallback))
            }
            (None, None) => None,
        }
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
