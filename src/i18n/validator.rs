//! Translation dictionary validation.
//!
//! Compares a translated dictionary against the default one. Structural
//! mismatches are errors; gaps that fallback resolution covers are warnings.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Structural issues that fallback cannot hide
    pub errors: Vec<String>,

    /// Gaps and drift covered by fallback or worth a look
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated dictionaries.
pub struct DictionaryValidator;

static BRAND_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate `candidate` against the `default` dictionary.
    pub fn validate(default: &Value, candidate: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::compare(default, candidate, "", &mut report);
        report
    }

    fn compare(default: &Value, candidate: &Value, path: &str, report: &mut ValidationReport) {
        match (default, candidate) {
            (Value::Object(expected), Value::Object(actual)) => {
                for (key, expected_child) in expected {
                    let child_path = join(path, key);
                    match actual.get(key) {
                        Some(actual_child) if !actual_child.is_null() => {
                            Self::compare(expected_child, actual_child, &child_path, report)
                        }
                        _ => report.warnings.push(format!(
                            "Missing key '{}' (falls back to default)",
                            child_path
                        )),
                    }
                }
                for key in actual.keys().filter(|key| !expected.contains_key(*key)) {
                    report.warnings.push(format!(
                        "Extra key '{}' not present in default dictionary",
                        join(path, key)
                    ));
                }
            }
            (Value::Array(expected), Value::Array(actual)) => {
                if expected.len() != actual.len() {
                    report.warnings.push(format!(
                        "Length mismatch at '{}': default has {}, translation has {}",
                        display_path(path),
                        expected.len(),
                        actual.len()
                    ));
                }
                for (i, (expected_child, actual_child)) in expected.iter().zip(actual).enumerate() {
                    Self::compare(expected_child, actual_child, &join(path, &i.to_string()), report);
                }
            }
            (Value::String(expected), Value::String(actual)) => {
                Self::compare_text(expected, actual, path, report)
            }
            (expected, actual) => report.errors.push(format!(
                "Kind mismatch at '{}': default is {}, translation is {}",
                display_path(path),
                kind(expected),
                kind(actual)
            )),
        }
    }

    fn compare_text(expected: &str, actual: &str, path: &str, report: &mut ValidationReport) {
        if actual.trim().is_empty() && !expected.trim().is_empty() {
            report
                .warnings
                .push(format!("Empty translation at '{}'", display_path(path)));
            return;
        }

        let expected_brands = Self::extract_brands(expected);
        let actual_brands = Self::extract_brands(actual);
        if let Some(missing) = expected_brands.iter().find(|b| !actual_brands.contains(b)) {
            report.warnings.push(format!(
                "Brand token '{}' not preserved at '{}'",
                missing,
                display_path(path)
            ));
        }

        let expected_urls = Self::extract_urls(expected);
        let actual_urls = Self::extract_urls(actual);
        if expected_urls != actual_urls {
            report.warnings.push(format!(
                "URL mismatch at '{}': default has {} URLs, translation has {} URLs",
                display_path(path),
                expected_urls.len(),
                actual_urls.len()
            ));
        }
    }

    /// Extract Latin-script product names that should survive translation
    fn extract_brands(text: &str) -> Vec<String> {
        let regex = BRAND_REGEX
            .get_or_init(|| Regex::new(r"\b(AISleep|Web3|NFTs?)\b").expect("valid brand regex"));

        let mut brands: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches('s').to_string())
            .collect();
        brands.sort();
        brands.dedup();
        brands
    }

    fn extract_urls(text: &str) -> Vec<String> {
        let regex =
            URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("valid URL regex"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", path, segment)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_brands_dedups_and_singularizes() {
        let brands = DictionaryValidator::extract_brands("Dynamic NFTs and one NFT on Web3");
        assert_eq!(brands, vec!["NFT", "Web3"]);
    }

    #[test]
    fn test_extract_brands_none() {
        assert!(DictionaryValidator::extract_brands("أعد تعريف مستقبل النوم").is_empty());
    }

    #[test]
    fn test_extract_urls() {
        let urls = DictionaryValidator::extract_urls("See https://aisleep.example/docs now");
        assert_eq!(urls, vec!["https://aisleep.example/docs"]);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_identical_shape_is_clean() {
        let default = json!({ "hero": { "headline": "Install AISleep" }, "links": ["a", "b"] });
        let candidate = json!({ "hero": { "headline": "تثبيت AISleep" }, "links": ["ا", "ب"] });

        let report = DictionaryValidator::validate(&default, &candidate);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_missing_key_is_warning() {
        let default = json!({ "hero": { "headline": "x", "cta": "y" } });
        let candidate = json!({ "hero": { "headline": "x" } });

        let report = DictionaryValidator::validate(&default, &candidate);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("Missing key 'hero.cta'"));
    }

    #[test]
    fn test_validate_extra_key_is_warning() {
        let default = json!({ "invest": { "title": "x" } });
        let candidate = json!({ "invest": { "title": "x", "description": "y" } });

        let report = DictionaryValidator::validate(&default, &candidate);
        assert!(report.warnings[0].contains("Extra key 'invest.description'"));
    }

    #[test]
    fn test_validate_kind_mismatch_is_error() {
        let default = json!({ "footer": { "links": ["a"] } });
        let candidate = json!({ "footer": { "links": "a" } });

        let report = DictionaryValidator::validate(&default, &candidate);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("footer.links"));
        assert!(report.errors[0].contains("list"));
    }

    #[test]
    fn test_validate_length_mismatch_is_warning() {
        let default = json!({ "points": ["a", "b", "c"] });
        let candidate = json!({ "points": ["a"] });

        let report = DictionaryValidator::validate(&default, &candidate);
        assert!(report.warnings[0].contains("Length mismatch at 'points'"));
    }

    #[test]
    fn test_validate_empty_translation() {
        let default = json!({ "title": "Title" });
        let candidate = json!({ "title": "  " });

        let report = DictionaryValidator::validate(&default, &candidate);
        assert!(report.warnings[0].contains("Empty translation at 'title'"));
    }

    #[test]
    fn test_validate_empty_default_allows_empty_translation() {
        let report = DictionaryValidator::validate(&json!({ "t": "" }), &json!({ "t": "" }));
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_lost_brand() {
        let default = json!({ "title": "What is AISleep?" });
        let candidate = json!({ "title": "ما هو؟" });

        let report = DictionaryValidator::validate(&default, &candidate);
        assert!(report.warnings[0].contains("AISleep"));
    }

    #[test]
    fn test_validate_embedded_arabic_has_no_errors() {
        let dictionary = crate::i18n::ContentDictionary::embedded().unwrap();
        let report = DictionaryValidator::validate(
            dictionary.tree("en").unwrap(),
            dictionary.tree("ar").unwrap(),
        );
        assert!(!report.has_errors(), "{:?}", report.errors);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("Extra key 'invest.description'")));
    }
}
