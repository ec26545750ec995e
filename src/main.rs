//! Content tool for the site's localized dictionaries.
//!
//! Usage:
//!   aisleep-content languages                         # List supported languages
//!   aisleep-content resolve hero.headline --lang ar   # Resolve a key path
//!   aisleep-content presentation --lang ar            # Show document attributes
//!   aisleep-content validate                          # Check translations against the default
//!
//! Optional environment variables:
//! - SITE_DEFAULT_LANGUAGE (defaults to en)
//! - SITE_LOCALES_DIR (defaults to the embedded dictionaries)
//! - SITE_RTL_FONT / SITE_LTR_FONT

use aisleep_site::i18n::{DictionaryValidator, LanguageRegistry};
use aisleep_site::{LanguageSwitcher, RecordingDocument, SiteConfig};
use anyhow::{bail, Context, Result};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aisleep_site=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lang = flag_value(&args, "--lang")?;
    let positional: Vec<&str> = positional_args(&args);

    let config = SiteConfig::from_env()?;
    let mut switcher = LanguageSwitcher::from_config(&config, RecordingDocument::new())?;

    if let Some(code) = lang.as_deref() {
        switcher
            .try_switch_to(code)
            .with_context(|| format!("Cannot use --lang {}", code))?;
    }

    match positional.as_slice() {
        ["languages"] | [] => print_json(&switcher.list_supported())?,
        ["resolve", key_path] => {
            let node = switcher.try_resolve(key_path)?;
            print_json(node.as_value())?;
        }
        ["presentation"] => {
            let published = switcher
                .document()
                .current()
                .context("No presentation has been published")?;
            print_json(published)?
        }
        ["validate"] => validate(&switcher)?,
        other => bail!("Unknown command: {}", other.join(" ")),
    }

    Ok(())
}

fn validate(switcher: &LanguageSwitcher) -> Result<()> {
    let registry = LanguageRegistry::get();
    let default = registry.default_language();
    let dictionary = switcher.dictionary();
    let default_tree = dictionary
        .tree(default.code())
        .context("Default dictionary is not loaded")?;

    let mut failed = false;
    for language in registry.list().iter().filter(|l| !l.is_default()) {
        let Some(tree) = dictionary.tree(language.code()) else {
            warn!("No dictionary for {}, every lookup falls back", language);
            continue;
        };

        let report = DictionaryValidator::validate(default_tree, tree);
        failed |= report.has_errors();
        if report.is_clean() {
            info!("{}: clean", language);
            continue;
        }
        info!(
            "{}: {} errors, {} warnings",
            language,
            report.errors.len(),
            report.warnings.len()
        );
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "language": language.code(),
                "report": report,
            }))?
        );
    }

    if failed {
        bail!("Translation dictionaries have structural errors");
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Value following `flag`. A flag given without a value is a usage error.
fn flag_value(args: &[String], flag: &str) -> Result<Option<String>> {
    let Some(i) = args.iter().position(|arg| arg == flag) else {
        return Ok(None);
    };
    match args.get(i + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.clone())),
        _ => bail!("Usage: {} <code> requires a language code", flag),
    }
}

/// Arguments that are neither flags nor flag values.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            positional.push(arg.as_str());
        }
    }
    positional
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_value_present() {
        let args = args(&["resolve", "hero.headline", "--lang", "ar"]);
        assert_eq!(flag_value(&args, "--lang").unwrap(), Some("ar".to_string()));
    }

    #[test]
    fn test_flag_value_absent() {
        assert_eq!(flag_value(&args(&["languages"]), "--lang").unwrap(), None);
    }

    #[test]
    fn test_flag_value_trailing_flag_is_error() {
        let err = flag_value(&args(&["presentation", "--lang"]), "--lang").unwrap_err();
        assert!(err.to_string().contains("requires a language code"));
    }

    #[test]
    fn test_flag_value_followed_by_flag_is_error() {
        assert!(flag_value(&args(&["--lang", "--verbose"]), "--lang").is_err());
    }

    #[test]
    fn test_positional_args_skip_flag_values() {
        let args = args(&["resolve", "--lang", "ar", "hero.headline"]);
        assert_eq!(positional_args(&args), vec!["resolve", "hero.headline"]);
    }
}
