//! Preview errors binary - loads a dictionary document and renders every
//! definition in every configured locale, with a validation report.
//!
//! Usage:
//!   cargo run --bin preview-errors -- path/to/errors.yaml
//!
//! Environment variables:
//! - ERROR_DICTIONARY_FILE (used when no path argument is given)
//! - ERROR_LOCALES (comma-separated, defaults to "en,id")
//! - ACTIVE_LOCALE (defaults to "en")

use anyhow::{Context, Result};
use tracing::{info, warn};
use validator_errors::{
    set_active_locale, Dictionary, DictionaryValidator, LocaleCode, LookupMetrics,
};

struct PreviewConfig {
    dictionary_file: String,
    locales: Vec<LocaleCode>,
    active_locale: String,
}

impl PreviewConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            dictionary_file: std::env::args()
                .nth(1)
                .or_else(|| std::env::var("ERROR_DICTIONARY_FILE").ok())
                .context("pass a document path or set ERROR_DICTIONARY_FILE")?,
            locales: std::env::var("ERROR_LOCALES")
                .map(|raw| raw.split(',').map(|code| LocaleCode::new(code.trim())).collect())
                .unwrap_or_else(|_| vec![LocaleCode::ENGLISH, LocaleCode::INDONESIAN]),
            active_locale: std::env::var("ACTIVE_LOCALE")
                .unwrap_or_else(|_| LocaleCode::DEFAULT.as_str().to_string()),
        })
    }
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("preview_errors=info".parse()?)
                .add_directive("validator_errors=info".parse()?),
        )
        .init();

    let config = PreviewConfig::from_env()?;
    info!("Loading error dictionary from {}", config.dictionary_file);

    let mut dictionary = Dictionary::with_locales(config.locales);
    dictionary
        .load_path(&config.dictionary_file)
        .context("Failed to load error dictionary")?;
    set_active_locale(config.active_locale);

    let report = DictionaryValidator::validate(&dictionary);
    for error in &report.errors {
        warn!("validation error: {error}");
    }
    for warning in &report.warnings {
        warn!("validation warning: {warning}");
    }
    if report.is_clean() {
        info!("dictionary is clean");
    }

    let mut keys: Vec<&str> = dictionary.keys().collect();
    keys.sort_unstable();

    for key in &keys {
        let error = dictionary.new_error(key);
        match error.code() {
            Some(code) => println!("{key} (code: {code})"),
            None => println!("{key}"),
        }
        for locale in dictionary.locales() {
            println!("  {locale}: {}", error.render(locale));
        }
    }

    let lookups = LookupMetrics::global().report();
    info!(
        "Previewed {} definitions ({} lookups, {:.0}% hit rate)",
        keys.len(),
        lookups.definition_hits + lookups.unknown_keys,
        lookups.hit_rate
    );
    Ok(())
}
