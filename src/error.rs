//! Single error value with deferred localization.
//!
//! An [`Error`] is bound to a symbolic key at construction but resolves to
//! a concrete string only when rendered. [`Error::render`] takes the
//! locale explicitly; the `Display` impl reads the process-wide active
//! locale at call time, so two ambient renders straddling a
//! [`crate::set_active_locale`] call may yield different strings.

use crate::dictionary::{Dictionary, ErrorCode};
use crate::locale::{active_locale, LocaleCode};
use crate::metrics::LookupMetrics;
use crate::template::format_template;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// A localizable error value produced by a [`Dictionary`].
///
/// Rendering never fails: an unknown key renders its constructor-embedded
/// fallback message, an unknown locale falls back to the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: Option<ErrorCode>,
    fallback: String,
    messages: HashMap<LocaleCode, String>,
}

impl Dictionary {
    /// Build an [`Error`] for a symbolic key.
    ///
    /// A known key copies the definition's code and per-locale templates.
    /// An unknown key yields an error with no code and no localized
    /// messages whose render is a diagnostic string embedding the key, so
    /// a misspelled key stays traceable instead of crashing.
    pub fn new_error(&self, key: &str) -> Error {
        let fallback = format!("validator: {key}");
        match self.get(key) {
            Some(definition) => {
                LookupMetrics::global().record_definition_hit();
                Error {
                    code: definition.code().cloned(),
                    fallback,
                    messages: definition
                        .messages()
                        .iter()
                        .map(|m| (m.locale.clone(), m.template.clone()))
                        .collect(),
                }
            }
            None => {
                LookupMetrics::global().record_unknown_key();
                warn!(key = %key, "unknown error key, falling back to diagnostic message");
                Error {
                    code: None,
                    fallback,
                    messages: HashMap::new(),
                }
            }
        }
    }

    /// Build an [`Error`] with positional arguments substituted into every
    /// locale's template simultaneously.
    ///
    /// All locales of one definition must accept the same argument arity;
    /// a mismatch degrades to a visibly malformed string rather than
    /// aborting construction (see [`crate::template`]).
    pub fn new_error_formatted(&self, key: &str, args: &[&dyn fmt::Display]) -> Error {
        let mut error = self.new_error(key);
        for template in error.messages.values_mut() {
            *template = format_template(template, args);
        }
        error
    }
}

impl Error {
    /// The error code resolved from the dictionary, if any.
    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    /// Render the message for an explicit locale.
    ///
    /// Resolution order: the entry for `locale`, else the default locale's
    /// entry, else an empty string (degraded). An error built from an
    /// unknown key has no entries and renders its fallback message.
    pub fn render(&self, locale: &LocaleCode) -> &str {
        if self.messages.is_empty() {
            return &self.fallback;
        }
        if let Some(message) = self.messages.get(locale) {
            return message;
        }
        LookupMetrics::global().record_locale_fallback();
        self.messages
            .get(&LocaleCode::DEFAULT)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True iff the key was found in the dictionary at construction.
    pub fn is_localized(&self) -> bool {
        !self.messages.is_empty()
    }
}

impl fmt::Display for Error {
    /// Ambient render: resolves with the active locale read at call time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(&active_locale()))
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::set_active_locale;
    use serial_test::serial;

    const DOCUMENT: &str = r#"
required:
  code: "E100"
  en: "%s is required"
  id: "%s wajib diisi"
mismatch:
  en: "%s and %s"
  id: "%s saja"
"#;

    fn dictionary() -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary
            .load_bytes(DOCUMENT.as_bytes())
            .expect("document should load");
        dictionary
    }

    // ==================== Known Key Tests ====================

    #[test]
    fn test_known_key_carries_code() {
        let error = dictionary().new_error("required");
        assert_eq!(error.code(), Some(&ErrorCode::new("E100")));
        assert!(error.is_localized());
    }

    #[test]
    fn test_render_exact_locale() {
        let error = dictionary().new_error("required");
        assert_eq!(error.render(&LocaleCode::ENGLISH), "%s is required");
        assert_eq!(error.render(&LocaleCode::INDONESIAN), "%s wajib diisi");
    }

    #[test]
    fn test_render_unsupported_locale_falls_back_to_default() {
        let error = dictionary().new_error("required");
        assert_eq!(error.render(&LocaleCode::new("fr")), "%s is required");
    }

    // ==================== Unknown Key Tests ====================

    #[test]
    fn test_unknown_key_renders_fallback_with_key() {
        let error = dictionary().new_error("missing_key");
        assert_eq!(error.code(), None);
        assert!(!error.is_localized());
        assert_eq!(error.render(&LocaleCode::ENGLISH), "validator: missing_key");
        assert_eq!(
            error.render(&LocaleCode::new("anything")),
            "validator: missing_key"
        );
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_formatted_substitutes_every_locale() {
        let error = dictionary().new_error_formatted("required", &[&"name"]);
        assert_eq!(error.render(&LocaleCode::ENGLISH), "name is required");
        assert_eq!(error.render(&LocaleCode::INDONESIAN), "name wajib diisi");
    }

    #[test]
    fn test_formatted_arity_mismatch_degrades_visibly() {
        let error = dictionary().new_error_formatted("mismatch", &[&"a"]);
        assert_eq!(error.render(&LocaleCode::ENGLISH), "a and %!s(MISSING)");
        assert_eq!(error.render(&LocaleCode::INDONESIAN), "a saja");
    }

    #[test]
    fn test_formatted_unknown_key_keeps_fallback() {
        let error = dictionary().new_error_formatted("missing_key", &[&"x"]);
        assert_eq!(error.render(&LocaleCode::ENGLISH), "validator: missing_key");
    }

    // ==================== Ambient Render Tests ====================

    #[test]
    #[serial(active_locale)]
    fn test_display_reads_active_locale_at_call_time() {
        let error = dictionary().new_error_formatted("required", &[&"name"]);

        set_active_locale(LocaleCode::ENGLISH);
        assert_eq!(error.to_string(), "name is required");

        set_active_locale(LocaleCode::INDONESIAN);
        assert_eq!(error.to_string(), "name wajib diisi");

        set_active_locale(LocaleCode::DEFAULT);
    }
}
