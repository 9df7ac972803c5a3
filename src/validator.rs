//! Dictionary consistency validation.
//!
//! A loaded dictionary can be degraded without being unloadable: a
//! definition may be missing a locale's message, or its locales may
//! disagree on placeholder arity so that one formatted render comes out
//! malformed. Those states only surface at render time; this module lets
//! operators detect them right after load instead.

use crate::dictionary::Dictionary;
use crate::template::placeholder_count;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems: a definition that cannot render anything useful
    pub errors: Vec<String>,

    /// Non-critical problems: renders degrade but stay usable
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary consistency.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate a loaded dictionary.
    ///
    /// Checks that:
    /// - every definition has a message for every configured locale
    ///   (a missing one renders the default-locale text instead);
    /// - all locales of a definition agree on `%s` placeholder arity
    ///   (a mismatch produces visibly malformed formatted renders);
    /// - every definition has at least one non-empty message at all
    ///   (error: such a definition renders empty strings everywhere).
    ///
    /// # Returns
    /// A `ValidationReport` with findings in sorted key order, so repeated
    /// validations of the same dictionary produce identical reports.
    pub fn validate(dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut entries: Vec<_> = dictionary.iter().collect();
        entries.sort_by_key(|(key, _)| *key);

        for (key, definition) in entries {
            let mut arities: Vec<(String, usize)> = Vec::new();

            for message in definition.messages() {
                if message.template.is_empty() {
                    report.warnings.push(format!(
                        "definition '{}' has no message for locale '{}'",
                        key, message.locale
                    ));
                } else {
                    arities.push((
                        message.locale.to_string(),
                        placeholder_count(&message.template),
                    ));
                }
            }

            if arities.is_empty() {
                report.errors.push(format!(
                    "definition '{}' has no message in any configured locale",
                    key
                ));
                continue;
            }

            let first_arity = arities[0].1;
            if arities.iter().any(|(_, arity)| *arity != first_arity) {
                let detail: Vec<String> = arities
                    .iter()
                    .map(|(locale, arity)| format!("{locale}={arity}"))
                    .collect();
                report.warnings.push(format!(
                    "definition '{}' has mismatched placeholder arity across locales ({})",
                    key,
                    detail.join(", ")
                ));
            }
        }

        report
    }
}
