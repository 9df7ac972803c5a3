//! Error dictionary: loads a YAML document of error definitions.
//!
//! The document's top level maps symbolic error keys to a mapping of
//! fields, where a field is either the literal `code` or a locale
//! identifier:
//!
//! ```yaml
//! required:
//!   code: "E100"
//!   en: "%s is required"
//!   id: "%s wajib diisi"
//! ```
//!
//! Loading mutates the registry in place: re-loading a new document
//! replaces colliding keys but keeps unrelated entries (last-document-wins
//! reload semantics). Wrap the dictionary in a lock if loads can race with
//! lookups.

use crate::locale::LocaleCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The decoded shape of an error document: key -> field -> string.
type RawDocument = HashMap<String, HashMap<String, String>>;

/// Failure to load an error document.
///
/// Decode failures surface immediately and leave the registry untouched
/// for that call. Per-key and per-locale gaps are not errors; they degrade
/// at render time instead.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The document could not be parsed into the expected two-level shape.
    #[error("malformed error document: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// The document file could not be read.
    #[error("failed to read error document {}: {source}", path.display())]
    Io {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// A machine-readable error code (e.g., "E100").
///
/// Definitions without a `code` field carry no code at all; an empty
/// string is never used as a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Create an error code from a raw string.
    pub fn new(code: impl Into<String>) -> Self {
        ErrorCode(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One locale's message template within a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedMessage {
    /// The locale this template belongs to.
    pub locale: LocaleCode,

    /// The message template (`%s` placeholders). Empty when the document
    /// omitted this locale; degraded, not fatal.
    pub template: String,
}

/// A single error definition: an optional code plus one message template
/// per configured locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDefinition {
    code: Option<ErrorCode>,
    messages: Vec<LocalizedMessage>,
}

impl ErrorDefinition {
    /// The definition's error code, if the document provided one.
    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    /// The per-locale message templates, in configured-locale order.
    pub fn messages(&self) -> &[LocalizedMessage] {
        &self.messages
    }

    /// The template for a specific locale, if that locale is configured.
    pub fn message_for(&self, locale: &LocaleCode) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.locale == *locale)
            .map(|m| m.template.as_str())
    }
}

/// Registry of error definitions keyed by symbolic name.
///
/// Built from one or more documents via [`Dictionary::load_bytes`] /
/// [`Dictionary::load_path`]; read-only thereafter except for reload.
#[derive(Debug, Clone)]
pub struct Dictionary {
    locales: Vec<LocaleCode>,
    definitions: HashMap<String, ErrorDefinition>,
}

impl Dictionary {
    /// Create an empty dictionary with the stock locale pair
    /// (English and Indonesian).
    pub fn new() -> Self {
        Self::with_locales(vec![LocaleCode::ENGLISH, LocaleCode::INDONESIAN])
    }

    /// Create an empty dictionary with an explicit set of supported
    /// locales.
    ///
    /// The default locale is always part of the set, so every loaded
    /// definition carries at least a default-locale entry and render
    /// fallback stays well-defined.
    pub fn with_locales(locales: Vec<LocaleCode>) -> Self {
        let mut locales = locales;
        if !locales.contains(&LocaleCode::DEFAULT) {
            locales.insert(0, LocaleCode::DEFAULT);
        }
        Dictionary {
            locales,
            definitions: HashMap::new(),
        }
    }

    /// Load error definitions from a YAML document.
    ///
    /// Every key in the document gets a definition, including definitions
    /// with empty templates for locales the document omits. Keys already
    /// in the registry are overwritten; unrelated keys survive.
    ///
    /// # Errors
    /// [`DictionaryError::Decode`] if the document is not a two-level
    /// string mapping. The registry is not modified in that case.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), DictionaryError> {
        let document: RawDocument = serde_yaml::from_slice(bytes)?;
        debug!(keys = document.len(), "decoded error document");

        for (key, fields) in document {
            let code = match fields.get("code") {
                Some(code) if code.is_empty() => {
                    warn!(key = %key, "empty code field, treating as absent");
                    None
                }
                Some(code) => Some(ErrorCode::new(code.clone())),
                None => None,
            };

            let messages = self
                .locales
                .iter()
                .map(|locale| LocalizedMessage {
                    locale: locale.clone(),
                    template: fields.get(locale.as_str()).cloned().unwrap_or_default(),
                })
                .collect();

            debug!(key = %key, "registering error definition");
            self.definitions.insert(key, ErrorDefinition { code, messages });
        }

        info!(definitions = self.definitions.len(), "error dictionary loaded");
        Ok(())
    }

    /// Load error definitions from a YAML document on disk.
    ///
    /// # Errors
    /// [`DictionaryError::Io`] if the file cannot be read,
    /// [`DictionaryError::Decode`] if its contents are malformed.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_bytes(&bytes)
    }

    /// Look up a definition by symbolic key.
    pub fn get(&self, key: &str) -> Option<&ErrorDefinition> {
        self.definitions.get(key)
    }

    /// Check whether a symbolic key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True iff no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over the registered symbolic keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Iterate over the registered definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorDefinition)> {
        self.definitions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The configured locale set, default locale included.
    pub fn locales(&self) -> &[LocaleCode] {
        &self.locales
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
