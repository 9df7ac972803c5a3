//! Locale model: locale identifiers and the process-wide active locale.
//!
//! A `LocaleCode` is an opaque identifier for a human language. No
//! validation against any standard is performed; any string is accepted.
//! Equality is exact string match.
//!
//! The active locale is ambient process-wide state consulted by the
//! `Display` impls of [`crate::Error`] and [`crate::ErrorAggregate`] at
//! render time. Every other rendering API takes the locale explicitly.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// An opaque locale identifier (e.g., an ISO 639-1 code like "en").
///
/// Construction never fails: unknown or malformed codes are accepted and
/// simply fall back to the default locale at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(Cow<'static, str>);

impl LocaleCode {
    /// English, the default locale.
    pub const ENGLISH: LocaleCode = LocaleCode(Cow::Borrowed("en"));

    /// Indonesian, the second locale shipped with [`crate::Dictionary::new`].
    pub const INDONESIAN: LocaleCode = LocaleCode(Cow::Borrowed("id"));

    /// The default locale, used as the fallback for every render call.
    pub const DEFAULT: LocaleCode = LocaleCode::ENGLISH;

    /// Create a `LocaleCode` from a raw string.
    ///
    /// # Arguments
    /// * `code` - The locale identifier (e.g., "en", "id", "es-MX")
    pub fn new(code: impl Into<String>) -> Self {
        LocaleCode(Cow::Owned(code.into()))
    }

    /// Get the locale identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        *self == LocaleCode::DEFAULT
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        LocaleCode::new(code)
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        LocaleCode::new(code)
    }
}

/// Process-wide active locale, read by default-mode rendering.
static ACTIVE_LOCALE: RwLock<LocaleCode> = RwLock::new(LocaleCode::DEFAULT);

/// Set the process-wide active locale.
///
/// Accepts any raw locale string silently; setting an unsupported locale
/// simply causes subsequent ambient renders to fall back to the default
/// locale. The change is atomic and visible to every subsequent read.
pub fn set_active_locale(locale: impl Into<LocaleCode>) {
    let locale = locale.into();
    let mut active = ACTIVE_LOCALE.write().unwrap_or_else(PoisonError::into_inner);
    *active = locale;
}

/// Get the current process-wide active locale.
///
/// Read at call time, not cached: two ambient renders of the same error
/// straddling a [`set_active_locale`] call may yield different strings.
pub fn active_locale() -> LocaleCode {
    ACTIVE_LOCALE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        assert_eq!(LocaleCode::ENGLISH.as_str(), "en");
        assert!(LocaleCode::ENGLISH.is_default());
    }

    #[test]
    fn test_indonesian_constant() {
        assert_eq!(LocaleCode::INDONESIAN.as_str(), "id");
        assert!(!LocaleCode::INDONESIAN.is_default());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(LocaleCode::DEFAULT, LocaleCode::ENGLISH);
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_accepts_any_string() {
        let locale = LocaleCode::new("not-a-real-locale");
        assert_eq!(locale.as_str(), "not-a-real-locale");
    }

    #[test]
    fn test_owned_equals_constant() {
        assert_eq!(LocaleCode::new("en"), LocaleCode::ENGLISH);
    }

    #[test]
    fn test_from_str_and_string() {
        assert_eq!(LocaleCode::from("id"), LocaleCode::INDONESIAN);
        assert_eq!(LocaleCode::from(String::from("id")), LocaleCode::INDONESIAN);
    }

    #[test]
    fn test_display() {
        assert_eq!(LocaleCode::ENGLISH.to_string(), "en");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(LocaleCode::ENGLISH < LocaleCode::INDONESIAN);
    }

    // ==================== Active Locale Tests ====================

    #[test]
    #[serial(active_locale)]
    fn test_active_locale_defaults_to_default() {
        set_active_locale(LocaleCode::DEFAULT);
        assert_eq!(active_locale(), LocaleCode::DEFAULT);
    }

    #[test]
    #[serial(active_locale)]
    fn test_set_active_locale_from_raw_string() {
        set_active_locale("id");
        assert_eq!(active_locale(), LocaleCode::INDONESIAN);
        set_active_locale(LocaleCode::DEFAULT);
    }

    #[test]
    #[serial(active_locale)]
    fn test_set_active_locale_accepts_unsupported_silently() {
        set_active_locale("xx-unsupported");
        assert_eq!(active_locale().as_str(), "xx-unsupported");
        set_active_locale(LocaleCode::DEFAULT);
    }
}
