//! Localized validation-error dictionary.
//!
//! Loads a YAML document mapping symbolic error keys to per-locale message
//! templates and error codes, then produces typed, localizable error
//! values from those keys. Field-level errors can be collected into an
//! [`ErrorAggregate`] with deterministic string rendering and a structured
//! localized form for API responses.
//!
//! # Architecture
//!
//! - `locale`: locale identifiers and the process-wide active locale
//! - `dictionary`: document loading and the definition registry
//! - `template`: positional `%s` message formatting
//! - `error`: single error value with deferred localization
//! - `aggregate`: recursive field-keyed error container
//! - `validator`: dictionary consistency reports
//! - `metrics`: lookup observability
//!
//! # Example
//!
//! ```rust
//! use validator_errors::{Dictionary, ErrorAggregate, LocaleCode};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.load_bytes(br#"
//! required:
//!   code: "E100"
//!   en: "%s is required"
//!   id: "%s wajib diisi"
//! "#).expect("well-formed document");
//!
//! let mut errors = ErrorAggregate::new();
//! errors.add("email", dictionary.new_error_formatted("required", &[&"email"]));
//!
//! assert_eq!(errors.render(&LocaleCode::ENGLISH), "email: email is required.");
//! assert_eq!(errors.render(&LocaleCode::INDONESIAN), "email: email wajib diisi.");
//! ```

pub mod aggregate;
pub mod dictionary;
pub mod error;
pub mod locale;
pub mod metrics;
pub mod template;
pub mod validator;

pub use aggregate::{ErrorAggregate, FieldError, OpaqueError};
pub use dictionary::{Dictionary, DictionaryError, ErrorCode, ErrorDefinition, LocalizedMessage};
pub use error::Error;
pub use locale::{active_locale, set_active_locale, LocaleCode};
pub use metrics::{LookupMetrics, MetricsReport};
pub use validator::{DictionaryValidator, ValidationReport};
