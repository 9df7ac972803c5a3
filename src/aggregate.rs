//! Aggregate error container: field-keyed collections of errors.
//!
//! An [`ErrorAggregate`] maps field identifiers to lists of errors, where
//! each entry is a localizable [`Error`], a nested aggregate, or an opaque
//! error from elsewhere. The shape is fixed: every field holds a list,
//! `add` appends unconditionally, and a one-element list renders as the
//! bare value while longer lists render bracketed (`[a, b]`).
//!
//! Rendering is pure and deterministic: fields are always emitted in
//! lexicographic order regardless of insertion order, and repeated or
//! concurrent renders never mutate the container.

use crate::error::Error;
use crate::locale::{active_locale, LocaleCode};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// An error produced outside the dictionary, carried through unchanged.
pub type OpaqueError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One error under a field: localizable, nested, or opaque.
#[derive(Debug)]
pub enum FieldError {
    /// A localizable error built from the dictionary.
    Single(Error),

    /// A nested aggregate (e.g., errors of an embedded struct).
    Nested(ErrorAggregate),

    /// Any other error kind, rendered via its `Display` impl in every
    /// locale.
    Opaque(OpaqueError),
}

impl FieldError {
    /// Wrap an arbitrary error as an opaque entry.
    pub fn opaque(error: impl Into<OpaqueError>) -> Self {
        FieldError::Opaque(error.into())
    }

    /// Render this entry as a human-readable string for `locale`.
    ///
    /// Nested aggregates are parenthesized to keep the flattened output
    /// unambiguous.
    pub fn render(&self, locale: &LocaleCode) -> String {
        match self {
            FieldError::Single(error) => error.render(locale).to_string(),
            FieldError::Nested(aggregate) => format!("({})", aggregate.render(locale)),
            FieldError::Opaque(error) => error.to_string(),
        }
    }

    fn render_structured(&self, locale: &LocaleCode) -> Value {
        match self {
            FieldError::Single(error) => Value::String(error.render(locale).to_string()),
            FieldError::Nested(aggregate) => aggregate.render_structured(locale),
            FieldError::Opaque(error) => Value::String(error.to_string()),
        }
    }
}

impl From<Error> for FieldError {
    fn from(error: Error) -> Self {
        FieldError::Single(error)
    }
}

impl From<ErrorAggregate> for FieldError {
    fn from(aggregate: ErrorAggregate) -> Self {
        FieldError::Nested(aggregate)
    }
}

impl From<OpaqueError> for FieldError {
    fn from(error: OpaqueError) -> Self {
        FieldError::Opaque(error)
    }
}

/// A mapping from field identifiers to lists of errors.
///
/// Keys are unique; multiple errors under one field accumulate in that
/// field's list. Insertion order is irrelevant to rendering.
#[derive(Debug, Default)]
pub struct ErrorAggregate {
    fields: HashMap<String, Vec<FieldError>>,
}

impl ErrorAggregate {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error under a field.
    ///
    /// A second `add` under the same field appends to that field's list;
    /// nothing is ever overwritten.
    pub fn add(&mut self, field: impl Into<String>, error: impl Into<FieldError>) {
        self.fields.entry(field.into()).or_default().push(error.into());
    }

    /// Union all entries of `other` into this aggregate, field by field,
    /// appending lists under colliding fields.
    pub fn merge(&mut self, other: ErrorAggregate) {
        for (field, mut list) in other.fields {
            self.fields.entry(field).or_default().append(&mut list);
        }
    }

    /// True iff no fields carry errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields carrying errors.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Render the whole aggregate as one human-readable line for `locale`.
    ///
    /// Fields are sorted lexicographically, each emitted as
    /// `"field: value"`, joined with `"; "` and terminated with a period.
    /// An empty aggregate renders as an empty string, not a period.
    pub fn render(&self, locale: &LocaleCode) -> String {
        if self.fields.is_empty() {
            return String::new();
        }

        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort();

        let mut out = String::new();
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&render_list(&self.fields[*key], locale));
        }
        out.push('.');
        out
    }

    /// Render the aggregate as a structured value for machine consumption
    /// (e.g., an API response body), keyed by field.
    ///
    /// Each field maps to the localized string of a single error, an array
    /// for a multi-error field, or a nested object for a nested aggregate.
    pub fn render_structured(&self, locale: &LocaleCode) -> Value {
        let mut map = serde_json::Map::new();
        for (field, list) in &self.fields {
            map.insert(field.clone(), localize_list(list, locale));
        }
        Value::Object(map)
    }
}

fn render_list(list: &[FieldError], locale: &LocaleCode) -> String {
    if let [single] = list {
        return single.render(locale);
    }

    let mut out = String::from("[");
    for (i, error) in list.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&error.render(locale));
    }
    out.push(']');
    out
}

fn localize_list(list: &[FieldError], locale: &LocaleCode) -> Value {
    if let [single] = list {
        return single.render_structured(locale);
    }
    Value::Array(list.iter().map(|e| e.render_structured(locale)).collect())
}

impl fmt::Display for ErrorAggregate {
    /// Ambient render: resolves with the active locale read at call time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&active_locale()))
    }
}

impl std::error::Error for ErrorAggregate {}
