// ABOUTME: Template context holding the field values used to resolve markup
// ABOUTME: Provides truthiness, text rendering of values, and dotted path navigation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::error::{Result, TemplateError};

/// How field names in markup are matched against the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLookup {
    /// Field names are exact top-level keys.
    #[default]
    Flat,
    /// Field names are dotted paths into nested objects and arrays.
    Path,
}

/// Field values available to a single template resolution.
///
/// The context is read-only while a template is being resolved. Callers that
/// have no data at all pass `None` instead of an empty context, which turns
/// both resolution passes into no-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: Map<String, JsonValue>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON value, which must be an object
    pub fn from_json(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(values) => Ok(Self { values }),
            other => Err(TemplateError::InvalidContext {
                found: kind_of(&other).to_string(),
            }),
        }
    }

    /// Build a context from any serializable value that serializes to an object
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self> {
        Self::from_json(serde_json::to_value(value)?)
    }

    /// Add or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`Context::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a top-level field
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Navigate a dotted path such as `address.street` through nested values.
    ///
    /// A path without a separator is a plain top-level lookup. Otherwise the
    /// first segment selects a child and the remaining segments are resolved
    /// against it. Segments applied to arrays are zero-based indices.
    /// Descending through a scalar or a missing key yields `None`.
    pub fn resolve_path(&self, path: &str) -> Option<&JsonValue> {
        match path.split_once('.') {
            None => self.values.get(path),
            Some((head, rest)) => resolve_in(self.values.get(head)?, rest),
        }
    }

    /// Look up a field name with the given matching mode
    pub fn lookup(&self, name: &str, mode: FieldLookup) -> Option<&JsonValue> {
        match mode {
            FieldLookup::Flat => self.get(name),
            FieldLookup::Path => self.resolve_path(name),
        }
    }

    /// Whether the named field is present and truthy
    pub fn is_field_truthy(&self, name: &str, mode: FieldLookup) -> bool {
        self.lookup(name, mode).is_some_and(is_truthy)
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.values.clone())
    }
}

impl From<Map<String, JsonValue>> for Context {
    fn from(values: Map<String, JsonValue>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn resolve_in<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    match path.split_once('.') {
        None => child(value, path),
        Some((head, rest)) => resolve_in(child(value, head)?, rest),
    }
}

fn child<'a>(value: &'a JsonValue, key: &str) -> Option<&'a JsonValue> {
    match value {
        JsonValue::Object(map) => map.get(key),
        JsonValue::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Classify a value as truthy.
///
/// `null`, `false`, zero and the empty string are falsy. Everything else,
/// empty arrays and objects included, is truthy.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Text representation of a value when it is substituted into a template
pub fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => {
            if n.is_i64() || n.is_u64() {
                n.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        JsonValue::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        JsonValue::Object(_) => value.to_string(),
    }
}
