//! Schema-less document fields with defaulting accessors.
//!
//! Every accessor returns the type's default (`""`, `0`, `false`, empty list)
//! when the field is missing. A present scalar of another type is rendered
//! as text by the string accessors rather than dropped. Records are decoded
//! through these accessors field by field, so a malformed document never fails
//! a run.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::number::Number;
use crate::value::FieldValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a REST `fields` object. `None` or a non-object yields no fields.
    #[must_use]
    pub fn from_rest(raw: Option<&Value>) -> Self {
        raw.and_then(Value::as_object)
            .map(|object| {
                object
                    .iter()
                    .map(|(key, value)| (key.clone(), FieldValue::from_rest(value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String field, or `""`. Other scalars are rendered as text; arrays,
    /// maps, and null give `""`.
    #[must_use]
    pub fn string(&self, key: &str) -> String {
        match self.get(key) {
            Some(
                FieldValue::String(s)
                | FieldValue::Timestamp(s)
                | FieldValue::Reference(s)
                | FieldValue::Bytes(s),
            ) => s.clone(),
            Some(FieldValue::Integer(n)) => n.to_string(),
            Some(FieldValue::Double(n)) => n.to_string(),
            Some(FieldValue::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Non-empty string field, or `fallback`.
    #[must_use]
    pub fn string_or(&self, key: &str, fallback: &str) -> String {
        let value = self.string(key);
        if value.is_empty() {
            fallback.to_string()
        } else {
            value
        }
    }

    /// Numeric field as stored (integer or double), or integer `0`.
    #[must_use]
    pub fn numeric(&self, key: &str) -> Number {
        match self.get(key) {
            Some(FieldValue::Integer(n)) => Number::Int(*n),
            Some(FieldValue::Double(n)) => Number::Float(*n),
            _ => Number::default(),
        }
    }

    /// Numeric field as `f64`, or `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn number(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(FieldValue::Double(n)) => *n,
            Some(FieldValue::Integer(n)) => *n as f64,
            _ => 0.0,
        }
    }

    /// Boolean field, or `false`.
    #[must_use]
    pub fn bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(FieldValue::Bool(true)))
    }

    /// String elements of an array field. Non-string elements are skipped.
    #[must_use]
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(FieldValue::Array(values)) => values
                .iter()
                .filter_map(|value| match value {
                    FieldValue::String(s) => Some(s.clone()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the field is present and truthy (see [`FieldValue::is_truthy`]).
    #[must_use]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(FieldValue::is_truthy)
    }
}

impl FromIterator<(String, FieldValue)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
