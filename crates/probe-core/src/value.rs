//! Firestore field values.
//!
//! The REST API wraps every value in a single-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). [`FieldValue::from_rest`]
//! unwraps that encoding. Shapes it does not recognise become
//! [`FieldValue::Unsupported`] instead of failing the whole document.

use serde_json::Value;

use crate::fields::Fields;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    /// RFC 3339 timestamp, kept verbatim.
    Timestamp(String),
    /// Resource name of another document.
    Reference(String),
    /// Base64-encoded bytes, kept verbatim.
    Bytes(String),
    GeoPoint {
        latitude: f64,
        longitude: f64,
    },
    Array(Vec<FieldValue>),
    Map(Fields),
    /// Raw JSON that did not match any known value encoding.
    Unsupported(Value),
}

impl FieldValue {
    /// Decode one REST-encoded value.
    #[must_use]
    pub fn from_rest(raw: &Value) -> Self {
        let unsupported = || Self::Unsupported(raw.clone());

        let Some(object) = raw.as_object() else {
            return unsupported();
        };
        let mut entries = object.iter();
        let (Some((kind, inner)), None) = (entries.next(), entries.next()) else {
            return unsupported();
        };

        match (kind.as_str(), inner) {
            ("nullValue", _) => Self::Null,
            ("booleanValue", Value::Bool(b)) => Self::Bool(*b),
            // int64 travels as a decimal string
            ("integerValue", Value::String(s)) => s.parse().map_or_else(|_| unsupported(), Self::Integer),
            ("integerValue", Value::Number(n)) => n.as_i64().map_or_else(unsupported, Self::Integer),
            ("doubleValue", Value::Number(n)) => n.as_f64().map_or_else(unsupported, Self::Double),
            // NaN / Infinity are sent as strings
            ("doubleValue", Value::String(s)) => s.parse().map_or_else(|_| unsupported(), Self::Double),
            ("stringValue", Value::String(s)) => Self::String(s.clone()),
            ("timestampValue", Value::String(s)) => Self::Timestamp(s.clone()),
            ("referenceValue", Value::String(s)) => Self::Reference(s.clone()),
            ("bytesValue", Value::String(s)) => Self::Bytes(s.clone()),
            ("geoPointValue", Value::Object(point)) => Self::GeoPoint {
                latitude: point.get("latitude").and_then(Value::as_f64).unwrap_or_default(),
                longitude: point.get("longitude").and_then(Value::as_f64).unwrap_or_default(),
            },
            ("arrayValue", Value::Object(array)) => Self::Array(
                array
                    .get("values")
                    .and_then(Value::as_array)
                    .map(|values| values.iter().map(Self::from_rest).collect())
                    .unwrap_or_default(),
            ),
            ("mapValue", Value::Object(map)) => Self::Map(Fields::from_rest(map.get("fields"))),
            _ => unsupported(),
        }
    }

    /// Whether the value counts as "set" for presence checks.
    ///
    /// Empty strings, zero, `false`, null, and empty containers are not truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Unsupported(_) => false,
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Double(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) | Self::Timestamp(s) | Self::Reference(s) | Self::Bytes(s) => {
                !s.is_empty()
            }
            Self::GeoPoint { .. } => true,
            Self::Array(values) => !values.is_empty(),
            Self::Map(fields) => !fields.is_empty(),
        }
    }
}
