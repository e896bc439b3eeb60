//! Service-account credential loading from a `KEY=VALUE` env file.
//!
//! The credential is a whole JSON document stored on one line, e.g.
//!
//! ```text
//! FIREBASE_SERVICE_ACCOUNT_KEY='{"type":"service_account","private_key":"-----BEGIN...\\n..."}'
//! ```
//!
//! `dotenvy` is not used for this file: it interprets escapes inside
//! double-quoted values and rejects unescaped inner quotes, both of which
//! corrupt a JSON value. The format handled is:
//! - lines are trimmed; blank lines, `#` comments, and lines without `=` are skipped
//! - the key is everything before the first `=`, trimmed
//! - one layer of matching `'...'` or `"..."` around the value is stripped

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::CredentialError;

/// Default env key holding the service-account JSON.
pub const DEFAULT_CREDENTIAL_KEY: &str = "FIREBASE_SERVICE_ACCOUNT_KEY";

const PRIVATE_KEY_FIELD: &str = "private_key";

/// A parsed service-account credential, kept as the raw JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccountCredential(Map<String, Value>);

impl ServiceAccountCredential {
    #[must_use]
    pub const fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Replace literal two-character `\n` sequences in `private_key` with real
    /// newlines. Returns whether the key was changed.
    ///
    /// Keys flattened onto a single env line usually arrive with their line
    /// breaks escaped. A credential without a string `private_key` is left as is.
    pub fn repair_private_key(&mut self) -> bool {
        match self.0.get_mut(PRIVATE_KEY_FIELD) {
            Some(Value::String(key)) if key.contains("\\n") => {
                *key = key.replace("\\n", "\n");
                true
            }
            Some(Value::String(_)) | None => false,
            Some(other) => {
                tracing::warn!(
                    kind = json_kind(other),
                    "private_key is not a string; leaving it unchanged"
                );
                false
            }
        }
    }
}

/// Split one env line into `(key, raw_value)`.
///
/// Returns `None` for blank lines, comments, and lines without `=`.
#[must_use]
pub fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// Strip exactly one layer of matching single or double quotes.
#[must_use]
pub fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Find the value of `key` in the env file at `path`, with quotes stripped.
///
/// The file is read line by line and closed as soon as the key is found or
/// the file is exhausted. Later duplicates of the key are never read.
///
/// # Errors
///
/// Returns `CredentialError::Io` if the file cannot be opened or read.
pub fn find_env_value(path: &Path, key: &str) -> Result<Option<String>, CredentialError> {
    let io_error = |source: std::io::Error| CredentialError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    for line in reader.lines() {
        let line = line.map_err(io_error)?;
        if let Some((name, value)) = parse_env_line(&line)
            && name == key
        {
            return Ok(Some(strip_matching_quotes(value).to_string()));
        }
    }
    Ok(None)
}

/// Load and repair the service-account credential stored under `key`.
///
/// A value that decodes to `null` or `{}` counts as absent.
///
/// # Errors
///
/// - `CredentialError::KeyNotFound` if the key is absent or empty
/// - `CredentialError::Io` if the file cannot be read
/// - `CredentialError::InvalidJson` / `NotAnObject` if the value is malformed
pub fn load_credential(path: &Path, key: &str) -> Result<ServiceAccountCredential, CredentialError> {
    let not_found = || CredentialError::KeyNotFound {
        key: key.to_string(),
        path: path.to_path_buf(),
    };

    let raw = find_env_value(path, key)?.ok_or_else(not_found)?;
    let parsed: Value = serde_json::from_str(&raw).map_err(|source| CredentialError::InvalidJson {
        key: key.to_string(),
        source,
    })?;

    let mut credential = match parsed {
        Value::Null => return Err(not_found()),
        Value::Object(map) if map.is_empty() => return Err(not_found()),
        Value::Object(map) => ServiceAccountCredential::new(map),
        _ => {
            return Err(CredentialError::NotAnObject {
                key: key.to_string(),
            });
        }
    };

    let repaired = credential.repair_private_key();
    tracing::debug!(
        path = %path.display(),
        fields = credential.as_map().len(),
        repaired,
        "loaded service account credential"
    );
    Ok(credential)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
