use std::fmt;

use probe_config::ServiceAccountCredential;
use serde::Deserialize;

use crate::error::AuthError;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The fields of a service-account credential needed to mint tokens.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(default)]
    pub project_id: String,
    /// Becomes the `kid` header of signed assertions.
    #[serde(default)]
    pub private_key_id: String,
    /// PEM-encoded RSA key (PKCS#8 or PKCS#1).
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Extract the signing fields from a loaded credential.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredential` if `client_email` or
    /// `private_key` is missing or not a string.
    pub fn from_credential(credential: &ServiceAccountCredential) -> Result<Self, AuthError> {
        serde_json::from_value(credential.clone().into_value())
            .map_err(|e| AuthError::InvalidCredential(e.to_string()))
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
