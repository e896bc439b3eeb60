//! Self-signed JWT assertions for the OAuth 2.0 JWT-bearer grant.
//!
//! The assertion is signed with the service account's RSA key (RS256) and
//! exchanged at the credential's `token_uri` for a short-lived access token.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::service_account::ServiceAccountKey;

/// OAuth scope granting Firestore (Datastore) access.
pub const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// Lifetime of an assertion; Google rejects anything above one hour.
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AssertionClaims {
    #[must_use]
    pub fn new(key: &ServiceAccountKey, issued_at: DateTime<Utc>) -> Self {
        Self {
            iss: key.client_email.clone(),
            scope: DATASTORE_SCOPE.to_string(),
            aud: key.token_uri.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + TimeDelta::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
        }
    }
}

/// Sign an assertion for `key` issued at `issued_at`.
///
/// # Errors
///
/// Returns `AuthError::InvalidPrivateKey` if the PEM cannot be parsed, or
/// `AuthError::Signing` if RS256 signing fails.
pub fn sign(key: &ServiceAccountKey, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
    let mut header = Header::new(Algorithm::RS256);
    if !key.private_key_id.is_empty() {
        header.kid = Some(key.private_key_id.clone());
    }

    let encoding_key =
        EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(AuthError::InvalidPrivateKey)?;
    encode(&header, &AssertionClaims::new(key, issued_at), &encoding_key).map_err(AuthError::Signing)
}
