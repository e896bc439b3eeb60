//! OAuth access-token exchange over blocking HTTP.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::assertion::ASSERTION_LIFETIME_SECS;
use crate::error::AuthError;
use crate::service_account::ServiceAccountKey;

pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// A bearer token for Firestore REST calls.
#[derive(Clone)]
pub struct AccessToken {
    pub value: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<i64>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Exchanges signed assertions for access tokens.
pub struct TokenClient {
    http: Client,
}

impl TokenClient {
    #[must_use]
    pub const fn new(http: Client) -> Self {
        Self { http }
    }

    /// POST `assertion` to the key's `token_uri` with the JWT-bearer grant.
    ///
    /// # Errors
    ///
    /// - `AuthError::Http` on transport failure or an unparseable body
    /// - `AuthError::TokenExchange` on a non-success status
    /// - `AuthError::MissingAccessToken` if the response carries no token
    pub fn exchange(
        &self,
        key: &ServiceAccountKey,
        assertion: &str,
    ) -> Result<AccessToken, AuthError> {
        let body = format!(
            "grant_type={}&assertion={}",
            urlencoding::encode(JWT_BEARER_GRANT),
            urlencoding::encode(assertion)
        );

        tracing::debug!(token_uri = %key.token_uri, client_email = %key.client_email, "exchanging token assertion");
        let resp = self
            .http
            .post(&key.token_uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::TokenExchange {
                status: status.as_u16(),
                message: resp.text().unwrap_or_default(),
            });
        }

        let issued_at = Utc::now();
        let parsed: TokenResponse = resp.json()?;
        let Some(value) = parsed.access_token.filter(|token| !token.is_empty()) else {
            let detail = match (parsed.error, parsed.error_description) {
                (Some(error), Some(description)) => format!("{error}: {description}"),
                (Some(error), None) => error,
                (None, Some(description)) => description,
                (None, None) => "empty response".to_string(),
            };
            return Err(AuthError::MissingAccessToken(detail));
        };

        // Lifetimes chrono cannot represent fall back to the assertion's own.
        let expires_at = parsed
            .expires_in
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .unwrap_or_else(|| issued_at + TimeDelta::seconds(ASSERTION_LIFETIME_SECS));
        let token = AccessToken {
            value,
            token_type: parsed.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at,
        };
        tracing::debug!(expires_at = %token.expires_at, "access token issued");
        Ok(token)
    }
}
