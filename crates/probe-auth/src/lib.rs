//! # probe-auth
//!
//! Service-account authentication for docprobe.
//!
//! Turns a loaded [`ServiceAccountCredential`] into an [`AccessToken`]: the
//! credential's RSA key signs a JWT assertion (`jsonwebtoken`, RS256) which is
//! exchanged at the credential's `token_uri` over blocking `reqwest`. There is
//! no retry and no token refresh; a probe run fits well inside one token's
//! lifetime.

pub mod assertion;
pub mod error;
pub mod service_account;
pub mod token;

pub use error::AuthError;
pub use service_account::ServiceAccountKey;
pub use token::{AccessToken, TokenClient};

use probe_config::ServiceAccountCredential;

/// Mint an access token for `credential`.
///
/// # Errors
///
/// Returns `AuthError` if the credential lacks signing fields, the key cannot
/// sign, or the token endpoint rejects the assertion.
pub fn authenticate(
    http: reqwest::blocking::Client,
    credential: &ServiceAccountCredential,
) -> Result<AccessToken, AuthError> {
    let key = ServiceAccountKey::from_credential(credential)?;
    let jwt = assertion::sign(&key, chrono::Utc::now())?;
    TokenClient::new(http).exchange(&key, &jwt)
}
