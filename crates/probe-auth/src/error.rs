use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid service account credential: {0}")]
    InvalidCredential(String),

    #[error("service account private_key is not a usable RSA PEM key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign token assertion: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token exchange failed (HTTP {status}): {message}")]
    TokenExchange { status: u16, message: String },

    #[error("token response has no access_token: {0}")]
    MissingAccessToken(String),
}
