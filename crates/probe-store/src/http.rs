//! Shared blocking HTTP helpers.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::error::StoreError;

const USER_AGENT: &str = concat!("docprobe/", env!("CARGO_PKG_VERSION"));

/// Build the blocking client shared by the token exchange and the listing calls.
///
/// No request timeout is set: every call blocks until the server answers or
/// the connection fails.
///
/// # Errors
///
/// Returns `StoreError::Http` if the TLS backend cannot be initialised.
pub fn build_client() -> Result<Client, StoreError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()
        .map_err(StoreError::from)
}

/// Pass successful responses through; turn anything else into
/// [`StoreError::Api`] carrying the status and body.
///
/// # Errors
///
/// Returns `StoreError::Api` for any non-2xx status.
pub fn check_response(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(StoreError::Api {
            status: status.as_u16(),
            message: resp.text().unwrap_or_default(),
        });
    }
    Ok(resp)
}
