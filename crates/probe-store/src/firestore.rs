use probe_auth::AccessToken;
use probe_config::FirestoreConfig;
use probe_core::{CollectionName, Document};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;

use crate::DocumentSource;
use crate::error::StoreError;
use crate::http::check_response;
use crate::rest::{RestDocument, parse_page};

/// Authenticated, read-only handle to one Firestore database.
pub struct FirestoreClient {
    http: Client,
    token: AccessToken,
    documents_url: String,
    page_size: u32,
}

impl FirestoreClient {
    /// Bind a client to the project and database named in `config`.
    #[must_use]
    pub fn new(http: Client, config: &FirestoreConfig, token: AccessToken) -> Self {
        Self {
            http,
            token,
            documents_url: config.documents_url(),
            page_size: config.page_size,
        }
    }

    /// Fetch every document in `collection`, following page tokens until the
    /// server reports no further page.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on transport failure, a non-success status, or a
    /// malformed response. A page token handed back unchanged is
    /// `StoreError::Parse`. Nothing is retried.
    pub fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0_usize;

        loop {
            let url = self.page_url(collection, page_token.as_deref());
            let resp = self
                .http
                .get(&url)
                .header(AUTHORIZATION, self.token.authorization_header())
                .send()?;
            let body = check_response(resp)?.text()?;
            let page = parse_page(&body)?;
            pages += 1;

            let next = page.next_token().map(str::to_owned);
            tracing::debug!(
                collection,
                page = pages,
                documents = page.documents.len(),
                has_next = next.is_some(),
                "fetched page"
            );

            documents.extend(
                page.documents
                    .into_iter()
                    .map(RestDocument::into_document)
                    .collect::<Result<Vec<_>, _>>()?,
            );

            match next {
                Some(token) if page_token.as_deref() == Some(token.as_str()) => {
                    return Err(StoreError::Parse(format!(
                        "collection '{collection}': server repeated page token '{token}'"
                    )));
                }
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(collection, total = documents.len(), pages, "collection fetched");
        Ok(documents)
    }

    fn page_url(&self, collection: &str, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}?pageSize={}",
            self.documents_url,
            urlencoding::encode(collection),
            self.page_size
        );
        if let Some(token) = page_token {
            url.push_str("&pageToken=");
            url.push_str(&urlencoding::encode(token));
        }
        url
    }
}

impl DocumentSource for FirestoreClient {
    fn list_documents(&self, collection: CollectionName) -> Result<Vec<Document>, StoreError> {
        self.list_all(collection.as_str())
    }
}
