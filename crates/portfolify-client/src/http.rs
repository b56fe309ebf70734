//! HTTP client for the portfolify API.

use std::fmt;
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace, warn};

use portfolify_core::error::ApiError;
use portfolify_core::{BaseUrl, CredentialStore, Error, Result};

/// Shape of an API error body.
///
/// FastAPI puts everything under `detail`: a plain message for business
/// errors, a list of validation issues for 422s.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Debug, serde::Deserialize)]
struct ValidationIssue {
    #[serde(default)]
    msg: String,
}

impl ErrorBody {
    /// Normalize the body into a single display message, if it carries one.
    fn into_message(self) -> Option<String> {
        match self.detail? {
            ErrorDetail::Message(msg) => Some(msg),
            ErrorDetail::Validation(issues) => Some(
                issues
                    .into_iter()
                    .map(|issue| issue.msg)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

/// HTTP client for JSON requests against the API base URL.
///
/// The bearer token is read from the credential store on every call, so a
/// login that lands mid-session is picked up by the next request without
/// rebuilding anything. Requests are independent; nothing here serializes
/// or cancels them.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: BaseUrl,
    credentials: Arc<dyn CredentialStore>,
}

impl HttpClient {
    /// Create a new client for the given API base URL.
    pub fn new(base: BaseUrl, credentials: Arc<dyn CredentialStore>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolify/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base,
            credentials,
        }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    /// Returns a handle to the credential store backing this client.
    pub(crate) fn credential_store(&self) -> Arc<dyn CredentialStore> {
        Arc::clone(&self.credentials)
    }

    /// Make a GET request.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(path, "API GET");

        let response = self
            .client
            .get(self.base.endpoint(path))
            .headers(self.request_headers())
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        debug!(path, "API POST");

        let response = self
            .client
            .post(self.base.endpoint(path))
            .headers(self.request_headers())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make a POST request with no body.
    /// Used for generation endpoints that act on a stored resource.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn post_no_body<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(path, "API POST (no body)");

        let response = self
            .client
            .post(self.base.endpoint(path))
            .headers(self.request_headers())
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make a PUT request with a JSON body.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        debug!(path, "API PUT");

        let response = self
            .client
            .put(self.base.endpoint(path))
            .headers(self.request_headers())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make a PATCH request with a JSON body.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        debug!(path, "API PATCH");

        let response = self
            .client
            .patch(self.base.endpoint(path))
            .headers(self.request_headers())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make a DELETE request, expecting no response body.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "API DELETE");

        let response = self
            .client
            .delete(self.base.endpoint(path))
            .headers(self.request_headers())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            // 204 carries no body; any other success body is discarded
            Ok(())
        } else {
            Err(self.parse_error_response(response).await.into())
        }
    }

    /// Create headers for a request, attaching the stored bearer token.
    ///
    /// The store is consulted on every request. A missing or unreadable
    /// token downgrades to an unauthenticated request; the API answers
    /// those with 401 and callers handle that like any other API error.
    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match self.credentials.load() {
            Ok(Some(token)) => match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    warn!("stored token contains invalid header characters; sending unauthenticated");
                }
            },
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "failed to read credential store; sending unauthenticated");
            }
        }

        headers
    }

    /// Handle an API response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            response.json::<R>().await.map_err(|e| {
                if e.is_decode() {
                    Error::decode(e)
                } else {
                    transport_error(e)
                }
            })
        } else {
            Err(self.parse_error_response(response).await.into())
        }
    }

    /// Parse an API error response into a display-ready message.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status();
        let fallback = format!("Request failed ({})", status.as_u16());

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.into_message().unwrap_or(fallback),
            Err(_) => fallback,
        };

        if status == StatusCode::UNAUTHORIZED {
            debug!("request rejected as unauthenticated");
        }

        ApiError::new(status.as_u16(), message)
    }
}

// Credential stores don't implement Debug, so spell the fields out
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base", &self.base)
            .finish()
    }
}

/// Collapse any transport failure into the one connection error.
///
/// DNS, refused connections, TLS and timeouts all read the same to the
/// user; the underlying cause only goes to the log.
fn transport_error(error: reqwest::Error) -> Error {
    debug!(%error, "transport failure");
    Error::Unreachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolify_core::MemoryCredentialStore;

    #[test]
    fn client_creation() {
        let base = BaseUrl::new("https://api.portfolify.app").unwrap();
        let client = HttpClient::new(base.clone(), Arc::new(MemoryCredentialStore::new()));
        assert_eq!(client.base_url().as_str(), base.as_str());
    }

    #[test]
    fn error_body_with_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Invalid credentials"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn error_body_with_validation_list() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"msg": "field required", "loc": ["body", "email"]}, {"msg": "too short"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("field required, too short")
        );
    }

    #[test]
    fn error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
