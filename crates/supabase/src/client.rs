use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use supausers_common::error::SupausersError;

/// Thin HTTP handle for a Supabase-style backend: the auth admin API under
/// `/auth/v1` and the PostgREST table API under `/rest/v1`.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SupabaseClientError {
    #[error("HTTP {status}: {message}")]
    HttpError { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl From<SupabaseClientError> for SupausersError {
    fn from(err: SupabaseClientError) -> Self {
        SupausersError::Upstream(err.to_string())
    }
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Auth URL for one resource under `collection`, with `id` pushed as a
    /// single percent-encoded path segment.
    pub fn auth_resource_url(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<String, SupabaseClientError> {
        let base = self.auth_url(collection);
        let mut url =
            Url::parse(&base).map_err(|e| SupabaseClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SupabaseClientError::InvalidUrl(base.clone()))?
            .pop_if_empty()
            .push(id);
        Ok(url.into())
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Start a request carrying the service key in both headers the gateway
    /// expects.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Send a JSON body and return the decoded JSON response.
    ///
    /// An empty 2xx body decodes as `Value::Null`.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> Result<serde_json::Value, SupabaseClientError> {
        let response = request.json(body).send().await?;
        Self::read_json(response).await
    }

    pub async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<serde_json::Value, SupabaseClientError> {
        let response = request.send().await?;
        Self::read_json(response).await
    }

    async fn read_json(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, SupabaseClientError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(SupabaseClientError::HttpError {
                status,
                message: error_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| SupabaseClientError::Decode(e.to_string()))
    }
}

/// Pull the human-readable reason out of an auth or PostgREST error body.
pub fn error_message(body: &str) -> String {
    const FIELDS: [&str; 4] = ["msg", "message", "error_description", "error"];

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in FIELDS {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.trim().to_string()
}
