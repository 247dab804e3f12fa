//! Thin JSON-over-HTTP adapter
//!
//! Wraps a base URL and a `reqwest::Client` and exposes the four verbs
//! the user API needs. Non-2xx statuses and transport failures are mapped
//! to the error taxonomy here; callers never see a raw `reqwest` error.
//! No retries, no timeout configuration beyond the client defaults.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{UserctlError, UserctlResult};

/// JSON HTTP client bound to a single API base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client for the given base URL (trailing slashes are stripped)
    pub fn new(base_url: &str) -> UserctlResult<Self> {
        let trimmed = base_url.trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(UserctlError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            client: reqwest::Client::new(),
        })
    }

    /// The base URL this client is bound to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> UserctlResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UserctlError::transport(&url, e))?;
        Self::decode(url, response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> UserctlResult<T> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| UserctlError::transport(&url, e))?;
        Self::decode(url, response).await
    }

    /// PUT `body` as JSON to `path` and decode the JSON response
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> UserctlResult<T> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| UserctlError::transport(&url, e))?;
        Self::decode(url, response).await
    }

    /// DELETE `path`, expecting an empty response body
    pub async fn delete(&self, path: &str) -> UserctlResult<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| UserctlError::transport(&url, e))?;
        Self::error_for_status(&url, response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(url: String, response: Response) -> UserctlResult<T> {
        let response = Self::error_for_status(&url, response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| UserctlError::Decode { url, source: e })
    }

    /// Map non-2xx statuses to errors, passing successful responses through
    async fn error_for_status(url: &str, response: Response) -> UserctlResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(UserctlError::NotFound {
                url: url.to_string(),
            });
        }
        let body = response.text().await.unwrap_or_default();
        Err(UserctlError::Server {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
