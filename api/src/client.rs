//! Shared JSON-over-HTTPS client with cookie credentials.
//!
//! Every endpoint module goes through [`ApiClient`] so the base URL, the
//! credential attachment, and the failure-payload decoding live in one place.
//! Sessions are cookie-based: on wasm the browser attaches the `HttpOnly`
//! session cookie when the fetch runs in `include` credentials mode, on native
//! builds reqwest's own cookie store plays that part (used by tooling and
//! tests, not by the shipped app).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{extract_message, ApiError};

/// Base URL baked in at compile time, overridable via `API_BASE_URL`.
pub fn default_base_url() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or("http://localhost:3000/api")
        .to_string()
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(default_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_message(&body).unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %message, "api request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    /// GET where only the status matters; the body is discarded.
    pub async fn get_unit(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.get(self.url(path));
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_message(&body).unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    /// POST with an empty body (token-in-path mutations).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.post(self.url(path))).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.http.patch(self.url(path)).json(body)).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = ApiClient::with_base_url("https://api.example.org/api/");
        assert_eq!(client.base_url(), "https://api.example.org/api");
        assert_eq!(client.url("/users/me"), "https://api.example.org/api/users/me");
    }
}
