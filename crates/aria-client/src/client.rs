//! HTTP client for the generation proxy.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use aria_models::{Clip, CustomGenerateRequest, GenerateRequest, QuotaInfo};

use crate::error::{AriaError, AriaResult};
use crate::poller::ClipSource;

/// Configuration for the proxy client.
#[derive(Debug, Clone)]
pub struct AriaClientConfig {
    /// Base URL of the proxy
    pub base_url: String,
    /// Opaque session credential, forwarded verbatim as the `Cookie`
    /// header on every request. Never parsed by this client.
    pub cookie: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AriaClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            cookie: String::new(),
            // Generation submissions can block server-side when the proxy
            // waits for audio, so the budget is generous.
            timeout: Duration::from_secs(300),
        }
    }
}

impl AriaClientConfig {
    /// Create config from environment variables.
    ///
    /// `ARIA_COOKIE` is required; `ARIA_API_URL` and `ARIA_TIMEOUT`
    /// (seconds) fall back to defaults.
    pub fn from_env() -> AriaResult<Self> {
        let cookie = std::env::var("ARIA_COOKIE")
            .map_err(|_| AriaError::Config("ARIA_COOKIE not set".to_string()))?;

        Ok(Self {
            base_url: std::env::var("ARIA_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            cookie,
            timeout: Duration::from_secs(
                std::env::var("ARIA_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300),
            ),
        })
    }
}

/// Client for the music-generation proxy.
pub struct AriaClient {
    http: Client,
    config: AriaClientConfig,
}

impl AriaClient {
    /// Create a new client.
    pub fn new(config: AriaClientConfig) -> AriaResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AriaError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AriaResult<Self> {
        Self::new(AriaClientConfig::from_env()?)
    }

    /// Submit a description-mode generation. Returns the created clip batch.
    pub async fn generate(&self, request: &GenerateRequest) -> AriaResult<Vec<Clip>> {
        let url = format!("{}/api/generate", self.config.base_url);
        debug!("Submitting generation request to {}", url);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::COOKIE, &self.config.cookie)
            .json(request)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Submit a custom-mode generation with caller-authored lyrics.
    pub async fn custom_generate(&self, request: &CustomGenerateRequest) -> AriaResult<Vec<Clip>> {
        let url = format!("{}/api/custom_generate", self.config.base_url);
        debug!("Submitting custom generation request to {}", url);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::COOKIE, &self.config.cookie)
            .json(request)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch the current records for a set of clip ids.
    pub async fn get_clips(&self, ids: &[String]) -> AriaResult<Vec<Clip>> {
        let url = format!("{}/api/get", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("ids", ids.join(","))])
            .header(reqwest::header::COOKIE, &self.config.cookie)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch remaining generation credits for the upstream account.
    pub async fn get_quota(&self) -> AriaResult<QuotaInfo> {
        let url = format!("{}/api/get_limit", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::COOKIE, &self.config.cookie)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Concatenate a clip's extensions into a whole song.
    pub async fn concat(&self, clip_id: &str) -> AriaResult<Clip> {
        let url = format!("{}/api/concat", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::COOKIE, &self.config.cookie)
            .json(&serde_json::json!({ "clip_id": clip_id }))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Map a proxy response to a typed value.
    ///
    /// Non-2xx responses carry their body text in the error; a 2xx body
    /// that is not valid JSON is a decode error, which callers treat as
    /// fatal rather than retryable.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AriaResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AriaError::RequestFailed { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ClipSource for AriaClient {
    async fn fetch_clips(&self, ids: &[String]) -> AriaResult<Vec<Clip>> {
        self.get_clips(ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AriaClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert!(config.cookie.is_empty());
    }
}
