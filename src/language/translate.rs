//! HTTP translation client.
//!
//! Speaks the LibreTranslate JSON API: POST `/translate` with
//! `{q, source, target}` returning `{"translatedText": ...}`.
//! See: <https://libretranslate.com/docs/>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Translator;
use crate::{HuginnError, Result};

/// Default base URL for the translation service
pub(crate) const DEFAULT_BASE_URL: &str = "https://libretranslate.com";

/// Translator backed by a LibreTranslate-compatible endpoint.
#[derive(Clone)]
pub struct HttpTranslator {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    /// Create a translator against the default public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a translator with a custom base URL (for self-hosted
    /// instances, or testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a translator with a custom base URL and request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Set the API key sent with each request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

impl Default for HttpTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[async_trait]
impl Translator for HttpTranslator {
    fn name(&self) -> &str {
        "libretranslate"
    }

    async fn translate(&self, text: &str, _source: &str) -> Result<String> {
        let url = format!("{}/translate", self.base_url);

        // Detection codes are ISO 639-3 while the API takes 639-1, so the
        // service's own auto-detection is used instead of the hint.
        let response = self
            .http
            .post(&url)
            .json(&TranslateRequest {
                q: text,
                source: "auto",
                target: "en",
                api_key: self.api_key.as_deref(),
            })
            .send()
            .await
            .map_err(HuginnError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HuginnError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("request failed").to_string(),
            });
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(HuginnError::from_transport)?;

        Ok(body.translated_text)
    }
}
