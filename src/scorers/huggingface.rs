//! HuggingFace Inference API sentiment classifier.
//!
//! Remote text-classification over HuggingFace's serverless inference
//! endpoints. See: <https://huggingface.co/docs/api-inference/index>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::traits::ScorerBackend;
use crate::types::{Category, ScoreMetric, ScoreResult};
use crate::{HuginnError, Result};

/// Default base URL for HuggingFace Inference API
pub(crate) const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default classifier model.
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Remote classifier producing a label plus confidence in [0, 1].
///
/// There is no neutral band: the category comes straight from the
/// classifier's POSITIVE/NEGATIVE label and `polarity` carries the raw
/// confidence of that label.
#[derive(Clone)]
pub struct HfSentimentClient {
    api_key: String,
    model: String,
    http: Client,
    base_url: String,
}

impl HfSentimentClient {
    /// Create a new client with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_timeout(api_key, base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom base URL and request timeout.
    ///
    /// Timeout expiry surfaces as
    /// [`BackendUnavailable`](crate::HuginnError::BackendUnavailable).
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            model: DEFAULT_SENTIMENT_MODEL.to_string(),
            http,
            base_url: base_url.into(),
        }
    }

    /// Use a different classification model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn handle_response_errors(&self, response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            401 | 403 => Err(HuginnError::AuthenticationFailed),
            404 => Err(HuginnError::ModelNotFound(self.model.clone())),
            // 503 means the model is still loading or the endpoint is down
            503 => Err(HuginnError::BackendUnavailable(format!(
                "model {} is loading or offline",
                self.model
            ))),
            code => Err(HuginnError::Api {
                status: code,
                message: status.canonical_reason().unwrap_or("request failed").to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[async_trait]
impl ScorerBackend for HfSentimentClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn score(&self, text: &str) -> Result<ScoreResult> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await
            .map_err(HuginnError::from_transport)?;

        self.handle_response_errors(&response)?;

        // Response is [[{label, score}, ...]] for single input
        let rows: Vec<Vec<LabelScore>> = response
            .json()
            .await
            .map_err(HuginnError::from_transport)?;

        let top = rows
            .into_iter()
            .flatten()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or(HuginnError::EmptyResponse)?;

        let category = match top.label.to_ascii_uppercase().as_str() {
            "POSITIVE" => Category::Positive,
            "NEGATIVE" => Category::Negative,
            other => {
                return Err(HuginnError::Data(format!(
                    "unrecognized sentiment label: {other}"
                )));
            }
        };

        Ok(ScoreResult {
            polarity: top.score,
            metric: ScoreMetric::Confidence,
            category,
            breakdown: None,
        })
    }
}
