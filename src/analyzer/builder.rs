//! Builder for configuring analyzer instances

use std::sync::Arc;
use std::time::Duration;

use crate::language::{HttpTranslator, LanguagePipeline, WhatlangDetector};
use crate::scorers::{HfSentimentClient, LexiconScorer, ScorerBackend, VaderScorer};
use crate::{HuginnError, Result};

use super::engine::Analyzer;

/// Main entry point for creating analyzer instances.
pub struct Huginn;

impl Huginn {
    /// Create a new builder for configuring the analyzer.
    pub fn builder() -> HuginnBuilder {
        HuginnBuilder::new()
    }
}

enum BackendChoice {
    Lexicon,
    Vader,
    HuggingFace { api_key: String },
    Custom(Arc<dyn ScorerBackend>),
}

/// Builder for configuring analyzer instances.
///
/// Exactly one scoring backend is selected at construction time; the
/// language pipeline is optional. The built [`Analyzer`] is immutable and
/// can be shared across concurrent callers.
pub struct HuginnBuilder {
    backend: Option<BackendChoice>,
    huggingface_model: Option<String>,
    multilingual: bool,
    translation_url: Option<String>,
    pipeline: Option<LanguagePipeline>,
    default_timeout_secs: Option<u64>,
}

impl HuginnBuilder {
    pub fn new() -> Self {
        Self {
            backend: None,
            huggingface_model: None,
            multilingual: false,
            translation_url: None,
            pipeline: None,
            default_timeout_secs: None,
        }
    }

    /// Use the AFINN lexicon backend (polarity in [-1, 1], thresholds ±0.1).
    pub fn lexicon(mut self) -> Self {
        self.backend = Some(BackendChoice::Lexicon);
        self
    }

    /// Use the VADER backend (compound in [-1, 1], thresholds ±0.05,
    /// with sub-score breakdown).
    pub fn vader(mut self) -> Self {
        self.backend = Some(BackendChoice::Vader);
        self
    }

    /// Use the remote HuggingFace classifier backend (label + confidence).
    pub fn huggingface(mut self, api_key: impl Into<String>) -> Self {
        self.backend = Some(BackendChoice::HuggingFace {
            api_key: api_key.into(),
        });
        self
    }

    /// Override the HuggingFace classification model.
    pub fn huggingface_model(mut self, model: impl Into<String>) -> Self {
        self.huggingface_model = Some(model.into());
        self
    }

    /// Use a custom scoring backend.
    pub fn scorer(mut self, scorer: Arc<dyn ScorerBackend>) -> Self {
        self.backend = Some(BackendChoice::Custom(scorer));
        self
    }

    /// Enable language detection and translation with the default
    /// detector and public translation endpoint.
    pub fn multilingual(mut self) -> Self {
        self.multilingual = true;
        self
    }

    /// Enable translation against a specific LibreTranslate-compatible
    /// endpoint (implies [`multilingual`](Self::multilingual)).
    pub fn translation_url(mut self, url: impl Into<String>) -> Self {
        self.translation_url = Some(url.into());
        self.multilingual = true;
        self
    }

    /// Use a custom language pipeline instead of the defaults.
    pub fn language_pipeline(mut self, pipeline: LanguagePipeline) -> Self {
        self.pipeline = Some(pipeline);
        self.multilingual = true;
        self
    }

    /// Set the timeout applied to every backend call (seconds).
    pub fn timeout(mut self, secs: u64) -> Self {
        self.default_timeout_secs = Some(secs);
        self
    }

    /// Build the analyzer.
    pub fn build(self) -> Result<Analyzer> {
        let timeout = Duration::from_secs(self.default_timeout_secs.unwrap_or(30));

        let scorer: Arc<dyn ScorerBackend> = match self.backend {
            None => return Err(HuginnError::NoBackend),
            Some(BackendChoice::Lexicon) => Arc::new(LexiconScorer::new()),
            Some(BackendChoice::Vader) => Arc::new(VaderScorer::new()),
            Some(BackendChoice::HuggingFace { api_key }) => {
                let mut client = HfSentimentClient::with_timeout(
                    api_key,
                    crate::scorers::huggingface::DEFAULT_BASE_URL,
                    timeout,
                );
                if let Some(model) = self.huggingface_model {
                    client = client.model(model);
                }
                Arc::new(client)
            }
            Some(BackendChoice::Custom(scorer)) => scorer,
        };

        let language = match self.pipeline {
            Some(pipeline) => Some(pipeline),
            None if self.multilingual => {
                let base_url = self
                    .translation_url
                    .unwrap_or_else(|| crate::language::translate::DEFAULT_BASE_URL.to_string());
                Some(LanguagePipeline::new(
                    Arc::new(WhatlangDetector::new()),
                    Arc::new(HttpTranslator::with_timeout(base_url, timeout)),
                ))
            }
            None => None,
        };

        Ok(Analyzer::new(scorer, language, timeout))
    }
}

impl Default for HuginnBuilder {
    fn default() -> Self {
        Self::new()
    }
}
