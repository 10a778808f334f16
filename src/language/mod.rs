//! Optional language detection and translation pipeline.
//!
//! When active, non-English documents are translated to English before
//! scoring. Both halves degrade gracefully: detection that yields nothing
//! is recorded as "unknown", and translation failure falls back to the
//! original text — logged and counted, never propagated to the caller.

mod detect;
pub(crate) mod translate;

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::telemetry;
use crate::types::DetectedLanguage;

pub use detect::WhatlangDetector;
pub use translate::HttpTranslator;

/// Identifies the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// Detector name for logging/metrics.
    fn name(&self) -> &str;

    /// Detect the language, or `None` when nothing can be determined.
    /// Must not fail.
    fn detect(&self, text: &str) -> Option<DetectedLanguage>;
}

/// Translates text to English.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translator name for logging/metrics.
    fn name(&self) -> &str;

    /// Translate `text` to English. `source` is the detected language code,
    /// "unknown" when detection yielded nothing.
    async fn translate(&self, text: &str, source: &str) -> Result<String>;
}

/// Outcome of a degrade-gracefully translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Translation succeeded.
    Translated(String),
    /// Translation failed; analysis proceeds on the original text.
    Failed,
}

/// Detector and translator wired together with the fallback contract.
#[derive(Clone)]
pub struct LanguagePipeline {
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
}

impl LanguagePipeline {
    /// Create a pipeline from a detector and a translator.
    pub fn new(detector: Arc<dyn LanguageDetector>, translator: Arc<dyn Translator>) -> Self {
        Self {
            detector,
            translator,
        }
    }

    /// Detect the language of `text`, recording failures as "unknown".
    pub fn detect(&self, text: &str) -> DetectedLanguage {
        match self.detector.detect(text) {
            Some(language) => language,
            None => {
                metrics::counter!(telemetry::DETECTION_FAILURES_TOTAL,
                    "detector" => self.detector.name().to_owned(),
                )
                .increment(1);
                DetectedLanguage::unknown()
            }
        }
    }

    /// Translate `text` to English, falling back on failure.
    ///
    /// A failure is logged and counted; the caller receives
    /// [`TranslationOutcome::Failed`] and analyzes the original text.
    pub async fn to_english(&self, text: &str, source: &str) -> TranslationOutcome {
        match self.translator.translate(text, source).await {
            Ok(translated) => TranslationOutcome::Translated(translated),
            Err(err) => {
                tracing::warn!(
                    translator = self.translator.name(),
                    %err,
                    "translation failed, analyzing original text"
                );
                metrics::counter!(telemetry::TRANSLATION_FALLBACKS_TOTAL,
                    "translator" => self.translator.name().to_owned(),
                )
                .increment(1);
                TranslationOutcome::Failed
            }
        }
    }
}
