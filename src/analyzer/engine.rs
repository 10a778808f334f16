//! The aggregation engine.
//!
//! One analysis request flows: raw text → (optional) language pipeline →
//! document score → (conditional) per-sentence scores → [`DocumentReport`].
//! No retries; scoring failures propagate, language failures degrade.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::instrument;

use crate::language::{LanguagePipeline, TranslationOutcome};
use crate::render;
use crate::scorers::ScorerBackend;
use crate::segment;
use crate::telemetry;
use crate::types::{DocumentReport, ScoreResult, SentenceResult};
use crate::{HuginnError, Result};

/// Multi-granularity sentiment analyzer.
///
/// Constructed once via [`Huginn::builder`](crate::Huginn::builder),
/// immutable thereafter, and shareable across concurrent callers — the
/// scorer and language pipeline are read-only after initialization.
#[derive(Clone)]
pub struct Analyzer {
    scorer: Arc<dyn ScorerBackend>,
    language: Option<LanguagePipeline>,
    score_timeout: Duration,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("backend", &self.scorer.name())
            .field("multilingual", &self.language.is_some())
            .field("score_timeout", &self.score_timeout)
            .finish()
    }
}

impl Analyzer {
    pub(crate) fn new(
        scorer: Arc<dyn ScorerBackend>,
        language: Option<LanguagePipeline>,
        score_timeout: Duration,
    ) -> Self {
        Self {
            scorer,
            language,
            score_timeout,
        }
    }

    /// Name of the configured scoring backend.
    pub fn backend_name(&self) -> &str {
        self.scorer.name()
    }

    /// Whether a language pipeline is active.
    pub fn is_multilingual(&self) -> bool {
        self.language.is_some()
    }

    /// Analyze `text` into a [`DocumentReport`].
    ///
    /// Empty or whitespace-only input fails fast with
    /// [`EmptyInput`](HuginnError::EmptyInput) before any backend call.
    /// Per-sentence results are produced when splitting yields more than
    /// one sentence; each sentence goes through the same scorer (and, with
    /// a language pipeline active, its own detection and translation).
    #[instrument(skip(self, text), fields(backend = self.scorer.name()))]
    pub async fn analyze(&self, text: &str) -> Result<DocumentReport> {
        if text.trim().is_empty() {
            return Err(HuginnError::EmptyInput);
        }

        let mut detected_language = None;
        let mut translated_text = None;
        let mut translation_failed = false;
        let mut analysis_text = text.to_string();

        if let Some(pipeline) = &self.language {
            let language = pipeline.detect(text);
            if !language.is_english() {
                match pipeline.to_english(text, &language.code).await {
                    TranslationOutcome::Translated(english) => {
                        translated_text = Some(english.clone());
                        analysis_text = english;
                    }
                    TranslationOutcome::Failed => translation_failed = true,
                }
            }
            detected_language = Some(language);
        }

        let document_score = self.score("score_document", &analysis_text).await?;

        let sentences = segment::split(&analysis_text);
        let mut sentence_results = Vec::new();
        if sentences.len() > 1 {
            for sentence in sentences {
                let mut translated = None;
                let mut scored_text = sentence.clone();

                if let Some(pipeline) = &self.language {
                    let language = pipeline.detect(&sentence);
                    if !language.is_english() {
                        if let TranslationOutcome::Translated(english) =
                            pipeline.to_english(&sentence, &language.code).await
                        {
                            scored_text = english.clone();
                            translated = Some(english);
                        }
                    }
                }

                let score = self.score("score_sentence", &scored_text).await?;
                metrics::counter!(telemetry::SENTENCE_SCORES_TOTAL,
                    "backend" => self.scorer.name().to_owned(),
                )
                .increment(1);

                sentence_results.push(SentenceResult {
                    text: sentence,
                    translated,
                    score,
                });
            }
        }

        Ok(DocumentReport {
            original_text: text.to_string(),
            detected_language,
            translated_text,
            translation_failed,
            document_score,
            sentence_results,
        })
    }

    /// Analyze `text` and render the report as a single text block.
    ///
    /// This is the seam the UI layer calls once per submission. Empty input
    /// is recovered into the fixed prompt message; backend failures
    /// propagate rather than producing a fabricated score.
    pub async fn render(&self, input: &str) -> Result<String> {
        match self.analyze(input).await {
            Ok(report) => Ok(render::render_report(&report)),
            Err(HuginnError::EmptyInput) => Ok(render::EMPTY_INPUT_PROMPT.to_string()),
            Err(err) => Err(err),
        }
    }

    /// Score one text through the backend, bounded by the configured timeout.
    async fn score(&self, operation: &'static str, text: &str) -> Result<ScoreResult> {
        let start = Instant::now();
        let result = match tokio::time::timeout(self.score_timeout, self.scorer.score(text)).await
        {
            Ok(result) => result,
            Err(_) => Err(HuginnError::BackendUnavailable(format!(
                "{} timed out after {:?}",
                self.scorer.name(),
                self.score_timeout
            ))),
        };
        Self::record_score(operation, self.scorer.name(), start, result.is_ok());
        result
    }

    fn record_score(operation: &'static str, backend: &str, start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        let elapsed = start.elapsed().as_secs_f64();
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "backend" => backend.to_owned(),
            "operation" => operation,
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
            "backend" => backend.to_owned(),
            "operation" => operation,
        )
        .record(elapsed);
    }
}
