//! Per-request analysis results.
//!
//! One [`DocumentReport`] is produced per analysis request. Nothing here is
//! mutated after construction and no state is shared across requests.

use serde::{Deserialize, Serialize};

use super::score::ScoreResult;

/// A detected source language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    /// ISO language code as reported by the detector (e.g. "eng", "ind"),
    /// or "unknown" when detection yielded nothing.
    pub code: String,
    /// English display name (e.g. "Indonesian"), "unknown" when undetected.
    pub name: String,
}

impl DetectedLanguage {
    /// Create a detected language from code and display name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The sentinel value recorded when detection yields nothing.
    pub fn unknown() -> Self {
        Self::new("unknown", "unknown")
    }

    /// Whether the detected language is English.
    ///
    /// Accepts both ISO 639-1 and 639-3 codes so custom detectors can
    /// report either.
    pub fn is_english(&self) -> bool {
        matches!(self.code.as_str(), "en" | "eng")
    }
}

/// Sentiment of a single sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceResult {
    /// The sentence as it appears in the analyzed text.
    pub text: String,
    /// English translation, when this sentence was individually translated.
    pub translated: Option<String>,
    /// The sentence's normalized score.
    pub score: ScoreResult,
}

/// Full result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// The submitted text, unmodified.
    pub original_text: String,
    /// Detected source language. `Some` iff a language pipeline was active.
    pub detected_language: Option<DetectedLanguage>,
    /// English translation of the document, when one was produced.
    pub translated_text: Option<String>,
    /// True when translation was attempted and failed; scoring then ran
    /// against the original text.
    pub translation_failed: bool,
    /// Document-level score.
    pub document_score: ScoreResult,
    /// Per-sentence scores in original order. Empty when the document did
    /// not trigger per-sentence analysis.
    pub sentence_results: Vec<SentenceResult>,
}
