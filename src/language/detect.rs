//! Language identification via whatlang.

use super::LanguageDetector;
use crate::types::DetectedLanguage;

/// Detector backed by the `whatlang` crate. Pure computation, no I/O.
pub struct WhatlangDetector;

impl WhatlangDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn name(&self) -> &str {
        "whatlang"
    }

    fn detect(&self, text: &str) -> Option<DetectedLanguage> {
        whatlang::detect(text)
            .map(|info| DetectedLanguage::new(info.lang().code(), info.lang().eng_name()))
    }
}
