//! AFINN lexicon scoring backend.

use async_trait::async_trait;

use super::traits::ScorerBackend;
use crate::Result;
use crate::types::{Category, ScoreMetric, ScoreResult};

/// Lexicon-based scorer producing continuous polarity in [-1, 1].
///
/// Word scoring is delegated to the AFINN-based `sentiment` crate. The
/// per-token comparative score is normalized into [-1, 1]; categories use
/// the polarity thresholds at ±0.1.
pub struct LexiconScorer;

impl LexiconScorer {
    /// Create a new lexicon scorer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScorerBackend for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn score(&self, text: &str) -> Result<ScoreResult> {
        let analysis = sentiment::analyze(text.to_string());

        // comparative is the summed word score averaged over tokens; AFINN
        // word scores span [-5, 5], so this lands in [-1, 1].
        let polarity = (f64::from(analysis.comparative) / 5.0).clamp(-1.0, 1.0);

        Ok(ScoreResult {
            polarity,
            metric: ScoreMetric::Polarity,
            category: Category::from_polarity(polarity),
            breakdown: None,
        })
    }
}
