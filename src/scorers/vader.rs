//! VADER compound scoring backend.

use async_trait::async_trait;

use super::traits::ScorerBackend;
use crate::Result;
use crate::types::{Category, ScoreBreakdown, ScoreMetric, ScoreResult};

/// Rule-and-lexicon scorer producing a compound score in [-1, 1].
///
/// Delegates to the `vader_sentiment` crate. Categories use the compound
/// thresholds at ±0.05 (inclusive); the positive/negative/neutral
/// proportions are reported as the breakdown.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Create a new VADER scorer. Loads the bundled lexicon once.
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScorerBackend for VaderScorer {
    fn name(&self) -> &str {
        "vader"
    }

    async fn score(&self, text: &str) -> Result<ScoreResult> {
        let scores = self.analyzer.polarity_scores(text);

        let compound = scores.get("compound").copied().unwrap_or(0.0);
        let breakdown = ScoreBreakdown {
            positive: scores.get("pos").copied().unwrap_or(0.0),
            negative: scores.get("neg").copied().unwrap_or(0.0),
            neutral: scores.get("neu").copied().unwrap_or(0.0),
        };

        Ok(ScoreResult {
            polarity: compound,
            metric: ScoreMetric::Compound,
            category: Category::from_compound(compound),
            breakdown: Some(breakdown),
        })
    }
}
