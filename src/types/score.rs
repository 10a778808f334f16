//! Normalized sentiment score types.
//!
//! Every scoring backend, regardless of its native output shape, produces a
//! [`ScoreResult`]. The category mapping is a pure function of the backend's
//! raw output via that backend's own documented thresholds; thresholds are
//! never shared across backend kinds.

use serde::{Deserialize, Serialize};

/// The three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Text expresses positive sentiment.
    Positive,
    /// Text expresses negative sentiment.
    Negative,
    /// Text is neutral or mixed.
    Neutral,
}

impl Category {
    /// Display name used in rendered reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Neutral => "Neutral",
        }
    }

    /// Emoji glyph used in rendered reports.
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Positive => "\u{1F60A}",
            Category::Negative => "\u{1F61E}",
            Category::Neutral => "\u{1F610}",
        }
    }

    /// Category for a lexicon polarity score in [-1, 1].
    ///
    /// Thresholds: above 0.1 is positive, below -0.1 is negative. The band
    /// is exclusive on both sides, so ±0.1 itself is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            Category::Positive
        } else if polarity < -0.1 {
            Category::Negative
        } else {
            Category::Neutral
        }
    }

    /// Category for a compound score in [-1, 1].
    ///
    /// Thresholds: 0.05 and above is positive, -0.05 and below is negative.
    /// Inclusive on both sides, matching the compound scorer's convention.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Category::Positive
        } else if compound <= -0.05 {
            Category::Negative
        } else {
            Category::Neutral
        }
    }
}

/// Which backend shape produced a [`ScoreResult`].
///
/// Tags the numeric value so the renderer can name it correctly; there is
/// no neutral band for [`ScoreMetric::Confidence`] — the category comes
/// straight from the classifier's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreMetric {
    /// Continuous lexicon polarity in [-1, 1].
    Polarity,
    /// Normalized compound score in [-1, 1].
    Compound,
    /// Classifier confidence in [0, 1].
    Confidence,
}

impl ScoreMetric {
    /// Label for the value line in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreMetric::Polarity => "Polarity Score",
            ScoreMetric::Compound => "Compound Score",
            ScoreMetric::Confidence => "Confidence",
        }
    }
}

/// Named sub-score proportions reported by the compound backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Proportion of the text judged positive (0.0 to 1.0).
    pub positive: f64,
    /// Proportion of the text judged negative (0.0 to 1.0).
    pub negative: f64,
    /// Proportion of the text judged neutral (0.0 to 1.0).
    pub neutral: f64,
}

/// A normalized sentiment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// The backend's numeric score, in the backend-defined range tagged
    /// by `metric`.
    pub polarity: f64,
    /// Which backend shape produced this score.
    pub metric: ScoreMetric,
    /// Category derived from the backend's own thresholds.
    pub category: Category,
    /// Named sub-scores, when the backend reports them.
    pub breakdown: Option<ScoreBreakdown>,
}
