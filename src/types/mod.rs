//! Public types for the Huginn API.

mod report;
mod score;

pub use report::{DetectedLanguage, DocumentReport, SentenceResult};
pub use score::{Category, ScoreBreakdown, ScoreMetric, ScoreResult};
