//! Scoring backends.
//!
//! Each backend normalizes its native output shape into a
//! [`ScoreResult`](crate::types::ScoreResult) behind the [`ScorerBackend`]
//! trait. The backend is selected once at construction time, not at call
//! time.

pub(crate) mod huggingface;
mod lexicon;
mod traits;
mod vader;

pub use huggingface::{DEFAULT_SENTIMENT_MODEL, HfSentimentClient};
pub use lexicon::LexiconScorer;
pub use traits::ScorerBackend;
pub use vader::VaderScorer;
