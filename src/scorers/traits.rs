//! The scoring backend seam.

use async_trait::async_trait;

use crate::Result;
use crate::types::ScoreResult;

/// A sentiment scoring backend.
///
/// Implementations normalize their native output — lexicon polarity,
/// compound score, or label plus confidence — into a [`ScoreResult`] using
/// their own documented category thresholds.
///
/// # Failure Semantics
///
/// `score` fails only when the underlying backend is unavailable or
/// unresponsive; it never returns a fabricated score. Backends performing
/// network I/O must bound it with a timeout and surface expiry as
/// [`BackendUnavailable`](crate::HuginnError::BackendUnavailable).
///
/// [`ScoreResult`]: crate::types::ScoreResult
#[async_trait]
pub trait ScorerBackend: Send + Sync {
    /// Backend name for logging/metrics.
    fn name(&self) -> &str;

    /// Score a single text.
    async fn score(&self, text: &str) -> Result<ScoreResult>;
}
