//! Telemetry metric name constants.
//!
//! Centralised metric names for huginn operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `huginn_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `backend` — scorer backend name (e.g. "vader", "huggingface")
//! - `operation` — scoring granularity ("score_document" | "score_sentence")
//! - `status` — outcome: "ok" or "error"

/// Total scoring requests dispatched to a backend.
///
/// Labels: `backend`, `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "huginn_requests_total";

/// Scoring request duration in seconds.
///
/// Labels: `backend`, `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "huginn_request_duration_seconds";

/// Total sentences scored during per-sentence analysis.
///
/// Labels: `backend`.
pub const SENTENCE_SCORES_TOTAL: &str = "huginn_sentence_scores_total";

/// Total translations that failed and fell back to the original text.
///
/// Labels: `translator`.
pub const TRANSLATION_FALLBACKS_TOTAL: &str = "huginn_translation_fallbacks_total";

/// Total language detections that yielded no result.
///
/// Labels: `detector`.
pub const DETECTION_FAILURES_TOTAL: &str = "huginn_detection_failures_total";
