//! Huginn - Unified sentiment analysis gateway
//!
//! This crate provides a stable [`ScorerBackend`] trait that abstracts over
//! heterogeneous sentiment scoring backends — lexicon polarity, compound
//! score, or classifier label plus confidence — and an [`Analyzer`] that
//! aggregates document-level and per-sentence sentiment into a rendered
//! report.
//!
//! # Example
//!
//! ```rust,no_run
//! use huginn::Huginn;
//!
//! #[tokio::main]
//! async fn main() -> huginn::Result<()> {
//!     let analyzer = Huginn::builder().vader().build()?;
//!
//!     let output = analyzer
//!         .render("I love this product! It's amazing and works perfectly.")
//!         .await?;
//!
//!     println!("{output}");
//!     Ok(())
//! }
//! ```
//!
//! # Multilingual Example
//!
//! Non-English input is detected and translated to English before scoring;
//! translation failures degrade gracefully to the original text.
//!
//! ```rust,no_run
//! use huginn::Huginn;
//!
//! #[tokio::main]
//! async fn main() -> huginn::Result<()> {
//!     let analyzer = Huginn::builder().vader().multilingual().build()?;
//!
//!     let output = analyzer
//!         .render("Saya sangat senang dengan layanan ini. Terima kasih!")
//!         .await?;
//!
//!     println!("{output}");
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod error;
pub mod language;
pub mod render;
pub mod scorers;
pub mod segment;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use analyzer::{Analyzer, Huginn, HuginnBuilder};
pub use error::{HuginnError, Result};
pub use render::{EMPTY_INPUT_PROMPT, render_report};
pub use scorers::{HfSentimentClient, LexiconScorer, ScorerBackend, VaderScorer};

// Re-export language pipeline types
pub use language::{
    HttpTranslator, LanguageDetector, LanguagePipeline, TranslationOutcome, Translator,
    WhatlangDetector,
};

// Re-export all result types
pub use types::{
    Category, DetectedLanguage, DocumentReport, ScoreBreakdown, ScoreMetric, ScoreResult,
    SentenceResult,
};
