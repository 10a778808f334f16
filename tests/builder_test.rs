//! Builder configuration tests.

use std::sync::Arc;

use async_trait::async_trait;

use huginn::{
    Category, Huginn, HuginnError, Result, ScoreMetric, ScoreResult, ScorerBackend,
};

struct NeutralScorer;

#[async_trait]
impl ScorerBackend for NeutralScorer {
    fn name(&self) -> &str {
        "neutral-stub"
    }

    async fn score(&self, _text: &str) -> Result<ScoreResult> {
        Ok(ScoreResult {
            polarity: 0.0,
            metric: ScoreMetric::Polarity,
            category: Category::Neutral,
            breakdown: None,
        })
    }
}

#[test]
fn build_without_backend_fails() {
    let err = Huginn::builder().build().unwrap_err();
    assert!(matches!(err, HuginnError::NoBackend));
}

#[test]
fn lexicon_backend_builds() {
    let analyzer = Huginn::builder().lexicon().build().unwrap();
    assert_eq!(analyzer.backend_name(), "lexicon");
    assert!(!analyzer.is_multilingual());
}

#[test]
fn vader_backend_builds() {
    let analyzer = Huginn::builder().vader().build().unwrap();
    assert_eq!(analyzer.backend_name(), "vader");
}

#[test]
fn huggingface_backend_builds() {
    let analyzer = Huginn::builder().huggingface("hf_test_key").build().unwrap();
    assert_eq!(analyzer.backend_name(), "huggingface");
}

#[test]
fn custom_scorer_is_used() {
    let analyzer = Huginn::builder()
        .scorer(Arc::new(NeutralScorer))
        .build()
        .unwrap();
    assert_eq!(analyzer.backend_name(), "neutral-stub");
}

#[test]
fn later_backend_selection_wins() {
    let analyzer = Huginn::builder().lexicon().vader().build().unwrap();
    assert_eq!(analyzer.backend_name(), "vader");
}

#[test]
fn multilingual_enables_language_pipeline() {
    let analyzer = Huginn::builder().vader().multilingual().build().unwrap();
    assert!(analyzer.is_multilingual());
}

#[test]
fn translation_url_implies_multilingual() {
    let analyzer = Huginn::builder()
        .vader()
        .translation_url("http://localhost:5000")
        .build()
        .unwrap();
    assert!(analyzer.is_multilingual());
}

#[tokio::test]
async fn built_analyzer_analyzes() {
    let analyzer = Huginn::builder().vader().timeout(5).build().unwrap();
    let report = analyzer.analyze("I love this!").await.unwrap();
    assert_eq!(report.document_score.category, Category::Positive);
    assert!(report.detected_language.is_none());
}
