//! Wiremock tests for the translation pipeline and its fallback behavior.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huginn::{
    Category, DetectedLanguage, HttpTranslator, Huginn, LanguageDetector, LanguagePipeline,
    Result, ScoreMetric, ScoreResult, ScorerBackend, Translator, TranslationOutcome,
    WhatlangDetector,
};

// ============================================================================
// Stubs
// ============================================================================

/// Always reports the given language, so tests control the translation path
/// without depending on real detection.
struct FixedDetector {
    code: &'static str,
    name: &'static str,
}

impl LanguageDetector for FixedDetector {
    fn name(&self) -> &str {
        "fixed"
    }

    fn detect(&self, _text: &str) -> Option<DetectedLanguage> {
        Some(DetectedLanguage::new(self.code, self.name))
    }
}

/// Records every text it is asked to score.
struct RecordingScorer {
    texts: Arc<Mutex<Vec<String>>>,
}

impl RecordingScorer {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let texts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                texts: texts.clone(),
            },
            texts,
        )
    }
}

#[async_trait]
impl ScorerBackend for RecordingScorer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn score(&self, text: &str) -> Result<ScoreResult> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(ScoreResult {
            polarity: 0.5,
            metric: ScoreMetric::Compound,
            category: Category::Positive,
            breakdown: None,
        })
    }
}

// ============================================================================
// Translator client
// ============================================================================

#[tokio::test]
async fn translate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_partial_json(serde_json::json!({"target": "en"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "translatedText": "I am very happy with this service"
        })))
        .mount(&mock_server)
        .await;

    let translator = HttpTranslator::with_base_url(mock_server.uri());
    let result = translator
        .translate("Saya sangat senang dengan layanan ini", "ind")
        .await;

    assert_eq!(result.unwrap(), "I am very happy with this service");
}

#[tokio::test]
async fn translate_server_error_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let translator = HttpTranslator::with_base_url(mock_server.uri());
    let result = translator.translate("Saya senang", "ind").await;

    let err = result.unwrap_err();
    assert!(err.is_backend_unavailable());
}

// ============================================================================
// Pipeline fallback semantics
// ============================================================================

#[tokio::test]
async fn pipeline_recovers_translation_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let pipeline = LanguagePipeline::new(
        Arc::new(WhatlangDetector::new()),
        Arc::new(HttpTranslator::with_base_url(mock_server.uri())),
    );

    let outcome = pipeline.to_english("Saya senang", "ind").await;
    assert_eq!(outcome, TranslationOutcome::Failed);
}

// ============================================================================
// End-to-end analysis with translation
// ============================================================================

#[tokio::test]
async fn non_english_document_is_translated_before_scoring() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "translatedText": "I am very happy"
        })))
        .mount(&mock_server)
        .await;

    let (scorer, texts) = RecordingScorer::new();
    let pipeline = LanguagePipeline::new(
        Arc::new(FixedDetector {
            code: "ind",
            name: "Indonesian",
        }),
        Arc::new(HttpTranslator::with_base_url(mock_server.uri())),
    );
    let analyzer = Huginn::builder()
        .scorer(Arc::new(scorer))
        .language_pipeline(pipeline)
        .build()
        .unwrap();

    let report = analyzer.analyze("Saya sangat senang").await.unwrap();

    assert_eq!(
        report.detected_language,
        Some(DetectedLanguage::new("ind", "Indonesian"))
    );
    assert_eq!(report.translated_text.as_deref(), Some("I am very happy"));
    assert!(!report.translation_failed);
    assert_eq!(report.original_text, "Saya sangat senang");
    // The backend saw the translation, not the original.
    assert_eq!(texts.lock().unwrap().as_slice(), ["I am very happy"]);
}

#[tokio::test]
async fn translation_failure_falls_back_to_original_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let (scorer, texts) = RecordingScorer::new();
    let pipeline = LanguagePipeline::new(
        Arc::new(FixedDetector {
            code: "ind",
            name: "Indonesian",
        }),
        Arc::new(HttpTranslator::with_base_url(mock_server.uri())),
    );
    let analyzer = Huginn::builder()
        .scorer(Arc::new(scorer))
        .language_pipeline(pipeline)
        .build()
        .unwrap();

    // No error escapes; the report reflects the fallback.
    let report = analyzer.analyze("Saya sangat senang").await.unwrap();

    assert!(report.translation_failed);
    assert!(report.translated_text.is_none());
    assert_eq!(
        report.detected_language,
        Some(DetectedLanguage::new("ind", "Indonesian"))
    );
    assert_eq!(texts.lock().unwrap().as_slice(), ["Saya sangat senang"]);
}

#[tokio::test]
async fn english_document_skips_translation() {
    let mock_server = MockServer::start().await;
    // Mount no /translate mock: any request would 404 and fail the scoring
    // expectations below if translation were attempted.
    let (scorer, texts) = RecordingScorer::new();
    let pipeline = LanguagePipeline::new(
        Arc::new(FixedDetector {
            code: "eng",
            name: "English",
        }),
        Arc::new(HttpTranslator::with_base_url(mock_server.uri())),
    );
    let analyzer = Huginn::builder()
        .scorer(Arc::new(scorer))
        .language_pipeline(pipeline)
        .build()
        .unwrap();

    let report = analyzer.analyze("I am happy").await.unwrap();

    assert!(report.translated_text.is_none());
    assert!(!report.translation_failed);
    assert_eq!(texts.lock().unwrap().as_slice(), ["I am happy"]);
}

#[tokio::test]
async fn sentences_are_translated_individually() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3) // document + two sentences, each degrading gracefully
        .mount(&mock_server)
        .await;

    let (scorer, texts) = RecordingScorer::new();
    let pipeline = LanguagePipeline::new(
        Arc::new(FixedDetector {
            code: "ind",
            name: "Indonesian",
        }),
        Arc::new(HttpTranslator::with_base_url(mock_server.uri())),
    );
    let analyzer = Huginn::builder()
        .scorer(Arc::new(scorer))
        .language_pipeline(pipeline)
        .build()
        .unwrap();

    let report = analyzer
        .analyze("Saya senang. Pelayanannya lambat.")
        .await
        .unwrap();

    assert_eq!(report.sentence_results.len(), 2);
    // Document translation failed, so sentences come from the original text
    // and their own translation attempts also fell back.
    assert_eq!(
        texts.lock().unwrap().as_slice(),
        [
            "Saya senang. Pelayanannya lambat.",
            "Saya senang",
            "Pelayanannya lambat"
        ]
    );
    for sentence in &report.sentence_results {
        assert!(sentence.translated.is_none());
    }
}
