//! Report rendering.
//!
//! Pure, deterministic formatting of a [`DocumentReport`] into the single
//! text block handed to the UI layer. Identical reports render to
//! byte-identical output.

use crate::types::DocumentReport;

/// Fixed message returned for empty or whitespace-only input.
pub const EMPTY_INPUT_PROMPT: &str = "Please enter some text to analyze.";

/// Render a report as human-readable text.
///
/// Layout, in order: language preamble (only when a pipeline was active),
/// document sentiment line with emoji, score value line, sub-score line
/// when a breakdown is present, then the per-sentence section when
/// sentence results exist. All numbers are rounded to two decimals.
pub fn render_report(report: &DocumentReport) -> String {
    let mut out = String::new();

    if let Some(language) = &report.detected_language {
        if language.is_english() {
            out.push_str("Detected Language: English\n\n");
        } else {
            out.push_str(&format!("Detected Language: {}\n", language.name));
            out.push_str(&format!("Original Text: {}\n", report.original_text));
            if let Some(translated) = &report.translated_text {
                out.push_str(&format!("Translated to English: {translated}\n"));
            }
            out.push('\n');
        }
    }

    let score = &report.document_score;
    out.push_str(&format!(
        "Sentiment: {} {}\n",
        score.category.as_str(),
        score.category.emoji()
    ));
    out.push_str(&format!("{}: {:.2}\n", score.metric.label(), score.polarity));
    if let Some(breakdown) = &score.breakdown {
        out.push_str(&format!(
            "Positive: {:.2}, Negative: {:.2}, Neutral: {:.2}\n",
            breakdown.positive, breakdown.negative, breakdown.neutral
        ));
    }

    if !report.sentence_results.is_empty() {
        out.push_str("\nSentence-by-sentence analysis:\n");
        for sentence in &report.sentence_results {
            out.push_str(&format!("\u{2022} \"{}\"\n", sentence.text));
            if let Some(translated) = &sentence.translated {
                out.push_str(&format!("  Translated: \"{translated}\"\n"));
            }
            out.push_str(&format!(
                "  Sentiment: {} ({:.2})\n",
                sentence.score.category.as_str(),
                sentence.score.polarity
            ));
        }
    }

    out
}
