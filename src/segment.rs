//! Sentence splitting.
//!
//! Splits on runs of sentence-terminal punctuation (`.`, `!`, `?`), trims
//! surrounding whitespace, and drops empty segments. This is a heuristic,
//! not a grammatical boundary detector: abbreviations and decimal numbers
//! may split incorrectly, which is accepted.

/// Split text into candidate sentences. Never fails.
pub fn split(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
