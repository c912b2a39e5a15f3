//! Data types shared between the segmenter and the scorer

use serde::{Deserialize, Serialize};

/// One speaking unit: a contiguous span of full sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Sequential identifier, 1-based in segmentation order
    pub id: u32,
    /// The turn text, terminal punctuation included
    pub text: String,
    /// Number of whitespace-delimited tokens in `text`
    pub word_count: usize,
}

impl Turn {
    /// Create a turn, deriving the word count from the text
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = count_words(&text);
        Self {
            id,
            text,
            word_count,
        }
    }
}

/// Scoring outcome for a single turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Id of the scored turn
    pub turn_id: u32,
    /// Original turn text
    pub original: String,
    /// Recognized attempt, empty when none was supplied
    pub recognized: String,
    /// Word-match score in [0, 100]
    pub score: f64,
}

/// Complete outcome of one scoring pass over a turn sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Mean of `turn_scores`, 0 when no turns were scored
    pub total_score: f64,
    /// Per-turn scores aligned with `turn_results`
    pub turn_scores: Vec<f64>,
    /// Per-turn detail records
    pub turn_results: Vec<TurnResult>,
}

/// Count whitespace-delimited, non-empty tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
