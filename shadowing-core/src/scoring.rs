//! Word-match scoring of recognized attempts against turn text
//!
//! Scoring never fails: empty originals, empty attempts, and missing
//! recognition entries all resolve to a score of 0 so callers need no
//! failure handling around a scoring pass.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{SessionReport, Turn, TurnResult};

/// Strips everything that is neither a word character nor whitespace
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("pattern is valid"));

/// Lowercase, strip punctuation, split on whitespace
fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Percentage of original tokens (with repetition) found anywhere in
/// the deduplicated token set of the recognized text.
///
/// Case- and punctuation-insensitive, order-insensitive. An original
/// with no tokens after normalization scores 0.
pub fn word_match_score(original: &str, recognized: &str) -> f64 {
    let original_words = normalize(original);
    if original_words.is_empty() {
        return 0.0;
    }

    let recognized_set: HashSet<String> = normalize(recognized).into_iter().collect();
    let matches = original_words
        .iter()
        .filter(|word| recognized_set.contains(*word))
        .count();

    (matches as f64 / original_words.len() as f64) * 100.0
}

/// Score every turn against its positionally aligned recognized attempt.
///
/// Returns exactly one score and one [`TurnResult`] per turn. Turns
/// beyond the end of `recognized` get an empty attempt and a score of
/// 0; surplus recognized entries are ignored.
pub fn score_turns(turns: &[Turn], recognized: &[String]) -> (Vec<f64>, Vec<TurnResult>) {
    let mut turn_scores = Vec::with_capacity(turns.len());
    let mut turn_results = Vec::with_capacity(turns.len());

    for (i, turn) in turns.iter().enumerate() {
        let attempt = recognized.get(i).map(String::as_str).unwrap_or("");
        let score = if attempt.is_empty() {
            0.0
        } else {
            word_match_score(&turn.text, attempt)
        };

        turn_scores.push(score);
        turn_results.push(TurnResult {
            turn_id: turn.id,
            original: turn.text.clone(),
            recognized: attempt.to_string(),
            score,
        });
    }

    (turn_scores, turn_results)
}

/// Unweighted mean of per-turn scores, 0 for an empty sequence
pub fn total_score(turn_scores: &[f64]) -> f64 {
    if turn_scores.is_empty() {
        return 0.0;
    }
    turn_scores.iter().sum::<f64>() / turn_scores.len() as f64
}

/// Run a full scoring pass and bundle the outcome
pub fn report(turns: &[Turn], recognized: &[String]) -> SessionReport {
    let (turn_scores, turn_results) = score_turns(turns, recognized);
    SessionReport {
        total_score: total_score(&turn_scores),
        turn_scores,
        turn_results,
    }
}
