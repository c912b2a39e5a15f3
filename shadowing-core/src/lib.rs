//! Turn segmentation and word-match scoring for shadowing practice
//!
//! This crate is the pure core of a shadowing trainer: it splits an
//! English passage into bounded-length speaking turns and scores a
//! learner's recognized re-attempt of each turn against the original
//! text. It performs no I/O and holds no cross-call state; audio,
//! speech recognition, and persistence belong to the caller.
//!
//! # Example
//!
//! ```
//! use shadowing_core::{segment, score_turns, total_score};
//!
//! let turns = segment("The cat sat. It was raining heavily outside today loudly.").unwrap();
//! assert_eq!(turns.len(), 1);
//!
//! let recognized = vec!["the cat sat it was raining heavily outside today loudly".to_string()];
//! let (scores, results) = score_turns(&turns, &recognized);
//! assert_eq!(scores, vec![100.0]);
//! assert_eq!(results.len(), 1);
//! assert_eq!(total_score(&scores), 100.0);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod scoring;
pub mod splitter;
pub mod turns;
pub mod types;

// Re-export key types
pub use error::{CoreError, Result, MAX_PASSAGE_WORDS, MIN_PASSAGE_WORDS};
pub use scoring::{report, score_turns, total_score, word_match_score};
pub use types::{SessionReport, Turn, TurnResult};

use types::count_words;

/// Segment a passage into an ordered sequence of speaking turns.
///
/// Whitespace-only input yields `Ok` with an empty sequence; callers
/// must handle the no-turns outcome. Any internal failure surfaces as
/// a single [`CoreError::Segmentation`] with no partial sequence.
pub fn segment(content: &str) -> Result<Vec<Turn>> {
    let turns = turns::build_turns(content);

    // Ids are assigned from a u32 counter; a passage large enough to
    // overflow it cannot produce a coherent result.
    if u32::try_from(turns.len()).is_err() {
        return Err(CoreError::Segmentation {
            operation: "turn id assignment".to_string(),
            reason: format!("{} turns exceed the id range", turns.len()),
        });
    }

    Ok(turns)
}

/// Check a passage against the practice length bounds (50..=300 words).
///
/// Returns the word count on success. [`segment`] does not call this;
/// orchestration layers opt in where exercise-sized input is expected.
pub fn validate_passage(content: &str) -> Result<usize> {
    let words = count_words(content);
    if words < MIN_PASSAGE_WORDS {
        return Err(CoreError::PassageTooShort { words });
    }
    if words > MAX_PASSAGE_WORDS {
        return Err(CoreError::PassageTooLong { words });
    }
    Ok(words)
}
