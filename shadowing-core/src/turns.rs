//! Greedy packing of sentences into bounded speaking turns
//!
//! Sentences are consumed left to right. A sentence of ten or more
//! words always stands alone. Shorter sentences accumulate until the
//! turn reaches ten words, but a merge that would push a multi-sentence
//! turn to thirty words is refused, so accumulated turns top out at 29.

use crate::splitter::split_sentences;
use crate::types::{count_words, Turn};

/// Word count at which a single sentence becomes its own turn
const STANDALONE_WORDS: usize = 10;

/// Prospective word count at which accumulation stops
const MAX_TURN_WORDS: usize = 30;

/// Segment raw text into an ordered sequence of turns.
///
/// Ids are assigned 1..=N in emission order. Whitespace-only input
/// yields an empty sequence.
pub fn build_turns(content: &str) -> Vec<Turn> {
    let sentences = split_sentences(content);

    let mut turns = Vec::new();
    let mut turn_id = 1u32;
    let mut i = 0;

    while i < sentences.len() {
        let sentence = &sentences[i];
        let sentence_words = count_words(sentence);

        if sentence_words >= STANDALONE_WORDS {
            // A long sentence never merges with anything
            turns.push(Turn {
                id: turn_id,
                text: sentence.clone(),
                word_count: sentence_words,
            });
            turn_id += 1;
            i += 1;
            continue;
        }

        let mut current = sentence.clone();
        let mut current_words = sentence_words;
        i += 1;

        while i < sentences.len() && current_words < STANDALONE_WORDS {
            let next = &sentences[i];
            let merged = format!("{current} {next}");
            let merged_words = count_words(&merged);

            // Look-ahead check: refuse the merge, not the turn
            if merged_words >= MAX_TURN_WORDS {
                break;
            }

            current = merged;
            current_words = merged_words;
            i += 1;
        }

        turns.push(Turn {
            id: turn_id,
            text: current,
            word_count: current_words,
        });
        turn_id += 1;
    }

    turns
}
