//! Sentence splitting on terminal punctuation
//!
//! Splits raw text into complete sentences, each ending in exactly one
//! of `.`, `!`, `?`. A trailing fragment without a terminator gets a
//! synthesized period so every emitted sentence is well formed.

/// Characters that end a sentence
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split text into complete sentences, terminators retained.
///
/// Empty or whitespace-only input yields no sentences. Runs of
/// consecutive terminators produce empty intermediate pieces, which
/// are discarded rather than emitted as spurious sentences.
pub fn split_sentences(content: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut piece = String::new();

    for ch in content.chars() {
        if TERMINATORS.contains(&ch) {
            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                sentences.push(format!("{trimmed}{ch}"));
            }
            piece.clear();
        } else {
            piece.push(ch);
        }
    }

    // Trailing fragment without a terminator gets a synthesized period
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(format!("{trimmed}."));
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("The cat sat. It was raining!");
        assert_eq!(sentences, vec!["The cat sat.", "It was raining!"]);
    }

    #[test]
    fn test_terminator_identity_preserved() {
        let sentences = split_sentences("Really? Yes! Fine.");
        assert_eq!(sentences, vec!["Really?", "Yes!", "Fine."]);
    }

    #[test]
    fn test_trailing_fragment_gets_period() {
        let sentences = split_sentences("No punctuation here");
        assert_eq!(sentences, vec!["No punctuation here."]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_consecutive_terminators_discarded() {
        let sentences = split_sentences("Wait... really?");
        assert_eq!(sentences, vec!["Wait.", "really?"]);
    }

    #[test]
    fn test_only_punctuation_yields_nothing() {
        assert!(split_sentences("...!?").is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let sentences = split_sentences("  Hello there.  General Kenobi!  ");
        assert_eq!(sentences, vec!["Hello there.", "General Kenobi!"]);
    }
}
