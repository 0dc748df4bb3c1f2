//! Word error rate.

use log::debug;

use crate::alignment::{align_words, tokenize};
use crate::error::{TextError, TextResult};

/// Scores a hypothesis word sequence against a reference.
pub trait WerScorer {
    /// Word error rate as a ratio (0.0 is a perfect match, may exceed 1.0).
    fn word_error_rate(&self, reference: &[&str], hypothesis: &[&str]) -> TextResult<f64>;
}

/// Word-level Levenshtein scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer;

impl WerScorer for LevenshteinScorer {
    fn word_error_rate(&self, reference: &[&str], hypothesis: &[&str]) -> TextResult<f64> {
        let alignment = align_words(reference, hypothesis);
        debug!("Word alignment: {:?}", alignment);
        alignment.wer().ok_or(TextError::EmptyReference)
    }
}

/// Word error rate between `reference` and `hypothesis`, as a percentage.
///
/// An empty string on either side is a total mismatch (100) and is not
/// aligned. A reference made only of whitespace has no words and is an error.
pub fn compute_wer(reference: &str, hypothesis: &str) -> TextResult<f64> {
    compute_wer_with(&LevenshteinScorer, reference, hypothesis)
}

/// [`compute_wer`] with a caller-provided scorer.
pub fn compute_wer_with<S: WerScorer + ?Sized>(
    scorer: &S,
    reference: &str,
    hypothesis: &str,
) -> TextResult<f64> {
    if reference.is_empty() || hypothesis.is_empty() {
        return Ok(100.0);
    }

    let reference = tokenize(reference);
    let hypothesis = tokenize(hypothesis);
    Ok(scorer.word_error_rate(&reference, &hypothesis)? * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wer_identical_is_zero() {
        assert_eq!(compute_wer("the cat sat", "the cat sat").unwrap(), 0.0);
    }

    #[test]
    fn test_wer_all_wrong_is_hundred() {
        assert_eq!(compute_wer("the cat sat", "a dog ran").unwrap(), 100.0);
    }

    #[test]
    fn test_wer_empty_short_circuits() {
        assert_eq!(compute_wer("the cat", "").unwrap(), 100.0);
        assert_eq!(compute_wer("", "the cat").unwrap(), 100.0);
        assert_eq!(compute_wer("", "").unwrap(), 100.0);
    }

    #[test]
    fn test_wer_partial() {
        let wer = compute_wer("the cat sat down", "the cat sat").unwrap();
        assert_eq!(wer, 25.0);
    }

    #[test]
    fn test_wer_can_exceed_hundred() {
        let wer = compute_wer("hi", "oh hi there").unwrap();
        assert_eq!(wer, 200.0);
    }

    #[test]
    fn test_wer_whitespace_only_sides() {
        assert_eq!(compute_wer("   ", "words"), Err(TextError::EmptyReference));
        assert_eq!(compute_wer("some words", "  ").unwrap(), 100.0);
    }

    #[test]
    fn test_wer_uses_given_scorer() {
        struct Fixed;
        impl WerScorer for Fixed {
            fn word_error_rate(&self, _: &[&str], _: &[&str]) -> TextResult<f64> {
                Ok(0.125)
            }
        }
        assert_eq!(compute_wer_with(&Fixed, "a", "b").unwrap(), 12.5);
        assert_eq!(compute_wer_with(&Fixed, "", "b").unwrap(), 100.0);
    }
}
