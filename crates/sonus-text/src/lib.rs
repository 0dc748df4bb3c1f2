//! Sonus Text
//!
//! Word error rate between a reference transcript and a hypothesis:
//! - [`align_words`] - word-level Levenshtein alignment with edit counts
//! - [`compute_wer`] - WER as a percentage
//! - [`WerScorer`] - the scoring seam, with [`LevenshteinScorer`] as default

pub mod alignment;
pub mod error;
pub mod wer;

pub use alignment::{align_words, tokenize, WordAlignment};
pub use error::{TextError, TextResult};
pub use wer::{compute_wer, compute_wer_with, LevenshteinScorer, WerScorer};
