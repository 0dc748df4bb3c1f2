//! WER command implementation

use anyhow::{Context, Result};
use sonus_text::{align_words, compute_wer, tokenize};

use crate::output::{CommandOutput, WerReport};

/// Run the wer command
///
/// # Arguments
/// * `reference` - Reference transcript
/// * `hypothesis` - Hypothesis transcript
/// * `measures` - Whether to include edit counts
pub fn run(reference: &str, hypothesis: &str, measures: bool) -> Result<CommandOutput> {
    let wer = compute_wer(reference, hypothesis).context("Failed to compute word error rate")?;

    let measures = measures.then(|| align_words(&tokenize(reference), &tokenize(hypothesis)));

    Ok(CommandOutput::Wer(WerReport { wer, measures }))
}
