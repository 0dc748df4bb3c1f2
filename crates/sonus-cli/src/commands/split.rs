//! Split command implementation

use anyhow::{Context, Result};
use sonus_audio::{split_file_by_size, AudioCodec, AudioError};
use std::path::Path;

use crate::output::CommandOutput;

/// Run the split command
///
/// # Arguments
/// * `codec` - Codec used to decode the input and export chunks
/// * `infile` - Path to the input audio file
/// * `tmp_dir` - Directory prefix for the chunk files
/// * `chunk_size` - Target chunk size in KB (must be positive)
pub fn run<C: AudioCodec + ?Sized>(
    codec: &C,
    infile: &str,
    tmp_dir: &str,
    chunk_size: i64,
) -> Result<CommandOutput> {
    let chunk_size = positive_chunk_size(chunk_size)?;
    let chunks = split_file_by_size(codec, Path::new(infile), tmp_dir, chunk_size)
        .with_context(|| format!("Failed to split '{}'", infile))?;
    Ok(CommandOutput::Chunks(chunks))
}

fn positive_chunk_size(chunk_size: i64) -> Result<u64, AudioError> {
    u64::try_from(chunk_size)
        .ok()
        .filter(|&size| size > 0)
        .ok_or(AudioError::InvalidChunkSize { chunk_size })
}
