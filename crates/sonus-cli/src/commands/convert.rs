//! Convert command implementation

use anyhow::{Context, Result};
use sonus_audio::{convert_audio_file, AudioCodec};
use std::path::Path;

use crate::output::CommandOutput;

/// Run the convert command
///
/// # Arguments
/// * `codec` - Codec used to decode and encode
/// * `infile` - Path to the input audio file
/// * `outfile` - Path of the converted file
/// * `outfile_format` - Format of the converted file
/// * `channels` - Channel count of the converted file, if it should change
pub fn run<C: AudioCodec + ?Sized>(
    codec: &C,
    infile: &str,
    outfile: &str,
    outfile_format: &str,
    channels: Option<u16>,
) -> Result<CommandOutput> {
    convert_audio_file(
        codec,
        Path::new(infile),
        Path::new(outfile),
        outfile_format,
        channels,
    )
    .with_context(|| format!("Failed to convert '{}'", infile))?;

    Ok(CommandOutput::Empty)
}
