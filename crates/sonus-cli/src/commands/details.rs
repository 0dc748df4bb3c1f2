//! Details command implementation

use anyhow::{Context, Result};
use sonus_audio::{get_audio_details, AudioCodec};
use std::path::Path;

use crate::output::CommandOutput;

/// Run the details command
///
/// # Arguments
/// * `codec` - Codec used to decode the input
/// * `infile` - Path to the input audio file
pub fn run<C: AudioCodec + ?Sized>(codec: &C, infile: &str) -> Result<CommandOutput> {
    let details = get_audio_details(codec, Path::new(infile))
        .with_context(|| format!("Failed to read details of '{}'", infile))?;
    Ok(CommandOutput::Details(details))
}
