//! Format and channel conversion.

use std::path::Path;

use log::info;

use crate::codec::AudioCodec;
use crate::error::AudioResult;

/// Convert an audio file to another format, optionally remixing channels.
///
/// # Arguments
/// * `codec` - Codec used to decode the input and encode the output
/// * `infile` - Path to the input audio file
/// * `outfile` - Path of the converted file
/// * `outfile_format` - Format name of the converted file (e.g. `wav`)
/// * `channels` - Channel count of the converted file, if it should change
pub fn convert_audio_file<C: AudioCodec + ?Sized>(
    codec: &C,
    infile: &Path,
    outfile: &Path,
    outfile_format: &str,
    channels: Option<u16>,
) -> AudioResult<()> {
    let mut audio = codec.decode(infile)?;

    if let Some(channels) = channels {
        audio = audio.set_channels(channels)?;
    }

    codec.export(&audio, outfile, outfile_format)?;
    info!(
        "Converted {} -> {} ({}, {} channels)",
        infile.display(),
        outfile.display(),
        outfile_format,
        audio.channels()
    );

    Ok(())
}
