//! The codec seam used by every audio operation.
//!
//! Operations only need four things from a codec library: decode a file,
//! slice by milliseconds, export to a named format and report layout. Slicing
//! and layout live on [`AudioSegment`]; decode and export go through
//! [`AudioCodec`] so the concrete library can be swapped.

use std::path::Path;

use log::warn;

use crate::decode::decode_file;
use crate::encode::encode_file;
use crate::error::{AudioError, AudioResult};
use crate::ffmpeg::FfmpegEncoder;
use crate::format::ExportFormat;
use crate::segment::AudioSegment;

/// Decodes files into [`AudioSegment`]s and exports them again.
pub trait AudioCodec {
    /// Decode the file at `path`.
    fn decode(&self, path: &Path) -> AudioResult<AudioSegment>;

    /// Export `segment` to `path` in the format named by `format`.
    fn export(&self, segment: &AudioSegment, path: &Path, format: &str) -> AudioResult<()>;
}

/// Symphonia decoding with hound/PCM export, falling back to `ffmpeg` for
/// compressed formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodec;

impl AudioCodec for DefaultCodec {
    fn decode(&self, path: &Path) -> AudioResult<AudioSegment> {
        decode_file(path)
    }

    fn export(&self, segment: &AudioSegment, path: &Path, format: &str) -> AudioResult<()> {
        let format: ExportFormat = format.parse()?;
        if format.is_native() {
            return encode_file(segment, path, format);
        }

        match FfmpegEncoder::locate() {
            Some(ffmpeg) => ffmpeg.encode(segment, path, format),
            None => {
                warn!("ffmpeg not found on PATH; cannot export {}", format);
                Err(AudioError::UnsupportedFormat {
                    format: format.to_string(),
                })
            }
        }
    }
}
