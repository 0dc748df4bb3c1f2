//! Export through an external `ffmpeg` binary.
//!
//! The segment is first written as a temporary WAV file, then ffmpeg
//! transcodes it into the requested container. Sample rate and channel count
//! carry over from the WAV header.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::encode::encode_file;
use crate::error::{AudioError, AudioResult};
use crate::format::ExportFormat;
use crate::segment::AudioSegment;

/// Encoder backed by an `ffmpeg` executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegEncoder {
    binary: PathBuf,
}

impl FfmpegEncoder {
    /// Find `ffmpeg` on `PATH`.
    pub fn locate() -> Option<Self> {
        which::which("ffmpeg").ok().map(Self::with_binary)
    }

    /// Use the given executable.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path of the executable.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Encode `segment` to `path` as `format`.
    ///
    /// Native formats are written directly without spawning ffmpeg.
    pub fn encode(&self, segment: &AudioSegment, path: &Path, format: ExportFormat) -> AudioResult<()> {
        let Some(muxer) = format.muxer() else {
            return encode_file(segment, path, format);
        };

        let staging = tempfile::Builder::new().prefix("sonus-").tempdir()?;
        let wav = staging.path().join("segment.wav");
        encode_file(segment, &wav, ExportFormat::Wav)?;

        debug!(
            "Running {} to write {} ({})",
            self.binary.display(),
            path.display(),
            muxer
        );
        let output = Command::new(&self.binary)
            .arg("-y")
            .args(["-loglevel", "error"])
            .arg("-i")
            .arg(&wav)
            .args(["-f", muxer])
            .arg(path)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("ffmpeg exited with {}", output.status),
                text => text.to_string(),
            };
            return Err(AudioError::encode(path.display().to_string(), message));
        }

        Ok(())
    }
}
