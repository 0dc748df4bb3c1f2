//! Export formats and MIME type lookup.

use std::path::Path;
use std::str::FromStr;

use crate::error::AudioError;

/// Known audio extensions and their MIME types.
const MIME_TYPES: &[(&str, &str)] = &[
    ("wav", "audio/x-wav"),
    ("wave", "audio/x-wav"),
    ("mp3", "audio/mpeg"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("opus", "audio/opus"),
    ("m4a", "audio/mp4"),
    ("mp4", "video/mp4"),
    ("aac", "audio/aac"),
    ("aif", "audio/x-aiff"),
    ("aiff", "audio/x-aiff"),
    ("aifc", "audio/x-aiff"),
    ("webm", "audio/webm"),
    ("mka", "audio/x-matroska"),
    ("caf", "audio/x-caf"),
    ("raw", "audio/basic"),
];

/// Guess the MIME type of a file from its extension.
pub fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Formats the default codec can encode.
///
/// WAV and raw PCM are written in-process. Every other format is handed to
/// an `ffmpeg` binary, with [`ExportFormat::muxer`] naming its output muxer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// RIFF WAVE with integer PCM samples
    Wav,
    /// Headerless little-endian signed PCM
    Raw,
    /// MPEG-1 Layer III
    Mp3,
    /// Free Lossless Audio Codec
    Flac,
    /// Ogg container, ffmpeg's default Ogg codec
    Ogg,
    /// Opus in Ogg
    Opus,
    /// AAC in an MPEG-4 container
    M4a,
    /// Raw ADTS AAC stream
    Aac,
    /// Audio Interchange File Format
    Aiff,
    /// WebM audio
    Webm,
}

impl ExportFormat {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Wav => "wav",
            ExportFormat::Raw => "raw",
            ExportFormat::Mp3 => "mp3",
            ExportFormat::Flac => "flac",
            ExportFormat::Ogg => "ogg",
            ExportFormat::Opus => "opus",
            ExportFormat::M4a => "m4a",
            ExportFormat::Aac => "aac",
            ExportFormat::Aiff => "aiff",
            ExportFormat::Webm => "webm",
        }
    }

    /// The ffmpeg muxer for formats not encoded in-process.
    pub fn muxer(&self) -> Option<&'static str> {
        match self {
            ExportFormat::Wav | ExportFormat::Raw => None,
            ExportFormat::Mp3 => Some("mp3"),
            ExportFormat::Flac => Some("flac"),
            ExportFormat::Ogg => Some("ogg"),
            ExportFormat::Opus => Some("opus"),
            ExportFormat::M4a => Some("ipod"),
            ExportFormat::Aac => Some("adts"),
            ExportFormat::Aiff => Some("aiff"),
            ExportFormat::Webm => Some("webm"),
        }
    }

    /// Whether the format is encoded without ffmpeg.
    pub fn is_native(&self) -> bool {
        self.muxer().is_none()
    }
}

impl FromStr for ExportFormat {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wav" | "wave" => Ok(ExportFormat::Wav),
            "raw" | "pcm" => Ok(ExportFormat::Raw),
            "mp3" => Ok(ExportFormat::Mp3),
            "flac" => Ok(ExportFormat::Flac),
            "ogg" | "oga" => Ok(ExportFormat::Ogg),
            "opus" => Ok(ExportFormat::Opus),
            "m4a" | "mp4" => Ok(ExportFormat::M4a),
            "aac" => Ok(ExportFormat::Aac),
            "aif" | "aiff" => Ok(ExportFormat::Aiff),
            "webm" => Ok(ExportFormat::Webm),
            _ => Err(AudioError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
