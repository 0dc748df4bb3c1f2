//! File and stream metadata extraction.

use std::path::Path;

use serde::Serialize;

use crate::codec::AudioCodec;
use crate::error::AudioResult;
use crate::format::guess_mime_type;

/// Metadata derived from a decoded audio file.
///
/// Field order is the output order of the `details` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDetails {
    /// Path as given
    pub filepath: String,
    /// Parent directory (empty for a bare file name)
    pub dirpath: String,
    /// Final path component
    pub basename: String,
    /// Final path component without its extension
    pub filename: String,
    /// Extension without the leading dot
    pub extension: String,
    /// MIME type guessed from the extension
    pub mime_type: Option<String>,
    /// File size in KiB
    pub filesize: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Uncompressed bit rate estimate in bits per second
    pub bit_rate: u64,
    /// Frames per second
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
}

impl FileDetails {
    /// Returns `(key, value)` pairs in output order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("filepath", self.filepath.clone()),
            ("dirpath", self.dirpath.clone()),
            ("basename", self.basename.clone()),
            ("filename", self.filename.clone()),
            ("extension", self.extension.clone()),
            ("mime_type", self.mime_type.clone().unwrap_or_default()),
            ("filesize", format!("{:?}", self.filesize)),
            ("duration", format!("{:?}", self.duration)),
            ("bit_rate", self.bit_rate.to_string()),
            ("sample_rate", self.sample_rate.to_string()),
            ("channels", self.channels.to_string()),
        ]
    }
}

/// Decode `path` and report its metadata.
pub fn get_audio_details<C: AudioCodec + ?Sized>(codec: &C, path: &Path) -> AudioResult<FileDetails> {
    let audio = codec.decode(path)?;
    let byte_size = std::fs::metadata(path)?.len();

    let lossy = |s: Option<&std::ffi::OsStr>| {
        s.map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    Ok(FileDetails {
        filepath: path.to_string_lossy().into_owned(),
        dirpath: path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default(),
        basename: lossy(path.file_name()),
        filename: lossy(path.file_stem()),
        extension: lossy(path.extension()),
        mime_type: guess_mime_type(path).map(str::to_string),
        filesize: byte_size as f64 / 1024.0,
        duration: audio.duration_seconds(),
        bit_rate: audio.bit_rate(),
        sample_rate: audio.frame_rate(),
        channels: audio.channels(),
    })
}
