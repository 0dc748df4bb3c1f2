//! Sonus Audio
//!
//! Audio file utilities behind the `sonus` command-line tool:
//! - [`convert_audio_file`] - re-encode a file to another format and channel count
//! - [`get_audio_details`] - report path, size and stream metadata
//! - [`split_file_by_size`] - split a file into chunks of roughly N kilobytes
//!
//! # Codecs
//!
//! Every operation takes an [`AudioCodec`]. [`DefaultCodec`] decodes anything
//! symphonia understands (WAV, FLAC, OGG/Vorbis, MP3, AAC/M4A, ALAC). It
//! exports WAV through hound and headerless PCM directly; MP3, FLAC, OGG,
//! Opus, M4A, AAC, AIFF and WebM go through an `ffmpeg` binary on `PATH`.
//!
//! # Example
//!
//! ```ignore
//! use sonus_audio::{split_file_by_size, DefaultCodec};
//! use std::path::Path;
//!
//! let chunks = split_file_by_size(&DefaultCodec, Path::new("talk.wav"), "/tmp/", 500)?;
//! for chunk in chunks {
//!     println!("{}", chunk.display());
//! }
//! ```

pub mod codec;
pub mod convert;
pub mod decode;
pub mod details;
pub mod encode;
pub mod error;
pub mod ffmpeg;
pub mod format;
pub mod segment;
pub mod split;

pub use codec::{AudioCodec, DefaultCodec};
pub use convert::convert_audio_file;
pub use details::{get_audio_details, FileDetails};
pub use error::{AudioError, AudioResult};
pub use ffmpeg::FfmpegEncoder;
pub use format::{guess_mime_type, ExportFormat};
pub use segment::AudioSegment;
pub use split::{split_file_by_size, split_file_by_size_at, ChunkPlan};
