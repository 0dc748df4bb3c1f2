//! Error types for the audio crate.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while decoding, transforming or exporting audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be probed or decoded.
    #[error("failed to decode '{path}': {message}")]
    Decode {
        /// Path of the input file.
        path: String,
        /// Decoder message.
        message: String,
    },

    /// The container holds no decodable audio track.
    #[error("no audio track found in '{path}'")]
    NoAudioTrack {
        /// Path of the input file.
        path: String,
    },

    /// The decoder did not report a sample rate.
    #[error("unknown sample rate in '{path}'")]
    UnknownSampleRate {
        /// Path of the input file.
        path: String,
    },

    /// The input decoded to zero samples.
    #[error("audio has zero duration")]
    EmptyAudio,

    /// The input file is zero bytes long.
    #[error("input file is empty")]
    EmptyFile,

    /// The output could not be encoded.
    #[error("failed to encode '{path}': {message}")]
    Encode {
        /// Path of the output file.
        path: String,
        /// Encoder message.
        message: String,
    },

    /// The requested export format has no encoder.
    #[error("unsupported export format: '{format}' (wav and raw are built in, others need ffmpeg on PATH)")]
    UnsupportedFormat {
        /// The requested format name.
        format: String,
    },

    /// The sample width is outside 1..=4 bytes.
    #[error("unsupported sample width: {width} bytes")]
    UnsupportedSampleWidth {
        /// The invalid width in bytes.
        width: u16,
    },

    /// Invalid channel count or sample layout.
    #[error("invalid channel layout: {message}")]
    InvalidChannels {
        /// Error message.
        message: String,
    },

    /// The channel remix is not supported.
    #[error("cannot convert {from} channels to {to} channels")]
    UnsupportedChannelConversion {
        /// Current channel count.
        from: u16,
        /// Requested channel count.
        to: u16,
    },

    /// Chunk size is not a positive number of kilobytes.
    #[error("invalid chunk size: {chunk_size} KB (must be a positive integer)")]
    InvalidChunkSize {
        /// The rejected chunk size.
        chunk_size: i64,
    },

    /// The chunk duration does not fit in the millisecond range.
    #[error("chunk size {chunk_size} KB yields a chunk duration that overflows")]
    ChunkTooLarge {
        /// The requested chunk size.
        chunk_size: u64,
    },
}

impl AudioError {
    /// Creates a decode error.
    pub fn decode(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Creates an encode error.
    pub fn encode(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Encode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Creates an invalid channel layout error.
    pub fn invalid_channels(message: impl Into<String>) -> Self {
        Self::InvalidChannels {
            message: message.into(),
        }
    }
}
