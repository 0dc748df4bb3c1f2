//! Size-based chunk splitting.
//!
//! The splitter assumes a roughly constant bit rate: the input's
//! milliseconds-per-kilobyte ratio, rounded up, times the requested chunk
//! size gives the duration of each chunk. Rounding up first keeps the chunk
//! duration non-zero and biases towards fewer, slightly larger chunks.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use log::{debug, info};

use crate::codec::AudioCodec;
use crate::error::{AudioError, AudioResult};

/// Chunk sizing derived from an input file and a target chunk size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkPlan {
    /// Input file size in KiB
    pub file_size_kb: f64,
    /// Input duration in milliseconds
    pub duration_ms: f64,
    /// Duration of each chunk in milliseconds
    pub ms_per_chunk: u64,
    /// Number of chunks covering the whole input
    pub num_chunks: u64,
}

impl ChunkPlan {
    /// Compute the plan for `chunk_size` KB chunks.
    ///
    /// `ms_per_chunk = ceil(duration_ms / file_size_kb) * chunk_size` and
    /// `num_chunks = ceil(duration_ms / ms_per_chunk)`, so
    /// `num_chunks * ms_per_chunk >= duration_ms` always holds.
    pub fn compute(duration_ms: f64, file_size_kb: f64, chunk_size: u64) -> AudioResult<Self> {
        if chunk_size == 0 {
            return Err(AudioError::InvalidChunkSize { chunk_size: 0 });
        }
        if duration_ms.is_nan() || duration_ms <= 0.0 {
            return Err(AudioError::EmptyAudio);
        }
        if file_size_kb.is_nan() || file_size_kb <= 0.0 {
            return Err(AudioError::EmptyFile);
        }

        let ms_per_kb = (duration_ms / file_size_kb).ceil();
        if ms_per_kb > u64::MAX as f64 {
            return Err(AudioError::ChunkTooLarge { chunk_size });
        }
        let ms_per_chunk = (ms_per_kb as u64)
            .checked_mul(chunk_size)
            .ok_or(AudioError::ChunkTooLarge { chunk_size })?;
        let num_chunks = (duration_ms / ms_per_chunk as f64).ceil() as u64;

        Ok(Self {
            file_size_kb,
            duration_ms,
            ms_per_chunk,
            num_chunks,
        })
    }

    /// `(start_ms, end_ms)` of each chunk in order.
    ///
    /// The last end may exceed the input duration; slicing clamps it.
    pub fn ranges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        (0..self.num_chunks).map(move |i| {
            let start = i.saturating_mul(self.ms_per_chunk);
            (start, start.saturating_add(self.ms_per_chunk))
        })
    }
}

/// Split `infile` into chunks of roughly `chunk_size` KB each.
///
/// Chunks are written to `directory` with the current Unix time in their
/// names and exported in the format named by the input's extension.
/// Chunk paths are `{directory}{timestamp}_{stem}_chunk_{n}.{ext}`; a
/// non-empty `directory` without a trailing separator gets one appended, so
/// `/tmp` and `/tmp/` name the same files.
///
/// # Returns
/// Paths of the written chunks, in order.
pub fn split_file_by_size<C: AudioCodec + ?Sized>(
    codec: &C,
    infile: &Path,
    directory: &str,
    chunk_size: u64,
) -> AudioResult<Vec<PathBuf>> {
    let timestamp = chrono::Utc::now().timestamp();
    split_file_by_size_at(codec, infile, directory, chunk_size, timestamp)
}

/// [`split_file_by_size`] with an explicit timestamp for chunk names.
pub fn split_file_by_size_at<C: AudioCodec + ?Sized>(
    codec: &C,
    infile: &Path,
    directory: &str,
    chunk_size: u64,
    timestamp: i64,
) -> AudioResult<Vec<PathBuf>> {
    if chunk_size == 0 {
        return Err(AudioError::InvalidChunkSize { chunk_size: 0 });
    }

    let display = infile.display().to_string();
    let extension = infile
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .ok_or_else(|| AudioError::UnsupportedFormat {
            format: String::new(),
        })?;
    let file_name = infile
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let audio = codec.decode(infile)?;
    let byte_size = std::fs::metadata(infile)?.len();
    if byte_size == 0 {
        return Err(AudioError::EmptyFile);
    }

    let plan = ChunkPlan::compute(audio.duration_ms(), byte_size as f64 / 1024.0, chunk_size)?;
    info!(
        "Splitting {} ({:.0} ms, {:.1} KB) into {} chunks of {} ms",
        display, plan.duration_ms, plan.file_size_kb, plan.num_chunks, plan.ms_per_chunk
    );

    let prefix = chunk_prefix(directory);
    let mut chunks = Vec::with_capacity(plan.num_chunks as usize);
    for (i, (start, end)) in plan.ranges().enumerate() {
        let chunk = audio.slice_ms(start, end);
        let chunk_path = PathBuf::from(format!(
            "{}{}_{}_chunk_{}.{}",
            prefix,
            timestamp,
            file_name,
            i + 1,
            extension
        ));
        codec.export(&chunk, &chunk_path, &extension)?;
        debug!("Wrote chunk {} [{}..{} ms]: {}", i + 1, start, end, chunk_path.display());
        chunks.push(chunk_path);
    }

    Ok(chunks)
}

/// Directory prefix for chunk names, with a trailing separator when needed.
fn chunk_prefix(directory: &str) -> String {
    if directory.is_empty() || directory.ends_with('/') || directory.ends_with(MAIN_SEPARATOR) {
        directory.to_string()
    } else {
        format!("{}{}", directory, MAIN_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::AudioSegment;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn test_plan_even_split() {
        let plan = ChunkPlan::compute(10_000.0, 1000.0, 100).unwrap();
        assert_eq!(plan.ms_per_chunk, 1000);
        assert_eq!(plan.num_chunks, 10);
        assert_eq!(plan.ranges().last(), Some((9000, 10_000)));
    }

    #[test]
    fn test_plan_rounds_ms_per_kb_up() {
        // 10_000 / 3000 = 3.33 -> 4 ms per KB
        let plan = ChunkPlan::compute(10_000.0, 3000.0, 250).unwrap();
        assert_eq!(plan.ms_per_chunk, 1000);
        assert_eq!(plan.num_chunks, 10);
    }

    #[test]
    fn test_plan_uneven_last_chunk_overhangs() {
        let plan = ChunkPlan::compute(2_500.0, 100.0, 40).unwrap();
        assert_eq!(plan.ms_per_chunk, 1000);
        assert_eq!(plan.num_chunks, 3);
        let ranges: Vec<_> = plan.ranges().collect();
        assert_eq!(ranges, vec![(0, 1000), (1000, 2000), (2000, 3000)]);
    }

    #[test]
    fn test_plan_chunk_larger_than_file() {
        let plan = ChunkPlan::compute(10_000.0, 1000.0, 5000).unwrap();
        assert_eq!(plan.num_chunks, 1);
        assert!(plan.ms_per_chunk as f64 >= plan.duration_ms);
    }

    #[test]
    fn test_plan_rejects_degenerate_inputs() {
        assert!(matches!(
            ChunkPlan::compute(1000.0, 10.0, 0),
            Err(AudioError::InvalidChunkSize { .. })
        ));
        assert!(matches!(
            ChunkPlan::compute(0.0, 10.0, 100),
            Err(AudioError::EmptyAudio)
        ));
        assert!(matches!(
            ChunkPlan::compute(1000.0, 0.0, 100),
            Err(AudioError::EmptyFile)
        ));
        assert!(matches!(
            ChunkPlan::compute(1.0e6, 1.0e-3, u64::MAX),
            Err(AudioError::ChunkTooLarge { .. })
        ));
    }

    #[test]
    fn test_chunk_prefix() {
        assert_eq!(chunk_prefix(""), "");
        assert_eq!(chunk_prefix("/tmp/"), "/tmp/");
        assert_eq!(chunk_prefix("/tmp"), format!("/tmp{}", MAIN_SEPARATOR));
    }

    struct RecordingCodec {
        segment: AudioSegment,
        exports: RefCell<Vec<(PathBuf, String, usize)>>,
    }

    impl AudioCodec for RecordingCodec {
        fn decode(&self, _path: &Path) -> AudioResult<AudioSegment> {
            Ok(self.segment.clone())
        }

        fn export(&self, segment: &AudioSegment, path: &Path, format: &str) -> AudioResult<()> {
            self.exports.borrow_mut().push((
                path.to_path_buf(),
                format.to_string(),
                segment.frame_count(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_split_names_and_covers_input() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("speech.wav");
        // 10 KiB on disk, 10 s of audio -> 1000 ms per KB
        std::fs::write(&infile, vec![0u8; 10 * 1024]).unwrap();

        let codec = RecordingCodec {
            segment: AudioSegment::new(vec![0.0; 10_000], 1, 1000, 2).unwrap(),
            exports: RefCell::new(Vec::new()),
        };

        let chunks = split_file_by_size_at(&codec, &infile, "/out/", 4, 1_700_000_000).unwrap();

        assert_eq!(
            chunks,
            vec![
                PathBuf::from("/out/1700000000_speech_chunk_1.wav"),
                PathBuf::from("/out/1700000000_speech_chunk_2.wav"),
                PathBuf::from("/out/1700000000_speech_chunk_3.wav"),
            ]
        );

        let exports = codec.exports.borrow();
        let frames: Vec<_> = exports.iter().map(|(_, _, n)| *n).collect();
        assert_eq!(frames, vec![4000, 4000, 2000]);
        assert!(exports.iter().all(|(_, fmt, _)| fmt == "wav"));
    }

    #[test]
    fn test_split_rejects_zero_chunk_size_before_decoding() {
        let codec = RecordingCodec {
            segment: AudioSegment::new(vec![], 1, 1000, 2).unwrap(),
            exports: RefCell::new(Vec::new()),
        };
        let err = split_file_by_size_at(&codec, Path::new("missing.wav"), "", 0, 0).unwrap_err();
        assert!(matches!(err, AudioError::InvalidChunkSize { .. }));
    }

    #[test]
    fn test_split_rejects_empty_audio() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("silence.wav");
        std::fs::write(&infile, vec![0u8; 64]).unwrap();

        let codec = RecordingCodec {
            segment: AudioSegment::new(vec![], 1, 1000, 2).unwrap(),
            exports: RefCell::new(Vec::new()),
        };
        let err = split_file_by_size_at(&codec, &infile, "", 10, 0).unwrap_err();
        assert!(matches!(err, AudioError::EmptyAudio));
        assert!(codec.exports.borrow().is_empty());
    }
}
