//! In-process audio encoding: hound-backed WAV and headerless PCM.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AudioError, AudioResult};
use crate::format::ExportFormat;
use crate::segment::AudioSegment;

/// Encode `segment` to `path` in the given format.
///
/// Only native formats are handled here; see [`crate::ffmpeg`] for the rest.
pub fn encode_file(segment: &AudioSegment, path: &Path, format: ExportFormat) -> AudioResult<()> {
    match format {
        ExportFormat::Wav => write_wav(segment, path),
        ExportFormat::Raw => write_raw(segment, path),
        other => Err(AudioError::UnsupportedFormat {
            format: other.to_string(),
        }),
    }
}

/// Quantize a normalised sample to a signed integer of `bits` bits.
fn quantize(sample: f32, bits: u16) -> i32 {
    let max = ((1i64 << (bits - 1)) - 1) as f64;
    (sample.clamp(-1.0, 1.0) as f64 * max).round() as i32
}

fn write_wav(segment: &AudioSegment, path: &Path) -> AudioResult<()> {
    let display = path.display().to_string();
    let bits = segment.sample_width() * 8;
    let spec = hound::WavSpec {
        channels: segment.channels(),
        sample_rate: segment.frame_rate(),
        bits_per_sample: bits,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer =
        hound::WavWriter::create(path, spec).map_err(|e| AudioError::encode(&display, e))?;

    for &sample in segment.samples() {
        let value = quantize(sample, bits);
        let written = match bits {
            8 => writer.write_sample(value as i8),
            16 => writer.write_sample(value as i16),
            _ => writer.write_sample(value),
        };
        written.map_err(|e| AudioError::encode(&display, e))?;
    }

    writer
        .finalize()
        .map_err(|e| AudioError::encode(&display, e))
}

fn write_raw(segment: &AudioSegment, path: &Path) -> AudioResult<()> {
    let bits = segment.sample_width() * 8;
    let width = segment.sample_width() as usize;
    let mut out = BufWriter::new(File::create(path)?);

    for &sample in segment.samples() {
        let bytes = quantize(sample, bits).to_le_bytes();
        out.write_all(&bytes[..width])?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quantize_extremes() {
        assert_eq!(quantize(1.0, 16), i16::MAX as i32);
        assert_eq!(quantize(-1.0, 16), -(i16::MAX as i32));
        assert_eq!(quantize(0.0, 24), 0);
        assert_eq!(quantize(2.0, 8), 127);
    }

    #[test]
    fn test_write_wav_header_matches_segment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let seg = AudioSegment::new(vec![0.0, 0.5, -0.5, 1.0], 2, 22_050, 3).unwrap();

        encode_file(&seg, &path, ExportFormat::Wav).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, 22_050);
        assert_eq!(spec.bits_per_sample, 24);
        assert_eq!(reader.duration(), 2);
    }

    #[test]
    fn test_write_raw_is_headerless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.raw");
        let seg = AudioSegment::new(vec![0.0, 1.0, -1.0], 1, 8000, 2).unwrap();

        encode_file(&seg, &path, ExportFormat::Raw).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, vec![0x00, 0x00, 0xff, 0x7f, 0x01, 0x80]);
    }

    #[test]
    fn test_encode_file_rejects_ffmpeg_formats() {
        let dir = tempfile::tempdir().unwrap();
        let seg = AudioSegment::new(vec![0.0], 1, 8000, 2).unwrap();
        let err = encode_file(&seg, &dir.path().join("out.flac"), ExportFormat::Flac).unwrap_err();
        assert!(matches!(err, AudioError::UnsupportedFormat { format } if format == "flac"));
    }
}
