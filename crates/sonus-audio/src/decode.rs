//! Audio decoding through symphonia.

use std::fs::File;
use std::path::Path;

use log::{debug, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{AudioError, AudioResult};
use crate::segment::AudioSegment;

/// Sample width assumed when the codec does not report bits per sample.
///
/// Compressed codecs (MP3, AAC, Vorbis) decode to 16-bit PCM equivalents.
pub const DEFAULT_SAMPLE_WIDTH: u16 = 2;

/// Decode an entire audio file into memory.
///
/// The first track with a known codec is decoded. Corrupt packets are
/// skipped with a warning; any other decoder failure is an error.
pub fn decode_file(path: &Path) -> AudioResult<AudioSegment> {
    let display = path.display().to_string();
    debug!("Decoding audio file: {}", display);

    let file = File::open(path).map_err(|e| AudioError::decode(&display, e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioError::decode(&display, e))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AudioError::NoAudioTrack {
            path: display.clone(),
        })?;

    let track_id = track.id;
    let frame_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AudioError::UnknownSampleRate {
            path: display.clone(),
        })?;
    let mut channels = track
        .codec_params
        .channels
        .map(|c| c.count() as u16)
        .unwrap_or(1);
    let sample_width = track
        .codec_params
        .bits_per_sample
        .map(|bits| bits.div_ceil(8) as u16)
        .filter(|w| (1..=4).contains(w))
        .unwrap_or(DEFAULT_SAMPLE_WIDTH);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioError::decode(&display, e))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(AudioError::decode(&display, e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    let actual_channels = spec.channels.count() as u16;
                    if actual_channels != channels {
                        debug!(
                            "Channel count corrected: metadata={} actual={}",
                            channels, actual_channels
                        );
                        channels = actual_channels;
                    }
                    sample_buf = Some(SampleBuffer::<f32>::new(decoded.capacity() as u64, spec));
                }

                if let Some(ref mut buf) = sample_buf {
                    buf.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(e)) => {
                warn!("Skipping corrupt packet in '{}': {}", display, e);
            }
            Err(e) => return Err(AudioError::decode(&display, e)),
        }
    }

    let segment = AudioSegment::new(samples, channels, frame_rate, sample_width)?;
    debug!(
        "Decoded {} frames ({:.3}s) at {}Hz, {} channels, {}-byte samples",
        segment.frame_count(),
        segment.duration_seconds(),
        frame_rate,
        channels,
        sample_width
    );

    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_test_wav(path: &Path, channels: u16, sample_rate: u32, bits: u16, frames: usize) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: bits,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for i in 0..frames * channels as usize {
            let v = ((i % 100) as i32 - 50) * 100;
            writer.write_sample(v as i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_decode_wav_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        write_test_wav(&path, 2, 8000, 16, 4000);

        let seg = decode_file(&path).unwrap();
        assert_eq!(seg.channels(), 2);
        assert_eq!(seg.frame_rate(), 8000);
        assert_eq!(seg.sample_width(), 2);
        assert_eq!(seg.frame_count(), 4000);
        assert_eq!(seg.duration_ms(), 500.0);
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_file(&dir.path().join("missing.wav")).unwrap_err();
        assert!(matches!(err, AudioError::Decode { .. }));
    }

    #[test]
    fn test_decode_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"definitely not audio").unwrap();
        assert!(decode_file(&path).is_err());
    }
}
