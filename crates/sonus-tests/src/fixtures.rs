//! Test fixture utilities for creating WAV files on disk.

use std::f32::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// PCM layout of a generated WAV file.
#[derive(Debug, Clone, Copy)]
pub struct WavLayout {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavLayout {
    /// 16-bit mono at `sample_rate`.
    pub fn mono16(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// 16-bit stereo at `sample_rate`.
    pub fn stereo16(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per second of PCM data.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.channels as u32 * (self.bits_per_sample as u32 / 8)
    }
}

/// A temporary directory holding generated audio files.
pub struct AudioFixture {
    pub root: TempDir,
}

impl AudioFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Root path as a string with a trailing separator, for chunk prefixes.
    pub fn dir_prefix(&self) -> String {
        format!("{}{}", self.path().display(), std::path::MAIN_SEPARATOR)
    }

    /// Create (or reuse) a subdirectory.
    pub fn subdir(&self, name: &str) -> PathBuf {
        let dir = self.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create subdirectory");
        dir
    }

    /// Write a 440 Hz sine WAV file.
    ///
    /// # Arguments
    /// * `name` - File name including extension
    /// * `layout` - PCM layout
    /// * `frames` - Number of frames to write
    pub fn add_sine_wav(&self, name: &str, layout: WavLayout, frames: usize) -> PathBuf {
        let path = self.path().join(name);
        let spec = hound::WavSpec {
            channels: layout.channels,
            sample_rate: layout.sample_rate,
            bits_per_sample: layout.bits_per_sample,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV");
        let amplitude = ((1i64 << (layout.bits_per_sample - 1)) - 1) as f32 * 0.5;

        for frame in 0..frames {
            let t = frame as f32 / layout.sample_rate as f32;
            let value = ((TAU * 440.0 * t).sin() * amplitude) as i32;
            for _ in 0..layout.channels {
                let written = match layout.bits_per_sample {
                    8 => writer.write_sample(value as i8),
                    16 => writer.write_sample(value as i16),
                    _ => writer.write_sample(value),
                };
                written.expect("Failed to write sample");
            }
        }

        writer.finalize().expect("Failed to finalize WAV");
        path
    }

    /// Write arbitrary bytes to a file.
    pub fn add_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for AudioFixture {
    fn default() -> Self {
        Self::new()
    }
}
