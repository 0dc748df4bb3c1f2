//! In-memory decoded audio.
//!
//! An [`AudioSegment`] holds interleaved samples normalised to `[-1.0, 1.0]`
//! together with the PCM layout they were decoded from. The layout (sample
//! width in particular) is kept so that exports and bit-rate estimates match
//! the source rather than the `f32` working format.

use crate::error::{AudioError, AudioResult};

/// Decoded audio with its PCM layout.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    samples: Vec<f32>,
    channels: u16,
    frame_rate: u32,
    sample_width: u16,
}

impl AudioSegment {
    /// Creates a segment from interleaved samples.
    ///
    /// # Arguments
    /// * `samples` - Interleaved samples in `[-1.0, 1.0]`
    /// * `channels` - Number of channels (must be non-zero)
    /// * `frame_rate` - Frames per second (must be non-zero)
    /// * `sample_width` - Bytes per sample per channel (1 to 4)
    pub fn new(
        samples: Vec<f32>,
        channels: u16,
        frame_rate: u32,
        sample_width: u16,
    ) -> AudioResult<Self> {
        if channels == 0 {
            return Err(AudioError::invalid_channels("channel count must be non-zero"));
        }
        if frame_rate == 0 {
            return Err(AudioError::invalid_channels("frame rate must be non-zero"));
        }
        if !(1..=4).contains(&sample_width) {
            return Err(AudioError::UnsupportedSampleWidth {
                width: sample_width,
            });
        }
        if samples.len() % channels as usize != 0 {
            return Err(AudioError::invalid_channels(format!(
                "{} samples is not a whole number of {}-channel frames",
                samples.len(),
                channels
            )));
        }

        Ok(Self {
            samples,
            channels,
            frame_rate,
            sample_width,
        })
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Frames per second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Bytes per sample per channel.
    pub fn sample_width(&self) -> u16 {
        self.sample_width
    }

    /// Bytes per frame across all channels.
    pub fn frame_width(&self) -> u32 {
        self.channels as u32 * self.sample_width as u32
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.frame_rate as f64
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_seconds() * 1000.0
    }

    /// Uncompressed bit rate estimate in bits per second.
    pub fn bit_rate(&self) -> u64 {
        self.frame_rate as u64 * self.frame_width() as u64 * 8
    }

    /// Returns the frames between `start_ms` and `end_ms`.
    ///
    /// Both bounds are clamped to the available audio, so an end past the
    /// last frame yields a shorter slice and `start_ms >= end_ms` yields an
    /// empty one.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> AudioSegment {
        let start = self.frame_at_ms(start_ms);
        let end = self.frame_at_ms(end_ms).max(start);
        let ch = self.channels as usize;

        AudioSegment {
            samples: self.samples[start * ch..end * ch].to_vec(),
            channels: self.channels,
            frame_rate: self.frame_rate,
            sample_width: self.sample_width,
        }
    }

    /// Returns a copy remixed to `channels` channels.
    ///
    /// Downmixing to mono averages all channels. Upmixing is only defined
    /// from mono, where each sample is duplicated into every channel.
    pub fn set_channels(&self, channels: u16) -> AudioResult<AudioSegment> {
        if channels == 0 {
            return Err(AudioError::invalid_channels("channel count must be non-zero"));
        }
        if channels == self.channels {
            return Ok(self.clone());
        }

        let samples = if channels == 1 {
            self.samples
                .chunks_exact(self.channels as usize)
                .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
                .collect()
        } else if self.channels == 1 {
            self.samples
                .iter()
                .flat_map(|&s| std::iter::repeat(s).take(channels as usize))
                .collect()
        } else {
            return Err(AudioError::UnsupportedChannelConversion {
                from: self.channels,
                to: channels,
            });
        };

        Ok(AudioSegment {
            samples,
            channels,
            frame_rate: self.frame_rate,
            sample_width: self.sample_width,
        })
    }

    fn frame_at_ms(&self, ms: u64) -> usize {
        let frame = ms as u128 * self.frame_rate as u128 / 1000;
        frame.min(self.frame_count() as u128) as usize
    }
}
