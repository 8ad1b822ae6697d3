//! Core types for the rate conversion library
//!
//! This module defines the format descriptor consumed from the pipeline's
//! format negotiation, the sample encoding enumeration, and the stream
//! lifecycle events the converter reacts to.

use std::fmt;

/// Maximum number of channels a converter supports
///
/// The interpolation history is a fixed array sized by this bound, which
/// keeps the inner loop allocation-free. Formats with more channels are
/// rejected at construction.
pub const MAX_CHANNELS: usize = 6;

/// Width of one S16_LE sample in bytes
pub const BYTES_PER_SAMPLE: usize = 2;

/// PCM sample encodings the format negotiation layer can offer
///
/// Only [`SampleEncoding::S16Le`] is accepted by the converter; the other
/// values exist so a negotiated format can be described and rejected with
/// a precise error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleEncoding {
    /// 8-bit signed
    S8,
    /// 8-bit unsigned
    U8,
    /// 16-bit signed little-endian
    S16Le,
    /// 16-bit signed big-endian
    S16Be,
    /// 32-bit signed little-endian
    S32Le,
    /// 32-bit float little-endian
    F32Le,
}

impl SampleEncoding {
    /// Get the encoding name
    pub fn name(self) -> &'static str {
        match self {
            Self::S8 => "S8",
            Self::U8 => "U8",
            Self::S16Le => "S16_LE",
            Self::S16Be => "S16_BE",
            Self::S32Le => "S32_LE",
            Self::F32Le => "F32_LE",
        }
    }

    /// Get the width of one sample in bytes
    pub fn sample_bytes(self) -> usize {
        match self {
            Self::S8 | Self::U8 => 1,
            Self::S16Le | Self::S16Be => 2,
            Self::S32Le | Self::F32Le => 4,
        }
    }
}

impl fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One side of a negotiated stream format
///
/// The converter receives one descriptor per side and validates the
/// pairing before any state is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Whether frames are stored interleaved (samples of one frame
    /// consecutive per channel)
    pub interleaved: bool,
    /// Sample encoding
    pub encoding: SampleEncoding,
    /// Number of channels
    pub channels: u8,
    /// Sample rate in Hz
    pub rate: u32,
}

impl AudioFormat {
    /// Create an interleaved S16_LE format descriptor
    pub fn s16_le(channels: u8, rate: u32) -> Self {
        Self {
            interleaved: true,
            encoding: SampleEncoding::S16Le,
            channels,
            rate,
        }
    }

    /// Get the width of one frame (one sample per channel) in bytes
    pub fn frame_bytes(&self) -> usize {
        usize::from(self.channels) * self.encoding.sample_bytes()
    }
}

/// Stream lifecycle events dispatched by the host pipeline
///
/// [`Init`](Self::Init), [`Prepare`](Self::Prepare), [`Drain`](Self::Drain)
/// and [`Flush`](Self::Flush) mark stream restarts and reset the converter
/// state; every other event is irrelevant to resampling and is silently
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamEvent {
    /// Stream initialized
    Init,
    /// Stream prepared for a (re)start
    Prepare,
    /// Stream drained to completion
    Drain,
    /// Pending stream data discarded
    Flush,
    /// Playback or capture paused
    Pause,
    /// Playback or capture resumed
    Resume,
    /// Stream stopped
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_names() {
        assert_eq!(SampleEncoding::S16Le.name(), "S16_LE");
        assert_eq!(SampleEncoding::S16Le.to_string(), "S16_LE");
        assert_eq!(SampleEncoding::F32Le.name(), "F32_LE");
    }

    #[test]
    fn test_encoding_widths() {
        assert_eq!(SampleEncoding::S8.sample_bytes(), 1);
        assert_eq!(SampleEncoding::S16Le.sample_bytes(), BYTES_PER_SAMPLE);
        assert_eq!(SampleEncoding::S32Le.sample_bytes(), 4);
    }

    #[test]
    fn test_format_descriptor() {
        let format = AudioFormat::s16_le(2, 44100);
        assert!(format.interleaved);
        assert_eq!(format.encoding, SampleEncoding::S16Le);
        assert_eq!(format.frame_bytes(), 4);
    }
}
