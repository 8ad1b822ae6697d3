//! Streaming Rate Converter
//!
//! This module provides the converter itself: format validation at
//! construction, the transfer operation wrapping the interpolation kernel,
//! the bidirectional size probes, and stream lifecycle handling.

use tracing::{debug, trace};

use crate::error::{RateError, Result};
use crate::rate::{estimate, mix};
use crate::rate::phase::PhaseAccumulator;
use crate::rate::state::{FrameHistory, ProbeCache};
use crate::types::{AudioFormat, SampleEncoding, StreamEvent, BYTES_PER_SAMPLE, MAX_CHANNELS};

/// Streaming fixed-point sample rate converter for interleaved S16_LE PCM
///
/// A converter is built for one source/destination format pairing and owns
/// all conversion state: the Q11 phase accumulator, the per-channel
/// interpolation history, and the size probe memos. Every transfer
/// continues exactly where the previous one stopped, so a stream can be
/// pushed through in arbitrarily sized blocks.
///
/// The converter is not thread-safe; all operations take `&mut self` and a
/// caller must serialize access to one instance. Independent instances
/// share nothing.
///
/// # Example
/// ```
/// use rate_core::{AudioFormat, RateConverter};
///
/// let mut converter = RateConverter::new(
///     AudioFormat::s16_le(2, 44100),
///     AudioFormat::s16_le(2, 48000),
/// ).unwrap();
///
/// let input = vec![0u8; 1764]; // 10ms of stereo audio at 44.1 kHz
/// let mut output = vec![0u8; converter.dest_bytes_produced(input.len()).unwrap()];
///
/// let written = converter.transfer(&input, &mut output).unwrap();
/// assert_eq!(written % 4, 0);
/// ```
#[derive(Debug, Clone)]
pub struct RateConverter {
    /// Channel count shared by both sides
    channels: usize,
    /// Source sample rate in Hz
    src_rate: u32,
    /// Destination sample rate in Hz
    dst_rate: u32,
    /// Fixed-point position in the source stream
    phase: PhaseAccumulator,
    /// Interpolation endpoints, persisted across calls
    history: FrameHistory,
    /// Memo for source-side size probes
    src_probe: ProbeCache,
    /// Memo for destination-side size probes
    dst_probe: ProbeCache,
}

impl RateConverter {
    /// Build a converter for the given source and destination formats
    ///
    /// Validates, in order: matching interleaving with an interleaved
    /// destination, matching S16_LE encodings, matching channel counts
    /// within `1..=MAX_CHANNELS`, and differing positive rates. Equal
    /// rates are rejected because conversion would be a no-op; the caller
    /// is expected to bypass this stage entirely in that case.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for any rejected format pairing.
    pub fn new(src: AudioFormat, dst: AudioFormat) -> Result<Self> {
        validate_formats(&src, &dst)?;

        let phase = PhaseAccumulator::new(src.rate, dst.rate).ok_or(
            RateError::UnsupportedRateRatio {
                src_rate: src.rate,
                dst_rate: dst.rate,
            },
        )?;

        debug!(
            src_rate = src.rate,
            dst_rate = dst.rate,
            channels = src.channels,
            pitch = phase.pitch(),
            "rate converter created"
        );

        Ok(Self {
            channels: usize::from(src.channels),
            src_rate: src.rate,
            dst_rate: dst.rate,
            phase,
            history: FrameHistory::new(),
            src_probe: ProbeCache::default(),
            dst_probe: ProbeCache::default(),
        })
    }

    /// Convert source frames into destination frames
    ///
    /// Consumes whole frames from `src` as the phase accumulator demands
    /// them and writes interpolated whole frames to `dst`; trailing
    /// partial-frame bytes on either side are ignored. Conversion stops at
    /// `dst`'s whole-frame capacity or when the source is exhausted,
    /// whichever comes first, and the phase and history are left
    /// positioned for the next call.
    ///
    /// An empty source is a no-op and returns zero without touching any
    /// state.
    ///
    /// # Errors
    ///
    /// Transfer itself cannot fail on well-formed state; the `Result`
    /// return carries the invalid-argument surface of the operation
    /// contract.
    pub fn transfer(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        if src.is_empty() {
            return Ok(0);
        }

        let produced =
            mix::resample_frames(&mut self.phase, &mut self.history, self.channels, src, dst);
        let written = produced * self.frame_bytes();

        trace!(
            src_bytes = src.len(),
            dst_capacity = dst.len(),
            written,
            "transfer"
        );
        Ok(written)
    }

    /// Estimate the source bytes needed to produce `dst_bytes` of output
    ///
    /// The result is aligned down to a whole source frame. Repeated probes
    /// of the same size are served from a one-entry memo when the size is
    /// below 128 KiB.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error when `dst_bytes` is zero.
    pub fn source_bytes_needed(&mut self, dst_bytes: usize) -> Result<usize> {
        if dst_bytes == 0 {
            return Err(RateError::invalid_size(
                "destination byte count must be positive",
            ));
        }
        let frame_bytes = self.frame_bytes();
        Ok(estimate::source_bytes_needed(
            &mut self.src_probe,
            self.phase.pitch(),
            frame_bytes,
            dst_bytes,
        ))
    }

    /// Estimate the destination bytes produced from `src_bytes` of input
    ///
    /// The result is aligned down to a whole destination frame. Repeated
    /// probes of the same size are served from a one-entry memo when the
    /// size is below 128 KiB.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error when `src_bytes` is zero.
    pub fn dest_bytes_produced(&mut self, src_bytes: usize) -> Result<usize> {
        if src_bytes == 0 {
            return Err(RateError::invalid_size(
                "source byte count must be positive",
            ));
        }
        let frame_bytes = self.frame_bytes();
        Ok(estimate::dest_bytes_produced(
            &mut self.dst_probe,
            self.phase.pitch(),
            frame_bytes,
            src_bytes,
        ))
    }

    /// React to a stream lifecycle event
    ///
    /// `Init`, `Prepare`, `Drain` and `Flush` mark stream restarts and
    /// reset the conversion state. Every other event is irrelevant to
    /// resampling and is silently ignored. This operation never fails.
    pub fn notify(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Init | StreamEvent::Prepare | StreamEvent::Drain | StreamEvent::Flush => {
                debug!(?event, "stream event, resetting conversion state");
                self.reset();
            }
            // Remaining events carry no meaning for the converter.
            _ => {}
        }
    }

    /// Reset the conversion state
    ///
    /// Zeroes the phase and the interpolation history of every channel, as
    /// if the converter had just been built. The size probe memos are kept;
    /// they depend only on the immutable rate ratio.
    pub fn reset(&mut self) {
        self.phase.reset();
        self.history.reset();
    }

    /// Get the channel count shared by both sides
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Get the source sample rate in Hz
    pub fn source_rate(&self) -> u32 {
        self.src_rate
    }

    /// Get the destination sample rate in Hz
    pub fn dest_rate(&self) -> u32 {
        self.dst_rate
    }

    /// Get the fixed-point rate ratio (Q11 source frames per destination frame)
    pub fn pitch(&self) -> u32 {
        self.phase.pitch()
    }

    /// Get the width of one frame in bytes
    pub fn frame_bytes(&self) -> usize {
        self.channels * BYTES_PER_SAMPLE
    }
}

/// Validate a format pairing before any converter state is built
fn validate_formats(src: &AudioFormat, dst: &AudioFormat) -> Result<()> {
    if src.interleaved != dst.interleaved {
        return Err(RateError::format_mismatch(
            "source and destination interleaving differ",
        ));
    }
    if !dst.interleaved {
        return Err(RateError::format_mismatch(
            "destination must be interleaved",
        ));
    }
    if src.encoding != dst.encoding {
        return Err(RateError::format_mismatch(format!(
            "source encoding {} does not match destination encoding {}",
            src.encoding, dst.encoding
        )));
    }
    if src.encoding != SampleEncoding::S16Le {
        return Err(RateError::unsupported_encoding(src.encoding.name()));
    }
    if src.channels != dst.channels {
        return Err(RateError::format_mismatch(format!(
            "source has {} channels, destination has {}",
            src.channels, dst.channels
        )));
    }
    if src.channels == 0 || usize::from(src.channels) > MAX_CHANNELS {
        return Err(RateError::InvalidChannelCount {
            channels: src.channels,
            max: MAX_CHANNELS as u8,
        });
    }
    if src.rate == 0 || dst.rate == 0 {
        return Err(RateError::InvalidSampleRate {
            rate: src.rate.min(dst.rate),
        });
    }
    if src.rate == dst.rate {
        return Err(RateError::MatchingRates { rate: src.rate });
    }
    Ok(())
}
