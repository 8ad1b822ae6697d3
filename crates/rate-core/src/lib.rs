//! # Rate-Core: Streaming PCM Sample Rate Conversion
//!
//! This library provides a streaming, fixed-point sample rate converter for
//! interleaved 16-bit signed little-endian PCM audio. It sits between two
//! stages of an audio pipeline that run at different rates and converts
//! contiguous blocks of source-rate frames into destination-rate frames
//! while preserving waveform continuity across calls.
//!
//! ## Features
//!
//! - **Fixed-point phase accumulation**: the source position is tracked in
//!   Q11 fixed point, so the per-sample cost is bounded integer arithmetic
//!   suitable for real-time use
//! - **Linear interpolation**: each output sample is interpolated between
//!   the two most recently consumed source samples per channel
//! - **Bidirectional size estimation**: buffer sizing queries in both
//!   directions, so the host pipeline can allocate before transferring
//! - **Stream lifecycle handling**: reset-on-restart semantics driven by
//!   pipeline events, with unknown events ignored
//!
//! ## Usage
//!
//! ```rust
//! use rate_core::{AudioFormat, RateConverter};
//!
//! // Convert mono 8 kHz audio to 16 kHz
//! let mut converter = RateConverter::new(
//!     AudioFormat::s16_le(1, 8000),
//!     AudioFormat::s16_le(1, 16000),
//! )?;
//!
//! let input = vec![0u8; 160]; // 10ms of source audio
//! let mut output = vec![0u8; converter.dest_bytes_produced(input.len())?];
//!
//! let written = converter.transfer(&input, &mut output)?;
//! assert_eq!(written % 2, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Design notes
//!
//! The converter is a pure, synchronous buffer transformation: no blocking,
//! no internal threads, no allocation in the conversion loop. A single
//! instance is not thread-safe (every operation reads or mutates the phase
//! and history state); callers serialize access through `&mut self`.
//! Independent instances share nothing and may run in parallel.
//!
//! The first output frames after construction or reset ramp linearly from
//! silence toward the first real source sample. This warm-up artifact is
//! part of the contract, not a defect.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod rate;
pub mod types;

// Re-export commonly used types
pub use error::{RateError, Result};
pub use rate::RateConverter;
pub use types::{AudioFormat, SampleEncoding, StreamEvent, MAX_CHANNELS};

/// Version information for the rate conversion library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Installs a default tracing subscriber so converter diagnostics are
/// visible. This should be called once at program startup; it is safe to
/// call multiple times, and unnecessary if the host application installs
/// its own subscriber.
pub fn init() {
    let _ = tracing_subscriber::fmt::try_init();

    tracing::info!("Rate-Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        init();
        // A second call must not panic even though a subscriber is set.
        init();
    }

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!VERSION.is_empty());
    }
}
