//! Error handling for the rate conversion library
//!
//! This module defines the error types that can occur while building or
//! operating a converter. Almost everything that can go wrong is a caller
//! error (incompatible formats, out-of-range parameters, degenerate
//! sizes); the one exception is allocation failure at construction.

#![allow(missing_docs)]

use thiserror::Error;

/// Result type alias for rate conversion operations
pub type Result<T> = std::result::Result<T, RateError>;

/// Error type for rate conversion operations
#[derive(Error, Debug)]
pub enum RateError {
    /// Source and destination formats are incompatible
    #[error("Incompatible formats: {details}")]
    FormatMismatch { details: String },

    /// Sample encoding other than 16-bit signed little-endian
    #[error("Unsupported sample encoding: {encoding} (only S16_LE is supported)")]
    UnsupportedEncoding { encoding: String },

    /// Channel count outside the supported range
    #[error("Invalid channel count: {channels} (supported: 1-{max})")]
    InvalidChannelCount { channels: u8, max: u8 },

    /// Sample rate is zero
    #[error("Invalid sample rate: {rate}Hz")]
    InvalidSampleRate { rate: u32 },

    /// Source and destination rates are equal, conversion would be a no-op
    #[error("Matching source and destination rates: {rate}Hz (bypass this stage instead)")]
    MatchingRates { rate: u32 },

    /// Rate pairing whose fixed-point ratio cannot be represented
    #[error("Unsupported rate ratio: {src_rate}Hz -> {dst_rate}Hz")]
    UnsupportedRateRatio { src_rate: u32, dst_rate: u32 },

    /// Byte count that must be positive was zero
    #[error("Invalid size: {details}")]
    InvalidSize { details: String },

    /// Allocation failure during converter construction
    #[error("Out of memory during converter construction")]
    OutOfMemory,
}

impl RateError {
    /// Create a new format mismatch error
    pub fn format_mismatch(details: impl Into<String>) -> Self {
        Self::FormatMismatch {
            details: details.into(),
        }
    }

    /// Create a new unsupported encoding error
    pub fn unsupported_encoding(encoding: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            encoding: encoding.into(),
        }
    }

    /// Create a new invalid size error
    pub fn invalid_size(details: impl Into<String>) -> Self {
        Self::InvalidSize {
            details: details.into(),
        }
    }

    /// Check whether this error is an invalid-argument failure
    ///
    /// The error surface has exactly two classes: invalid arguments
    /// (rejected caller input, never retryable) and out-of-memory.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::FormatMismatch { .. }
            | Self::UnsupportedEncoding { .. }
            | Self::InvalidChannelCount { .. }
            | Self::InvalidSampleRate { .. }
            | Self::MatchingRates { .. }
            | Self::UnsupportedRateRatio { .. }
            | Self::InvalidSize { .. } => true,

            Self::OutOfMemory => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RateError::format_mismatch("source is planar");
        assert_eq!(err.to_string(), "Incompatible formats: source is planar");

        let err = RateError::InvalidChannelCount { channels: 7, max: 6 };
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("1-6"));
    }

    #[test]
    fn test_error_classification() {
        assert!(RateError::MatchingRates { rate: 44100 }.is_invalid_argument());
        assert!(RateError::invalid_size("zero").is_invalid_argument());
        assert!(!RateError::OutOfMemory.is_invalid_argument());
    }
}
