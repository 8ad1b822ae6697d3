//! Shared helpers for the rate converter test suite

use crate::types::AudioFormat;

/// Encode samples as interleaved S16_LE bytes
pub fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Decode interleaved S16_LE bytes back to samples
pub fn pcm_samples(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Interleaved S16_LE mono format at the given rate
pub fn mono(rate: u32) -> AudioFormat {
    AudioFormat::s16_le(1, rate)
}

/// Interleaved S16_LE stereo format at the given rate
pub fn stereo(rate: u32) -> AudioFormat {
    AudioFormat::s16_le(2, rate)
}
