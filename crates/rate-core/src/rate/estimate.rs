//! Bidirectional Buffer Size Estimation
//!
//! The host pipeline sizes its buffers by asking, for a byte count on one
//! side of the converter, what the matching byte count on the other side
//! is. Both directions round the fixed-point ratio to nearest and then
//! align the answer down to a whole-frame boundary, so the result can be
//! handed straight to an allocator.
//!
//! Each direction carries a one-entry memo keyed by its own most recent
//! query size. Typical pipelines probe the same period size over and over,
//! so a single slot is enough; probes at or above [`PROBE_MEMO_LIMIT`]
//! bypass the memo entirely.

use crate::rate::phase::{PHASE_ONE, PHASE_SHIFT};
use crate::rate::state::ProbeCache;

/// Probe sizes at or above this limit are never memoized
pub(crate) const PROBE_MEMO_LIMIT: usize = 128 * 1024;

/// Estimate the source bytes needed to produce `dst_bytes` of output
///
/// Scales by the pitch (destination to source direction), rounding to
/// nearest, and aligns down to a whole source frame.
pub(crate) fn source_bytes_needed(
    cache: &mut ProbeCache,
    pitch: u32,
    frame_bytes: usize,
    dst_bytes: usize,
) -> usize {
    if dst_bytes < PROBE_MEMO_LIMIT {
        if let Some(hit) = cache.lookup(dst_bytes) {
            return hit;
        }
    }

    let scaled = ((dst_bytes as u64 * u64::from(pitch)) + u64::from(PHASE_ONE / 2)) >> PHASE_SHIFT;
    let aligned = scaled as usize / frame_bytes * frame_bytes;

    if dst_bytes < PROBE_MEMO_LIMIT {
        cache.store(dst_bytes, aligned);
    }
    aligned
}

/// Estimate the destination bytes produced from `src_bytes` of input
///
/// Scales by the inverse pitch (source to destination direction), rounding
/// to nearest, and aligns down to a whole destination frame.
pub(crate) fn dest_bytes_produced(
    cache: &mut ProbeCache,
    pitch: u32,
    frame_bytes: usize,
    src_bytes: usize,
) -> usize {
    if src_bytes < PROBE_MEMO_LIMIT {
        if let Some(hit) = cache.lookup(src_bytes) {
            return hit;
        }
    }

    let scaled = ((src_bytes as u64) << PHASE_SHIFT) + u64::from(pitch / 2);
    let aligned = (scaled / u64::from(pitch)) as usize / frame_bytes * frame_bytes;

    if src_bytes < PROBE_MEMO_LIMIT {
        cache.store(src_bytes, aligned);
    }
    aligned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halving_direction() {
        // 8000 -> 16000: pitch 1024, source side is half the destination.
        let mut cache = ProbeCache::default();
        assert_eq!(source_bytes_needed(&mut cache, 1024, 2, 4096), 2048);
    }

    #[test]
    fn test_doubling_direction() {
        let mut cache = ProbeCache::default();
        assert_eq!(dest_bytes_produced(&mut cache, 1024, 2, 2048), 4096);
    }

    #[test]
    fn test_results_are_frame_aligned() {
        let mut cache = ProbeCache::default();
        // Stereo frames are 4 bytes; 1882 is the 44100 -> 48000 pitch.
        let needed = source_bytes_needed(&mut cache, 1882, 4, 1000);
        assert_eq!(needed % 4, 0);

        let mut cache = ProbeCache::default();
        let produced = dest_bytes_produced(&mut cache, 1882, 4, 1000);
        assert_eq!(produced % 4, 0);
    }

    #[test]
    fn test_memo_hit_returns_cached_result() {
        let mut cache = ProbeCache::default();
        let first = source_bytes_needed(&mut cache, 1882, 2, 4096);
        assert_eq!(cache.lookup(4096), Some(first));
        assert_eq!(source_bytes_needed(&mut cache, 1882, 2, 4096), first);
    }

    #[test]
    fn test_large_probes_bypass_memo() {
        let mut cache = ProbeCache::default();
        let probe = PROBE_MEMO_LIMIT + 2048;
        let first = source_bytes_needed(&mut cache, 1882, 2, probe);
        assert_eq!(cache.lookup(probe), None);
        assert_eq!(source_bytes_needed(&mut cache, 1882, 2, probe), first);
    }
}
