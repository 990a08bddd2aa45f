//! Injectable randomness source for credential selection.

use rand::Rng;

/// Randomness source used when several credentials are equally eligible.
///
/// Tests inject a deterministic implementation to assert which candidate
/// gets picked; production uses [`UniformRng`].
pub trait SelectionRng: Send + Sync {
    /// Pick an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRng;

impl SelectionRng for UniformRng {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_rng_stays_in_bounds() {
        let rng = UniformRng;
        for len in 1..=16 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }
}
