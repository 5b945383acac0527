//! Injectable randomness.
//!
//! Generation never reaches for an ambient RNG: every random choice goes through
//! a [`RandomSource`] passed in by the caller. Any `rand::Rng` is a source, so a
//! seeded `StdRng` gives reproducible grids and `thread_rng()` gives variety.

use rand::Rng;

pub trait RandomSource {
    /// Next value, uniformly distributed in `[0, 1)`.
    fn next(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "next_index called with empty range");
        // guard against sources that return exactly 1.0
        ((self.next() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<R: Rng> RandomSource for R {
    fn next(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
