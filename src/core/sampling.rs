//! Reorder samples (or any other items) with a seeded generator.

// mcqmc
use crate::core::rng::MwcRandom;

/// Randomly permute *count* groups of *n_dimensions* consecutive
/// elements each. Every permutation is equally likely.
pub fn shuffle<T>(samp: &mut [T], count: usize, n_dimensions: usize, rng: &mut MwcRandom) {
    assert!(samp.len() >= count * n_dimensions);
    for i in 0..count {
        let other: usize = i + rng.uniform_uint32_bounded((count - i) as u32) as usize;
        for j in 0..n_dimensions {
            samp.swap(n_dimensions * i + j, n_dimensions * other + j);
        }
    }
}
