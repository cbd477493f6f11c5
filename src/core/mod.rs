//! Numeric building blocks shared by all generators:
//!
//! - definitions of **Float** and the 2^-32 scale (mcqmc)
//! - base-2 radical inverses and the direct radical inverse (lowdiscrepancy)
//! - the multiply-with-carry generator (rng)
//! - seeded shuffling (sampling)
//! - the **Sequence** dispatch used by integrators (sampler)

pub mod lowdiscrepancy;
pub mod mcqmc;
pub mod rng;
pub mod sampler;
pub mod sampling;
