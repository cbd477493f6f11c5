//! # mcqmc
//!
//! Sampling primitives for the sampling based integrators of an
//! offline renderer, plus the partition of the image into tiles the
//! render loop hands out to its worker threads:
//!
//! 1. [incremental Halton sequence][halton]
//! 2. [van der Corput, Sobol' and Larcher & Pillichshammer][lowdiscrepancy]
//!    radical inverses in base 2
//! 3. [multiply-with-carry][rng] pseudo-random numbers
//! 4. [FNV-1a hashing and prime bases][mcqmc]
//! 5. [image splitting][splitter] into (optionally shuffled) tiles
//!
//! Nothing in here blocks or allocates per sample. The tile list is
//! immutable after construction and can be shared between threads,
//! the sequence generators are owned by a single worker each.
//!
//! [halton]: samplers/halton/struct.HaltonSequence.html
//! [lowdiscrepancy]: core/lowdiscrepancy/index.html
//! [rng]: core/rng/struct.MwcRandom.html
//! [mcqmc]: core/mcqmc/index.html
//! [splitter]: splitter/struct.ImageSplitter.html

pub mod core;
pub mod samplers;
pub mod splitter;
