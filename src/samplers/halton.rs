// others
use tracing::trace;
// mcqmc
use crate::core::mcqmc::{clamp_t, Float};

/// Guards the carry test against accumulated rounding error near 1.
pub const HALTON_EPSILON: f64 = 1e-10;

/// Fast incremental Halton (radical inverse) generator for a single
/// base. The running value has to be kept in double precision, single
/// precision accumulates too much error over long streams.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HaltonSequence {
    base: u32,
    inv_base: f64,
    value: f64,
}

impl HaltonSequence {
    pub fn new(base: u32) -> Self {
        let mut halton = HaltonSequence {
            base: 2,
            inv_base: 0.5,
            value: 0.0,
        };
        halton.set_base(base);
        halton
    }
    /// Start a fresh stream in *base*.
    pub fn set_base(&mut self, base: u32) {
        assert!(base >= 2, "Halton base has to be >= 2, got {}", base);
        self.base = base;
        self.inv_base = 1.0 / base as f64;
        self.value = 0.0;
        trace!(base = base, "Halton stream initialized");
    }
    pub fn base(&self) -> u32 {
        self.base
    }
    /// The running value (of the last returned sample) in full precision.
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn reset(&mut self) {
        self.value = 0.0;
    }
    /// Seek to the radical inverse of *i*, so that the next call of
    /// [get_next](HaltonSequence::get_next) returns the value for `i + 1`.
    pub fn set_start(&mut self, i: u32) {
        let mut i: u32 = i;
        let mut factor: f64 = self.inv_base;
        self.value = 0.0;
        while i > 0 {
            self.value += (i % self.base) as f64 * factor;
            i /= self.base;
            factor *= self.inv_base;
        }
    }
    pub fn get_next(&mut self) -> Float {
        let r: f64 = 1.0 - HALTON_EPSILON - self.value;
        if self.inv_base < r {
            self.value += self.inv_base;
        } else {
            // find the digit that does not carry
            let mut hh: f64 = self.inv_base;
            let mut h: f64 = self.inv_base;
            while h >= r {
                hh = h;
                h *= self.inv_base;
            }
            self.value += hh + h - 1.0;
        }
        clamp_t(self.value as Float, 0.0 as Float, 1.0 as Float)
    }
}

impl Iterator for HaltonSequence {
    type Item = Float;
    fn next(&mut self) -> Option<Float> {
        Some(self.get_next())
    }
}
