//! Random Number Generator
//!
//! Multiply-with-carry generator `x(n) = a * x(n-1) + carry mod 2^32`
//! with period `a * 2^31 - 1`. All arithmetic is done on `u32` with
//! explicit wrapping, so a seed reproduces the same stream on every
//! platform.

// mcqmc
use crate::core::mcqmc::{clamp_t, Float, MULT_RATIO, ONE_MINUS_EPSILON};

// Other multipliers with a long period:
// 1791398085 1929682203 1683268614 1965537969 1675393560
// 1967773755 1517746329 1447497129 1655692410 1606218150
pub const MWC_MULT: u32 = 1_791_398_085;
pub const MWC_MULT_HI: u32 = MWC_MULT >> 16;
pub const MWC_MULT_LO: u32 = MWC_MULT & 0xffff;
pub const MWC_DEFAULT_X: u32 = 30_903;

/// Random number generator
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MwcRandom {
    x: u32,
    c: u32,
}

impl Default for MwcRandom {
    fn default() -> Self {
        MwcRandom::new()
    }
}

impl MwcRandom {
    pub fn new() -> Self {
        MwcRandom {
            x: MWC_DEFAULT_X,
            c: 0_u32,
        }
    }
    /// The seed becomes the initial carry.
    pub fn with_seed(seed: u32) -> Self {
        MwcRandom {
            x: MWC_DEFAULT_X,
            c: seed,
        }
    }
    pub fn uniform_uint32(&mut self) -> u32 {
        let xh: u32 = self.x >> 16;
        let xl: u32 = self.x & 0xffff;
        self.x = self.x.wrapping_mul(MWC_MULT).wrapping_add(self.c);
        // high word of the 32x32 -> 64 product, low x low is omitted ...
        self.c = xh
            .wrapping_mul(MWC_MULT_HI)
            .wrapping_add(xh.wrapping_mul(MWC_MULT_LO) >> 16)
            .wrapping_add(xl.wrapping_mul(MWC_MULT_HI) >> 16);
        // ... and accounted for by the carry test
        if xl.wrapping_mul(MWC_MULT_LO) >= (!self.c).wrapping_add(1) {
            self.c = self.c.wrapping_add(1);
        }
        self.x
    }
    pub fn uniform_uint32_bounded(&mut self, b: u32) -> u32 {
        assert!(b > 0, "bounded draw needs a non-zero bound");
        // bitwise not in Rust is ! (not the ~ operator like in C)
        let threshold = (!b).wrapping_add(1) % b;
        loop {
            let r = self.uniform_uint32();
            if r >= threshold {
                return r % b;
            }
        }
    }
    /// Draw in [0, 1) in double precision.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.uniform_uint32() as f64 * MULT_RATIO
    }
    pub fn uniform_float(&mut self) -> Float {
        clamp_t(self.next() as Float, 0.0 as Float, ONE_MINUS_EPSILON)
    }
}
