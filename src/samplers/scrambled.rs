// mcqmc
use crate::core::lowdiscrepancy::{larcher_pillichshammer, sobol, van_der_corput};
use crate::core::mcqmc::Float;

/// Walks one of the stateless base-2 constructions index by index,
/// with a fixed scramble value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ScrambledSequence {
    pub index: u32,
    pub scramble: u32,
}

impl ScrambledSequence {
    pub fn new(start: u32, scramble: u32) -> Self {
        ScrambledSequence {
            index: start,
            scramble,
        }
    }
    /// Return the current index and step to the next one (wrapping
    /// after 2^32 samples).
    pub fn advance(&mut self) -> u32 {
        let i: u32 = self.index;
        self.index = self.index.wrapping_add(1);
        i
    }
    pub fn next_van_der_corput(&mut self) -> Float {
        van_der_corput(self.advance(), self.scramble)
    }
    pub fn next_sobol(&mut self) -> Float {
        sobol(self.advance(), self.scramble)
    }
    pub fn next_larcher_pillichshammer(&mut self) -> Float {
        larcher_pillichshammer(self.advance(), self.scramble)
    }
}
