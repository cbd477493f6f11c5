//! The **Sequence** enum is the single interface the integrator uses
//! to draw one-dimensional sample values, whatever generator sits
//! behind it. Each worker owns its own **Sequence** values, none of
//! them is meant to be shared between threads while advancing.

// others
use strum_macros::{Display, EnumIter, EnumString};
// mcqmc
use crate::core::mcqmc::Float;
use crate::core::rng::MwcRandom;
use crate::samplers::halton::HaltonSequence;
use crate::samplers::scrambled::ScrambledSequence;

/// Names of the available generators (as accepted on the command line).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SequenceKind {
    Halton,
    Random,
    #[strum(serialize = "vdc", serialize = "van_der_corput")]
    VanDerCorput,
    Sobol,
    #[strum(serialize = "lp", serialize = "larcher_pillichshammer")]
    LarcherPillichshammer,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Sequence {
    Halton(HaltonSequence),
    Random(MwcRandom),
    VanDerCorput(ScrambledSequence),
    Sobol(ScrambledSequence),
    LarcherPillichshammer(ScrambledSequence),
}

impl Sequence {
    /// Build a stream of the given *kind*. *base* is only used by
    /// Halton, *seed* only by the random generator, *scramble* only by
    /// the base-2 constructions. *start* seeks the stream: the base-2
    /// constructions return index *start* first, Halton behaves like
    /// [set_start](HaltonSequence::set_start) and returns the value for
    /// `start + 1` (it never emits the zero point), the random
    /// generator skips *start* draws.
    pub fn create(kind: SequenceKind, base: u32, start: u32, scramble: u32, seed: u32) -> Self {
        match kind {
            SequenceKind::Halton => {
                let mut halton = HaltonSequence::new(base);
                halton.set_start(start);
                Sequence::Halton(halton)
            }
            SequenceKind::Random => {
                let mut rng = MwcRandom::with_seed(seed);
                for _ in 0..start {
                    rng.uniform_uint32();
                }
                Sequence::Random(rng)
            }
            SequenceKind::VanDerCorput => {
                Sequence::VanDerCorput(ScrambledSequence::new(start, scramble))
            }
            SequenceKind::Sobol => Sequence::Sobol(ScrambledSequence::new(start, scramble)),
            SequenceKind::LarcherPillichshammer => {
                Sequence::LarcherPillichshammer(ScrambledSequence::new(start, scramble))
            }
        }
    }
    pub fn kind(&self) -> SequenceKind {
        match self {
            Sequence::Halton(_) => SequenceKind::Halton,
            Sequence::Random(_) => SequenceKind::Random,
            Sequence::VanDerCorput(_) => SequenceKind::VanDerCorput,
            Sequence::Sobol(_) => SequenceKind::Sobol,
            Sequence::LarcherPillichshammer(_) => SequenceKind::LarcherPillichshammer,
        }
    }
    pub fn get_1d(&mut self) -> Float {
        match self {
            Sequence::Halton(sequence) => sequence.get_next(),
            Sequence::Random(sequence) => sequence.uniform_float(),
            Sequence::VanDerCorput(sequence) => sequence.next_van_der_corput(),
            Sequence::Sobol(sequence) => sequence.next_sobol(),
            Sequence::LarcherPillichshammer(sequence) => sequence.next_larcher_pillichshammer(),
        }
    }
}
