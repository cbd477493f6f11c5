//! Stateful sample streams. Each stream is owned by exactly one
//! worker (or one pixel task) and advanced in place.
//!
//! ## Halton Sequence
//!
//! The incremental Halton generator produces the radical inverse of
//! 1, 2, 3, ... in a single prime base without recomputing the digits
//! of every index. Successive dimensions use successive primes as
//! bases (see
//! [next_prime](../core/mcqmc/fn.next_prime.html)).
//!
//! ## Scrambled Sequence
//!
//! Walks the base-2 van der Corput, Sobol' or Larcher & Pillichshammer
//! points one index at a time, XOR-scrambled with a per-stream value
//! (e.g. a hash of the pixel index).

pub mod halton;
pub mod scrambled;
