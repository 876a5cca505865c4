//! Stitch pattern generation from an injected bit source
//!
//! A stitch pattern is the random seed of the whole piece: one bit per grid
//! row or column, deciding where that line's running stitches start. Bits are
//! drawn through the `BitSource` trait so callers can substitute a
//! deterministic sequence for the seeded generator.

use bitvec::prelude::BitVec;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of individual uniformly random bits
pub trait BitSource {
    /// Draw the next bit from the source
    fn next_bit(&mut self) -> bool;
}

/// Seeded bit source for reproducible stochastic choices
pub struct RandomBitSource {
    rng: StdRng,
}

impl RandomBitSource {
    /// Create a deterministic bit source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BitSource for RandomBitSource {
    fn next_bit(&mut self) -> bool {
        self.rng.random::<bool>()
    }
}

/// Replays a fixed bit sequence, cycling when exhausted
///
/// Lets tests pin down exact edge and color maps instead of asserting on
/// whatever the ambient generator produced.
pub struct FixedBitSource {
    bits: Vec<bool>,
    cursor: usize,
}

impl FixedBitSource {
    /// Create a source that replays `bits` in order
    pub const fn new(bits: Vec<bool>) -> Self {
        Self { bits, cursor: 0 }
    }
}

impl BitSource for FixedBitSource {
    fn next_bit(&mut self) -> bool {
        let bit = self.bits.get(self.cursor).copied().unwrap_or(false);
        self.cursor = (self.cursor + 1) % self.bits.len().max(1);
        bit
    }
}

/// Immutable ordered sequence of stitch offset bits
///
/// One instance seeds the horizontal axis and one the vertical axis.
/// Regenerated wholesale on a new-pattern request, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchPattern {
    bits: BitVec,
}

impl StitchPattern {
    /// Draw a pattern of `length` independent bits from the source
    pub fn generate(length: usize, source: &mut dyn BitSource) -> Self {
        let mut bits = BitVec::with_capacity(length);
        for _ in 0..length {
            bits.push(source.next_bit());
        }
        Self { bits }
    }

    /// Build a pattern from an explicit bit slice
    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.iter().copied().collect(),
        }
    }

    /// Number of bits in the pattern
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the pattern holds no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`, `false` when out of range
    pub fn bit(&self, index: usize) -> bool {
        self.bits.get(index).is_some_and(|b| *b)
    }
}
