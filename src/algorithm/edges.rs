//! Edge map derivation from a pair of stitch patterns
//!
//! An edge flag marks a stitch segment on a cell boundary. The presence of a
//! right edge at `(i, j)` depends on the horizontal pattern bit for column `j`
//! offset by the row parity `i`; bottom edges mirror this with the vertical
//! pattern and column parity. The parity offset is what turns independent
//! random bits into the interlocking running-stitch look: each stitch line
//! alternates along its row or column instead of scattering.

use ndarray::Array2;

use crate::algorithm::pattern::StitchPattern;
use crate::io::error::{PatternError, Result};

/// Per-cell stitch edge flags for an N×N grid
///
/// Derived purely from the two stitch patterns; carries no independent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    right: Array2<bool>,
    bottom: Array2<bool>,
    subdivisions: usize,
}

impl EdgeMap {
    /// Derive the edge map for a square grid from the two axis patterns
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when the two patterns differ in length.
    pub fn build(horizontal: &StitchPattern, vertical: &StitchPattern) -> Result<Self> {
        if horizontal.len() != vertical.len() {
            return Err(PatternError::DimensionMismatch {
                horizontal: horizontal.len(),
                vertical: vertical.len(),
            });
        }

        let n = horizontal.len();
        let right = Array2::from_shape_fn((n, n), |(i, j)| {
            (usize::from(horizontal.bit(j)) + i) % 2 == 1
        });
        let bottom = Array2::from_shape_fn((n, n), |(i, j)| {
            (usize::from(vertical.bit(i)) + j) % 2 == 1
        });

        Ok(Self {
            right,
            bottom,
            subdivisions: n,
        })
    }

    /// Number of cells along each grid axis
    pub const fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Whether a stitch separates cell `(row, col)` from the cell to its right
    pub fn has_right_edge(&self, row: usize, col: usize) -> bool {
        self.right.get([row, col]).copied().unwrap_or(false)
    }

    /// Whether a stitch separates cell `(row, col)` from the cell below it
    pub fn has_bottom_edge(&self, row: usize, col: usize) -> bool {
        self.bottom.get([row, col]).copied().unwrap_or(false)
    }

    /// Total number of set edge flags across both directions
    ///
    /// This is the exact number of stitch segments the renderer strokes.
    pub fn edge_count(&self) -> usize {
        let right = self.right.iter().filter(|&&flag| flag).count();
        let bottom = self.bottom.iter().filter(|&&flag| flag).count();
        right + bottom
    }
}
