//! Two-coloring of the cell grid from an edge map
//!
//! The coloring is a constraint propagation: adjacent cells must differ in
//! color exactly when a stitch edge separates them. A single seed cell plus
//! that rule determines every other cell, so the map is built in one sweep
//! from the seed corner. The seed choice only fixes a global inversion; the
//! visual structure is identical under a uniform color swap.

use ndarray::Array2;

use crate::algorithm::edges::EdgeMap;

/// Boolean cell colors for an N×N grid
///
/// `false` selects the first palette color, `true` the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    cells: Array2<bool>,
    subdivisions: usize,
}

impl ColorMap {
    /// Propagate the coloring over the grid described by `edges`
    ///
    /// Anchors at the bottom-right corner with color `false` and walks rows
    /// last to first, columns last to first within each row. The rightmost
    /// cell of a row seeds from the cell below it through the bottom edge;
    /// every other cell seeds from its right neighbour through the right
    /// edge. Pure and deterministic: the same edge map always yields the
    /// same color map.
    pub fn build(edges: &EdgeMap) -> Self {
        let n = edges.subdivisions();
        let mut cells = Array2::from_elem((n, n), false);

        for i in (0..n).rev() {
            for j in (0..n).rev() {
                let color = if j + 1 < n {
                    let right = cells.get([i, j + 1]).copied().unwrap_or(false);
                    right ^ edges.has_right_edge(i, j)
                } else if i + 1 < n {
                    let below = cells.get([i + 1, j]).copied().unwrap_or(false);
                    below ^ edges.has_bottom_edge(i, j)
                } else {
                    // Seed cell
                    false
                };

                if let Some(cell) = cells.get_mut([i, j]) {
                    *cell = color;
                }
            }
        }

        Self {
            cells,
            subdivisions: n,
        }
    }

    /// Number of cells along each grid axis
    pub const fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Color of cell `(row, col)`, `false` when out of range
    pub fn color(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).copied().unwrap_or(false)
    }

    /// Uniformly swap the two colors
    ///
    /// An inverted map satisfies the same adjacency constraints as the
    /// original.
    pub fn invert(&self) -> Self {
        Self {
            cells: self.cells.mapv(|cell| !cell),
            subdivisions: self.subdivisions,
        }
    }
}
