//! Stamping primitives shared by the structural patterns.
//!
//! The finder and alignment patterns use the same one-module-thick ring
//! rule, so it lives here once instead of being repeated per pattern.

use crate::models::ModuleMatrix;

/// Half-open bounding box `[x0, x1) x [y0, y1)` in module coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge (inclusive)
    pub x0: usize,
    /// Right edge (exclusive)
    pub x1: usize,
    /// Top edge (inclusive)
    pub y0: usize,
    /// Bottom edge (exclusive)
    pub y1: usize,
}

impl Region {
    /// Square box of `side` modules with its top-left corner at (x0, y0)
    pub fn square(x0: usize, y0: usize, side: usize) -> Self {
        Self {
            x0,
            x1: x0 + side,
            y0,
            y1: y0 + side,
        }
    }

    /// Square box of odd `side` modules centered on (cx, cy), clamped at
    /// the top-left grid edge
    pub fn centered(cx: usize, cy: usize, side: usize) -> Self {
        let half = side / 2;
        Self {
            x0: cx.saturating_sub(half),
            x1: cx + half + 1,
            y0: cy.saturating_sub(half),
            y1: cy + half + 1,
        }
    }
}

/// Stamp every cell on the perimeter of `region`, one module thick.
///
/// Edge membership is tested per axis: a cell is on the ring iff it sits on
/// the first or last column, or the first or last row, of the box. Cells
/// past the grid edge are dropped by [`ModuleMatrix::stamp`].
pub fn stamp_ring(matrix: &mut ModuleMatrix, region: Region) {
    for i in region.x0..region.x1 {
        for j in region.y0..region.y1 {
            if i == region.x0 || i == region.x1 - 1 || j == region.y0 || j == region.y1 - 1 {
                matrix.stamp(i, j);
            }
        }
    }
}

/// Stamp every cell of `region`
pub fn stamp_block(matrix: &mut ModuleMatrix, region: Region) {
    for i in region.x0..region.x1 {
        for j in region.y0..region.y1 {
            matrix.stamp(i, j);
        }
    }
}
