//! Structural pattern placement (finder, timing, alignment).
//!
//! Stamps the function modules a scanner needs to locate and orient the
//! symbol. Data placement, masking and error correction are downstream
//! stages that fill the remaining free modules.

/// Ring/block stamping primitives
pub mod patterns;

use log::debug;

use crate::models::{ModuleMatrix, SymbolGeometry};
use patterns::{Region, stamp_block, stamp_ring};

/// Side length of a finder pattern in modules
const FINDER_SIDE: usize = 7;
/// Side length of a finder pattern's solid core
const FINDER_CORE_SIDE: usize = 3;
/// Side length of an alignment pattern ring
const ALIGNMENT_SIDE: usize = 5;
/// Row and column carrying the timing patterns
const TIMING_INDEX: usize = 6;

/// Places the structural patterns for one symbol layout.
pub struct MatrixBuilder {
    geometry: SymbolGeometry,
}

impl MatrixBuilder {
    /// Builder for the given layout
    pub fn new(geometry: SymbolGeometry) -> Self {
        Self { geometry }
    }

    /// Build the structural matrix: finder, then timing, then alignment.
    ///
    /// Timing and alignment spans are defined relative to the finder-free
    /// interior, so the corners go in first; the stamping itself is
    /// idempotent and order-insensitive.
    pub fn build(&self) -> ModuleMatrix {
        let mut matrix = ModuleMatrix::new(self.geometry.size);
        self.place_finder_patterns(&mut matrix);
        self.place_timing_patterns(&mut matrix);
        self.place_alignment_patterns(&mut matrix);
        debug!(
            "structural matrix ready: {}x{}, {} dark modules",
            matrix.size(),
            matrix.size(),
            matrix.dark_count()
        );
        matrix
    }

    /// Stamp the three 7x7 finder patterns: a hollow square ring plus a
    /// solid 3x3 core, at every corner except the bottom-right.
    pub fn place_finder_patterns(&self, matrix: &mut ModuleMatrix) {
        let n = self.geometry.size;
        let corners = [(0, 0), (n - FINDER_SIDE, 0), (0, n - FINDER_SIDE)];
        for (x, y) in corners {
            stamp_ring(matrix, Region::square(x, y, FINDER_SIDE));
            stamp_block(
                matrix,
                Region::centered(x + FINDER_SIDE / 2, y + FINDER_SIDE / 2, FINDER_CORE_SIDE),
            );
        }
    }

    /// Stamp alternating dark modules along row 6 and column 6, restricted
    /// to the span between the finder corners. Even indices are dark, so
    /// the strip starts dark at index 8.
    pub fn place_timing_patterns(&self, matrix: &mut ModuleMatrix) {
        for i in self.geometry.timing_span() {
            if i % 2 == 0 {
                matrix.stamp(TIMING_INDEX, i);
                matrix.stamp(i, TIMING_INDEX);
            }
        }
    }

    /// Stamp one alignment pattern per configured center: a single dark
    /// module with a 5x5 hollow ring around it.
    ///
    /// Centers come 1-indexed from the standard's version tables; each is
    /// stamped independently, and the caller is responsible for supplying
    /// centers that clear the finder corners.
    pub fn place_alignment_patterns(&self, matrix: &mut ModuleMatrix) {
        for &center in &self.geometry.alignment_centers {
            let c = center.saturating_sub(1);
            matrix.stamp(c, c);
            stamp_ring(matrix, Region::centered(c, c, ALIGNMENT_SIDE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version2_matrix() -> ModuleMatrix {
        MatrixBuilder::new(SymbolGeometry::version2()).build()
    }

    #[test]
    fn test_finder_pattern_shape() {
        let geometry = SymbolGeometry {
            size: 25,
            alignment_centers: Vec::new(),
        };
        let mut matrix = ModuleMatrix::new(25);
        MatrixBuilder::new(geometry).place_finder_patterns(&mut matrix);

        // ring border
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(6, 6));
        assert!(matrix.is_dark(3, 0));
        // gap between ring and core
        assert!(!matrix.is_dark(1, 1));
        assert!(!matrix.is_dark(5, 5));
        // solid core
        for i in 2..5 {
            for j in 2..5 {
                assert!(matrix.is_dark(i, j));
            }
        }
        // 24-cell ring + 9-cell core, three times
        assert_eq!(matrix.dark_count(), 3 * (24 + 9));
    }

    #[test]
    fn test_finder_pattern_rotation_symmetry() {
        let mut matrix = ModuleMatrix::new(25);
        MatrixBuilder::new(SymbolGeometry::version2()).place_finder_patterns(&mut matrix);
        for i in 0..7 {
            for j in 0..7 {
                assert_eq!(matrix.is_dark(i, j), matrix.is_dark(6 - i, 6 - j));
            }
        }
    }

    #[test]
    fn test_finder_patterns_never_overlap() {
        for size in 21..=57 {
            let geometry = SymbolGeometry {
                size,
                alignment_centers: Vec::new(),
            };
            let mut matrix = ModuleMatrix::new(size);
            MatrixBuilder::new(geometry).place_finder_patterns(&mut matrix);
            // disjoint corners stamp exactly three times one pattern
            assert_eq!(matrix.dark_count(), 3 * (24 + 9), "size {}", size);
        }
    }

    #[test]
    fn test_timing_pattern_alternates() {
        let matrix = version2_matrix();
        for i in 8..=17 {
            assert_eq!(matrix.is_dark(i, 6), i % 2 == 0, "col {}", i);
            assert_eq!(matrix.is_dark(6, i), i % 2 == 0, "row {}", i);
        }
        // the separator gap next to the top-left finder stays light
        assert!(!matrix.is_dark(7, 6));
        assert!(!matrix.is_dark(6, 7));
    }

    #[test]
    fn test_alignment_pattern_at_version2_center() {
        let matrix = version2_matrix();
        // dark center module at the 0-indexed center (17, 17)
        assert!(matrix.is_dark(17, 17));
        // 5x5 ring over [15, 20)
        assert!(matrix.is_dark(15, 15));
        assert!(matrix.is_dark(19, 19));
        assert!(matrix.is_dark(17, 15));
        // light band between ring and center
        assert!(!matrix.is_dark(16, 16));
        assert!(!matrix.is_dark(18, 18));
        assert!(!matrix.is_dark(16, 17));
    }

    #[test]
    fn test_empty_centers_yield_no_alignment_pattern() {
        let geometry = SymbolGeometry {
            size: 25,
            alignment_centers: Vec::new(),
        };
        let matrix = MatrixBuilder::new(geometry).build();
        assert!(!matrix.is_dark(17, 17));
        assert!(!matrix.is_dark(15, 15));
    }

    #[test]
    fn test_version2_dark_module_count() {
        // 3 finder patterns (33 each), 10 timing modules, one alignment
        // pattern (16-cell ring + center); all disjoint at this size
        assert_eq!(version2_matrix().dark_count(), 3 * 33 + 10 + 17);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(version2_matrix(), version2_matrix());
    }
}
