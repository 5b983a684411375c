use std::ops::RangeInclusive;

/// Layout parameters for one symbol version.
///
/// An explicit value rather than process-wide constants, so different
/// layouts can be built and tested side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGeometry {
    /// Modules per side
    pub size: usize,
    /// Alignment pattern centers, 1-indexed per the symbol-version standard.
    /// An empty list simply produces no alignment pattern.
    pub alignment_centers: Vec<usize>,
}

impl SymbolGeometry {
    /// The version-2 layout this crate targets: 25 modules per side, one
    /// alignment pattern centered at 18
    pub fn version2() -> Self {
        Self {
            size: 25,
            alignment_centers: vec![18],
        }
    }

    /// Span of row/column 6 carrying the timing patterns, between the
    /// finder corners
    pub fn timing_span(&self) -> RangeInclusive<usize> {
        8..=self.size - 8
    }
}

impl Default for SymbolGeometry {
    fn default() -> Self {
        Self::version2()
    }
}

/// Pixel-space parameters for rasterizing a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module side
    pub module_px: usize,
    /// Quiet zone width in modules, added on all four sides
    pub quiet_zone: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_px: 15,
            quiet_zone: 4,
        }
    }
}
