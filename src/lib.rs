//! qr_tag - fixed-version QR symbol construction
//!
//! Builds the structural module matrix (finder, timing and alignment
//! patterns) for a version-2-sized symbol, and encodes text into the
//! alphanumeric-mode bit-stream. The two halves share no state: a caller
//! composes the bit-stream with error-correction and data-placement logic
//! (not provided here) to fill the matrix's free modules.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Structural pattern placement (finder, timing, alignment)
pub mod builder;
/// Bit-stream encoding (alphanumeric mode)
pub mod encoder;
/// Core data structures (ModuleMatrix, SymbolGeometry, RenderOptions)
pub mod models;
/// Rasterization to images and terminal text
pub mod render;
/// Helpers for the qrtag binary
pub mod tools;

pub use builder::MatrixBuilder;
pub use encoder::{AlphanumericEncoder, AlphanumericTable, BitStream, CharacterTable, EncodeError};
pub use models::{ModuleMatrix, RenderOptions, SymbolGeometry};

use rayon::prelude::*;

/// Build the structural matrix for the default version-2 layout
pub fn build_symbol_matrix() -> ModuleMatrix {
    build_symbol_matrix_with(&SymbolGeometry::version2())
}

/// Build the structural matrix for an explicit layout
pub fn build_symbol_matrix_with(geometry: &SymbolGeometry) -> ModuleMatrix {
    MatrixBuilder::new(geometry.clone()).build()
}

/// Encode text into the alphanumeric bit-stream using the built-in table
pub fn encode_alphanumeric(text: &str) -> Result<BitStream, EncodeError> {
    AlphanumericEncoder::encode(text, &AlphanumericTable)
}

/// Encode many inputs in parallel; one result per input, order preserved.
///
/// Each encode owns its output exclusively, so inputs fan out across worker
/// threads with no shared state.
pub fn encode_batch(texts: &[&str]) -> Vec<Result<BitStream, EncodeError>> {
    texts.par_iter().map(|text| encode_alphanumeric(text)).collect()
}

/// Symbol generator bundling a layout and a character table.
pub struct Generator<T = AlphanumericTable> {
    geometry: SymbolGeometry,
    table: T,
}

impl Generator<AlphanumericTable> {
    /// Generator for the version-2 layout and the built-in alphabet
    pub fn new() -> Self {
        Self {
            geometry: SymbolGeometry::version2(),
            table: AlphanumericTable,
        }
    }
}

impl Default for Generator<AlphanumericTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CharacterTable> Generator<T> {
    /// Generator with an injected character table
    pub fn with_table(geometry: SymbolGeometry, table: T) -> Self {
        Self { geometry, table }
    }

    /// The layout this generator builds
    pub fn geometry(&self) -> &SymbolGeometry {
        &self.geometry
    }

    /// Structural matrix for this generator's layout
    pub fn build_matrix(&self) -> ModuleMatrix {
        MatrixBuilder::new(self.geometry.clone()).build()
    }

    /// Alphanumeric bit-stream for `text`
    pub fn encode(&self, text: &str) -> Result<BitStream, EncodeError> {
        AlphanumericEncoder::encode(text, &self.table)
    }
}
