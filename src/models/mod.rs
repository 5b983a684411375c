/// Symbol layout and rendering parameters
pub mod geometry;
/// Dark/light module grid
pub mod matrix;

pub use geometry::{RenderOptions, SymbolGeometry};
pub use matrix::ModuleMatrix;
