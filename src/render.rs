//! Rasterization of a module matrix to pixels and terminal text.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::models::{ModuleMatrix, RenderOptions};

/// Pixel value of a dark module
const DARK: u8 = 0;
/// Pixel value of a light module
const LIGHT: u8 = 255;

/// Render the matrix as a grayscale image, quiet zone included.
///
/// Every module becomes a `module_px` x `module_px` pixel block; dark
/// modules are 0, light modules 255.
pub fn render_image(matrix: &ModuleMatrix, options: &RenderOptions) -> GrayImage {
    let padded = matrix.with_quiet_zone(options.quiet_zone);
    let px = options.module_px.max(1);
    let side = (padded.size() * px) as u32;
    GrayImage::from_fn(side, side, |x, y| {
        let col = x as usize / px;
        let row = y as usize / px;
        Luma([if padded.is_dark(col, row) { DARK } else { LIGHT }])
    })
}

/// Render the matrix and save it as an image file; the format follows the
/// path extension
pub fn save_image<P: AsRef<Path>>(
    matrix: &ModuleMatrix,
    options: &RenderOptions,
    path: P,
) -> Result<(), image::ImageError> {
    render_image(matrix, options).save(path)
}

/// Unicode half-block rendering for terminals, two matrix rows per text line
pub fn render_text(matrix: &ModuleMatrix, quiet_zone: usize) -> String {
    let padded = matrix.with_quiet_zone(quiet_zone);
    let n = padded.size();
    let mut out = String::with_capacity((n + 1) * n.div_ceil(2));
    for row in (0..n).step_by(2) {
        for col in 0..n {
            let top = padded.is_dark(col, row);
            let bottom = row + 1 < n && padded.is_dark(col, row + 1);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}
