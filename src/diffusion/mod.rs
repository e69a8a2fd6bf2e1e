//! Error diffusion dithering.
//!
//! Error diffusion quantizes pixels in scan order and carries each pixel's
//! quantization residual forward to not-yet-visited neighbors, weighted by a
//! small matrix. The scan is sequential by nature: every pixel depends on the
//! errors its predecessors pushed into it, so this driver is single-threaded
//! regardless of configuration.
//!
//! All error arithmetic happens in linear RGB over a dense 16-bit working
//! buffer that is filled from the source region in one pass before the scan.

mod matrices;

pub use matrices::{
    atkinson, burkes, false_floyd_steinberg, floyd_steinberg, jarvis_judice_ninke, sierra,
    sierra_2_4a, sierra_lite, sierra_two_row, sierra3, simple_2d, steven_pigeon, stucki,
    two_row_sierra,
};

use crate::api::ConfigError;
use crate::color::{round_clamp, Rgba16};
use crate::palette::Palette;
use crate::raster::{Rect, RgbaImage};

/// A rectangular error-diffusion weight matrix.
///
/// The current pixel is the cell directly left of the first non-zero weight
/// in the top row; the zero cells before it stand for pixels that were
/// already visited. Weights normally sum to 1 at full strength, but this is
/// not enforced — [`with_strength`](DiffusionMatrix::with_strength)
/// deliberately produces sums below 1.
///
/// # Example
///
/// ```
/// use palette_dither::DiffusionMatrix;
///
/// // Floyd-Steinberg by hand
/// let m = DiffusionMatrix::new(vec![
///     vec![0.0, 0.0, 7.0 / 16.0],
///     vec![3.0 / 16.0, 5.0 / 16.0, 1.0 / 16.0],
/// ])
/// .unwrap();
/// assert_eq!(m.current_pixel(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionMatrix {
    rows: Vec<Vec<f32>>,
}

impl DiffusionMatrix {
    /// Create a matrix from rows of weights.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMatrix`] for an empty matrix or empty
    /// rows, and [`ConfigError::RaggedMatrix`] when rows differ in length.
    pub fn new(rows: Vec<Vec<f32>>) -> Result<Self, ConfigError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ConfigError::EmptyMatrix);
        }
        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return Err(ConfigError::RaggedMatrix);
        }
        Ok(Self { rows })
    }

    /// The weight rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// The index of the current-pixel cell in the top row.
    ///
    /// This is the cell left of the first non-zero weight. If the whole top
    /// row is zero the middle of the row is assumed.
    ///
    /// # Panics
    ///
    /// Panics if the top row starts with a non-zero weight — such a matrix
    /// has no current-pixel slot and would diffuse error onto pixels that
    /// were already quantized.
    pub fn current_pixel(&self) -> usize {
        for (i, &w) in self.rows[0].iter().enumerate() {
            if w != 0.0 {
                assert!(
                    i > 0,
                    "malformed diffusion matrix: top row has no current-pixel slot"
                );
                return i - 1;
            }
        }
        // Top row all zero: assume the current pixel sits in the middle.
        self.rows[0].len() / 2
    }

    /// The offset from the current pixel for the cell at `(x, y)`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, current: usize) -> (i64, i64) {
        (x as i64 - current as i64, y as i64)
    }

    /// Scale every weight, so the matrix is applied with partial strength.
    ///
    /// Strength is usually in `(0, 1]`; 1.0 returns the matrix unchanged.
    /// Lowering it increases contrast and can reduce noise in the output.
    #[must_use]
    pub fn with_strength(mut self, strength: f32) -> Self {
        if strength == 1.0 {
            return self;
        }
        for row in &mut self.rows {
            for w in row {
                *w *= strength;
            }
        }
        self
    }
}

/// Sequential error-diffusion scan over a region of `img`.
///
/// `rect` must already be clipped to the image bounds.
pub(crate) fn diffuse_region(
    img: &mut RgbaImage,
    rect: Rect,
    palette: &Palette,
    matrix: &DiffusionMatrix,
    serpentine: bool,
) {
    let current = matrix.current_pixel();
    let width = rect.width() as usize;
    let height = rect.height() as usize;
    if width == 0 || height == 0 {
        return;
    }

    // Dense linear working buffer over the region, prefilled in one pass.
    let mut linear: Vec<[u16; 3]> = Vec::with_capacity(width * height);
    for y in rect.min_y..rect.max_y {
        for x in rect.min_x..rect.max_x {
            let (rgb, _) = img.linear_at(x as u32, y as u32);
            linear.push(rgb);
        }
    }

    for y in 0..height {
        // Serpentine reverses even rows, so row 0 runs right-to-left.
        let reverse = serpentine && y % 2 == 0;

        for step in 0..width {
            let x = if reverse { width - 1 - step } else { step };
            let [old_r, old_g, old_b] = linear[y * width + x];

            let idx = palette.closest(old_r, old_g, old_b);

            let ax = (rect.min_x + x as i32) as u32;
            let ay = (rect.min_y + y as i32) as u32;
            let (_, alpha) = img.linear_at(ax, ay);
            let chosen = palette.color(idx);
            img.set_pixel(ax, ay, Rgba16::new(chosen.r, chosen.g, chosen.b, alpha));

            let target = palette.linear(idx);
            let err = [
                i32::from(old_r) - i32::from(target[0]),
                i32::from(old_g) - i32::from(target[1]),
                i32::from(old_b) - i32::from(target[2]),
            ];

            for (yy, row) in matrix.rows().iter().enumerate() {
                for (xx, &w) in row.iter().enumerate() {
                    if w == 0.0 {
                        continue;
                    }
                    let (mut dx, dy) = matrix.offset(xx, yy, current);
                    if reverse {
                        dx = -dx;
                    }
                    let tx = x as i64 + dx;
                    let ty = y as i64 + dy;
                    if tx < 0 || tx >= width as i64 || ty >= height as i64 {
                        continue;
                    }
                    let cell = &mut linear[ty as usize * width + tx as usize];
                    for (c, &e) in cell.iter_mut().zip(&err) {
                        *c = round_clamp(f32::from(*c) + e as f32 * w);
                    }
                }
            }
        }
    }
}
