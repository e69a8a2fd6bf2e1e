//! Ordered (threshold-matrix) dithering.
//!
//! An ordered dither tiles a fixed threshold matrix across the image and adds
//! a per-cell offset to every pixel before quantization. Unlike error
//! diffusion it has no cross-pixel data flow, so it runs in the parallel
//! pixel-map driver.

mod bayer;
mod matrices;

pub use matrices::{
    clustered_dot_4x4, clustered_dot_6x6, clustered_dot_6x6_2, clustered_dot_6x6_3,
    clustered_dot_8x8, clustered_dot_diagonal_16x16, clustered_dot_diagonal_6x6,
    clustered_dot_diagonal_8x8, clustered_dot_diagonal_8x8_2, clustered_dot_diagonal_8x8_3,
    clustered_dot_horizontal_line, clustered_dot_spiral_5x5, clustered_dot_vertical_line,
    horizontal_3x5, vertical_5x3,
};

pub(crate) use bayer::bayer_cells;

use serde::{Deserialize, Serialize};

use crate::api::ConfigError;

/// The smallest f32 above 0.5. Offsetting the threshold by this instead of
/// exactly 0.5 keeps cells at the mid-threshold from rounding pure black up
/// by one step.
const HALF_UP: f32 = 0.500_000_06;

/// A rectangular ordered-dither threshold matrix plus its divisor.
///
/// Cell values should range over `[0, max - 1]`. `max` is usually the product
/// of the dimensions, or the largest cell value plus one for matrices with
/// repeated values (diagonal ones).
///
/// The type serializes with the field names `matrix` and `max`:
///
/// ```
/// use palette_dither::OrderedMatrix;
///
/// let odm: OrderedMatrix =
///     serde_json::from_str(r#"{"matrix":[[0,2],[3,1]],"max":4}"#).unwrap();
/// assert_eq!(odm.max, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedMatrix {
    /// Threshold cells, row-major. Every row must have the same length.
    pub matrix: Vec<Vec<u32>>,
    /// The divisor applied to cell values.
    pub max: u32,
}

impl OrderedMatrix {
    /// Create a matrix, validating shape and divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMatrix`], [`ConfigError::RaggedMatrix`] or
    /// [`ConfigError::ZeroMax`] for malformed inputs.
    pub fn new(matrix: Vec<Vec<u32>>, max: u32) -> Result<Self, ConfigError> {
        let odm = Self { matrix, max };
        odm.validate()?;
        Ok(odm)
    }

    /// Validate shape and divisor. Deserialized and literal-constructed
    /// matrices go through this when converted to a mapper.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix.is_empty() || self.matrix[0].is_empty() {
            return Err(ConfigError::EmptyMatrix);
        }
        let width = self.matrix[0].len();
        if self.matrix.iter().any(|r| r.len() != width) {
            return Err(ConfigError::RaggedMatrix);
        }
        if self.max == 0 {
            return Err(ConfigError::ZeroMax);
        }
        Ok(())
    }

    /// Precompute the per-cell additive offsets for the given strength.
    ///
    /// Strength is usually in `[-1, 1]`; 1.0 dithers the full color range,
    /// values closer to zero shrink the dithered range, and negative values
    /// flip the matrix's brightness bias.
    pub(crate) fn offsets(&self, strength: f32) -> Result<Vec<Vec<f32>>, ConfigError> {
        self.validate()?;
        let scale = 65535.0 * strength;
        Ok(self
            .matrix
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| threshold_to_addition(scale, v, self.max))
                    .collect()
            })
            .collect())
    }
}

/// Convert a threshold cell to an additive offset.
///
/// The offset is centered so that a matrix covering `[0, max - 1]` shifts
/// colors symmetrically around zero (before the strength sign).
#[inline]
fn threshold_to_addition(scale: f32, value: u32, max: u32) -> f32 {
    scale * ((value + 1) as f32 / max as f32 - HALF_UP)
}
