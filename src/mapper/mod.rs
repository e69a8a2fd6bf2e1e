//! Per-pixel mapping functions for ordered, random and custom dithering.
//!
//! A [`PixelMapper`] transforms one pixel at a time from its coordinates and
//! linear RGB color, with no access to neighbors. That independence is what
//! lets the pixel-map driver run embarrassingly parallel across image bands.
//!
//! Mappers are invoked without synchronization from multiple workers. An
//! implementation must be safe under concurrent invocation, and only a mapper
//! that depends on nothing but `(x, y, r, g, b)` produces deterministic
//! output; anything drawing from a shared sequential source (a random
//! generator, a counter) needs
//! [`single_threaded`](crate::Ditherer::single_threaded).

mod noise;
mod parallel;

pub use noise::{RandomNoiseGray, RandomNoiseRgb};

pub(crate) use parallel::map_region;

use crate::api::ConfigError;
use crate::color::round_clamp;
use crate::ordered::{bayer_cells, OrderedMatrix};

/// A per-pixel color transform in linear RGB.
///
/// Channel values are in `[0, 65535]` and the returned triple must be too;
/// use [`round_clamp`](crate::round_clamp) when narrowing from floats. The
/// returned color does not need to belong to any palette — the driver
/// quantizes it afterwards.
pub trait PixelMapper: Send + Sync {
    /// Map the linear RGB color of the pixel at `(x, y)`.
    fn map(&self, x: u32, y: u32, r: u16, g: u16, b: u16) -> (u16, u16, u16);
}

impl<F> PixelMapper for F
where
    F: Fn(u32, u32, u16, u16, u16) -> (u16, u16, u16) + Send + Sync,
{
    #[inline]
    fn map(&self, x: u32, y: u32, r: u16, g: u16, b: u16) -> (u16, u16, u16) {
        self(x, y, r, g, b)
    }
}

/// Shared core of the threshold mappers: a precomputed additive offset
/// matrix, tiled across the image.
#[derive(Debug, Clone)]
struct ThresholdOffsets {
    offsets: Vec<Vec<f32>>,
    width: usize,
    height: usize,
}

impl ThresholdOffsets {
    fn new(matrix: &OrderedMatrix, strength: f32) -> Result<Self, ConfigError> {
        let offsets = matrix.offsets(strength)?;
        Ok(Self {
            height: offsets.len(),
            width: offsets[0].len(),
            offsets,
        })
    }

    #[inline]
    fn apply(&self, x: u32, y: u32, r: u16, g: u16, b: u16) -> (u16, u16, u16) {
        let o = self.offsets[y as usize % self.height][x as usize % self.width];
        (
            round_clamp(f32::from(r) + o),
            round_clamp(f32::from(g) + o),
            round_clamp(f32::from(b) + o),
        )
    }
}

/// Ordered dithering with a generated Bayer threshold matrix.
///
/// Both dimensions must be powers of two, except for the three hand-derived
/// rectangular sizes 3x3, 5x3 and 3x5. Construction precomputes the additive
/// offsets, so build one once and reuse it.
///
/// Strength is usually in `[-1, 1]`: 1.0 dithers the full range, smaller
/// magnitudes shrink the dithered range (Bayer matrices brighten the image;
/// 0.64 is a common pick for color work), and negative values flip the bias
/// toward darkening.
///
/// # Example
///
/// ```
/// use palette_dither::{Algorithm, Bayer, Ditherer, Palette, Rgba16};
///
/// let palette = Palette::new(&[Rgba16::BLACK, Rgba16::WHITE]).unwrap();
/// let bayer = Bayer::new(4, 4, 1.0).unwrap();
/// let ditherer = Ditherer::new(palette, Algorithm::mapper(bayer));
/// ```
#[derive(Debug, Clone)]
pub struct Bayer {
    offsets: ThresholdOffsets,
}

impl Bayer {
    /// Build a Bayer mapper for the given matrix dimensions and strength.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BayerDimensions`] unless both dimensions are
    /// powers of two or the pair is one of 3x3, 5x3, 3x5.
    pub fn new(x: u32, y: u32, strength: f32) -> Result<Self, ConfigError> {
        let (cells, max) = bayer_cells(x, y)?;
        let matrix = OrderedMatrix { matrix: cells, max };
        Ok(Self {
            offsets: ThresholdOffsets::new(&matrix, strength)?,
        })
    }
}

impl PixelMapper for Bayer {
    #[inline]
    fn map(&self, x: u32, y: u32, r: u16, g: u16, b: u16) -> (u16, u16, u16) {
        self.offsets.apply(x, y, r, g, b)
    }
}

/// Ordered dithering with a caller-supplied threshold matrix.
///
/// This is how the named clustered-dot matrices in
/// [`ordered`](crate::ordered) — or any matrix found elsewhere — become
/// usable as a pixel mapper, including on color images and multi-color
/// palettes. See [`Bayer`] for the meaning of `strength`.
#[derive(Debug, Clone)]
pub struct OrderedMapper {
    offsets: ThresholdOffsets,
}

impl OrderedMapper {
    /// Precompute offsets for the given matrix and strength.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the matrix is empty, ragged, or has a
    /// zero divisor.
    pub fn new(matrix: &OrderedMatrix, strength: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            offsets: ThresholdOffsets::new(matrix, strength)?,
        })
    }
}

impl PixelMapper for OrderedMapper {
    #[inline]
    fn map(&self, x: u32, y: u32, r: u16, g: u16, b: u16) -> (u16, u16, u16) {
        self.offsets.apply(x, y, r, g, b)
    }
}
