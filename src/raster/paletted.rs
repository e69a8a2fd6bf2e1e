//! Indexed-color raster output.

use crate::api::CapacityError;
use crate::color::Rgba16;
use crate::palette::Palette;

use super::image::Image;

/// A raster whose pixels are `u8` indices into an owned [`Palette`].
///
/// This is the canonical indexed output: one byte per pixel in row-major
/// order. The `u8` index type caps the palette at 256 colors.
///
/// # Example
///
/// ```
/// use palette_dither::{Image, Palette, PalettedImage, Rgba16};
///
/// let palette = Palette::new(&[Rgba16::BLACK, Rgba16::WHITE]).unwrap();
/// let img = PalettedImage::new(2, 2, palette).unwrap();
/// assert_eq!(img.pixel(0, 0), Rgba16::BLACK);
/// ```
#[derive(Debug, Clone)]
pub struct PalettedImage {
    /// Palette indices, one per pixel, row-major.
    indices: Vec<u8>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl PalettedImage {
    /// Create an image filled with palette index 0.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::PaletteTooLarge`] if the palette has more
    /// than 256 colors, which `u8` indices cannot address.
    pub fn new(width: u32, height: u32, palette: Palette) -> Result<Self, CapacityError> {
        if palette.len() > 256 {
            return Err(CapacityError::PaletteTooLarge {
                colors: palette.len(),
            });
        }
        Ok(Self {
            indices: vec![0; width as usize * height as usize],
            width,
            height,
            palette,
        })
    }

    /// Build an image from existing indices.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::PaletteTooLarge`] for palettes over 256
    /// colors.
    ///
    /// # Panics
    ///
    /// Panics if `indices.len() != width * height`.
    pub fn from_indices(
        width: u32,
        height: u32,
        indices: Vec<u8>,
        palette: Palette,
    ) -> Result<Self, CapacityError> {
        assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "index data length must be width * height"
        );
        if palette.len() > 256 {
            return Err(CapacityError::PaletteTooLarge {
                colors: palette.len(),
            });
        }
        Ok(Self {
            indices,
            width,
            height,
            palette,
        })
    }

    /// The palette this image indexes into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The palette indices, one per pixel, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// The palette index at `(x, y)`.
    #[inline]
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.indices[y as usize * self.width as usize + x as usize]
    }

    /// Set the palette index at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range for the palette.
    #[inline]
    pub fn set_index(&mut self, x: u32, y: u32, idx: u8) {
        assert!(
            usize::from(idx) < self.palette.len(),
            "palette index {idx} out of range"
        );
        self.indices[y as usize * self.width as usize + x as usize] = idx;
    }

    /// Set the pixel at `(x, y)` to the palette color nearest `c` in sRGB.
    ///
    /// This is how RGBA content is written back into indexed storage; colors
    /// already in the palette map exactly.
    #[inline]
    pub fn set_color(&mut self, x: u32, y: u32, c: Rgba16) {
        let idx = self.palette.nearest_srgb(c) as u8;
        self.indices[y as usize * self.width as usize + x as usize] = idx;
    }
}

impl Image for PalettedImage {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Rgba16 {
        self.palette.color(usize::from(self.index_at(x, y)))
    }
}
