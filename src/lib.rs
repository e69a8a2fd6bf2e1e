//! palette-dither: palette-constrained image dithering
//!
//! This library reduces an RGBA raster to a fixed palette while spreading the
//! quantization error over pixels, so the dithered image keeps the local
//! color statistics of the original. The caller supplies the palette; the
//! engine never chooses colors on its own.
//!
//! # Quick Start
//!
//! ```
//! use palette_dither::diffusion::floyd_steinberg;
//! use palette_dither::{Algorithm, Ditherer, Palette, Rgba16, RgbaImage};
//!
//! let palette = Palette::new(&[Rgba16::BLACK, Rgba16::WHITE]).unwrap();
//! let ditherer = Ditherer::new(palette, Algorithm::Diffusion(floyd_steinberg()))
//!     .serpentine(true);
//!
//! let mut img = RgbaImage::from_straight(2, 2, &[128, 128, 128, 255].repeat(4));
//! ditherer.dither(&mut img).unwrap();
//! ```
//!
//! # Two Drivers
//!
//! Every algorithm runs through one of two drivers:
//!
//! - **Error diffusion** ([`Algorithm::Diffusion`]): a sequential scan that
//!   quantizes each pixel and pushes the residual onto not-yet-visited
//!   neighbors, weighted by a [`DiffusionMatrix`]. Optionally serpentine.
//!   Deterministic, and single-threaded by nature — every pixel depends on
//!   its predecessors.
//! - **Pixel mapping** ([`Algorithm::Map`]): an embarrassingly parallel pass
//!   where a [`PixelMapper`](mapper::PixelMapper) (an ordered-dither
//!   threshold like [`Bayer`], random noise, or any custom function)
//!   perturbs each pixel independently before quantization. Runs across
//!   horizontal bands on a thread pool unless
//!   [`single_threaded`](Ditherer::single_threaded) is set.
//!
//! # Color Handling
//!
//! All arithmetic happens in **linear RGB** with 16-bit channels. sRGB is a
//! perceptual encoding: adding two sRGB values does not produce the combined
//! light output, so errors diffused in sRGB come out visibly wrong, and 8-bit
//! linear channels band in the shadows. Pixels are linearized on read (with a
//! LUT fast path for opaque 8-bit sources) and palette colors are written
//! back in their original sRGB form, premultiplied by the source pixel's
//! alpha.
//!
//! Closest-color lookups weight the channel differences by the standard
//! luminance coefficients (0.2126 / 0.7152 / 0.0722, as exact rationals).
//! Plain Euclidean distance picks visibly wrong palette entries for
//! saturated reds and blues; the weights are part of the contract, not a
//! tweak.
//!
//! Alpha itself is never dithered: a pixel's alpha passes through
//! bit-identical, and fully transparent pixels skip quantization entirely in
//! the pixel-map driver.

pub mod api;
pub mod color;
pub mod diffusion;
pub mod mapper;
pub mod ordered;
pub mod palette;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use api::{Algorithm, CapacityError, ConfigError, DitherError, Ditherer, SpecialDither};
pub use color::{round_clamp, Rgba16};
pub use diffusion::DiffusionMatrix;
pub use mapper::{Bayer, OrderedMapper, PixelMapper, RandomNoiseGray, RandomNoiseRgb};
pub use ordered::OrderedMatrix;
pub use palette::{Palette, PaletteError};
pub use raster::{GrayImage, Image, PalettedImage, Rect, RgbaImage};
