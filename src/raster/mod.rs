//! Raster containers and regions
//!
//! The engine's view of an image is deliberately small: the read-only
//! [`Image`] trait, the mutable [`RgbaImage`] it dithers in place, the
//! grayscale [`GrayImage`] source, and the indexed [`PalettedImage`] output.
//! Host containers adapt by implementing [`Image`].

mod image;
mod paletted;
mod rect;

pub use image::{GrayImage, Image, RgbaImage};
pub use paletted::PalettedImage;
pub use rect::Rect;

pub(crate) use rect::clip;
