//! Color types and channel transforms
//!
//! The engine works with two channel encodings:
//!
//! - **sRGB**: the gamma-encoded form images are stored in. [`Rgba16`] holds
//!   straight-alpha sRGB with 16-bit channels.
//! - **Linear RGB**: the inverse-gamma form where light adds physically.
//!   Quantization error, palette distance, and every pixel-mapper run in this
//!   space, as bare `[u16; 3]` triples in `[0, 65535]`.
//!
//! # Example
//!
//! ```
//! use palette_dither::{round_clamp, Rgba16};
//! use palette_dither::color::to_linear_rgb;
//!
//! let srgb = Rgba16::from_rgb8(128, 64, 32);
//! let [r, g, b] = to_linear_rgb(srgb);
//! assert!(r > g && g > b);
//!
//! // Narrow arithmetic results with round_clamp
//! assert_eq!(round_clamp(f32::from(r) + 0.25), r);
//! ```

mod linear;
mod lut;
mod rgba;

pub use linear::{
    delinearize_channel, delinearize_u16, linearize_channel, linearize_u16, round_clamp,
    to_linear_rgb, unpremult_and_linearize,
};
pub use lut::linearize_u8;
pub use rgba::Rgba16;

pub(crate) use linear::linearize_premul_rgba8;
pub(crate) use rgba::widen;
