//! Random-noise pixel mappers.
//!
//! Random dithering is the simplest form there is: add noise, then quantize.
//! Both mappers draw from the thread-local RNG, so their output is not
//! deterministic; enable
//! [`single_threaded`](crate::Ditherer::single_threaded) if two runs must at
//! least consume the randomness in the same pixel order.

use rand::Rng;

use crate::color::round_clamp;

use super::PixelMapper;

/// Linear-luminance weights scaled for 16-bit color: 0.2126 / 0.7152 / 0.0722
/// times 65536, summing to exactly 65536 so the shift below is exact.
const LUMA_R: u32 = 13933;
const LUMA_G: u32 = 46871;
const LUMA_B: u32 = 4732;

/// Convert a linear RGB triple to a linear gray level.
#[inline]
fn linear_gray(r: u16, g: u16, b: u16) -> u16 {
    ((LUMA_R * u32::from(r) + LUMA_G * u32::from(g) + LUMA_B * u32::from(b) + (1 << 15)) >> 16)
        as u16
}

/// Grayscale random noise.
///
/// The pixel is converted to linear gray, then shifted by a uniform random
/// amount in `[min, max)` (as a fraction of the full color range, so -0.5 and
/// 0.5 dither evenly). Narrower ranges lower the effective contrast, wider
/// ones raise it, and an asymmetric range brightens or darkens the image.
/// Out-of-range results clamp rather than wrap.
///
/// Use this with grayscale palettes; for color palettes see
/// [`RandomNoiseRgb`].
#[derive(Debug, Clone, Copy)]
pub struct RandomNoiseGray {
    min: f32,
    max: f32,
}

impl RandomNoiseGray {
    /// Create a grayscale noise mapper with the given range.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl PixelMapper for RandomNoiseGray {
    fn map(&self, _x: u32, _y: u32, r: u16, g: u16, b: u16) -> (u16, u16, u16) {
        let gray = linear_gray(r, g, b);
        let noise = rand::thread_rng().gen::<f32>() * (self.max - self.min) + self.min;
        let v = round_clamp(f32::from(gray) + 65535.0 * noise);
        (v, v, v)
    }
}

/// Per-channel random noise for color output.
///
/// Like [`RandomNoiseGray`] but each channel gets its own independently drawn
/// noise from its own range. Usually all three ranges are the same.
#[derive(Debug, Clone, Copy)]
pub struct RandomNoiseRgb {
    min: [f32; 3],
    max: [f32; 3],
}

impl RandomNoiseRgb {
    /// Create an RGB noise mapper with per-channel ranges.
    #[allow(clippy::too_many_arguments)]
    pub fn new(min_r: f32, max_r: f32, min_g: f32, max_g: f32, min_b: f32, max_b: f32) -> Self {
        Self {
            min: [min_r, min_g, min_b],
            max: [max_r, max_g, max_b],
        }
    }
}

impl PixelMapper for RandomNoiseRgb {
    fn map(&self, _x: u32, _y: u32, r: u16, g: u16, b: u16) -> (u16, u16, u16) {
        let mut rng = rand::thread_rng();
        let mut channel = |c: u16, i: usize| {
            let noise = rng.gen::<f32>() * (self.max[i] - self.min[i]) + self.min[i];
            round_clamp(f32::from(c) + 65535.0 * noise)
        };
        (channel(r, 0), channel(g, 1), channel(b, 2))
    }
}
