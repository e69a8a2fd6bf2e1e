//! sRGB <-> linear RGB channel transforms
//!
//! All dithering arithmetic happens in linear RGB, where light intensities
//! add physically. Channels are 16-bit integers in `[0, 65535]`; 8 bits of
//! linear precision is not enough to round-trip 8-bit sRGB sources and shows
//! up as banding on smooth gradients.
//!
//! Conversions compute in `f64` and round half to even when narrowing back to
//! 16 bits. Truncating instead introduces a systematic darkening bias that is
//! visible on gradients.

use super::lut::linearize_u8;
use super::rgba::Rgba16;

/// Linearize a single sRGB channel value in `[0, 1]` (IEC 61966-2-1).
#[inline]
pub fn linearize_channel(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a single linear channel value in `[0, 1]` back to sRGB.
#[inline]
pub fn delinearize_channel(v: f64) -> f64 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Linearize a 16-bit sRGB channel to a 16-bit linear channel.
///
/// 0 maps to 0 and 65535 to 65535 exactly.
#[inline]
pub fn linearize_u16(v: u16) -> u16 {
    (linearize_channel(f64::from(v) / 65535.0) * 65535.0).round_ties_even() as u16
}

/// Encode a 16-bit linear channel back to a 16-bit sRGB channel.
#[inline]
pub fn delinearize_u16(v: u16) -> u16 {
    (delinearize_channel(f64::from(v) / 65535.0) * 65535.0).round_ties_even() as u16
}

/// Convert a color to linear RGB. Alpha is ignored.
///
/// Callers holding premultiplied colors must unpremultiply first; see
/// [`unpremult_and_linearize`].
#[inline]
pub fn to_linear_rgb(c: Rgba16) -> [u16; 3] {
    [linearize_u16(c.r), linearize_u16(c.g), linearize_u16(c.b)]
}

/// Unpremultiply a premultiplied color, then linearize its RGB channels.
///
/// Returns the linear RGB triple and the straight 16-bit alpha. Fully
/// transparent pixels yield zero channels without any division.
#[inline]
pub fn unpremult_and_linearize(c: Rgba16) -> ([u16; 3], u16) {
    let straight = c.unpremultiply();
    (to_linear_rgb(straight), straight.a)
}

/// Linearize premultiplied 8-bit `[r, g, b, a]` bytes.
///
/// Opaque pixels take the LUT fast path; translucent pixels are
/// unpremultiplied in 16-bit before the exact transform.
#[inline]
pub(crate) fn linearize_premul_rgba8(px: [u8; 4]) -> ([u16; 3], u16) {
    if px[3] == 255 {
        (
            [linearize_u8(px[0]), linearize_u8(px[1]), linearize_u8(px[2])],
            65535,
        )
    } else {
        unpremult_and_linearize(Rgba16::new(
            super::rgba::widen(px[0]),
            super::rgba::widen(px[1]),
            super::rgba::widen(px[2]),
            super::rgba::widen(px[3]),
        ))
    }
}

/// Round a float channel value to a 16-bit integer, clamping to `[0, 65535]`.
///
/// Ties round to even. Custom [`PixelMapper`](crate::mapper::PixelMapper)
/// implementations should use this when narrowing their results.
#[inline]
pub fn round_clamp(v: f32) -> u16 {
    if v < 0.0 {
        0
    } else if v > 65535.0 {
        65535
    } else {
        v.round_ties_even() as u16
    }
}
