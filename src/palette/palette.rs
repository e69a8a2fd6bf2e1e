//! Palette storage and nearest-color lookup.
//!
//! The palette keeps every color in two parallel forms, both precomputed at
//! construction: the caller's sRGB colors (used verbatim on the write path)
//! and their linear RGB triples (used for all distance math). Per-pixel
//! lookups never convert anything.

use std::collections::HashMap;

use super::error::PaletteError;
use crate::color::{to_linear_rgb, Rgba16};

/// Squared channel difference, shifted right by two so the value fits 32 bits.
///
/// Only the ordering of distances matters, so the shared `>> 2` is free.
#[inline]
fn sq_diff(a: u16, b: u16) -> u64 {
    let d = i64::from(a) - i64::from(b);
    ((d * d) as u64) >> 2
}

/// An ordered set of target colors with precomputed linear RGB forms.
///
/// The palette is treated as opaque: alpha never participates in distance
/// calculations. Duplicate colors are permitted (they waste lookup time but
/// are harmless).
///
/// # Example
///
/// ```
/// use palette_dither::{Palette, Rgba16};
///
/// let palette = Palette::new(&[Rgba16::BLACK, Rgba16::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    /// The caller's colors, straight-alpha sRGB.
    srgb: Vec<Rgba16>,
    /// The same colors linearized, index-aligned with `srgb`.
    linear: Vec<[u16; 3]>,
}

impl Palette {
    /// Create a palette from a non-empty sequence of colors.
    ///
    /// The colors are copied; the caller's slice is not retained. Linear RGB
    /// forms are precomputed here so per-pixel lookups are pure integer math.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty input.
    pub fn new(colors: &[Rgba16]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let srgb = colors.to_vec();
        let linear = srgb.iter().map(|&c| to_linear_rgb(c)).collect();

        Ok(Self { srgb, linear })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.srgb.len()
    }

    /// Returns true if the palette is empty. Always false for a constructed
    /// palette; empty inputs are rejected by [`Palette::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.srgb.is_empty()
    }

    /// Get the sRGB color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba16 {
        self.srgb[idx]
    }

    /// Get the linear RGB triple at the given index.
    #[inline]
    pub fn linear(&self, idx: usize) -> [u16; 3] {
        self.linear[idx]
    }

    /// Returns a copy of the palette colors in order.
    pub fn colors(&self) -> Vec<Rgba16> {
        self.srgb.clone()
    }

    /// Find the palette index closest to the given **linear RGB** color.
    ///
    /// Distance is squared Euclidean weighted by the standard luminance
    /// coefficients 0.2126 / 0.7152 / 0.0722, written as the exact rationals
    /// 1063/5000, 447/625 and 361/5000 so the whole computation stays in
    /// integers. Unweighted distance picks visibly wrong colors for saturated
    /// reds and blues.
    ///
    /// Ties go to the lowest index. An exact match ends the scan early.
    pub fn closest(&self, r: u16, g: u16, b: u16) -> usize {
        let mut best_idx = 0usize;
        let mut best = u64::MAX;

        for (i, c) in self.linear.iter().enumerate() {
            let dist = 1063 * sq_diff(r, c[0]) / 5000
                + 447 * sq_diff(g, c[1]) / 625
                + 361 * sq_diff(b, c[2]) / 5000;

            if dist < best {
                if dist == 0 {
                    return i;
                }
                best_idx = i;
                best = dist;
            }
        }
        best_idx
    }

    /// Find the palette index closest to the given **sRGB** color, with plain
    /// unweighted distance over all four channels.
    ///
    /// This is the palette's color model, used when mapping already-dithered
    /// pixels back to indices for paletted output. Dithered pixels are
    /// palette colors (modulo alpha premultiplication), so this is mostly an
    /// exact-match scan with a sensible fallback for translucent pixels.
    pub fn nearest_srgb(&self, c: Rgba16) -> usize {
        let mut best_idx = 0usize;
        let mut best = u64::MAX;

        for (i, p) in self.srgb.iter().enumerate() {
            let dist =
                sq_diff(c.r, p.r) + sq_diff(c.g, p.g) + sq_diff(c.b, p.b) + sq_diff(c.a, p.a);
            if dist < best {
                if dist == 0 {
                    return i;
                }
                best_idx = i;
                best = dist;
            }
        }
        best_idx
    }

    /// Returns true if both palettes contain the same colors, regardless of
    /// order. This is multiset equality: duplicates must match in count.
    pub fn same(&self, other: &Palette) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut counts: HashMap<Rgba16, i32> = HashMap::with_capacity(self.len());
        for &c in &self.srgb {
            *counts.entry(c).or_insert(0) += 1;
        }
        for &c in &other.srgb {
            let left = match counts.get_mut(&c) {
                Some(n) => {
                    *n -= 1;
                    *n
                }
                None => return false,
            };
            if left == 0 {
                counts.remove(&c);
            }
        }
        counts.is_empty()
    }

    /// Returns true if the palette contains the exact color.
    pub fn contains(&self, c: Rgba16) -> bool {
        self.srgb.contains(&c)
    }
}
