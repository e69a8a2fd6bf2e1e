//! The [`Ditherer`] dispatcher: configuration, validation, and the top-level
//! dithering entry points.

use std::fmt;
use std::sync::Arc;

use crate::color::Rgba16;
use crate::diffusion::{diffuse_region, DiffusionMatrix};
use crate::mapper::{map_region, PixelMapper};
use crate::palette::Palette;
use crate::raster::{clip, Image, PalettedImage, Rect, RgbaImage};

use super::error::{CapacityError, ConfigError, DitherError};

/// Marker for dithering algorithms that need custom code, beyond what a
/// pixel mapper or an error-diffusion matrix can express.
///
/// No such algorithms exist yet, so this type has no values and selecting
/// [`Algorithm::Special`] is always a configuration fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialDither {}

/// The dithering algorithm a [`Ditherer`] applies.
///
/// Exactly one algorithm is always selected — the enum makes a zero-or-many
/// selection unrepresentable.
#[derive(Clone)]
pub enum Algorithm {
    /// Sequential error diffusion with the given weight matrix.
    Diffusion(DiffusionMatrix),
    /// Parallel per-pixel mapping (ordered dithering, random noise, or a
    /// custom function), followed by closest-color quantization.
    Map(Arc<dyn PixelMapper>),
    /// Reserved for future algorithms; always invalid today.
    Special(SpecialDither),
}

impl Algorithm {
    /// Wrap a pixel mapper.
    pub fn mapper<M: PixelMapper + 'static>(mapper: M) -> Self {
        Algorithm::Map(Arc::new(mapper))
    }

    fn kind(&self) -> &'static str {
        match self {
            Algorithm::Diffusion(_) => "error-diffusion",
            Algorithm::Map(_) => "pixel-map",
            Algorithm::Special(_) => "special",
        }
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Diffusion(m) => f.debug_tuple("Diffusion").field(m).finish(),
            Algorithm::Map(_) => f.debug_tuple("Map").field(&"<pixel mapper>").finish(),
            Algorithm::Special(s) => f.debug_tuple("Special").field(s).finish(),
        }
    }
}

impl From<DiffusionMatrix> for Algorithm {
    fn from(m: DiffusionMatrix) -> Self {
        Algorithm::Diffusion(m)
    }
}

/// Dithers images against a fixed palette.
///
/// A `Ditherer` is cheap to keep around: the palette's linear form and the
/// algorithm's precomputed state are built once, and every entry point takes
/// `&self`, so one ditherer can serve many images — concurrently, if shared.
/// The configuration setters exist for reuse *between* images; reconfiguring
/// while a dither is in flight is prevented by the borrow checker.
///
/// # Example
///
/// ```
/// use palette_dither::diffusion::floyd_steinberg;
/// use palette_dither::{Algorithm, Ditherer, Palette, Rgba16, RgbaImage};
///
/// let palette = Palette::new(&[Rgba16::BLACK, Rgba16::WHITE]).unwrap();
/// let ditherer = Ditherer::new(palette, Algorithm::Diffusion(floyd_steinberg()))
///     .serpentine(true);
///
/// let mut img = RgbaImage::from_straight(2, 2, &[128, 128, 128, 255].repeat(4));
/// ditherer.dither(&mut img).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    palette: Palette,
    algorithm: Algorithm,
    serpentine: bool,
    single_threaded: bool,
}

impl Ditherer {
    /// Create a ditherer for the given palette and algorithm.
    pub fn new(palette: Palette, algorithm: Algorithm) -> Self {
        Self {
            palette,
            algorithm,
            serpentine: false,
            single_threaded: false,
        }
    }

    /// Alternate the scan direction every other row (error diffusion only).
    /// Serpentine scanning greatly reduces directional line artifacts.
    #[must_use]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }

    /// Force the pixel-map driver onto a single worker.
    ///
    /// Only useful when a mapper consumes a shared sequential source (for
    /// example a random generator) and the output must be reproducible in
    /// pixel order. Error diffusion is sequential by nature and ignores this.
    #[must_use]
    pub fn single_threaded(mut self, enabled: bool) -> Self {
        self.single_threaded = enabled;
        self
    }

    /// Replace the algorithm for subsequent invocations.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// The configured palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.algorithm {
            Algorithm::Special(_) => Err(ConfigError::ReservedAlgorithm),
            _ => Ok(()),
        }
    }

    /// Dither the region of `img` given by `rect`, which must be clipped.
    fn dither_region(&self, img: &mut RgbaImage, rect: Rect) {
        tracing::debug!(
            width = rect.width(),
            height = rect.height(),
            algorithm = self.algorithm.kind(),
            "dithering region"
        );
        match &self.algorithm {
            Algorithm::Diffusion(matrix) => {
                diffuse_region(img, rect, &self.palette, matrix, self.serpentine);
            }
            Algorithm::Map(mapper) => {
                map_region(img, rect, &self.palette, mapper.as_ref(), self.single_threaded);
            }
            Algorithm::Special(_) => unreachable!("rejected by validate()"),
        }
    }

    /// Dither `img` in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReservedAlgorithm`] if the reserved algorithm
    /// selector is configured.
    pub fn dither(&self, img: &mut RgbaImage) -> Result<(), DitherError> {
        self.validate()?;
        let bounds = img.bounds();
        self.dither_region(img, bounds);
        Ok(())
    }

    /// Dither a copy of `src`, leaving the source untouched.
    ///
    /// The output is always a fresh [`RgbaImage`] and is pixelwise identical
    /// to what [`dither`](Self::dither) produces for the same content — only
    /// ownership differs. This is also the path for host containers that
    /// cannot be written in place: anything readable through [`Image`] can be
    /// dithered into a fresh image here.
    pub fn dither_copy<I: Image + ?Sized>(&self, src: &I) -> Result<RgbaImage, DitherError> {
        self.validate()?;
        let mut dst = RgbaImage::from_image(src);
        let bounds = dst.bounds();
        self.dither_region(&mut dst, bounds);
        Ok(dst)
    }

    /// Dither a paletted image in place when its palette matches this
    /// ditherer's (multiset equality).
    ///
    /// When the palettes differ the indexed container cannot hold the result;
    /// the image is left untouched and a freshly dithered [`RgbaImage`] is
    /// returned instead.
    pub fn dither_in_place(
        &self,
        img: &mut PalettedImage,
    ) -> Result<Option<RgbaImage>, DitherError> {
        self.validate()?;
        if !self.palette.same(img.palette()) {
            return Ok(Some(self.dither_copy(img)?));
        }
        let rgba = self.dither_copy(img)?;
        for y in 0..img.height() {
            for x in 0..img.width() {
                img.set_color(x, y, rgba.pixel(x, y));
            }
        }
        Ok(None)
    }

    /// Dither a copy of `src` into an indexed image.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::PaletteTooLarge`] for palettes over 256
    /// colors, plus any configuration fault.
    pub fn dither_paletted<I: Image + ?Sized>(
        &self,
        src: &I,
    ) -> Result<PalettedImage, DitherError> {
        self.validate()?;
        let rgba = self.dither_copy(src)?;
        let mut out = PalettedImage::new(rgba.width(), rgba.height(), self.palette.clone())?;
        for y in 0..rgba.height() {
            for x in 0..rgba.width() {
                out.set_color(x, y, rgba.pixel(x, y));
            }
        }
        Ok(out)
    }

    /// Hand the configured palette to a caller that needs a palette chooser,
    /// such as an animated-image encoder.
    ///
    /// `max_colors` is how many colors the caller can accept; `required` are
    /// colors the caller insists on. The ditherer's palette is returned
    /// verbatim — it never adapts to the image.
    ///
    /// # Errors
    ///
    /// - [`CapacityError::TooManyColors`] if the palette exceeds `max_colors`
    /// - [`CapacityError::MissingRequiredColors`] if more colors are required
    ///   than the palette has, or a required color is absent from it
    pub fn quantize(
        &self,
        max_colors: usize,
        required: &[Rgba16],
    ) -> Result<Vec<Rgba16>, DitherError> {
        if max_colors < self.palette.len() {
            return Err(CapacityError::TooManyColors {
                colors: self.palette.len(),
                allowed: max_colors,
            }
            .into());
        }
        if required.len() > self.palette.len()
            || !required.iter().all(|&c| self.palette.contains(c))
        {
            return Err(CapacityError::MissingRequiredColors.into());
        }
        Ok(self.palette.colors())
    }

    /// Copy a sub-region of `src` into `dst` and dither only that region.
    ///
    /// `rect` addresses the destination; `src_origin` is where the copied
    /// region starts in the source. The rectangle is clipped against both
    /// images, so out-of-bounds requests shrink rather than fail. Pixels
    /// outside the region are untouched.
    pub fn draw<I: Image + ?Sized>(
        &self,
        dst: &mut RgbaImage,
        rect: Rect,
        src: &I,
        src_origin: (i32, i32),
    ) -> Result<(), DitherError> {
        self.validate()?;

        let mut rect = rect;
        let mut sp = src_origin;
        clip(dst.bounds(), &mut rect, src.bounds(), &mut sp);
        if rect.is_empty() {
            return Ok(());
        }
        tracing::trace!(?rect, ?sp, "draw: clipped region");

        dst.copy_region(rect, src, sp);
        self.dither_region(dst, rect);
        Ok(())
    }

    /// Like [`draw`](Self::draw), but for an indexed destination.
    ///
    /// The destination palette must match the ditherer's (multiset
    /// equality). The region goes through an intermediate RGBA copy of the
    /// destination and the dithered pixels are written back as indices.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PaletteMismatch`] when the palettes differ.
    pub fn draw_paletted<I: Image + ?Sized>(
        &self,
        dst: &mut PalettedImage,
        rect: Rect,
        src: &I,
        src_origin: (i32, i32),
    ) -> Result<(), DitherError> {
        self.validate()?;
        if !self.palette.same(dst.palette()) {
            return Err(ConfigError::PaletteMismatch.into());
        }

        let mut rect = rect;
        let mut sp = src_origin;
        clip(dst.bounds(), &mut rect, src.bounds(), &mut sp);
        if rect.is_empty() {
            return Ok(());
        }

        let mut rgba = RgbaImage::from_image(dst);
        rgba.copy_region(rect, src, sp);
        self.dither_region(&mut rgba, rect);

        for y in rect.min_y..rect.max_y {
            for x in rect.min_x..rect.max_x {
                dst.set_color(x as u32, y as u32, rgba.pixel(x as u32, y as u32));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::floyd_steinberg;
    use crate::mapper::Bayer;

    fn bw() -> Palette {
        Palette::new(&[Rgba16::BLACK, Rgba16::WHITE]).unwrap()
    }

    fn gray_field(w: u32, h: u32, v: u8) -> RgbaImage {
        let mut img = RgbaImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set_pixel(x, y, Rgba16::from_rgb8(v, v, v));
            }
        }
        img
    }

    #[test]
    fn test_dither_and_dither_copy_agree() {
        let src = gray_field(16, 16, 140);
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));

        let mut in_place = src.clone();
        d.dither(&mut in_place).unwrap();
        let copy = d.dither_copy(&src).unwrap();

        assert_eq!(in_place, copy, "dither and dither_copy must agree pixelwise");
    }

    #[test]
    fn test_dither_copy_leaves_source_untouched() {
        let src = gray_field(8, 8, 140);
        let before = src.clone();
        let d = Ditherer::new(bw(), Algorithm::mapper(Bayer::new(4, 4, 1.0).unwrap()));
        let _ = d.dither_copy(&src).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_dither_paletted_round_trips_indices() {
        let src = gray_field(8, 8, 140);
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        let paletted = d.dither_paletted(&src).unwrap();
        let rgba = d.dither_copy(&src).unwrap();

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(paletted.pixel(x, y), rgba.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_dither_paletted_rejects_large_palette() {
        let colors: Vec<Rgba16> = (0..300u32).map(|i| Rgba16::gray(i as u16 * 100)).collect();
        let palette = Palette::new(&colors).unwrap();
        let d = Ditherer::new(palette, Algorithm::Diffusion(floyd_steinberg()));
        let src = gray_field(2, 2, 10);
        assert!(matches!(
            d.dither_paletted(&src),
            Err(DitherError::Capacity(CapacityError::PaletteTooLarge { colors: 300 }))
        ));
    }

    #[test]
    fn test_dither_in_place_same_palette() {
        let mut img = PalettedImage::new(4, 4, bw()).unwrap();
        // Seed with alternating colors so there is something to requantize
        for y in 0..4 {
            for x in 0..4 {
                img.set_index(x, y, ((x + y) % 2) as u8);
            }
        }
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        let returned = d.dither_in_place(&mut img).unwrap();
        assert!(returned.is_none(), "matching palette dithers in place");
    }

    #[test]
    fn test_dither_in_place_mismatched_palette_returns_copy() {
        let rgb = Palette::new(&[
            Rgba16::BLACK,
            Rgba16::opaque(65535, 0, 0),
        ])
        .unwrap();
        let mut img = PalettedImage::new(4, 4, bw()).unwrap();
        let before = img.indices().to_vec();
        let d = Ditherer::new(rgb, Algorithm::Diffusion(floyd_steinberg()));
        let returned = d.dither_in_place(&mut img).unwrap();
        assert!(returned.is_some(), "mismatched palette must return a copy");
        assert_eq!(img.indices(), &before[..], "source must be untouched");
    }

    #[test]
    fn test_quantize_returns_palette() {
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        let colors = d.quantize(256, &[]).unwrap();
        assert_eq!(colors, vec![Rgba16::BLACK, Rgba16::WHITE]);
    }

    #[test]
    fn test_quantize_capacity_fault() {
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        assert!(matches!(
            d.quantize(1, &[]),
            Err(DitherError::Capacity(CapacityError::TooManyColors {
                colors: 2,
                allowed: 1
            }))
        ));
    }

    #[test]
    fn test_quantize_required_colors() {
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        assert!(d.quantize(2, &[Rgba16::WHITE]).is_ok());
        assert!(matches!(
            d.quantize(2, &[Rgba16::opaque(65535, 0, 0)]),
            Err(DitherError::Capacity(CapacityError::MissingRequiredColors))
        ));
        assert!(matches!(
            d.quantize(4, &[Rgba16::BLACK, Rgba16::WHITE, Rgba16::BLACK]),
            Err(DitherError::Capacity(CapacityError::MissingRequiredColors))
        ));
    }

    #[test]
    fn test_draw_dithers_only_the_region() {
        let mut dst = gray_field(8, 8, 0);
        let src = gray_field(8, 8, 140);
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        d.draw(&mut dst, Rect::new(2, 2, 4, 4), &src, (0, 0)).unwrap();

        for y in 0..8u32 {
            for x in 0..8u32 {
                let inside = (2..6).contains(&x) && (2..6).contains(&y);
                let c = dst.pixel(x, y);
                if inside {
                    assert!(c == Rgba16::BLACK || c == Rgba16::WHITE);
                } else {
                    assert_eq!(c, Rgba16::BLACK, "outside pixels must be untouched");
                }
            }
        }
    }

    #[test]
    fn test_draw_clips_against_both_images() {
        let mut dst = gray_field(4, 4, 0);
        let src = gray_field(2, 2, 255);
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        // Rect larger than src: clipped to the 2x2 the source can provide
        d.draw(&mut dst, Rect::new(0, 0, 4, 4), &src, (0, 0)).unwrap();
        assert_eq!(dst.pixel(0, 0), Rgba16::WHITE);
        assert_eq!(dst.pixel(1, 1), Rgba16::WHITE);
        assert_eq!(dst.pixel(2, 2), Rgba16::BLACK);
    }

    #[test]
    fn test_draw_empty_after_clipping_is_noop() {
        let mut dst = gray_field(4, 4, 0);
        let before = dst.clone();
        let src = gray_field(2, 2, 255);
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        d.draw(&mut dst, Rect::new(10, 10, 2, 2), &src, (0, 0)).unwrap();
        assert_eq!(dst, before);
    }

    #[test]
    fn test_draw_paletted_requires_matching_palette() {
        let rgb = Palette::new(&[Rgba16::BLACK, Rgba16::opaque(65535, 0, 0)]).unwrap();
        let mut dst = PalettedImage::new(4, 4, bw()).unwrap();
        let src = gray_field(4, 4, 128);
        let d = Ditherer::new(rgb, Algorithm::Diffusion(floyd_steinberg()));
        assert!(matches!(
            d.draw_paletted(&mut dst, Rect::new(0, 0, 4, 4), &src, (0, 0)),
            Err(DitherError::Config(ConfigError::PaletteMismatch))
        ));
    }

    #[test]
    fn test_draw_paletted_writes_indices_back() {
        let mut dst = PalettedImage::new(4, 4, bw()).unwrap();
        let src = gray_field(4, 4, 255);
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        d.draw_paletted(&mut dst, Rect::new(1, 1, 2, 2), &src, (0, 0)).unwrap();
        assert_eq!(dst.index_at(1, 1), 1, "white source lands on white index");
        assert_eq!(dst.index_at(0, 0), 0, "outside stays black");
    }

    #[test]
    fn test_error_diffusion_ignores_single_threaded() {
        let src = gray_field(16, 16, 140);
        let a = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()))
            .dither_copy(&src)
            .unwrap();
        let b = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()))
            .single_threaded(true)
            .dither_copy(&src)
            .unwrap();
        assert_eq!(a, b, "error diffusion must not depend on single_threaded");
    }

    #[test]
    fn test_set_algorithm_between_runs() {
        let src = gray_field(8, 8, 140);
        let mut d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        let a = d.dither_copy(&src).unwrap();
        d.set_algorithm(Algorithm::mapper(Bayer::new(4, 4, 1.0).unwrap()));
        let b = d.dither_copy(&src).unwrap();
        assert_ne!(a, b, "different algorithms produce different patterns");
    }

    #[test]
    fn test_palette_accessor_copies() {
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        let colors = d.palette().colors();
        assert_eq!(colors.len(), 2);
    }
}
