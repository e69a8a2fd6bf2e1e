//! Domain-critical regression tests.
//!
//! These exercise whole-pipeline scenarios rather than single functions.
//! Each test documents the class of bug it guards against.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::color::linearize_u8;
use crate::diffusion::{atkinson, floyd_steinberg};
use crate::mapper::Bayer;
use crate::{Algorithm, Ditherer, GrayImage, Image, Palette, Rgba16, RgbaImage};

fn bw() -> Palette {
    Palette::new(&[Rgba16::BLACK, Rgba16::WHITE]).unwrap()
}

/// A 256x1 horizontal sRGB gradient from black to white.
fn gradient_strip() -> RgbaImage {
    let gray = GrayImage::new(256, 1, (0..=255u8).collect());
    RgbaImage::from_image(&gray)
}

/// A wider gradient for kernels that need rows below the current one.
fn gradient_field(height: u32) -> RgbaImage {
    let mut data = Vec::with_capacity(256 * height as usize);
    for _ in 0..height {
        data.extend(0..=255u8);
    }
    RgbaImage::from_image(&GrayImage::new(256, height, data))
}

fn white_count(img: &RgbaImage) -> usize {
    let mut n = 0;
    for y in 0..img.height() {
        for x in 0..img.width() {
            if img.pixel(x, y) == Rgba16::WHITE {
                n += 1;
            }
        }
    }
    n
}

fn assert_all_on_palette(img: &RgbaImage, palette: &Palette) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let c = img.pixel(x, y);
            assert!(
                palette.contains(c),
                "pixel at ({x}, {y}) is {c:?}, not a palette color"
            );
        }
    }
}

// ============================================================================
// Gradient + Floyd-Steinberg: brightness must be preserved in linear space
// ============================================================================

/// If this breaks: error diffusion is losing or inventing brightness — the
/// dithered black/white mix no longer approximates the linear intensity of
/// the source gradient.
#[test]
fn test_gradient_floyd_steinberg_preserves_brightness() {
    let mut img = gradient_strip();
    let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
    d.dither(&mut img).unwrap();

    assert_all_on_palette(&img, &bw());

    // White density must grow along the gradient.
    let quarter = |a: u32, b: u32| {
        (a..b)
            .filter(|&x| img.pixel(x, 0) == Rgba16::WHITE)
            .count()
    };
    let q: Vec<usize> = vec![quarter(0, 64), quarter(64, 128), quarter(128, 192), quarter(192, 256)];
    assert!(q[0] <= q[1] && q[1] <= q[2] && q[2] <= q[3], "quarters not monotone: {q:?}");

    // The total white count approximates the summed linear intensity. A
    // single row only carries 7/16 of each residual forward, so allow a wide
    // band around the ideal count.
    let ideal: f64 = (0..=255u8)
        .map(|v| f64::from(linearize_u8(v)) / 65535.0)
        .sum();
    let whites = white_count(&img) as f64;
    assert!(
        (whites - ideal).abs() < 28.0,
        "white count {whites} too far from linear-sum ideal {ideal:.1}"
    );
}

/// If this breaks: dithering is happening in sRGB space. sRGB 186 is ~0.5
/// linear and must dither to ~50% white; sRGB 128 is ~0.21 linear and must
/// stay well below 35% white.
#[test]
fn test_gamma_correct_dither_ratios() {
    for (v, expected) in [(186u8, 0.497), (128u8, 0.216)] {
        let field = GrayImage::new(32, 32, vec![v; 1024]);
        let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
        let out = d.dither_copy(&field).unwrap();
        let ratio = white_count(&out) as f64 / 1024.0;
        assert!(
            (ratio - expected).abs() < 0.1,
            "sRGB {v} dithered to {ratio:.3} white, expected ~{expected}"
        );
    }
}

// ============================================================================
// Serpentine scanning
// ============================================================================

/// If this breaks: the serpentine flag is ignored, or the matrix is not
/// reflected on reversed rows.
#[test]
fn test_serpentine_differs_and_stays_on_palette() {
    let d = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
    let ds = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg())).serpentine(true);

    let plain = d.dither_copy(&gradient_field(8)).unwrap();
    let serp = ds.dither_copy(&gradient_field(8)).unwrap();

    assert_ne!(plain, serp, "serpentine output must differ");
    assert_all_on_palette(&serp, &bw());

    // Brightness is preserved either way
    let diff = white_count(&plain) as i64 - white_count(&serp) as i64;
    assert!(diff.abs() < 120, "serpentine shifted brightness by {diff} pixels");
}

// ============================================================================
// Atkinson: partial error propagation
// ============================================================================

/// If this breaks: the Atkinson matrix is being normalized to full
/// propagation (or Floyd-Steinberg is leaking error). Atkinson discards a
/// quarter of each residual, which raises contrast: its output must differ
/// from Floyd-Steinberg in the mid-tones.
#[test]
fn test_atkinson_differs_from_floyd_steinberg_in_mid_tones() {
    let fs = Ditherer::new(bw(), Algorithm::Diffusion(floyd_steinberg()));
    let atk = Ditherer::new(bw(), Algorithm::Diffusion(atkinson()));

    let fs_out = fs.dither_copy(&gradient_field(16)).unwrap();
    let atk_out = atk.dither_copy(&gradient_field(16)).unwrap();

    assert_all_on_palette(&atk_out, &bw());
    assert_ne!(fs_out, atk_out);

    // Compare the mid-tone band only: columns around the linear midpoint.
    let band_whites = |img: &RgbaImage| {
        let mut n = 0i64;
        for y in 0..img.height() {
            for x in 120..200u32 {
                if img.pixel(x, y) == Rgba16::WHITE {
                    n += 1;
                }
            }
        }
        n
    };
    assert_ne!(
        band_whites(&fs_out),
        band_whites(&atk_out),
        "mid-tone density must differ between kernels"
    );
}

// ============================================================================
// Bayer ordered dithering
// ============================================================================

/// If this breaks: the Bayer mapper is reading something other than
/// `(x, y) mod matrix size`, or worker count leaks into the output of a
/// position-pure mapper.
#[test]
fn test_bayer_output_tiles_and_ignores_threading() {
    let field = GrayImage::new(16, 16, vec![150; 256]);
    let algorithm = || Algorithm::mapper(Bayer::new(4, 4, 1.0).unwrap());

    let multi = Ditherer::new(bw(), algorithm());
    let single = Ditherer::new(bw(), algorithm()).single_threaded(true);

    let a = multi.dither_copy(&field).unwrap();
    let b = single.dither_copy(&field).unwrap();
    assert_eq!(a, b, "position-pure mapper must not depend on worker count");

    // Every 4x4 tile is identical
    for y in 0..16u32 {
        for x in 0..16u32 {
            assert_eq!(
                a.pixel(x, y),
                a.pixel(x % 4, y % 4),
                "Bayer pattern must tile with period 4"
            );
        }
    }

    // Mid gray under a full-strength 4x4 Bayer shows both colors in a tile
    let tile: Vec<Rgba16> = (0..4u32)
        .flat_map(|y| (0..4u32).map(move |x| (x, y)))
        .map(|(x, y)| a.pixel(x, y))
        .collect();
    assert!(tile.contains(&Rgba16::BLACK) && tile.contains(&Rgba16::WHITE));
}

// ============================================================================
// Color palette scenario
// ============================================================================

/// If this breaks: quantization is producing colors outside the palette, or
/// alpha is being invented for opaque sources.
#[test]
fn test_color_field_lands_exactly_on_four_color_palette() {
    let palette = Palette::new(&[
        Rgba16::opaque(65535, 0, 0),
        Rgba16::opaque(0, 65535, 0),
        Rgba16::opaque(65535, 65535, 0),
        Rgba16::BLACK,
    ])
    .unwrap();

    // A deterministic color field with smooth ramps and hue variety
    let mut img = RgbaImage::new(48, 48);
    for y in 0..48u32 {
        for x in 0..48u32 {
            let r = (x * 5) as u8;
            let g = (y * 5) as u8;
            let b = ((x + y) * 2) as u8;
            img.set_pixel(x, y, Rgba16::from_rgb8(r, g, b));
        }
    }

    let d = Ditherer::new(palette.clone(), Algorithm::Diffusion(floyd_steinberg()));
    d.dither(&mut img).unwrap();

    assert_all_on_palette(&img, &palette);
    for px in img.as_bytes().chunks_exact(4) {
        assert_eq!(px[3], 255, "opaque input must stay opaque");
    }
}

// ============================================================================
// Transparency scenario
// ============================================================================

/// If this breaks: the pixel-map driver is quantizing transparent pixels, or
/// alpha is not passing through bit-identical.
#[test]
fn test_transparency_passes_through_bayer() {
    let palette = Palette::new(&[
        Rgba16::BLACK,
        Rgba16::WHITE,
        Rgba16::opaque(65535, 0, 0),
        Rgba16::opaque(0, 65535, 0),
        Rgba16::opaque(0, 0, 65535),
    ])
    .unwrap();

    // A sprite: opaque disk on a fully transparent background
    let mut img = RgbaImage::new(24, 24);
    for y in 0..24i32 {
        for x in 0..24i32 {
            let inside = (x - 12).pow(2) + (y - 12).pow(2) < 81;
            if inside {
                img.set_pixel(
                    x as u32,
                    y as u32,
                    Rgba16::from_rgb8((x * 10) as u8, (y * 10) as u8, 90),
                );
            }
        }
    }
    let before = img.clone();

    let d = Ditherer::new(
        palette.clone(),
        Algorithm::mapper(Bayer::new(4, 4, 1.0).unwrap()),
    );
    d.dither(&mut img).unwrap();

    for y in 0..24u32 {
        for x in 0..24u32 {
            let src = before.pixel(x, y);
            let out = img.pixel(x, y);
            assert_eq!(out.a, src.a, "alpha must be bit-identical at ({x}, {y})");
            if src.a == 0 {
                assert_eq!(out, src, "transparent pixel changed at ({x}, {y})");
            } else {
                assert!(palette.contains(out), "opaque pixel off palette at ({x}, {y})");
            }
        }
    }
}

// ============================================================================
// Determinism with a sequential source
// ============================================================================

/// If this breaks: the single-threaded pixel-map path is not visiting pixels
/// in a defined order, so mappers that consume a shared sequential source
/// can't be reproduced.
#[test]
fn test_single_threaded_sequential_source_is_deterministic() {
    // A mapper that ignores position and color, emitting from a counter.
    let sequential = || {
        let counter = AtomicU32::new(0);
        move |_x: u32, _y: u32, _r: u16, _g: u16, _b: u16| {
            let n = counter.fetch_add(1, Ordering::Relaxed);
            let v = if n % 3 == 0 { 65535 } else { 0 };
            (v, v, v)
        }
    };

    let field = GrayImage::new(17, 11, vec![128; 187]);
    let run = || {
        Ditherer::new(bw(), Algorithm::mapper(sequential()))
            .single_threaded(true)
            .dither_copy(&field)
            .unwrap()
    };

    assert_eq!(run(), run(), "single-threaded runs must be bit-identical");
}
