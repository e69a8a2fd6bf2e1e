//! The parallel pixel-map driver.
//!
//! The destination is split into horizontal bands of whole rows, one rayon
//! task per band, up to `min(workers, rows)` bands. Bands are disjoint `&mut`
//! slices, so workers share no mutable state and the scope join is the only
//! synchronization. With one worker everything runs inline in scan order,
//! which is what makes sequential-source mappers reproducible.

use crate::color::{linearize_premul_rgba8, Rgba16};
use crate::palette::Palette;
use crate::raster::{Rect, RgbaImage};

use super::PixelMapper;

/// Apply `mapper` + closest-color quantization to every pixel of `rect`.
///
/// `rect` must already be clipped to the image bounds.
pub(crate) fn map_region(
    img: &mut RgbaImage,
    rect: Rect,
    palette: &Palette,
    mapper: &dyn PixelMapper,
    single_threaded: bool,
) {
    let rows = rect.height() as usize;
    if rows == 0 || rect.width() == 0 {
        return;
    }

    let workers = if single_threaded {
        1
    } else {
        rayon::current_num_threads().max(1).min(rows)
    };

    let stride = img.stride();
    let min_y = rect.min_y as usize;
    let max_y = rect.max_y as usize;
    let region = &mut img.data_mut()[min_y * stride..max_y * stride];

    if workers == 1 {
        band_worker(region, min_y, stride, rect, palette, mapper);
        return;
    }

    // Equal-height bands; the last one absorbs the remainder rows.
    let band_rows = rows / workers;
    let mut bands = Vec::with_capacity(workers);
    let mut rest = region;
    let mut row = min_y;
    for i in 0..workers {
        let take = if i + 1 == workers {
            rows - band_rows * (workers - 1)
        } else {
            band_rows
        };
        let (band, tail) = std::mem::take(&mut rest).split_at_mut(take * stride);
        bands.push((row, band));
        row += take;
        rest = tail;
    }

    rayon::scope(|s| {
        for (start_row, band) in bands {
            s.spawn(move |_| band_worker(band, start_row, stride, rect, palette, mapper));
        }
    });
}

/// Process the rows of one band. `band` holds whole image rows starting at
/// absolute row `start_row`; only the columns inside `rect` are touched.
fn band_worker(
    band: &mut [u8],
    start_row: usize,
    stride: usize,
    rect: Rect,
    palette: &Palette,
    mapper: &dyn PixelMapper,
) {
    for (dy, row) in band.chunks_exact_mut(stride).enumerate() {
        let y = (start_row + dy) as u32;
        for x in rect.min_x..rect.max_x {
            let px = &mut row[x as usize * 4..x as usize * 4 + 4];
            let src = [px[0], px[1], px[2], px[3]];
            let ([r, g, b], alpha) = linearize_premul_rgba8(src);

            // Fully transparent pixels pass through untouched.
            if alpha == 0 {
                continue;
            }

            let (nr, ng, nb) = mapper.map(x as u32, y, r, g, b);
            let idx = palette.closest(nr, ng, nb);
            let chosen = palette.color(idx);
            let out = Rgba16::new(chosen.r, chosen.g, chosen.b, alpha).to_premultiplied_u8();
            px.copy_from_slice(&out);
        }
    }
}
