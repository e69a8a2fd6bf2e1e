//! The well-known error-diffusion weight matrices.
//!
//! Each function builds a fresh [`DiffusionMatrix`]; the construction cannot
//! fail for these fixed tables, so they unwrap internally.

use super::DiffusionMatrix;

fn matrix(rows: Vec<Vec<f32>>) -> DiffusionMatrix {
    DiffusionMatrix::new(rows).expect("built-in diffusion matrix is well-formed")
}

/// A minimal two-cell kernel: half the error right, half below.
pub fn simple_2d() -> DiffusionMatrix {
    matrix(vec![vec![0.0, 0.5], vec![0.5, 0.0]])
}

/// Floyd–Steinberg, the classic error-diffusion kernel.
pub fn floyd_steinberg() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 7.0 / 16.0],
        vec![3.0 / 16.0, 5.0 / 16.0, 1.0 / 16.0],
    ])
}

/// The simplified "false" Floyd–Steinberg kernel. Faster but shows clear
/// directional artifacts; mostly of historical interest.
pub fn false_floyd_steinberg() -> DiffusionMatrix {
    matrix(vec![vec![0.0, 3.0 / 8.0], vec![3.0 / 8.0, 2.0 / 8.0]])
}

/// Jarvis, Judice & Ninke: a large 3-row kernel with smooth gradients.
pub fn jarvis_judice_ninke() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 0.0, 7.0 / 48.0, 5.0 / 48.0],
        vec![3.0 / 48.0, 5.0 / 48.0, 7.0 / 48.0, 5.0 / 48.0, 3.0 / 48.0],
        vec![1.0 / 48.0, 3.0 / 48.0, 5.0 / 48.0, 3.0 / 48.0, 1.0 / 48.0],
    ])
}

/// Atkinson's kernel from the original Macintosh. Only six of eight error
/// units are propagated, which increases contrast and reduces bleed.
pub fn atkinson() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 1.0 / 8.0, 1.0 / 8.0],
        vec![1.0 / 8.0, 1.0 / 8.0, 1.0 / 8.0, 0.0],
        vec![0.0, 1.0 / 8.0, 0.0, 0.0],
    ])
}

/// Stucki's kernel, similar to Jarvis–Judice–Ninke with sharper results.
pub fn stucki() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 0.0, 8.0 / 42.0, 4.0 / 42.0],
        vec![2.0 / 42.0, 4.0 / 42.0, 8.0 / 42.0, 4.0 / 42.0, 2.0 / 42.0],
        vec![1.0 / 42.0, 2.0 / 42.0, 4.0 / 42.0, 2.0 / 42.0, 1.0 / 42.0],
    ])
}

/// Burkes' two-row simplification of Stucki.
pub fn burkes() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 0.0, 8.0 / 32.0, 4.0 / 32.0],
        vec![2.0 / 32.0, 4.0 / 32.0, 8.0 / 32.0, 4.0 / 32.0, 2.0 / 32.0],
    ])
}

/// The original three-row Sierra kernel.
pub fn sierra() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 0.0, 5.0 / 32.0, 3.0 / 32.0],
        vec![2.0 / 32.0, 4.0 / 32.0, 5.0 / 32.0, 4.0 / 32.0, 2.0 / 32.0],
        vec![0.0, 2.0 / 32.0, 3.0 / 32.0, 2.0 / 32.0, 0.0],
    ])
}

/// Another name for the original [`sierra`] kernel.
pub fn sierra3() -> DiffusionMatrix {
    sierra()
}

/// The two-row Sierra kernel.
pub fn two_row_sierra() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 0.0, 4.0 / 16.0, 3.0 / 16.0],
        vec![1.0 / 16.0, 2.0 / 16.0, 3.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    ])
}

/// Another name for [`two_row_sierra`].
pub fn sierra_two_row() -> DiffusionMatrix {
    two_row_sierra()
}

/// Sierra Lite, the smallest Sierra variant.
pub fn sierra_lite() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 2.0 / 4.0],
        vec![1.0 / 4.0, 1.0 / 4.0, 0.0],
    ])
}

/// Another name for [`sierra_lite`], usually written Sierra2-4A.
pub fn sierra_2_4a() -> DiffusionMatrix {
    sierra_lite()
}

/// Steven Pigeon's kernel.
pub fn steven_pigeon() -> DiffusionMatrix {
    matrix(vec![
        vec![0.0, 0.0, 0.0, 2.0 / 14.0, 1.0 / 14.0],
        vec![0.0, 2.0 / 14.0, 2.0 / 14.0, 2.0 / 14.0, 0.0],
        vec![1.0 / 14.0, 0.0, 1.0 / 14.0, 0.0, 1.0 / 14.0],
    ])
}
