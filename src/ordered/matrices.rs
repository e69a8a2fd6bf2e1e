//! Named ordered-dither threshold matrices.
//!
//! These tables come from the halftoning literature (Ulichney's "Digital
//! Halftoning", Lau & Arce's "Modern Digital Halftoning") and the libcaca
//! study. Where a source ranged values from 1, everything has been shifted to
//! start at 0. Each function builds a fresh, validated [`OrderedMatrix`].

use super::OrderedMatrix;

fn matrix(cells: Vec<Vec<u32>>, max: u32) -> OrderedMatrix {
    OrderedMatrix::new(cells, max).expect("built-in ordered matrix is well-formed")
}

/// A 4x4 clustered-dot matrix. Not diagonal, so the dots form a grid.
pub fn clustered_dot_4x4() -> OrderedMatrix {
    matrix(
        vec![
            vec![12, 5, 6, 13],
            vec![4, 0, 1, 7],
            vec![11, 3, 2, 8],
            vec![15, 10, 9, 14],
        ],
        16,
    )
}

/// An 8x8 diagonal clustered-dot matrix that mimics newspaper halftoning;
/// the dot pattern sits at a 45 degree angle.
pub fn clustered_dot_diagonal_8x8() -> OrderedMatrix {
    matrix(
        vec![
            vec![24, 10, 12, 26, 35, 47, 49, 37],
            vec![8, 0, 2, 14, 45, 59, 61, 51],
            vec![22, 6, 4, 16, 43, 57, 63, 53],
            vec![30, 20, 18, 28, 33, 41, 55, 39],
            vec![34, 46, 48, 36, 25, 11, 13, 27],
            vec![44, 58, 60, 50, 9, 1, 3, 15],
            vec![42, 56, 62, 52, 23, 7, 5, 17],
            vec![32, 40, 54, 38, 31, 21, 19, 29],
        ],
        64,
    )
}

/// A 5x3 matrix that clusters into vertical line artifacts.
pub fn vertical_5x3() -> OrderedMatrix {
    matrix(
        vec![
            vec![9, 3, 0, 6, 12],
            vec![10, 4, 1, 7, 13],
            vec![11, 5, 2, 8, 14],
        ],
        15,
    )
}

/// [`vertical_5x3`] rotated a quarter turn.
pub fn horizontal_3x5() -> OrderedMatrix {
    matrix(
        vec![
            vec![9, 10, 11],
            vec![3, 4, 5],
            vec![0, 1, 2],
            vec![6, 7, 8],
            vec![12, 13, 14],
        ],
        15,
    )
}

/// A 6x6 diagonal clustered-dot matrix ("M = 3" in Ulichney), 19 gray levels.
pub fn clustered_dot_diagonal_6x6() -> OrderedMatrix {
    matrix(
        vec![
            vec![8, 6, 7, 9, 11, 10],
            vec![5, 0, 1, 12, 17, 16],
            vec![4, 3, 2, 13, 14, 15],
            vec![9, 11, 10, 8, 6, 8],
            vec![12, 17, 16, 5, 0, 1],
            vec![13, 14, 15, 4, 3, 2],
        ],
        // (x*y)/2 because the matrix is diagonal
        18,
    )
}

/// An 8x8 diagonal clustered-dot matrix ("M = 4" in Ulichney), 33 gray
/// levels. [`clustered_dot_diagonal_8x8`] covers more levels and is usually
/// the better pick.
pub fn clustered_dot_diagonal_8x8_2() -> OrderedMatrix {
    matrix(
        vec![
            vec![13, 11, 12, 15, 18, 20, 19, 16],
            vec![4, 3, 2, 9, 27, 28, 29, 22],
            vec![5, 0, 1, 10, 26, 31, 30, 21],
            vec![8, 6, 7, 14, 23, 25, 24, 17],
            vec![18, 20, 19, 16, 13, 11, 12, 15],
            vec![27, 28, 29, 22, 4, 3, 2, 9],
            vec![26, 31, 30, 21, 5, 0, 1, 10],
            vec![23, 25, 24, 17, 8, 6, 7, 14],
        ],
        32,
    )
}

/// A 16x16 diagonal clustered-dot matrix ("M = 8" in Ulichney), 129 gray
/// levels.
pub fn clustered_dot_diagonal_16x16() -> OrderedMatrix {
    matrix(
        vec![
            vec![63, 58, 50, 40, 41, 51, 59, 60, 64, 69, 77, 87, 86, 76, 68, 67],
            vec![57, 33, 27, 18, 19, 28, 34, 52, 70, 94, 100, 109, 108, 99, 93, 75],
            vec![49, 26, 13, 11, 12, 15, 29, 44, 78, 101, 114, 116, 115, 112, 98, 83],
            vec![39, 17, 4, 3, 2, 9, 20, 42, 87, 110, 123, 124, 125, 118, 107, 85],
            vec![38, 16, 5, 0, 1, 10, 21, 43, 89, 111, 122, 127, 126, 117, 106, 84],
            vec![48, 25, 8, 6, 7, 14, 30, 45, 79, 102, 119, 121, 120, 113, 97, 82],
            vec![56, 32, 24, 23, 22, 31, 35, 53, 71, 95, 103, 104, 105, 96, 92, 74],
            vec![62, 55, 47, 37, 36, 46, 54, 61, 65, 72, 80, 90, 91, 81, 73, 66],
            vec![64, 69, 77, 87, 86, 76, 68, 67, 63, 58, 50, 40, 41, 51, 59, 60],
            vec![70, 94, 100, 109, 108, 99, 93, 75, 57, 33, 27, 18, 19, 28, 34, 52],
            vec![78, 101, 114, 116, 115, 112, 98, 83, 49, 26, 13, 11, 12, 15, 29, 44],
            vec![87, 110, 123, 124, 125, 118, 107, 85, 39, 17, 4, 3, 2, 9, 20, 42],
            vec![89, 111, 122, 127, 126, 117, 106, 84, 38, 16, 5, 0, 1, 10, 21, 43],
            vec![79, 102, 119, 121, 120, 113, 97, 82, 48, 25, 8, 6, 7, 14, 30, 45],
            vec![71, 95, 103, 104, 105, 96, 92, 74, 56, 32, 24, 23, 22, 31, 35, 53],
            vec![65, 72, 80, 90, 91, 81, 73, 66, 62, 55, 47, 37, 36, 46, 54, 61],
        ],
        128,
    )
}

/// A 6x6 clustered-dot matrix, 37 gray levels. Not diagonal.
pub fn clustered_dot_6x6() -> OrderedMatrix {
    matrix(
        vec![
            vec![34, 29, 17, 21, 30, 35],
            vec![28, 14, 9, 16, 20, 31],
            vec![13, 8, 4, 5, 15, 19],
            vec![12, 3, 0, 1, 10, 18],
            vec![27, 7, 2, 6, 23, 24],
            vec![33, 26, 11, 22, 25, 32],
        ],
        36,
    )
}

/// A 5x5 clustered-dot spiral, 26 gray levels. The dark area grows to fill
/// the cell instead of alternating dots.
pub fn clustered_dot_spiral_5x5() -> OrderedMatrix {
    matrix(
        vec![
            vec![20, 21, 22, 23, 24],
            vec![19, 6, 7, 8, 9],
            vec![18, 5, 0, 1, 10],
            vec![17, 4, 3, 2, 11],
            vec![16, 15, 14, 13, 12],
        ],
        25,
    )
}

/// A 6x6 matrix that clusters pixels about horizontal lines, 37 gray levels.
pub fn clustered_dot_horizontal_line() -> OrderedMatrix {
    matrix(
        vec![
            vec![35, 33, 31, 30, 32, 34],
            vec![23, 21, 19, 18, 20, 22],
            vec![11, 9, 7, 6, 8, 10],
            vec![5, 3, 1, 0, 2, 4],
            vec![17, 15, 13, 12, 14, 16],
            vec![29, 27, 25, 24, 26, 28],
        ],
        36,
    )
}

/// [`clustered_dot_horizontal_line`] rotated a quarter turn.
pub fn clustered_dot_vertical_line() -> OrderedMatrix {
    matrix(
        vec![
            vec![35, 23, 11, 5, 17, 29],
            vec![33, 21, 9, 3, 15, 27],
            vec![31, 19, 7, 1, 13, 25],
            vec![30, 18, 6, 0, 12, 24],
            vec![32, 20, 8, 2, 14, 26],
            vec![34, 22, 10, 4, 16, 28],
        ],
        36,
    )
}

/// An 8x8 clustered-dot matrix from Lau & Arce, 65 gray levels. Like
/// [`clustered_dot_diagonal_8x8`] but not diagonal.
pub fn clustered_dot_8x8() -> OrderedMatrix {
    matrix(
        vec![
            // The book ranged these 0-64; the duplicate 64 was lowered to 63
            // so pure black doesn't sprout white dots.
            vec![3, 9, 17, 27, 25, 15, 7, 1],
            vec![11, 29, 38, 46, 44, 36, 23, 5],
            vec![19, 40, 52, 58, 56, 50, 34, 13],
            vec![31, 48, 60, 63, 62, 54, 42, 21],
            vec![30, 47, 59, 63, 61, 53, 41, 20],
            vec![18, 39, 51, 57, 55, 49, 33, 12],
            vec![10, 28, 37, 45, 43, 35, 22, 4],
            vec![2, 8, 16, 26, 24, 14, 6, 0],
        ],
        64,
    )
}

/// A 6x6 "central white point" matrix, nearly identical to
/// [`clustered_dot_6x6`].
pub fn clustered_dot_6x6_2() -> OrderedMatrix {
    matrix(
        vec![
            vec![34, 25, 21, 17, 29, 33],
            vec![30, 13, 9, 5, 12, 24],
            vec![18, 6, 1, 0, 8, 20],
            vec![22, 10, 2, 3, 4, 16],
            vec![26, 14, 7, 11, 15, 28],
            vec![35, 31, 19, 23, 27, 32],
        ],
        36,
    )
}

/// A 6x6 "balanced centered point" matrix, nearly identical to
/// [`clustered_dot_6x6`].
pub fn clustered_dot_6x6_3() -> OrderedMatrix {
    matrix(
        vec![
            vec![30, 22, 16, 21, 33, 35],
            vec![24, 11, 7, 9, 26, 28],
            vec![13, 5, 0, 2, 14, 19],
            vec![15, 3, 1, 4, 12, 18],
            vec![27, 8, 6, 10, 25, 29],
            vec![32, 20, 17, 23, 31, 34],
        ],
        36,
    )
}

/// An 8x8 diagonal matrix with balanced centered points. Covers fewer gray
/// levels than [`clustered_dot_diagonal_8x8`].
pub fn clustered_dot_diagonal_8x8_3() -> OrderedMatrix {
    matrix(
        vec![
            // Values repeat: the diamond is two square matrices in a grid.
            vec![13, 9, 5, 12, 18, 22, 26, 19],
            vec![6, 1, 0, 8, 25, 30, 31, 23],
            vec![10, 2, 3, 4, 21, 29, 28, 27],
            vec![14, 7, 11, 15, 17, 24, 20, 16],
            vec![18, 22, 26, 19, 13, 9, 5, 12],
            vec![25, 30, 31, 23, 6, 1, 0, 8],
            vec![21, 29, 28, 27, 10, 2, 3, 4],
            vec![17, 24, 20, 16, 14, 7, 11, 15],
        ],
        32,
    )
}
