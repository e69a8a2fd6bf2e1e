//! Error types for the public API.
//!
//! [`DitherError`] wraps the crate's error enums into a single type for
//! convenient `?` propagation in application code. All of these faults are
//! caller bugs: nothing in here is retried, and an operation either produces
//! a fully dithered image or fails before any output is observable.

use thiserror::Error;

use crate::palette::PaletteError;

/// A configuration that cannot dither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The reserved "special" algorithm selector was chosen. No special
    /// algorithms exist yet, so this selector is always invalid.
    #[error("reserved special dithering algorithm selected")]
    ReservedAlgorithm,

    /// A weight or threshold matrix had no rows or no columns.
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    /// A weight or threshold matrix had rows of different lengths.
    #[error("matrix rows must all have the same length")]
    RaggedMatrix,

    /// An ordered-dither matrix had a zero divisor.
    #[error("ordered matrix divisor (max) must not be zero")]
    ZeroMax,

    /// Bayer dimensions must both be powers of two, or one of the
    /// hand-derived pairs 3x3, 5x3, 3x5.
    #[error("invalid Bayer matrix dimensions {x}x{y}")]
    BayerDimensions {
        /// Requested width.
        x: u32,
        /// Requested height.
        y: u32,
    },

    /// A paletted destination's palette does not match the ditherer's.
    #[error("destination palette does not match the ditherer palette")]
    PaletteMismatch,
}

/// A request that exceeds what the palette or output format can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CapacityError {
    /// Indexed output addresses palettes with at most 256 colors.
    #[error("palette has {colors} colors, paletted output supports at most 256")]
    PaletteTooLarge {
        /// Number of colors in the palette.
        colors: usize,
    },

    /// A quantize caller allowed fewer colors than the palette holds.
    #[error("palette has {colors} colors but the caller allows only {allowed}")]
    TooManyColors {
        /// Number of colors in the palette.
        colors: usize,
        /// Number of colors the caller allows.
        allowed: usize,
    },

    /// A quantize caller required colors the palette does not contain.
    #[error("caller requires colors that are not in the palette")]
    MissingRequiredColors,
}

/// Unified error type for the public API.
///
/// # Example
///
/// ```
/// use palette_dither::{DitherError, Palette, Rgba16};
///
/// fn build() -> Result<Palette, DitherError> {
///     Ok(Palette::new(&[Rgba16::BLACK, Rgba16::WHITE])?)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DitherError {
    /// Invalid ditherer or matrix configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Palette construction failure.
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Palette or output capacity exceeded.
    #[error("capacity error: {0}")]
    Capacity(#[from] CapacityError),
}
