//! Error types for palette construction

use thiserror::Error;

/// Error type for palette validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PaletteError {
    /// No colors provided in the palette. A ditherer cannot be built without
    /// at least one target color.
    #[error("palette cannot be empty")]
    Empty,
}
