//! Public API for the palette-dither crate.
//!
//! This module provides the [`Ditherer`] dispatcher, the [`Algorithm`]
//! selector, and the unified error types.

mod ditherer;
mod error;

pub use ditherer::{Algorithm, Ditherer, SpecialDither};
pub use error::{CapacityError, ConfigError, DitherError};
