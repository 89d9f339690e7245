//! Color utilities for page theming.
//!
//! - **parse** / **format**: CSS color strings in and out
//! - **convert**: RGB ↔ HSL and RGB ↔ HSV
//! - **palette**: nearest human-readable color name, coarse HSV buckets
//! - **matrix**: 5×5 filter matrices (invert, brightness, contrast, grayscale, sepia)
//! - **correction**: colorblindness correction matrices
//! - **modify**: per-role color adjustment for generated dark themes

pub mod convert;
pub mod correction;
pub mod error;
pub mod format;
pub mod matrix;
pub mod modify;
mod named;
pub mod palette;
pub mod parse;

pub use convert::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use correction::{correction_matrix, full_correction, simulation_matrix};
pub use error::{ColorError, Result};
pub use format::{hsl_to_string, rgb_to_hex_string, rgb_to_string, to_fixed};
pub use matrix::{
    Matrix, apply_color_matrix, create_filter_matrix, css_filter_value, svg_filter_matrix_value,
};
pub use modify::{ColorModifier, Role};
pub use palette::{
    PALETTE, PaletteEntry, PaletteMatch, hsv_bucket, nearest_named_color, nearest_palette_entry,
};
pub use parse::parse;
