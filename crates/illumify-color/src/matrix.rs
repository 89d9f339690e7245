//! 5×5 color matrices for page filters.
//!
//! A color is the column vector `[r, g, b, 1, 1]` with channels in `0..=1`;
//! the last column of a matrix is therefore an additive offset. Multiplying
//! `a × b` yields a matrix that applies `b` first.

use illumify_model::{FilterConfig, FilterMode};
use tracing::warn;

use crate::correction::correction_matrix;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(pub [[f64; 5]; 5]);

/// Row-major product of two square matrices.
pub(crate) fn multiply<const N: usize>(a: &[[f64; N]; N], b: &[[f64; N]; N]) -> [[f64; N]; N] {
    let mut result = [[0.0; N]; N];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..N).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    result
}

impl Matrix {
    pub fn identity() -> Self {
        let mut rows = [[0.0; 5]; 5];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self(rows)
    }

    /// Invert lightness while keeping hues roughly in place.
    pub fn invert_n_hue() -> Self {
        Self([
            [0.333, -0.667, -0.667, 0.0, 1.0],
            [-0.667, 0.333, -0.667, 0.0, 1.0],
            [-0.667, -0.667, 0.333, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `v` is a factor, 1 = unchanged.
    pub fn brightness(v: f64) -> Self {
        Self([
            [v, 0.0, 0.0, 0.0, 0.0],
            [0.0, v, 0.0, 0.0, 0.0],
            [0.0, 0.0, v, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `v` is a factor, 1 = unchanged. Scales around mid grey.
    pub fn contrast(v: f64) -> Self {
        let t = (1.0 - v) / 2.0;
        Self([
            [v, 0.0, 0.0, 0.0, t],
            [0.0, v, 0.0, 0.0, t],
            [0.0, 0.0, v, 0.0, t],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `v` in `0..=1`, 0 = unchanged.
    pub fn sepia(v: f64) -> Self {
        let w = 1.0 - v;
        Self([
            [0.393 + 0.607 * w, 0.769 - 0.769 * w, 0.189 - 0.189 * w, 0.0, 0.0],
            [0.349 - 0.349 * w, 0.686 + 0.314 * w, 0.168 - 0.168 * w, 0.0, 0.0],
            [0.272 - 0.272 * w, 0.534 - 0.534 * w, 0.131 + 0.869 * w, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `v` in `0..=1`, 0 = unchanged. Uses Rec. 709 luma weights.
    pub fn grayscale(v: f64) -> Self {
        let w = 1.0 - v;
        Self([
            [0.2126 + 0.7874 * w, 0.7152 - 0.7152 * w, 0.0722 - 0.0722 * w, 0.0, 0.0],
            [0.2126 - 0.2126 * w, 0.7152 + 0.2848 * w, 0.0722 - 0.0722 * w, 0.0, 0.0],
            [0.2126 - 0.2126 * w, 0.7152 - 0.7152 * w, 0.0722 + 0.9278 * w, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Embed a 3×3 RGB transform, leaving alpha and offset untouched.
    pub fn from_rgb(rgb: [[f64; 3]; 3]) -> Self {
        let mut matrix = Self::identity();
        for (i, row) in rgb.iter().enumerate() {
            matrix.0[i][..3].copy_from_slice(row);
        }
        matrix
    }

    #[must_use]
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix(multiply(&self.0, &other.0))
    }

    pub fn rows(&self) -> &[[f64; 5]; 5] {
        &self.0
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Apply `matrix` to an RGB triple. Channels are rounded and clamped.
pub fn apply_color_matrix(rgb: [u8; 3], matrix: &Matrix) -> [u8; 3] {
    let column = [
        f64::from(rgb[0]) / 255.0,
        f64::from(rgb[1]) / 255.0,
        f64::from(rgb[2]) / 255.0,
        1.0,
        1.0,
    ];
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let value: f64 = (0..5).map(|k| matrix.0[i][k] * column[k]).sum();
        *channel = (value * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Combined matrix for a theme.
///
/// Color correction is applied to the page colors first, then dark-mode
/// inversion, brightness, contrast, grayscale and sepia.
pub fn create_filter_matrix(config: &FilterConfig) -> Matrix {
    let mut m = Matrix::identity();
    if config.sepia != 0 {
        m = m.multiply(&Matrix::sepia(f64::from(config.sepia) / 100.0));
    }
    if config.grayscale != 0 {
        m = m.multiply(&Matrix::grayscale(f64::from(config.grayscale) / 100.0));
    }
    if config.contrast != 100 {
        m = m.multiply(&Matrix::contrast(f64::from(config.contrast) / 100.0));
    }
    if config.brightness != 100 {
        m = m.multiply(&Matrix::brightness(f64::from(config.brightness) / 100.0));
    }
    if config.mode == FilterMode::Dark {
        m = m.multiply(&Matrix::invert_n_hue());
    }
    if config.use_color_correction {
        let kind = config.colorblindness_type;
        let mut method = config.color_correction_type;
        if !kind.supports(method) {
            warn!(
                colorblindness = %kind,
                method = %method,
                "unsupported correction method, falling back to LMS daltonization"
            );
            method = kind.supported_corrections()[0];
        }
        m = m.multiply(&correction_matrix(
            kind,
            method,
            config.colorblindness_sensitivity,
        ));
    }
    m
}

/// Value for a CSS `filter:` declaration, `None` when the theme changes nothing.
///
/// CSS filter functions cannot express color correction; themes that use it
/// need the SVG matrix instead.
pub fn css_filter_value(config: &FilterConfig) -> Option<String> {
    let mut filters = Vec::new();
    if config.mode == FilterMode::Dark {
        filters.push("invert(100%) hue-rotate(180deg)".to_string());
    }
    if config.brightness != 100 {
        filters.push(format!("brightness({}%)", config.brightness));
    }
    if config.contrast != 100 {
        filters.push(format!("contrast({}%)", config.contrast));
    }
    if config.grayscale != 0 {
        filters.push(format!("grayscale({}%)", config.grayscale));
    }
    if config.sepia != 0 {
        filters.push(format!("sepia({}%)", config.sepia));
    }
    if filters.is_empty() {
        None
    } else {
        Some(filters.join(" "))
    }
}

/// `values` attribute of an SVG `feColorMatrix` for the theme: the first four
/// rows, three decimals each.
pub fn svg_filter_matrix_value(config: &FilterConfig) -> String {
    let matrix = create_filter_matrix(config);
    matrix.0[..4]
        .iter()
        .map(|row| {
            row.iter()
                .map(|&value| {
                    // Avoid printing "-0.000".
                    let value = (value * 1000.0).round() / 1000.0;
                    let value = if value == 0.0 { 0.0 } else { value };
                    format!("{value:.3}")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
