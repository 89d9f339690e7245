//! Colorblindness correction (daltonization).
//!
//! Colors are taken to LMS cone space, the missing cone response is
//! reconstructed from the remaining two, and the result is brought back to
//! RGB. The difference between the original and the simulated color is the
//! information the viewer loses; the correction pushes it into channels the
//! viewer still tells apart.

use illumify_model::{ColorCorrectionType, ColorblindnessType};

use crate::matrix::{Matrix, multiply};

const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

const RGB_TO_LMS: [[f64; 3]; 3] = [
    [17.8824, 43.5161, 4.11935],
    [3.45565, 27.1554, 3.86714],
    [0.0299566, 0.184309, 1.46709],
];

const LMS_TO_RGB: [[f64; 3]; 3] = [
    [0.0809444479, -0.130504409, 0.116721066],
    [-0.0102485335, 0.0540193266, -0.113614708],
    [-0.000365296938, -0.00412161469, 0.693511405],
];

/// Cone response seen by the deficient eye, in LMS.
fn lms_projection(kind: ColorblindnessType) -> [[f64; 3]; 3] {
    match kind {
        ColorblindnessType::Protanopia => {
            [[0.0, 2.02344, -2.52581], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        }
        ColorblindnessType::Deuteranopia => {
            [[1.0, 0.0, 0.0], [0.494207, 0.0, 1.24827], [0.0, 0.0, 1.0]]
        }
        ColorblindnessType::Tritanopia => {
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-0.395913, 0.801109, 0.0]]
        }
    }
}

/// Where the lost signal goes, per RGB output row. The row of the channel the
/// viewer cannot use is zero.
fn error_redistribution(kind: ColorblindnessType) -> [[f64; 3]; 3] {
    match kind {
        ColorblindnessType::Protanopia => [[0.0, 0.0, 0.0], [0.7, 1.0, 0.0], [0.7, 0.0, 1.0]],
        ColorblindnessType::Deuteranopia => [[1.0, 0.7, 0.0], [0.0, 0.0, 0.0], [0.0, 0.7, 1.0]],
        ColorblindnessType::Tritanopia => [[1.0, 0.0, 0.7], [0.0, 1.0, 0.7], [0.0, 0.0, 0.0]],
    }
}

/// RGB → RGB matrix showing how a color looks to a viewer with `kind`.
pub fn simulation_matrix(kind: ColorblindnessType) -> [[f64; 3]; 3] {
    multiply(&LMS_TO_RGB, &multiply(&lms_projection(kind), &RGB_TO_LMS))
}

/// Correction for `kind` using `method`, scaled by `sensitivity` (`0..=1`;
/// 0 is the identity).
pub fn correction_matrix(
    kind: ColorblindnessType,
    method: ColorCorrectionType,
    sensitivity: f64,
) -> Matrix {
    let simulated = simulation_matrix(kind);
    let mut lost = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            lost[i][j] = IDENTITY[i][j] - simulated[i][j];
        }
    }

    let mut redistribution = error_redistribution(kind);
    if method == ColorCorrectionType::Shift {
        for (i, row) in redistribution.iter_mut().enumerate() {
            row[i] = 0.0;
        }
    }

    let shift = multiply(&redistribution, &lost);
    let sensitivity = sensitivity.clamp(0.0, 1.0);
    let mut rgb = IDENTITY;
    for i in 0..3 {
        for j in 0..3 {
            rgb[i][j] += sensitivity * shift[i][j];
        }
    }
    Matrix::from_rgb(rgb)
}

/// Full-strength LMS daltonization for `kind`.
pub fn full_correction(kind: ColorblindnessType) -> Matrix {
    correction_matrix(kind, ColorCorrectionType::LmsDaltonization, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sensitivity_is_identity() {
        for kind in ColorblindnessType::ALL {
            let matrix = correction_matrix(kind, ColorCorrectionType::LmsDaltonization, 0.0);
            assert_eq!(matrix, Matrix::identity());
        }
    }

    #[test]
    fn deficient_channel_row_is_untouched() {
        let protanopia = full_correction(ColorblindnessType::Protanopia);
        assert_eq!(protanopia.rows()[0][..3], [1.0, 0.0, 0.0]);
        let deuteranopia = full_correction(ColorblindnessType::Deuteranopia);
        assert_eq!(deuteranopia.rows()[1][..3], [0.0, 1.0, 0.0]);
        let tritanopia = full_correction(ColorblindnessType::Tritanopia);
        assert_eq!(tritanopia.rows()[2][..3], [0.0, 0.0, 1.0]);
    }
}
