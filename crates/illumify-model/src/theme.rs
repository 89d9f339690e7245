//! Filter (theme) configuration.
//!
//! Numeric enums serialize as their integer ids so that settings exported by
//! the extension (`"mode": 1`, `"colorblindnessType": 0`) load unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Light or dark rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FilterMode {
    Light,
    #[default]
    Dark,
}

impl TryFrom<u8> for FilterMode {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Light),
            1 => Ok(Self::Dark),
            _ => Err(ModelError::InvalidEnumValue {
                kind: "filter mode",
                value,
            }),
        }
    }
}

impl From<FilterMode> for u8 {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Light => 0,
            FilterMode::Dark => 1,
        }
    }
}

/// Color vision deficiency the correction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColorblindnessType {
    #[default]
    Deuteranopia,
    Protanopia,
    Tritanopia,
}

impl ColorblindnessType {
    pub const ALL: [Self; 3] = [Self::Deuteranopia, Self::Protanopia, Self::Tritanopia];

    pub fn label(self) -> &'static str {
        match self {
            Self::Deuteranopia => "Deuteranopia",
            Self::Protanopia => "Protanopia",
            Self::Tritanopia => "Tritanopia",
        }
    }

    /// Correction methods offered for this deficiency, preferred first.
    pub fn supported_corrections(self) -> &'static [ColorCorrectionType] {
        match self {
            Self::Deuteranopia | Self::Protanopia => &[ColorCorrectionType::LmsDaltonization],
            Self::Tritanopia => &[
                ColorCorrectionType::LmsDaltonization,
                ColorCorrectionType::Shift,
            ],
        }
    }

    pub fn supports(self, correction: ColorCorrectionType) -> bool {
        self.supported_corrections().contains(&correction)
    }
}

impl fmt::Display for ColorblindnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for ColorblindnessType {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Deuteranopia),
            1 => Ok(Self::Protanopia),
            2 => Ok(Self::Tritanopia),
            _ => Err(ModelError::InvalidEnumValue {
                kind: "colorblindness type",
                value,
            }),
        }
    }
}

impl From<ColorblindnessType> for u8 {
    fn from(kind: ColorblindnessType) -> Self {
        match kind {
            ColorblindnessType::Deuteranopia => 0,
            ColorblindnessType::Protanopia => 1,
            ColorblindnessType::Tritanopia => 2,
        }
    }
}

/// How the lost channel information is redistributed.
///
/// Ids 1 and 2 are reserved by exported settings for methods this crate does
/// not implement; loading them fails instead of silently picking another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColorCorrectionType {
    /// Daltonization in LMS space, error pushed into the channels the viewer
    /// still distinguishes.
    #[default]
    LmsDaltonization,
    /// Only the cross-channel part of the daltonization error is applied.
    Shift,
}

impl ColorCorrectionType {
    pub fn label(self) -> &'static str {
        match self {
            Self::LmsDaltonization => "LMS Daltonization",
            Self::Shift => "Shifting Method",
        }
    }
}

impl fmt::Display for ColorCorrectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for ColorCorrectionType {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::LmsDaltonization),
            3 => Ok(Self::Shift),
            _ => Err(ModelError::InvalidEnumValue {
                kind: "color correction type",
                value,
            }),
        }
    }
}

impl From<ColorCorrectionType> for u8 {
    fn from(kind: ColorCorrectionType) -> Self {
        match kind {
            ColorCorrectionType::LmsDaltonization => 0,
            ColorCorrectionType::Shift => 3,
        }
    }
}

/// Page rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeEngine {
    #[default]
    CssFilter,
    SvgFilter,
    StaticTheme,
    DynamicTheme,
}

/// Theme applied to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub mode: FilterMode,
    /// Percent, 100 = unchanged.
    pub brightness: u32,
    /// Percent, 100 = unchanged.
    pub contrast: u32,
    /// Percent, 0 = unchanged.
    pub grayscale: u32,
    /// Percent, 0 = unchanged.
    pub sepia: u32,
    pub use_font: bool,
    pub font_family: String,
    pub text_stroke: f64,
    pub text_scale: u32,
    pub use_color_correction: bool,
    pub colorblindness_type: ColorblindnessType,
    pub color_correction_type: ColorCorrectionType,
    /// Correction strength, `0..=1`.
    pub colorblindness_sensitivity: f64,
    pub link_color: bool,
    /// Unvisited link color, hex without `#`.
    pub unclicked_color: String,
    /// Visited link color, hex without `#`.
    pub clicked_color: String,
    pub engine: ThemeEngine,
    pub stylesheet: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::Dark,
            brightness: 100,
            contrast: 100,
            grayscale: 0,
            sepia: 0,
            use_font: false,
            font_family: "Open Sans".to_string(),
            text_stroke: 0.0,
            text_scale: 100,
            use_color_correction: false,
            colorblindness_type: ColorblindnessType::Deuteranopia,
            color_correction_type: ColorCorrectionType::LmsDaltonization,
            colorblindness_sensitivity: 1.0,
            link_color: false,
            unclicked_color: "0000FF".to_string(),
            clicked_color: "551A8B".to_string(),
            engine: ThemeEngine::CssFilter,
            stylesheet: String::new(),
        }
    }
}

impl FilterConfig {
    /// Copy of this config with a different mode.
    #[must_use]
    pub fn with_mode(&self, mode: FilterMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// Key over every field that changes how a single color is modified.
    ///
    /// Font, link and engine settings are left out: two themes differing only
    /// there produce the same colors.
    pub fn cache_key(&self) -> String {
        format!(
            "mode:{};brightness:{};contrast:{};grayscale:{};sepia:{};\
             useColorCorrection:{};colorblindnessType:{};\
             colorblindnessSensitivity:{};colorCorrectionType:{}",
            u8::from(self.mode),
            self.brightness,
            self.contrast,
            self.grayscale,
            self.sepia,
            self.use_color_correction,
            u8::from(self.colorblindness_type),
            self.colorblindness_sensitivity,
            u8::from(self.color_correction_type),
        )
    }
}
