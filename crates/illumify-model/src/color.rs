//! Color value types.
//!
//! Channels are kept as `f64` so that values parsed from CSS (which may carry
//! fractional alpha or percentages) survive conversions without truncation.

use serde::{Deserialize, Serialize};

fn opaque() -> f64 {
    1.0
}

/// RGB color with alpha. `r`, `g`, `b` are in `0..=255`, `a` in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Rgba {
    /// Opaque color from integer channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        }
    }

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Channels clamped and rounded to bytes.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|channel| channel.round().clamp(0.0, 255.0) as u8)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// HSL color with alpha. `h` in degrees `0..360`, `s`, `l` and `a` in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

/// HSV triple used by the pixel-naming helpers. No alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in whole degrees, `0..=360`.
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}
