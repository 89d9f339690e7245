//! Per-role color modification for generated dark themes.
//!
//! Each page color is adjusted in HSL according to the role it plays, then the
//! theme's brightness/contrast/grayscale/sepia/correction matrix is applied in
//! light mode (the HSL step already did the darkening).

use std::collections::HashMap;
use std::fmt;

use illumify_model::{FilterConfig, FilterMode, Hsla, Rgba};
use tracing::trace;

use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::format::{rgb_to_hex_string, rgb_to_string};
use crate::matrix::{apply_color_matrix, create_filter_matrix};

/// What a color is used for on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Background,
    Foreground,
    Border,
    Shadow,
    Gradient,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Background,
        Role::Foreground,
        Role::Border,
        Role::Shadow,
        Role::Gradient,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::Foreground => "foreground",
            Role::Border => "border",
            Role::Shadow => "shadow",
            Role::Gradient => "gradient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The HSL adjustment actually applied. Shadows and gradients share the
/// background rule, and therefore its cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Rule {
    Light,
    Background,
    Foreground,
    Border,
}

impl Rule {
    fn for_role(role: Role, mode: FilterMode) -> Self {
        if mode == FilterMode::Light {
            return Rule::Light;
        }
        match role {
            Role::Background | Role::Shadow | Role::Gradient => Rule::Background,
            Role::Foreground => Rule::Foreground,
            Role::Border => Rule::Border,
        }
    }

    fn apply(self, hsl: Hsla) -> Hsla {
        match self {
            Rule::Light => light_mode_hsl(hsl),
            Rule::Background => background_hsl(hsl),
            Rule::Foreground => foreground_hsl(hsl),
            Rule::Border => border_hsl(hsl),
        }
    }
}

/// Linear map of `x` from `[in_low, in_high]` to `[out_low, out_high]`.
pub fn scale(x: f64, in_low: f64, in_high: f64, out_low: f64, out_high: f64) -> f64 {
    (x - in_low) * (out_high - out_low) / (in_high - in_low) + out_low
}

fn light_mode_hsl(Hsla { h, s, l, a }: Hsla) -> Hsla {
    const L_MIN: f64 = 0.0;
    const L_MID: f64 = 0.4;
    const L_MAX: f64 = 0.9;
    const S_NEUTRAL_LIM: f64 = 0.16;
    const S_COLORED: f64 = 0.16;
    const H_COLORED_DARK: f64 = 220.0;
    const H_COLORED_LIGHT: f64 = 40.0;

    let lx = scale(l, 0.0, 1.0, L_MIN, L_MAX);
    let (hx, sx) = if s < S_NEUTRAL_LIM {
        if l < L_MID {
            (H_COLORED_DARK, scale(l, 0.0, L_MID, S_COLORED, 0.0))
        } else {
            (H_COLORED_LIGHT, scale(l, L_MID, 1.0, 0.0, S_COLORED))
        }
    } else {
        (h, s)
    };
    Hsla::new(hx, sx, lx, a)
}

fn background_hsl(Hsla { h, s, l, a }: Hsla) -> Hsla {
    const L_MIN: f64 = 0.1;
    const L_MAX_S0: f64 = 0.25;
    const L_MAX_S1: f64 = 0.4;
    const S_NEUTRAL_LIM_L0: f64 = 0.24;
    const S_NEUTRAL_LIM_L1: f64 = 0.12;
    const S_COLORED: f64 = 0.16;
    const H_COLORED_L0: f64 = 235.0;
    const H_COLORED_L1: f64 = 215.0;

    let l_max = scale(s, 0.0, 1.0, L_MAX_S0, L_MAX_S1);
    let lx = if l < l_max {
        l
    } else if l < 0.5 {
        l_max
    } else {
        scale(l, 0.5, 1.0, l_max, L_MIN)
    };

    let lx_clamped = lx.clamp(L_MIN, l_max);
    let s_neutral_lim = scale(lx_clamped, L_MIN, l_max, S_NEUTRAL_LIM_L0, S_NEUTRAL_LIM_L1);
    if s < s_neutral_lim {
        let hx = scale(lx_clamped, L_MIN, l_max, H_COLORED_L0, H_COLORED_L1);
        Hsla::new(hx, S_COLORED, lx, a)
    } else {
        Hsla::new(h, s, lx, a)
    }
}

fn foreground_hsl(Hsla { h, s, l, a }: Hsla) -> Hsla {
    const L_MAX: f64 = 0.9;
    const L_MIN_S0: f64 = 0.7;
    const L_MIN_S1: f64 = 0.6;
    const S_NEUTRAL_LIM_L0: f64 = 0.12;
    const S_NEUTRAL_LIM_L1: f64 = 0.36;
    const S_COLORED: f64 = 0.24;
    const H_COLORED_L0: f64 = 35.0;
    const H_COLORED_L1: f64 = 45.0;

    let l_min = scale(s, 0.0, 1.0, L_MIN_S0, L_MIN_S1);
    let lx = if l < 0.5 {
        scale(l, 0.0, 0.5, L_MAX, l_min)
    } else if l < l_min {
        l_min
    } else {
        l
    };

    let lx_clamped = lx.clamp(l_min, L_MAX);
    let s_neutral_lim = scale(lx_clamped, l_min, L_MAX, S_NEUTRAL_LIM_L0, S_NEUTRAL_LIM_L1);
    if s < s_neutral_lim {
        let hx = scale(lx_clamped, l_min, L_MAX, H_COLORED_L0, H_COLORED_L1);
        Hsla::new(hx, S_COLORED, lx, a)
    } else {
        Hsla::new(h, s, lx, a)
    }
}

fn border_hsl(Hsla { h, s, l, a }: Hsla) -> Hsla {
    let l_min = scale(s, 0.0, 1.0, 0.2, 0.3);
    let l_max = scale(s, 0.0, 1.0, 0.4, 0.5);
    Hsla::new(h, s, scale(l, 0.0, 1.0, l_max, l_min), a)
}

/// Adjusts page colors for a theme, remembering earlier results.
#[derive(Debug, Default)]
pub struct ColorModifier {
    cache: HashMap<Rule, HashMap<String, String>>,
}

impl ColorModifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// CSS value replacing `rgb` when used as `role` under `filter`.
    pub fn modify(&mut self, role: Role, rgb: Rgba, filter: &FilterConfig) -> String {
        let rule = Rule::for_role(role, filter.mode);
        let key = format!(
            "r:{};g:{};b:{};a:{};{}",
            rgb.r,
            rgb.g,
            rgb.b,
            rgb.a,
            filter.cache_key()
        );
        let entries = self.cache.entry(rule).or_default();
        if let Some(cached) = entries.get(&key) {
            return cached.clone();
        }

        let modified = hsl_to_rgb(rule.apply(rgb_to_hsl(rgb)));
        let matrix = create_filter_matrix(&filter.with_mode(FilterMode::Light));
        let [r, g, b] = apply_color_matrix(modified.to_bytes(), &matrix);
        let result = Rgba::rgb(r, g, b).with_alpha(modified.a);
        let color = if result.is_opaque() {
            rgb_to_hex_string(result)
        } else {
            rgb_to_string(result)
        };

        trace!(%role, ?rgb, color, "modified color");
        entries.insert(key, color.clone());
        color
    }

    pub fn background(&mut self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify(Role::Background, rgb, filter)
    }

    pub fn foreground(&mut self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify(Role::Foreground, rgb, filter)
    }

    pub fn border(&mut self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify(Role::Border, rgb, filter)
    }

    pub fn shadow(&mut self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify(Role::Shadow, rgb, filter)
    }

    pub fn gradient(&mut self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify(Role::Gradient, rgb, filter)
    }

    /// Number of cached results across all rules.
    pub fn cached_len(&self) -> usize {
        self.cache.values().map(HashMap::len).sum()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
