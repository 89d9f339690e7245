//! CSS serialization of colors.

use illumify_model::{Hsla, Rgba};

/// Format with `digits` decimals, then drop trailing zeros (and a bare dot).
///
/// Ties round away from zero, so `0.125` becomes `0.13`. With `digits == 0`
/// the integer form is returned as is.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let factor = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let rounded = (value * factor).round() / factor;
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let fixed = format!("{rounded:.digits$}");
    if digits == 0 {
        return fixed;
    }
    match fixed.find('.') {
        Some(dot) => {
            let trimmed = fixed.trim_end_matches('0');
            if trimmed.len() == dot + 1 {
                fixed[..dot].to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => fixed,
    }
}

/// `rgb(r, g, b)` for opaque colors, `rgba(r, g, b, a)` otherwise.
pub fn rgb_to_string(rgb: Rgba) -> String {
    let Rgba { r, g, b, a } = rgb;
    if !rgb.is_opaque() {
        format!(
            "rgba({}, {}, {}, {})",
            to_fixed(r, 0),
            to_fixed(g, 0),
            to_fixed(b, 0),
            to_fixed(a, 2)
        )
    } else {
        format!("rgb({}, {}, {})", to_fixed(r, 0), to_fixed(g, 0), to_fixed(b, 0))
    }
}

/// `#rrggbb`, with an alpha byte appended for translucent colors.
pub fn rgb_to_hex_string(rgb: Rgba) -> String {
    let [r, g, b] = rgb.to_bytes();
    if !rgb.is_opaque() {
        let a = (rgb.a * 255.0).round().clamp(0.0, 255.0) as u8;
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// `hsl(h, s%, l%)` for opaque colors, `hsla(h, s%, l%, a)` otherwise.
pub fn hsl_to_string(hsl: Hsla) -> String {
    let Hsla { h, s, l, a } = hsl;
    if a < 1.0 {
        format!(
            "hsla({}, {}%, {}%, {})",
            to_fixed(h, 0),
            to_fixed(s * 100.0, 0),
            to_fixed(l * 100.0, 0),
            to_fixed(a, 2)
        )
    } else {
        format!(
            "hsl({}, {}%, {}%)",
            to_fixed(h, 0),
            to_fixed(s * 100.0, 0),
            to_fixed(l * 100.0, 0)
        )
    }
}
