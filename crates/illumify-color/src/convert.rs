//! Color space conversions.

use illumify_model::{Hsla, Hsv, Rgba};

/// Convert RGB to HSL. Alpha is carried over unchanged.
pub fn rgb_to_hsl(rgb: Rgba) -> Hsla {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let l = (max + min) / 2.0;

    if chroma == 0.0 {
        return Hsla::new(0.0, 0.0, l, rgb.a);
    }

    let sector = if max == r {
        ((g - b) / chroma) % 6.0
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    let s = chroma / (1.0 - (2.0 * l - 1.0).abs());

    Hsla::new(h, s, l, rgb.a)
}

/// Convert HSL to RGB with channels rounded to whole numbers.
pub fn hsl_to_rgb(hsl: Hsla) -> Rgba {
    let Hsla { h, s, l, a } = hsl;
    if s == 0.0 {
        let v = (l * 255.0).round();
        return Rgba::new(v, v, v, a);
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = sextant(h / 60.0, c, x);
    Rgba::new(
        ((r + m) * 255.0).round(),
        ((g + m) * 255.0).round(),
        ((b + m) * 255.0).round(),
        a,
    )
}

/// Channel order for the hue sextant `h6 = hue / 60`.
fn sextant(h6: f64, c: f64, x: f64) -> (f64, f64, f64) {
    if h6 < 1.0 {
        (c, x, 0.0)
    } else if h6 < 2.0 {
        (x, c, 0.0)
    } else if h6 < 3.0 {
        (0.0, c, x)
    } else if h6 < 4.0 {
        (0.0, x, c)
    } else if h6 < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert RGB to HSV the way the pixel-naming tools sample screen colors.
///
/// Hue comes back in whole degrees (`0..=360`), saturation and value rounded
/// to two decimals. The tiny epsilons keep black and greys from dividing by
/// zero.
pub fn rgb_to_hsv(rgb: Rgba) -> Hsv {
    let mut red = rgb.r / 255.0;
    let mut green = rgb.g / 255.0;
    let mut blue = rgb.b / 255.0;
    let mut k = 0.0;

    if green < blue {
        std::mem::swap(&mut green, &mut blue);
        k = -1.0;
    }
    if red < green {
        std::mem::swap(&mut red, &mut green);
        k = -2.0 / 6.0 - k;
    }

    let chroma = red - green.min(blue);
    let h = ((k + (green - blue) / (6.0 * chroma + 1e-20)).abs() * 360.0).round();
    let s = round_to(chroma / (red + 1e-20), 2);
    let v = round_to(red, 2);

    Hsv::new(h, s, v)
}

/// Convert HSV back to RGB, channels rounded. Hue wraps at 360.
pub fn hsv_to_rgb(hsv: Hsv, alpha: f64) -> Rgba {
    let Hsv { h, s, v } = hsv;
    let c = v * s;
    let h6 = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = sextant(h6, c, x);
    Rgba::new(
        ((r + m) * 255.0).round(),
        ((g + m) * 255.0).round(),
        ((b + m) * 255.0).round(),
        alpha,
    )
}
