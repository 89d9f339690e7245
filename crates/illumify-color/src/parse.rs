//! CSS color parsing.
//!
//! Accepted forms:
//! * `rgb()` / `rgba()` with comma, space or slash separators
//! * `hsl()` / `hsla()` with `deg`, `rad` or `turn` hue units
//! * `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! * named colors, `transparent` and the legacy system colors

use std::f64::consts::PI;
use std::sync::LazyLock;

use illumify_model::{Hsla, Rgba};
use regex::Regex;
use tracing::trace;

use crate::convert::hsl_to_rgb;
use crate::error::{ColorError, Result};
use crate::named::{NAMED_COLORS, SYSTEM_COLORS, lookup};

static RGB_MATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgba?\([^()]+\)$").expect("Invalid rgb regex"));
static HSL_MATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^hsla?\([^()]+\)$").expect("Invalid hsl regex"));
static HEX_MATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]+$").expect("Invalid hex regex"));

static RGB_SPLITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba?|\(|\)|/|,|\s").expect("Invalid rgb splitter"));
static HSL_SPLITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hsla?|\(|\)|/|,|\s").expect("Invalid hsl splitter"));

const RGB_RANGE: [f64; 4] = [255.0, 255.0, 255.0, 1.0];
const RGB_UNITS: &[(&str, f64)] = &[("%", 100.0)];

const HSL_RANGE: [f64; 4] = [360.0, 1.0, 1.0, 1.0];
const HSL_UNITS: &[(&str, f64)] = &[("%", 100.0), ("deg", 360.0), ("rad", 2.0 * PI), ("turn", 1.0)];

/// Parse a CSS color string.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Errors
/// carry the input exactly as given.
pub fn parse(input: &str) -> Result<Rgba> {
    let color = input.trim().to_lowercase();
    let fail = || ColorError::Parse(input.to_string());

    let parsed = if RGB_MATCH.is_match(&color) {
        parse_rgb(&color)
    } else if HSL_MATCH.is_match(&color) {
        parse_hsl(&color)
    } else if HEX_MATCH.is_match(&color) {
        parse_hex(&color[1..])
    } else if let Some(value) = lookup(NAMED_COLORS, &color) {
        Some(from_packed(value))
    } else if let Some(value) = lookup(SYSTEM_COLORS, &color) {
        Some(from_packed(value))
    } else if color == "transparent" {
        Some(Rgba::new(0.0, 0.0, 0.0, 0.0))
    } else {
        None
    };

    let rgba = parsed.ok_or_else(fail)?;
    trace!(input, ?rgba, "parsed color");
    Ok(rgba)
}

fn from_packed(value: u32) -> Rgba {
    let [_, r, g, b] = value.to_be_bytes();
    Rgba::rgb(r, g, b)
}

/// Split a functional notation into numbers, scaling unit-suffixed values
/// into `range`. Components whose range exceeds 1 are rounded.
fn numbers_from_string(
    value: &str,
    splitter: &Regex,
    range: &[f64; 4],
    units: &[(&str, f64)],
) -> Option<Vec<f64>> {
    let raw: Vec<&str> = splitter.split(value).filter(|part| !part.is_empty()).collect();
    if !(3..=4).contains(&raw.len()) {
        return None;
    }
    raw.iter()
        .enumerate()
        .map(|(index, part)| {
            let number = match units.iter().find(|(unit, _)| part.ends_with(unit)) {
                Some((unit, scale)) => {
                    parse_number(&part[..part.len() - unit.len()])? / scale * range[index]
                }
                None => parse_number(part)?,
            };
            Some(if range[index] > 1.0 {
                number.round()
            } else {
                number
            })
        })
        .collect()
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}

fn parse_rgb(color: &str) -> Option<Rgba> {
    let numbers = numbers_from_string(color, &RGB_SPLITTER, &RGB_RANGE, RGB_UNITS)?;
    Some(Rgba::new(
        numbers[0],
        numbers[1],
        numbers[2],
        numbers.get(3).copied().unwrap_or(1.0),
    ))
}

fn parse_hsl(color: &str) -> Option<Rgba> {
    let numbers = numbers_from_string(color, &HSL_SPLITTER, &HSL_RANGE, HSL_UNITS)?;
    Some(hsl_to_rgb(Hsla::new(
        numbers[0],
        numbers[1],
        numbers[2],
        numbers.get(3).copied().unwrap_or(1.0),
    )))
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let byte = |digits: &str| u8::from_str_radix(digits, 16).ok();
    let doubled = |index: usize| {
        let digit = &hex[index..=index];
        byte(&digit.repeat(2))
    };
    match hex.len() {
        3 | 4 => {
            let a = if hex.len() == 4 {
                f64::from(doubled(3)?) / 255.0
            } else {
                1.0
            };
            Some(Rgba::rgb(doubled(0)?, doubled(1)?, doubled(2)?).with_alpha(a))
        }
        6 | 8 => {
            let a = if hex.len() == 8 {
                f64::from(byte(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Rgba::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?).with_alpha(a))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitter_drops_function_name_and_separators() {
        let numbers =
            numbers_from_string("rgba(51 170 51 / 40%)", &RGB_SPLITTER, &RGB_RANGE, RGB_UNITS)
                .unwrap();
        assert_eq!(numbers, vec![51.0, 170.0, 51.0, 0.4]);
    }

    #[test]
    fn component_count_is_checked() {
        assert!(parse_rgb("rgb(1, 2)").is_none());
        assert!(parse_rgb("rgb(1, 2, 3, 4, 5)").is_none());
    }

    #[test]
    fn hex_lengths() {
        assert_eq!(parse_hex("f09"), Some(Rgba::rgb(255, 0, 153)));
        assert_eq!(parse_hex("ff0099"), Some(Rgba::rgb(255, 0, 153)));
        assert!(parse_hex("ff00").is_some());
        assert!(parse_hex("ff009").is_none());
    }
}
