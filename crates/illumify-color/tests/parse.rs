//! Tests for CSS color parsing.

use illumify_color::{ColorError, parse};
use illumify_model::Rgba;

fn rgba(r: f64, g: f64, b: f64, a: f64) -> Rgba {
    Rgba::new(r, g, b, a)
}

#[test]
fn parses_rgb_notation() {
    assert_eq!(parse("rgb(255,0,153)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(255, 0, 153)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(100%,0%,60%)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(100%, 0%, 60%)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(255 0 153)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(255, 0, 153, 1)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(255, 0, 153, 100%)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(255 0 153 / 1)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(255 0 153 / 100%)").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("rgb(255, 0, 153.6, 1)").unwrap(), rgba(255.0, 0.0, 154.0, 1.0));
    assert_eq!(parse("rgb(1e2, .5e1, .5e0, +.25e2%)").unwrap(), rgba(100.0, 5.0, 1.0, 0.25));
}

#[test]
fn parses_rgba_notation() {
    assert_eq!(parse("rgba(51, 170, 51, .1)").unwrap(), rgba(51.0, 170.0, 51.0, 0.1));
    assert_eq!(parse("rgba(51, 170, 51, .4)").unwrap(), rgba(51.0, 170.0, 51.0, 0.4));
    assert_eq!(parse("rgba(51, 170, 51, .7)").unwrap(), rgba(51.0, 170.0, 51.0, 0.7));
    assert_eq!(parse("rgba(51, 170, 51, 1)").unwrap(), rgba(51.0, 170.0, 51.0, 1.0));
    assert_eq!(parse("rgba(51 170 51 / 0.4)").unwrap(), rgba(51.0, 170.0, 51.0, 0.4));
    assert_eq!(parse("rgba(51 170 51 / 40%)").unwrap(), rgba(51.0, 170.0, 51.0, 0.4));
    assert_eq!(parse("rgba(255, 0, 153.6, 1)").unwrap(), rgba(255.0, 0.0, 154.0, 1.0));
    assert_eq!(parse("rgba(1e2, .5e1, .5e0, +.25e2%)").unwrap(), rgba(100.0, 5.0, 1.0, 0.25));
}

#[test]
fn parses_hsl_notation() {
    assert_eq!(parse("hsl(270,60%,70%)").unwrap(), rgba(179.0, 133.0, 224.0, 1.0));
    assert_eq!(parse("hsl(270, 60%, 70%)").unwrap(), rgba(179.0, 133.0, 224.0, 1.0));
    assert_eq!(parse("hsl(270 60% 70%)").unwrap(), rgba(179.0, 133.0, 224.0, 1.0));
    assert_eq!(parse("hsl(270deg, 60%, 70%)").unwrap(), rgba(179.0, 133.0, 224.0, 1.0));
    assert_eq!(parse("hsl(4.71239rad, 60%, 70%)").unwrap(), rgba(179.0, 133.0, 224.0, 1.0));
    assert_eq!(parse("hsl(.75turn, 60%, 70%)").unwrap(), rgba(179.0, 133.0, 224.0, 1.0));
    assert_eq!(parse("hsl(270, 60%, 50%, .15)").unwrap(), rgba(128.0, 51.0, 204.0, 0.15));
    assert_eq!(parse("hsl(270, 60%, 50%, 15%)").unwrap(), rgba(128.0, 51.0, 204.0, 0.15));
    assert_eq!(parse("hsl(270 60% 50% / .15)").unwrap(), rgba(128.0, 51.0, 204.0, 0.15));
    assert_eq!(parse("hsl(270 60% 50% / 15%)").unwrap(), rgba(128.0, 51.0, 204.0, 0.15));
}

#[test]
fn parses_hsla_notation() {
    assert_eq!(parse("hsla(240, 100%, 50%, .05)").unwrap(), rgba(0.0, 0.0, 255.0, 0.05));
    assert_eq!(parse("hsla(240, 100%, 50%, .4)").unwrap(), rgba(0.0, 0.0, 255.0, 0.4));
    assert_eq!(parse("hsla(240, 100%, 50%, .7)").unwrap(), rgba(0.0, 0.0, 255.0, 0.7));
    assert_eq!(parse("hsla(240, 100%, 50%, 1)").unwrap(), rgba(0.0, 0.0, 255.0, 1.0));
    assert_eq!(parse("hsla(240 100% 50% / .05)").unwrap(), rgba(0.0, 0.0, 255.0, 0.05));
    assert_eq!(parse("hsla(240 100% 50% / 5%)").unwrap(), rgba(0.0, 0.0, 255.0, 0.05));
}

#[test]
fn parses_hex_notation() {
    assert_eq!(parse("#f09").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("#F09").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("#ff0099").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("#FF0099").unwrap(), rgba(255.0, 0.0, 153.0, 1.0));
    assert_eq!(parse("#3a30").unwrap(), rgba(51.0, 170.0, 51.0, 0.0));
    assert_eq!(parse("#3A3F").unwrap(), rgba(51.0, 170.0, 51.0, 1.0));
    assert_eq!(parse("#33aa3300").unwrap(), rgba(51.0, 170.0, 51.0, 0.0));
    assert_eq!(parse("#33AA3388").unwrap(), rgba(51.0, 170.0, 51.0, 136.0 / 255.0));
}

#[test]
fn parses_keywords() {
    assert_eq!(parse("rebeccapurple").unwrap(), rgba(102.0, 51.0, 153.0, 1.0));
    assert_eq!(parse("transparent").unwrap(), rgba(0.0, 0.0, 0.0, 0.0));
    assert_eq!(parse("InfoBackground").unwrap(), rgba(251.0, 252.0, 197.0, 1.0));
    assert_eq!(parse("-webkit-focus-ring-color").unwrap(), rgba(229.0, 151.0, 0.0, 1.0));
}

#[test]
fn rejects_unknown_input_with_message() {
    assert_eq!(parse("sponge").unwrap_err().to_string(), "Unable to parse sponge");
    assert_eq!(parse("hsl(0, 0%, 0%) rgb(0, 0, 0)").unwrap_err().to_string(), "Unable to parse hsl(0, 0%, 0%) rgb(0, 0, 0)");
    assert_eq!(parse("#hello").unwrap_err().to_string(), "Unable to parse #hello");
}
#[test]
fn error_keeps_original_input() {
    assert_eq!(
        parse("  Sponge "),
        Err(ColorError::Parse("  Sponge ".to_string()))
    );
}

#[test]
fn ignores_case_and_surrounding_whitespace() {
    assert_eq!(parse("  RebeccaPurple\n").unwrap(), Rgba::rgb(102, 51, 153));
    assert_eq!(parse("RGB(255, 0, 153)").unwrap(), Rgba::rgb(255, 0, 153));
}

#[test]
fn rejects_wrong_component_counts_and_hex_lengths() {
    assert!(parse("rgb(1, 2)").is_err());
    assert!(parse("hsl(1, 2%, 3%, 4, 5)").is_err());
    assert!(parse("#12345").is_err());
    assert!(parse("rgb(nan, 0, 0)").is_err());
}
