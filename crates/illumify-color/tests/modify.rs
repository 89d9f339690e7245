//! Tests for theme filters and per-role color modification.

use illumify_color::{ColorModifier, Role, css_filter_value};
use illumify_model::{FilterConfig, FilterMode, Rgba};

fn dark() -> FilterConfig {
    FilterConfig::default()
}

fn light() -> FilterConfig {
    FilterConfig::default().with_mode(FilterMode::Light)
}

#[test]
fn background_colors_are_darkened() {
    let mut modifier = ColorModifier::new();
    let filter = dark();
    assert_eq!(modifier.background(Rgba::rgb(255, 255, 255), &filter), "#15161e");
    assert_eq!(modifier.background(Rgba::rgb(0, 0, 0), &filter), "#000000");
    assert_eq!(modifier.background(Rgba::rgb(255, 0, 0), &filter), "#cc0000");
}

#[test]
fn translucent_results_use_rgba_notation() {
    let mut modifier = ColorModifier::new();
    let white = Rgba::rgb(255, 255, 255).with_alpha(0.5);
    assert_eq!(modifier.background(white, &dark()), "rgba(21, 22, 30, 0.5)");
}

#[test]
fn foreground_colors_are_lightened() {
    let mut modifier = ColorModifier::new();
    let filter = dark();
    assert_eq!(modifier.foreground(Rgba::rgb(0, 0, 0), &filter), "#ece9df");
    assert_eq!(modifier.foreground(Rgba::rgb(255, 255, 255), &filter), "#ffffff");
}

#[test]
fn border_colors_land_mid_range() {
    let mut modifier = ColorModifier::new();
    assert_eq!(modifier.border(Rgba::rgb(128, 128, 128), &dark()), "#4c4c4c");
}

#[test]
fn light_mode_uses_one_rule_for_all_roles() {
    let mut modifier = ColorModifier::new();
    let filter = light();
    for role in Role::ALL {
        assert_eq!(
            modifier.modify(role, Rgba::rgb(255, 255, 255), &filter),
            "#eae7e1",
            "{role}"
        );
        assert_eq!(modifier.modify(role, Rgba::rgb(0, 0, 0), &filter), "#000000");
    }
    assert_eq!(modifier.cached_len(), 2);
}

#[test]
fn theme_filters_apply_after_adjustment() {
    let mut modifier = ColorModifier::new();
    let filter = FilterConfig {
        brightness: 50,
        ..dark()
    };
    assert_eq!(modifier.background(Rgba::rgb(255, 255, 255), &filter), "#0b0b0f");
}

#[test]
fn cache_is_keyed_by_filter_settings() {
    let mut modifier = ColorModifier::new();
    let white = Rgba::rgb(255, 255, 255);
    modifier.background(white, &dark());
    modifier.background(white, &dark());
    assert_eq!(modifier.cached_len(), 1);

    let dimmed = FilterConfig {
        brightness: 50,
        ..dark()
    };
    modifier.background(white, &dimmed);
    assert_eq!(modifier.cached_len(), 2);

    // Fields outside the key do not create new entries.
    let with_font = FilterConfig {
        use_font: true,
        ..dark()
    };
    modifier.background(white, &with_font);
    assert_eq!(modifier.cached_len(), 2);
}

#[test]
fn css_filter_lists_active_functions() {
    assert_eq!(
        css_filter_value(&dark()).as_deref(),
        Some("invert(100%) hue-rotate(180deg)")
    );
    let config = FilterConfig {
        brightness: 110,
        contrast: 90,
        grayscale: 20,
        sepia: 10,
        ..dark()
    };
    insta::assert_snapshot!(
        css_filter_value(&config).unwrap_or_default(),
        @"invert(100%) hue-rotate(180deg) brightness(110%) contrast(90%) grayscale(20%) sepia(10%)"
    );
    assert_eq!(css_filter_value(&light()), None);
}
