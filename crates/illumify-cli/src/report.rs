//! Data behind each command's output, kept apart from printing so it can be
//! tested without a terminal.

use chrono::NaiveTime;
use illumify_color::{
    ColorModifier, PaletteEntry, Result as ColorResult, Role, css_filter_value, hsl_to_string,
    hsv_bucket, nearest_palette_entry, parse, rgb_to_hex_string, rgb_to_hsl, rgb_to_hsv,
    rgb_to_string, svg_filter_matrix_value,
};
use illumify_model::{FilterConfig, Hsv, Rgba, TabInfo, ThemeEngine, UserSettings};
use illumify_sites::{
    Result as SiteResult, active_theme, custom_theme_for, get_url_host, is_in_time_interval,
    is_site_pattern_valid, is_url_enabled, site_toggle_has_effect,
};

/// Everything `illumify parse` shows about one color.
#[derive(Debug, Clone)]
pub struct ColorReport {
    pub rgba: Rgba,
    pub rgb: String,
    pub hex: String,
    pub hsl: String,
    pub hsv: Hsv,
    pub nearest: &'static PaletteEntry,
    pub distance: u32,
    pub bucket: &'static str,
}

pub fn describe_color(input: &str) -> ColorResult<ColorReport> {
    let rgba = parse(input)?;
    let hsv = rgb_to_hsv(rgba);
    let found = nearest_palette_entry(rgba.to_bytes());
    Ok(ColorReport {
        rgba,
        rgb: rgb_to_string(rgba),
        hex: rgb_to_hex_string(rgba),
        hsl: hsl_to_string(rgb_to_hsl(rgba)),
        hsv,
        nearest: found.entry,
        distance: found.distance,
        bucket: hsv_bucket(hsv),
    })
}

/// How the active theme for a page is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutput {
    /// CSS `filter:` value; `None` when the theme changes nothing.
    Css(Option<String>),
    /// `feColorMatrix` values.
    Svg(String),
    /// Generated stylesheet: default page background and text after modification.
    Generated { background: String, text: String },
}

pub fn filter_output(theme: &FilterConfig) -> FilterOutput {
    match theme.engine {
        ThemeEngine::CssFilter => FilterOutput::Css(css_filter_value(theme)),
        ThemeEngine::SvgFilter => FilterOutput::Svg(svg_filter_matrix_value(theme)),
        ThemeEngine::StaticTheme | ThemeEngine::DynamicTheme => {
            let mut modifier = ColorModifier::new();
            FilterOutput::Generated {
                background: modifier.modify(Role::Background, Rgba::rgb(255, 255, 255), theme),
                text: modifier.modify(Role::Foreground, Rgba::rgb(0, 0, 0), theme),
            }
        }
    }
}

/// How the settings apply to one page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteReport {
    pub url: String,
    pub host: Option<String>,
    pub host_is_valid_pattern: bool,
    pub enabled: bool,
    pub toggle_has_effect: bool,
    pub custom_theme: bool,
    pub in_schedule: bool,
    pub theme: FilterConfig,
}

pub fn site_report(settings: &UserSettings, tab: &TabInfo, time: NaiveTime) -> SiteResult<SiteReport> {
    let url = tab.url.as_str();
    let host = get_url_host(url);
    Ok(SiteReport {
        url: url.to_string(),
        host: host.map(str::to_string),
        host_is_valid_pattern: host.is_some_and(is_site_pattern_valid),
        enabled: settings.enabled && is_url_enabled(url, settings, tab),
        toggle_has_effect: site_toggle_has_effect(settings, tab),
        custom_theme: custom_theme_for(settings, url).is_some(),
        in_schedule: is_in_time_interval(
            time,
            &settings.activation_time,
            &settings.deactivation_time,
        )?,
        theme: active_theme(settings, url).clone(),
    })
}
