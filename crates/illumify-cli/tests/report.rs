//! Tests for the data behind command output.

use chrono::NaiveTime;
use illumify_cli::report::{FilterOutput, describe_color, filter_output, site_report};
use illumify_model::{
    CustomSiteTheme, FilterConfig, FilterMode, Hsv, TabInfo, ThemeEngine, UserSettings,
};

#[test]
fn color_report_for_named_color() {
    let report = describe_color("DodgerBlue").unwrap();
    assert_eq!(report.rgb, "rgb(30, 144, 255)");
    assert_eq!(report.hex, "#1e90ff");
    assert_eq!(report.nearest.display_name, "Light Blue");
    assert_eq!(report.distance, 0);
    assert_eq!(report.hsv, Hsv::new(210.0, 0.88, 1.0));
    assert_eq!(report.bucket, "cyan");
}

#[test]
fn color_report_for_translucent_color() {
    let report = describe_color("rgba(255, 0, 153, 0.5)").unwrap();
    assert_eq!(report.rgb, "rgba(255, 0, 153, 0.5)");
    assert_eq!(report.hex, "#ff009980");
    assert_eq!(report.hsl, "hsla(324, 100%, 50%, 0.5)");
}

#[test]
fn color_report_rejects_garbage() {
    let error = describe_color("not a color").unwrap_err();
    assert_eq!(error.to_string(), "Unable to parse not a color");
}

#[test]
fn filter_output_follows_engine() {
    let css = FilterConfig::default();
    assert_eq!(
        filter_output(&css),
        FilterOutput::Css(Some("invert(100%) hue-rotate(180deg)".to_string()))
    );

    let svg = FilterConfig {
        engine: ThemeEngine::SvgFilter,
        ..FilterConfig::default().with_mode(FilterMode::Light)
    };
    let FilterOutput::Svg(values) = filter_output(&svg) else {
        panic!("expected an SVG matrix");
    };
    assert_eq!(values.lines().count(), 4);

    let generated = FilterConfig {
        engine: ThemeEngine::DynamicTheme,
        ..FilterConfig::default()
    };
    insta::assert_debug_snapshot!(filter_output(&generated), @r##"
    Generated {
        background: "#15161e",
        text: "#ece9df",
    }
    "##);
}

#[test]
fn site_report_combines_rules() {
    let settings = UserSettings {
        site_list: vec!["example.com".to_string()],
        custom_themes: vec![CustomSiteTheme {
            url: vec!["docs.rs".to_string()],
            theme: FilterConfig {
                sepia: 30,
                ..FilterConfig::default()
            },
        }],
        ..UserSettings::default()
    };
    let evening = NaiveTime::from_hms_opt(20, 15, 0).unwrap();

    let docs = site_report(&settings, &TabInfo::new("https://docs.rs/tracing"), evening).unwrap();
    assert_eq!(docs.host.as_deref(), Some("docs.rs"));
    assert!(docs.host_is_valid_pattern);
    assert!(docs.enabled);
    assert!(docs.custom_theme);
    assert!(docs.in_schedule);
    assert_eq!(docs.theme.sepia, 30);

    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let listed = site_report(&settings, &TabInfo::new("https://example.com/a"), noon).unwrap();
    assert!(!listed.enabled);
    assert!(!listed.custom_theme);
    assert!(!listed.in_schedule);
    assert_eq!(listed.theme, settings.theme);
}

#[test]
fn site_report_respects_global_switch() {
    let settings = UserSettings {
        enabled: false,
        ..UserSettings::default()
    };
    let time = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    let report = site_report(&settings, &TabInfo::new("https://rust-lang.org/"), time).unwrap();
    assert!(!report.enabled);
    assert!(!report.toggle_has_effect);
}

#[test]
fn site_report_surfaces_bad_schedule() {
    let settings = UserSettings {
        activation_time: "dusk".to_string(),
        ..UserSettings::default()
    };
    let time = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    assert!(site_report(&settings, &TabInfo::new("https://rust-lang.org/"), time).is_err());
}
