//! Tests for illumify-model types.

use std::fs;
use std::path::PathBuf;

use illumify_model::{
    ColorCorrectionType, ColorblindnessType, FilterConfig, FilterMode, ModelError, ThemeEngine,
    UserSettings,
};

fn unique_temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "illumify-{}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        name
    ));
    path
}

const EXPORTED_SETTINGS: &str = r#"{
    "enabled": true,
    "theme": {
        "mode": 1,
        "brightness": 110,
        "contrast": 90,
        "grayscale": 20,
        "sepia": 10,
        "useFont": false,
        "fontFamily": "Segoe UI",
        "textStroke": 0,
        "textScale": 100,
        "useColorCorrection": false,
        "colorblindnessType": 0,
        "colorCorrectionType": 0,
        "unclickedColor": "0000FF",
        "clickedColor": "551A8B",
        "engine": "cssFilter",
        "stylesheet": ""
    },
    "customThemes": [],
    "siteList": [],
    "applyToListedOnly": false,
    "changeBrowserTheme": false,
    "activationTime": "18:00",
    "deactivationTime": "9:00",
    "notifyOfNews": false,
    "syncSettings": true
}"#;

#[test]
fn exported_settings_deserialize() {
    let settings: UserSettings = serde_json::from_str(EXPORTED_SETTINGS).expect("parse settings");
    assert!(settings.enabled);
    assert_eq!(settings.theme.mode, FilterMode::Dark);
    assert_eq!(settings.theme.brightness, 110);
    assert_eq!(settings.theme.contrast, 90);
    assert_eq!(settings.theme.grayscale, 20);
    assert_eq!(settings.theme.sepia, 10);
    assert_eq!(settings.theme.font_family, "Segoe UI");
    assert_eq!(settings.theme.engine, ThemeEngine::CssFilter);
    // Missing in the export, so defaulted.
    assert!((settings.theme.colorblindness_sensitivity - 1.0).abs() < f64::EPSILON);
    assert_eq!(settings.deactivation_time, "9:00");
}

#[test]
fn partial_settings_take_defaults() {
    let settings: UserSettings =
        serde_json::from_str(r#"{"siteList": ["google.*"], "theme": {"mode": 0}}"#)
            .expect("parse settings");
    assert_eq!(settings.site_list, vec!["google.*".to_string()]);
    assert_eq!(settings.theme.mode, FilterMode::Light);
    assert_eq!(settings.theme.brightness, 100);
    assert_eq!(settings.activation_time, "18:00");
}

#[test]
fn numeric_enums_round_trip_as_integers() {
    let theme = FilterConfig {
        colorblindness_type: ColorblindnessType::Tritanopia,
        color_correction_type: ColorCorrectionType::Shift,
        ..FilterConfig::default()
    };
    let json = serde_json::to_value(&theme).expect("serialize theme");
    assert_eq!(json["mode"], 1);
    assert_eq!(json["colorblindnessType"], 2);
    assert_eq!(json["colorCorrectionType"], 3);
    assert_eq!(json["engine"], "cssFilter");
}

#[test]
fn unknown_enum_id_is_rejected() {
    let error = serde_json::from_str::<FilterConfig>(r#"{"colorCorrectionType": 1}"#)
        .expect_err("reserved correction id");
    assert!(error.to_string().contains("invalid color correction type value: 1"));
    assert!(serde_json::from_str::<FilterConfig>(r#"{"mode": 2}"#).is_err());
}

#[test]
fn supported_corrections_follow_deficiency() {
    assert!(ColorblindnessType::Tritanopia.supports(ColorCorrectionType::Shift));
    assert!(!ColorblindnessType::Protanopia.supports(ColorCorrectionType::Shift));
    for kind in ColorblindnessType::ALL {
        assert_eq!(
            kind.supported_corrections()[0],
            ColorCorrectionType::LmsDaltonization
        );
    }
}

#[test]
fn cache_key_ignores_non_color_fields() {
    let base = FilterConfig::default();
    let restyled = FilterConfig {
        font_family: "serif".to_string(),
        link_color: true,
        engine: ThemeEngine::SvgFilter,
        ..FilterConfig::default()
    };
    assert_eq!(base.cache_key(), restyled.cache_key());
    assert_ne!(base.cache_key(), base.with_mode(FilterMode::Light).cache_key());
    insta::assert_snapshot!(base.cache_key(), @"mode:1;brightness:100;contrast:100;grayscale:0;sepia:0;useColorCorrection:false;colorblindnessType:0;colorblindnessSensitivity:1;colorCorrectionType:0");
}

#[test]
fn load_reads_json_and_toml() {
    let json_path = unique_temp_file("settings.json");
    fs::write(&json_path, EXPORTED_SETTINGS).unwrap();
    let from_json = UserSettings::load(&json_path).expect("load json");
    assert_eq!(from_json.theme.brightness, 110);

    let toml_path = unique_temp_file("settings.toml");
    fs::write(
        &toml_path,
        r#"
applyToListedOnly = true
siteList = ["example.com", "google.*"]

[theme]
mode = 0
sepia = 15

[[customThemes]]
url = ["docs.rs"]

[customThemes.theme]
contrast = 120
"#,
    )
    .unwrap();
    let from_toml = UserSettings::load(&toml_path).expect("load toml");
    assert!(from_toml.apply_to_listed_only);
    assert_eq!(from_toml.site_list.len(), 2);
    assert_eq!(from_toml.theme.mode, FilterMode::Light);
    assert_eq!(from_toml.theme.sepia, 15);
    assert_eq!(from_toml.custom_themes[0].theme.contrast, 120);

    fs::remove_file(json_path).ok();
    fs::remove_file(toml_path).ok();
}

#[test]
fn load_rejects_unknown_extension() {
    let path = unique_temp_file("settings.yaml");
    fs::write(&path, "enabled: true").unwrap();
    let error = UserSettings::load(&path).expect_err("yaml is not supported");
    assert!(matches!(error, ModelError::UnsupportedFormat { .. }));
    fs::remove_file(path).ok();
}

#[test]
fn load_or_default_without_path() {
    let settings = UserSettings::load_or_default(None).expect("defaults");
    assert_eq!(settings, UserSettings::default());
}
