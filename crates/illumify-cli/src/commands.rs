use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info, info_span, warn};

use illumify_cli::report::{describe_color, filter_output, site_report};
use illumify_color::{
    ColorModifier, apply_color_matrix, correction_matrix, hsv_bucket, nearest_palette_entry,
    parse, rgb_to_hex_string, rgb_to_hsv,
};
use illumify_model::{
    ColorCorrectionType, ColorblindnessType, FilterConfig, Rgba, TabInfo, UserSettings,
};
use illumify_sites::{UrlMatcher, active_theme, parse_time};

use crate::cli::{
    CorrectArgs, FilterArgs, MatchArgs, ModifyArgs, NameArgs, ParseArgs, SettingsArgs, SiteArgs,
};
use crate::summary::{
    print_color_report, print_filter_output, print_match_table, print_matrix, print_site_report,
};

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let report = describe_color(&args.color)?;
    print_color_report(&args.color, &report);
    Ok(())
}

pub fn run_name(args: &NameArgs) -> Result<()> {
    let rgb = [args.red, args.green, args.blue];
    let found = nearest_palette_entry(rgb);
    debug!(
        x11_name = found.entry.x11_name,
        distance = found.distance,
        "nearest palette entry"
    );
    if args.hsv {
        let hsv = rgb_to_hsv(Rgba::from(rgb));
        println!("{} ({})", found.entry.display_name, hsv_bucket(hsv));
    } else {
        println!("{}", found.entry.display_name);
    }
    Ok(())
}

pub fn run_modify(args: &ModifyArgs) -> Result<()> {
    let span = info_span!("modify", color = %args.color);
    let _guard = span.enter();
    let color = parse(&args.color)?;
    let settings = load_settings(&args.settings)?;
    let mut theme = theme_for(&settings, &args.settings);
    if let Some(mode) = args.mode {
        theme = theme.with_mode(mode.into());
    }
    let mut modifier = ColorModifier::new();
    let modified = modifier.modify(args.role.into(), color, &theme);
    info!(%modified, "color modified");
    println!("{modified}");
    Ok(())
}

pub fn run_correct(args: &CorrectArgs) -> Result<()> {
    let color = parse(&args.color)?;
    let kind: ColorblindnessType = args.kind.into();
    let mut method: ColorCorrectionType = args.method.into();
    if !kind.supports(method) {
        warn!(
            colorblindness = %kind,
            method = %method,
            "unsupported correction method, using LMS daltonization"
        );
        method = ColorCorrectionType::LmsDaltonization;
    }
    let matrix = correction_matrix(kind, method, args.sensitivity);
    let [r, g, b] = apply_color_matrix(color.to_bytes(), &matrix);
    let corrected = Rgba::rgb(r, g, b).with_alpha(color.a);
    println!(
        "{} -> {} ({kind}, {method})",
        rgb_to_hex_string(color),
        rgb_to_hex_string(corrected)
    );
    print_matrix(&matrix);
    Ok(())
}

pub fn run_filter(args: &FilterArgs) -> Result<()> {
    let settings = load_settings(&args.settings)?;
    let theme = theme_for(&settings, &args.settings);
    print_filter_output(&theme, &filter_output(&theme));
    Ok(())
}

/// Returns whether any template matched.
pub fn run_match(args: &MatchArgs) -> Result<bool> {
    let matcher = UrlMatcher::new(&args.templates);
    let matched: Vec<&str> = matcher.matching(&args.url).collect();
    let results: Vec<(String, bool)> = args
        .templates
        .iter()
        .map(|template| (template.clone(), matched.contains(&template.as_str())))
        .collect();
    print_match_table(&args.url, &results);
    Ok(!matched.is_empty())
}

pub fn run_site(args: &SiteArgs) -> Result<()> {
    let span = info_span!("site", url = %args.url);
    let _guard = span.enter();
    let settings = UserSettings::load_or_default(args.settings.as_deref())
        .context("load settings")?;
    let time = match &args.time {
        Some(value) => parse_time(value).context("read --time")?,
        None => Local::now().time(),
    };
    let tab = TabInfo {
        is_protected: args.protected,
        is_in_dark_list: args.dark_listed,
        ..TabInfo::new(args.url.as_str())
    };
    let report = site_report(&settings, &tab, time).context("check schedule")?;
    print_site_report(&report);
    Ok(())
}

fn load_settings(args: &SettingsArgs) -> Result<UserSettings> {
    UserSettings::load_or_default(args.settings.as_deref()).context("load settings")
}

fn theme_for(settings: &UserSettings, args: &SettingsArgs) -> FilterConfig {
    match &args.url {
        Some(url) => active_theme(settings, url).clone(),
        None => settings.theme.clone(),
    }
}
