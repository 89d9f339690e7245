//! CLI argument definitions for `illumify`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use illumify_color::Role;
use illumify_model::{ColorCorrectionType, ColorblindnessType, FilterMode};

#[derive(Parser)]
#[command(
    name = "illumify",
    version,
    about = "Illumify - page color filters, colorblindness correction and site rules",
    long_about = "Inspect how Illumify themes transform page colors.\n\n\
                  Parses CSS colors, names them, applies dark-theme color modification\n\
                  and colorblindness correction, and resolves per-site settings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a CSS color and show it in every notation.
    Parse(ParseArgs),

    /// Name an RGB color.
    Name(NameArgs),

    /// Show what the active theme turns a page color into.
    Modify(ModifyArgs),

    /// Apply colorblindness correction to a color.
    Correct(CorrectArgs),

    /// Print the CSS filter or SVG matrix for the active theme.
    Filter(FilterArgs),

    /// Check a URL against site templates (exit code 1 when none match).
    Match(MatchArgs),

    /// Report how the settings apply to a page.
    Site(SiteArgs),
}

/// Where to read settings from and which page they are resolved for.
#[derive(Parser)]
pub struct SettingsArgs {
    /// Settings file (.json or .toml). Defaults apply when omitted.
    #[arg(long = "settings", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Page URL used to pick a per-site theme.
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Any CSS color: rgb(), hsl(), #hex, a name or a system color.
    #[arg(value_name = "COLOR")]
    pub color: String,
}

#[derive(Parser)]
pub struct NameArgs {
    pub red: u8,
    pub green: u8,
    pub blue: u8,

    /// Also print the coarse HSV bucket.
    #[arg(long = "hsv")]
    pub hsv: bool,
}

#[derive(Parser)]
pub struct ModifyArgs {
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// What the color is used for on the page.
    #[arg(long = "role", value_enum, default_value = "background")]
    pub role: RoleArg,

    /// Override the theme mode.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Parser)]
pub struct CorrectArgs {
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Color vision deficiency to correct for.
    #[arg(long = "type", value_enum)]
    pub kind: ColorblindnessArg,

    /// Correction algorithm. Shift is only available for tritanopia.
    #[arg(long = "method", value_enum, default_value = "lms")]
    pub method: CorrectionMethodArg,

    /// Correction strength between 0 and 1.
    #[arg(long = "sensitivity", default_value_t = 1.0)]
    pub sensitivity: f64,
}

#[derive(Parser)]
pub struct FilterArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Parser)]
pub struct MatchArgs {
    #[arg(value_name = "URL")]
    pub url: String,

    /// Site templates such as `google.*` or `^example.com$`.
    #[arg(value_name = "TEMPLATE", required = true, num_args = 1..)]
    pub templates: Vec<String>,
}

#[derive(Parser)]
pub struct SiteArgs {
    #[arg(value_name = "URL")]
    pub url: String,

    /// Settings file (.json or .toml). Defaults apply when omitted.
    #[arg(long = "settings", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Time of day (H:MM) for the schedule check. Defaults to now.
    #[arg(long = "time", value_name = "H:MM")]
    pub time: Option<String>,

    /// Treat the page as a protected browser page.
    #[arg(long = "protected")]
    pub protected: bool,

    /// Treat the page as being on the built-in dark list.
    #[arg(long = "dark-listed")]
    pub dark_listed: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Background,
    Foreground,
    Border,
    Shadow,
    Gradient,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Background => Role::Background,
            RoleArg::Foreground => Role::Foreground,
            RoleArg::Border => Role::Border,
            RoleArg::Shadow => Role::Shadow,
            RoleArg::Gradient => Role::Gradient,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for FilterMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Light => FilterMode::Light,
            ModeArg::Dark => FilterMode::Dark,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorblindnessArg {
    Deuteranopia,
    Protanopia,
    Tritanopia,
}

impl From<ColorblindnessArg> for ColorblindnessType {
    fn from(value: ColorblindnessArg) -> Self {
        match value {
            ColorblindnessArg::Deuteranopia => ColorblindnessType::Deuteranopia,
            ColorblindnessArg::Protanopia => ColorblindnessType::Protanopia,
            ColorblindnessArg::Tritanopia => ColorblindnessType::Tritanopia,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CorrectionMethodArg {
    /// LMS daltonization.
    Lms,
    /// Shift the lost signal into the other channels only.
    Shift,
}

impl From<CorrectionMethodArg> for ColorCorrectionType {
    fn from(value: CorrectionMethodArg) -> Self {
        match value {
            CorrectionMethodArg::Lms => ColorCorrectionType::LmsDaltonization,
            CorrectionMethodArg::Shift => ColorCorrectionType::Shift,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
