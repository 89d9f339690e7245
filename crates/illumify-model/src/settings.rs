//! User settings and their on-disk form.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::theme::FilterConfig;

/// Theme override for a set of URL templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSiteTheme {
    pub url: Vec<String>,
    #[serde(default)]
    pub theme: FilterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub enabled: bool,
    pub theme: FilterConfig,
    pub custom_themes: Vec<CustomSiteTheme>,
    /// URL templates; inverted or exclusive depending on `apply_to_listed_only`.
    pub site_list: Vec<String>,
    pub apply_to_listed_only: bool,
    pub change_browser_theme: bool,
    /// `H:MM`, start of the automatic activation window.
    pub activation_time: String,
    /// `H:MM`, end of the automatic activation window.
    pub deactivation_time: String,
    pub notify_of_news: bool,
    pub sync_settings: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            theme: FilterConfig::default(),
            custom_themes: Vec::new(),
            site_list: Vec::new(),
            apply_to_listed_only: false,
            change_browser_theme: false,
            activation_time: "18:00".to_string(),
            deactivation_time: "9:00".to_string(),
            notify_of_news: false,
            sync_settings: true,
        }
    }
}

impl UserSettings {
    /// Remove `pattern` from the site list if present, otherwise append it.
    ///
    /// Returns `true` when the pattern is in the list afterwards.
    pub fn toggle_site_pattern(&mut self, pattern: &str) -> bool {
        if let Some(index) = self.site_list.iter().position(|p| p == pattern) {
            self.site_list.remove(index);
            false
        } else {
            self.site_list.push(pattern.to_string());
            true
        }
    }

    /// Load settings from a `.json` or `.toml` file. Missing keys take
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let settings = match extension.as_deref() {
            Some("json") => serde_json::from_str(&text)?,
            Some("toml") => toml::from_str(&text)?,
            _ => {
                return Err(ModelError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load from `path` when given, otherwise return defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// What is known about the tab a theme is being resolved for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabInfo {
    pub url: String,
    /// Browser-internal pages that cannot be styled.
    pub is_protected: bool,
    pub is_in_dark_list: bool,
}

impl TabInfo {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}
