//! Which theme applies where, and whether it applies at all.

use illumify_model::{CustomSiteTheme, FilterConfig, TabInfo, UserSettings};
use tracing::debug;

use crate::url::{get_url_host, is_url_in_list};

/// Custom theme configured for `url`, if any. The first matching entry wins.
pub fn custom_theme_for<'a>(settings: &'a UserSettings, url: &str) -> Option<&'a CustomSiteTheme> {
    settings
        .custom_themes
        .iter()
        .find(|custom| is_url_in_list(url, &custom.url))
}

/// Theme in effect for `url`: its custom theme, else the global one.
pub fn active_theme<'a>(settings: &'a UserSettings, url: &str) -> &'a FilterConfig {
    custom_theme_for(settings, url).map_or(&settings.theme, |custom| &custom.theme)
}

/// Whether the extension should act on `url` in `tab`.
///
/// Protected pages are never touched. With `apply_to_listed_only` only the
/// site list is enabled; otherwise the site list and the built-in dark list
/// are both excluded.
pub fn is_url_enabled(url: &str, settings: &UserSettings, tab: &TabInfo) -> bool {
    if tab.is_protected {
        return false;
    }
    let in_site_list = is_url_in_list(url, &settings.site_list);
    if settings.apply_to_listed_only {
        return in_site_list;
    }
    !tab.is_in_dark_list && !in_site_list
}

/// Whether toggling the current site in the site list changes anything.
pub fn site_toggle_has_effect(settings: &UserSettings, tab: &TabInfo) -> bool {
    settings.enabled && !tab.is_protected && (settings.apply_to_listed_only || !tab.is_in_dark_list)
}

/// Add a custom theme for the host of `url` (a copy of the global theme), or
/// remove every custom theme matching `url`. Returns `true` when a theme was
/// added.
pub fn toggle_custom_theme(settings: &mut UserSettings, url: &str) -> bool {
    if custom_theme_for(settings, url).is_some() {
        settings
            .custom_themes
            .retain(|custom| !is_url_in_list(url, &custom.url));
        debug!(url, "removed custom theme");
        return false;
    }
    let Some(host) = get_url_host(url) else {
        debug!(url, "no host to attach a custom theme to");
        return false;
    };
    settings.custom_themes.push(CustomSiteTheme {
        url: vec![host.to_string()],
        theme: settings.theme.clone(),
    });
    debug!(url, host, "added custom theme");
    true
}
