//! Site rules: URL templates, per-site themes, enablement and schedule.

pub mod error;
pub mod schedule;
pub mod theme;
pub mod url;

pub use error::{Result, SiteError};
pub use schedule::{is_in_time_interval, parse_time};
pub use theme::{
    active_theme, custom_theme_for, is_url_enabled, site_toggle_has_effect, toggle_custom_theme,
};
pub use url::{
    UrlMatcher, create_url_regex, get_url_host, is_site_pattern_valid, is_url_in_list,
    is_url_matched,
};
