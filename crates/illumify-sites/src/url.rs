//! URL templates.
//!
//! A template is a host with optional path, such as `google.*`,
//! `mail.example.com/inbox` or `^example.com$`. Without anchors it also
//! matches subdomains and deeper paths; a leading `^` requires the host to
//! start the URL and a trailing `$` forbids anything after the path except a
//! query. A host label written as `*` matches any single label.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Result, SiteError};

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*?/{2,3}").expect("Invalid scheme regex"));
static QUERY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?.*$").expect("Invalid query regex"));
static URL_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?:/{2,3})?(.+?)(/|$)").expect("Invalid host regex"));
static SITE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^.\s]+?\.?)+$").expect("Invalid site pattern regex"));

const WILDCARD_LABEL: &str = r"[^./]+?";

/// Build the regex source for `template`.
fn url_regex_source(template: &str) -> Result<String> {
    let template = template.trim();
    if template.is_empty() {
        return Err(SiteError::EmptyTemplate);
    }
    let exact_beginning = template.starts_with('^');
    let exact_ending = template.ends_with('$');

    let mut rest = template.strip_prefix('^').unwrap_or(template);
    rest = rest.strip_suffix('$').unwrap_or(rest);
    let rest = SCHEME.replace(rest, "");
    let rest = QUERY.replace(&rest, "");
    let rest: &str = &rest;
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    let (host, path) = match rest.find('/') {
        Some(slash) => (&rest[..slash], Some(&rest[slash..])),
        None => (rest, None),
    };
    let host = host.replacen('$', "", 1);

    let mut source = String::from("(?i)");
    source.push_str(if exact_beginning {
        r"^(.*?:/{2,3})?"
    } else {
        r"^(.*?:/{2,3})?([^/]*?\.)?"
    });

    let labels: Vec<String> = host
        .split('.')
        .map(|label| {
            if label == "*" {
                WILDCARD_LABEL.to_string()
            } else {
                regex::escape(label)
            }
        })
        .collect();
    source.push('(');
    source.push_str(&labels.join(r"\."));
    source.push(')');

    if let Some(path) = path.map(|path| path.replacen('$', "", 1)) {
        source.push('(');
        source.push_str(&regex::escape(&path));
        source.push(')');
    }

    source.push_str(if exact_ending {
        r"(/?(\?[^/]*?)?)$"
    } else {
        r"(/?.*?)$"
    });
    Ok(source)
}

/// Compile `template` into a case-insensitive URL regex.
pub fn create_url_regex(template: &str) -> Result<Regex> {
    let source = url_regex_source(template)?;
    Regex::new(&source).map_err(|source| SiteError::Template {
        template: template.to_string(),
        source,
    })
}

/// Whether `url` matches `template`. Templates that fail to compile match
/// nothing.
pub fn is_url_matched(url: &str, template: &str) -> bool {
    match create_url_regex(template) {
        Ok(regex) => regex.is_match(url),
        Err(SiteError::EmptyTemplate) => false,
        Err(error) => {
            warn!(%error, "ignoring URL template");
            false
        }
    }
}

/// Whether any template in `list` matches `url`.
pub fn is_url_in_list<S: AsRef<str>>(url: &str, list: &[S]) -> bool {
    list.iter().any(|template| is_url_matched(url, template.as_ref()))
}

/// Host part of `url` (with port, without scheme or path).
pub fn get_url_host(url: &str) -> Option<&str> {
    URL_HOST
        .captures(url)
        .and_then(|captures| captures.get(2))
        .map(|host| host.as_str())
}

/// Whether `value` looks like something worth adding to the site list:
/// dot-separated, no whitespace, no empty labels.
pub fn is_site_pattern_valid(value: &str) -> bool {
    SITE_PATTERN.is_match(value)
}

/// A list of templates compiled once, for checking many URLs.
#[derive(Debug, Clone, Default)]
pub struct UrlMatcher {
    entries: Vec<(String, Regex)>,
}

impl UrlMatcher {
    /// Compile every template. Broken ones are logged and skipped.
    pub fn new<S: AsRef<str>>(templates: &[S]) -> Self {
        let mut entries = Vec::with_capacity(templates.len());
        for template in templates {
            let template = template.as_ref();
            match create_url_regex(template) {
                Ok(regex) => entries.push((template.to_string(), regex)),
                Err(error) => warn!(%error, "skipping URL template"),
            }
        }
        debug!(compiled = entries.len(), total = templates.len(), "compiled URL templates");
        Self { entries }
    }

    pub fn is_match(&self, url: &str) -> bool {
        self.entries.iter().any(|(_, regex)| regex.is_match(url))
    }

    /// Templates that match `url`, in list order.
    pub fn matching<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, regex)| regex.is_match(url))
            .map(|(template, _)| template.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
