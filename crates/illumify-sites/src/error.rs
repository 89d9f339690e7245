use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("URL template is empty")]
    EmptyTemplate,
    #[error("URL template {template:?} does not compile: {source}")]
    Template {
        template: String,
        #[source]
        source: regex::Error,
    },
    /// Expected `H:MM`.
    #[error("invalid time of day: {0:?}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
