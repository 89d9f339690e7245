use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not a color this crate understands. Carries the input as given.
    #[error("Unable to parse {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
