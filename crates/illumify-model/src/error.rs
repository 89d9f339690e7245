use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported settings file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: u8 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
