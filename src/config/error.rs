use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required site config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read site config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse site config '{origin}': {source}")]
    ParseError {
        origin: String,
        source: toml::de::Error,
    },

    #[error("failed to deserialize site config: {0}")]
    DeserializeError(#[from] toml::de::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ConfigError {
    /// Returns the site field this error is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) | Self::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}
