use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the site-config library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("site configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("build context requires a site configuration")]
    MissingSite,
}
