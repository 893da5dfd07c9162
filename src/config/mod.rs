//! Loading site metadata from its sources.

mod error;
mod file;
mod provider;
mod source;

pub use error::ConfigError;
pub use file::FileSource;
pub use provider::{ConfigurationProvider, ProviderBuilder, SITE_FILE};
pub use source::{EmbeddedSource, LiteralSource, SiteSource, EMBEDDED_SITE};
