pub mod config;
pub mod context;
mod error;
pub mod site;

pub use config::{ConfigError, ConfigurationProvider};
pub use context::BuildContext;
pub use error::Error;
pub use site::{HexColor, SiteConfiguration};

/// Loads the site definition compiled into the crate.
pub fn load() -> Result<SiteConfiguration, ConfigError> {
    ConfigurationProvider::embedded().load()
}
