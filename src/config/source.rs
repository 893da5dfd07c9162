use toml::Table;

use super::ConfigError;

/// The site definition compiled into the crate.
pub const EMBEDDED_SITE: &str = include_str!("../../config/site.toml");

/// One layer of raw site keys.
///
/// `Ok(None)` means the source has nothing to contribute (an optional file
/// that does not exist, for instance).
pub trait SiteSource: Send + Sync + std::fmt::Debug {
    /// Human-readable origin used in logs and error messages.
    fn origin(&self) -> String;

    fn table(&self) -> Result<Option<Table>, ConfigError>;
}

/// The built-in site literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl SiteSource for EmbeddedSource {
    fn origin(&self) -> String {
        "<embedded>".to_string()
    }

    fn table(&self) -> Result<Option<Table>, ConfigError> {
        parse_table(&self.origin(), EMBEDDED_SITE).map(Some)
    }
}

/// A TOML literal held in memory.
#[derive(Debug, Clone)]
pub struct LiteralSource {
    name: String,
    contents: String,
}

impl LiteralSource {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

impl SiteSource for LiteralSource {
    fn origin(&self) -> String {
        self.name.clone()
    }

    fn table(&self) -> Result<Option<Table>, ConfigError> {
        parse_table(&self.name, &self.contents).map(Some)
    }
}

pub(crate) fn parse_table(origin: &str, contents: &str) -> Result<Table, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::ParseError {
        origin: origin.to_string(),
        source: e,
    })
}

/// Overlays `overlay` onto `base`. The record is flat, so a later key
/// simply replaces an earlier one.
pub fn merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}
