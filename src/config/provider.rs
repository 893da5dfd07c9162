use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::file::{find_project_file, FileSource};
use super::source::{merge, EmbeddedSource, LiteralSource, SiteSource};
use super::ConfigError;
use crate::site::{validate, RawSite, SiteConfiguration, Strictness};

/// File name looked up by [`ConfigurationProvider::from_cwd`].
pub const SITE_FILE: &str = "site.toml";

/// Supplies a validated [`SiteConfiguration`].
///
/// Sources are merged in registration order, later sources overriding
/// earlier ones key by key. The merged record is then validated: the
/// required fields (`siteTitle`, `siteUrl`, `pathPrefix`) must be present,
/// and every other field is defaulted when absent.
///
/// ## Example
///
/// ```no_run
/// use site_config::ConfigurationProvider;
///
/// let provider = ConfigurationProvider::builder()
///     .with_file("site.toml", true)
///     .with_file("site.local.toml", false)
///     .build();
///
/// let site = provider.load()?;
/// println!("{} <{}>", site.site_title(), site.site_url());
/// # Ok::<(), site_config::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ConfigurationProvider {
    sources: Vec<Box<dyn SiteSource>>,
    strictness: Strictness,
    cached: OnceLock<SiteConfiguration>,
}

impl ConfigurationProvider {
    /// Creates a new provider builder.
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// A provider for the site definition compiled into the crate.
    pub fn embedded() -> Self {
        Self::builder().with_embedded().build()
    }

    /// A provider for a single, required TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::builder().with_file(path, true).build()
    }

    /// Looks for `site.toml` in `cwd` and its ancestors.
    ///
    /// Falls back to the embedded site definition when no file is found.
    pub fn from_cwd(cwd: impl Into<PathBuf>) -> Self {
        match find_project_file(cwd, SITE_FILE) {
            Some(path) => Self::from_file(path),
            None => {
                log::warn!("No {SITE_FILE} file found, using the embedded site config.");
                Self::embedded()
            }
        }
    }

    /// Reads every source, merges them, and validates the result.
    ///
    /// Each call re-reads the sources; see [`shared`](Self::shared) for a
    /// memoized variant.
    pub fn load(&self) -> Result<SiteConfiguration, ConfigError> {
        let mut merged = toml::Table::new();
        for source in &self.sources {
            if let Some(table) = source.table()? {
                log::trace!("Merging {} key(s) from {}", table.len(), source.origin());
                merge(&mut merged, table);
            }
        }

        let raw = RawSite::from_table(merged)?;
        validate(raw, self.strictness)
    }

    /// Loads once and hands out the cached record afterwards.
    ///
    /// A failed load is not cached, so a later call tries again.
    pub fn shared(&self) -> Result<&SiteConfiguration, ConfigError> {
        if let Some(site) = self.cached.get() {
            return Ok(site);
        }
        let site = self.load()?;
        Ok(self.cached.get_or_init(|| site))
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }
}

/// Builder for [`ConfigurationProvider`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ProviderBuilder {
    sources: Vec<Box<dyn SiteSource>>,
    strictness: Strictness,
}

impl ProviderBuilder {
    /// Adds the site definition compiled into the crate.
    pub fn with_embedded(self) -> Self {
        self.with_source(EmbeddedSource)
    }

    /// Adds a TOML file.
    ///
    /// If `required` is `true`, loading fails when the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds a TOML literal. `name` identifies it in errors.
    pub fn with_str(self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.with_source(LiteralSource::new(name, contents))
    }

    pub fn with_source(mut self, source: impl SiteSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Fail on invalid optional values instead of substituting defaults.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strictness = if strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        };
        self
    }

    pub fn build(self) -> ConfigurationProvider {
        ConfigurationProvider {
            sources: self.sources,
            strictness: self.strictness,
            cached: OnceLock::new(),
        }
    }
}
