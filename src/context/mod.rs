//! Hand-off of the loaded site metadata to its consumers.

use std::sync::Arc;

use crate::{ConfigurationProvider, Error, SiteConfiguration};

/// Read-only site metadata shared with the parts of a build that need it.
///
/// The record is loaded once and passed explicitly; cloning the context
/// only bumps a reference count.
///
/// ## Example
///
/// ```no_run
/// use site_config::{BuildContext, ConfigurationProvider};
///
/// let ctx = BuildContext::builder()
///     .with_site(ConfigurationProvider::from_cwd(".").load()?)
///     .build()?;
///
/// let site = ctx.site();
/// println!("<title>{}</title>", site.site_title());
/// # Ok::<(), site_config::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BuildContext {
    site: Arc<SiteConfiguration>,
}

impl BuildContext {
    /// Creates a new builder for constructing a `BuildContext`.
    pub fn builder() -> BuildContextBuilder {
        BuildContextBuilder { site: None }
    }

    /// Loads the provider's site and wraps it in a context.
    pub fn load(provider: &ConfigurationProvider) -> Result<Self, Error> {
        Self::builder().with_site(provider.load()?).build()
    }

    pub fn site(&self) -> &SiteConfiguration {
        &self.site
    }
}

/// Builder for constructing a [`BuildContext`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct BuildContextBuilder {
    site: Option<Arc<SiteConfiguration>>,
}

impl BuildContextBuilder {
    /// Attaches the site metadata.
    pub fn with_site(mut self, site: impl Into<Arc<SiteConfiguration>>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Builds the `BuildContext`.
    ///
    /// Returns an error if no site was provided.
    pub fn build(self) -> Result<BuildContext, Error> {
        Ok(BuildContext {
            site: self.site.ok_or(Error::MissingSite)?,
        })
    }
}
