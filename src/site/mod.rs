//! The validated site metadata record.

mod color;
pub mod defaults;
mod schema;
mod validate;

use std::fmt;

pub use color::{HexColor, InvalidColor};
pub use schema::RawSite;
pub use validate::{validate, Strictness};

/// Site metadata handed to the site generator.
///
/// Only produced by [`validate`], so every instance upholds the record's
/// invariants: colors are `#RRGGBB`, `site_url` is absolute with no trailing
/// slash, `path_prefix` starts with `/`, and asset paths carry no scheme.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfiguration {
    path_prefix: String,
    site_title: String,
    site_title_alt: String,
    site_title_manifest: String,
    site_url: String,
    site_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    site_headline: Option<String>,
    site_banner: String,
    favicon: String,
    site_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    site_logo: String,
    og_language: String,
    #[serde(rename = "googleAnalyticsID", skip_serializing_if = "Option::is_none")]
    google_analytics_id: Option<String>,
    theme_color: HexColor,
    background_color: HexColor,
}

impl SiteConfiguration {
    /// Every key a site record may carry, in declaration order.
    pub const KEYS: [&'static str; 16] = [
        "pathPrefix",
        "siteTitle",
        "siteTitleAlt",
        "siteTitleManifest",
        "siteUrl",
        "siteLanguage",
        "siteHeadline",
        "siteBanner",
        "favicon",
        "siteDescription",
        "author",
        "siteLogo",
        "ogLanguage",
        "googleAnalyticsID",
        "themeColor",
        "backgroundColor",
    ];

    /// Looks a field up by its key.
    ///
    /// Returns `None` for unknown keys and for optional fields that are unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "pathPrefix" => &self.path_prefix,
            "siteTitle" => &self.site_title,
            "siteTitleAlt" => &self.site_title_alt,
            "siteTitleManifest" => &self.site_title_manifest,
            "siteUrl" => &self.site_url,
            "siteLanguage" => &self.site_language,
            "siteHeadline" => return self.site_headline.as_deref(),
            "siteBanner" => &self.site_banner,
            "favicon" => &self.favicon,
            "siteDescription" => &self.site_description,
            "author" => return self.author.as_deref(),
            "siteLogo" => &self.site_logo,
            "ogLanguage" => &self.og_language,
            "googleAnalyticsID" => return self.google_analytics_id.as_deref(),
            "themeColor" => return Some(self.theme_color.as_str()),
            "backgroundColor" => return Some(self.background_color.as_str()),
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Set fields as `(key, value)` pairs, in [`KEYS`](Self::KEYS) order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::KEYS
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    /// The address all site links live under: `site_url` plus `path_prefix`.
    pub fn base_url(&self) -> String {
        if self.path_prefix == "/" {
            self.site_url.clone()
        } else {
            format!("{}{}", self.site_url, self.path_prefix)
        }
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    /// Alternative title for SEO.
    pub fn site_title_alt(&self) -> &str {
        &self.site_title_alt
    }

    /// Short name for the web app manifest.
    pub fn site_title_manifest(&self) -> &str {
        &self.site_title_manifest
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Language tag for the `<html>` element.
    pub fn site_language(&self) -> &str {
        &self.site_language
    }

    pub fn site_headline(&self) -> Option<&str> {
        self.site_headline.as_deref()
    }

    /// Image used for the `og:image` tag.
    pub fn site_banner(&self) -> &str {
        &self.site_banner
    }

    pub fn favicon(&self) -> &str {
        &self.favicon
    }

    pub fn site_description(&self) -> &str {
        &self.site_description
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn site_logo(&self) -> &str {
        &self.site_logo
    }

    /// Open Graph locale, e.g. `en_US`.
    pub fn og_language(&self) -> &str {
        &self.og_language
    }

    pub fn google_analytics_id(&self) -> Option<&str> {
        self.google_analytics_id.as_deref()
    }

    pub fn theme_color(&self) -> &HexColor {
        &self.theme_color
    }

    pub fn background_color(&self) -> &HexColor {
        &self.background_color
    }
}

impl fmt::Display for SiteConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = toml::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(extra: &str) -> SiteConfiguration {
        let source = format!(
            "siteTitle = \"Stuck Dev\"\nsiteUrl = \"https://stuck.dev\"\npathPrefix = \"/\"\n{extra}"
        );
        let table: toml::Table = toml::from_str(&source).unwrap();
        validate(RawSite::from_table(table).unwrap(), Strictness::Lenient).unwrap()
    }

    #[test]
    fn test_get_by_key() {
        let site = site("author = \"Drew Royster\"");
        assert_eq!(site.get("siteTitle"), Some("Stuck Dev"));
        assert_eq!(site.get("author"), Some("Drew Royster"));
        assert_eq!(site.get("themeColor"), Some(defaults::THEME_COLOR));
        assert_eq!(site.get("siteHeadline"), None);
        assert_eq!(site.get("nonsense"), None);
    }

    #[test]
    fn test_every_key_is_known() {
        let site = site(
            r#"
            siteHeadline = "Devs helping devs"
            author = "Drew Royster"
            googleAnalyticsID = "UA-47519312-6"
            "#,
        );
        let keys: Vec<_> = site.fields().map(|(key, _)| key).collect();
        assert_eq!(keys, SiteConfiguration::KEYS);
    }

    #[test]
    fn test_fields_skip_unset_optionals() {
        let site = site("");
        assert!(site.fields().all(|(key, _)| key != "author"));
        assert_eq!(site.fields().count(), SiteConfiguration::KEYS.len() - 3);
    }

    #[test]
    fn test_base_url() {
        assert_eq!(site("").base_url(), "https://stuck.dev");

        let source = "siteTitle = \"Folio\"\nsiteUrl = \"https://example.com\"\npathPrefix = \"/portfolio\"";
        let table: toml::Table = toml::from_str(source).unwrap();
        let site = validate(RawSite::from_table(table).unwrap(), Strictness::Lenient).unwrap();
        assert_eq!(site.base_url(), "https://example.com/portfolio");
    }

    #[test]
    fn test_display_renders_camel_case_toml() {
        let rendered = site("googleAnalyticsID = \"UA-47519312-6\"").to_string();
        let table: toml::Table = toml::from_str(&rendered).unwrap();
        assert_eq!(table["siteTitleAlt"].as_str(), Some("Stuck Dev"));
        assert_eq!(table["googleAnalyticsID"].as_str(), Some("UA-47519312-6"));
        assert_eq!(table["backgroundColor"].as_str(), Some(defaults::BACKGROUND_COLOR));
        assert!(!table.contains_key("author"));
    }
}
