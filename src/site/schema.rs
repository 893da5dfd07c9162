/// The site record as it appears in a source, before validation.
///
/// Every field is optional here; validation decides which
/// ones are required and fills in defaults for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RawSite {
    pub path_prefix: Option<String>,
    pub site_title: Option<String>,
    pub site_title_alt: Option<String>,
    pub site_title_manifest: Option<String>,
    pub site_url: Option<String>,
    pub site_language: Option<String>,
    pub site_headline: Option<String>,
    pub site_banner: Option<String>,
    pub favicon: Option<String>,
    pub site_description: Option<String>,
    pub author: Option<String>,
    pub site_logo: Option<String>,
    pub og_language: Option<String>,
    #[serde(rename = "googleAnalyticsID")]
    pub google_analytics_id: Option<String>,
    pub theme_color: Option<String>,
    pub background_color: Option<String>,
}

impl RawSite {
    pub fn from_table(table: toml::Table) -> Result<Self, toml::de::Error> {
        toml::Value::Table(table).try_into()
    }
}
