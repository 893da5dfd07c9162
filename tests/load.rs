use proptest::prelude::*;
use site_config::{ConfigError, ConfigurationProvider, SiteConfiguration};
use toml::{Table, Value};

fn provider_for(table: &Table) -> ConfigurationProvider {
    let contents = toml::to_string(table).expect("table serializes");
    ConfigurationProvider::builder()
        .with_str("generated", contents)
        .build()
}

fn required(title: &str, url: &str, prefix: &str) -> Table {
    let mut table = Table::new();
    table.insert("siteTitle".into(), Value::String(title.into()));
    table.insert("siteUrl".into(), Value::String(url.into()));
    table.insert("pathPrefix".into(), Value::String(prefix.into()));
    table
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn stuck_dev_with_only_required_fields() {
    let site = provider_for(&required("Stuck Dev", "https://stuck.dev", "/"))
        .load()
        .unwrap();

    assert_eq!(site.site_title_alt(), "Stuck Dev");
    assert_eq!(site.theme_color().as_str(), "#3498DB");
    assert_eq!(site.get("siteTitleAlt"), Some("Stuck Dev"));
}

#[test]
fn top_level_load_uses_embedded_site() {
    let site = site_config::load().unwrap();
    assert_eq!(site, ConfigurationProvider::embedded().load().unwrap());
    assert_eq!(site.base_url(), "https://stuck.dev");
}

#[test]
fn concurrent_loads_agree() {
    let provider = ConfigurationProvider::embedded();
    let sites: Vec<SiteConfiguration> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| provider.load().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(sites.windows(2).all(|pair| pair[0] == pair[1]));
}

fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}"
}

fn url_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}", prop_oneof!["dev", "com", "org"], 0usize..4)
        .prop_map(|(name, tld, slashes)| format!("https://{name}.{tld}{}", "/".repeat(slashes)))
}

fn color_input() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "#[0-9A-Fa-f]{6}".prop_map(Some),
        ".{0,10}".prop_map(Some),
    ]
}

proptest! {
    /// Property: loaded colors are always `#RRGGBB`, whatever the input held.
    #[test]
    fn prop_colors_are_hex(
        title in title_strategy(),
        url in url_strategy(),
        theme in color_input(),
        background in color_input(),
    ) {
        let mut table = required(&title, &url, "/");
        if let Some(theme) = theme {
            table.insert("themeColor".into(), Value::String(theme));
        }
        if let Some(background) = background {
            table.insert("backgroundColor".into(), Value::String(background));
        }

        let site = provider_for(&table).load().unwrap();
        prop_assert!(is_hex_color(site.theme_color().as_str()));
        prop_assert!(is_hex_color(site.background_color().as_str()));
    }

    /// Property: `siteUrl` never ends with a slash.
    #[test]
    fn prop_site_url_has_no_trailing_slash(title in title_strategy(), url in url_strategy()) {
        let site = provider_for(&required(&title, &url, "/")).load().unwrap();
        prop_assert!(!site.site_url().ends_with('/'));
        prop_assert_eq!(site.site_url(), url.trim_end_matches('/'));
    }

    /// Property: a record without `siteTitle` is rejected, naming the field.
    #[test]
    fn prop_missing_title_is_reported(url in url_strategy(), alt in title_strategy()) {
        let mut table = required("unused", &url, "/");
        table.remove("siteTitle");
        table.insert("siteTitleAlt".into(), Value::String(alt));

        let result = provider_for(&table).load();
        prop_assert!(matches!(result, Err(ConfigError::MissingField("siteTitle"))));
    }

    /// Property: alternative titles default to the site title.
    #[test]
    fn prop_alt_title_defaults_to_title(title in title_strategy(), url in url_strategy()) {
        let site = provider_for(&required(&title, &url, "/")).load().unwrap();
        prop_assert_eq!(site.site_title_alt(), site.site_title());
        prop_assert_eq!(site.site_title_manifest(), site.site_title());
    }

    /// Property: loading twice yields equal records.
    #[test]
    fn prop_load_is_idempotent(title in title_strategy(), url in url_strategy(), prefix in "/[a-z]{0,8}") {
        let provider = provider_for(&required(&title, &url, &prefix));
        prop_assert_eq!(provider.load().unwrap(), provider.load().unwrap());
    }
}
