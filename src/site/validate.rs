//! Turns a [`RawSite`] into a [`SiteConfiguration`].
//!
//! Required fields (`siteTitle`, `siteUrl`, `pathPrefix`) must be present and
//! non-blank. Optional fields fall back to the values in [`defaults`] when
//! absent. When an optional field is present but invalid, [`Strictness`]
//! decides between falling back with a warning and failing.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{defaults, HexColor, RawSite, SiteConfiguration};
use crate::config::ConfigError;

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").expect("valid language tag pattern")
});

static OG_LOCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}_[A-Z]{2}$").expect("valid locale pattern"));

static ANALYTICS_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UA-[0-9]+-[0-9]+$").expect("valid analytics id pattern"));

/// How to treat optional fields that are present but invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Log a warning and use the default.
    #[default]
    Lenient,
    /// Fail with [`ConfigError::InvalidField`].
    Strict,
}

impl Strictness {
    fn degrade<T>(self, field: &'static str, reason: String, default: T) -> Result<T, ConfigError> {
        match self {
            Self::Strict => Err(ConfigError::InvalidField { field, reason }),
            Self::Lenient => {
                log::warn!("Ignoring invalid `{field}`: {reason}");
                Ok(default)
            }
        }
    }
}

/// Validates a raw record, filling in defaults.
pub fn validate(raw: RawSite, strictness: Strictness) -> Result<SiteConfiguration, ConfigError> {
    let site_title = required("siteTitle", raw.site_title)?;
    let site_url = site_url(required("siteUrl", raw.site_url)?)?;
    let path_prefix = path_prefix(required("pathPrefix", raw.path_prefix)?, strictness)?;

    let site_title_alt = non_blank(raw.site_title_alt).unwrap_or_else(|| site_title.clone());
    let site_title_manifest =
        non_blank(raw.site_title_manifest).unwrap_or_else(|| site_title.clone());

    let site_language = checked(
        "siteLanguage",
        raw.site_language,
        defaults::SITE_LANGUAGE,
        strictness,
        |tag| LANGUAGE_TAG.is_match(tag),
        "not a language tag",
    )?;
    let og_language = checked(
        "ogLanguage",
        raw.og_language,
        defaults::OG_LANGUAGE,
        strictness,
        |locale| OG_LOCALE.is_match(locale),
        "not a locale of the form ll_CC",
    )?;

    let site_banner = asset_path("siteBanner", raw.site_banner, defaults::SITE_BANNER, strictness)?;
    let favicon = asset_path("favicon", raw.favicon, defaults::FAVICON, strictness)?;
    let site_logo = asset_path("siteLogo", raw.site_logo, defaults::SITE_LOGO, strictness)?;

    let google_analytics_id = match non_blank(raw.google_analytics_id) {
        Some(id) if !ANALYTICS_ID.is_match(&id) => strictness.degrade(
            "googleAnalyticsID",
            format!("'{id}' is not of the form UA-XXXXXXX-X"),
            None,
        )?,
        id => id,
    };

    let theme_color = color("themeColor", raw.theme_color, defaults::THEME_COLOR, strictness)?;
    let background_color = color(
        "backgroundColor",
        raw.background_color,
        defaults::BACKGROUND_COLOR,
        strictness,
    )?;

    Ok(SiteConfiguration {
        path_prefix,
        site_title,
        site_title_alt,
        site_title_manifest,
        site_url,
        site_language,
        site_headline: non_blank(raw.site_headline),
        site_banner,
        favicon,
        site_description: raw
            .site_description
            .map(|d| d.trim().to_string())
            .unwrap_or_default(),
        author: non_blank(raw.author),
        site_logo,
        og_language,
        google_analytics_id,
        theme_color,
        background_color,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    non_blank(value).ok_or(ConfigError::MissingField(field))
}

/// Whether `value` points at another host. A bare `word:rest` with no
/// authority, such as `img:v2.png`, is still treated as a path.
fn has_scheme(value: &str) -> bool {
    value.starts_with("//") || Url::parse(value).is_ok_and(|url| url.has_host())
}

fn site_url(value: String) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidField {
        field: "siteUrl",
        reason,
    };

    let trimmed = value.trim_end_matches('/');
    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid(format!(
            "{value:?} contains whitespace or control characters"
        )));
    }
    let url = Url::parse(trimmed).map_err(|e| invalid(format!("'{value}': {e}")))?;
    if url.cannot_be_a_base() || !url.has_host() {
        return Err(invalid(format!("'{value}' is not an absolute URL with a host")));
    }
    Ok(trimmed.to_string())
}

fn path_prefix(value: String, strictness: Strictness) -> Result<String, ConfigError> {
    if has_scheme(&value) {
        return Err(ConfigError::InvalidField {
            field: "pathPrefix",
            reason: format!("'{value}' must be a path, not a URL"),
        });
    }

    let value = if value.starts_with('/') {
        value
    } else {
        let fixed = format!("/{value}");
        strictness.degrade(
            "pathPrefix",
            format!("'{value}' does not start with '/', using '{fixed}'"),
            fixed,
        )?
    };

    let trimmed = value.trim_end_matches('/');
    Ok(if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    })
}

fn checked(
    field: &'static str,
    value: Option<String>,
    default: &str,
    strictness: Strictness,
    is_valid: impl Fn(&str) -> bool,
    expected: &str,
) -> Result<String, ConfigError> {
    match non_blank(value) {
        None => Ok(default.to_string()),
        Some(v) if is_valid(&v) => Ok(v),
        Some(v) => strictness.degrade(field, format!("'{v}' is {expected}"), default.to_string()),
    }
}

fn asset_path(
    field: &'static str,
    value: Option<String>,
    default: &str,
    strictness: Strictness,
) -> Result<String, ConfigError> {
    checked(
        field,
        value,
        default,
        strictness,
        |path| !has_scheme(path),
        "a URL, expected a relative path",
    )
}

fn color(
    field: &'static str,
    value: Option<String>,
    default: &str,
    strictness: Strictness,
) -> Result<HexColor, ConfigError> {
    let default_color = || {
        default.parse::<HexColor>().map_err(|e| ConfigError::InvalidField {
            field,
            reason: e.to_string(),
        })
    };
    match non_blank(value) {
        None => default_color(),
        Some(v) => match v.parse::<HexColor>() {
            Ok(color) => Ok(color),
            Err(e) => strictness.degrade(field, e.to_string(), default_color()?),
        },
    }
}
