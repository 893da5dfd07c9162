//! Values used for optional fields that are absent or invalid.

pub const SITE_LANGUAGE: &str = "en";
pub const OG_LANGUAGE: &str = "en_US";
pub const SITE_BANNER: &str = "/social/banner.jpg";
pub const FAVICON: &str = "src/favicon.png";
pub const SITE_LOGO: &str = "/social/logo.png";
pub const THEME_COLOR: &str = "#3498DB";
pub const BACKGROUND_COLOR: &str = "#2b2e3c";
