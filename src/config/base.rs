//! `[base]` section configuration.
//!
//! Site-wide settings that are not part of the resume content itself.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in vitae.toml.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://alice.dev"
/// language = "en"
/// copyright = "© 2025 Alice"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Public URL of the site, used for the sitemap.
    /// Required when `[build.sitemap].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code written to `<html lang>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Footer copyright line. Falls back to `© <year> <name>`.
    #[serde(default)]
    pub copyright: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            url = "https://alice.dev"
            language = "en-US"
            copyright = "© 2025 Alice"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.url, Some("https://alice.dev".to_string()));
        assert_eq!(config.base.language, "en-US");
        assert_eq!(config.base.copyright.as_deref(), Some("© 2025 Alice"));
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();

        assert_eq!(config.base.url, None);
        assert_eq!(config.base.language, "en");
        assert_eq!(config.base.copyright, None);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "sites have no title here, the resume name is used"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
