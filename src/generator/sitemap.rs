//! Sitemap generation.
//!
//! The portfolio is a single document, so the sitemap lists exactly one URL:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://alice.dev/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    utils::minify::{Output, minify},
};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::fs;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Write `sitemap.xml` if enabled in config.
pub fn build_sitemap(config: &SiteConfig) -> Result<()> {
    if !config.build.sitemap.enable {
        return Ok(());
    }

    let Some(base_url) = config.base.url.as_deref() else {
        bail!("[base.url] is required for sitemap generation");
    };

    let today = chrono::Local::now().date_naive();
    let xml = sitemap_xml(&page_url(base_url), today);
    let xml = minify(Output::Sitemap(xml.as_bytes()), config);

    let path = config.sitemap_path();
    fs::write(&path, &*xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

/// The page's public URL: the base URL with a trailing slash.
fn page_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

fn sitemap_xml(loc: &str, lastmod: NaiveDate) -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", quick_xml::escape::escape(loc)));
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod.format("%Y-%m-%d")));
    xml.push_str("  </url>\n");
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_page_url_trailing_slash() {
        assert_eq!(page_url("https://alice.dev"), "https://alice.dev/");
        assert_eq!(page_url("https://alice.dev/"), "https://alice.dev/");
        assert_eq!(page_url("https://a.github.io/site//"), "https://a.github.io/site/");
    }

    #[test]
    fn test_xml_structure() {
        let xml = sitemap_xml("https://alice.dev/", date());
        let lines: Vec<&str> = xml.lines().collect();

        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://alice.dev/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert_eq!(lines.last().copied(), Some("</urlset>"));
    }

    #[test]
    fn test_loc_escaped() {
        let xml = sitemap_xml("https://alice.dev/?a=1&b=2", date());
        assert!(xml.contains("<loc>https://alice.dev/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        build_sitemap(&config).unwrap();
        assert!(!config.sitemap_path().exists());
    }

    #[test]
    fn test_enabled_writes_minified_file() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = true;
        config.base.url = Some("https://alice.dev".into());

        build_sitemap(&config).unwrap();

        let xml = fs::read_to_string(config.sitemap_path()).unwrap();
        assert!(xml.contains("<url><loc>https://alice.dev/</loc><lastmod>"));
        assert!(!xml.contains('\n'));
    }

    #[test]
    fn test_enabled_without_url_fails() {
        let mut config = SiteConfig::default();
        config.build.sitemap.enable = true;

        assert!(build_sitemap(&config).is_err());
    }
}
