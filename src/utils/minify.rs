//! Output minification, switched by `[build].minify`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Content kinds written to the output directory.
pub enum Output<'a> {
    /// `index.html`, including its inline stylesheet and script
    Page(&'a [u8]),
    /// `sitemap.xml`
    Sitemap(&'a [u8]),
}

/// Minify `content` when enabled in config.
///
/// Returns `Cow::Borrowed` if minify is disabled.
pub fn minify<'a>(content: Output<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    match (config.build.minify, content) {
        (false, Output::Page(bytes) | Output::Sitemap(bytes)) => Cow::Borrowed(bytes),
        (true, Output::Page(html)) => Cow::Owned(minify_page(html)),
        (true, Output::Sitemap(xml)) => Cow::Owned(collapse_lines(xml)),
    }
}

fn minify_page(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}

/// Trim every line and join them. Enough for generated XML, where
/// whitespace only ever sits between tags.
fn collapse_lines(xml: &[u8]) -> Vec<u8> {
    String::from_utf8_lossy(xml)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>()
        .into_bytes()
}
