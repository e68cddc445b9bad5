//! `<head>`: document metadata, social preview tags and the stylesheet.

use super::{
    runtime::STYLESHEET,
    writer::{HtmlWriter, element, text_element, void_element, write_raw},
};
use crate::content::SiteMetadata;
use anyhow::Result;

pub fn render_head(
    writer: &mut HtmlWriter,
    meta: &SiteMetadata,
    site_url: Option<&str>,
) -> Result<()> {
    element(writer, "head", &[], |w| {
        void_element(w, "meta", &[("charset", "utf-8")])?;
        void_element(
            w,
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
        )?;
        text_element(w, "title", &[], &meta.title)?;

        let keywords = meta.keywords_content();
        for (name, content) in [
            ("description", meta.description.as_str()),
            ("keywords", keywords.as_str()),
            ("author", meta.author.as_str()),
            ("creator", meta.creator.as_str()),
        ] {
            void_element(w, "meta", &[("name", name), ("content", content)])?;
        }

        let og = &meta.open_graph;
        for (property, content) in [
            ("og:title", og.title.as_str()),
            ("og:description", og.description.as_str()),
            ("og:type", og.kind.as_str()),
            ("og:locale", og.locale.as_str()),
        ] {
            void_element(w, "meta", &[("property", property), ("content", content)])?;
        }

        if let Some(url) = site_url {
            void_element(w, "meta", &[("property", "og:url"), ("content", url)])?;
            void_element(w, "link", &[("rel", "canonical"), ("href", url)])?;
        }

        element(w, "style", &[], |w| write_raw(w, STYLESHEET))
    })
}
