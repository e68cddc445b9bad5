//! Whole-document composition.

use super::{
    head::render_head,
    nav::render_nav,
    runtime::runtime_script,
    sections::render_section,
    writer::{
        HtmlWriter, blank_element, create_writer, element, finish, text_element, write_doctype,
        write_raw,
    },
};
use crate::{config::SiteConfig, content::SiteMetadata, interact::Page};
use anyhow::Result;
use chrono::Datelike;

pub const TOAST_ID: &str = "toast";

/// Render `page` in its current state to a complete HTML document.
pub fn render_page(page: &Page, config: &SiteConfig) -> Result<String> {
    let resume = page.resume();
    let meta = SiteMetadata::from_resume(resume);
    let nav = page.nav();

    let mut writer = create_writer();
    write_doctype(&mut writer)?;

    element(&mut writer, "html", &[("lang", config.base.language.as_str())], |w| {
        render_head(w, &meta, config.base.url.as_deref())?;

        element(w, "body", &[], |w| {
            render_nav(w, nav, &resume.personal.initials())?;

            element(w, "main", &[], |w| {
                nav.order()
                    .iter()
                    .try_for_each(|&section| render_section(w, section, resume))
            })?;

            let year = chrono::Local::now().year();
            element(w, "footer", &[("class", "footer")], |w| {
                text_element(w, "p", &[], &copyright(config, &resume.personal.name, year))
            })?;

            toast_host(w, page.toast_message())?;

            let script = runtime_script(nav.order());
            element(w, "script", &[], |w| write_raw(w, &script))
        })
    })?;

    finish(writer)
}

/// `[base].copyright`, or `© <year> <name>`.
fn copyright(config: &SiteConfig, name: &str, year: i32) -> String {
    config
        .base
        .copyright
        .clone()
        .unwrap_or_else(|| format!("© {year} {name}"))
}

/// Live region announcing the toast. Present but hidden while empty.
fn toast_host(writer: &mut HtmlWriter, message: Option<&str>) -> Result<()> {
    let base = [
        ("id", TOAST_ID),
        ("class", "toast"),
        ("role", "status"),
        ("aria-live", "polite"),
    ];
    match message {
        Some(message) => text_element(writer, "div", &base, message),
        None => {
            let mut attrs = base.to_vec();
            attrs.push(("hidden", ""));
            blank_element(writer, "div", &attrs)
        }
    }
}
