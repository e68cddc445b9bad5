//! Helpers for reading rendered markup back in tests.

use super::writer::{HtmlWriter, create_writer, finish};
use anyhow::Result;
use boa_engine::{Context, Source};
use quick_xml::escape::unescape;

/// Document, window, timers and clipboard stand-ins for the runtime.
const FAKE_DOM: &str = include_str!("fake_dom.js");

pub fn render_with(f: impl FnOnce(&mut HtmlWriter) -> Result<()>) -> String {
    let mut writer = create_writer();
    f(&mut writer).unwrap();
    finish(writer).unwrap()
}

/// Visible text of every `open ... close` span, in document order.
pub fn inner_texts(html: &str, open: &str, close: &str) -> Vec<String> {
    let mut texts = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(open) {
        rest = &rest[start + open.len()..];
        let end = rest.find(close).unwrap();
        texts.push(unescape(&rest[..end]).unwrap().into_owned());
        rest = &rest[end + close.len()..];
    }
    texts
}

/// Markup from `id="<id>"` up to the next `</section>`.
pub fn slice_by_id<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!(r#"id="{id}""#);
    let start = html.find(&marker).unwrap();
    let rest = &html[start..];
    let end = rest.find("</section>").unwrap_or(rest.len());
    &rest[..end]
}

/// Evaluate `script` against the fake DOM, then `scenario`. Returns the
/// scenario's completion value as a string.
pub fn run_in_fake_dom(script: &str, scenario: &str) -> String {
    let mut context = Context::default();
    let mut result = String::new();
    for source in [FAKE_DOM, script, scenario] {
        let value = context
            .eval(Source::from_bytes(source))
            .unwrap_or_else(|e| panic!("script failed: {e:?}"));
        result = value.to_string(&mut context).unwrap().to_std_string_escaped();
    }
    result
}
