//! Thin helpers over `quick_xml::Writer` for emitting HTML.
//!
//! Text and attribute values go through quick-xml's escaping. Only the
//! embedded stylesheet and runtime script are written verbatim.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Attribute list in document order.
pub type Attrs<'a> = &'a [(&'a str, &'a str)];

pub fn create_writer() -> HtmlWriter {
    Writer::new(Cursor::new(Vec::with_capacity(32 * 1024)))
}

/// Consume the writer and return the document as a string.
pub fn finish(writer: HtmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn start_elem<'a>(tag: &'a str, attrs: Attrs<'_>) -> BytesStart<'a> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    elem
}

/// Write `<tag attrs>`.
#[inline]
pub fn open(writer: &mut HtmlWriter, tag: &str, attrs: Attrs<'_>) -> Result<()> {
    writer.write_event(Event::Start(start_elem(tag, attrs)))?;
    Ok(())
}

/// Write `</tag>`.
#[inline]
pub fn close(writer: &mut HtmlWriter, tag: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write `<tag attrs>...</tag>`, filling the body with `inner`.
pub fn element<F>(writer: &mut HtmlWriter, tag: &str, attrs: Attrs<'_>, inner: F) -> Result<()>
where
    F: FnOnce(&mut HtmlWriter) -> Result<()>,
{
    open(writer, tag, attrs)?;
    inner(writer)?;
    close(writer, tag)
}

/// Write a text element: `<tag attrs>text</tag>`.
#[inline]
pub fn text_element(
    writer: &mut HtmlWriter,
    tag: &str,
    attrs: Attrs<'_>,
    text: &str,
) -> Result<()> {
    open(writer, tag, attrs)?;
    write_text(writer, text)?;
    close(writer, tag)
}

/// Write an element with no content that still needs a closing tag,
/// e.g. `<span class="dot"></span>`.
#[inline]
pub fn blank_element(writer: &mut HtmlWriter, tag: &str, attrs: Attrs<'_>) -> Result<()> {
    open(writer, tag, attrs)?;
    close(writer, tag)
}

/// Write a void element: `<meta ... />`. Only for HTML void elements and
/// SVG children.
#[inline]
pub fn void_element(writer: &mut HtmlWriter, tag: &str, attrs: Attrs<'_>) -> Result<()> {
    writer.write_event(Event::Empty(start_elem(tag, attrs)))?;
    Ok(())
}

#[inline]
pub fn write_text(writer: &mut HtmlWriter, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(())
}

/// Write pre-escaped content verbatim (stylesheets, scripts).
#[inline]
pub fn write_raw(writer: &mut HtmlWriter, raw: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::from_escaped(raw)))?;
    Ok(())
}

pub fn write_doctype(writer: &mut HtmlWriter) -> Result<()> {
    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut HtmlWriter) -> Result<()>) -> String {
        let mut writer = create_writer();
        f(&mut writer).unwrap();
        finish(writer).unwrap()
    }

    #[test]
    fn test_text_element_escapes() {
        let html = render(|w| text_element(w, "p", &[("class", "a")], "R&D <team>"));
        assert_eq!(html, r#"<p class="a">R&amp;D &lt;team&gt;</p>"#);
    }

    #[test]
    fn test_attribute_escapes() {
        let html = render(|w| blank_element(w, "a", &[("title", r#"say "hi""#)]));
        assert_eq!(html, r#"<a title="say &quot;hi&quot;"></a>"#);
    }

    #[test]
    fn test_blank_element_keeps_closing_tag() {
        let html = render(|w| blank_element(w, "div", &[("id", "toast")]));
        assert_eq!(html, r#"<div id="toast"></div>"#);
    }

    #[test]
    fn test_void_element() {
        let html = render(|w| void_element(w, "meta", &[("charset", "utf-8")]));
        assert_eq!(html, r#"<meta charset="utf-8"/>"#);
    }

    #[test]
    fn test_nested_element() {
        let html = render(|w| {
            element(w, "ul", &[], |w| {
                text_element(w, "li", &[], "one")?;
                text_element(w, "li", &[], "two")
            })
        });
        assert_eq!(html, "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let html = render(|w| element(w, "script", &[], |w| write_raw(w, "a && b < c")));
        assert_eq!(html, "<script>a && b < c</script>");
    }

    #[test]
    fn test_doctype() {
        assert_eq!(render(write_doctype), "<!DOCTYPE html>");
    }
}
