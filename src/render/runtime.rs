//! Browser runtime script, specialised with the interaction constants.

use crate::interact::{SCROLL_THRESHOLD, Section, TOAST_DURATION, TOAST_PREFIX};

const RUNTIME_TEMPLATE: &str = include_str!("../embed/page/runtime.js");

/// Inline stylesheet.
pub const STYLESHEET: &str = include_str!("../embed/page/style.css");

/// The runtime with section order, threshold and toast settings filled in.
pub fn runtime_script(order: &[Section]) -> String {
    let sections = order
        .iter()
        .map(|section| js_string(section.id()))
        .collect::<Vec<_>>()
        .join(", ");

    RUNTIME_TEMPLATE
        .replace("__SECTIONS__", &format!("[{sections}]"))
        .replace("__SCROLL_THRESHOLD__", &SCROLL_THRESHOLD.to_string())
        .replace("__TOAST_MS__", &TOAST_DURATION.as_millis().to_string())
        .replace("__TOAST_PREFIX__", &js_string(TOAST_PREFIX))
}

/// Double-quoted JS string literal. Line terminators are escaped, and so is
/// `<`, so the value can never close the surrounding `<script>`.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' => out.push_str("\\u003c"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
