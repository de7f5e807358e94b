//! HTML serialisation.
//!
//! Output is deterministic: `class` first, then attributes in sorted
//! order. Node keys are never written.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::element::{Content, Element};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const SVG_SHAPES: &[&str] = &[
    "path", "circle", "ellipse", "line", "polygon", "polyline", "rect",
];

/// Tags that support the native `disabled` attribute.
const FORM_CONTROLS: &[&str] = &[
    "button", "input", "select", "textarea", "fieldset", "optgroup", "option",
];

/// Serialise an element tree to HTML.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Whether `disabled` is a native attribute of this tag.
pub fn supports_disabled(tag: &str) -> bool {
    FORM_CONTROLS.contains(&tag)
}

fn write_element(element: &Element, out: &mut String) {
    if element.is_text() {
        if let Content::Text(text) = &element.content {
            out.push_str(&escape_text(text));
        }
        return;
    }

    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.to_string());
    }
    for (name, value) in attributes(element) {
        write_attr(out, name, &value);
    }

    if VOID_ELEMENTS.contains(&tag) {
        out.push('>');
        return;
    }
    if SVG_SHAPES.contains(&tag) && element.content.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }
    let _ = write!(out, "</{tag}>");
}

/// Attributes to serialise, including those derived from element state.
fn attributes(element: &Element) -> BTreeMap<&str, Cow<'_, str>> {
    let mut attrs: BTreeMap<&str, Cow<'_, str>> = element
        .attrs
        .iter()
        .filter(|(name, _)| name.as_str() != "class" && is_valid_attr_name(name))
        .map(|(name, value)| (name.as_str(), Cow::Borrowed(value.as_str())))
        .collect();

    if element.disabled {
        if supports_disabled(&element.tag) {
            attrs.entry("disabled").or_insert(Cow::Borrowed(""));
        } else {
            attrs.entry("aria-disabled").or_insert(Cow::Borrowed("true"));
            attrs.entry("data-disabled").or_insert(Cow::Borrowed(""));
        }
    }

    attrs
}

/// Whether `name` can be written as an attribute name without breaking
/// the markup: non-empty, no whitespace, quotes, `<`, `>`, `/`, `=` or
/// control characters.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
}

pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn escape(input: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !input.contains(needs_escape) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
