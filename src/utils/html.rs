//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `is_void_element()` - Self-closing elements (img, meta, etc.)
//! - [`Element`] - small builder used by components to emit markup

use std::borrow::Cow;
use std::fmt::Write;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(&ESCAPE_CHARS[..]) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s)
}

/// Check if tag is a void element (self-closing, no end tag).
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Element builder
// =============================================================================

/// Attribute value: `name="value"` or a bare boolean flag.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
    Text(String),
    Flag,
}

/// An HTML element with ordered attributes and pre-rendered children.
///
/// Attribute values and text children are escaped; `raw` children are
/// inserted as-is and must already be valid markup.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(Cow<'static, str>, AttrValue)>,
    children: String,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: String::new(),
        }
    }

    /// Add `name="value"`.
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), AttrValue::Text(value.into())));
        self
    }

    /// Add `name="value"` only when `value` is non-empty.
    pub fn attr_opt(self, name: impl Into<Cow<'static, str>>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.attr(name, value)
        }
    }

    /// Add a bare boolean attribute (e.g. `async`).
    pub fn flag(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.attrs.push((name.into(), AttrValue::Flag));
        self
    }

    /// Append escaped text content.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push_str(&escape(text));
        self
    }

    /// Append pre-rendered markup.
    pub fn raw(mut self, html: &str) -> Self {
        self.children.push_str(html);
        self
    }

    /// Append a child element.
    pub fn child(self, child: Element) -> Self {
        let html = child.render();
        self.raw(&html)
    }

    /// Append every child in order.
    pub fn children<I>(self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        children.into_iter().fold(self, Self::child)
    }

    /// Value of a text attribute, if present.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|(n, v)| match v {
            AttrValue::Text(value) if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether an attribute (text or flag) is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 + self.children.len());
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Text(value) => {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                AttrValue::Flag => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        out.push('>');

        if is_void_element(self.tag) {
            return out;
        }

        out.push_str(&self.children);
        let _ = write!(out, "</{}>", self.tag);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert!(matches!(escape("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
        assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
    }

    #[test]
    fn test_void_elements() {
        assert!(is_void_element("img"));
        assert!(is_void_element("meta"));
        assert!(!is_void_element("script"));
        assert!(!is_void_element("div"));
    }

    #[test]
    fn test_element_render() {
        let html = Element::new("div")
            .attr("class", "box")
            .attr("role", "alert")
            .text("a < b")
            .render();
        assert_eq!(html, r#"<div class="box" role="alert">a &lt; b</div>"#);
    }

    #[test]
    fn test_element_flags_keep_order() {
        let html = Element::new("script")
            .flag("async")
            .flag("defer")
            .attr("src", "https://example.com/x.js")
            .render();
        assert_eq!(
            html,
            r#"<script async defer src="https://example.com/x.js"></script>"#
        );
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let html = Element::new("img").attr("alt", "\"quoted\"").render();
        assert_eq!(html, r#"<img alt="&quot;quoted&quot;">"#);
    }

    #[test]
    fn test_attr_opt_skips_empty() {
        let el = Element::new("a").attr_opt("href", "").attr_opt("title", "t");
        assert!(!el.has_attr("href"));
        assert_eq!(el.get_attr("title"), Some("t"));
    }

    #[test]
    fn test_children_in_order() {
        let html = Element::new("ul")
            .children(["a", "b"].map(|s| Element::new("li").text(s)))
            .render();
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    }
}
