//! Rich-content helpers
//!
//! Section and subsection bodies arrive either as plain text or as markup
//! produced by a WYSIWYG editor or a document converter. Markup is trusted
//! and passed through without escaping.

use lazy_static::lazy_static;
use regex::Regex;

/// Indentation applied to every content line inside a section
pub const CONTENT_INDENT: &str = "      ";

lazy_static! {
    /// Inline/block formatting tags that mark content as already formatted
    static ref FORMATTING_TAG: Regex =
        Regex::new(r"(?i)<(?:p|strong|em|b|i|a|ul|ol|li)(?:\s[^>]*)?>").unwrap();
    static ref LAYOUT_TAG: Regex = Regex::new(
        r"(?i)</?(?:div|span|section|article|aside|nav|header|footer|main)\b[^>]*>"
    )
    .unwrap();
    static ref DOCUMENT_TAG: Regex =
        Regex::new(r"(?i)</?(?:meta|link|script|style|head|html|body|title)\b[^>]*>").unwrap();
    static ref TABLE_TAG: Regex =
        Regex::new(r"(?i)</?(?:table|tr|td|th|thead|tbody|tfoot)\b[^>]*>").unwrap();
    static ref PARAGRAPH_OPEN: Regex = Regex::new(r"(?i)<p\b[^>]*>").unwrap();
}

/// Render a section body as indented block markup
///
/// Content that already carries formatting tags is re-indented line by
/// line; anything else is treated as plain text and wrapped in a single
/// paragraph.
pub fn render_content(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    if FORMATTING_TAG.is_match(raw) {
        raw.lines()
            .map(|line| {
                let line = line.trim();
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", CONTENT_INDENT, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        format!("{}<p>{}</p>", CONTENT_INDENT, raw)
    }
}

/// Strip structural and layout markup while keeping inline formatting
///
/// Container tags (div, span, sectioning elements, tables, document-level
/// tags) are removed but their inner content stays in place. Paragraph
/// open tags lose their attributes.
pub fn preserve_formatting(html: &str) -> String {
    let html = LAYOUT_TAG.replace_all(html, "");
    let html = DOCUMENT_TAG.replace_all(&html, "");
    let html = TABLE_TAG.replace_all(&html, "");
    let html = PARAGRAPH_OPEN.replace_all(&html, "<p>");
    html.trim().to_string()
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_text() {
        assert_eq!(render_content("Just words"), "      <p>Just words</p>");
        assert_eq!(render_content(""), "");
        assert_eq!(render_content("   "), "");
    }

    #[test]
    fn test_render_formatted_content_is_reindented() {
        let raw = "<p>One</p>\n\n   <ul><li>Two</li></ul>  ";
        assert_eq!(
            render_content(raw),
            "      <p>One</p>\n\n      <ul><li>Two</li></ul>"
        );
    }

    #[test]
    fn test_render_detects_anchor_with_attributes() {
        let raw = r#"See <a href="https://example.com">this</a>"#;
        assert_eq!(render_content(raw), format!("{}{}", CONTENT_INDENT, raw));
    }

    #[test]
    fn test_render_does_not_escape() {
        assert_eq!(render_content("a < b & c"), "      <p>a < b & c</p>");
    }

    #[test]
    fn test_preserve_formatting() {
        let html = r#"<div class="wrap"><p style="color:red">Hi <strong>there</strong></p><span>x</span></div>"#;
        assert_eq!(
            preserve_formatting(html),
            "<p>Hi <strong>there</strong></p>x"
        );
    }

    #[test]
    fn test_preserve_formatting_keeps_lists_and_links() {
        let html = r#"<table><tr><td><ul><li><a href="/x">x</a></li></ul></td></tr></table>"#;
        assert_eq!(
            preserve_formatting(html),
            r#"<ul><li><a href="/x">x</a></li></ul>"#
        );
    }

    #[test]
    fn test_preserve_formatting_leaves_similar_tags() {
        let html = "<pre>code</pre><header>h</header><br>";
        assert_eq!(preserve_formatting(html), "<pre>code</pre>h<br>");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }
}
