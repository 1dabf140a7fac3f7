//! Helpers for importing converted documents
//!
//! A document converter yields one HTML string. These helpers pull the
//! pieces an editor wants to pre-fill from it: a title, the heading outline
//! and any embedded schema.org JSON-LD.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::{extract_sections, Section, Subsection};
use crate::helpers::strip_html;

lazy_static! {
    static ref FIRST_H1: Regex = Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap();
    static ref FIRST_STRONG: Regex = Regex::new(r"(?is)<strong[^>]*>(.*?)</strong>").unwrap();
    static ref OUTLINE_HEADING: Regex = Regex::new(r"(?is)<h([23])[^>]*>(.*?)</h[23]>").unwrap();
    static ref JSON_LD_OBJECT: Regex =
        Regex::new(r#"(?i)\{[^}]*"@context"[^}]*schema\.org[^}]*\}"#).unwrap();
}

/// Everything extracted from a converted document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedDocument {
    pub title: String,
    pub outline: Vec<Section>,
    pub sections: Vec<Section>,
    #[serde(rename = "jsonLD")]
    pub json_ld: String,
}

/// Import a converted document
///
/// The detected title is used to drop the duplicate leading heading when
/// splitting the document into sections.
pub fn import_document(html: &str) -> ImportedDocument {
    let title = extract_title(html);
    ImportedDocument {
        outline: outline(html),
        sections: extract_sections(html, &title),
        json_ld: find_json_ld(html),
        title,
    }
}

/// Title from the first `h1`, else the first `strong`
pub fn extract_title(html: &str) -> String {
    FIRST_H1
        .captures(html)
        .or_else(|| FIRST_STRONG.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| strip_html(m.as_str()).trim().to_string())
        .unwrap_or_default()
}

/// The `h2`/`h3` outline as empty sections and subsections
pub fn outline(html: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for caps in OUTLINE_HEADING.captures_iter(html) {
        let title = strip_html(&caps[2]).trim().to_string();
        if &caps[1] == "2" {
            sections.push(Section::titled(title));
        } else if let Some(last) = sections.last_mut() {
            last.subsections.push(Subsection::new(title, ""));
        }
    }

    sections
}

/// First inline JSON-LD object referencing schema.org
pub fn find_json_ld(html: &str) -> String {
    JSON_LD_OBJECT
        .find(html)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("<p>x</p><h1 id=\"t\">The <em>Title</em></h1>"), "The Title");
        assert_eq!(extract_title("<p><strong> Bold Title </strong></p>"), "Bold Title");
        assert_eq!(extract_title("<p>nothing</p>"), "");
    }

    #[test]
    fn test_outline() {
        let html = "<h3>orphan</h3><h2>One</h2><h3>One.a</h3><h2>Two</h2><h4>skip</h4>";
        let sections = outline(html);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "One");
        assert_eq!(sections[0].subsections, vec![Subsection::new("One.a", "")]);
        assert!(sections[1].subsections.is_empty());
    }

    #[test]
    fn test_find_json_ld() {
        let html = r#"<p>{"@context": "https://schema.org", "@type": "Article"}</p>"#;
        assert_eq!(
            find_json_ld(html),
            r#"{"@context": "https://schema.org", "@type": "Article"}"#
        );
        assert_eq!(find_json_ld("<p>{\"a\": 1}</p>"), "");
    }

    #[test]
    fn test_import_document() {
        let html = "<h1>Guide</h1><p>Intro</p><h2>Setup</h2><p>Steps</p>";
        let imported = import_document(html);
        assert_eq!(imported.title, "Guide");
        assert_eq!(imported.outline, vec![Section::titled("Setup")]);
        assert_eq!(
            imported.sections,
            vec![
                Section::untitled("<p>Intro</p>"),
                Section::with_content("Setup", "<p>Steps</p>"),
            ]
        );
        assert!(imported.json_ld.is_empty());
    }
}
