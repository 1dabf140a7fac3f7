//! Form-field decoding
//!
//! Submitted forms arrive as a multimap: a key may be present once or many
//! times depending on how the client built the request. Every lookup goes
//! through [`FormFields::first_or_self`], which always yields the first value.
//! Nested keys such as `sections[0][subsections][1][title]` are decoded into
//! the section tree by walking indexes upward from zero until a group is
//! missing.

use std::collections::HashMap;

use super::{extract_sections, BlogDocument, Faq, Image, Section, Subsection};

/// Submitted form fields keyed by name
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<String, Vec<String>>,
}

impl FormFields {
    /// Build from decoded `(key, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.into()).or_default().push(value.into());
        }
        Self { values }
    }

    /// The value of a field, taking the first when it was sent repeatedly
    pub fn first_or_self(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether a field was submitted at all
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Field value, or an empty string
    pub fn text(&self, key: &str) -> String {
        self.first_or_self(key).unwrap_or_default().to_string()
    }

    /// Field value, or `default` when missing or blank
    pub fn text_or(&self, key: &str, default: &str) -> String {
        match self.first_or_self(key) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => default.to_string(),
        }
    }

    /// Field value when present and non-blank
    pub fn optional(&self, key: &str) -> Option<String> {
        self.first_or_self(key)
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
    }
}

/// Decode a structured-sections form into a document
pub fn decode_form(fields: &FormFields, default_author: &str) -> BlogDocument {
    let mut doc = decode_common(fields, default_author);
    doc.sections = decode_sections(fields);
    doc
}

/// Decode a rich-editor form; `wysiwygContent` is split into sections
pub fn decode_wysiwyg_form(fields: &FormFields, default_author: &str) -> BlogDocument {
    let mut doc = decode_common(fields, default_author);
    let content = fields.text("wysiwygContent");
    doc.sections = extract_sections(&content, &doc.title);
    doc
}

fn decode_common(fields: &FormFields, default_author: &str) -> BlogDocument {
    BlogDocument {
        title: fields.text("title"),
        category: fields.text("category"),
        author: fields.text_or("author", default_author),
        date: fields.optional("date"),
        sections: Vec::new(),
        faqs: decode_faqs(fields),
        feature_image: Image::new(
            fields.text("featureImageName"),
            fields.text_or("featureImageAlt", "Feature image"),
        ),
        content_image: Image::new(
            fields.text("contentImageName"),
            fields.text_or("contentImageAlt", "Content image"),
        ),
        video_url: fields.optional("videoUrl"),
        custom_json_ld: fields.optional("jsonLD"),
    }
}

fn decode_sections(fields: &FormFields) -> Vec<Section> {
    let mut sections = Vec::new();

    for i in 0.. {
        let prefix = format!("sections[{}]", i);
        if !fields.contains(&format!("{}[title]", prefix)) {
            break;
        }

        let mut subsections = Vec::new();
        for j in 0.. {
            let sub_prefix = format!("{}[subsections][{}]", prefix, j);
            if !fields.contains(&format!("{}[title]", sub_prefix)) {
                break;
            }
            subsections.push(Subsection::new(
                fields.text(&format!("{}[title]", sub_prefix)),
                fields.text(&format!("{}[content]", sub_prefix)),
            ));
        }

        sections.push(Section {
            id: fields.optional(&format!("{}[id]", prefix)),
            title: fields.text(&format!("{}[title]", prefix)),
            content: fields.text(&format!("{}[content]", prefix)),
            subsections,
        });
    }

    sections
}

fn decode_faqs(fields: &FormFields) -> Vec<Faq> {
    let mut faqs = Vec::new();

    for i in 0.. {
        let question_key = format!("faqs[{}][question]", i);
        if !fields.contains(&question_key) {
            break;
        }
        faqs.push(Faq::new(
            fields.text(&question_key),
            fields.text(&format!("faqs[{}][answer]", i)),
        ));
    }

    faqs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_first_or_self() {
        let form = fields(&[("title", "First"), ("title", "Second"), ("category", "News")]);
        assert_eq!(form.first_or_self("title"), Some("First"));
        assert_eq!(form.first_or_self("category"), Some("News"));
        assert_eq!(form.first_or_self("missing"), None);
    }

    #[test]
    fn test_decode_form() {
        let form = fields(&[
            ("title", "AI and Leadership"),
            ("category", "Leadership"),
            ("author", ""),
            ("date", "2025-09-15"),
            ("videoUrl", "https://example.com/embed/x"),
            ("featureImageName", "hero.jpg"),
            ("sections[0][title]", "Intro"),
            ("sections[0][content]", "Hello"),
            ("sections[1][title]", "Deep Dive"),
            ("sections[1][subsections][0][title]", "Part A"),
            ("sections[1][subsections][0][content]", "a"),
            ("sections[1][subsections][1][title]", "Part B"),
            ("sections[1][subsections][1][content]", "b"),
            ("sections[3][title]", "Unreachable"),
            ("faqs[0][question]", "Q1"),
            ("faqs[0][answer]", "A1"),
        ]);

        let doc = decode_form(&form, "xmonks");
        assert_eq!(doc.title, "AI and Leadership");
        assert_eq!(doc.author, "xmonks");
        assert_eq!(doc.date.as_deref(), Some("2025-09-15"));
        assert_eq!(doc.video_url.as_deref(), Some("https://example.com/embed/x"));
        assert_eq!(doc.custom_json_ld, None);
        assert_eq!(doc.feature_image, Image::new("hero.jpg", "Feature image"));
        assert_eq!(doc.content_image, Image::new("", "Content image"));

        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0], Section::with_content("Intro", "Hello"));
        assert_eq!(
            doc.sections[1].subsections,
            vec![Subsection::new("Part A", "a"), Subsection::new("Part B", "b")]
        );
        assert_eq!(doc.faqs, vec![Faq::new("Q1", "A1")]);
    }

    #[test]
    fn test_blank_section_title_is_kept() {
        let form = fields(&[
            ("sections[0][title]", ""),
            ("sections[0][content]", "untitled body"),
        ]);
        let doc = decode_form(&form, "x");
        assert_eq!(doc.sections, vec![Section::untitled("untitled body")]);
    }

    #[test]
    fn test_decode_wysiwyg_form() {
        let form = fields(&[
            ("title", "My Title"),
            ("category", "News"),
            (
                "wysiwygContent",
                "<h1>My Title</h1><h2>Sec A</h2><p>Body A</p>",
            ),
            ("sections[0][title]", "Ignored"),
        ]);
        let doc = decode_wysiwyg_form(&form, "x");
        assert_eq!(
            doc.sections,
            vec![Section::with_content("Sec A", "<p>Body A</p>")]
        );
    }
}
