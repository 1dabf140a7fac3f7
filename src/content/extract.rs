//! Document extraction - turns rich editor or converter markup into sections
//!
//! The input is scanned once, left to right, into an alternating stream of
//! heading and content tokens. The token stream is then folded into the
//! section tree: `h1`/`h2` open a new section, `h3`-`h6` open a subsection
//! of the current one, and content is appended to whatever was opened last.
//! Malformed markup never fails; unmatched heading tags are left in place
//! as ordinary content.

use super::{Section, Subsection};
use crate::helpers::{preserve_formatting, strip_html};

/// A chunk of the input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A heading element with its level (1-6) and inner markup
    Heading { level: u8, inner: &'a str },
    /// Markup between headings
    Content(&'a str),
}

/// Split markup into heading and content tokens, in document order
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut search_from = 0;

    while let Some(open) = find_heading_open(html, search_from) {
        // A heading must close before the next heading opens
        let next_open = find_heading_open(html, open.end).map(|next| next.start);
        let limit = next_open.unwrap_or(html.len());

        let Some((close_start, close_end)) = find_heading_close(html, open.end, limit) else {
            // Unterminated heading stays in the content run
            match next_open {
                Some(next) => {
                    search_from = next;
                    continue;
                }
                None => break,
            }
        };

        if open.start > pos {
            tokens.push(Token::Content(&html[pos..open.start]));
        }
        tokens.push(Token::Heading {
            level: open.level,
            inner: &html[open.end..close_start],
        });

        pos = close_end;
        search_from = close_end;
    }

    if pos < html.len() {
        tokens.push(Token::Content(&html[pos..]));
    }

    tokens
}

/// Extract the section tree from rich markup
///
/// When `title` is non-empty and the first heading in the document has the
/// same text (ignoring case), that heading is dropped so the post title is
/// not repeated as a section heading. Content before the first heading
/// becomes a section without a title.
pub fn extract_sections(html: &str, title: &str) -> Vec<Section> {
    let state = tokenize(html)
        .into_iter()
        .fold(Extraction::new(title), Extraction::step);

    let mut sections = state.sections;

    if sections.is_empty() && !html.trim().is_empty() {
        let cleaned = preserve_formatting(html);
        if !cleaned.is_empty() {
            sections.push(Section::untitled(cleaned));
        }
    }

    sections
}

/// Fold state threaded through the token stream
///
/// The current section is always the last one pushed.
#[derive(Debug)]
struct Extraction<'t> {
    title: &'t str,
    sections: Vec<Section>,
    title_handled: bool,
}

impl<'t> Extraction<'t> {
    fn new(title: &'t str) -> Self {
        Self {
            title: title.trim(),
            sections: Vec::new(),
            title_handled: false,
        }
    }

    fn step(self, token: Token<'_>) -> Self {
        match token {
            Token::Heading { level, inner } => self.heading(level, inner),
            Token::Content(content) => self.content(content),
        }
    }

    fn heading(mut self, level: u8, inner: &str) -> Self {
        let text = strip_html(inner).trim().to_string();

        if !self.title_handled {
            self.title_handled = true;
            if !self.title.is_empty() && text.to_lowercase() == self.title.to_lowercase() {
                tracing::debug!("Skipping duplicate title heading: {:?}", text);
                return self;
            }
        }

        if level <= 2 {
            self.sections.push(Section::titled(text));
        } else if let Some(current) = self.sections.last_mut() {
            current.subsections.push(Subsection::new(text, ""));
        }

        self
    }

    fn content(mut self, raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return self;
        }

        let cleaned = preserve_formatting(raw);
        if cleaned.is_empty() {
            return self;
        }

        if self.sections.is_empty() {
            self.sections.push(Section::default());
        }

        if let Some(current) = self.sections.last_mut() {
            match current.subsections.last_mut() {
                Some(sub) => append(&mut sub.content, &cleaned),
                None => append(&mut current.content, &cleaned),
            }
        }

        self
    }
}

fn append(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Location of a heading open tag
struct HeadingOpen {
    start: usize,
    end: usize,
    level: u8,
}

/// Find the next `<hN ...>` open tag at or after `from`
fn find_heading_open(html: &str, from: usize) -> Option<HeadingOpen> {
    let bytes = html.as_bytes();
    let mut cursor = from;

    while let Some(offset) = html[cursor..].find('<') {
        let start = cursor + offset;
        if let Some(level) = heading_level(bytes, start + 1) {
            let after = bytes.get(start + 3).copied();
            let boundary = matches!(after, Some(b'>') | Some(b'/'))
                || after.is_some_and(|b| b.is_ascii_whitespace());
            if boundary {
                let end = html[start..].find('>').map(|i| start + i + 1)?;
                return Some(HeadingOpen { start, end, level });
            }
        }
        cursor = start + 1;
    }

    None
}

/// Find the first `</hN>` close tag starting in `from..limit`
fn find_heading_close(html: &str, from: usize, limit: usize) -> Option<(usize, usize)> {
    let bytes = html.as_bytes();
    let mut cursor = from;

    while let Some(offset) = html[cursor..limit].find("</") {
        let start = cursor + offset;
        if heading_level(bytes, start + 2).is_some() {
            let mut end = start + 4;
            while bytes.get(end).is_some_and(|b| b.is_ascii_whitespace()) {
                end += 1;
            }
            if bytes.get(end) == Some(&b'>') {
                return Some((start, end + 1));
            }
        }
        cursor = start + 2;
    }

    None
}

/// Read `hN` at `at`, returning N when it is a heading level
fn heading_level(bytes: &[u8], at: usize) -> Option<u8> {
    let h = bytes.get(at)?;
    let digit = bytes.get(at + 1)?;
    if h.eq_ignore_ascii_case(&b'h') && (b'1'..=b'6').contains(digit) {
        Some(digit - b'0')
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("<p>a</p><H2 class=\"x\">Title <b>B</b></H2><p>b</p>");
        assert_eq!(
            tokens,
            vec![
                Token::Content("<p>a</p>"),
                Token::Heading {
                    level: 2,
                    inner: "Title <b>B</b>"
                },
                Token::Content("<p>b</p>"),
            ]
        );
    }

    #[test]
    fn test_tokenize_ignores_lookalike_tags() {
        let html = "<header><hr><h3>Sub</h3></header>";
        let tokens = tokenize(html);
        assert_eq!(
            tokens,
            vec![
                Token::Content("<header><hr>"),
                Token::Heading {
                    level: 3,
                    inner: "Sub"
                },
                Token::Content("</header>"),
            ]
        );
    }

    #[test]
    fn test_unterminated_heading_is_content() {
        let tokens = tokenize("<p>x</p><h2>Never closed<p>y</p>");
        assert_eq!(tokens, vec![Token::Content("<p>x</p><h2>Never closed<p>y</p>")]);
    }

    #[test]
    fn test_unterminated_heading_does_not_swallow_next_heading() {
        let html = "<h2>Never closed<p>y</p><h2>Real</h2><p>z</p>";
        assert_eq!(
            tokenize(html),
            vec![
                Token::Content("<h2>Never closed<p>y</p>"),
                Token::Heading {
                    level: 2,
                    inner: "Real"
                },
                Token::Content("<p>z</p>"),
            ]
        );

        let sections = extract_sections(html, "");
        assert_eq!(
            sections,
            vec![
                Section::untitled("<h2>Never closed<p>y</p>"),
                Section::with_content("Real", "<p>z</p>"),
            ]
        );
    }

    #[test]
    fn test_duplicate_title_is_skipped_and_lead_content_kept() {
        let html = "<h1>My Title</h1><p>Intro</p><h2>Sec A</h2><p>Body A</p>";
        let sections = extract_sections(html, "My Title");

        assert_eq!(
            sections,
            vec![
                Section::untitled("<p>Intro</p>"),
                Section::with_content("Sec A", "<p>Body A</p>"),
            ]
        );
    }

    #[test]
    fn test_title_match_is_case_insensitive_and_first_only() {
        let html = "<h2>Intro</h2><p>a</p><h2>my title</h2><p>b</p>";
        let sections = extract_sections(html, "My Title");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].title, "my title");

        let html = "<h1>MY TITLE</h1><h2>Next</h2><p>x</p>";
        let sections = extract_sections(html, "My Title");
        assert_eq!(sections, vec![Section::with_content("Next", "<p>x</p>")]);
    }

    #[test]
    fn test_subsections_collect_content() {
        let html = "<h2>Main</h2><p>lead</p><h3>First</h3><p>one</p><p>two</p><h4>Second</h4><ul><li>x</li></ul>";
        let sections = extract_sections(html, "");

        assert_eq!(sections.len(), 1);
        let main = &sections[0];
        assert_eq!(main.title, "Main");
        assert_eq!(main.content, "<p>lead</p>");
        assert_eq!(
            main.subsections,
            vec![
                Subsection::new("First", "<p>one</p><p>two</p>"),
                Subsection::new("Second", "<ul><li>x</li></ul>"),
            ]
        );
    }

    #[test]
    fn test_content_chunks_join_with_space() {
        let html = "<p>a</p><h1>My Title</h1><p>b</p>";
        let sections = extract_sections(html, "My Title");
        assert_eq!(sections, vec![Section::untitled("<p>a</p> <p>b</p>")]);

        let html = "<h2>A</h2>\n<p>one</p>\n<hr>\n";
        let sections = extract_sections(html, "");
        assert_eq!(sections[0].content, "<p>one</p>\n<hr>");

        let html = "<h2>A</h2><p>one</p><h5></h5><p>two</p>";
        let sections = extract_sections(html, "");
        assert_eq!(sections[0].subsections[0].content, "<p>two</p>");
    }

    #[test]
    fn test_orphan_subheading_is_ignored() {
        let html = "<h3>Orphan</h3><p>text</p>";
        let sections = extract_sections(html, "");
        assert_eq!(sections, vec![Section::untitled("<p>text</p>")]);
    }

    #[test]
    fn test_content_is_cleaned() {
        let html = r#"<div><h2>A</h2><p class="MsoNormal"><span>Body</span></p></div>"#;
        let sections = extract_sections(html, "");
        assert_eq!(sections, vec![Section::with_content("A", "<p>Body</p>")]);
    }

    #[test]
    fn test_no_sections_falls_back_to_whole_input() {
        let sections = extract_sections("<h1>Only Title</h1>", "Only Title");
        assert_eq!(sections, vec![Section::untitled("<h1>Only Title</h1>")]);

        assert!(extract_sections("   ", "x").is_empty());
        assert!(extract_sections("", "x").is_empty());
    }

    #[test]
    fn test_heading_text_is_stripped() {
        let html = "<h2><strong>Bold</strong> <em>heading</em></h2><p>x</p>";
        let sections = extract_sections(html, "");
        assert_eq!(sections[0].title, "Bold heading");
    }
}
