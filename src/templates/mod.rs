//! Page template compositing
//!
//! The page template is a fixed HTML shell. Rendering fills in the title,
//! the category/author/date markers, the top-level heading and the JSON-LD
//! block, then regenerates two regions wholesale: the main content column
//! and the sticky side column that follows it. Everything else in the
//! template is copied through byte for byte.
//!
//! All edits are located on the pristine template before any user text is
//! inserted, so markup inside user content can never be mistaken for a
//! template marker.

use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::config::BlogConfig;
use crate::content::BlogDocument;
use crate::error::{Error, Result};
use crate::generator::{build_structured_data, render_faqs, render_sections, ArticleMeta};
use crate::helpers::format_display_date;

/// Template compiled into the binary, used when none is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("blog.html");

/// Opening tag of the main content column
pub const MAIN_CONTENT_OPEN: &str = r#"<div class="blog-main-content">"#;

/// The sticky side column, replaced through its first closing tag
pub const SIDE_CONTENT: Region<'static> = Region {
    open: r#"<div class="blog-sticky-video">"#,
    close: "</div>",
};

lazy_static! {
    static ref TITLE_ELEMENT: Regex = Regex::new(r"(?s)<title>.*?</title>").unwrap();
    static ref CATEGORY_MARKER: Regex =
        Regex::new(r#"(?s)<span class="blog-meta-category">.*?</span>"#).unwrap();
    static ref AUTHOR_MARKER: Regex =
        Regex::new(r#"(?s)<span class="blog-meta-author">.*?</span>"#).unwrap();
    static ref DATE_MARKER: Regex =
        Regex::new(r#"(?s)<span class="blog-meta-date">.*?</span>"#).unwrap();
    static ref HEADING_ELEMENT: Regex = Regex::new(r"(?s)<h1>.*?</h1>").unwrap();
    static ref JSON_LD_SCRIPT: Regex =
        Regex::new(r#"(?s)<script type="application/ld\+json">.*?</script>"#).unwrap();
}

/// An element located by its opening tag and the first closing tag after it
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub open: &'a str,
    pub close: &'a str,
}

impl Region<'_> {
    /// Byte offset just past the region's first closing tag
    fn end_in(&self, template: &str) -> Result<usize> {
        let start = template
            .find(self.open)
            .ok_or_else(|| Error::MissingRegion(self.open.to_string()))?;
        let body = start + self.open.len();
        let close = template[body..].find(self.close).ok_or_else(|| {
            Error::MissingRegion(format!("{} after {}", self.close, self.open))
        })?;
        Ok(body + close + self.close.len())
    }
}

/// The byte range replaced by [`splice`]
///
/// Starts right after `keep_through` and ends right after the closing tag
/// of `resume_after`. The two markers are located independently.
pub fn region_range(
    template: &str,
    keep_through: &str,
    resume_after: Region<'_>,
) -> Result<Range<usize>> {
    let start = template
        .find(keep_through)
        .map(|i| i + keep_through.len())
        .ok_or_else(|| Error::MissingRegion(keep_through.to_string()))?;
    let end = resume_after.end_in(template)?;

    if end < start {
        return Err(Error::MissingRegion(format!(
            "{} after {}",
            resume_after.open, keep_through
        )));
    }

    Ok(start..end)
}

/// Replace everything between two markers
///
/// Keeps the template up to and including `keep_through`, inserts
/// `replacement`, then resumes right after the closing tag of
/// `resume_after`.
pub fn splice(
    template: &str,
    keep_through: &str,
    resume_after: Region<'_>,
    replacement: &str,
) -> Result<String> {
    let range = region_range(template, keep_through, resume_after)?;
    Ok(apply_edits(
        template,
        vec![Edit {
            range,
            text: replacement.to_string(),
        }],
    ))
}

/// Load a template from disk
pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::TemplateUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders documents into one page template
///
/// The template text is only read, so one renderer can serve any number
/// of documents.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template: String,
}

impl TemplateRenderer {
    /// Create a renderer for the given template text
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Create a renderer for the built-in template
    pub fn embedded() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }

    /// Create a renderer for a template file
    pub fn load(path: &Path) -> Result<Self> {
        let template = load_template(path)?;
        tracing::debug!("Loaded template from {:?}", path);
        Ok(Self::new(template))
    }

    /// The template text
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render a document into the template
    pub fn render(&self, doc: &BlogDocument, config: &BlogConfig) -> Result<String> {
        compose(&self.template, doc, config)
    }
}

/// Compose a full page from a template and a document
pub fn compose(template: &str, doc: &BlogDocument, config: &BlogConfig) -> Result<String> {
    let region = region_range(template, MAIN_CONTENT_OPEN, SIDE_CONTENT)?;

    let display_date = format_display_date(doc.date.as_deref());
    let json_ld = build_structured_data(
        doc.custom_json_ld.as_deref(),
        &doc.faqs,
        &ArticleMeta {
            title: &doc.title,
            author: &doc.author,
            date: doc.date.as_deref(),
            publisher: &config.publisher,
        },
    );

    let mut edits: Vec<Edit> = [
        (&*TITLE_ELEMENT, format!("<title>{}</title>", doc.title)),
        (
            &*CATEGORY_MARKER,
            format!(
                r#"<span class="blog-meta-category"><i class="fas fa-user-tie"></i> {}</span>"#,
                doc.category
            ),
        ),
        (
            &*AUTHOR_MARKER,
            format!(
                r#"<span class="blog-meta-author"><i class="fas fa-user"></i> {}</span>"#,
                doc.author
            ),
        ),
        (
            &*DATE_MARKER,
            format!(
                r#"<span class="blog-meta-date"><i class="fas fa-calendar-alt"></i> {}</span>"#,
                display_date
            ),
        ),
        (&*HEADING_ELEMENT, format!("<h1>{}</h1>", doc.title)),
        (&*JSON_LD_SCRIPT, json_ld),
    ]
    .into_iter()
    .filter(|(_, text)| !text.trim().is_empty())
    .filter_map(|(pattern, text)| {
        pattern.find(template).map(|m| Edit {
            range: m.range(),
            text,
        })
    })
    .filter(|edit| edit.range.end <= region.start || edit.range.start >= region.end)
    .collect();

    edits.push(Edit {
        range: region,
        text: content_region(doc, config),
    });

    Ok(apply_edits(template, edits))
}

/// Markup for the main column body and the rebuilt side column
fn content_region(doc: &BlogDocument, config: &BlogConfig) -> String {
    let sections = render_sections(
        &doc.sections,
        Some(&doc.content_image),
        &config.content_image_prefix,
    );
    let faqs = render_faqs(&doc.faqs);
    let video_url = doc
        .video_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(&config.default_video_url);

    format!(
        r#"
{sections}{faqs}  </div>
  {side_open}
    <iframe width="560" height="315" src="{video_url}" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" referrerpolicy="strict-origin-when-cross-origin" allowfullscreen></iframe>
  </div>"#,
        sections = sections,
        faqs = faqs,
        side_open = SIDE_CONTENT.open,
        video_url = video_url,
    )
}

/// A replacement of one byte range of the template
#[derive(Debug)]
struct Edit {
    range: Range<usize>,
    text: String,
}

/// Apply non-overlapping edits located on the unmodified template
fn apply_edits(template: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|edit| edit.range.start);

    let mut out = String::with_capacity(template.len());
    let mut pos = 0;

    for edit in edits {
        if edit.range.start < pos {
            tracing::warn!("Skipping overlapping template edit at byte {}", edit.range.start);
            continue;
        }
        out.push_str(&template[pos..edit.range.start]);
        out.push_str(&edit.text);
        pos = edit.range.end;
    }

    out.push_str(&template[pos..]);
    out
}
