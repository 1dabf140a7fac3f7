//! Blog document model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::helpers::{slugify, today_iso};

/// The canonical render input
///
/// Every input source (JSON bodies, form fields, extracted documents) is
/// converted into this shape before rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogDocument {
    /// Post title
    pub title: String,

    /// Post category
    pub category: String,

    /// Author name
    pub author: String,

    /// Publication date as typed by the user
    pub date: Option<String>,

    /// Ordered content sections
    pub sections: Vec<Section>,

    /// Ordered FAQ entries
    pub faqs: Vec<Faq>,

    /// Image shown in the post index
    pub feature_image: Image,

    /// Image inserted after the middle section
    pub content_image: Image,

    /// Embedded video for the side column
    pub video_url: Option<String>,

    /// Hand-written JSON-LD overriding the generated one
    #[serde(rename = "customJsonLD")]
    pub custom_json_ld: Option<String>,
}

impl BlogDocument {
    /// Create a document with a title and category
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Validate required fields and fill in defaults before rendering
    pub fn prepare(mut self, default_author: &str) -> Result<Self> {
        if self.title.trim().is_empty() {
            return Err(Error::MissingField("Title"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::MissingField("Category"));
        }
        if self.sections.is_empty() {
            return Err(Error::MissingField("At least one section"));
        }
        if self.slug().is_empty() {
            return Err(Error::EmptySlug(self.title));
        }

        if self.author.trim().is_empty() {
            self.author = default_author.to_string();
        }
        if self.date.as_deref().map_or(true, |d| d.trim().is_empty()) {
            self.date = Some(today_iso());
        }

        Ok(self)
    }

    /// Slug of the title, used as the output filename stem
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Output filename for the rendered page
    pub fn filename(&self) -> String {
        format!("{}.html", self.slug())
    }
}

/// A top-level content block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Explicit anchor id
    pub id: Option<String>,

    /// Heading text; empty means no heading is rendered
    pub title: String,

    /// Body markup or plain text, used when there are no subsections
    pub content: String,

    /// Nested blocks rendered under their own sub-headings
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// Create a titled section with an empty body
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Create a section without a heading
    pub fn untitled(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a section with body content
    pub fn with_content(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Whether a heading should be rendered for this section
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Anchor id: explicit id, then the title slug, then `section-{index}`
    pub fn anchor(&self, index: usize) -> String {
        if let Some(id) = self.id.as_deref().filter(|id| !id.trim().is_empty()) {
            return id.to_string();
        }

        let slug = slugify(&self.title);
        if slug.is_empty() {
            format!("section-{}", index)
        } else {
            slug
        }
    }
}

/// A titled block nested under a section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subsection {
    pub title: String,
    pub content: String,
}

impl Subsection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A question/answer pair rendered as one accordion item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An image referenced by file name only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub name: String,
    pub alt: String,
}

impl Image {
    pub fn new(name: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alt: alt.into(),
        }
    }

    /// Whether the image refers to a file
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
