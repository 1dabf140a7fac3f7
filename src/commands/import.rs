//! Create a blog post from a converted HTML document

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::import::import_document;
use crate::content::BlogDocument;
use crate::BlogCms;

/// Metadata supplied alongside an imported document
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Overrides the title found in the document
    pub title: Option<String>,
    pub category: String,
    pub author: Option<String>,
    pub date: Option<String>,
    pub video_url: Option<String>,
}

/// Build a blog document from converted HTML
///
/// Embedded schema.org JSON-LD, when found, is carried over as the custom
/// structured data of the post.
pub fn document_from_html(html: &str, options: ImportOptions) -> BlogDocument {
    let imported = import_document(html);

    BlogDocument {
        title: options.title.unwrap_or(imported.title),
        category: options.category,
        author: options.author.unwrap_or_default(),
        date: options.date,
        sections: imported.sections,
        video_url: options.video_url,
        custom_json_ld: Some(imported.json_ld).filter(|json| !json.is_empty()),
        ..Default::default()
    }
}

/// Import the HTML document at `path` and publish it
pub fn run(cms: &BlogCms, path: &Path, options: ImportOptions) -> Result<()> {
    let html = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let doc = document_from_html(&html, options);
    tracing::info!("Imported {:?}: {} sections", path, doc.sections.len());

    let created = cms.create_blog(doc)?;
    println!("Created: {}", created.path.display());
    Ok(())
}
