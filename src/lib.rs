//! blogcms-rs: renders structured blog content into SEO-annotated HTML pages
//!
//! Blog content arrives as plain fields, nested sections or rich editor
//! markup, is normalized into one [`content::BlogDocument`], and is merged
//! into a fixed page template together with generated schema.org JSON-LD.
//! Every published post is recorded in a JSON post index.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod index;
pub mod server;
pub mod templates;

pub use error::{Error, Result};

use std::fs;
use std::path::{Path, PathBuf};

use content::BlogDocument;
use index::{build_index_entry, IndexEntry, PostIndex};
use templates::TemplateRenderer;

/// The CMS application
#[derive(Debug, Clone)]
pub struct BlogCms {
    /// CMS configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Output directory for rendered pages
    pub blogs_dir: PathBuf,
    /// Directory holding blog images
    pub images_dir: PathBuf,
    /// Post index file
    pub index_path: PathBuf,
}

/// Outcome of publishing a post
#[derive(Debug, Clone)]
pub struct CreatedBlog {
    /// File name of the rendered page
    pub filename: String,
    /// Full path of the rendered page
    pub path: PathBuf,
    /// Entry added to the post index
    pub entry: IndexEntry,
}

impl BlogCms {
    /// Create a new instance from a directory, reading `blogcms.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let config = config::BlogConfig::load_or_default(base_dir.as_ref())?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create a new instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let blogs_dir = base_dir.join(&config.blogs_dir);
        let images_dir = base_dir.join(&config.images_dir);
        let index_path = base_dir.join(&config.index_file);

        Self {
            config,
            base_dir,
            blogs_dir,
            images_dir,
            index_path,
        }
    }

    /// Load the configured template, or the embedded one
    pub fn renderer(&self) -> Result<TemplateRenderer> {
        match &self.config.template {
            Some(path) => TemplateRenderer::load(&self.base_dir.join(path)),
            None => Ok(TemplateRenderer::embedded()),
        }
    }

    /// Validate a document and fill in defaults
    pub fn prepare(&self, doc: BlogDocument) -> Result<BlogDocument> {
        doc.prepare(&self.config.default_author)
    }

    /// Render a document to a full HTML page without publishing it
    pub fn render(&self, doc: &BlogDocument) -> Result<String> {
        self.renderer()?.render(doc, &self.config)
    }

    /// Render, write and index a new post
    pub fn create_blog(&self, doc: BlogDocument) -> anyhow::Result<CreatedBlog> {
        let doc = self.prepare(doc)?;
        let html = self.render(&doc)?;

        let filename = doc.filename();
        let path = self.blogs_dir.join(&filename);
        fs::create_dir_all(&self.blogs_dir)?;
        fs::write(&path, html)?;
        tracing::info!("Blog HTML created: {:?}", path);

        let entry = build_index_entry(&doc, &filename, &self.config);
        let mut index = self.load_index();
        index.insert(entry.clone(), self.config.index_order);
        index.save(&self.index_path)?;

        Ok(CreatedBlog {
            filename,
            path,
            entry,
        })
    }

    /// Load the post index
    pub fn load_index(&self) -> PostIndex {
        PostIndex::load(&self.index_path)
    }

    /// List the first `limit` published posts
    pub fn list_blogs(&self, limit: usize) -> Vec<IndexEntry> {
        self.load_index().latest(limit).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::{Faq, Section, Subsection};
    use tempfile::TempDir;

    fn document(title: &str) -> BlogDocument {
        let mut doc = BlogDocument::new(title, "Leadership");
        doc.date = Some("2025-09-15".to_string());
        doc.sections = vec![
            Section::with_content("Intro", "Hello"),
            Section {
                title: "More".to_string(),
                subsections: vec![Subsection::new("A", "a")],
                ..Default::default()
            },
        ];
        doc.faqs = vec![Faq::new("Q1", "A1"), Faq::new("Q2", "A2")];
        doc
    }

    #[test]
    fn test_create_blog() {
        let dir = TempDir::new().unwrap();
        let cms = BlogCms::new(dir.path()).unwrap();

        let created = cms.create_blog(document("AI and Leadership")).unwrap();
        assert_eq!(created.filename, "ai-and-leadership.html");
        assert_eq!(created.path, dir.path().join("blogs/ai-and-leadership.html"));

        let html = fs::read_to_string(&created.path).unwrap();
        assert!(html.contains("<title>AI and Leadership</title>"));
        assert!(html.contains("<i class=\"fas fa-user\"></i> xmonks</span>"));

        let index = cms.load_index();
        assert_eq!(index.entries(), &[created.entry]);
        assert_eq!(index.entries()[0].link, "./blogs/ai-and-leadership.html");
    }

    #[test]
    fn test_newest_post_is_listed_first() {
        let dir = TempDir::new().unwrap();
        let cms = BlogCms::new(dir.path()).unwrap();

        cms.create_blog(document("First Post")).unwrap();
        cms.create_blog(document("Second Post")).unwrap();

        let titles: Vec<_> = cms.list_blogs(10).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Second Post", "First Post"]);
        assert_eq!(cms.list_blogs(1).len(), 1);
    }

    #[test]
    fn test_create_blog_requires_sections() {
        let dir = TempDir::new().unwrap();
        let cms = BlogCms::new(dir.path()).unwrap();

        let err = cms
            .create_blog(BlogDocument::new("Title", "Cat"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingField(_))
        ));
        assert!(!cms.index_path.exists());
    }

    #[test]
    fn test_untitled_slug_is_not_written() {
        let dir = TempDir::new().unwrap();
        let cms = BlogCms::new(dir.path()).unwrap();

        let err = cms.create_blog(document("日本語のブログ")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::EmptySlug(_))
        ));
        assert!(!cms.blogs_dir.join(".html").exists());
        assert!(cms.load_index().is_empty());
    }

    #[test]
    fn test_missing_configured_template() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blogcms.yml"), "template: missing.html\n").unwrap();
        let cms = BlogCms::new(dir.path()).unwrap();

        let err = cms.create_blog(document("T")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::TemplateUnavailable { .. })
        ));
        assert!(!cms.blogs_dir.exists());
    }

    #[test]
    fn test_configured_template() {
        let dir = TempDir::new().unwrap();
        let template = templates::DEFAULT_TEMPLATE.replace("blog-footer", "custom-footer");
        fs::write(dir.path().join("page.html"), template).unwrap();
        fs::write(dir.path().join("blogcms.yml"), "template: page.html\n").unwrap();
        let cms = BlogCms::new(dir.path()).unwrap();

        let html = cms.render(&document("T")).unwrap();
        assert!(html.contains("custom-footer"));
    }
}
