//! Create a blog post from a JSON document

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::BlogDocument;
use crate::BlogCms;

/// Read a JSON blog document from disk
pub fn read_document(path: &Path) -> Result<BlogDocument> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let doc = serde_json::from_str(&raw).with_context(|| format!("Invalid document {:?}", path))?;
    Ok(doc)
}

/// Render, write and index the document stored at `path`
pub fn run(cms: &BlogCms, path: &Path) -> Result<()> {
    let doc = read_document(path)?;
    let created = cms.create_blog(doc)?;

    println!("Created: {}", created.path.display());
    println!("Indexed: {} ({})", created.entry.title, created.entry.date);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_from_json() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("post.json");
        fs::write(
            &source,
            r#"{
                "title": "Hello World",
                "category": "News",
                "date": "2025-09-15",
                "sections": [{"title": "Intro", "content": "Hi"}],
                "featureImage": {"name": "hero.jpg", "alt": "Hero"}
            }"#,
        )
        .unwrap();

        let cms = BlogCms::new(dir.path()).unwrap();
        run(&cms, &source).unwrap();

        assert!(dir.path().join("blogs/hello-world.html").exists());
        let entries = cms.list_blogs(10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].image, "./blogs/imagesofblog/hero.jpg");
        assert_eq!(entries[0].date, "Sep 15, 2025");
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("post.json");
        fs::write(&source, "{not json").unwrap();

        let cms = BlogCms::new(dir.path()).unwrap();
        assert!(run(&cms, &source).is_err());
        assert!(run(&cms, &dir.path().join("missing.json")).is_err());
    }
}
