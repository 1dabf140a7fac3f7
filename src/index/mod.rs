//! Post index - the ordered list of published posts (blogs.json)
//!
//! Entries are never edited in place. New posts are inserted at one end
//! and the whole list is written back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::BlogConfig;
use crate::content::BlogDocument;
use crate::error::Result;
use crate::helpers::{format_display_date, to_pretty_json};

/// Summary of one published post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    /// Display date ("Sep 15, 2025")
    pub date: String,
    /// Feature image path, empty when the post has none
    pub image: String,
    pub link: String,
    pub category: String,
}

/// Where new entries go in the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexOrder {
    /// Newest first
    #[default]
    Prepend,
    /// Oldest first
    Append,
}

/// Build the index entry for a rendered post
pub fn build_index_entry(doc: &BlogDocument, filename: &str, config: &BlogConfig) -> IndexEntry {
    let image = if doc.feature_image.is_named() {
        format!("{}{}", config.index_image_prefix, doc.feature_image.name)
    } else {
        String::new()
    };

    IndexEntry {
        title: doc.title.clone(),
        date: format_display_date(doc.date.as_deref()),
        image,
        link: format!("{}{}", config.index_link_prefix, filename),
        category: doc.category.clone(),
    }
}

/// The published-post index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostIndex {
    entries: Vec<IndexEntry>,
}

impl PostIndex {
    /// Create an index from existing entries
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    /// Load the index from disk; a missing or unreadable file yields an empty index
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<PostIndex>(&content) {
                Ok(index) => index,
                Err(e) => {
                    tracing::warn!("Error loading {:?}, starting empty: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Serialize as a JSON array indented with four spaces
    pub fn to_json(&self) -> Result<String> {
        Ok(to_pretty_json(&self.entries)?)
    }

    /// Write the index to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        tracing::info!("Saved post index to {:?} ({} entries)", path, self.len());
        Ok(())
    }

    /// Add an entry at the end selected by `order`
    pub fn insert(&mut self, entry: IndexEntry, order: IndexOrder) {
        match order {
            IndexOrder::Prepend => self.entries.insert(0, entry),
            IndexOrder::Append => self.entries.push(entry),
        }
    }

    /// All entries in index order
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// The first `limit` entries
    pub fn latest(&self, limit: usize) -> &[IndexEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
