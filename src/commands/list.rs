//! List published posts

use anyhow::Result;

use crate::BlogCms;

/// Print the first `limit` entries of the post index
pub fn run(cms: &BlogCms, limit: usize) -> Result<()> {
    let index = cms.load_index();
    let entries = index.latest(limit);

    println!("Posts ({} of {}):", entries.len(), index.len());
    for entry in entries {
        println!(
            "  {} - {} [{}] {}",
            entry.date, entry.title, entry.category, entry.link
        );
    }

    Ok(())
}
