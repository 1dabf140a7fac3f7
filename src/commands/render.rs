//! Render a document without publishing it

use anyhow::Result;
use std::path::Path;

use super::create::read_document;
use crate::BlogCms;

/// Print the rendered page for the JSON document at `path`
pub fn run(cms: &BlogCms, path: &Path) -> Result<()> {
    let doc = cms.prepare(read_document(path)?)?;
    print!("{}", cms.render(&doc)?);
    Ok(())
}
