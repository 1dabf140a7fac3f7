//! Text helpers shared by the renderer
//!
//! Slug and display-date normalization plus the rich-content normalizer
//! used when section bodies are written into the page.

mod date;
mod html;
mod json;
mod slug;
mod url;

pub use date::*;
pub use html::*;
pub use json::*;
pub use slug::*;
pub use url::*;
