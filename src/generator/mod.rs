//! Generator module - renders the document model into page fragments
//!
//! Each fragment is a plain string ready to be spliced into the page
//! template: the section list, the FAQ accordion and the JSON-LD block.

mod faq;
mod sections;
mod structured_data;

pub use faq::render_faqs;
pub use sections::render_sections;
pub use structured_data::{build_structured_data, generate_json_ld, ArticleMeta};
