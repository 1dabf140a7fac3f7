//! Content module - the canonical blog document and the input sources feeding it

mod document;
pub mod extract;
pub mod form;
pub mod import;

pub use document::{BlogDocument, Faq, Image, Section, Subsection};
pub use extract::extract_sections;
pub use form::{decode_form, decode_wysiwyg_form, FormFields};
