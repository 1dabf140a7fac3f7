//! schema.org JSON-LD generation

use serde_json::{json, Value};

use crate::content::Faq;
use crate::helpers::{to_pretty_json, today_iso};

/// Headline used when a post has no title
const DEFAULT_HEADLINE: &str = "Blog Post";

/// Post metadata used for the Article schema
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleMeta<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub date: Option<&'a str>,
    /// Publisher name, also the author fallback
    pub publisher: &'a str,
}

/// Build the JSON-LD script block for a page
///
/// A non-blank `custom` payload that parses as JSON is embedded verbatim.
/// Anything else falls back to a generated FAQPage (when there are FAQs)
/// or Article schema.
pub fn build_structured_data(
    custom: Option<&str>,
    faqs: &[Faq],
    meta: &ArticleMeta<'_>,
) -> String {
    if let Some(custom) = custom.filter(|c| !c.trim().is_empty()) {
        match serde_json::from_str::<Value>(custom) {
            Ok(_) => {
                tracing::info!("Using custom JSON-LD");
                return script_block(custom);
            }
            Err(e) => {
                tracing::warn!("Invalid custom JSON-LD, falling back to generated: {}", e);
            }
        }
    } else {
        tracing::debug!("Using generated JSON-LD");
    }

    let value = generate_json_ld(faqs, meta);
    let body = to_pretty_json(&value).unwrap_or_else(|_| value.to_string());
    script_block(&body)
}

/// Generate the schema.org payload: FAQPage when FAQs exist, else Article
pub fn generate_json_ld(faqs: &[Faq], meta: &ArticleMeta<'_>) -> Value {
    if !faqs.is_empty() {
        let questions: Vec<Value> = faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": faq.answer
                    }
                })
            })
            .collect();

        return json!({
            "@context": "https://schema.org",
            "@type": "FAQPage",
            "mainEntity": questions
        });
    }

    let headline = non_blank(meta.title).unwrap_or(DEFAULT_HEADLINE);
    let author = non_blank(meta.author).unwrap_or(meta.publisher);
    let date = meta
        .date
        .and_then(non_blank)
        .map(str::to_string)
        .unwrap_or_else(today_iso);

    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": headline,
        "author": {
            "@type": "Person",
            "name": author
        },
        "datePublished": date,
        "publisher": {
            "@type": "Organization",
            "name": meta.publisher
        }
    })
}

fn script_block(body: &str) -> String {
    format!(
        "  <script type=\"application/ld+json\">\n  {}\n  </script>",
        body
    )
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
