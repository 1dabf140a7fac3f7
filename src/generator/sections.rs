//! Section rendering

use crate::content::{Image, Section};
use crate::helpers::render_content;

/// Alt text used when the content image has none
const DEFAULT_IMAGE_ALT: &str = "Blog Content Image";

/// Render sections in order, inserting the content image once
///
/// The image goes right after the section at index `len / 2`: the exact
/// middle for an odd count, just past the middle for an even one.
pub fn render_sections(
    sections: &[Section],
    content_image: Option<&Image>,
    image_prefix: &str,
) -> String {
    let image_after = content_image
        .filter(|image| image.is_named())
        .map(|image| (sections.len() / 2, image));

    let mut html = String::new();

    for (index, section) in sections.iter().enumerate() {
        render_section(&mut html, section, index);

        if let Some((_, image)) = image_after.filter(|(at, _)| *at == index) {
            let alt = if image.alt.trim().is_empty() {
                DEFAULT_IMAGE_ALT
            } else {
                image.alt.as_str()
            };
            html.push_str(&format!(
                "    <img class=\"blog-image\" src=\"{}{}\" alt=\"{}\">\n",
                image_prefix, image.name, alt
            ));
        }
    }

    html
}

fn render_section(html: &mut String, section: &Section, index: usize) {
    html.push_str(&format!(
        "    <section id=\"{}\" class=\"blog-section\">\n",
        section.anchor(index)
    ));

    if section.has_title() {
        html.push_str(&format!("      <h2>{}</h2>\n", section.title));
    }

    if !section.subsections.is_empty() {
        for (sub_index, subsection) in section.subsections.iter().enumerate() {
            // Separates the section heading from its first sub-heading
            if sub_index == 0 && section.has_title() {
                html.push_str("      <br>\n");
            }
            html.push_str(&format!("      <h3>{}</h3>\n", subsection.title));
            push_content(html, &subsection.content);
        }
    } else {
        push_content(html, &section.content);
    }

    html.push_str("    </section>\n");
}

fn push_content(html: &mut String, content: &str) {
    let rendered = render_content(content);
    if !rendered.is_empty() {
        html.push_str(&rendered);
        html.push('\n');
    }
}
