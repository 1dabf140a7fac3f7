//! FAQ accordion rendering

use crate::content::Faq;

/// Render FAQs as an accordion; the first item starts expanded
///
/// Items are numbered from 1. Each trigger (`faqHeading{n}`) and panel
/// (`faqCollapse{n}`) reference each other by that number.
pub fn render_faqs(faqs: &[Faq]) -> String {
    if faqs.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        r#"    <section id="faqs" class="faq-section">
      <h2>FAQs</h2>
      <div class="accordion" id="faqAccordion">"#,
    );

    for (index, faq) in faqs.iter().enumerate() {
        let n = index + 1;
        let open = index == 0;
        html.push_str(&format!(
            r##"
        <div class="accordion-item">
          <h2 class="accordion-header" id="faqHeading{n}">
            <button class="accordion-button{button_class}" type="button" data-bs-toggle="collapse" data-bs-target="#faqCollapse{n}" aria-expanded="{open}" aria-controls="faqCollapse{n}">
              {question}
            </button>
          </h2>
          <div id="faqCollapse{n}" class="accordion-collapse collapse{panel_class}" aria-labelledby="faqHeading{n}" data-bs-parent="#faqAccordion">
            <div class="accordion-body">
              {answer}
            </div>
          </div>
        </div>"##,
            n = n,
            button_class = if open { "" } else { " collapsed" },
            panel_class = if open { " show" } else { "" },
            open = open,
            question = faq.question,
            answer = faq.answer,
        ));
    }

    html.push_str(
        r#"
      </div>
    </section>
"#,
    );

    html
}
