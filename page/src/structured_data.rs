//! schema.org `FAQPage` markup for search engines.
//!
//! Emitted by [`PageDocument`](crate::components::PageDocument) as a
//! `<script type="application/ld+json">` block in the head.

use crate::types::FaqEntry;
use serde::Serialize;

#[derive(Serialize)]
struct FaqPage<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<Question<'a>>,
}

#[derive(Serialize)]
struct Question<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer<'a>,
}

#[derive(Serialize)]
struct Answer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'a str,
}

/// Serializes `faqs` as a JSON-LD `FAQPage`, safe to inline in `<script>`.
pub fn faq_json_ld(faqs: &[FaqEntry]) -> serde_json::Result<String> {
    let page = FaqPage {
        context: "https://schema.org",
        kind: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question,
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer,
                },
            })
            .collect(),
    };

    let json = serde_json::to_string(&page)?;
    // a literal "</" would let the text close the surrounding <script>
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn lists_every_question_in_order() {
        let json: Value = serde_json::from_str(&faq_json_ld(FAQS).unwrap()).unwrap();

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "FAQPage");

        let entities = json["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), FAQS.len());
        for (entity, faq) in entities.iter().zip(FAQS) {
            assert_eq!(entity["@type"], "Question");
            assert_eq!(entity["name"], faq.question);
            assert_eq!(entity["acceptedAnswer"]["text"], faq.answer);
        }
    }

    #[test]
    fn closing_tags_are_neutralised() {
        let faqs = [FaqEntry {
            question: "Is </script> safe?",
            answer: "Yes.",
        }];
        let json = faq_json_ld(&faqs).unwrap();
        assert!(!json.contains("</script>"));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["mainEntity"][0]["name"], "Is </script> safe?");
    }
}
