use crate::session::Session;

const NO_ANSWER: &str = "Search for something to see the answer here.";
const NO_SOURCES: &str = "No sources to display yet.";
const NO_IMAGES: &str = "No images available for this query.";

pub fn render_answer(session: &Session) -> String {
    if session.answer.is_empty() {
        return NO_ANSWER.to_string();
    }
    // The cleaned answer uses single newlines as paragraph breaks; widen
    // them so paragraphs read as paragraphs in the terminal.
    session.answer.replace('\n', "\n\n")
}

pub fn render_sources(session: &Session) -> String {
    if session.sources.is_empty() {
        return NO_SOURCES.to_string();
    }

    let mut output = String::new();
    for (i, source) in session.sources.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}\n   {}\n   {}\n   {}\n",
            i + 1,
            source.title,
            source.url,
            source.published_date,
            source.content
        ));
    }
    output
}

pub fn render_images(session: &Session) -> String {
    if session.images.is_empty() {
        return NO_IMAGES.to_string();
    }

    let mut output = String::new();
    for (url, description) in &session.images {
        if description.is_empty() {
            output.push_str(&format!("- {url}\n"));
        } else {
            output.push_str(&format!("- {url}\n  {description}\n"));
        }
    }
    output
}

/// The full report for one interaction: answer, sources, and images under
/// their own headings, with placeholders where a view is empty.
pub fn render(session: &Session) -> String {
    // Section bodies may or may not end with a newline; normalize the
    // separator here rather than relying on it.
    format!(
        "## Answer\n\n{}\n\n## Sources\n\n{}\n\n## Images\n\n{}",
        render_answer(session).trim_end(),
        render_sources(session).trim_end(),
        render_images(session).trim_end()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tavily::types::{SearchDigest, SourceRecord};
    use std::collections::BTreeMap;

    fn populated_session() -> Session {
        let mut session = Session::new();
        session.replace(SearchDigest {
            answer: "First paragraph\nSecond paragraph".to_string(),
            sources: vec![SourceRecord {
                title: "Example".to_string(),
                url: "https://example.com".to_string(),
                published_date: "2025-01-01".to_string(),
                content: "snippet...".to_string(),
            }],
            images: BTreeMap::from([
                ("https://a.com/1.png".to_string(), "caption".to_string()),
                ("https://b.com/2.png".to_string(), String::new()),
            ]),
        });
        session
    }

    #[test]
    fn empty_session_renders_placeholders() {
        let session = Session::new();
        assert_eq!(render_answer(&session), NO_ANSWER);
        assert_eq!(render_sources(&session), NO_SOURCES);
        assert_eq!(render_images(&session), NO_IMAGES);
    }

    #[test]
    fn answer_widens_paragraph_breaks() {
        let session = populated_session();
        assert_eq!(
            render_answer(&session),
            "First paragraph\n\nSecond paragraph"
        );
    }

    #[test]
    fn sources_are_numbered_with_all_fields() {
        let text = render_sources(&populated_session());
        assert!(text.starts_with("1. Example\n"));
        assert!(text.contains("https://example.com"));
        assert!(text.contains("2025-01-01"));
        assert!(text.contains("snippet..."));
    }

    #[test]
    fn images_list_urls_and_captions() {
        let text = render_images(&populated_session());
        assert!(text.contains("- https://a.com/1.png\n  caption\n"));
        // No caption line for an empty description.
        assert!(text.contains("- https://b.com/2.png\n"));
        assert!(!text.contains("2.png\n  \n"));
    }

    #[test]
    fn full_render_has_all_sections() {
        let text = render(&populated_session());
        assert!(text.contains("## Answer"));
        assert!(text.contains("## Sources"));
        assert!(text.contains("## Images"));
    }

    #[test]
    fn full_render_separates_sections_with_blank_lines() {
        for session in [Session::new(), populated_session()] {
            let text = render(&session);
            for heading in ["## Sources", "## Images"] {
                let at = text.find(heading).unwrap();
                assert!(
                    text[..at].ends_with("\n\n"),
                    "missing blank line before {heading}: {text:?}"
                );
            }
        }
    }
}
