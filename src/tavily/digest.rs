use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{ResultRecord, SearchDigest, SearchResponse, SourceRecord};

const SNIPPET_CHARS: usize = 250;
const ELLIPSIS: &str = "...";

static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Collapse newline runs to a single newline and space/tab runs to a single
/// space, then trim. Idempotent.
pub fn clean_text(text: &str) -> String {
    let text = NEWLINE_RUNS.replace_all(text, "\n");
    let text = BLANK_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}

/// Project a raw response into its three display views.
///
/// Total over any decodable response: missing fields resolve to defaults,
/// and the three projections never affect each other.
pub fn digest_response(response: &SearchResponse) -> SearchDigest {
    let answer = clean_text(response.answer.as_deref().unwrap_or(""));

    let sources = response.results.iter().map(project_source).collect();

    let mut images = BTreeMap::new();
    for image in &response.images {
        // A record without a URL has no key to map under; skip it.
        // Duplicate URLs keep the description seen last.
        if let Some(url) = image.url.as_ref() {
            images.insert(url.clone(), image.description.clone().unwrap_or_default());
        }
    }

    SearchDigest {
        answer,
        sources,
        images,
    }
}

fn project_source(record: &ResultRecord) -> SourceRecord {
    SourceRecord {
        title: field_or(&record.title, "No title"),
        url: field_or(&record.url, "#"),
        published_date: field_or(&record.published_date, "No date"),
        content: snippet(record.content.as_deref().unwrap_or("No description available")),
    }
}

fn field_or(field: &Option<String>, default: &str) -> String {
    field.clone().unwrap_or_else(|| default.to_string())
}

/// First 250 characters of the content plus an ellipsis marker. The marker
/// is appended unconditionally, and truncation counts characters rather than
/// bytes so multi-byte content never splits a code point.
fn snippet(content: &str) -> String {
    let mut out: String = content.chars().take(SNIPPET_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}
