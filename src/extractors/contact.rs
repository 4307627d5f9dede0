//! Contact identifier extraction
//!
//! Regex scanners over the document's flattened text for email addresses and
//! phone numbers. The grammars are deliberately liberal and over-matching on
//! numeric strings is a known limitation, not a defect.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::ContactInfo;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{1,4}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,5}[-.\s]?\d{1,5}[-.\s]?\d{1,9}")
        .unwrap()
});

/// Extract email addresses from text, deduplicated in first-seen order
pub fn extract_emails(text: &str) -> Vec<String> {
    dedup_preserving(EMAIL_RE.find_iter(text).map(|m| m.as_str().to_string()))
}

/// Extract phone numbers from text, deduplicated in first-seen order
pub fn extract_phones(text: &str) -> Vec<String> {
    dedup_preserving(PHONE_RE.find_iter(text).map(|m| m.as_str().to_string()))
}

/// Both contact products in one record
pub fn contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        emails: extract_emails(text),
        phones: extract_phones(text),
    }
}

fn dedup_preserving(matches: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for m in matches {
        if seen.insert(m.clone()) {
            out.push(m);
        }
    }
    out
}
