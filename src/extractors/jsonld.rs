//! JSON-LD extraction from HTML
//!
//! Decodes every `<script type="application/ld+json">` block. Blocks that
//! fail to decode are dropped; the rest keep document order. The values are
//! not validated against any vocabulary.

use scraper::{Html, Selector};
use serde_json::Value;

/// Extract decoded JSON-LD blocks in document order
pub fn json_ld(document: &Html) -> Vec<Value> {
    let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document
        .select(&selector)
        .filter_map(|el| {
            let content = el.text().collect::<String>();
            serde_json::from_str::<Value>(content.trim()).ok()
        })
        .collect()
}
