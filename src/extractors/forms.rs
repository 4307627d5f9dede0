//! Form descriptor extraction

use scraper::{Html, Selector};

use super::FormDetails;

/// Describe every form in the document: action, method and field names
pub fn forms(document: &Html) -> Vec<FormDetails> {
    let form_selector = match Selector::parse("form") {
        Ok(s) => s,
        Err(_) => return vec![],
    };
    let field_selector = match Selector::parse("input, textarea, select") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document
        .select(&form_selector)
        .map(|form| {
            let inputs = form
                .select(&field_selector)
                .map(|field| {
                    field
                        .value()
                        .attr("name")
                        .or_else(|| field.value().attr("id"))
                        .unwrap_or("unknown")
                        .to_string()
                })
                .collect();

            FormDetails {
                action: form.value().attr("action").unwrap_or("").to_string(),
                method: form.value().attr("method").unwrap_or("GET").to_string(),
                inputs,
            }
        })
        .collect()
}
