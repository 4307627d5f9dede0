//! Parsed document handle and selector-bound extractors
//!
//! [`Page`] owns one parsed HTML tree plus the base URL it was retrieved
//! from. It is immutable after construction; every extractor is a read-only
//! query. Selector-based extractors never error: a malformed selector or an
//! empty match set yields the type's natural empty value.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::extractors::{
    self, ContactInfo, FormDetails, ImageData, Metadata, TableMatrix,
};
use crate::urls::resolve;

/// A parsed HTML document bound to an optional retrieval base URL
pub struct Page {
    document: Html,
    base_url: Option<Url>,
}

impl Page {
    /// Parse an HTML string with no retrieval base
    pub fn parse(html: &str) -> Self {
        Self::with_base(html, None)
    }

    /// Parse an HTML string retrieved from `base_url`
    pub fn with_base(html: &str, base_url: Option<Url>) -> Self {
        Self {
            document: Html::parse_document(html),
            base_url,
        }
    }

    /// The underlying parsed tree
    pub fn document(&self) -> &Html {
        &self.document
    }

    /// All elements matching a CSS selector
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(s) => self.document.select(&s).collect(),
            Err(_) => vec![],
        }
    }

    /// Number of elements matching the selector
    pub fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }

    /// Whether any element matches the selector
    pub fn exists(&self, selector: &str) -> bool {
        self.count(selector) > 0
    }

    /// Concatenated text of all matching elements, empty when none match
    pub fn text(&self, selector: &str) -> String {
        self.select(selector)
            .iter()
            .flat_map(|el| el.text())
            .collect()
    }

    /// Inner HTML of the first matching element, empty when none match
    pub fn html(&self, selector: &str) -> String {
        self.select(selector)
            .first()
            .map(|el| el.inner_html())
            .unwrap_or_default()
    }

    /// Outer HTML of the first matching element, empty when none match
    pub fn outer_html(&self, selector: &str) -> String {
        self.select(selector)
            .first()
            .map(|el| el.html())
            .unwrap_or_default()
    }

    /// Attribute value of the first matching element
    pub fn attr(&self, selector: &str, attribute: &str) -> Option<String> {
        self.select(selector)
            .first()
            .and_then(|el| el.value().attr(attribute))
            .map(String::from)
    }

    /// Trimmed text of the `li` descendants of every match, document order
    pub fn text_list(&self, selector: &str) -> Vec<String> {
        let item_selector = match Selector::parse("li") {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        self.select(selector)
            .iter()
            .flat_map(|el| el.select(&item_selector))
            .map(|item| item.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// `href` of every matching element, normalized against the effective
    /// base URL; elements without the attribute are dropped
    pub fn links(&self, selector: &str) -> Vec<String> {
        self.collect_attr(selector, "href")
    }

    /// `src` of every matching element, normalized against the effective
    /// base URL; elements without the attribute are dropped
    pub fn image_sources(&self, selector: &str) -> Vec<String> {
        self.collect_attr(selector, "src")
    }

    /// Image references with normalized `src` and optional `alt`
    pub fn images(&self, selector: &str) -> Vec<ImageData> {
        let base = self.effective_base();

        self.select(selector)
            .iter()
            .filter_map(|el| {
                let src = el.value().attr("src")?;
                Some(ImageData {
                    src: self.normalize(src, &base),
                    alt: el.value().attr("alt").map(String::from),
                })
            })
            .collect()
    }

    /// Page metadata: title plus description/OpenGraph/Twitter meta tags
    pub fn metadata(&self) -> Metadata {
        extractors::metadata(&self.document)
    }

    /// Trimmed text of the title element
    pub fn title(&self) -> String {
        extractors::title(&self.document)
    }

    /// Descriptors for every form in the document
    pub fn forms(&self) -> Vec<FormDetails> {
        extractors::forms(&self.document)
    }

    /// Cell matrices for every table matched by the selector
    pub fn table_data(&self, selector: &str) -> Vec<TableMatrix> {
        extractors::table_data(&self.document, selector)
    }

    /// Decoded JSON-LD blocks, invalid blocks dropped
    pub fn json_ld(&self) -> Vec<serde_json::Value> {
        extractors::json_ld(&self.document)
    }

    /// Email addresses found in the document text, first-seen order
    pub fn extract_emails(&self) -> Vec<String> {
        extractors::extract_emails(&self.full_text())
    }

    /// Phone numbers found in the document text, first-seen order
    pub fn extract_phones(&self) -> Vec<String> {
        extractors::extract_phones(&self.full_text())
    }

    /// Emails and phones in one record
    pub fn contact_info(&self) -> ContactInfo {
        extractors::contact_info(&self.full_text())
    }

    /// Flattened text of the whole document
    fn full_text(&self) -> String {
        self.document.root_element().text().collect()
    }

    /// The document's `base[href]` if declared, else the retrieval base URL
    fn effective_base(&self) -> Option<String> {
        self.attr("base[href]", "href")
            .or_else(|| self.base_url.as_ref().map(|u| u.to_string()))
    }

    fn normalize(&self, reference: &str, base: &Option<String>) -> String {
        match base {
            Some(b) => resolve(reference, b),
            None => reference.to_string(),
        }
    }

    fn collect_attr(&self, selector: &str, attribute: &str) -> Vec<String> {
        let base = self.effective_base();

        self.select(selector)
            .iter()
            .filter_map(|el| el.value().attr(attribute))
            .map(|value| self.normalize(value, &base))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
    <html>
    <head><title>Fixture</title></head>
    <body>
        <h1 id="heading">Hello</h1>
        <p class="intro">First</p>
        <p class="intro">Second</p>
        <ul class="menu">
            <li> Home </li>
            <li>About</li>
        </ul>
        <a href="/page1">One</a>
        <a href="https://other.com/page2">Two</a>
        <a>No href</a>
        <img src="/logo.png" alt="Logo">
        <img src="https://cdn.example.com/pic.jpg">
    </body>
    </html>
    "#;

    fn fixture_page() -> Page {
        let base = Url::parse("https://example.com/dir/").ok();
        Page::with_base(FIXTURE, base)
    }

    #[test]
    fn test_no_match_yields_empty_values() {
        let page = fixture_page();

        assert_eq!(page.count(".missing"), 0);
        assert!(!page.exists(".missing"));
        assert_eq!(page.text(".missing"), "");
        assert_eq!(page.html(".missing"), "");
        assert_eq!(page.outer_html(".missing"), "");
        assert_eq!(page.attr(".missing", "href"), None);
        assert!(page.text_list(".missing").is_empty());
    }

    #[test]
    fn test_malformed_selector_yields_empty_values() {
        let page = fixture_page();

        assert_eq!(page.count(":::bad:::"), 0);
        assert_eq!(page.text(":::bad:::"), "");
        assert!(page.links(":::bad:::").is_empty());
    }

    #[test]
    fn test_count_and_exists() {
        let page = fixture_page();

        assert_eq!(page.count("p.intro"), 2);
        assert!(page.exists("h1"));
        assert!(!page.exists("h2"));
    }

    #[test]
    fn test_text_concatenates_all_matches() {
        let page = fixture_page();
        assert_eq!(page.text("p.intro"), "FirstSecond");
    }

    #[test]
    fn test_html_and_outer_html() {
        let page = fixture_page();

        assert_eq!(page.html("h1"), "Hello");
        assert_eq!(page.outer_html("h1"), r#"<h1 id="heading">Hello</h1>"#);
    }

    #[test]
    fn test_attr_first_match() {
        let page = fixture_page();

        assert_eq!(page.attr("a", "href"), Some("/page1".to_string()));
        assert_eq!(page.attr("h1", "href"), None);
    }

    #[test]
    fn test_text_list_trims_items() {
        let page = fixture_page();
        assert_eq!(page.text_list("ul.menu"), vec!["Home", "About"]);
    }

    #[test]
    fn test_links_normalized_against_base() {
        let page = fixture_page();

        assert_eq!(
            page.links("a"),
            vec!["https://example.com/page1", "https://other.com/page2"]
        );
    }

    #[test]
    fn test_image_sources_normalized() {
        let page = fixture_page();

        assert_eq!(
            page.image_sources("img"),
            vec![
                "https://example.com/logo.png",
                "https://cdn.example.com/pic.jpg"
            ]
        );
    }

    #[test]
    fn test_images_carry_alt() {
        let page = fixture_page();
        let images = page.images("img");

        assert_eq!(images[0].alt, Some("Logo".to_string()));
        assert_eq!(images[1].alt, None);
    }

    #[test]
    fn test_base_element_overrides_retrieval_base() {
        let html = r#"
        <html>
        <head><base href="https://cdn.example.com/assets/"></head>
        <body><a href="x.html">x</a></body>
        </html>
        "#;

        let base = Url::parse("https://example.com/").ok();
        let page = Page::with_base(html, base);

        assert_eq!(page.links("a"), vec!["https://cdn.example.com/assets/x.html"]);
    }

    #[test]
    fn test_no_base_passes_links_through() {
        let page = Page::parse(r#"<a href="/page1">x</a>"#);
        assert_eq!(page.links("a"), vec!["/page1"]);
    }

    #[test]
    fn test_contact_extraction_over_document_text() {
        let html = r#"
        <html><body>
            <p>Write to info@example.com</p>
            <span>or info@example.com, call +1 555 123 4567</span>
        </body></html>
        "#;

        let page = Page::parse(html);
        assert_eq!(page.extract_emails(), vec!["info@example.com"]);
        assert_eq!(page.extract_phones(), vec!["+1 555 123 4567"]);

        let info = page.contact_info();
        assert_eq!(info.emails.len(), 1);
        assert_eq!(info.phones.len(), 1);
    }
}
