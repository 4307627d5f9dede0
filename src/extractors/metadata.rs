//! Page metadata extraction
//!
//! Assembles the title element and the common description/OpenGraph/Twitter
//! meta tags into a single record.

use scraper::{Html, Selector};

use super::Metadata;

/// Extract the metadata bundle from a parsed document
pub fn metadata(document: &Html) -> Metadata {
    let trimmed = title(document);

    Metadata {
        title: if trimmed.is_empty() { None } else { Some(trimmed) },
        description: meta_content(document, "description"),
        author: meta_content(document, "author"),
        keywords: meta_content(document, "keywords"),
        og_title: meta_content(document, "og:title"),
        og_description: meta_content(document, "og:description"),
        og_image: meta_content(document, "og:image"),
        twitter_title: meta_content(document, "twitter:title"),
        twitter_description: meta_content(document, "twitter:description"),
        twitter_image: meta_content(document, "twitter:image"),
    }
}

/// Trimmed text of the title element, empty when missing
pub fn title(document: &Html) -> String {
    let selector = match Selector::parse("title") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Content attribute of `meta[name=X]`, falling back to `meta[property=X]`.
/// The name form takes precedence; within each form the first match wins.
pub fn meta_content(document: &Html, name: &str) -> String {
    for attribute in ["name", "property"] {
        let selector_str = format!(r#"meta[{}="{}"]"#, attribute, name);
        let selector = match Selector::parse(&selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        if let Some(content) = document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
        {
            return content.to_string();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_title_and_description() {
        let html = r#"
        <html>
        <head>
            <title>Mock Test Page</title>
            <meta name="description" content="This is a test page for Scrapper library.">
        </head>
        </html>
        "#;

        let document = Html::parse_document(html);
        let meta = metadata(&document);

        assert_eq!(meta.title, Some("Mock Test Page".to_string()));
        assert_eq!(meta.description, "This is a test page for Scrapper library.");
        assert_eq!(meta.author, "");
    }

    #[test]
    fn test_metadata_opengraph_and_twitter() {
        let html = r#"
        <html>
        <head>
            <meta property="og:title" content="OG Title">
            <meta property="og:image" content="https://example.com/og.png">
            <meta name="twitter:title" content="Twitter Title">
        </head>
        </html>
        "#;

        let document = Html::parse_document(html);
        let meta = metadata(&document);

        assert_eq!(meta.og_title, "OG Title");
        assert_eq!(meta.og_image, "https://example.com/og.png");
        assert_eq!(meta.twitter_title, "Twitter Title");
        assert_eq!(meta.twitter_image, "");
    }

    #[test]
    fn test_name_takes_precedence_over_property() {
        let html = r#"
        <html>
        <head>
            <meta property="description" content="from property">
            <meta name="description" content="from name">
        </head>
        </html>
        "#;

        let document = Html::parse_document(html);
        assert_eq!(meta_content(&document, "description"), "from name");
    }

    #[test]
    fn test_empty_title_is_absent() {
        let html = "<html><head><title>   </title></head></html>";
        let document = Html::parse_document(html);

        assert_eq!(metadata(&document).title, None);
        assert_eq!(title(&document), "");
    }
}
