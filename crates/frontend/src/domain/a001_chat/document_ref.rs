//! Resolving user input in the "add document" box to a document id

use once_cell::sync::Lazy;
use regex::Regex;

static DOCUMENT_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/document/d/([a-zA-Z0-9_-]+)").expect("document url pattern is valid")
});

/// Extract the id from a Google Docs URL, or return the input as-is
///
/// `https://docs.google.com/document/d/ABC123/edit` -> `ABC123`
pub fn extract_document_id(input: &str) -> String {
    DOCUMENT_URL
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_url() {
        assert_eq!(
            extract_document_id("https://docs.google.com/document/d/ABC123/edit"),
            "ABC123"
        );
        assert_eq!(
            extract_document_id("https://docs.google.com/document/d/1a-B_c9?usp=sharing"),
            "1a-B_c9"
        );
    }

    #[test]
    fn test_raw_id_passes_through() {
        assert_eq!(extract_document_id("ABC123"), "ABC123");
        assert_eq!(
            extract_document_id("https://example.com/not-a-doc"),
            "https://example.com/not-a-doc"
        );
    }
}
