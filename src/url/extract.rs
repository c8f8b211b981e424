//! HTTPS URL extraction from free text
//!
//! Scans arbitrary text blobs (typically HTML fragments of anchor tags) for
//! `https://` URLs. The scan is case-insensitive on the scheme; each URL
//! runs until the first terminator character or the end of input.

use std::collections::HashSet;

/// Characters that end a URL inside a text blob
const TERMINATORS: [char; 5] = [' ', '"', '\'', '\n', '<'];

/// Extracts every HTTPS URL found in `text`, in order of appearance
///
/// The scan resumes immediately after the end of each extracted URL, so
/// matches cannot overlap. Duplicates are kept; callers that need unique
/// URLs apply [`dedup_preserving_order`].
///
/// # Examples
///
/// ```
/// use trendscout::url::extract_https_urls;
///
/// let text = r#"<a href='https://a.com/x'>link</a> see https://b.com"#;
/// assert_eq!(extract_https_urls(text), vec!["https://a.com/x", "https://b.com"]);
/// ```
pub fn extract_https_urls(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut urls = Vec::new();
    let mut i = 0;

    while i + 8 <= bytes.len() {
        if !bytes[i..i + 8].eq_ignore_ascii_case(b"https://") {
            i += 1;
            continue;
        }

        // The match starts on ASCII 'h', so `i` is a char boundary
        let rest = &text[i..];
        let end = rest
            .char_indices()
            .find(|(_, c)| TERMINATORS.contains(c))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());

        urls.push(rest[..end].to_string());
        i += end;
    }

    urls
}

/// Removes duplicate URLs, keeping the first occurrence of each
pub fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter().filter(|u| seen.insert(u.clone())).collect()
}
