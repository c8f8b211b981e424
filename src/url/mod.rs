//! URL handling module for trendscout
//!
//! This module decides whether a discovered link belongs to the site being
//! crawled, recognizes well-known content-subpage slugs, and extracts HTTPS
//! URLs out of free text.

mod extract;

pub use extract::{dedup_preserving_order, extract_https_urls};

use url::Url;

/// Returns true if `href` points at the same network location as `base`
///
/// The comparison is made on the raw href: a relative href does not parse as
/// an absolute URL and is therefore never internal. Relative links to known
/// content subpages are picked up by [`is_common_subpage`] instead, and only
/// then resolved against the base.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use trendscout::url::is_internal_url;
///
/// let base = Url::parse("https://example.com/x").unwrap();
/// assert!(is_internal_url(&base, "https://example.com/y"));
/// assert!(!is_internal_url(&base, "https://other.com/y"));
/// assert!(!is_internal_url(&base, "/relative"));
/// ```
pub fn is_internal_url(base: &Url, href: &str) -> bool {
    match Url::parse(href) {
        Ok(candidate) => {
            candidate.host_str() == base.host_str()
                && candidate.port_or_known_default() == base.port_or_known_default()
        }
        Err(_) => false,
    }
}

/// Returns true if `href`, trimmed of slashes and lowercased, is one of the
/// recognized content-subpage slugs
///
/// Applied to the raw, unresolved href attribute. A nested relative path
/// such as `../about-us` does not match; only bare segments do.
pub fn is_common_subpage(href: &str, slugs: &[String]) -> bool {
    let trimmed = href.trim_matches('/').to_lowercase();
    slugs.iter().any(|s| s == &trimmed)
}
