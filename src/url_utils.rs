//! URL Utility Functions
//!
//! Link resolution for hrefs found in pages, and construction of the two
//! request URLs whose responses the extractors consume.

use url::{ParseError, Url};

const SEARCH_PATH: &str = "SearchResult/QuickSearch";
const GAME_PAGE_PATH: &str = "Platform/Games/";

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Convert a relative or absolute URL to absolute form.
///
/// # Arguments
/// * `url_str` - The URL to resolve (can be relative or absolute)
/// * `base` - The base URL for resolution
///
/// # Returns
/// * The absolute URL string, or the original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    if is_absolute_url(url_str) {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// URL of the quick-search results page for a free-text query.
///
/// The query is form-encoded, so spaces become `+`.
///
/// # Example
///
/// ```rust
/// use gamestop_extract::url_utils::search_url;
/// use url::Url;
///
/// let base = Url::parse("https://www.gamestop.it").unwrap();
/// let url = search_url(&base, "zelda breath").unwrap();
/// assert_eq!(url.as_str(), "https://www.gamestop.it/SearchResult/QuickSearch?q=zelda+breath");
/// ```
pub fn search_url(base: &Url, query: &str) -> Result<Url, ParseError> {
    let mut url = base.join(SEARCH_PATH)?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url)
}

/// URL of the product page for a catalog id.
pub fn game_page_url(base: &Url, id: u32) -> Result<Url, ParseError> {
    base.join(&format!("{GAME_PAGE_PATH}{id}"))
}
