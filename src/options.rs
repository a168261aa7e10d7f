//! Configuration options for extraction.
//!
//! The markup vocabulary is fixed to one site, so the only knob is the site's
//! base URL: relative links found in pages are resolved against it and request
//! URLs are built from it.

use std::sync::LazyLock;

use url::Url;

/// Home page of the source site.
pub const WEBSITE_URL: &str = "https://www.gamestop.it";

#[allow(clippy::expect_used)]
static DEFAULT_BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(WEBSITE_URL).expect("WEBSITE_URL is a valid URL"));

/// Configuration options for extraction.
///
/// # Example
///
/// ```rust
/// use gamestop_extract::Options;
/// use url::Url;
///
/// let options = Options::default();
/// assert_eq!(options.base_url.as_str(), "https://www.gamestop.it/");
///
/// // Point at a mirror, e.g. a local fixture server
/// let options = Options {
///     base_url: Url::parse("http://localhost:8080").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Base URL for resolving relative links and building request URLs.
    ///
    /// Default: `https://www.gamestop.it`
    pub base_url: Url,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.clone(),
        }
    }
}
