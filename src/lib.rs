//! # gamestop-extract
//!
//! Turns GameStop Italia pages into typed game records.
//!
//! The site publishes no API and no schema for its markup. This crate reads
//! search results pages into [`GamePreview`]s and product pages into
//! [`Game`]s: titles, publishers, per-channel prices with their markdown
//! history, availability, PEGI badges, image gallery, description and
//! promotions. A page either yields a complete record or fails with
//! [`Error::MalformedDocument`]; partial records are never returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use gamestop_extract::extract_catalog;
//!
//! let html = r#"<div class="prodList"><div class="singleProduct">
//!     <a class="prodImg" href="/PS4/Games/123456/bloodborne"><img data-llsrc="https://x/c.jpg"></a>
//!     <h3>Bloodborne</h3><h4>PS4 <strong>Sony</strong></h4>
//!     <div class="buyNew"><p>19,90€</p></div>
//! </div></div>"#;
//!
//! let results = extract_catalog(html)?;
//! assert_eq!(results[0].id, 123456);
//! assert_eq!(results[0].new_price.current_price, 19.90);
//! # Ok::<(), gamestop_extract::Error>(())
//! ```
//!
//! ## Scope
//!
//! Fetching is up to the caller; [`url_utils`] builds the request URLs. All
//! functions are pure and synchronous and can run on any thread.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Search results and product page extractors.
pub mod extractor;

/// URL utilities for link resolution and request URLs.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Cause, Error, Result};
pub use options::{Options, WEBSITE_URL};
pub use result::{Channel, FindMore, Game, GamePreview, Pegi, PriceQuote, Promo};

/// Extracts every entry of a search results page.
///
/// # Arguments
///
/// * `html` - The search results page as a string slice
///
/// # Returns
///
/// The entries in page order. A results page with zero hits gives an empty
/// list; a page without a product list at all is an `Error`.
#[allow(clippy::missing_errors_doc)]
pub fn extract_catalog(html: &str) -> Result<Vec<GamePreview>> {
    let doc = dom::parse(html);
    extractor::extract_catalog(&doc)
        .inspect_err(|err| tracing::debug!(error = %err, "search results extraction aborted"))
}

/// Extracts a search results page from raw bytes, decoding the declared charset.
#[allow(clippy::missing_errors_doc)]
pub fn extract_catalog_bytes(html: &[u8]) -> Result<Vec<GamePreview>> {
    extract_catalog(&encoding::decode_html(html))
}

/// Extracts a product page using default options.
///
/// # Arguments
///
/// * `id` - The catalog id the page was requested for
/// * `html` - The product page as a string slice
///
/// # Example
///
/// ```rust
/// use gamestop_extract::{extract_game, Pegi};
///
/// let html = r#"<div class="prodTitle"><h1>Doom</h1><p><span>PS4</span></p><strong>Bethesda</strong></div>
///               <div class="ageBlock"><span class="pegi18"></span></div>"#;
/// let game = extract_game(11, html)?;
/// assert_eq!(game.summary.publisher, "Bethesda");
/// assert!(game.pegi.contains(&Pegi::Pegi18));
/// # Ok::<(), gamestop_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_game(id: u32, html: &str) -> Result<Game> {
    extract_game_with_options(id, html, &Options::default())
}

/// Extracts a product page with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_game_with_options(id: u32, html: &str, options: &Options) -> Result<Game> {
    let doc = dom::parse(html);
    extractor::extract_game(id, &doc, options).inspect_err(
        |err| tracing::debug!(catalog_id = id, error = %err, "product page extraction aborted"),
    )
}

/// Extracts a product page from raw bytes, decoding the declared charset.
#[allow(clippy::missing_errors_doc)]
pub fn extract_game_bytes(id: u32, html: &[u8]) -> Result<Game> {
    extract_game_bytes_with_options(id, html, &Options::default())
}

/// Extracts a product page from raw bytes with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_game_bytes_with_options(id: u32, html: &[u8], options: &Options) -> Result<Game> {
    extract_game_with_options(id, &encoding::decode_html(html), options)
}
