//! Search results extraction.
//!
//! A results page holds one product list container with one entry per game.
//! A page without the container is not a results page at all and fails; an
//! empty container is a search with zero hits.

use crate::dom::{self, Document, Selection};
use crate::error::{Cause, Result};
use crate::extractor::price::parse_price_block;
use crate::patterns::{
    CATALOG_ID_SEGMENT, LAZY_SRC_ATTR, PRODUCT_LINK, PRODUCT_LIST, SINGLE_PRODUCT,
};
use crate::result::{Channel, GamePreview};

/// Every entry of a search results page, in page order.
///
/// # Errors
///
/// `MalformedDocument` if the product list is missing or any entry is
/// malformed. One bad entry fails the whole page: it usually means the layout
/// changed, and a re-fetch beats serving half a list.
pub fn extract_catalog(doc: &Document) -> Result<Vec<GamePreview>> {
    let root = dom::root(doc);
    let list = dom::require(&root, PRODUCT_LIST)?;

    let previews = list
        .select(SINGLE_PRODUCT)
        .iter()
        .map(|entry| parse_entry(&entry))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = previews.len(), "parsed search results");
    Ok(previews)
}

/// One search result entry.
pub fn parse_entry(entry: &Selection) -> Result<GamePreview> {
    let link = dom::require(entry, PRODUCT_LINK)?;
    let href = dom::require_attribute(&link, PRODUCT_LINK, "href")?;
    let mut preview = GamePreview::new(catalog_id(&href)?);

    preview.title = dom::text(&dom::require(entry, "h3")?);

    let subheading = dom::require(entry, "h4")?;
    preview.publisher = dom::text(&subheading.select("strong"));
    preview.platform =
        dom::leading_text(&subheading).ok_or(Cause::MissingElement("h4 text"))?;

    let cover = dom::require(&link, "img")?;
    preview.cover = dom::attribute(&cover, LAZY_SRC_ATTR);

    for channel in Channel::ALL {
        let selector = format!(".{}", channel.catalog_class());
        if let Some(block) = dom::first(entry, &selector) {
            *preview.price_mut(channel) = parse_price_block(&block)?;
        }
    }

    Ok(preview)
}

/// Catalog id from a product link such as `/PS4/Games/123456/slug`.
///
/// # Errors
///
/// [`Cause::InvalidCatalogId`] unless the id segment is a positive integer.
pub fn catalog_id(href: &str) -> Result<u32> {
    href.split('/')
        .nth(CATALOG_ID_SEGMENT)
        .and_then(|segment| segment.trim().parse::<u32>().ok())
        .filter(|&id| id > 0)
        .ok_or_else(|| Cause::InvalidCatalogId(href.to_string()).into())
}
