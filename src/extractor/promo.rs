//! Promotion blocks.
//!
//! A promotion is a heading plus paragraphs. Promotions with a "find more"
//! link have at least three paragraphs: the first one doubles as the link
//! label and the second one carries the link itself.

use url::Url;

use crate::dom::{self, Selection};
use crate::error::{Cause, Result};
use crate::patterns::SINGLE_PROMO;
use crate::result::{FindMore, Promo};
use crate::url_utils::create_absolute_url;

/// Every promotion inside a promotions container, in page order.
pub fn extract_promos(container: &Selection, base: &Url) -> Result<Vec<Promo>> {
    container
        .select(SINGLE_PROMO)
        .iter()
        .map(|block| parse_promo(&block, base))
        .collect()
}

/// One promotion block.
///
/// # Errors
///
/// `MalformedDocument` when the block has no paragraph, or when a
/// find-more block's second paragraph has no link.
pub fn parse_promo(block: &Selection, base: &Url) -> Result<Promo> {
    let title = dom::text(&block.select("h4"));
    let paragraphs: Vec<_> = block.select("p").iter().collect();

    let Some(first) = paragraphs.first().map(dom::text) else {
        return Err(Cause::MissingElement("p").into());
    };

    let find_more = match paragraphs.get(1) {
        Some(second) if paragraphs.len() > 2 => {
            let link = dom::require(second, "a")?;
            let href = dom::require_attribute(&link, "p > a", "href")?;
            Some(FindMore {
                label: first.clone(),
                url: create_absolute_url(&href, base),
            })
        }
        _ => None,
    };

    Ok(Promo {
        title,
        text: first,
        find_more,
    })
}
