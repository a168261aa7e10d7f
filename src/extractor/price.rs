//! Price parsing.
//!
//! Prices are printed in the Italian locale (`1.249,99 €`). A channel block
//! shows either one bare price, or several prices each wrapped in a marker
//! element when the price was cut: the first marker is the live price, the
//! rest are superseded ones in the order the page lists them.

use crate::dom::{self, Selection};
use crate::error::{Cause, Result};
use crate::patterns::{NON_PRICE_CHARS, PRICE_MARKER, PURCHASE_ENABLED};
use crate::result::PriceQuote;

/// Parse a localized price string.
///
/// Everything but digits, `,` and `.` is dropped, `.` thousands separators
/// are removed and the decimal `,` becomes a point.
///
/// # Errors
///
/// [`Cause::InvalidPrice`] when no number remains.
///
/// # Example
///
/// ```rust
/// use gamestop_extract::extractor::price::string_to_price;
///
/// assert_eq!(string_to_price("1.249,99 €")?, 1249.99);
/// assert_eq!(string_to_price("19,90€")?, 19.90);
/// # Ok::<(), gamestop_extract::Error>(())
/// ```
pub fn string_to_price(raw: &str) -> Result<f64> {
    let kept = NON_PRICE_CHARS.replace_all(raw, "");
    let normalized = kept.replace('.', "").replace(',', ".");

    normalized
        .parse::<f64>()
        .map_err(|_| Cause::InvalidPrice(raw.trim().to_string()).into())
}

/// Parse one channel block of a search result entry.
///
/// Availability comes from the block's buy button: only the two enabled
/// button signatures count as purchasable.
pub fn parse_price_block(block: &Selection) -> Result<PriceQuote> {
    let available = PURCHASE_ENABLED
        .iter()
        .any(|signature| dom::has_exact_class(block, signature));

    let markers = block.select(PRICE_MARKER);
    if markers.is_empty() {
        let current = string_to_price(&dom::text(block))?;
        return Ok(quote(current, Vec::new(), available));
    }

    let mut prices = markers
        .iter()
        .map(|marker| string_to_price(&dom::text(&marker)))
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    // `markers` is non-empty, so there is always a first price
    let current = prices.next().unwrap_or_default();
    Ok(quote(current, prices.collect(), available))
}

/// Parse every element matching `selector` under `scope` as a price.
pub(crate) fn prices_of(scope: &Selection, selector: &str) -> Result<Vec<f64>> {
    scope
        .select(selector)
        .iter()
        .map(|el| string_to_price(&dom::text(&el)))
        .collect()
}

/// Assemble a quote, keeping old prices in order but never one equal to the
/// current price.
#[allow(clippy::float_cmp)]
pub(crate) fn quote(current_price: f64, old_prices: Vec<f64>, available: bool) -> PriceQuote {
    let old_prices = old_prices
        .into_iter()
        .filter(|&old| {
            let repeat = old == current_price;
            if repeat {
                tracing::debug!(price = old, "dropping old price equal to current price");
            }
            !repeat
        })
        .collect();

    PriceQuote {
        current_price,
        old_prices,
        available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn block(html: &str) -> dom_query::Document {
        dom::parse(html)
    }

    #[test]
    fn string_to_price_handles_locale_formats() {
        assert_eq!(string_to_price("1.249,99 €").unwrap(), 1249.99);
        assert_eq!(string_to_price("19,90€").unwrap(), 19.90);
        assert_eq!(string_to_price("0,99").unwrap(), 0.99);
        assert_eq!(string_to_price("Prezzo: 70 €").unwrap(), 70.0);
    }

    #[test]
    fn string_to_price_rejects_text_without_digits() {
        for raw in ["", "Gratis", "€", ".", ","] {
            let err = string_to_price(raw).unwrap_err();
            assert!(
                matches!(err, Error::MalformedDocument(Cause::InvalidPrice(_))),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn string_to_price_rejects_two_decimal_commas() {
        assert!(string_to_price("49,99 39,99").is_err());
    }

    #[test]
    fn single_price_block_has_no_history() {
        let doc = block(
            r#"<div class="buyNew"><p>59,99€</p>
               <a class="megaButton buyTier3 cartAddNoRadio">Compra</a></div>"#,
        );
        let quote = parse_price_block(&doc.select(".buyNew")).unwrap();

        assert_eq!(quote.current_price, 59.99);
        assert!(quote.old_prices.is_empty());
        assert!(quote.available);
    }

    #[test]
    fn marker_order_is_preserved_not_sorted() {
        let doc = block(
            r#"<div class="buyNew">
                 <em>59,99€</em><em>49,99€</em><em>39,99€</em>
                 <a class="megaButton buyTier3 buyDisabled">Non disponibile</a>
               </div>"#,
        );
        let quote = parse_price_block(&doc.select(".buyNew")).unwrap();

        assert_eq!(quote.current_price, 59.99);
        assert_eq!(quote.old_prices, vec![49.99, 39.99]);
        assert!(!quote.available);
    }

    #[test]
    fn ascending_markers_stay_ascending() {
        let doc = block(r#"<div class="buyUsed"><em>9,99</em><em>19,99</em><em>29,99</em></div>"#);
        let quote = parse_price_block(&doc.select(".buyUsed")).unwrap();

        assert_eq!(quote.old_prices, vec![19.99, 29.99]);
    }

    #[test]
    fn preorder_button_signature_counts_as_available() {
        let doc = block(
            r#"<div class="buyPresell"><p>69,99€</p><a class="megaButton cartAddNoRadio">Prenota</a></div>"#,
        );
        let quote = parse_price_block(&doc.select(".buyPresell")).unwrap();

        assert!(quote.available);
    }

    #[test]
    fn unparsable_marker_fails_the_block() {
        let doc = block(r#"<div class="buyNew"><em>59,99€</em><em>n/d</em></div>"#);
        assert!(parse_price_block(&doc.select(".buyNew")).is_err());
    }

    #[test]
    fn old_price_equal_to_current_is_dropped() {
        let quote = quote(10.0, vec![10.0, 12.0], true);
        assert_eq!(quote.old_prices, vec![12.0]);
    }
}
