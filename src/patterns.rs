//! Compiled regex patterns and the site's markup vocabulary.
//!
//! Class names, ids and locale strings are the only coupling between the
//! extractors and the page layout. They live here so a layout change is a
//! one-file edit.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Price Patterns
// =============================================================================

/// Everything that cannot be part of a localized price (`1.249,99`).
pub static NON_PRICE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,]").expect("NON_PRICE_CHARS regex"));

// =============================================================================
// Search Results
// =============================================================================

pub const PRODUCT_LIST: &str = ".prodList";
pub const SINGLE_PRODUCT: &str = ".singleProduct";
/// Link to the product page; also wraps the cover image.
pub const PRODUCT_LINK: &str = ".prodImg";
/// Lazy-loaded cover source on the `<img>` inside [`PRODUCT_LINK`].
pub const LAZY_SRC_ATTR: &str = "data-llsrc";
/// Position of the catalog id in `/PS4/Games/123456/slug`.
pub const CATALOG_ID_SEGMENT: usize = 3;

/// Marker wrapping each price when a channel shows more than one.
pub const PRICE_MARKER: &str = "em";

/// Full class strings of a buy button that can be pressed.
///
/// New and used blocks use the tiered button, preorder blocks the plain one.
/// Disabled buttons carry `buyDisabled` in place of `cartAddNoRadio`.
pub const PURCHASE_ENABLED: [&str; 2] = [
    "megaButton buyTier3 cartAddNoRadio",
    "megaButton cartAddNoRadio",
];

// =============================================================================
// Product Page
// =============================================================================

pub const TITLE_BLOCK: &str = ".prodTitle";

pub const DETAILS_BLOCK: &str = ".addedDetInfo";
pub const PROMO_VALIDITY: &str = ".ProdottoNonValido";
pub const VALID_FOR_PROMO_TEXT: &str = "Prodotto VALIDO per le promozioni";

pub const BUY_SECTION: &str = ".buySection";
pub const VARIANT_ROW: &str = ".singleVariantDetails";
pub const VARIANT_TEXT: &str = ".singleVariantText";
pub const VARIANT_NAME: &str = ".variantName";
pub const VARIANT_RADIO: &str = "input";
/// `"0"` on the radio input marks a channel that cannot be bought.
pub const VARIANT_STOCK_ATTR: &str = "data-int";
pub const VARIANT_PRICE: &str = ".prodPriceCont";
pub const OLDER_PRICE: &str = ".olderPrice";
/// Decorations stripped from a digital row before reading its old price.
pub const DIGITAL_DECORATIONS: [&str; 2] = [".pricetext2", ".detailsLink"];

pub const RATINGS_BLOCK: &str = ".ageBlock";

pub const MAX_COVER: &str = r#"[class="prodImg max"]"#;

pub const MEDIA_BLOCK: &str = ".mediaImages";

pub const DESCRIPTION_BLOCK: &str = "#prodDesc";
/// Removed from the description before it is kept.
pub const DESCRIPTION_CLUTTER: [&str; 3] = [".prodToTop", ".prodSecHead", "img"];

pub const PROMO_BLOCK: &str = "#bonusBlock";
pub const SINGLE_PROMO: &str = ".prodSinglePromo";
