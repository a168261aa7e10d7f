//! Product page extraction.
//!
//! A product page is read in independent steps, one per page section. A
//! missing section leaves its fields at their defaults; a section that is
//! present but not shaped as expected fails the whole page. Fields are staged
//! in a `GameDraft` that is only turned into a [`Game`] once every step has
//! succeeded, so a failure never leaks a half-filled record.

use url::Url;

use crate::dom::{self, Document, Selection};
use crate::error::{Cause, Result};
use crate::extractor::gallery::resolve_gallery;
use crate::extractor::price::{self, prices_of, string_to_price};
use crate::extractor::promo::extract_promos;
use crate::extractor::rating::collect_ratings;
use crate::options::Options;
use crate::patterns::{
    BUY_SECTION, DESCRIPTION_BLOCK, DESCRIPTION_CLUTTER, DETAILS_BLOCK, DIGITAL_DECORATIONS,
    MAX_COVER, MEDIA_BLOCK, NON_PRICE_CHARS, OLDER_PRICE, PROMO_BLOCK, PROMO_VALIDITY,
    RATINGS_BLOCK, TITLE_BLOCK, VALID_FOR_PROMO_TEXT, VARIANT_NAME, VARIANT_PRICE,
    VARIANT_RADIO, VARIANT_ROW, VARIANT_STOCK_ATTR, VARIANT_TEXT,
};
use crate::result::{Channel, Game, PriceQuote};

/// Sections that identify a product page. A page with none of them is
/// something else (an error page, a redirect target) and is rejected.
const PAGE_LANDMARKS: [&str; 8] = [
    TITLE_BLOCK,
    DETAILS_BLOCK,
    BUY_SECTION,
    RATINGS_BLOCK,
    MAX_COVER,
    MEDIA_BLOCK,
    DESCRIPTION_BLOCK,
    PROMO_BLOCK,
];

/// Fields filled from the label/value rows of the details block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    ReleaseDate,
    Website,
    Players,
    Genres,
}

/// Row labels of the details block and the field each one fills.
pub static INFO_LABELS: &[(&str, InfoField)] = &[
    ("Rilascio", InfoField::ReleaseDate),
    ("Sito Ufficiale", InfoField::Website),
    ("Giocatori", InfoField::Players),
    ("Genere", InfoField::Genres),
];

impl InfoField {
    /// Field for a row label, `None` for labels that carry nothing we keep.
    #[must_use]
    pub fn from_label(label: &str) -> Option<InfoField> {
        INFO_LABELS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, field)| field)
    }
}

/// Extract a product page.
///
/// `id` is the catalog id the page was requested for; the page itself does
/// not repeat it in a reliable place.
///
/// # Errors
///
/// `MalformedDocument` when the page is not recognizable as a product page,
/// or when any present section lacks an element or attribute it must carry.
pub fn extract_game(id: u32, doc: &Document, options: &Options) -> Result<Game> {
    let root = dom::root(doc);

    if !PAGE_LANDMARKS.iter().any(|landmark| dom::first(&root, landmark).is_some()) {
        return Err(Cause::UnrecognizedPage.into());
    }

    let mut draft = GameDraft::new(id);
    draft.main_info(&root)?;
    draft.optional_info(&root);
    draft.prices(&root)?;
    draft.ratings(&root);
    draft.cover(&root);
    draft.gallery(&root);
    draft.description(&root)?;
    draft.promos(&root, &options.base_url)?;

    Ok(draft.finish())
}

/// Staging area for a product page being extracted.
struct GameDraft {
    game: Game,
}

impl GameDraft {
    fn new(id: u32) -> Self {
        let mut game = Game::default();
        game.summary.id = id;
        Self { game }
    }

    fn finish(self) -> Game {
        self.game
    }

    fn main_info(&mut self, root: &Selection) -> Result<()> {
        let Some(block) = dom::first(root, TITLE_BLOCK) else {
            return Ok(());
        };

        let summary = &mut self.game.summary;
        summary.title = dom::text(&block.select("h1"));
        summary.platform = dom::text(&dom::require(&block, "p")?.select("span"));
        summary.publisher = dom::text(&block.select("strong"));
        Ok(())
    }

    fn optional_info(&mut self, root: &Selection) {
        let Some(block) = dom::first(root, DETAILS_BLOCK) else {
            return;
        };

        for row in block.select("p").iter() {
            let (Some(label), Some(value)) = (dom::first(&row, "label"), dom::first(&row, "span"))
            else {
                continue;
            };

            let label = dom::text(&label);
            match InfoField::from_label(&label) {
                Some(field) => self.set_info(field, &value),
                None => tracing::debug!(label = %label, "ignoring unrecognized detail label"),
            }
        }

        self.game.valid_for_promo = dom::first(&block, PROMO_VALIDITY)
            .is_some_and(|marker| dom::text(&marker) == VALID_FOR_PROMO_TEXT);
    }

    fn set_info(&mut self, field: InfoField, value: &Selection) {
        let text = dom::text(value);
        let game = &mut self.game;

        match field {
            // Dots become slashes so dates compare the same way across pages
            InfoField::ReleaseDate => {
                game.release_date = Some(text.replace('.', "/")).filter(|d| !d.is_empty());
            }
            InfoField::Website => {
                game.website = dom::first(value, "a").and_then(|a| dom::attribute(&a, "href"));
            }
            InfoField::Players => {
                game.players = Some(text).filter(|p| !p.is_empty());
            }
            InfoField::Genres => {
                game.genres.extend(
                    text.split('/')
                        .map(str::trim)
                        .filter(|g| !g.is_empty())
                        .map(String::from),
                );
            }
        }
    }

    fn prices(&mut self, root: &Selection) -> Result<()> {
        let Some(section) = dom::first(root, BUY_SECTION) else {
            return Ok(());
        };

        for row in section.select(VARIANT_ROW).iter() {
            let (channel, quote) = parse_variant(&row)?;
            *self.game.summary.price_mut(channel) = quote;
        }
        Ok(())
    }

    fn ratings(&mut self, root: &Selection) {
        if let Some(block) = dom::first(root, RATINGS_BLOCK) {
            self.game.pegi = collect_ratings(&block);
        }
    }

    fn cover(&mut self, root: &Selection) {
        self.game.summary.cover =
            dom::first(root, MAX_COVER).and_then(|img| dom::attribute(&img, "href"));
    }

    fn gallery(&mut self, root: &Selection) {
        if let Some(block) = dom::first(root, MEDIA_BLOCK) {
            self.game.gallery = resolve_gallery(block.select("a").iter());
        }
    }

    fn description(&mut self, root: &Selection) -> Result<()> {
        let Some(block) = dom::first(root, DESCRIPTION_BLOCK) else {
            return Ok(());
        };

        let scratch = dom::clone_subtree(&block);
        for clutter in DESCRIPTION_CLUTTER {
            scratch.select(clutter).remove();
        }
        let cleaned = dom::require(&dom::root(&scratch), DESCRIPTION_BLOCK)?;
        self.game.description = Some(dom::outer_html(&cleaned));
        Ok(())
    }

    fn promos(&mut self, root: &Selection, base: &Url) -> Result<()> {
        if let Some(block) = dom::first(root, PROMO_BLOCK) {
            self.game.promos = extract_promos(&block, base)?;
        }
        Ok(())
    }
}

/// One row of the buy section: which channel it prices, and how.
///
/// # Errors
///
/// `MalformedDocument` when the row lacks its radio input, text block, variant
/// name or price, or names a channel we do not know.
pub fn parse_variant(row: &Selection) -> Result<(Channel, PriceQuote)> {
    let radio = dom::require(row, VARIANT_RADIO)?;
    let text_block = dom::require(row, VARIANT_TEXT)?;

    let label = dom::text(&dom::require(&text_block, VARIANT_NAME)?);
    let channel = Channel::from_variant_label(&label).ok_or(Cause::UnknownVariant(label))?;

    let current = string_to_price(&dom::text(&dom::require(&text_block, VARIANT_PRICE)?))?;

    let quote = match channel {
        Channel::New | Channel::Used => {
            price::quote(current, prices_of(&text_block, OLDER_PRICE)?, in_stock(&radio))
        }
        // A preorder row is only shown while preorders are open
        Channel::Preorder => price::quote(current, prices_of(&text_block, OLDER_PRICE)?, true),
        Channel::Digital => {
            price::quote(current, digital_old_prices(&text_block)?, in_stock(&radio))
        }
    };

    Ok((channel, quote))
}

/// Radio inputs of sold-out variants carry `data-int="0"`.
fn in_stock(radio: &Selection) -> bool {
    radio
        .attr(VARIANT_STOCK_ATTR)
        .is_none_or(|stock| stock.trim() != "0")
}

/// Old price of a digital row.
///
/// Digital rows have no old-price marker. Once the current price and the
/// details link are stripped, whatever number is left in the row is the old
/// price. Only checked against pages with a single old digital price; two
/// old prices would run together into one unparsable number.
fn digital_old_prices(text_block: &Selection) -> Result<Vec<f64>> {
    let scratch = dom::clone_subtree(text_block);
    for decoration in DIGITAL_DECORATIONS {
        scratch.select(decoration).remove();
    }

    let residue = NON_PRICE_CHARS
        .replace_all(&dom::text(&dom::root(&scratch)), "")
        .into_owned();
    if residue.is_empty() {
        return Ok(Vec::new());
    }

    Ok(vec![string_to_price(&residue)?])
}
