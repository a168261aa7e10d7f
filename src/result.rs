//! Result types for extraction output.
//!
//! Every entity here is fully populated by a single extraction call and
//! handed back by value; nothing in the crate mutates it afterwards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Price state of one purchase channel.
///
/// A channel whose block is absent from the page keeps the default:
/// price 0, no history, unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// First price shown in the channel block.
    pub current_price: f64,

    /// Superseded prices in document order. Never contains `current_price`.
    pub old_prices: Vec<f64>,

    /// Whether the channel can currently be bought.
    pub available: bool,
}

/// The four independent ways a game is sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    New,
    Used,
    Preorder,
    Digital,
}

impl Channel {
    /// All channels, in the order they are listed on the site.
    pub const ALL: [Channel; 4] = [Channel::New, Channel::Used, Channel::Preorder, Channel::Digital];

    /// Class name of the channel's price block in a search result entry.
    #[must_use]
    pub const fn catalog_class(self) -> &'static str {
        match self {
            Channel::New => "buyNew",
            Channel::Used => "buyUsed",
            Channel::Preorder => "buyPresell",
            Channel::Digital => "buyDLC",
        }
    }

    /// Variant name shown on a product page's buy section.
    #[must_use]
    pub const fn variant_label(self) -> &'static str {
        match self {
            Channel::New => "Nuovo",
            Channel::Used => "Usato",
            Channel::Preorder => "Prenotazione",
            Channel::Digital => "Digitale",
        }
    }

    /// Inverse of [`Channel::variant_label`].
    #[must_use]
    pub fn from_variant_label(label: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.variant_label() == label)
    }
}

/// Summary of a game as listed in search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamePreview {
    /// Retailer catalog id.
    pub id: u32,
    pub title: String,
    pub platform: String,
    pub publisher: String,
    /// Cover image URL.
    pub cover: Option<String>,
    pub new_price: PriceQuote,
    pub used_price: PriceQuote,
    pub preorder_price: PriceQuote,
    pub digital_price: PriceQuote,
}

impl GamePreview {
    /// Creates an empty preview for the given catalog id.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Price state of one channel.
    #[must_use]
    pub fn price(&self, channel: Channel) -> &PriceQuote {
        match channel {
            Channel::New => &self.new_price,
            Channel::Used => &self.used_price,
            Channel::Preorder => &self.preorder_price,
            Channel::Digital => &self.digital_price,
        }
    }

    pub(crate) fn price_mut(&mut self, channel: Channel) -> &mut PriceQuote {
        match channel {
            Channel::New => &mut self.new_price,
            Channel::Used => &mut self.used_price,
            Channel::Preorder => &mut self.preorder_price,
            Channel::Digital => &mut self.digital_price,
        }
    }
}

/// Content-rating descriptor: an age tier or a content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pegi {
    #[serde(rename = "pegi3")]
    Pegi3,
    #[serde(rename = "pegi7")]
    Pegi7,
    #[serde(rename = "pegi12")]
    Pegi12,
    #[serde(rename = "pegi16")]
    Pegi16,
    #[serde(rename = "pegi18")]
    Pegi18,
    #[serde(rename = "bad-language")]
    BadLanguage,
    #[serde(rename = "violence")]
    Violence,
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "sex")]
    Sex,
    #[serde(rename = "fear")]
    Fear,
    #[serde(rename = "drugs")]
    Drugs,
    #[serde(rename = "discrimination")]
    Discrimination,
    #[serde(rename = "gambling")]
    Gambling,
}

impl Pegi {
    /// The tag name used when the descriptor is stored or displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Pegi::Pegi3 => "pegi3",
            Pegi::Pegi7 => "pegi7",
            Pegi::Pegi12 => "pegi12",
            Pegi::Pegi16 => "pegi16",
            Pegi::Pegi18 => "pegi18",
            Pegi::BadLanguage => "bad-language",
            Pegi::Violence => "violence",
            Pegi::Online => "online",
            Pegi::Sex => "sex",
            Pegi::Fear => "fear",
            Pegi::Drugs => "drugs",
            Pegi::Discrimination => "discrimination",
            Pegi::Gambling => "gambling",
        }
    }
}

impl std::fmt::Display for Pegi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "Find more" link attached to a promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindMore {
    /// Link label.
    pub label: String,
    /// Absolute URL.
    pub url: String,
}

/// A promotional blurb from a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promo {
    pub title: String,
    pub text: String,
    pub find_more: Option<FindMore>,
}

/// Full product-page record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Fields shared with search results.
    #[serde(flatten)]
    pub summary: GamePreview,

    /// Release date as printed, with `.` separators replaced by `/`.
    pub release_date: Option<String>,

    /// Official website.
    pub website: Option<String>,

    /// Player count, free text.
    pub players: Option<String>,

    pub genres: BTreeSet<String>,

    /// Whether the product counts towards store promotions.
    pub valid_for_promo: bool,

    pub pegi: BTreeSet<Pegi>,

    /// High-resolution image URLs in page order.
    pub gallery: Vec<String>,

    /// Description markup, cleaned of decorations and images.
    pub description: Option<String>,

    pub promos: Vec<Promo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_labels_round_trip_through_lookup() {
        for channel in Channel::ALL {
            assert_eq!(Channel::from_variant_label(channel.variant_label()), Some(channel));
        }
        assert_eq!(Channel::from_variant_label("Noleggio"), None);
    }

    #[test]
    fn price_accessors_address_distinct_slots() {
        let mut preview = GamePreview::new(7);
        preview.price_mut(Channel::Used).current_price = 12.5;

        assert_eq!(preview.used_price.current_price, 12.5);
        assert_eq!(preview.price(Channel::New), &PriceQuote::default());
        assert_eq!(preview.price(Channel::Used).current_price, 12.5);
    }

    #[test]
    fn pegi_serializes_as_tag_name() {
        let json = serde_json::to_string(&Pegi::BadLanguage).unwrap_or_default();
        assert_eq!(json, r#""bad-language""#);
        assert_eq!(Pegi::Pegi18.to_string(), "pegi18");
    }

    #[test]
    fn game_flattens_summary_fields() {
        let game = Game {
            summary: GamePreview::new(42),
            ..Game::default()
        };
        let value = serde_json::to_value(&game).unwrap_or_default();

        assert_eq!(value["id"], 42);
        assert!(value.get("summary").is_none());
    }
}
