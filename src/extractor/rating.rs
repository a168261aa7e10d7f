//! Content-rating classification.
//!
//! The ratings block draws each badge as an empty element whose full class
//! string names it. Anything else inside the block is decoration.

use std::collections::BTreeSet;

use crate::dom::Selection;
use crate::result::Pegi;

/// Badge class strings and the descriptor each one stands for.
pub static PEGI_CLASSES: &[(&str, Pegi)] = &[
    ("pegi3", Pegi::Pegi3),
    ("pegi7", Pegi::Pegi7),
    ("pegi12", Pegi::Pegi12),
    ("pegi16", Pegi::Pegi16),
    ("pegi18", Pegi::Pegi18),
    ("ageDescr BadLanguage", Pegi::BadLanguage),
    ("ageDescr violence", Pegi::Violence),
    ("ageDescr online", Pegi::Online),
    ("ageDescr sex", Pegi::Sex),
    ("ageDescr fear", Pegi::Fear),
    ("ageDescr drugs", Pegi::Drugs),
    ("ageDescr discrimination", Pegi::Discrimination),
    ("ageDescr gambling", Pegi::Gambling),
];

/// Descriptor for an exact class string.
#[must_use]
pub fn classify(class: &str) -> Option<Pegi> {
    PEGI_CLASSES
        .iter()
        .find(|(name, _)| *name == class)
        .map(|&(_, pegi)| pegi)
}

/// Every descriptor found on the ratings block's descendants.
#[must_use]
pub fn collect_ratings(block: &Selection) -> BTreeSet<Pegi> {
    block
        .select("[class]")
        .iter()
        .filter_map(|el| el.attr("class").and_then(|class| classify(&class)))
        .collect()
}
