//! Page extractors.
//!
//! # Module Structure
//!
//! - `price`: localized price parsing and channel price blocks
//! - `gallery`: high-resolution gallery links
//! - `rating`: content-rating badges
//! - `promo`: promotional blocks
//! - `catalog`: search results pages
//! - `detail`: product pages
//!
//! The leaf modules are used by both page extractors. Everything here works on
//! an already parsed [`Document`](crate::dom::Document), never mutates it, and
//! keeps no state between calls.
//!
//! # Usage
//!
//! ```rust
//! use gamestop_extract::{dom, extractor, Options};
//!
//! let doc = dom::parse(r#"<div class="prodList"></div>"#);
//! assert!(extractor::extract_catalog(&doc)?.is_empty());
//!
//! let doc = dom::parse(r#"<div class="prodTitle"><h1>Hades</h1><p><span>Switch</span></p></div>"#);
//! let game = extractor::extract_game(42, &doc, &Options::default())?;
//! assert_eq!(game.summary.title, "Hades");
//! # Ok::<(), gamestop_extract::Error>(())
//! ```

pub mod catalog;
pub mod detail;
pub mod gallery;
pub mod price;
pub mod promo;
pub mod rating;

pub use catalog::extract_catalog;
pub use detail::extract_game;
pub use gallery::resolve_gallery;
pub use price::{parse_price_block, string_to_price};
pub use promo::extract_promos;
pub use rating::collect_ratings;
