//! Gallery resolution.
//!
//! Each gallery anchor links its high-resolution image in `href` and wraps a
//! thumbnail `<img>`:
//!
//! ```html
//! <a class="gallery" href=".../154167/11scrmax4.jpg">
//!     <span><img src=".../154167/10scrmin4.jpg"></span>
//! </a>
//! ```
//!
//! Some pages carry an anchor with no `href`, holding only a thumbnail; the
//! same picture then follows as the next anchor with its `href` set.
//! Thumbnails use even file numbers and full-size images the odd number one
//! higher (`6scrmin1.jpg` / `7scrmax2.jpg`), which is how the pairing was
//! established. The check below is structural only: empty `href` means skip.

use crate::dom::{self, Selection};

/// High-resolution URLs of the given anchors, in order, skipping
/// thumbnail-only anchors.
#[must_use]
pub fn resolve_gallery<'a, I>(anchors: I) -> Vec<String>
where
    I: IntoIterator<Item = Selection<'a>>,
{
    anchors
        .into_iter()
        .enumerate()
        .filter_map(|(position, anchor)| {
            let link = dom::attribute(&anchor, "href");
            if link.is_none() {
                tracing::warn!(position, "skipping gallery anchor without high-resolution link");
            }
            link
        })
        .collect()
}
