//! DOM Operations Adapter
//!
//! The handful of markup-tree queries the extractors need, built on the
//! `dom_query` crate: optional and required lookups, whitespace-normalized
//! text, attribute reads that treat an empty value as absent, and subtree
//! cloning so removals never touch the caller's document.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

use crate::error::{Cause, Result};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<html>` element of a document, the starting point for every query.
///
/// html5ever always synthesizes it, so it exists even for fragments.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

// === Querying ===

/// First descendant matching `selector`, if any.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    found.exists().then_some(found)
}

/// First descendant matching `selector`, or [`Cause::MissingElement`].
pub fn require<'a>(sel: &Selection<'a>, selector: &'static str) -> Result<Selection<'a>> {
    first(sel, selector).ok_or_else(|| Cause::MissingElement(selector).into())
}

/// Whether any descendant's `class` attribute is exactly `class`.
///
/// Token-wise matching (`.a.b`) is too loose here: the site encodes state by the
/// full class string, and `megaButton buyTier3 buyDisabled` shares tokens with
/// the enabled variant.
#[must_use]
pub fn has_exact_class(sel: &Selection, class: &str) -> bool {
    sel.select("[class]")
        .iter()
        .any(|el| class_attr_is(&el, class))
}

/// Whether this element's `class` attribute is exactly `class`.
#[must_use]
pub fn class_attr_is(sel: &Selection, class: &str) -> bool {
    sel.attr("class").is_some_and(|c| &*c == class)
}

// === Attribute Operations ===

/// Attribute value, with missing and empty both mapped to `None`.
#[must_use]
pub fn attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Attribute value that must be present and non-empty.
pub fn require_attribute(
    sel: &Selection,
    selector: &'static str,
    attribute_name: &'static str,
) -> Result<String> {
    attribute(sel, attribute_name).ok_or_else(|| {
        Cause::MissingAttribute {
            selector,
            attribute: attribute_name,
        }
        .into()
    })
}

// === Text Content ===

/// Collapse whitespace runs to one space and trim.
#[must_use]
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of every matched element, normalized and joined with a single space.
///
/// Mirrors what a reader sees: `<h4>PS4 <strong>Sony</strong></h4>` yields
/// `"PS4 Sony"`, and several matched `<span>`s do not run together.
#[must_use]
pub fn text(sel: &Selection) -> String {
    sel.iter()
        .map(|el| normalize_whitespace(&el.text()))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first direct text-node child of the first matched element, trimmed.
///
/// Used where a value sits before any child element, e.g. the platform in
/// `<h4>PS4 <strong>Sony</strong></h4>`.
#[must_use]
pub fn leading_text(sel: &Selection) -> Option<String> {
    let node = sel.nodes().first()?;
    node.children()
        .into_iter()
        .find(dom_query::NodeRef::is_text)
        .map(|t| t.text().trim().to_string())
}

// === Subtrees ===

/// Copy the first matched element and its descendants into a scratch document.
///
/// Removals on the copy leave the caller's tree untouched, which keeps the
/// extractors free of side effects. Table parts are re-parsed inside the
/// ancestors they need, since html5ever drops a bare `<td>` or `<tr>`.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    let tag = sel.nodes().first().and_then(dom_query::NodeRef::node_name);
    let (open, close) = table_context(tag.as_deref().unwrap_or_default());
    Document::from(format!("{open}{}{close}", sel.html()))
}

/// Markup an element with this tag must be nested in to survive parsing.
fn table_context(tag: &str) -> (&'static str, &'static str) {
    match tag {
        "td" | "th" => ("<table><tbody><tr>", "</tr></tbody></table>"),
        "tr" => ("<table><tbody>", "</tbody></table>"),
        "tbody" | "thead" | "tfoot" | "caption" | "colgroup" => ("<table>", "</table>"),
        "col" => ("<table><colgroup>", "</colgroup></table>"),
        _ => ("", ""),
    }
}

/// Outer HTML of the first matched element.
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}
