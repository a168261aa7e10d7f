//! Error types for gamestop-extract.
//!
//! Extraction has a single failure kind, [`Error::MalformedDocument`]. The
//! attached [`Cause`] says what structural expectation was broken so callers
//! can log it, but there is no distinct recovery path per cause.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The page does not have the structure the extractors expect.
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] Cause),
}

/// Why a document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Cause {
    /// A container or sub-element that must exist is missing.
    #[error("missing element `{0}`")]
    MissingElement(&'static str),

    /// An element exists but lacks an attribute it must carry.
    #[error("element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute {
        selector: &'static str,
        attribute: &'static str,
    },

    /// The product link does not carry a numeric catalog id.
    #[error("no catalog id in link {0:?}")]
    InvalidCatalogId(String),

    /// A price string has no parsable numeric remainder.
    #[error("invalid price {0:?}")]
    InvalidPrice(String),

    /// None of the sections of a product page are present.
    #[error("no product page section found")]
    UnrecognizedPage,

    /// A price variant row is labelled with an unknown channel name.
    #[error("unknown price variant {0:?}")]
    UnknownVariant(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cause_converts_into_malformed_document() {
        let err: Error = Cause::InvalidPrice("abc".into()).into();
        assert_eq!(err, Error::MalformedDocument(Cause::InvalidPrice("abc".into())));
        assert_eq!(err.to_string(), r#"Malformed document: invalid price "abc""#);
    }

    #[test]
    fn missing_attribute_message_names_both_parts() {
        let cause = Cause::MissingAttribute { selector: "a.prodImg", attribute: "href" };
        assert_eq!(cause.to_string(), "element `a.prodImg` has no `href` attribute");
    }
}
