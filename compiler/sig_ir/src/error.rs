//! Errors from parsing the textual form of names.

/// Error when a namespace or qualified name string is malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameParseError {
    /// Two separators with nothing between them (`A::::B`), or a stray
    /// colon left inside a segment (`A:::B`).
    #[error("empty segment in name `{input}`")]
    EmptySegment { input: String },
    /// The final segment is missing, e.g. `A::` or `::`.
    #[error("missing final segment in name `{input}`")]
    EmptyName { input: String },
}
