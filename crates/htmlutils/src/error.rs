// ABOUTME: Error types for tag query parsing.
// ABOUTME: Provides the QueryError enum returned by TagQuery::from_str.

use thiserror::Error;

/// Errors produced while parsing a [`TagQuery`](crate::TagQuery) string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query was empty or only whitespace.
    #[error("empty tag query")]
    Empty,

    /// Nothing before the `[` attribute filter.
    #[error("tag query has no tag name: {0}")]
    MissingTag(String),

    /// The tag name contains characters that cannot appear in one.
    #[error("invalid tag name: {0:?}")]
    InvalidTag(String),

    /// `[` without a closing `]` at the end of the query.
    #[error("unterminated attribute filter: {0}")]
    Unterminated(String),

    /// The attribute filter has no `=`.
    #[error("attribute filter needs key=value: {0}")]
    MissingValue(String),

    #[error("attribute filter has an empty key: {0}")]
    EmptyKey(String),
}
