use thiserror::Error;

use crate::types::TagKind;

/// Result type for docblock parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while reading docblock text.
///
/// Unknown or unsupported tags are never errors; they are dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A recognised tag line is missing fields its kind requires, e.g.
    /// ` * @param int` without a variable name.
    #[error(
        "malformed {tag} tag on line {line}: expected at least {expected} tokens, found {found}"
    )]
    MalformedAnnotationLine {
        /// 1-based line number in the parsed text.
        line: usize,
        tag: TagKind,
        expected: usize,
        found: usize,
    },

    /// A tag line has enough tokens but one of them is not a usable field,
    /// e.g. ` * @param int $ the id` with a bare `$` for a name.
    #[error("invalid tag on line {line}: {source}")]
    InvalidAnnotation {
        line: usize,
        #[source]
        source: EntryError,
    },
}

/// Errors raised when building a tag from its fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("{tag} needs a {field}")]
    MissingField { tag: TagKind, field: &'static str },

    /// Types, variable names and access levels are written as one token.
    #[error("{tag} {field} must be a single word, got {value:?}")]
    MultiWordField {
        tag: TagKind,
        field: &'static str,
        value: String,
    },
}
