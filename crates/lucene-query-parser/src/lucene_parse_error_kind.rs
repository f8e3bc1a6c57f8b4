use crate::token::LuceneTokenKind;
use crate::token::LuceneTokenKindSet;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` of
/// [`LuceneParseError`](crate::LuceneParseError).
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `LuceneParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LuceneParseErrorKind {
    /// Expected one of a set of tokens but found something else.
    ///
    /// # Example
    /// ```text
    /// title:)
    ///       ^ expected one of `(`, quoted phrase, term, ..., found `)`
    /// ```
    #[error("unexpected token: `{found_image}`")]
    UnexpectedToken {
        /// Every token kind that would have been accepted here.
        expected: LuceneTokenKindSet,
        /// Kind of the offending token.
        found: LuceneTokenKind,
        /// Source text of the offending token.
        found_image: String,
    },

    /// The query ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// title:
    ///       ^ expected one of ..., found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// Every token kind that would have been accepted here.
        expected: LuceneTokenKindSet,
    },

    /// The parser reached a
    /// [`LuceneTokenKind::Error`](crate::token::LuceneTokenKind::Error)
    /// token. The lexer's message and notes are preserved in the parent
    /// error.
    #[error("lexer error")]
    LexerError,

    /// A fuzzy suffix with a negative value (e.g. `foo~-1`).
    #[error("fuzzy similarity must not be negative")]
    InvalidFuzzyLimits,

    /// A fuzzy suffix of at least 1 that is not a whole number of edits
    /// (e.g. `foo~1.5`).
    #[error("fuzzy edit distance must be a whole number")]
    InvalidFuzzyEdits,

    /// A malformed escape sequence in a term, field, phrase, or range bound.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// Structurally invalid input not covered by other kinds (e.g. nesting
    /// too deep).
    #[error("invalid syntax")]
    InvalidSyntax,
}
