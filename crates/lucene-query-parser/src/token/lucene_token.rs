use crate::LuceneErrorNotes;
use crate::LuceneSourceSpan;
use crate::token::LuceneTokenKind;
use std::borrow::Cow;

/// A Lucene query token: its kind, its literal text, and its location.
///
/// Tokens are immutable once produced. The parser keeps every token it has
/// pulled from a token source for the duration of one parse, so the same
/// token may be inspected by several speculative passes.
#[derive(Clone, Debug, PartialEq)]
pub struct LuceneToken<'src> {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: LuceneTokenKind,

    /// The raw source text of the token, delimiters and escapes included.
    ///
    /// Uses `Cow<'src, str>` so that string-based token sources can borrow
    /// directly from the query.
    pub image: Cow<'src, str>,

    /// The source location span of this token.
    pub span: LuceneSourceSpan,

    /// Details of a lexer error. Only present when `kind` is
    /// [`LuceneTokenKind::Error`].
    pub lexer_error: Option<Box<LuceneLexerError>>,
}

impl<'src> LuceneToken<'src> {
    /// Convenience constructor for a non-error token.
    pub fn new(
        kind: LuceneTokenKind,
        image: impl Into<Cow<'src, str>>,
        span: LuceneSourceSpan,
    ) -> Self {
        Self {
            kind,
            image: image.into(),
            span,
            lexer_error: None,
        }
    }

    /// Creates a lexer error token.
    pub fn error(
        image: impl Into<Cow<'src, str>>,
        span: LuceneSourceSpan,
        message: impl Into<String>,
        notes: LuceneErrorNotes,
    ) -> Self {
        Self {
            kind: LuceneTokenKind::Error,
            image: image.into(),
            span,
            lexer_error: Some(Box::new(LuceneLexerError {
                message: message.into(),
                notes,
            })),
        }
    }
}

/// A lexer error attached to a [`LuceneTokenKind::Error`] token.
#[derive(Clone, Debug, PartialEq)]
pub struct LuceneLexerError {
    /// A human-readable error message.
    pub message: String,
    /// Notes providing additional context or suggestions.
    pub notes: LuceneErrorNotes,
}
