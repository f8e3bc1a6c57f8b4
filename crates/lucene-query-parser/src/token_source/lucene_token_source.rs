use crate::token::LuceneToken;

/// Marker trait for [`LuceneToken`] lexers (iterators that generate
/// [`LuceneToken`]).
///
/// This trait lets the parser consume tokens from any source of Lucene
/// query text. [`StrLuceneTokenSource`](crate::token_source::StrLuceneTokenSource)
/// lexes a `&str`; tests use hand-built token vectors.
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// All lookahead, caching and rewinding is handled by
/// [`LuceneTokenStream`](crate::LuceneTokenStream), which pulls each token
/// from the source exactly once.
///
/// Token sources are responsible for:
/// - Skipping whitespace
/// - Emitting [`LuceneTokenKind::Error`](crate::token::LuceneTokenKind::Error)
///   tokens for lexer errors
/// - Emitting exactly one final
///   [`LuceneTokenKind::Eof`](crate::token::LuceneTokenKind::Eof) token
///
/// # Lifetime Parameter
///
/// The `'src` lifetime is that of the query text tokens are lexed from, so
/// that token images can borrow from it.
pub trait LuceneTokenSource<'src>: Iterator<Item = LuceneToken<'src>> {}

impl<'src, T> LuceneTokenSource<'src> for T where T: Iterator<Item = LuceneToken<'src>> {}
