//! Re-visitable stream of [`LuceneToken`]s pulled lazily from a
//! [`LuceneTokenSource`].

use crate::token::LuceneToken;
use crate::token::LuceneTokenKind;
use crate::token_source::LuceneTokenSource;

/// Re-visitable stream of [`LuceneToken`]s pulled lazily from a
/// [`LuceneTokenSource`].
///
/// Lucene's grammar needs to look a few tokens ahead and then rewind (e.g.
/// to decide whether `title` in `title:rust` is a field name). Every token
/// pulled from the source is therefore kept in an append-only arena and
/// addressed by its absolute index; a separate commit cursor marks the next
/// unconsumed token.
///
/// # Invariants
///
/// - The token source is asked for each token at most once. Asking for an
///   index that was visited before returns the cached token.
/// - The commit cursor only moves forward, and only through
///   [`consume()`](Self::consume).
///
/// # Type Parameters
///
/// * `'src` - The lifetime of the query text that tokens are lexed from.
/// * `TTokenSource` - The underlying token source.
pub struct LuceneTokenStream<'src, TTokenSource: LuceneTokenSource<'src>> {
    token_source: TTokenSource,
    /// Every token pulled so far, in source order.
    arena: Vec<LuceneToken<'src>>,
    /// Index of the next unconsumed token.
    commit: usize,
    /// Whether the source has returned `None`.
    source_exhausted: bool,
}

impl<'src, TTokenSource: LuceneTokenSource<'src>> LuceneTokenStream<'src, TTokenSource> {
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            arena: Vec::new(),
            commit: 0,
            source_exhausted: false,
        }
    }

    /// Index of the next unconsumed token.
    pub fn commit_index(&self) -> usize {
        self.commit
    }

    /// Number of tokens pulled from the source so far.
    pub fn materialized_len(&self) -> usize {
        self.arena.len()
    }

    /// Returns the token at absolute `index`, pulling from the source as
    /// needed.
    ///
    /// Returns `None` if the source ends before reaching `index`.
    pub fn token_at(&mut self, index: usize) -> Option<&LuceneToken<'src>> {
        while self.arena.len() <= index && !self.source_exhausted {
            match self.token_source.next() {
                Some(token) => self.arena.push(token),
                None => self.source_exhausted = true,
            }
        }
        self.arena.get(index)
    }

    /// Kind of the token at absolute `index`. Positions past the end of the
    /// source read as [`LuceneTokenKind::Eof`].
    pub fn kind_at(&mut self, index: usize) -> LuceneTokenKind {
        self.token_at(index)
            .map(|token| token.kind)
            .unwrap_or(LuceneTokenKind::Eof)
    }

    /// Peek at the next unconsumed token.
    #[inline]
    pub fn peek(&mut self) -> Option<&LuceneToken<'src>> {
        self.token_at(self.commit)
    }

    /// Peek at the nth token ahead of the commit cursor.
    ///
    /// `peek_nth(0)` is equivalent to `peek()`.
    pub fn peek_nth(&mut self, n: usize) -> Option<&LuceneToken<'src>> {
        self.token_at(self.commit + n)
    }

    /// Kind of the next unconsumed token.
    pub fn peek_kind(&mut self) -> LuceneTokenKind {
        self.kind_at(self.commit)
    }

    /// Advances the commit cursor past the next token and returns it.
    ///
    /// Returns `None` (without moving the cursor) if the stream is
    /// exhausted.
    pub fn consume(&mut self) -> Option<&LuceneToken<'src>> {
        let index = self.commit;
        self.token_at(index)?;
        self.commit += 1;
        self.arena.get(index)
    }

    /// Returns `true` if there are no more tokens to consume, or if the next
    /// token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        self.peek_kind() == LuceneTokenKind::Eof
    }
}
