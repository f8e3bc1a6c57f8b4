//! A [`LuceneTokenSource`](crate::token_source::LuceneTokenSource) that lexes
//! from a `&str` input.
//!
//! Token images borrow directly from the query string, so lexing a query
//! never allocates for token text.
//!
//! # Lexical states
//!
//! Lucene's syntax is not context-free at the character level: the text
//! between `[`/`{` and `]`/`}` follows different rules than the rest of a
//! query, and the operand of `^` is read greedily. The lexer therefore
//! tracks one of three states:
//!
//! - **Default**: operators, terms, phrases, regexps, fuzzy suffixes.
//!   Digit runs are terms here, so `2020:foo` reads as a fielded clause.
//! - **Range**: entered after `[` or `{`; produces `TO`, quoted and unquoted
//!   bounds, and the closing bracket (which returns to Default).
//! - **Boost**: entered after `^`; an immediately following run of term
//!   characters is a [`LuceneTokenKind::Number`] whatever its content.
//!
//! # Usage
//!
//! ```rust
//! use lucene_query_parser::token::LuceneTokenKind;
//! use lucene_query_parser::token_source::StrLuceneTokenSource;
//!
//! let kinds: Vec<LuceneTokenKind> = StrLuceneTokenSource::new("title:rust^2")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     LuceneTokenKind::Term,
//!     LuceneTokenKind::Colon,
//!     LuceneTokenKind::Term,
//!     LuceneTokenKind::Caret,
//!     LuceneTokenKind::Number,
//!     LuceneTokenKind::Eof,
//! ]);
//! ```

use crate::LuceneErrorNote;
use crate::LuceneSourceSpan;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::LuceneToken;
use crate::token::LuceneTokenKind;
use memchr::memchr2;
use std::path::Path;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LexState {
    Default,
    Range,
    Boost,
}

/// A token source that lexes a Lucene query from a `&str`.
///
/// See module documentation for details.
pub struct StrLuceneTokenSource<'src> {
    /// The full query text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that `\r\n` counts as a
    /// single line break.
    last_char_was_cr: bool,

    state: LexState,

    /// Whether the EOF token has been emitted.
    finished: bool,

    /// Optional file path, copied into every span.
    file_path: Option<&'src Path>,
}

impl<'src> StrLuceneTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            state: LexState::Default,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source with an associated file path.
    ///
    /// The file path is included in token spans for error reporting.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as one line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters until `byte_len` bytes have been passed.
    ///
    /// `byte_len` must land on a character boundary (callers pass offsets
    /// found by `memchr` on ASCII delimiters).
    fn consume_bytes(&mut self, byte_len: usize) {
        let target = self.curr_byte_offset + byte_len;
        while self.curr_byte_offset < target {
            if self.consume().is_none() {
                break;
            }
        }
    }

    fn make_span(&self, start: SourcePosition) -> LuceneSourceSpan {
        let end = self.curr_position();
        if let Some(path) = self.file_path {
            LuceneSourceSpan::with_file(start, end, path.to_path_buf())
        } else {
            LuceneSourceSpan::new(start, end)
        }
    }

    /// Creates a token whose image is the source text from `start` to the
    /// current position.
    fn make_token(&self, kind: LuceneTokenKind, start: SourcePosition) -> LuceneToken<'src> {
        let image = &self.source[start.byte_offset()..self.curr_byte_offset];
        LuceneToken::new(kind, image, self.make_span(start))
    }

    /// Consumes a single character and produces a token of `kind` for it.
    fn single_char_token(
        &mut self,
        kind: LuceneTokenKind,
        start: SourcePosition,
    ) -> LuceneToken<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> LuceneToken<'src> {
        match self.state {
            LexState::Default => self.next_default_token(),
            LexState::Range => self.next_range_token(),
            LexState::Boost => {
                self.state = LexState::Default;
                match self.peek_char() {
                    Some(ch) if is_term_char(ch) || ch == '\\' => {
                        let start = self.curr_position();
                        self.lex_term_run(start, |_| LuceneTokenKind::Number)
                    },
                    _ => self.next_default_token(),
                }
            },
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !is_whitespace(ch) {
                break;
            }
            self.consume();
        }
    }

    fn next_default_token(&mut self) -> LuceneToken<'src> {
        self.skip_whitespace();
        let start = self.curr_position();

        let Some(ch) = self.peek_char() else {
            return self.make_token(LuceneTokenKind::Eof, start);
        };

        match ch {
            '+' => self.single_char_token(LuceneTokenKind::Plus, start),
            '-' => self.single_char_token(LuceneTokenKind::Minus, start),
            '!' => self.single_char_token(LuceneTokenKind::Not, start),
            '(' => self.single_char_token(LuceneTokenKind::ParenOpen, start),
            ')' => self.single_char_token(LuceneTokenKind::ParenClose, start),
            ':' => self.single_char_token(LuceneTokenKind::Colon, start),
            '=' => self.single_char_token(LuceneTokenKind::Equals, start),
            '<' | '>' => {
                self.consume();
                let or_equal = self.peek_char() == Some('=');
                if or_equal {
                    self.consume();
                }
                let kind = match (ch, or_equal) {
                    ('<', false) => LuceneTokenKind::LessThan,
                    ('<', true) => LuceneTokenKind::LessThanEq,
                    (_, false) => LuceneTokenKind::GreaterThan,
                    (_, true) => LuceneTokenKind::GreaterThanEq,
                };
                self.make_token(kind, start)
            },
            '^' => {
                self.state = LexState::Boost;
                self.single_char_token(LuceneTokenKind::Caret, start)
            },
            '[' => {
                self.state = LexState::Range;
                self.single_char_token(LuceneTokenKind::RangeInclusiveStart, start)
            },
            '{' => {
                self.state = LexState::Range;
                self.single_char_token(LuceneTokenKind::RangeExclusiveStart, start)
            },
            ']' | '}' => self.lex_stray_range_end(ch, start),
            '"' => self.lex_quoted(start, LuceneTokenKind::Quoted),
            '/' => self.lex_regexp(start),
            '~' => self.lex_fuzzy_slop(start),
            _ => self.lex_term_run(start, classify_default_run),
        }
    }

    fn next_range_token(&mut self) -> LuceneToken<'src> {
        self.skip_whitespace();
        let start = self.curr_position();

        match self.peek_char() {
            None => self.make_token(LuceneTokenKind::Eof, start),
            Some(']') => {
                self.state = LexState::Default;
                self.single_char_token(LuceneTokenKind::RangeInclusiveEnd, start)
            },
            Some('}') => {
                self.state = LexState::Default;
                self.single_char_token(LuceneTokenKind::RangeExclusiveEnd, start)
            },
            Some('"') => self.lex_quoted(start, LuceneTokenKind::RangeQuoted),
            Some(_) => {
                while let Some(ch) = self.peek_char() {
                    if is_whitespace(ch) || ch == ']' || ch == '}' {
                        break;
                    }
                    self.consume();
                }
                let image = &self.source[start.byte_offset()..self.curr_byte_offset];
                let kind = if image == "TO" {
                    LuceneTokenKind::RangeTo
                } else {
                    LuceneTokenKind::RangeGoop
                };
                self.make_token(kind, start)
            },
        }
    }

    // =========================================================================
    // Term runs
    // =========================================================================

    /// Lexes a run of term characters and escapes, then classifies the run
    /// with `classify`.
    fn lex_term_run(
        &mut self,
        start: SourcePosition,
        classify: fn(&str) -> LuceneTokenKind,
    ) -> LuceneToken<'src> {
        loop {
            match self.peek_char() {
                Some('\\') => {
                    let escape_start = self.curr_position();
                    self.consume();
                    if self.consume().is_none() {
                        return self.dangling_escape_error(start, escape_start);
                    }
                },
                Some(ch) if is_term_char(ch) => {
                    self.consume();
                },
                _ => break,
            }
        }

        let image = &self.source[start.byte_offset()..self.curr_byte_offset];
        self.make_token(classify(image), start)
    }

    fn dangling_escape_error(
        &self,
        start: SourcePosition,
        escape_start: SourcePosition,
    ) -> LuceneToken<'src> {
        let image = &self.source[start.byte_offset()..self.curr_byte_offset];
        LuceneToken::error(
            image,
            self.make_span(start),
            "Dangling escape character at end of query",
            smallvec![
                LuceneErrorNote::general_with_span(
                    "Escape started here",
                    self.make_span(escape_start),
                ),
                LuceneErrorNote::help("Use `\\\\` to search for a literal backslash"),
            ],
        )
    }

    // =========================================================================
    // Delimited literals
    // =========================================================================

    /// Lexes a double-quoted phrase. `\` escapes any character, including
    /// `"`; phrases may span lines.
    fn lex_quoted(&mut self, start: SourcePosition, kind: LuceneTokenKind) -> LuceneToken<'src> {
        self.consume();

        loop {
            let rest = self.remaining().as_bytes();
            let Some(idx) = memchr2(b'"', b'\\', rest) else {
                self.consume_bytes(rest.len());
                return self.unterminated_error(start, "phrase", '"');
            };
            self.consume_bytes(idx);

            if rest[idx] == b'"' {
                self.consume();
                return self.make_token(kind, start);
            }

            let escape_start = self.curr_position();
            self.consume();
            if self.consume().is_none() {
                return self.dangling_escape_error(start, escape_start);
            }
        }
    }

    /// Lexes a `/`-delimited regular expression. Only `\/` is treated as an
    /// escape; every other backslash is part of the pattern.
    fn lex_regexp(&mut self, start: SourcePosition) -> LuceneToken<'src> {
        self.consume();

        loop {
            let rest = self.remaining().as_bytes();
            let Some(idx) = memchr2(b'/', b'\\', rest) else {
                self.consume_bytes(rest.len());
                return self.unterminated_error(start, "regular expression", '/');
            };
            self.consume_bytes(idx);

            if rest[idx] == b'/' {
                self.consume();
                return self.make_token(LuceneTokenKind::RegexpTerm, start);
            }

            self.consume();
            if self.peek_char() == Some('/') {
                self.consume();
            }
        }
    }

    fn unterminated_error(
        &self,
        start: SourcePosition,
        what: &str,
        delimiter: char,
    ) -> LuceneToken<'src> {
        let image = &self.source[start.byte_offset()..self.curr_byte_offset];
        let opening = LuceneSourceSpan::new(
            start.clone(),
            SourcePosition::new(
                start.line(),
                start.col_utf8() + 1,
                start.col_utf16().map(|col| col + 1),
                start.byte_offset() + 1,
            ),
        );
        LuceneToken::error(
            image,
            self.make_span(start),
            format!("Unterminated {what}"),
            smallvec![
                LuceneErrorNote::general_with_span(
                    format!("{} started here", capitalize(what)),
                    opening,
                ),
                LuceneErrorNote::help(format!("Add closing `{delimiter}`")),
            ],
        )
    }

    // =========================================================================
    // Fuzzy / slop suffix
    // =========================================================================

    /// Lexes `~` with an optional (possibly negative) numeral.
    fn lex_fuzzy_slop(&mut self, start: SourcePosition) -> LuceneToken<'src> {
        self.consume();

        let signed = self.peek_char() == Some('-')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit());
        if signed {
            self.consume();
        }
        self.consume_digits();
        let fraction = self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit());
        if fraction {
            self.consume();
            self.consume_digits();
        }

        self.make_token(LuceneTokenKind::FuzzySlop, start)
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
        }
    }

    fn lex_stray_range_end(&mut self, ch: char, start: SourcePosition) -> LuceneToken<'src> {
        self.consume();
        let span = self.make_span(start.clone());
        let image = &self.source[start.byte_offset()..self.curr_byte_offset];
        LuceneToken::error(
            image,
            span,
            format!("Unexpected `{ch}` outside of a range"),
            smallvec![
                LuceneErrorNote::help(format!(
                    "Ranges are written `[a TO b]` or `{{a TO b}}`; use `\\{ch}` to search for \
                     `{ch}` literally"
                )),
            ],
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrLuceneTokenSource<'src> {
    type Item = LuceneToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();

        if token.kind == LuceneTokenKind::Eof {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{3000}')
}

/// Returns `true` if `ch` can start a term.
fn is_term_start_char(ch: char) -> bool {
    !is_whitespace(ch)
        && !matches!(
            ch,
            '+' | '-'
                | '!'
                | '('
                | ')'
                | ':'
                | '^'
                | '<'
                | '>'
                | '='
                | '['
                | ']'
                | '"'
                | '{'
                | '}'
                | '~'
                | '\\'
                | '/'
        )
}

/// Returns `true` if `ch` can continue a term. Escapes are handled
/// separately.
fn is_term_char(ch: char) -> bool {
    is_term_start_char(ch) || ch == '-' || ch == '+'
}

fn classify_default_run(image: &str) -> LuceneTokenKind {
    match image {
        "AND" | "&&" => LuceneTokenKind::And,
        "OR" | "||" => LuceneTokenKind::Or,
        "NOT" => LuceneTokenKind::Not,
        _ => LuceneTokenKind::Term,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
