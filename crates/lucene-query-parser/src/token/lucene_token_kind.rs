/// The kind of a Lucene query token.
///
/// Token kinds carry no payload: the literal text of every token lives in
/// [`LuceneToken::image`](crate::token::LuceneToken::image). This keeps the
/// kind `Copy` so that sets of kinds can be stored as a bitset
/// ([`LuceneTokenKindSet`](crate::token::LuceneTokenKindSet)) when the
/// parser reconstructs what it expected at a failure point.
///
/// Some kinds are only produced in a particular lexical state: the `Range*`
/// kinds only between `[`/`{` and `]`/`}`, and `Number` only as the operand
/// of `^`. A digit run anywhere else is a `Term`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum LuceneTokenKind {
    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input.
    Eof,

    // =========================================================================
    // Operators
    // =========================================================================
    /// `AND` or `&&`
    And,
    /// `OR` or `||`
    Or,
    /// `NOT` or `!`
    Not,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEq,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEq,
    /// `^`
    Caret,

    // =========================================================================
    // Literals (raw source text in the token image)
    // =========================================================================
    /// A double-quoted phrase, including the quotes.
    Quoted,
    /// A bare term, possibly containing escapes and wildcards.
    Term,
    /// `~` optionally followed by a numeral (e.g. `~`, `~2`, `~0.8`).
    FuzzySlop,
    /// A `/`-delimited regular expression, including the slashes.
    RegexpTerm,
    /// `[`
    RangeInclusiveStart,
    /// `{`
    RangeExclusiveStart,
    /// The operand of `^`. Custom token sources may also emit it wherever a
    /// term is accepted.
    Number,

    // =========================================================================
    // Range state
    // =========================================================================
    /// `TO` between range bounds.
    RangeTo,
    /// `]`
    RangeInclusiveEnd,
    /// `}`
    RangeExclusiveEnd,
    /// A double-quoted range bound, including the quotes.
    RangeQuoted,
    /// An unquoted range bound.
    RangeGoop,

    // =========================================================================
    // Lexer error
    // =========================================================================
    /// A lexer error. The token's `lexer_error` carries the message and
    /// notes.
    Error,
}

impl LuceneTokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [LuceneTokenKind; 28] = [
        LuceneTokenKind::Eof,
        LuceneTokenKind::And,
        LuceneTokenKind::Or,
        LuceneTokenKind::Not,
        LuceneTokenKind::Plus,
        LuceneTokenKind::Minus,
        LuceneTokenKind::ParenOpen,
        LuceneTokenKind::ParenClose,
        LuceneTokenKind::Colon,
        LuceneTokenKind::Equals,
        LuceneTokenKind::LessThan,
        LuceneTokenKind::LessThanEq,
        LuceneTokenKind::GreaterThan,
        LuceneTokenKind::GreaterThanEq,
        LuceneTokenKind::Caret,
        LuceneTokenKind::Quoted,
        LuceneTokenKind::Term,
        LuceneTokenKind::FuzzySlop,
        LuceneTokenKind::RegexpTerm,
        LuceneTokenKind::RangeInclusiveStart,
        LuceneTokenKind::RangeExclusiveStart,
        LuceneTokenKind::Number,
        LuceneTokenKind::RangeTo,
        LuceneTokenKind::RangeInclusiveEnd,
        LuceneTokenKind::RangeExclusiveEnd,
        LuceneTokenKind::RangeQuoted,
        LuceneTokenKind::RangeGoop,
        LuceneTokenKind::Error,
    ];

    /// Returns a human-readable description used in diagnostics.
    ///
    /// Punctuators and keywords are shown as they are written; literal kinds
    /// are described by category.
    pub fn description(&self) -> &'static str {
        match self {
            LuceneTokenKind::Eof => "end of input",
            LuceneTokenKind::And => "`AND`",
            LuceneTokenKind::Or => "`OR`",
            LuceneTokenKind::Not => "`NOT`",
            LuceneTokenKind::Plus => "`+`",
            LuceneTokenKind::Minus => "`-`",
            LuceneTokenKind::ParenOpen => "`(`",
            LuceneTokenKind::ParenClose => "`)`",
            LuceneTokenKind::Colon => "`:`",
            LuceneTokenKind::Equals => "`=`",
            LuceneTokenKind::LessThan => "`<`",
            LuceneTokenKind::LessThanEq => "`<=`",
            LuceneTokenKind::GreaterThan => "`>`",
            LuceneTokenKind::GreaterThanEq => "`>=`",
            LuceneTokenKind::Caret => "`^`",
            LuceneTokenKind::Quoted => "quoted phrase",
            LuceneTokenKind::Term => "term",
            LuceneTokenKind::FuzzySlop => "`~`",
            LuceneTokenKind::RegexpTerm => "regular expression",
            LuceneTokenKind::RangeInclusiveStart => "`[`",
            LuceneTokenKind::RangeExclusiveStart => "`{`",
            LuceneTokenKind::Number => "number",
            LuceneTokenKind::RangeTo => "`TO`",
            LuceneTokenKind::RangeInclusiveEnd => "`]`",
            LuceneTokenKind::RangeExclusiveEnd => "`}`",
            LuceneTokenKind::RangeQuoted => "quoted range bound",
            LuceneTokenKind::RangeGoop => "range bound",
            LuceneTokenKind::Error => "invalid token",
        }
    }

    /// Bit index of this kind within a
    /// [`LuceneTokenKindSet`](crate::token::LuceneTokenKindSet).
    #[inline]
    pub(crate) fn bit(self) -> u32 {
        1u32 << (self as u8)
    }
}

impl std::fmt::Display for LuceneTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
