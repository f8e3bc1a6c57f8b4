/// A position within a query string, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. Token sources are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the query (queries read from files by the
///   CLI are always single-line, but multi-line input is legal)
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: Optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole query
///
/// `col_utf16` is `Some` when the token source can provide it (e.g.
/// [`StrLuceneTokenSource`](crate::token_source::StrLuceneTokenSource)) and
/// `None` otherwise. For ASCII text both columns are equal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// UTF-8 character count within current line (0-based)
    col_utf8: usize,

    /// UTF-16 code unit offset within current line (0-based), if available.
    col_utf16: Option<usize>,

    /// Byte offset from start of the query (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number
    /// - `col_utf8`: 0-based UTF-8 character count within current line
    /// - `col_utf16`: 0-based UTF-16 code unit offset within current line,
    ///   or `None` if not available
    /// - `byte_offset`: 0-based byte offset from the start of the query
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the very first character of a query.
    pub fn zero() -> Self {
        Self::new(0, 0, Some(0), 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the query.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
