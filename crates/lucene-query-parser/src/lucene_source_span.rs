use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of query text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
///
/// Optionally includes the path of the file the query was read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LuceneSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    /// The file path to the query text this span refers to, if available.
    pub file_path: Option<PathBuf>,
}

impl LuceneSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Creates a zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos.clone(), pos)
    }

    /// Returns a span covering `self` through the end of `last`.
    ///
    /// Used to build container spans from the spans of their first and last
    /// constituents.
    pub fn to(&self, last: &LuceneSourceSpan) -> LuceneSourceSpan {
        LuceneSourceSpan {
            start_inclusive: self.start_inclusive.clone(),
            end_exclusive: last.end_exclusive.clone(),
            file_path: self.file_path.clone(),
        }
    }

    /// Byte range of this span within the query text.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset()
    }
}
