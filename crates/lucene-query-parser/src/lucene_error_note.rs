use crate::LuceneErrorNoteKind;
use crate::LuceneSourceSpan;
use crate::SmallVec;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanatory context,
/// actionable suggestions, and related source locations (e.g. where an
/// unterminated phrase was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct LuceneErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: LuceneErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional span pointing to a related location.
    pub span: Option<LuceneSourceSpan>,
}

impl LuceneErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: LuceneErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(message: impl Into<String>, span: LuceneSourceSpan) -> Self {
        Self {
            kind: LuceneErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: LuceneErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap
/// allocation in the common case.
pub type LuceneErrorNotes = SmallVec<[LuceneErrorNote; 2]>;
