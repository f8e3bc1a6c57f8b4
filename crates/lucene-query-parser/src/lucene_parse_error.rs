use crate::LuceneErrorNote;
use crate::LuceneErrorNoteKind;
use crate::LuceneErrorNotes;
use crate::LuceneParseErrorKind;
use crate::LuceneSourceSpan;
use crate::token::LuceneTokenKind;
use crate::token::LuceneTokenKindSet;

/// A parse error with location information and contextual notes.
///
/// A failed parse produces exactly one of these; there are no partial
/// results.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct LuceneParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected one of `)` or term, found end of input",
    /// "Unterminated phrase"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For fuzzy and escape errors: the offending token's span
    /// - For EOF errors: the end of the last token
    span: LuceneSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: LuceneParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: LuceneErrorNotes,

    /// The query text that failed to parse, when known.
    query: Option<String>,
}

impl LuceneParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: LuceneSourceSpan,
        kind: LuceneParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: LuceneErrorNotes::new(),
            query: None,
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: LuceneSourceSpan,
        lexer_notes: LuceneErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: LuceneParseErrorKind::LexerError,
            notes: lexer_notes,
            query: None,
        }
    }

    /// Attaches the query text that failed to parse.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &LuceneSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &LuceneParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &LuceneErrorNotes {
        &self.notes
    }

    /// Returns the query text that failed to parse, if attached.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The token kinds that would have been accepted at the failure point.
    ///
    /// Empty for errors that are not about an unexpected token.
    pub fn expected(&self) -> LuceneTokenKindSet {
        match &self.kind {
            LuceneParseErrorKind::UnexpectedToken { expected, .. }
            | LuceneParseErrorKind::UnexpectedEof { expected } => *expected,
            _ => LuceneTokenKindSet::EMPTY,
        }
    }

    /// Kind of the offending token, for unexpected-token errors.
    pub fn found(&self) -> Option<LuceneTokenKind> {
        match &self.kind {
            LuceneParseErrorKind::UnexpectedToken { found, .. } => Some(*found),
            LuceneParseErrorKind::UnexpectedEof { .. } => Some(LuceneTokenKind::Eof),
            _ => None,
        }
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(LuceneErrorNote::general(message));
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: LuceneSourceSpan) {
        self.notes
            .push(LuceneErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(LuceneErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected one of `(`, quoted phrase, term, ..., found `)`
    ///   --> <input>:1:7
    ///    |
    ///  1 | title:)
    ///    |       ^
    ///    |
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional source text for snippet extraction. When `None`,
    ///   the query attached with [`with_query()`](Self::with_query) is used
    ///   if present; otherwise snippets are omitted.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let source = source.or(self.query.as_deref());
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        output.push_str(&format!("  --> {}:{line}:{column}\n", self.file_name()));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                LuceneErrorNoteKind::General => "note",
                LuceneErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = self.format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// queries.txt:5:12: error: Unterminated phrase
    /// ```
    pub fn format_oneline(&self) -> String {
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;

        format!("{}:{line}:{column}: error: {}", self.file_name(), self.message)
    }

    fn file_name(&self) -> String {
        self.span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Formats the source snippet for the primary error span.
    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = self.span.start_inclusive.col_utf8();
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = if col_end > col_start {
            col_end - col_start
        } else {
            1
        };

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }

    /// Formats a source snippet for a note's span.
    fn format_note_snippet(&self, source: &str, span: &LuceneSourceSpan) -> Option<String> {
        let line_num = span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!(
            "     {display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = span.start_inclusive.col_utf8();
        output.push_str(&format!(
            "     {:>width$} | {:>padding$}-\n",
            "",
            "",
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}
