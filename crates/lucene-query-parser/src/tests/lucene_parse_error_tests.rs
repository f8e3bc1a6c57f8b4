//! Tests for `LuceneParseError` formatting and accessors.

use crate::LuceneErrorNoteKind;
use crate::LuceneParseError;
use crate::LuceneParseErrorKind;
use crate::LuceneSourceSpan;
use crate::SourcePosition;
use crate::token::LuceneTokenKind;
use crate::token::LuceneTokenKindSet;
use std::path::PathBuf;

fn span(line: usize, start_col: usize, end_col: usize, start_byte: usize) -> LuceneSourceSpan {
    LuceneSourceSpan::new(
        SourcePosition::new(line, start_col, Some(start_col), start_byte),
        SourcePosition::new(line, end_col, Some(end_col), start_byte + end_col - start_col),
    )
}

/// Verifies the one-line format for an input without a file path.
#[test]
fn test_format_oneline() {
    let err = LuceneParseError::new(
        "Unterminated phrase",
        span(0, 4, 9, 4),
        LuceneParseErrorKind::LexerError,
    );
    assert_eq!(err.format_oneline(), "<input>:1:5: error: Unterminated phrase");
    assert_eq!(err.to_string(), err.format_oneline());
}

/// Verifies that the one-line format uses the span's file path.
#[test]
fn test_format_oneline_with_file() {
    let pos = SourcePosition::new(4, 11, Some(11), 60);
    let err = LuceneParseError::new(
        "maximum nesting depth exceeded",
        LuceneSourceSpan::with_file(pos.clone(), pos, PathBuf::from("queries.txt")),
        LuceneParseErrorKind::InvalidSyntax,
    );
    assert_eq!(
        err.format_oneline(),
        "queries.txt:5:12: error: maximum nesting depth exceeded",
    );
}

/// Verifies the detailed format with a source snippet, underline and notes.
#[test]
fn test_format_detailed() {
    let source = "a AND\ntitle:\"oops";
    let mut err = LuceneParseError::new(
        "Unterminated phrase",
        span(1, 6, 11, 12),
        LuceneParseErrorKind::LexerError,
    );
    err.add_note_with_span("Phrase started here", span(1, 6, 7, 12));
    err.add_help("Add closing `\"`");

    let expected = concat!(
        "error: Unterminated phrase\n",
        "  --> <input>:2:7\n",
        "   |\n",
        " 2 | title:\"oops\n",
        "   |       ^^^^^\n",
        "   = note: Phrase started here\n",
        "      2 | title:\"oops\n",
        "        |       -\n",
        "   = help: Add closing `\"`\n",
    );
    assert_eq!(err.format_detailed(Some(source)), expected);
}

/// Verifies that without any source the detailed format omits snippets.
#[test]
fn test_format_detailed_without_source() {
    let mut err = LuceneParseError::new(
        "expected term, found end of input",
        span(0, 3, 3, 3),
        LuceneParseErrorKind::UnexpectedEof {
            expected: LuceneTokenKindSet::of(&[LuceneTokenKind::Term]),
        },
    );
    err.add_note("a note");
    assert_eq!(
        err.format_detailed(None),
        "error: expected term, found end of input\n  --> <input>:1:4\n   = note: a note\n",
    );
}

/// Verifies that the attached query is used when no source is passed.
#[test]
fn test_format_detailed_uses_attached_query() {
    let err = LuceneParseError::new(
        "unexpected `)`",
        span(0, 2, 3, 2),
        LuceneParseErrorKind::InvalidSyntax,
    )
    .with_query("a )");
    assert_eq!(err.query(), Some("a )"));
    assert!(err.format_detailed(None).contains(" 1 | a )\n"));
}

/// Verifies the expected/found accessors per error kind.
#[test]
fn test_expected_and_found() {
    let expected = LuceneTokenKindSet::of(&[LuceneTokenKind::Term, LuceneTokenKind::Number]);
    let err = LuceneParseError::new(
        "expected one of term or number, found `)`",
        span(0, 0, 1, 0),
        LuceneParseErrorKind::UnexpectedToken {
            expected,
            found: LuceneTokenKind::ParenClose,
            found_image: ")".to_string(),
        },
    );
    assert_eq!(err.expected(), expected);
    assert_eq!(err.found(), Some(LuceneTokenKind::ParenClose));

    let err = LuceneParseError::new(
        "invalid fuzzy edit distance",
        span(0, 0, 1, 0),
        LuceneParseErrorKind::InvalidFuzzyEdits,
    );
    assert!(err.expected().is_empty());
    assert_eq!(err.found(), None);
}

/// Verifies that lexer errors keep the lexer's notes.
#[test]
fn test_from_lexer_error() {
    let mut notes = crate::LuceneErrorNotes::new();
    notes.push(crate::LuceneErrorNote::help("Add closing `/`"));
    let err = LuceneParseError::from_lexer_error(
        "Unterminated regular expression",
        span(0, 0, 4, 0),
        notes,
    );
    assert_eq!(err.kind(), &LuceneParseErrorKind::LexerError);
    assert_eq!(err.notes().len(), 1);
    assert_eq!(err.notes()[0].kind, LuceneErrorNoteKind::Help);
}

/// Verifies that the expected-set description lists kinds in declaration
/// order with an Oxford comma.
#[test]
fn test_kind_set_describe() {
    assert_eq!(LuceneTokenKindSet::EMPTY.describe(), "nothing");
    assert_eq!(
        LuceneTokenKindSet::of(&[LuceneTokenKind::Term]).describe(),
        "term",
    );
    assert_eq!(
        LuceneTokenKindSet::of(&[LuceneTokenKind::ParenClose, LuceneTokenKind::Eof]).describe(),
        "end of input or `)`",
    );
    assert_eq!(
        LuceneTokenKindSet::of(&[
            LuceneTokenKind::Number,
            LuceneTokenKind::And,
            LuceneTokenKind::Term,
        ])
        .describe(),
        "`AND`, term, or number",
    );
}
