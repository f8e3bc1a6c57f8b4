//! A parser for the standard Lucene query syntax.
//!
//! Parses a human-written search query such as
//! `title:lucene AND -author:"jane doe"~2` into an immutable syntax tree
//! ([`ast::QueryNode`]), or fails with a [`LuceneParseError`] that lists
//! every token kind that would have been accepted at the failure point.
//!
//! ```rust
//! use lucene_query_parser::ast::BooleanOperator;
//! use lucene_query_parser::ast::QueryNode;
//!
//! let root = lucene_query_parser::parse("a OR b AND c", "body").unwrap();
//! let QueryNode::Boolean(or) = root else { panic!() };
//! assert_eq!(or.operator, BooleanOperator::Or);
//! assert_eq!(or.clauses.len(), 2);
//! ```
//!
//! The parser works over any [`token_source::LuceneTokenSource`]; the
//! provided [`token_source::StrLuceneTokenSource`] lexes a `&str`.

pub mod ast;
mod diagnostics;
mod escape;
mod lookahead;
mod lucene_error_note;
mod lucene_error_note_kind;
mod lucene_parse_error;
mod lucene_parse_error_kind;
mod lucene_parser;
mod lucene_source_span;
mod lucene_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use escape::UnescapeError;
pub use escape::escape_quoted;
pub use escape::escape_term;
pub use escape::unescape;
pub use lookahead::SpeculationOutcome;
pub use lucene_error_note::LuceneErrorNote;
pub use lucene_error_note::LuceneErrorNotes;
pub use lucene_error_note_kind::LuceneErrorNoteKind;
pub use lucene_parse_error::LuceneParseError;
pub use lucene_parse_error_kind::LuceneParseErrorKind;
pub use lucene_parser::LuceneParser;
pub use lucene_source_span::LuceneSourceSpan;
pub use lucene_token_stream::LuceneTokenStream;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;

/// Parses `query`, scoping unqualified clauses to `default_field`.
///
/// Equivalent to `LuceneParser::new(query).parse(default_field)`.
pub fn parse<'src>(
    query: &'src str,
    default_field: &'src str,
) -> Result<ast::QueryNode<'src>, LuceneParseError> {
    LuceneParser::new(query).parse(default_field)
}

#[cfg(test)]
mod tests;
