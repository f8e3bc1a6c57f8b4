//! Recursive descent parser for Lucene standard query syntax.
//!
//! This module provides [`LuceneParser`], a parser session that works with
//! any token source implementing [`LuceneTokenSource`].
//!
//! # Architecture
//!
//! Each grammar rule has a corresponding `parse_*` method returning
//! `Result<QueryNode, LuceneParseError>`. The first error aborts the parse;
//! there is no recovery and no partial result.
//!
//! ```text
//! TopLevel   ::= Query EOF
//! Query      ::= DisjQuery (DisjQuery)*
//! DisjQuery  ::= ConjQuery (OR ConjQuery)*
//! ConjQuery  ::= ModClause (AND ModClause)*
//! ModClause  ::= Modifier? Clause
//! Clause     ::= FieldedComparison | FieldPrefix? (Term | '(' Query ')' ('^' NUMBER)?)
//! ```
//!
//! Two decisions inside `Clause` need more than one token of lookahead and
//! are made by bounded speculation (see [`crate::lookahead`]). Every single-
//! token decision is recorded so that a failure can list all the kinds that
//! would have been accepted (see [`crate::diagnostics`]).

use crate::LuceneParseError;
use crate::LuceneParseErrorKind;
use crate::LuceneSourceSpan;
use crate::LuceneTokenStream;
use crate::SourcePosition;
use crate::ast::BooleanOperator;
use crate::ast::BooleanQuery;
use crate::ast::BoostQuery;
use crate::ast::FieldTerm;
use crate::ast::FuzzyTerm;
use crate::ast::GroupQuery;
use crate::ast::ModifierKind;
use crate::ast::ModifierQuery;
use crate::ast::QueryNode;
use crate::ast::QuotedFieldTerm;
use crate::ast::RegexpTerm;
use crate::ast::SlopQuery;
use crate::ast::TermRange;
use crate::diagnostics::ParseDiagnostics;
use crate::escape::unescape;
use crate::lookahead::LookaheadProduction;
use crate::lookahead::Speculation;
use crate::lookahead::SpeculationRecord;
use crate::token::LuceneToken;
use crate::token::LuceneTokenKind;
use crate::token::LuceneTokenKindSet;
use crate::token_source::LuceneTokenSource;
use crate::token_source::StrLuceneTokenSource;
use std::borrow::Cow;
use std::path::Path;

type Kind = LuceneTokenKind;

/// Kinds that can start a clause (and so continue a juxtaposed `Query`).
const CLAUSE_START: LuceneTokenKindSet = LuceneTokenKindSet::of(&[
    Kind::Not,
    Kind::Plus,
    Kind::Minus,
    Kind::ParenOpen,
    Kind::Quoted,
    Kind::Term,
    Kind::RegexpTerm,
    Kind::RangeInclusiveStart,
    Kind::RangeExclusiveStart,
    Kind::Number,
]);

/// Kinds that start a clause once any modifier has been consumed.
const CLAUSE_BODY_START: LuceneTokenKindSet = LuceneTokenKindSet::of(&[
    Kind::ParenOpen,
    Kind::Quoted,
    Kind::Term,
    Kind::RegexpTerm,
    Kind::RangeInclusiveStart,
    Kind::RangeExclusiveStart,
    Kind::Number,
]);

const MODIFIER: LuceneTokenKindSet =
    LuceneTokenKindSet::of(&[Kind::Plus, Kind::Minus, Kind::Not]);

/// Kinds that start the `Term` production.
const TERM_START: LuceneTokenKindSet = LuceneTokenKindSet::of(&[
    Kind::Quoted,
    Kind::Term,
    Kind::RegexpTerm,
    Kind::RangeInclusiveStart,
    Kind::RangeExclusiveStart,
    Kind::Number,
]);

const FIELD_OPERATOR: LuceneTokenKindSet =
    LuceneTokenKindSet::of(&[Kind::Colon, Kind::Equals]);

const COMPARISON_OPERATOR: LuceneTokenKindSet = LuceneTokenKindSet::of(&[
    Kind::LessThan,
    Kind::LessThanEq,
    Kind::GreaterThan,
    Kind::GreaterThanEq,
]);

const COMPARISON_VALUE: LuceneTokenKindSet =
    LuceneTokenKindSet::of(&[Kind::Term, Kind::Quoted, Kind::Number]);

const RANGE_BOUND: LuceneTokenKindSet =
    LuceneTokenKindSet::of(&[Kind::RangeGoop, Kind::RangeQuoted]);

const RANGE_END: LuceneTokenKindSet =
    LuceneTokenKindSet::of(&[Kind::RangeInclusiveEnd, Kind::RangeExclusiveEnd]);

/// A single-use Lucene query parser session.
///
/// The session owns its token stream, lookahead memo and diagnostics state;
/// [`parse()`](Self::parse) consumes it.
///
/// # Example
///
/// ```
/// use lucene_query_parser::LuceneParser;
/// use lucene_query_parser::ast::QueryNode;
///
/// let root = LuceneParser::new("title:rust^2").parse("body").unwrap();
/// assert!(matches!(root, QueryNode::Boost(_)));
/// ```
pub struct LuceneParser<'src, TTokenSource: LuceneTokenSource<'src>> {
    /// Cached, re-visitable tokens plus the commit cursor.
    token_stream: LuceneTokenStream<'src, TTokenSource>,

    /// Choice points and speculation records for error reporting.
    diagnostics: ParseDiagnostics,

    /// Current group nesting depth.
    recursion_depth: usize,

    /// End position of the most recently consumed token, used to anchor
    /// spans and EOF errors.
    last_end_position: Option<SourcePosition>,

    /// The query text, when parsing from a string. Attached to errors.
    query: Option<&'src str>,
}

impl<'src> LuceneParser<'src, StrLuceneTokenSource<'src>> {
    /// Creates a new parser from a string-like query.
    pub fn new<S: AsRef<str> + ?Sized>(query: &'src S) -> Self {
        let query = query.as_ref();
        let mut parser = Self::from_token_source(StrLuceneTokenSource::new(query));
        parser.query = Some(query);
        parser
    }

    /// Creates a new parser whose spans carry `path`.
    pub fn with_file_path<S: AsRef<str> + ?Sized>(query: &'src S, path: &'src Path) -> Self {
        let query = query.as_ref();
        let mut parser =
            Self::from_token_source(StrLuceneTokenSource::with_file_path(query, path));
        parser.query = Some(query);
        parser
    }
}

impl<'src, TTokenSource: LuceneTokenSource<'src>> LuceneParser<'src, TTokenSource> {
    /// Maximum nesting depth of parenthesized groups.
    ///
    /// Each group level costs several stack frames, so adversarial input
    /// like `((((((...` must be cut off well before the stack is.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: LuceneTokenStream::new(token_source),
            diagnostics: ParseDiagnostics::new(),
            recursion_depth: 0,
            last_end_position: None,
            query: None,
        }
    }

    /// Parses the whole token stream as one query.
    ///
    /// `default_field` scopes every clause that has no explicit `field:`
    /// prefix.
    pub fn parse(
        mut self,
        default_field: &'src str,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        log::debug!("parsing query with default field `{default_field}`");

        let result = self.parse_top_level(Cow::Borrowed(default_field));

        match &result {
            Ok(_) => log::debug!(
                "parsed query ({} tokens)",
                self.token_stream.materialized_len(),
            ),
            Err(err) => log::debug!("query failed to parse: {}", err.format_oneline()),
        }

        match self.query {
            Some(query) => result.map_err(|err| err.with_query(query)),
            None => result,
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Returns `true` if the next token is one of `kinds`, recording the
    /// check as a choice point.
    fn peek_is(&mut self, kinds: LuceneTokenKindSet) -> bool {
        let index = self.token_stream.commit_index();
        self.diagnostics.record_choice(index, kinds);
        kinds.contains(self.token_stream.peek_kind())
    }

    /// Consumes the next token and tracks its end position.
    fn consume_token(&mut self) -> Option<LuceneToken<'src>> {
        let token = self.token_stream.consume().cloned();
        if let Some(t) = &token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
            self.diagnostics.on_consume(self.token_stream.commit_index());
        }
        token
    }

    /// Consumes the next token if it is one of `kinds`.
    fn consume_if(&mut self, kinds: LuceneTokenKindSet) -> Option<LuceneToken<'src>> {
        if self.peek_is(kinds) {
            self.consume_token()
        } else {
            None
        }
    }

    /// Consumes the next token, which must be one of `kinds`.
    fn expect_one_of(
        &mut self,
        kinds: LuceneTokenKindSet,
    ) -> Result<LuceneToken<'src>, LuceneParseError> {
        match self.consume_if(kinds) {
            Some(token) => Ok(token),
            None => Err(self.unexpected_token_error()),
        }
    }

    fn expect(&mut self, kind: LuceneTokenKind) -> Result<LuceneToken<'src>, LuceneParseError> {
        self.expect_one_of(LuceneTokenKindSet::of(&[kind]))
    }

    /// Speculatively matches `production` at the commit point.
    fn speculate(&mut self, production: LookaheadProduction) -> bool {
        let start = self.token_stream.commit_index();
        let mut speculation = Speculation::new(start, production.budget());
        let outcome = speculation.run(production, &mut self.token_stream);
        self.diagnostics.record_speculation(SpeculationRecord {
            production,
            start,
            frontier: speculation.frontier(),
        });
        log::trace!("speculated {production:?} at token {start}: {outcome:?}");
        outcome.is_success()
    }

    /// Returns a span for EOF errors, anchored to the end of the last
    /// consumed token if available.
    fn eof_span(&self) -> LuceneSourceSpan {
        let pos = self
            .last_end_position
            .clone()
            .unwrap_or_else(SourcePosition::zero);
        LuceneSourceSpan::empty_at(pos)
    }

    /// Builds a span from the start of `start` to the end of the most
    /// recently consumed token.
    fn make_span(&self, start: &LuceneSourceSpan) -> LuceneSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.end_exclusive.clone());
        LuceneSourceSpan {
            start_inclusive: start.start_inclusive.clone(),
            end_exclusive: end,
            file_path: start.file_path.clone(),
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Builds the error for a token the grammar cannot accept at the commit
    /// point.
    fn unexpected_token_error(&mut self) -> LuceneParseError {
        let index = self.token_stream.commit_index();
        let token = self.token_stream.token_at(index).cloned();

        match token {
            Some(token) if token.kind == Kind::Error => {
                let (message, notes) = match token.lexer_error.map(|err| *err) {
                    Some(err) => (err.message, err.notes),
                    None => (format!("invalid token `{}`", token.image), Default::default()),
                };
                LuceneParseError::from_lexer_error(message, token.span, notes)
            },
            Some(token) if token.kind != Kind::Eof => {
                let expected = self.diagnostics.expected_at(
                    &mut self.token_stream,
                    index,
                    token.kind,
                );
                let message = match expected.len() {
                    0 => format!("unexpected `{}`", token.image),
                    _ => format!("{}, found `{}`", describe_expected(expected), token.image),
                };
                LuceneParseError::new(
                    message,
                    token.span,
                    LuceneParseErrorKind::UnexpectedToken {
                        expected,
                        found: token.kind,
                        found_image: token.image.into_owned(),
                    },
                )
            },
            eof => {
                let span = eof.map(|t| t.span).unwrap_or_else(|| self.eof_span());
                let expected = self.diagnostics.expected_at(
                    &mut self.token_stream,
                    index,
                    Kind::Eof,
                );
                let message = match expected.len() {
                    0 => "unexpected end of input".to_string(),
                    _ => format!("{}, found end of input", describe_expected(expected)),
                };
                LuceneParseError::new(
                    message,
                    span,
                    LuceneParseErrorKind::UnexpectedEof { expected },
                )
            },
        }
    }

    /// Unescapes a token's text, reporting malformed escapes against the
    /// token.
    fn unescape_text(
        text: Cow<'src, str>,
        token: &LuceneToken<'src>,
    ) -> Result<Cow<'src, str>, LuceneParseError> {
        let result = match text {
            Cow::Borrowed(s) => unescape(s),
            Cow::Owned(s) => unescape(&s).map(|c| Cow::Owned(c.into_owned())),
        };
        result.map_err(|err| {
            let mut error = LuceneParseError::new(
                format!("invalid escape sequence in `{}`: {err}", token.image),
                token.span.clone(),
                LuceneParseErrorKind::InvalidEscape,
            );
            error.add_help("Use `\\\\` to search for a literal backslash");
            error
        })
    }

    fn enter_recursion(&mut self, open: &LuceneToken<'src>) -> Result<(), LuceneParseError> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            return Err(LuceneParseError::new(
                "maximum nesting depth exceeded",
                open.span.clone(),
                LuceneParseErrorKind::InvalidSyntax,
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Boolean structure
    // =========================================================================

    fn parse_top_level(
        &mut self,
        field: Cow<'src, str>,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let query = self.parse_query(&field)?;
        self.expect(Kind::Eof)?;
        Ok(query)
    }

    /// `Query ::= DisjQuery (DisjQuery)*`
    fn parse_query(
        &mut self,
        field: &Cow<'src, str>,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let mut clauses = vec![self.parse_disj_query(field)?];
        while self.peek_is(CLAUSE_START) {
            clauses.push(self.parse_disj_query(field)?);
        }
        Ok(collapse(BooleanOperator::Implicit, clauses))
    }

    /// `DisjQuery ::= ConjQuery (OR ConjQuery)*`
    fn parse_disj_query(
        &mut self,
        field: &Cow<'src, str>,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let mut clauses = vec![self.parse_conj_query(field)?];
        while self.consume_if(LuceneTokenKindSet::of(&[Kind::Or])).is_some() {
            clauses.push(self.parse_conj_query(field)?);
        }
        Ok(collapse(BooleanOperator::Or, clauses))
    }

    /// `ConjQuery ::= ModClause (AND ModClause)*`
    fn parse_conj_query(
        &mut self,
        field: &Cow<'src, str>,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let mut clauses = vec![self.parse_mod_clause(field)?];
        while self.consume_if(LuceneTokenKindSet::of(&[Kind::And])).is_some() {
            clauses.push(self.parse_mod_clause(field)?);
        }
        Ok(collapse(BooleanOperator::And, clauses))
    }

    /// `ModClause ::= Modifier? Clause`
    fn parse_mod_clause(
        &mut self,
        field: &Cow<'src, str>,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let modifier = self.consume_if(MODIFIER);
        let clause = self.parse_clause(field)?;

        let Some(modifier) = modifier else {
            return Ok(clause);
        };
        let kind = match modifier.kind {
            Kind::Plus => ModifierKind::Required,
            _ => ModifierKind::Prohibited,
        };
        Ok(QueryNode::Modifier(ModifierQuery {
            kind,
            span: self.make_span(&modifier.span),
            child: Box::new(clause),
        }))
    }

    // =========================================================================
    // Clauses
    // =========================================================================

    fn parse_clause(
        &mut self,
        field: &Cow<'src, str>,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        if self.speculate(LookaheadProduction::FieldedClause) {
            let field_token = self.expect(Kind::Term)?;
            let field = Self::unescape_text(field_token.image.clone(), &field_token)?;
            if self.consume_if(FIELD_OPERATOR).is_some() {
                return self.parse_term(field, field_token.span);
            }
            return self.parse_fielded_comparison(field, field_token);
        }

        if !self.peek_is(CLAUSE_BODY_START) {
            return Err(self.unexpected_token_error());
        }

        let mut field = field.clone();
        let mut prefix_span = None;
        if self.speculate(LookaheadProduction::FieldPrefix) {
            let field_token = self.expect(Kind::Term)?;
            field = Self::unescape_text(field_token.image.clone(), &field_token)?;
            self.expect_one_of(FIELD_OPERATOR)?;
            prefix_span = Some(field_token.span);
        }

        if self.peek_is(TERM_START) {
            let start = match prefix_span {
                Some(span) => span,
                None => self.next_token_span(),
            };
            return self.parse_term(field, start);
        }

        let open = self.expect(Kind::ParenOpen)?;
        let start = prefix_span.unwrap_or_else(|| open.span.clone());
        self.parse_group(&field, open, start)
    }

    /// `'(' Query ')' ('^' NUMBER)?`, with `(` already consumed.
    fn parse_group(
        &mut self,
        field: &Cow<'src, str>,
        open: LuceneToken<'src>,
        start: LuceneSourceSpan,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        self.enter_recursion(&open)?;
        let inner = self.parse_query(field);
        self.exit_recursion();
        let inner = inner?;

        if let Err(mut err) = self.expect(Kind::ParenClose) {
            if matches!(err.kind(), LuceneParseErrorKind::UnexpectedEof { .. }) {
                err.add_note_with_span("group opened here", open.span.clone());
            }
            return Err(err);
        }

        let group = QueryNode::Group(GroupQuery {
            child: Box::new(inner),
            span: self.make_span(&start),
        });
        let boost = self.parse_optional_boost()?;
        Ok(self.apply_boost(group, boost, &start))
    }

    /// `field<op>value`, rewritten to a half-open [`TermRange`].
    fn parse_fielded_comparison(
        &mut self,
        field: Cow<'src, str>,
        field_token: LuceneToken<'src>,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let op = self.expect_one_of(COMPARISON_OPERATOR)?;
        let value_token = self.expect_one_of(COMPARISON_VALUE)?;
        let raw = if value_token.kind == Kind::Quoted {
            strip_delimiters(&value_token.image)
        } else {
            value_token.image.clone()
        };
        let value = FieldTerm {
            field: field.clone(),
            text: Self::unescape_text(raw, &value_token)?,
            span: value_token.span.clone(),
        };
        let open = FieldTerm {
            field,
            text: Cow::Borrowed(FieldTerm::OPEN_BOUND),
            span: op.span.clone(),
        };

        let (lower, upper, lower_inclusive, upper_inclusive) = match op.kind {
            Kind::LessThan => (open, value, true, false),
            Kind::LessThanEq => (open, value, true, true),
            Kind::GreaterThan => (value, open, false, true),
            _ => (value, open, true, true),
        };
        Ok(QueryNode::TermRange(TermRange {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
            span: self.make_span(&field_token.span),
        }))
    }

    // =========================================================================
    // Term production
    // =========================================================================

    fn parse_term(
        &mut self,
        field: Cow<'src, str>,
        start: LuceneSourceSpan,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        match self.token_stream.peek_kind() {
            Kind::Term | Kind::RegexpTerm | Kind::Number => self.parse_plain_term(field, start),
            Kind::RangeInclusiveStart | Kind::RangeExclusiveStart => {
                self.parse_range(field, start)
            },
            Kind::Quoted => self.parse_quoted(field, start),
            _ => Err(self.unexpected_token_error()),
        }
    }

    /// `(TERM | REGEXPTERM | NUMBER) FUZZY_SLOP? ('^' NUMBER FUZZY_SLOP?)?`
    fn parse_plain_term(
        &mut self,
        field: Cow<'src, str>,
        start: LuceneSourceSpan,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let term = self.expect_one_of(LuceneTokenKindSet::of(&[
            Kind::Term,
            Kind::RegexpTerm,
            Kind::Number,
        ]))?;

        let fuzzy_slop = LuceneTokenKindSet::of(&[Kind::FuzzySlop]);
        let mut fuzzy = self.consume_if(fuzzy_slop);
        let mut boost = None;
        if self.consume_if(LuceneTokenKindSet::of(&[Kind::Caret])).is_some() {
            boost = Some(self.expect(Kind::Number)?);
            if let Some(suffix) = self.consume_if(fuzzy_slop) {
                fuzzy = Some(suffix);
            }
        }

        let leaf_span = start.to(fuzzy.as_ref().map_or(&term.span, |t| &t.span));
        let node = if let Some(suffix) = &fuzzy {
            QueryNode::Fuzzy(FuzzyTerm {
                field,
                text: Self::unescape_text(term.image.clone(), &term)?,
                similarity: parse_fuzzy_similarity(suffix)?,
                span: leaf_span,
            })
        } else if term.kind == Kind::RegexpTerm {
            QueryNode::Regexp(RegexpTerm {
                field,
                pattern: strip_delimiters(&term.image),
                span: leaf_span,
            })
        } else {
            QueryNode::FieldTerm(FieldTerm {
                field,
                text: Self::unescape_text(term.image.clone(), &term)?,
                span: leaf_span,
            })
        };

        Ok(self.apply_boost(node, boost, &start))
    }

    /// `('[' | '{') bound TO? bound (']' | '}') ('^' NUMBER)?`
    fn parse_range(
        &mut self,
        field: Cow<'src, str>,
        start: LuceneSourceSpan,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let open = self.expect_one_of(LuceneTokenKindSet::of(&[
            Kind::RangeInclusiveStart,
            Kind::RangeExclusiveStart,
        ]))?;
        let lower_token = self.expect_one_of(RANGE_BOUND)?;
        self.consume_if(LuceneTokenKindSet::of(&[Kind::RangeTo]));
        let upper_token = self.expect_one_of(RANGE_BOUND)?;
        let close = self.expect_one_of(RANGE_END)?;

        let lower = FieldTerm {
            field: field.clone(),
            text: Self::range_bound_text(&lower_token)?,
            span: lower_token.span.clone(),
        };
        let upper = FieldTerm {
            field,
            text: Self::range_bound_text(&upper_token)?,
            span: upper_token.span.clone(),
        };
        let range = QueryNode::TermRange(TermRange {
            lower,
            upper,
            lower_inclusive: open.kind == Kind::RangeInclusiveStart,
            upper_inclusive: close.kind == Kind::RangeInclusiveEnd,
            span: start.to(&close.span),
        });

        let boost = self.parse_optional_boost()?;
        Ok(self.apply_boost(range, boost, &start))
    }

    fn range_bound_text(token: &LuceneToken<'src>) -> Result<Cow<'src, str>, LuceneParseError> {
        let raw = if token.kind == Kind::RangeQuoted {
            strip_delimiters(&token.image)
        } else {
            token.image.clone()
        };
        Self::unescape_text(raw, token)
    }

    /// `QUOTED FUZZY_SLOP? ('^' NUMBER)?`
    fn parse_quoted(
        &mut self,
        field: Cow<'src, str>,
        start: LuceneSourceSpan,
    ) -> Result<QueryNode<'src>, LuceneParseError> {
        let quoted = self.expect(Kind::Quoted)?;
        let slop_token = self.consume_if(LuceneTokenKindSet::of(&[Kind::FuzzySlop]));
        let boost = self.parse_optional_boost()?;

        let phrase = QueryNode::QuotedFieldTerm(QuotedFieldTerm {
            field,
            text: Self::unescape_text(strip_delimiters(&quoted.image), &quoted)?,
            span: start.to(&quoted.span),
        });

        let node = match slop_token.as_ref().and_then(|t| parse_slop(t).map(|s| (t, s))) {
            Some((slop_token, slop)) => QueryNode::Slop(SlopQuery {
                child: Box::new(phrase),
                slop,
                span: start.to(&slop_token.span),
            }),
            None => phrase,
        };

        Ok(self.apply_boost(node, boost, &start))
    }

    // =========================================================================
    // Numeric suffixes
    // =========================================================================

    /// `('^' NUMBER)?`
    fn parse_optional_boost(&mut self) -> Result<Option<LuceneToken<'src>>, LuceneParseError> {
        if self.consume_if(LuceneTokenKindSet::of(&[Kind::Caret])).is_none() {
            return Ok(None);
        }
        self.expect(Kind::Number).map(Some)
    }

    /// Wraps `node` in a [`BoostQuery`] when `boost` holds a non-negative
    /// finite number. Anything else is dropped without error.
    fn apply_boost(
        &self,
        node: QueryNode<'src>,
        boost: Option<LuceneToken<'src>>,
        start: &LuceneSourceSpan,
    ) -> QueryNode<'src> {
        let Some(boost_token) = boost else {
            return node;
        };
        match boost_token.image.parse::<f32>() {
            Ok(value) if value.is_finite() && value >= 0.0 => QueryNode::Boost(BoostQuery {
                child: Box::new(node),
                boost: value,
                span: start.to(&boost_token.span),
            }),
            _ => {
                log::trace!("dropping invalid boost `^{}`", boost_token.image);
                node
            },
        }
    }

    /// Span of the next unconsumed token (or an empty span at EOF).
    fn next_token_span(&mut self) -> LuceneSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// List reduction: one clause is returned as is; more are combined with
/// `operator`.
fn collapse<'src>(operator: BooleanOperator, clauses: Vec<QueryNode<'src>>) -> QueryNode<'src> {
    let span = match (clauses.first(), clauses.last()) {
        (Some(first), Some(last)) => first.span().to(last.span()),
        _ => LuceneSourceSpan::empty_at(SourcePosition::zero()),
    };
    BooleanQuery::collapse(operator, clauses, span)
}

/// Strips the first and last character (quotes or slashes) of a delimited
/// token image.
fn strip_delimiters<'src>(image: &Cow<'src, str>) -> Cow<'src, str> {
    fn inner(s: &str) -> std::ops::Range<usize> {
        let start = s.chars().next().map_or(0, char::len_utf8);
        let end = s.len() - s.chars().next_back().map_or(0, char::len_utf8);
        start..end.max(start)
    }
    match image {
        Cow::Borrowed(s) => {
            let s: &'src str = *s;
            Cow::Borrowed(&s[inner(s)])
        },
        Cow::Owned(s) => Cow::Owned(s[inner(s)].to_string()),
    }
}

/// Parses the numeral of a fuzzy `~N` suffix.
///
/// A bare `~` (or an unparsable numeral) yields the default similarity.
/// Negative values and non-integral values of at least 1 are rejected.
fn parse_fuzzy_similarity(token: &LuceneToken<'_>) -> Result<f32, LuceneParseError> {
    let numeral = token.image.strip_prefix('~').unwrap_or(token.image.as_ref());
    let similarity = numeral
        .parse::<f32>()
        .unwrap_or(FuzzyTerm::DEFAULT_SIMILARITY);

    if similarity < 0.0 {
        let mut err = LuceneParseError::new(
            format!("invalid fuzzy similarity `{numeral}`: must not be negative"),
            token.span.clone(),
            LuceneParseErrorKind::InvalidFuzzyLimits,
        );
        err.add_help("Use a ratio in [0, 1) or a whole number of edits such as `~1` or `~2`");
        return Err(err);
    }
    if similarity >= 1.0 && similarity.fract() != 0.0 {
        let mut err = LuceneParseError::new(
            format!("invalid fuzzy edit distance `{numeral}`: must be a whole number"),
            token.span.clone(),
            LuceneParseErrorKind::InvalidFuzzyEdits,
        );
        err.add_help("Fuzzy values of 1 or more count edits, e.g. `~1` or `~2`");
        return Err(err);
    }
    Ok(similarity)
}

/// Parses the numeral of a phrase `~N` suffix, truncating toward zero.
///
/// Returns `None` (and the slop is dropped) for a bare `~`, a negative
/// numeral, or one that does not parse.
fn parse_slop(token: &LuceneToken<'_>) -> Option<u32> {
    let numeral = token.image.strip_prefix('~').unwrap_or(token.image.as_ref());
    match numeral.parse::<f32>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.trunc() as u32),
        _ => {
            log::trace!("dropping invalid phrase slop `{}`", token.image);
            None
        },
    }
}

fn describe_expected(expected: LuceneTokenKindSet) -> String {
    if expected.len() == 1 {
        format!("expected {}", expected.describe())
    } else {
        format!("expected one of {}", expected.describe())
    }
}
