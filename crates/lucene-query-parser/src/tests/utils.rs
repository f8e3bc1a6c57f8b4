//! Various test utils.

use crate::LuceneParseError;
use crate::LuceneSourceSpan;
use crate::SourcePosition;
use crate::ast::BooleanOperator;
use crate::ast::ModifierKind;
use crate::ast::QueryNode;
use crate::token::LuceneToken;
use crate::token::LuceneTokenKind;
use std::cell::Cell;
use std::rc::Rc;

/// Default field used by the parse helpers below.
pub const DEFAULT_FIELD: &str = "default";

/// Creates a mock token with the given kind and image and a zero span.
pub fn mock_token(kind: LuceneTokenKind, image: &str) -> LuceneToken<'static> {
    let pos = SourcePosition::zero();
    LuceneToken::new(
        kind,
        image.to_string(),
        LuceneSourceSpan::new(pos.clone(), pos),
    )
}

/// Creates a mock Term token.
pub fn mock_term_token(text: &str) -> LuceneToken<'static> {
    mock_token(LuceneTokenKind::Term, text)
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> LuceneToken<'static> {
    mock_token(LuceneTokenKind::Eof, "")
}

/// A mock token source that produces tokens from a Vec and counts how many
/// tokens it has handed out.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<LuceneToken<'static>>,
    pulls: Rc<Cell<usize>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<LuceneToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            pulls: Rc::new(Cell::new(0)),
        }
    }

    /// A shared handle to the pull counter, readable after the source has
    /// been moved into a stream or parser.
    pub fn pull_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.pulls)
    }
}

impl Iterator for MockTokenSource {
    type Item = LuceneToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next();
        if token.is_some() {
            self.pulls.set(self.pulls.get() + 1);
        }
        token
    }
}

/// Parses `query` under [`DEFAULT_FIELD`] and renders the tree as an
/// S-expression, panicking on parse errors.
pub fn parse_sexpr(query: &str) -> String {
    match crate::parse(query, DEFAULT_FIELD) {
        Ok(root) => sexpr(&root),
        Err(err) => panic!("failed to parse `{query}`: {}", err.format_detailed(None)),
    }
}

/// Parses `query` under [`DEFAULT_FIELD`], expecting an error.
pub fn parse_err(query: &str) -> LuceneParseError {
    match crate::parse(query, DEFAULT_FIELD) {
        Ok(root) => panic!("expected `{query}` to fail, got {}", sexpr(&root)),
        Err(err) => err,
    }
}

/// Renders a tree as a compact S-expression that ignores spans.
///
/// - `field:text` for terms, `field:"text"` for phrases
/// - `Fuzzy(field:text~0.5)`, `Regexp(field:/re/)`
/// - `Range(field [lo TO hi})`
/// - `Query(..)`, `And(..)`, `Or(..)` for booleans
/// - `Required(..)`, `Prohibited(..)`, `Boost(.., 2)`, `Slop(.., 3)`,
///   `Group(..)`
pub fn sexpr(node: &QueryNode<'_>) -> String {
    match node {
        QueryNode::FieldTerm(t) => format!("{}:{}", t.field, t.text),
        QueryNode::QuotedFieldTerm(t) => format!("{}:\"{}\"", t.field, t.text),
        QueryNode::Fuzzy(t) => format!("Fuzzy({}:{}~{})", t.field, t.text, t.similarity),
        QueryNode::Regexp(t) => format!("Regexp({}:/{}/)", t.field, t.pattern),
        QueryNode::TermRange(r) => format!(
            "Range({} {}{} TO {}{})",
            r.field(),
            if r.lower_inclusive { '[' } else { '{' },
            r.lower.text,
            r.upper.text,
            if r.upper_inclusive { ']' } else { '}' },
        ),
        QueryNode::Boolean(b) => {
            let name = match b.operator {
                BooleanOperator::Implicit => "Query",
                BooleanOperator::And => "And",
                BooleanOperator::Or => "Or",
            };
            let clauses: Vec<String> = b.clauses.iter().map(sexpr).collect();
            format!("{name}({})", clauses.join(", "))
        },
        QueryNode::Modifier(m) => {
            let name = match m.kind {
                ModifierKind::Required => "Required",
                ModifierKind::Prohibited => "Prohibited",
            };
            format!("{name}({})", sexpr(&m.child))
        },
        QueryNode::Boost(b) => format!("Boost({}, {})", sexpr(&b.child), b.boost),
        QueryNode::Slop(s) => format!("Slop({}, {})", sexpr(&s.child), s.slop),
        QueryNode::Group(g) => format!("Group({})", sexpr(&g.child)),
    }
}

/// Returns `true` if any boolean node in the tree has fewer than two
/// clauses.
pub fn has_degenerate_boolean(node: &QueryNode<'_>) -> bool {
    match node {
        QueryNode::Boolean(b) => {
            b.clauses.len() < 2 || b.clauses.iter().any(has_degenerate_boolean)
        },
        other => other.child().is_some_and(has_degenerate_boolean),
    }
}

/// Collects the kinds produced by lexing `query`.
pub fn lex_kinds(query: &str) -> Vec<LuceneTokenKind> {
    crate::token_source::StrLuceneTokenSource::new(query)
        .map(|token| token.kind)
        .collect()
}
