use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::QueryNode;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;

/// How the clauses of a [`BooleanQuery`] combine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BooleanOperator {
    /// Clauses written next to each other (`a b`).
    Implicit,
    /// `a AND b`
    And,
    /// `a OR b`
    Or,
}

impl BooleanOperator {
    /// Binding strength; higher binds tighter.
    fn precedence(self) -> u8 {
        match self {
            BooleanOperator::Implicit => 0,
            BooleanOperator::Or => 1,
            BooleanOperator::And => 2,
        }
    }

    fn separator(self) -> &'static str {
        match self {
            BooleanOperator::Implicit => " ",
            BooleanOperator::Or => " OR ",
            BooleanOperator::And => " AND ",
        }
    }
}

/// Two or more clauses combined by one operator.
///
/// A `BooleanQuery` never has fewer than two clauses; build one through
/// [`BooleanQuery::collapse`] to get the single clause back instead.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanQuery<'src> {
    pub operator: BooleanOperator,
    pub clauses: Vec<QueryNode<'src>>,
    pub span: LuceneSourceSpan,
}

impl<'src> BooleanQuery<'src> {
    /// Returns the only clause if there is exactly one, otherwise a
    /// `BooleanQuery` over all of them in order.
    ///
    /// `clauses` must not be empty.
    pub fn collapse(
        operator: BooleanOperator,
        mut clauses: Vec<QueryNode<'src>>,
        span: LuceneSourceSpan,
    ) -> QueryNode<'src> {
        if clauses.len() == 1
            && let Some(only) = clauses.pop()
        {
            return only;
        }
        QueryNode::Boolean(BooleanQuery {
            operator,
            clauses,
            span,
        })
    }
}

#[inherent]
impl AstNode for BooleanQuery<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                sink.push_str(self.operator.separator());
            }
            let needs_parens = matches!(
                clause,
                QueryNode::Boolean(inner)
                    if inner.operator.precedence() <= self.operator.precedence()
            );
            if needs_parens {
                sink.push('(');
                clause.append_source(sink, None);
                sink.push(')');
            } else {
                clause.append_source(sink, None);
            }
        }
    }
}
