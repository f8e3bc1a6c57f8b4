use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::BooleanQuery;
use crate::ast::BoostQuery;
use crate::ast::FieldTerm;
use crate::ast::FuzzyTerm;
use crate::ast::GroupQuery;
use crate::ast::ModifierQuery;
use crate::ast::QuotedFieldTerm;
use crate::ast::RegexpTerm;
use crate::ast::SlopQuery;
use crate::ast::TermRange;
use inherent::inherent;

/// A node of a parsed Lucene query.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryNode<'src> {
    FieldTerm(FieldTerm<'src>),
    QuotedFieldTerm(QuotedFieldTerm<'src>),
    Fuzzy(FuzzyTerm<'src>),
    Regexp(RegexpTerm<'src>),
    TermRange(TermRange<'src>),
    Boolean(BooleanQuery<'src>),
    Modifier(ModifierQuery<'src>),
    Boost(BoostQuery<'src>),
    Slop(SlopQuery<'src>),
    Group(GroupQuery<'src>),
}

impl<'src> QueryNode<'src> {
    /// The source span of this node.
    pub fn span(&self) -> &LuceneSourceSpan {
        match self {
            QueryNode::FieldTerm(n) => &n.span,
            QueryNode::QuotedFieldTerm(n) => &n.span,
            QueryNode::Fuzzy(n) => &n.span,
            QueryNode::Regexp(n) => &n.span,
            QueryNode::TermRange(n) => &n.span,
            QueryNode::Boolean(n) => &n.span,
            QueryNode::Modifier(n) => &n.span,
            QueryNode::Boost(n) => &n.span,
            QueryNode::Slop(n) => &n.span,
            QueryNode::Group(n) => &n.span,
        }
    }

    /// The wrapped child of a `Modifier`, `Boost`, `Slop` or `Group` node.
    pub fn child(&self) -> Option<&QueryNode<'src>> {
        match self {
            QueryNode::Modifier(n) => Some(&n.child),
            QueryNode::Boost(n) => Some(&n.child),
            QueryNode::Slop(n) => Some(&n.child),
            QueryNode::Group(n) => Some(&n.child),
            _ => None,
        }
    }

    /// Renders this node canonically as the operand of a modifier or
    /// suffix, parenthesizing boolean queries.
    pub(crate) fn append_wrapped_source(&self, sink: &mut String) {
        if matches!(self, QueryNode::Boolean(_)) {
            sink.push('(');
            self.append_source(sink, None);
            sink.push(')');
        } else {
            self.append_source(sink, None);
        }
    }
}

#[inherent]
impl AstNode for QueryNode<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            QueryNode::FieldTerm(n) => n.append_source(sink, source),
            QueryNode::QuotedFieldTerm(n) => n.append_source(sink, source),
            QueryNode::Fuzzy(n) => n.append_source(sink, source),
            QueryNode::Regexp(n) => n.append_source(sink, source),
            QueryNode::TermRange(n) => n.append_source(sink, source),
            QueryNode::Boolean(n) => n.append_source(sink, source),
            QueryNode::Modifier(n) => n.append_source(sink, source),
            QueryNode::Boost(n) => n.append_source(sink, source),
            QueryNode::Slop(n) => n.append_source(sink, source),
            QueryNode::Group(n) => n.append_source(sink, source),
        }
    }
}
