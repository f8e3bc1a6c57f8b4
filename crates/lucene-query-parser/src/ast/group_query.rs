use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::QueryNode;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;

/// An explicitly parenthesized query (e.g. `(a OR b)`, `title:(a b)`).
///
/// Field prefixes are resolved into the child's leaves, so `title:(a b)`
/// and `(title:a title:b)` produce equal children.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupQuery<'src> {
    pub child: Box<QueryNode<'src>>,
    pub span: LuceneSourceSpan,
}

#[inherent]
impl AstNode for GroupQuery<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push('(');
        self.child.append_source(sink, None);
        sink.push(')');
    }
}
