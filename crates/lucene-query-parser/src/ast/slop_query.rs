use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::QueryNode;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;

/// A phrase with a `~slop` proximity suffix (e.g. `"jakarta apache"~10`).
#[derive(Clone, Debug, PartialEq)]
pub struct SlopQuery<'src> {
    pub child: Box<QueryNode<'src>>,
    pub slop: u32,
    pub span: LuceneSourceSpan,
}

#[inherent]
impl AstNode for SlopQuery<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        self.child.append_wrapped_source(sink);
        sink.push('~');
        sink.push_str(&self.slop.to_string());
    }
}
