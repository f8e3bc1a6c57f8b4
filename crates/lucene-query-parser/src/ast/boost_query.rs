use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::QueryNode;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;

/// A clause with a `^weight` suffix.
///
/// `boost` is always finite and non-negative; other suffixes are dropped
/// while parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct BoostQuery<'src> {
    pub child: Box<QueryNode<'src>>,
    pub boost: f32,
    pub span: LuceneSourceSpan,
}

#[inherent]
impl AstNode for BoostQuery<'_> {
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
        sink.push('^');
        sink.push_str(&self.boost.to_string());
    }
}
