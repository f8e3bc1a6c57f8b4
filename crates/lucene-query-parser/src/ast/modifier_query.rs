use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::QueryNode;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;

/// The kind of a clause modifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModifierKind {
    /// `+clause`
    Required,
    /// `-clause`, `NOT clause` or `!clause`
    Prohibited,
}

/// A clause preceded by `+`, `-` or `NOT`.
#[derive(Clone, Debug, PartialEq)]
pub struct ModifierQuery<'src> {
    pub kind: ModifierKind,
    pub child: Box<QueryNode<'src>>,
    pub span: LuceneSourceSpan,
}

#[inherent]
impl AstNode for ModifierQuery<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push(match self.kind {
            ModifierKind::Required => '+',
            ModifierKind::Prohibited => '-',
        });
        self.child.append_wrapped_source(sink);
    }
}
