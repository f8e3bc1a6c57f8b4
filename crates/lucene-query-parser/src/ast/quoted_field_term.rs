use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::ast_node::append_field_prefix;
use crate::ast::ast_node::append_quoted_text;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;
use std::borrow::Cow;

/// A phrase (e.g. `title:"hello world"`).
///
/// `text` has its quotes stripped and escapes resolved. The span includes
/// the quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct QuotedFieldTerm<'src> {
    pub field: Cow<'src, str>,
    pub text: Cow<'src, str>,
    pub span: LuceneSourceSpan,
}

#[inherent]
impl AstNode for QuotedFieldTerm<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_field_prefix(sink, &self.field);
        append_quoted_text(sink, &self.text);
    }
}
