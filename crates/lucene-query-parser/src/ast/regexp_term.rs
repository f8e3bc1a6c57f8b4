use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::ast_node::append_field_prefix;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;
use std::borrow::Cow;

/// A regular expression match (e.g. `name:/joh?n(ath[oa]n)/`).
///
/// `pattern` has the delimiting slashes stripped but is otherwise raw:
/// `\/` stays as written.
#[derive(Clone, Debug, PartialEq)]
pub struct RegexpTerm<'src> {
    pub field: Cow<'src, str>,
    pub pattern: Cow<'src, str>,
    pub span: LuceneSourceSpan,
}

#[inherent]
impl AstNode for RegexpTerm<'_> {
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
        sink.push('/');
        sink.push_str(&self.pattern);
        sink.push('/');
    }
}
