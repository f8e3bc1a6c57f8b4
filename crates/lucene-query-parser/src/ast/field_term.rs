use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::ast_node::append_field_prefix;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::ast_node::append_term_text;
use inherent::inherent;
use std::borrow::Cow;

/// A single term scoped to a field (e.g. `title:rust`, or `rust` under the
/// default field).
///
/// `text` is unescaped. Wildcards (`*`, `?`) are kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldTerm<'src> {
    pub field: Cow<'src, str>,
    pub text: Cow<'src, str>,
    pub span: LuceneSourceSpan,
}

impl<'src> FieldTerm<'src> {
    /// Text of an open range bound.
    pub const OPEN_BOUND: &'static str = "*";

    /// Whether this term is the `*` sentinel of an open range bound.
    pub fn is_open_bound(&self) -> bool {
        self.text == Self::OPEN_BOUND
    }
}

#[inherent]
impl AstNode for FieldTerm<'_> {
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
        append_term_text(sink, &self.text);
    }
}
