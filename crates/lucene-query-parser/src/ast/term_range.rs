use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::FieldTerm;
use crate::ast::ast_node::append_field_prefix;
use crate::ast::ast_node::append_quoted_text;
use crate::ast::ast_node::append_span_source_slice;
use inherent::inherent;

/// A range query (e.g. `date:[2020 TO 2021}`, or `price>=10`).
///
/// Each bound is a [`FieldTerm`] on the same field; an open bound has the
/// text `*`. Inclusivity is independent per side.
#[derive(Clone, Debug, PartialEq)]
pub struct TermRange<'src> {
    pub lower: FieldTerm<'src>,
    pub upper: FieldTerm<'src>,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
    pub span: LuceneSourceSpan,
}

impl TermRange<'_> {
    /// The field both bounds are scoped to.
    pub fn field(&self) -> &str {
        &self.lower.field
    }
}

/// Appends a range bound so that it lexes back as a single bound.
fn append_bound(sink: &mut String, text: &str) {
    let needs_quotes = text.is_empty()
        || text == "TO"
        || text
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, ']' | '}' | '"' | '\\'));
    if needs_quotes {
        append_quoted_text(sink, text);
    } else {
        sink.push_str(text);
    }
}

#[inherent]
impl AstNode for TermRange<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_field_prefix(sink, self.field());
        sink.push(if self.lower_inclusive { '[' } else { '{' });
        append_bound(sink, &self.lower.text);
        sink.push_str(" TO ");
        append_bound(sink, &self.upper.text);
        sink.push(if self.upper_inclusive { ']' } else { '}' });
    }
}
