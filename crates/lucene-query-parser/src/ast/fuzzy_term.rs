use crate::LuceneSourceSpan;
use crate::ast::AstNode;
use crate::ast::ast_node::append_field_prefix;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::ast_node::append_term_text;
use inherent::inherent;
use std::borrow::Cow;

/// An approximate term match (e.g. `roam~`, `roam~1`, `roam~0.8`).
///
/// `similarity` is either a ratio in `[0, 1)` or a whole number of edits
/// (see [`edit_distance()`](Self::edit_distance)). A bare `~` yields
/// [`FuzzyTerm::DEFAULT_SIMILARITY`].
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyTerm<'src> {
    pub field: Cow<'src, str>,
    pub text: Cow<'src, str>,
    pub similarity: f32,
    pub span: LuceneSourceSpan,
}

impl FuzzyTerm<'_> {
    /// Similarity used when the `~` suffix has no (parsable) numeral.
    pub const DEFAULT_SIMILARITY: f32 = 2.0;

    /// The maximum number of edits, when `similarity` is expressed as an
    /// edit distance rather than a ratio.
    pub fn edit_distance(&self) -> Option<u32> {
        if self.similarity >= 1.0 && self.similarity.fract() == 0.0 {
            Some(self.similarity as u32)
        } else {
            None
        }
    }
}

#[inherent]
impl AstNode for FuzzyTerm<'_> {
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
        sink.push('~');
        sink.push_str(&self.similarity.to_string());
    }
}
