use crate::LuceneSourceSpan;
use crate::escape::escape_quoted;
use crate::escape::escape_term;

/// Append the source text for `span` to `sink` by slicing
/// directly from `source` via byte offsets (zero-copy,
/// lossless).
pub(crate) fn append_span_source_slice(
    span: &LuceneSourceSpan,
    sink: &mut String,
    source: &str,
) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end,
        "append_span_source_slice: inverted span \
         (start {start} > end {end})",
    );
    debug_assert!(
        end <= source.len(),
        "append_span_source_slice: span byte range \
         {}..{} exceeds source length {}",
        start,
        end,
        source.len(),
    );
    sink.push_str(&source[start..end]);
}

/// Appends `text` as a bare term, escaped so that it lexes back to the same
/// value.
pub(crate) fn append_term_text(sink: &mut String, text: &str) {
    if matches!(text, "AND" | "OR" | "NOT") {
        sink.push('\\');
    }
    sink.push_str(&escape_term(text));
}

/// Appends `field:`.
pub(crate) fn append_field_prefix(sink: &mut String, field: &str) {
    append_term_text(sink, field);
    sink.push(':');
}

/// Appends `text` between double quotes.
pub(crate) fn append_quoted_text(sink: &mut String, text: &str) {
    sink.push('"');
    sink.push_str(&escape_quoted(text));
    sink.push('"');
}

/// Trait implemented by all AST node types. Provides source
/// reconstruction methods.
///
/// All AST node types implement this trait via
/// `#[inherent] impl AstNode`, giving each node both inherent
/// methods (no trait import needed) and a trait bound for generic
/// utilities.
///
/// # Source Reconstruction Modes
///
/// - **Source-slice mode (fast, lossless):** When `source` is
///   `Some(s)`, [`append_source`](AstNode::append_source) slices
///   `&s[span.start.byte_offset..span.end.byte_offset]`. The slice
///   includes any field prefix the node was parsed with.
///
/// - **Canonical mode:** When `source` is `None`,
///   [`append_source`](AstNode::append_source) renders Lucene syntax
///   from the node's semantic data: every leaf is written with an
///   explicit `field:` prefix, modifiers as `+`/`-`, and special
///   characters re-escaped. The output parses back to an equivalent
///   tree.
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    );

    /// Return this node as a source string.
    ///
    /// Convenience wrapper around
    /// [`append_source`](AstNode::append_source).
    fn to_source(
        &self,
        source: Option<&str>,
    ) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}
