//! Syntax tree types for parsed Lucene queries.
//!
//! All node types are parameterized over a `'src` lifetime and borrow
//! field names and term text from the query via [`Cow<'src, str>`] when no
//! unescaping was needed. Every node carries a
//! [`LuceneSourceSpan`](crate::LuceneSourceSpan).
//!
//! [`Cow<'src, str>`]: std::borrow::Cow

mod ast_node;
mod boolean_query;
mod boost_query;
mod field_term;
mod fuzzy_term;
mod group_query;
mod modifier_query;
mod query_node;
mod quoted_field_term;
mod regexp_term;
mod slop_query;
mod term_range;

pub use ast_node::AstNode;
pub use boolean_query::BooleanOperator;
pub use boolean_query::BooleanQuery;
pub use boost_query::BoostQuery;
pub use field_term::FieldTerm;
pub use fuzzy_term::FuzzyTerm;
pub use group_query::GroupQuery;
pub use modifier_query::ModifierKind;
pub use modifier_query::ModifierQuery;
pub use query_node::QueryNode;
pub use quoted_field_term::QuotedFieldTerm;
pub use regexp_term::RegexpTerm;
pub use slop_query::SlopQuery;
pub use term_range::TermRange;
