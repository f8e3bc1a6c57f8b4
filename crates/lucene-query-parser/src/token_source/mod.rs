//! Token source trait and implementations.

mod lucene_token_source;
mod str_lucene_token_source;

pub use lucene_token_source::LuceneTokenSource;
pub use str_lucene_token_source::StrLuceneTokenSource;
