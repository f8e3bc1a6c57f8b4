//! This module provides the core token types used by Lucene query token
//! sources and the parser.

mod lucene_token;
mod lucene_token_kind;
mod lucene_token_kind_set;

pub use lucene_token::LuceneLexerError;
pub use lucene_token::LuceneToken;
pub use lucene_token_kind::LuceneTokenKind;
pub use lucene_token_kind_set::LuceneTokenKindSet;
