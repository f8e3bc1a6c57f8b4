mod ast_source_tests;
mod lucene_parse_error_tests;
mod lucene_parser_tests;
pub(crate) mod utils;
