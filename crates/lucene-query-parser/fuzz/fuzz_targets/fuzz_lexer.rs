#![no_main]

use libfuzzer_sys::fuzz_target;
use lucene_query_parser::token_source::StrLuceneTokenSource;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let token_source = StrLuceneTokenSource::new(s);
    for _ in token_source {}
});
