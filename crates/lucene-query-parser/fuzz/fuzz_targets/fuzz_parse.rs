#![no_main]

use libfuzzer_sys::fuzz_target;
use lucene_query_parser::LuceneParser;
use lucene_query_parser::ast::AstNode;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    match LuceneParser::new(s).parse("body") {
        Ok(root) => {
            let rendered = root.to_source(None);
            assert!(
                lucene_query_parser::parse(&rendered, "body").is_ok(),
                "canonical rendering `{rendered}` of `{s}` failed to parse",
            );
        },
        Err(err) => {
            let _ = err.format_detailed(None);
        },
    }
});
