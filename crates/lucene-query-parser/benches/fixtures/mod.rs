pub const SIMPLE_QUERY: &str = "rust";

pub const FIELDED_QUERY: &str =
    r#"title:lucene AND -author:"jane doe"~2"#;

pub const COMPLEX_QUERY: &str = concat!(
    r#"+title:(rust OR go^2 OR "systems programming"~3) "#,
    r#"-status:(draft OR archived) "#,
    r#"date:[2020-01-01 TO *} price>=10 price<100 "#,
    r#"author:/j(ane|ohn)/ roam~1 te?t* "#,
    r#"(body:"memory safety" AND NOT body:unsafe)^0.5"#,
);

/// A query that fails near the end, exercising expected-set
/// reconstruction.
pub const FAILING_QUERY: &str =
    r#"title:(rust OR go) AND date:[2020 TO 2021} AND author:"#;

pub mod queries;
