//! Tests for the tree shapes `LuceneParser` produces on valid input.

use crate::LuceneParser;
use crate::ast::BooleanOperator;
use crate::ast::FuzzyTerm;
use crate::ast::QueryNode;
use crate::tests::utils::DEFAULT_FIELD;
use crate::tests::utils::parse_sexpr;
use crate::tests::utils::sexpr;

// =============================================================================
// Terms and field scoping
// =============================================================================

/// Verifies that a lone term is scoped to the default field.
#[test]
fn test_single_term() {
    assert_eq!(parse_sexpr("rust"), "default:rust");
}

/// Verifies that `field:term` and `field=term` override the default field.
#[test]
fn test_fielded_term() {
    assert_eq!(parse_sexpr("title:rust"), "title:rust");
    assert_eq!(parse_sexpr("title=rust"), "title:rust");
}

/// Verifies that a field prefix applies only to the clause it precedes.
#[test]
fn test_field_does_not_leak() {
    assert_eq!(parse_sexpr("title:a b"), "Query(title:a, default:b)");
    assert_eq!(parse_sexpr("a title:b"), "Query(default:a, title:b)");
}

/// Verifies that a field prefix on a group scopes every clause inside it.
#[test]
fn test_field_scopes_group() {
    assert_eq!(parse_sexpr("title:(a b)"), "Group(Query(title:a, title:b))");
    assert_eq!(
        parse_sexpr("title:(a OR (b c))"),
        "Group(Or(title:a, Group(Query(title:b, title:c))))",
    );
}

/// Verifies that an inner field prefix overrides an outer one.
#[test]
fn test_inner_field_overrides_group_field() {
    assert_eq!(parse_sexpr("title:(a body:b)"), "Group(Query(title:a, body:b))");
}

/// Verifies that escapes in field names and terms are resolved.
#[test]
fn test_escaped_field_and_term() {
    assert_eq!(parse_sexpr(r"my\ field:x\:y"), "my field:x:y");
    assert_eq!(parse_sexpr(r"Abc"), "default:Abc");
}

/// Verifies that escaped keywords are plain terms.
#[test]
fn test_escaped_keyword_is_term() {
    assert_eq!(parse_sexpr(r"\AND"), "default:AND");
}

/// Verifies that wildcards and inner dashes survive as term text.
#[test]
fn test_wildcard_and_dash_terms() {
    assert_eq!(parse_sexpr("te?t* foo-bar"), "Query(default:te?t*, default:foo-bar)");
    assert_eq!(parse_sexpr("*:*"), "*:*");
}

/// Verifies that numbers parse as ordinary terms.
#[test]
fn test_number_term() {
    assert_eq!(parse_sexpr("count:10"), "count:10");
    assert_eq!(parse_sexpr("3.14"), "default:3.14");
}

/// Verifies that a digit run can name a field, both for terms and for
/// comparisons.
#[test]
fn test_numeric_field_name() {
    assert_eq!(parse_sexpr("2020:foo"), "2020:foo");
    assert_eq!(parse_sexpr("a 10:30"), "Query(default:a, 10:30)");
    assert_eq!(parse_sexpr("10>5"), "Range(10 {5 TO *])");
    assert_eq!(parse_sexpr("1.5=x"), "1.5:x");
}

/// Verifies that a phrase keeps its inner text with escapes resolved.
#[test]
fn test_quoted_phrase() {
    assert_eq!(parse_sexpr(r#"author:"jane doe""#), r#"author:"jane doe""#);
    assert_eq!(parse_sexpr(r#""a\:b""#), r#"default:"a:b""#);
    assert_eq!(parse_sexpr(r#""say \"hi\"""#), r#"default:"say "hi"""#);
}

/// Verifies that a regular expression keeps its pattern verbatim.
#[test]
fn test_regexp() {
    assert_eq!(parse_sexpr("name:/jo[hn]+/"), "Regexp(name:/jo[hn]+/)");
    assert_eq!(parse_sexpr(r"/a\/b/"), r"Regexp(default:/a\/b/)");
}

// =============================================================================
// Boolean structure
// =============================================================================

/// Verifies that AND binds tighter than OR, which binds tighter than
/// juxtaposition.
#[test]
fn test_precedence() {
    assert_eq!(
        parse_sexpr("a OR b AND c"),
        "Or(default:a, And(default:b, default:c))",
    );
    assert_eq!(
        parse_sexpr("a AND b OR c"),
        "Or(And(default:a, default:b), default:c)",
    );
    assert_eq!(
        parse_sexpr("a b AND c"),
        "Query(default:a, And(default:b, default:c))",
    );
    assert_eq!(
        parse_sexpr("a OR b c"),
        "Query(Or(default:a, default:b), default:c)",
    );
}

/// Verifies that the symbolic spellings behave like the keywords.
#[test]
fn test_symbolic_operators() {
    assert_eq!(
        parse_sexpr("a && b || c"),
        "Or(And(default:a, default:b), default:c)",
    );
}

/// Verifies that runs of the same operator produce one flat node.
#[test]
fn test_flat_operator_chains() {
    assert_eq!(
        parse_sexpr("a AND b AND c"),
        "And(default:a, default:b, default:c)",
    );
    assert_eq!(parse_sexpr("a b c"), "Query(default:a, default:b, default:c)");
}

/// Verifies that single-clause levels collapse to their clause.
#[test]
fn test_singleton_collapse() {
    let root = crate::parse("(a)", DEFAULT_FIELD).unwrap();
    let QueryNode::Group(group) = &root else {
        panic!("expected a group, got {}", sexpr(&root));
    };
    assert!(matches!(*group.child, QueryNode::FieldTerm(_)));
}

/// Verifies the boolean operator and clause order of a mixed query.
#[test]
fn test_boolean_node_fields() {
    let root = crate::parse("x OR y", DEFAULT_FIELD).unwrap();
    let QueryNode::Boolean(boolean) = root else {
        panic!("expected a boolean query");
    };
    assert_eq!(boolean.operator, BooleanOperator::Or);
    assert_eq!(boolean.clauses.len(), 2);
}

// =============================================================================
// Modifiers
// =============================================================================

/// Verifies that `-term`, `!term` and `NOT term` are equivalent.
#[test]
fn test_prohibited_spellings() {
    for query in ["-term", "!term", "NOT term"] {
        assert_eq!(parse_sexpr(query), "Prohibited(default:term)", "{query}");
    }
}

/// Verifies required and prohibited clauses side by side.
#[test]
fn test_required_and_prohibited() {
    assert_eq!(
        parse_sexpr("+a -b"),
        "Query(Required(default:a), Prohibited(default:b))",
    );
    assert_eq!(
        parse_sexpr("a AND NOT b"),
        "And(default:a, Prohibited(default:b))",
    );
}

/// Verifies that a modifier applies to a whole group.
#[test]
fn test_modifier_on_group() {
    assert_eq!(
        parse_sexpr("-(a OR b)"),
        "Prohibited(Group(Or(default:a, default:b)))",
    );
    assert_eq!(parse_sexpr("+title:(a)"), "Required(Group(title:a))");
}

// =============================================================================
// Ranges
// =============================================================================

/// Verifies inclusive, exclusive and mixed ranges.
#[test]
fn test_ranges() {
    assert_eq!(parse_sexpr("date:[a TO b]"), "Range(date [a TO b])");
    assert_eq!(parse_sexpr("date:{a TO b}"), "Range(date {a TO b})");
    assert_eq!(parse_sexpr("date:[a TO b}"), "Range(date [a TO b})");
    assert_eq!(parse_sexpr("[1 TO 5]"), "Range(default [1 TO 5])");
}

/// Verifies that `TO` may be omitted and that bounds may be quoted or open.
#[test]
fn test_range_bound_forms() {
    assert_eq!(parse_sexpr("f:[a b]"), "Range(f [a TO b])");
    assert_eq!(parse_sexpr(r#"f:["a b" TO *]"#), "Range(f [a b TO *])");
    assert_eq!(parse_sexpr(r#"f:["TO" TO "x\"y"]"#), r#"Range(f [TO TO x"y])"#);
}

/// Verifies that both bounds of a range share the range's field.
#[test]
fn test_range_bounds_share_field() {
    let root = crate::parse("date:[2020 TO 2021]", DEFAULT_FIELD).unwrap();
    let QueryNode::TermRange(range) = root else {
        panic!("expected a range");
    };
    assert_eq!(range.lower.field, "date");
    assert_eq!(range.upper.field, "date");
    assert!(!range.lower.is_open_bound());
}

/// Verifies that comparison operators become half-open ranges.
#[test]
fn test_comparisons() {
    assert_eq!(parse_sexpr("price>10"), "Range(price {10 TO *])");
    assert_eq!(parse_sexpr("price>=10"), "Range(price [10 TO *])");
    assert_eq!(parse_sexpr("price<10"), "Range(price [* TO 10})");
    assert_eq!(parse_sexpr("price<=10"), "Range(price [* TO 10])");
    assert_eq!(
        parse_sexpr(r#"date>="2020-01-01""#),
        "Range(date [2020-01-01 TO *])",
    );
    assert_eq!(parse_sexpr("name<m"), "Range(name [* TO m})");
}

/// Verifies that the open side of a comparison is an open bound.
#[test]
fn test_comparison_open_bound() {
    let root = crate::parse("price>=10", DEFAULT_FIELD).unwrap();
    let QueryNode::TermRange(range) = root else {
        panic!("expected a range");
    };
    assert!(range.upper.is_open_bound());
    assert!(!range.lower.is_open_bound());
}

/// Verifies comparisons alongside other clauses.
#[test]
fn test_comparison_in_boolean() {
    assert_eq!(
        parse_sexpr("title:rust AND price<=10"),
        "And(title:rust, Range(price [* TO 10]))",
    );
}

// =============================================================================
// Fuzzy, slop and boost
// =============================================================================

/// Verifies the accepted fuzzy similarities.
#[test]
fn test_fuzzy() {
    assert_eq!(parse_sexpr("roam~"), "Fuzzy(default:roam~2)");
    assert_eq!(parse_sexpr("roam~1"), "Fuzzy(default:roam~1)");
    assert_eq!(parse_sexpr("roam~0.8"), "Fuzzy(default:roam~0.8)");
    assert_eq!(parse_sexpr("roam~0"), "Fuzzy(default:roam~0)");
}

/// Verifies the edit distance accessor of a fuzzy term.
#[test]
fn test_fuzzy_edit_distance() {
    let root = crate::parse("roam~", DEFAULT_FIELD).unwrap();
    let QueryNode::Fuzzy(fuzzy) = root else {
        panic!("expected a fuzzy term");
    };
    assert_eq!(fuzzy.similarity, FuzzyTerm::DEFAULT_SIMILARITY);
    assert_eq!(fuzzy.edit_distance(), Some(2));

    let root = crate::parse("roam~0.5", DEFAULT_FIELD).unwrap();
    let QueryNode::Fuzzy(fuzzy) = root else {
        panic!("expected a fuzzy term");
    };
    assert_eq!(fuzzy.edit_distance(), None);
}

/// Verifies that a fuzzy suffix on a regular expression yields a fuzzy term
/// over the whole slash-delimited text.
#[test]
fn test_fuzzy_regexp() {
    assert_eq!(parse_sexpr("/ab/~1"), "Fuzzy(default:/ab/~1)");
}

/// Verifies that a phrase `~N` suffix is a slop.
#[test]
fn test_phrase_slop() {
    assert_eq!(parse_sexpr(r#""a b"~3"#), r#"Slop(default:"a b", 3)"#);
    assert_eq!(parse_sexpr(r#""a b"~2.9"#), r#"Slop(default:"a b", 2)"#);
}

/// Verifies that a slop without a usable numeral is dropped, and that a
/// negative slop drops the same way instead of failing the parse.
#[test]
fn test_phrase_slop_dropped() {
    assert_eq!(parse_sexpr(r#""a b"~"#), r#"default:"a b""#);
    assert_eq!(parse_sexpr(r#""a b"~-1"#), r#"default:"a b""#);

    let root = crate::parse(r#"title:"p"~-2"#, DEFAULT_FIELD).unwrap();
    assert!(matches!(root, QueryNode::QuotedFieldTerm(_)));
}

/// Verifies boosts on terms, phrases, ranges and groups.
#[test]
fn test_boost() {
    assert_eq!(parse_sexpr("term^2.5"), "Boost(default:term, 2.5)");
    assert_eq!(parse_sexpr(r#""a b"^2"#), r#"Boost(default:"a b", 2)"#);
    assert_eq!(parse_sexpr("f:[a TO b]^2"), "Boost(Range(f [a TO b]), 2)");
    assert_eq!(
        parse_sexpr("(a OR b)^3"),
        "Boost(Group(Or(default:a, default:b)), 3)",
    );
    assert_eq!(
        parse_sexpr("title:(a OR b)^2"),
        "Boost(Group(Or(title:a, title:b)), 2)",
    );
}

/// Verifies that a boost wraps the slop of a phrase.
#[test]
fn test_boost_wraps_slop() {
    assert_eq!(
        parse_sexpr(r#""a b"~2^3"#),
        r#"Boost(Slop(default:"a b", 2), 3)"#,
    );
}

/// Verifies that a fuzzy suffix may follow a boost.
#[test]
fn test_fuzzy_after_boost() {
    assert_eq!(parse_sexpr("roam^2~1"), "Boost(Fuzzy(default:roam~1), 2)");
}

/// Verifies that malformed or negative boosts are dropped without error.
#[test]
fn test_lenient_boost() {
    assert_eq!(parse_sexpr("term^abc"), "default:term");
    assert_eq!(parse_sexpr("term^-2"), "default:term");
    assert_eq!(parse_sexpr("(a b)^x"), "Group(Query(default:a, default:b))");
}

/// Verifies that a boost of zero is kept.
#[test]
fn test_zero_boost() {
    assert_eq!(parse_sexpr("term^0"), "Boost(default:term, 0)");
}

// =============================================================================
// End-to-end
// =============================================================================

/// Verifies a query that combines field scoping, a modifier, a phrase and a
/// slop.
#[test]
fn test_mixed_query() {
    assert_eq!(
        parse_sexpr(r#"title:lucene AND -author:"jane doe"~2"#),
        r#"And(title:lucene, Prohibited(Slop(author:"jane doe", 2)))"#,
    );
}

/// Verifies a larger query touching most of the grammar.
#[test]
fn test_kitchen_sink() {
    assert_eq!(
        parse_sexpr(r#"+title:(rust OR go^2) -status:draft date:[2020 TO *} "hello world"~1 name:/j.*/"#),
        concat!(
            "Query(",
            "Required(Group(Or(title:rust, Boost(title:go, 2)))), ",
            "Prohibited(status:draft), ",
            "Range(date [2020 TO *}), ",
            "Slop(default:\"hello world\", 1), ",
            "Regexp(name:/j.*/)",
            ")",
        ),
    );
}

/// Verifies that ideographic spaces separate clauses.
#[test]
fn test_ideographic_space() {
    assert_eq!(parse_sexpr("a\u{3000}b"), "Query(default:a, default:b)");
}

/// Verifies that nesting up to the depth limit parses.
#[test]
fn test_nesting_within_limit() {
    let query = format!("{}a{}", "(".repeat(64), ")".repeat(64));
    let root = crate::parse(&query, DEFAULT_FIELD).unwrap();
    let mut depth = 0;
    let mut node = &root;
    while let QueryNode::Group(group) = node {
        depth += 1;
        node = &group.child;
    }
    assert_eq!(depth, 64);
}

/// Verifies the explicit session API, including a borrowed default field.
#[test]
fn test_parser_session() {
    let field = String::from("body");
    let root = LuceneParser::new("a").parse(&field).unwrap();
    assert_eq!(sexpr(&root), "body:a");
}
