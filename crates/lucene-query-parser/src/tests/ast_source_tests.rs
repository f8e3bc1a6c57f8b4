//! Tests for source reconstruction of parsed trees.
//!
//! With the original query, `to_source` slices each node's span; without
//! it, nodes render canonical syntax that parses back to an equal tree.

use crate::ast::AstNode;
use crate::ast::QueryNode;
use crate::tests::utils::DEFAULT_FIELD;
use crate::tests::utils::parse_sexpr;
use crate::tests::utils::sexpr;

fn canonical(query: &str) -> String {
    crate::parse(query, DEFAULT_FIELD).unwrap().to_source(None)
}

// =============================================================================
// Source-slice mode
// =============================================================================

/// Verifies that the root node's slice covers the whole query, minus
/// surrounding whitespace.
#[test]
fn test_root_slice() {
    for query in [
        "title:rust",
        "title:rust^2",
        "a OR b AND c",
        "-author:\"jane doe\"~2",
        "title:(a b)^3",
        "price>=10",
        "date:[2020 TO 2021}",
        "roam~0.5",
    ] {
        let root = crate::parse(query, DEFAULT_FIELD).unwrap();
        assert_eq!(root.to_source(Some(query)), query, "{query}");
    }
    let root = crate::parse("  a b  ", DEFAULT_FIELD).unwrap();
    assert_eq!(root.to_source(Some("  a b  ")), "a b");
}

/// Verifies the slices of nested nodes.
#[test]
fn test_child_slices() {
    let query = r#"title:lucene AND -author:"jane doe"~2"#;
    let root = crate::parse(query, DEFAULT_FIELD).unwrap();
    let QueryNode::Boolean(and) = &root else {
        panic!("expected a boolean query");
    };
    assert_eq!(and.clauses[0].to_source(Some(query)), "title:lucene");
    assert_eq!(and.clauses[1].to_source(Some(query)), r#"-author:"jane doe"~2"#);

    let slop = and.clauses[1].child().unwrap();
    assert_eq!(slop.to_source(Some(query)), r#"author:"jane doe"~2"#);
    let phrase = slop.child().unwrap();
    assert_eq!(phrase.to_source(Some(query)), r#"author:"jane doe""#);
}

/// Verifies that a boosted group's slices include the field prefix.
#[test]
fn test_group_slices() {
    let query = "title:(a b)^3";
    let root = crate::parse(query, DEFAULT_FIELD).unwrap();
    let group = root.child().unwrap();
    assert_eq!(group.to_source(Some(query)), "title:(a b)");
    let inner = group.child().unwrap();
    assert_eq!(inner.to_source(Some(query)), "a b");
}

/// Verifies the byte ranges of comparison bounds.
#[test]
fn test_comparison_bound_spans() {
    let root = crate::parse("price>=10", DEFAULT_FIELD).unwrap();
    let QueryNode::TermRange(range) = root else {
        panic!("expected a range");
    };
    assert_eq!(range.lower.span.byte_range(), 7..9);
    assert_eq!(range.upper.span.byte_range(), 5..7);
    assert_eq!(range.span.byte_range(), 0..9);
}

// =============================================================================
// Canonical mode
// =============================================================================

/// Verifies canonical output for representative queries.
#[test]
fn test_canonical_output() {
    let cases = [
        ("rust", "default:rust"),
        ("title=rust", "title:rust"),
        ("a OR b AND c", "default:a OR default:b AND default:c"),
        ("(a OR b) AND c", "(default:a OR default:b) AND default:c"),
        ("NOT a", "-default:a"),
        ("!a +b", "-default:a +default:b"),
        ("(a OR b)^3", "(default:a OR default:b)^3"),
        ("title:(a b)", "(title:a title:b)"),
        ("price>=10", "price:[10 TO *]"),
        ("price<10", "price:[* TO 10}"),
        ("roam~", "default:roam~2"),
        ("name:/jo[hn]+/", "name:/jo[hn]+/"),
        (r#""a b"~2^3"#, r#"default:"a b"~2^3"#),
        (
            r#"title:lucene AND -author:"jane doe"~2"#,
            r#"title:lucene AND -author:"jane doe"~2"#,
        ),
    ];
    for (query, expected) in cases {
        assert_eq!(canonical(query), expected, "{query}");
    }
}

/// Verifies that special characters are re-escaped.
#[test]
fn test_canonical_escapes() {
    assert_eq!(canonical(r"my\ field:x\:y"), r"my\ field:x\:y");
    assert_eq!(canonical(r"\AND"), r"default:\AND");
    assert_eq!(canonical(r#""say \"hi\"""#), r#"default:"say \"hi\"""#);
    assert_eq!(canonical(r#"f:["a b" TO "TO"]"#), r#"f:["a b" TO "TO"]"#);
}

/// Verifies that canonical output parses back to the same tree.
#[test]
fn test_canonical_reparses() {
    for query in [
        "a OR b AND c",
        "a b AND c OR d",
        "+title:(rust OR go^2) -status:draft",
        r#"date:[2020 TO *} "hello world"~1 name:/j.*/"#,
        r"my\ field:x\:y \AND \(1\+1\)",
        "roam^2~1 /ab/~1",
        "price>=10 price<=20",
        r#"f:["a]b" TO "c\"d"]"#,
        "(((a)))",
    ] {
        let rendered = canonical(query);
        assert_eq!(parse_sexpr(&rendered), parse_sexpr(query), "{query} => {rendered}");
    }
}

/// Verifies that a required group renders with its parentheses.
#[test]
fn test_canonical_modifier_on_group() {
    let root = crate::parse("+(a b)", DEFAULT_FIELD).unwrap();
    assert_eq!(root.to_source(None), "+(default:a default:b)");
    assert_eq!(sexpr(&root), "Required(Group(Query(default:a, default:b)))");
}
