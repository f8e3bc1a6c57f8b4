use std::fmt::Write;

/// Generates `(((...a...)))` with `depth` levels of groups around a
/// two-clause disjunction.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 2 + 16);
    out.push_str(&"(".repeat(depth));
    out.push_str("a OR b");
    out.push_str(&")".repeat(depth));
    out
}

/// Generates a query of `count` juxtaposed clauses that cycle through
/// terms, phrases, ranges, comparisons and boosts on different fields.
pub fn many_clauses(count: usize) -> String {
    let mut out = String::with_capacity(count * 24);
    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        match i % 5 {
            0 => write!(out, "field{i}:term{i}").unwrap(),
            1 => write!(out, "+title:\"phrase number {i}\"~2").unwrap(),
            2 => write!(out, "date:[{i} TO {}]", i + 10).unwrap(),
            3 => write!(out, "price>={i}").unwrap(),
            _ => write!(out, "-(a{i} OR b{i})^1.5").unwrap(),
        }
    }
    out
}
