//! Rebuilds a pattern string from a parsed tree.
//!
//! The result is the pattern post-normalization, not the byte-for-byte
//! input: duplicate set branches were already collapsed at parse time, and
//! text runs carry whatever escaping/quoting resolution the parse options
//! applied. `{a,,}` therefore stringifies as `{a,}`.

use crate::ast::{Brace, BraceKind, Node};

/// Reproduce a pattern string from a tree. Total and infallible.
pub fn stringify(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Root(nodes) => {
            for child in nodes {
                write_node(child, out);
            }
        }
        Node::Text(value) => out.push_str(value),
        Node::Brace(brace) => write_brace(brace, out),
    }
}

fn write_brace(brace: &Brace, out: &mut String) {
    match &brace.kind {
        BraceKind::Set(branches) => {
            out.push('{');
            for (idx, branch) in branches.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                out.push_str(&branch.text);
            }
            out.push('}');
        }
        BraceKind::Range(_) | BraceKind::Invalid { closed: true } => {
            out.push('{');
            out.push_str(&brace.body);
            out.push('}');
        }
        BraceKind::Invalid { closed: false } => {
            out.push('{');
            out.push_str(&brace.body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::parser::parse;
    use rstest::rstest;

    fn round_trip(input: &str) -> String {
        stringify(&parse(input, &ParseOptions::default()).unwrap())
    }

    #[rstest]
    #[case::plain("a/b.txt")]
    #[case::set("x{a,b,c}y")]
    #[case::nested("{a,{b,c}}")]
    #[case::range("{1..9..2}")]
    #[case::invalid("{a...b}")]
    #[case::fallback("a{b/c")]
    fn round_trips_unchanged(#[case] input: &str) {
        assert_eq!(round_trip(input), input);
    }

    #[rstest]
    #[case::duplicates_collapse("{a,,,}", "{a,}")]
    #[case::quotes_resolve("a'b c'", "ab c")]
    #[case::unsafe_escape_applies("]x", "\\]x")]
    fn normalizations_are_stable(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(round_trip(input), expected);
    }
}
