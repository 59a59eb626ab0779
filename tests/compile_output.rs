use bracepat::{compile, parse, CompileOptions, ParseOptions, Node, MAX_LENGTH};
use rstest::rstest;

/// Helper: parse with defaults, compile with the given escape_invalid flag.
fn compiled(pattern: &str, escape_invalid: bool) -> String {
    let ast = parse(pattern, &ParseOptions::default()).unwrap();
    let opts = CompileOptions { escape_invalid };
    compile(&ast, &opts).unwrap()
}

// ========================================
// Errors
// ========================================

#[test]
fn parse_rejects_input_over_the_length_bound() {
    let input = ".".repeat(MAX_LENGTH + 2);
    assert!(parse(&input, &ParseOptions::default()).is_err());
}

#[test]
fn compile_rejects_a_value_that_is_not_a_parsed_tree() {
    let result = compile(&Node::Text("x".into()), &CompileOptions::default());
    assert!(result.is_err());
}

#[test]
fn braceless_input_at_the_bound_round_trips() {
    let input = "a/".repeat(MAX_LENGTH / 2);
    assert_eq!(compiled(&input, false), input);
}

// ========================================
// Invalid characters
// ========================================

#[test]
fn bare_bracket_characters_are_escaped() {
    assert_eq!(compiled("]{a,b,c}", false), "\\](a|b|c)");
}

// ========================================
// Sets
// ========================================

#[rstest]
#[case::one_empty("{a,}")]
#[case::two_empty("{a,,}")]
#[case::three_empty("{a,,,}")]
#[case::four_empty("{a,,,,}")]
#[case::five_empty("{a,,,,,}")]
fn empty_set_branches_collapse(#[case] pattern: &str) {
    assert_eq!(compiled(pattern, false), "(a|)");
}

// ========================================
// Ranges
// ========================================

#[test]
fn braces_with_invalid_ranges_are_escaped() {
    assert_eq!(compiled("{a...b}", false), "{a...b}");
    assert_eq!(compiled("{a...b}", true), "\\{a...b\\}");
}

#[test]
fn brace_patterns_with_both_sets_and_ranges() {
    assert_eq!(compiled("{a..e,z}", false), "(a..e|z)");
    assert_eq!(compiled("{a..e,a..z}", false), "(a..e|a..z)");
}

#[test]
fn braces_with_too_many_range_expressions_are_escaped() {
    assert_eq!(compiled("{a..e..x..z}", false), "{a..e..x..z}");
    assert_eq!(compiled("{a..e..x..z}", true), "\\{a..e..x..z\\}");
}

#[rstest]
#[case::alpha("{a..e}")]
#[case::numeric("{1..9}")]
#[case::stepped("{1..9..2}")]
fn standalone_valid_ranges_pass_through(#[case] pattern: &str) {
    assert_eq!(compiled(pattern, false), pattern);
    assert_eq!(compiled(pattern, true), pattern);
}

// ========================================
// Invalid
// ========================================

#[test]
fn incomplete_brace_patterns_are_escaped() {
    assert_eq!(compiled("]{a/b", false), "\\]{a/b");
    assert_eq!(compiled("]{a/b", true), "\\]\\{a/b");
}

#[test]
fn non_brace_patterns_are_escaped() {
    assert_eq!(compiled("]{a/b}", false), "\\]{a/b}");
    assert_eq!(compiled("]{a/b}", true), "\\]\\{a/b\\}");
}

// ========================================
// Nesting
// ========================================

#[rstest]
#[case("a{b,c{d,e}}f", "a(b|c(d|e))f")]
#[case("{a,b}{c,d}", "(a|b)(c|d)")]
#[case("x{a,{b,{c,d}}}", "x(a|(b|(c|d)))")]
fn nested_sets_compile_recursively(#[case] pattern: &str, #[case] expected: &str) {
    assert_eq!(compiled(pattern, false), expected);
}
