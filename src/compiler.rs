//! Compiles a parsed tree into a regex-alternation fragment.
//!
//! Sets become `(a|b|...)` groups. Invalid and incomplete spans are
//! reproduced literally, with their delimiters escaped when
//! `escape_invalid` is set. Well-formed ranges pass through opaquely as
//! `{start..end[..step]}`; materializing them into concrete strings is the
//! expansion step's job, and escaping their delimiters would change what it
//! later sees.

use crate::ast::{Brace, BraceKind, Node};
use crate::error::CompileError;
use crate::options::CompileOptions;

/// Compile a [`Node::Root`] tree into a string embeddable in a larger regex.
///
/// Any other node fails with an invalid-argument error; compilation never
/// proceeds on malformed input.
pub fn compile(ast: &Node, options: &CompileOptions) -> Result<String, CompileError> {
    let Node::Root(nodes) = ast else {
        return Err(CompileError::ExpectedRoot {
            found: ast.kind_name(),
        });
    };

    let mut out = String::new();
    for node in nodes {
        walk(node, options, &mut out);
    }
    tracing::debug!(len = out.len(), "compiled pattern");
    Ok(out)
}

/// Depth-first, left-to-right emission.
fn walk(node: &Node, opts: &CompileOptions, out: &mut String) {
    match node {
        // Roots never nest; treat one defensively as a plain sequence.
        Node::Root(nodes) => {
            for child in nodes {
                walk(child, opts, out);
            }
        }

        // Text is render-ready: escapes were resolved at parse time.
        Node::Text(value) => out.push_str(value),

        Node::Brace(brace) => walk_brace(brace, opts, out),
    }
}

fn walk_brace(brace: &Brace, opts: &CompileOptions, out: &mut String) {
    match &brace.kind {
        BraceKind::Set(branches) => {
            out.push('(');
            for (idx, branch) in branches.iter().enumerate() {
                if idx > 0 {
                    out.push('|');
                }
                for node in &branch.nodes {
                    walk(node, opts, out);
                }
            }
            out.push(')');
        }

        // Opaque passthrough: delimiters stay raw even under escape_invalid,
        // the brace is well-formed.
        BraceKind::Range(_) => {
            out.push('{');
            reproduce_span(&brace.body, false, out);
            out.push('}');
        }

        BraceKind::Invalid { closed } => {
            push_delimiter('{', opts, out);
            reproduce_span(&brace.body, opts.escape_invalid, out);
            if *closed {
                push_delimiter('}', opts, out);
            }
        }
    }
}

fn push_delimiter(delimiter: char, opts: &CompileOptions, out: &mut String) {
    if opts.escape_invalid {
        out.push('\\');
    }
    out.push(delimiter);
}

/// Reproduce a raw un-interpreted span as literal text: unconditionally
/// unsafe characters are escaped, user escape pairs and bracket spans pass
/// through verbatim, and brace delimiters are escaped only when
/// `escape_braces` is set.
fn reproduce_span(span: &str, escape_braces: bool, out: &mut String) {
    let chars: Vec<char> = span.chars().collect();
    let mut j = 0;
    while j < chars.len() {
        match chars[j] {
            '\\' => {
                let end = (j + 2).min(chars.len());
                out.extend(&chars[j..end]);
                j = end;
            }
            '[' => {
                let end = crate::parser::skip_brackets(&chars, j);
                out.extend(&chars[j..end]);
                j = end;
            }
            ']' => {
                out.push_str("\\]");
                j += 1;
            }
            c @ ('{' | '}') if escape_braces => {
                out.push('\\');
                out.push(c);
                j += 1;
            }
            c => {
                out.push(c);
                j += 1;
            }
        }
    }
}
