//! Brace-pattern parser: scans a pattern string into a [`Node`] tree and
//! classifies every `{...}` span as a set, a range, or invalid.
//!
//! The grammar is tolerant: malformed spans are never rejected, only
//! reclassified so the compiler can reproduce them literally. The sole hard
//! failure is the input-length guard, checked before any scanning.

use crate::ast::{Brace, BraceKind, Branch, Node, RangeSpec};
use crate::error::ParseError;
use crate::options::ParseOptions;

/// Input-length safety bound. Bounds worst-case work and memory per call;
/// a `max_length` override can only tighten it.
pub const MAX_LENGTH: usize = 10_000;

/// Characters dropped outright during scanning (BOM, no-break space).
const SKIPPED: [char; 2] = ['\u{feff}', '\u{a0}'];

/// Parse `input` into a [`Node::Root`] tree.
///
/// Fails only when the input exceeds the length bound; every other irregular
/// input (unmatched braces, ambiguous range syntax, stray metacharacters)
/// degrades to literal content instead of erroring.
pub fn parse(input: &str, options: &ParseOptions) -> Result<Node, ParseError> {
    let max = options.effective_max();
    if input.len() > max {
        return Err(ParseError::InputTooLong {
            length: input.len(),
            max,
        });
    }

    let chars: Vec<char> = input.chars().collect();
    let nodes = parse_nodes(&chars, options);
    tracing::debug!(len = input.len(), nodes = nodes.len(), "parsed pattern");
    Ok(Node::Root(nodes))
}

/// Scan a segment (the whole pattern, or one set branch) into nodes.
fn parse_nodes(chars: &[char], opts: &ParseOptions) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            c if SKIPPED.contains(&c) => i += 1,

            '\\' => match chars.get(i + 1) {
                Some(&c) => {
                    // The escaped character is taken literally and is not
                    // re-escaped on output, even if it is otherwise unsafe.
                    if opts.keep_escaping {
                        text.push('\\');
                    }
                    text.push(c);
                    i += 2;
                }
                None => {
                    // trailing lone backslash stays literal
                    text.push('\\');
                    i += 1;
                }
            },

            // A bare class terminator is unsafe to emit raw into a regex
            // context, brace or no brace.
            ']' => {
                text.push_str("\\]");
                i += 1;
            }

            // Bracket spans are opaque literal text; `{`, `}`, `,` and `.`
            // inside them have no delimiter meaning.
            '[' => {
                let end = skip_brackets(chars, i);
                text.extend(&chars[i..end]);
                i = end;
            }

            '\'' | '"' | '`' => {
                let end = skip_quoted(chars, i);
                let terminated = end - i >= 2 && chars[end - 1] == chars[i];
                if opts.keep_quotes {
                    text.extend(&chars[i..end]);
                } else if terminated {
                    text.extend(&chars[i + 1..end - 1]);
                } else {
                    text.extend(&chars[i + 1..end]);
                }
                i = end;
            }

            '{' => match find_close(chars, i) {
                Some(close) => {
                    flush_text(&mut text, &mut nodes);
                    let body: String = chars[i + 1..close].iter().collect();
                    nodes.push(Node::Brace(classify(&body, opts)));
                    i = close + 1;
                }
                None => {
                    // Incomplete-brace fallback: the `{` and everything after
                    // it are literal content, not a brace.
                    flush_text(&mut text, &mut nodes);
                    let body: String = chars[i + 1..].iter().collect();
                    nodes.push(Node::Brace(Brace {
                        body,
                        kind: BraceKind::Invalid { closed: false },
                    }));
                    i = chars.len();
                }
            },

            c => {
                text.push(c);
                i += 1;
            }
        }
    }

    flush_text(&mut text, &mut nodes);
    nodes
}

fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}

/// Index just past the escape pair starting at `i` (`chars[i]` is `\`).
fn skip_escape(chars: &[char], i: usize) -> usize {
    (i + 2).min(chars.len())
}

/// Index just past the quoted span opening at `i`. An unterminated span runs
/// to end of input.
fn skip_quoted(chars: &[char], i: usize) -> usize {
    let quote = chars[i];
    let mut j = i + 1;
    while j < chars.len() {
        match chars[j] {
            '\\' => j = skip_escape(chars, j),
            c if c == quote => return j + 1,
            _ => j += 1,
        }
    }
    j
}

/// Index just past the `[...]` span opening at `i`, tracking nesting. An
/// unterminated span runs to end of input.
pub(crate) fn skip_brackets(chars: &[char], i: usize) -> usize {
    let mut depth = 0usize;
    let mut j = i;
    while j < chars.len() {
        match chars[j] {
            '\\' => {
                j = skip_escape(chars, j);
                continue;
            }
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return j + 1;
                }
            }
            _ => {}
        }
        j += 1;
    }
    j
}

/// If `chars[j]` opens an escape, bracket, or quote span, copy the span
/// verbatim into `out` and return the index just past it.
fn copy_span(chars: &[char], j: usize, out: &mut String) -> Option<usize> {
    let end = match chars[j] {
        '\\' => skip_escape(chars, j),
        '[' => skip_brackets(chars, j),
        '\'' | '"' | '`' => skip_quoted(chars, j),
        _ => return None,
    };
    out.extend(&chars[j..end]);
    Some(end)
}

/// Find the matching unescaped `}` for the `{` at `open`, tracking nesting.
/// Escape, bracket, and quote spans shield their contents from matching.
fn find_close(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut j = open;
    while j < chars.len() {
        match chars[j] {
            '\\' => {
                j = skip_escape(chars, j);
                continue;
            }
            '[' => {
                j = skip_brackets(chars, j);
                continue;
            }
            '\'' | '"' | '`' => {
                j = skip_quoted(chars, j);
                continue;
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// Classify a successfully delimited body. Total over all body strings:
/// top-level comma wins, then the range grammar, then invalid.
fn classify(body: &str, opts: &ParseOptions) -> Brace {
    let chars: Vec<char> = body.chars().collect();

    if let Some(raw_branches) = split_top_level_commas(&chars) {
        let mut branches: Vec<Branch> = Vec::new();
        for raw in raw_branches {
            // Dedup by exact raw value, first occurrence wins. This is what
            // collapses `{a,}`, `{a,,}`, `{a,,,}` into the same two branches.
            if branches.iter().any(|b| b.text == raw) {
                continue;
            }
            let branch_chars: Vec<char> = raw.chars().collect();
            let nodes = parse_nodes(&branch_chars, opts);
            branches.push(Branch { text: raw, nodes });
        }
        return Brace {
            body: body.to_string(),
            kind: BraceKind::Set(branches),
        };
    }

    if let Some(range) = split_range(&chars) {
        return Brace {
            body: body.to_string(),
            kind: BraceKind::Range(range),
        };
    }

    Brace {
        body: body.to_string(),
        kind: BraceKind::Invalid { closed: true },
    }
}

/// Split a body on top-level commas. Commas inside nested braces or inside
/// escape/bracket/quote spans do not split. Returns `None` when the body has
/// no top-level comma at all.
fn split_top_level_commas(chars: &[char]) -> Option<Vec<String>> {
    let mut branches = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut found = false;
    let mut j = 0;

    while j < chars.len() {
        if let Some(end) = copy_span(chars, j, &mut current) {
            j = end;
            continue;
        }
        match chars[j] {
            '{' => {
                depth += 1;
                current.push('{');
            }
            '}' => {
                depth = depth.saturating_sub(1);
                current.push('}');
            }
            ',' if depth == 0 => {
                found = true;
                branches.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
        j += 1;
    }

    branches.push(current);
    found.then_some(branches)
}

/// Try the range grammar on a comma-free body: split on top-level double-dot
/// separators. A run of three or more dots overlaps the separator and fails
/// the grammar, as does any segment count other than 2 or 3, or an empty
/// segment.
fn split_range(chars: &[char]) -> Option<RangeSpec> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut j = 0;

    while j < chars.len() {
        if let Some(end) = copy_span(chars, j, &mut current) {
            j = end;
            continue;
        }
        match chars[j] {
            '{' => {
                depth += 1;
                current.push('{');
                j += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                current.push('}');
                j += 1;
            }
            '.' if depth == 0 => {
                let mut run = 1;
                while j + run < chars.len() && chars[j + run] == '.' {
                    run += 1;
                }
                match run {
                    1 => current.push('.'),
                    2 => segments.push(std::mem::take(&mut current)),
                    _ => return None,
                }
                j += run;
            }
            c => {
                current.push(c);
                j += 1;
            }
        }
    }
    segments.push(current);

    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    let mut it = segments.into_iter();
    match (it.next(), it.next(), it.next(), it.next()) {
        (Some(start), Some(end), step, None) => Some(RangeSpec { start, end, step }),
        _ => None,
    }
}
