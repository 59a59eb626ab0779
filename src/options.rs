//! Option sets for the parse and compile entry points. Both are small,
//! closed structs passed by reference; there is no builder layer.

use crate::parser::MAX_LENGTH;

/// Options recognized by [`parse`](crate::parse).
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Override of the input-length safety bound. Only tightens: the
    /// effective bound is `min(MAX_LENGTH, max_length)`.
    pub max_length: Option<usize>,
    /// Keep the backslash of user escape sequences in text output instead of
    /// resolving them away.
    pub keep_escaping: bool,
    /// Keep quote characters around quoted spans instead of stripping them.
    pub keep_quotes: bool,
}

impl ParseOptions {
    /// The effective input-length bound for these options.
    pub fn effective_max(&self) -> usize {
        match self.max_length {
            Some(max) => max.min(MAX_LENGTH),
            None => MAX_LENGTH,
        }
    }
}

/// Options recognized by [`compile`](crate::compile).
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// Backslash-escape the delimiters of invalid and incomplete brace spans
    /// so the whole result is safe to splice into a larger regex. When unset,
    /// such delimiters are reproduced unescaped and callers relying on
    /// fallback are expected to treat the pattern as literal elsewhere.
    pub escape_invalid: bool,
}
