#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input length ({length}) exceeds max characters ({max})")]
    InputTooLong { length: usize, max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("expected a root node, got a {found} node")]
    ExpectedRoot { found: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // === ParseError ===

    #[rstest]
    #[case(
        ParseError::InputTooLong { length: 10002, max: 10000 },
        "input length (10002) exceeds max characters (10000)"
    )]
    #[case(
        ParseError::InputTooLong { length: 7, max: 6 },
        "input length (7) exceeds max characters (6)"
    )]
    fn parse_error_display(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn parse_error_implements_std_error() {
        let error: &dyn std::error::Error = &ParseError::InputTooLong {
            length: 2,
            max: 1,
        };
        assert!(error.source().is_none());
    }

    // === CompileError ===

    #[test]
    fn compile_error_display() {
        let error = CompileError::ExpectedRoot { found: "text" };
        assert_eq!(error.to_string(), "expected a root node, got a text node");
    }

    #[test]
    fn compile_error_is_debug() {
        let error = CompileError::ExpectedRoot { found: "brace" };
        let debug = format!("{:?}", error);
        assert!(debug.contains("ExpectedRoot"));
    }

    // === anyhow integration ===

    #[test]
    fn parse_error_into_anyhow() {
        let error = ParseError::InputTooLong {
            length: 10002,
            max: 10000,
        };
        let anyhow_err: anyhow::Error = error.into();
        assert_eq!(
            anyhow_err.to_string(),
            "input length (10002) exceeds max characters (10000)"
        );
    }

    #[test]
    fn compile_error_into_anyhow() {
        let error = CompileError::ExpectedRoot { found: "text" };
        let anyhow_err: anyhow::Error = error.into();
        assert_eq!(
            anyhow_err.to_string(),
            "expected a root node, got a text node"
        );
    }
}
