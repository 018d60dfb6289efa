#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the source line and column of the offending token so
/// the host can point at the failure.
pub enum ParseError {
    /// The lexer could not classify a piece of input.
    UnrecognizedInput {
        /// The text that failed to lex.
        text: String,
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of what was found and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
        /// The source column where the error occurred.
        col:   usize,
    },
    /// Reached the end of input before a construct was closed.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
    /// A `const` declaration without an initializer.
    ConstantWithoutValue {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { text, line, col } => {
                write!(f, "Syntax error at {line}:{col}: Unrecognized input '{text}'.")
            },
            Self::UnexpectedToken { token, line, col } => {
                write!(f, "Syntax error at {line}:{col}: {token}.")
            },
            Self::UnexpectedEndOfInput { line, col } => {
                write!(f, "Syntax error at {line}:{col}: Unexpected end of input.")
            },
            Self::ConstantWithoutValue { name, line, col } => write!(f,
                                                                     "Syntax error at {line}:{col}: Constant '{name}' must be declared with a value."),
        }
    }
}

impl std::error::Error for ParseError {}
