#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant aborts evaluation of the whole program; there is no
/// catch/retry inside the language. The internal return signal is not an
/// error and never appears here.
pub enum RuntimeError {
    /// An identifier was not found in any enclosing scope.
    UnresolvedIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment targeted a binding declared constant.
    ConstReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name was declared twice in the same scope.
    VariableAlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment was not an identifier or a member
    /// expression.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator or native function was applied to a value of the wrong
    /// kind.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A non-computed member read on an object lacking that key, or member
    /// access on a value that is neither an object nor an array.
    MissingProperty {
        /// The property that could not be resolved.
        property: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl RuntimeError {
    /// Builds a [`RuntimeError::TypeError`] from anything displayable.
    pub fn type_error(details: impl std::fmt::Display, line: usize) -> Self {
        Self::TypeError { details: details.to_string(),
                          line }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedIdentifier { name, line } => write!(f,
                                                                "Error on line {line}: Variable '{name}' doesn't exist in reachable scopes."),
            Self::ConstReassignment { name, line } => write!(f,
                                                             "Error on line {line}: Cannot assign a value to constant '{name}'."),
            Self::VariableAlreadyDeclared { name, line } => write!(f,
                                                                   "Error on line {line}: Variable '{name}' is already declared in this scope."),
            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Invalid left-hand side of assignment."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::MissingProperty { property, line } => write!(f,
                                                               "Error on line {line}: Property '{property}' does not exist."),
        }
    }
}

impl std::error::Error for RuntimeError {}
