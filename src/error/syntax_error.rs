#[derive(Debug)]
/// Represents all errors that can occur during validation or parsing.
pub enum SyntaxError {
    /// The line ends in a division operator.
    IncompleteExpression,
    /// A division by the literal `0` appears somewhere in the line.
    DivisionByZero,
    /// A parenthesized group was opened but never closed.
    UnterminatedParenthesis,
    /// A factor position held neither a known variable nor a numeric literal.
    ExpectedNumber {
        /// The token encountered.
        found: String,
    },
    /// An assignment was missing its `=`.
    ExpectedEquals {
        /// The token encountered.
        found: String,
    },
    /// A `cout` statement was missing its `<<`.
    ExpectedInsertion {
        /// The token encountered.
        found: String,
    },
    /// The token sequence ended in the middle of a statement.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteExpression => write!(f,
                                                 "Incomplete expression: a line cannot end with a division operator."),

            Self::DivisionByZero => write!(f, "Division by zero is not allowed."),

            Self::UnterminatedParenthesis => {
                write!(f, "Unterminated parenthesis: expected ')'.")
            },

            Self::ExpectedNumber { found } => write!(f, "Expected a number, found {found}."),

            Self::ExpectedEquals { found } => {
                write!(f, "Expected '=' after variable name, found {found}.")
            },

            Self::ExpectedInsertion { found } => {
                write!(f, "Expected '<<' after 'cout', found {found}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
        }
    }
}

impl std::error::Error for SyntaxError {}
