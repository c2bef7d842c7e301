#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    ///
    /// The parser already rejects unknown names outside the print form, so
    /// this is checked again at evaluation time purely as a safety net.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A value of the wrong type reached an arithmetic or assignment site.
    ///
    /// Cannot currently occur: every value in the language is an `f64`. The
    /// variant keeps the taxonomy closed for future value kinds.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Variable '{name}' is not defined.")
            },
            Self::TypeError { details } => {
                write!(f, "Type error: {details}. Arithmetic requires numeric operands.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
