#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Returning one of these from an evaluation function abandons the current
/// statement. Native commands that only need to complain about their inputs
/// write the error's text to the output sink and carry on instead.
pub enum RuntimeError {
    /// A word was executed that names no registered procedure.
    UndefinedProcedure {
        /// The word as it was written.
        name: String,
    },
    /// A list or expression appeared where a statement was expected.
    BareContainer {
        /// Source text of the container.
        text: String,
    },
    /// An expression did not reduce to exactly one value.
    MalformedExpression {
        /// Source text of the expression.
        text: String,
    },
    /// An operator was missing its left or right operand.
    MissingOperand {
        /// The operator symbol.
        operator: String,
    },
    /// A value had an unexpected or incompatible type.
    TypeMismatch {
        /// The procedure or operator that rejected the input.
        procedure: String,
        /// Rendering of the offending value.
        value:     String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A procedure ran out of inputs inside a list or expression.
    NotEnoughInputs {
        /// The procedure that was short of inputs.
        procedure: String,
    },
    /// An input had the right type but an unusable value.
    InvalidInput {
        /// The procedure that rejected the input.
        procedure: String,
        /// Details about why the input is invalid.
        details:   String,
    },
    /// `output` or `stop` was used outside of any procedure.
    OutputOutsideProcedure {
        /// The command that was used.
        procedure: String,
    },
    /// Tried to define a procedure over a primitive.
    NonRedefinable {
        /// The name of the primitive.
        name: String,
    },
    /// `to` was not followed by a usable procedure name.
    MissingProcedureName {
        /// The token that followed `to`, if any.
        found: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedProcedure { name } => write!(f, "I don't know how to {name}."),
            Self::BareContainer { text } => write!(f, "You don't say what to do with {text}."),
            Self::MalformedExpression { text } => write!(f, "Malformed expression: {text}."),
            Self::MissingOperand { operator } => {
                write!(f, "Operator '{operator}' is missing an operand.")
            },
            Self::TypeMismatch { procedure, value } => {
                write!(f, "{procedure} doesn't like {value} as input.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::NotEnoughInputs { procedure } => write!(f, "Not enough inputs to {procedure}."),
            Self::InvalidInput { procedure, details } => {
                write!(f, "{procedure} can't use that input: {details}.")
            },
            Self::OutputOutsideProcedure { procedure } => {
                write!(f, "{procedure} can only be used inside a procedure.")
            },
            Self::NonRedefinable { name } => {
                write!(f, "{name} is a primitive and cannot be redefined.")
            },
            Self::MissingProcedureName { found } => {
                if found.is_empty() {
                    write!(f, "to needs a procedure name.")
                } else {
                    write!(f, "to doesn't like {found} as a procedure name.")
                }
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
