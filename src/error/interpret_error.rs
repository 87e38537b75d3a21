use crate::error::{RuntimeError, TokenizeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure reported by a top-level call into the interpreter.
pub enum InterpretError {
    /// The input could not be tokenized.
    Tokenize(TokenizeError),
    /// A statement failed while executing.
    Runtime(RuntimeError),
    /// A script ended while a list, expression, definition or call was still
    /// waiting for more input.
    UnexpectedEndOfInput,
}

impl From<TokenizeError> for InterpretError {
    fn from(e: TokenizeError) -> Self {
        Self::Tokenize(e)
    }
}

impl From<RuntimeError> for InterpretError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
        }
    }
}

impl std::error::Error for InterpretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokenize(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::UnexpectedEndOfInput => None,
        }
    }
}
