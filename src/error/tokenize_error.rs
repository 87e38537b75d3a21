#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting source text into
/// tokens.
///
/// These are raised from inside nested list and expression scans and carried
/// back to the tokenizer boundary with `?`, where they become a failed
/// tokenization instead of escaping to the caller.
pub enum TokenizeError {
    /// A closing `]` or `)` appeared without a matching opener.
    UnexpectedClose {
        /// The closing symbol that was found.
        symbol: char,
    },
    /// A list nested inside another construct was never closed.
    UnterminatedList {
        /// The text of the unterminated list, starting at its `[`.
        text: String,
    },
    /// An expression nested inside another construct was never closed.
    UnterminatedExpression {
        /// The text of the unterminated expression, starting at its `(`.
        text: String,
    },
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedClose { symbol } => {
                write!(f, "Unexpected '{symbol}' without a matching opening bracket.")
            },
            Self::UnterminatedList { text } => write!(f, "List is missing its closing ']': {text}"),
            Self::UnterminatedExpression { text } => {
                write!(f, "Expression is missing its closing ')': {text}")
            },
        }
    }
}

impl std::error::Error for TokenizeError {}
