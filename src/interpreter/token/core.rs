use crate::interpreter::{
    token::operator::Operator,
    value::core::{LogoValue, join_tokens},
};

/// A node of parsed source.
///
/// Evaluation rewrites token sequences in place: each token is replaced by a
/// [`Token::Literal`] holding its result until only literals (and, inside
/// expressions, operators) remain. Every token keeps enough text to
/// reproduce its source through [`Token::text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An evaluated value together with its textual form.
    Literal {
        /// Source or rendered text.
        text:  String,
        /// The value.
        value: LogoValue,
    },
    /// An identifier naming a procedure, or plain text when used as an input.
    Word {
        /// The word as written.
        text: String,
    },
    /// A `:name` variable reference.
    Variable {
        /// The reference as written, colon included.
        text: String,
    },
    /// An infix operator.
    Operator {
        /// Which operator.
        op: Operator,
    },
    /// A `;` comment, discarded during execution.
    Comment {
        /// The comment as written, semicolon included.
        text: String,
    },
    /// A `[ ... ]` list. Its contents are data until a command runs them.
    List {
        /// The tokens between the brackets.
        children: Vec<Self>,
    },
    /// A `( ... )` expression, reduced by operator precedence.
    Expression {
        /// The tokens between the parentheses.
        children: Vec<Self>,
    },
}

impl From<LogoValue> for Token {
    fn from(value: LogoValue) -> Self {
        Self::literal(value)
    }
}

impl Token {
    /// Builds a literal whose text is the value's rendering.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::{token::core::Token, value::core::LogoValue};
    ///
    /// let token = Token::literal(LogoValue::from(16));
    /// assert!(token.is_literal());
    /// assert_eq!(token.text(), "16");
    /// ```
    #[must_use]
    pub fn literal(value: LogoValue) -> Self {
        Self::Literal { text: value.to_string(),
                        value }
    }

    /// Builds an unevaluated word.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word { text: text.into() }
    }

    /// Returns `true` for [`Token::Literal`].
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Returns `true` for [`Token::Operator`].
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator { .. })
    }

    /// Returns `true` for [`Token::Comment`].
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::Comment { .. })
    }

    /// Returns the operator of an operator token.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator { op } => Some(*op),
            _ => None,
        }
    }

    /// Returns the value of a literal token.
    #[must_use]
    pub const fn value(&self) -> Option<&LogoValue> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the variable name without its colon.
    #[must_use]
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Self::Variable { text } => Some(text.strip_prefix(':').unwrap_or(text)),
            _ => None,
        }
    }

    /// Returns `true` if this is an unevaluated word spelled `name`, ignoring
    /// case.
    #[must_use]
    pub fn is_word_named(&self, name: &str) -> bool {
        matches!(self, Self::Word { text } if text.eq_ignore_ascii_case(name))
    }

    /// The source text of this token.
    ///
    /// Containers re-join their children with single spaces, so the result
    /// matches the original source up to whitespace.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// The value this token stands for when it is treated as data, for
    /// example as an item of a list handed to `first` or `print`.
    ///
    /// Literals yield their value, lists their items, and every other token
    /// a word spelled like its text.
    #[must_use]
    pub fn as_datum(&self) -> LogoValue {
        match self {
            Self::Literal { value, .. } => value.clone(),
            Self::List { children } => LogoValue::List(children.clone()),
            _ => LogoValue::Word(self.text()),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { text, .. }
            | Self::Word { text }
            | Self::Variable { text }
            | Self::Comment { text } => f.write_str(text),
            Self::Operator { op } => write!(f, "{op}"),
            Self::List { children } => write!(f, "[{}]", join_tokens(children)),
            Self::Expression { children } => write!(f, "({})", join_tokens(children)),
        }
    }
}
