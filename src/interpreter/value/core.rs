use bigdecimal::{BigDecimal, Zero};

use crate::{
    interpreter::{token::core::Token, value::parcel::Parcel},
    util::num::format_decimal,
};

/// Represents a runtime value in the interpreter.
///
/// Every literal token carries one of these. Values compare by variant and
/// payload; see [`LogoValue::equals`] for the looser comparison used by `=`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LogoValue {
    /// The value of a variable that has never been assigned.
    #[default]
    Unknown,
    /// `true` or `false`.
    Bool(bool),
    /// Text produced at runtime, for example by concatenation or by an
    /// unrecognized word used as an input.
    Text(String),
    /// An arbitrary-precision decimal number.
    Number(BigDecimal),
    /// A quoted word such as `"square`.
    Word(String),
    /// A list of unevaluated tokens, as written between `[` and `]`.
    List(Vec<Token>),
    /// An object owned by a command module.
    Parcel(Parcel),
}

impl From<bool> for LogoValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<BigDecimal> for LogoValue {
    fn from(n: BigDecimal) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for LogoValue {
    fn from(n: i64) -> Self {
        Self::Number(BigDecimal::from(n))
    }
}

impl From<Vec<Token>> for LogoValue {
    fn from(items: Vec<Token>) -> Self {
        Self::List(items)
    }
}

impl From<Parcel> for LogoValue {
    fn from(p: Parcel) -> Self {
        Self::Parcel(p)
    }
}

impl LogoValue {
    /// Renders the value for an error message, naming values that would
    /// otherwise print as nothing at all.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Unknown => "nothing".to_string(),
            Self::Text(s) | Self::Word(s) if s.is_empty() => "the empty word".to_string(),
            _ => self.to_string(),
        }
    }

    /// Returns `true` if the value is [`LogoValue::Unknown`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns the number if the value is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<&BigDecimal> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the boolean if the value is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the list items if the value is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Token]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the characters of a word-like value.
    ///
    /// Quoted words and text are returned as they are. Anything else is not
    /// usable as a name.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::value::core::LogoValue;
    ///
    /// assert_eq!(LogoValue::Word("x".into()).as_text(), Some("x"));
    /// assert_eq!(LogoValue::Text("hi".into()).as_text(), Some("hi"));
    /// assert_eq!(LogoValue::Bool(true).as_text(), None);
    /// ```
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Word(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for text and quoted words.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Word(_))
    }

    /// The value an unassigned operand takes when paired with `self`.
    ///
    /// Numbers default to `0`, text to the empty string, booleans to `false`
    /// and lists to the empty list. Other variants have no default and stay
    /// [`LogoValue::Unknown`].
    #[must_use]
    pub fn default_like(&self) -> Self {
        match self {
            Self::Number(_) => Self::Number(BigDecimal::zero()),
            Self::Text(_) => Self::Text(String::new()),
            Self::Word(_) => Self::Word(String::new()),
            Self::Bool(_) => Self::Bool(false),
            Self::List(_) => Self::List(Vec::new()),
            Self::Unknown | Self::Parcel(_) => Self::Unknown,
        }
    }

    /// Compares two values the way the `=` operator and `equalp` do.
    ///
    /// Text and quoted words are compared by their characters, lists item by
    /// item, and everything else by variant and payload.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::value::core::LogoValue;
    ///
    /// assert!(LogoValue::Word("a".into()).equals(&LogoValue::Text("a".into())));
    /// assert!(LogoValue::from(2).equals(&LogoValue::from(2)));
    /// assert!(!LogoValue::from(2).equals(&LogoValue::Word("2".into())));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a) | Self::Word(a), Self::Text(b) | Self::Word(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| x.as_datum().equals(&y.as_datum()))
            },
            _ => self == other,
        }
    }

    /// Renders the value the way `print` shows it: like [`Display`], except
    /// that a list loses its outermost brackets.
    ///
    /// [`Display`]: std::fmt::Display
    #[must_use]
    pub fn print_form(&self) -> String {
        match self {
            Self::List(items) => join_tokens(items),
            _ => self.to_string(),
        }
    }
}

/// Joins token texts with single spaces. A comment runs to the end of its
/// line, so it is followed by a newline instead.
pub(crate) fn join_tokens(items: &[Token]) -> String {
    let mut joined = String::new();
    for (i, token) in items.iter().enumerate() {
        joined.push_str(&token.text());
        if token.is_comment() {
            joined.push('\n');
        } else if i + 1 < items.len() {
            joined.push(' ');
        }
    }
    joined
}

impl std::fmt::Display for LogoValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) | Self::Word(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_decimal(n)),
            Self::List(items) => write!(f, "[{}]", join_tokens(items)),
            Self::Parcel(p) => write!(f, "{p}"),
        }
    }
}
