/// An infix operator.
///
/// The declaration order is the reduction order: every `*` in an expression
/// is reduced before any `/`, every `/` before any `+`, and so on down to `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `=`
    Equals,
}

impl Operator {
    /// All operators, from the first reduced to the last.
    pub const PRECEDENCE: [Self; 5] =
        [Self::Multiply, Self::Divide, Self::Add, Self::Subtract, Self::Equals];

    /// Maps a source character to its operator.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::token::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol('x'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Equals => '=',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
