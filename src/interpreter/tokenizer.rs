use crate::{
    error::TokenizeError,
    interpreter::{lexer::classify_word, token::core::Token, token::operator::Operator},
};

/// The outcome of tokenizing a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenizeResult {
    /// All input was consumed and no list, expression or comment is open.
    Complete(Vec<Token>),
    /// A list or expression is still open at the end of the input.
    Incomplete {
        /// Tokens finished before the open construct.
        tokens:    Vec<Token>,
        /// The unconsumed text, starting at the open bracket. It must be put
        /// in front of the next piece of input.
        remainder: String,
    },
    /// A nested list or expression could not be tokenized.
    Failure(TokenizeError),
}

/// Splits input into tokens, carrying unfinished lists and expressions from
/// one call to the next.
///
/// # Example
/// ```
/// use logoterp::interpreter::tokenizer::{TokenizeResult, Tokenizer};
///
/// let mut tokenizer = Tokenizer::default();
///
/// assert!(matches!(tokenizer.tokenize("print ["), TokenizeResult::Incomplete { .. }));
/// assert!(tokenizer.is_pending());
///
/// let TokenizeResult::Complete(tokens) = tokenizer.tokenize("1 2 3]") else {
///     panic!("list should be closed");
/// };
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text(), "[1 2 3]");
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    pending: String,
}

impl Tokenizer {
    /// Tokenizes a new line of input.
    ///
    /// Text left over from an earlier incomplete call is placed in front of
    /// `line`, separated by a newline.
    pub fn tokenize(&mut self, line: &str) -> TokenizeResult {
        let text = if self.pending.is_empty() {
            line.to_string()
        } else {
            format!("{}\n{line}", std::mem::take(&mut self.pending))
        };

        let result = tokenize(&text);
        if let TokenizeResult::Incomplete { remainder, .. } = &result {
            self.pending.clone_from(remainder);
        }
        tracing::trace!(pending = self.pending.len(), "tokenized line");
        result
    }

    /// Returns `true` while an unfinished list or expression is carried over.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drops any carried-over text.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

/// Tokenizes a complete piece of text.
///
/// Lists and expressions are tokenized recursively, so their children are
/// ready to evaluate. A comment still open at the end of the text is closed
/// there and does not make the result incomplete.
///
/// # Example
/// ```
/// use logoterp::interpreter::{
///     token::{core::Token, operator::Operator},
///     tokenizer::{TokenizeResult, tokenize},
///     value::core::LogoValue,
/// };
///
/// let TokenizeResult::Complete(tokens) = tokenize("(2 + 2)") else {
///     panic!("expression should be complete");
/// };
/// let [Token::Expression { children }] = tokens.as_slice() else {
///     panic!("expected one expression");
/// };
/// assert_eq!(children[0].value(), Some(&LogoValue::from(2)));
/// assert_eq!(children[1], Token::Operator { op: Operator::Add });
/// assert_eq!(children[2].value(), Some(&LogoValue::from(2)));
/// ```
#[must_use]
pub fn tokenize(text: &str) -> TokenizeResult {
    match Scanner::new(text).run() {
        Ok(Scan::Complete(tokens)) => TokenizeResult::Complete(tokens),
        Ok(Scan::Incomplete { tokens, remainder }) => {
            TokenizeResult::Incomplete { tokens, remainder }
        },
        Err(e) => TokenizeResult::Failure(e),
    }
}

/// Tokenizes the inside of a list or expression, which must be complete.
fn tokenize_nested(text: &str) -> Result<Vec<Token>, TokenizeError> {
    match Scanner::new(text).run()? {
        Scan::Complete(tokens) => Ok(tokens),
        Scan::Incomplete { remainder, .. } => {
            if remainder.starts_with('[') {
                Err(TokenizeError::UnterminatedList { text: remainder })
            } else {
                Err(TokenizeError::UnterminatedExpression { text: remainder })
            }
        },
    }
}

enum Scan {
    Complete(Vec<Token>),
    Incomplete { tokens: Vec<Token>, remainder: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerKind {
    List,
    Expression,
}

impl ContainerKind {
    const fn open(self) -> char {
        match self {
            Self::List => '[',
            Self::Expression => '(',
        }
    }

    const fn close(self) -> char {
        match self {
            Self::List => ']',
            Self::Expression => ')',
        }
    }

    fn token(self, children: Vec<Token>) -> Token {
        match self {
            Self::List => Token::List { children },
            Self::Expression => Token::Expression { children },
        }
    }
}

/// An open list or expression at the outermost level.
struct Container {
    kind:       ContainerKind,
    start:      usize,
    depth:      usize,
    in_comment: bool,
}

/// Character-by-character scanning state.
///
/// Only the outermost container is tracked here; its inside is handed back to
/// a fresh scanner once the matching close is found.
struct Scanner<'a> {
    text:          &'a str,
    tokens:        Vec<Token>,
    word_start:    Option<usize>,
    comment_start: Option<usize>,
    container:     Option<Container>,
}

impl<'a> Scanner<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text,
               tokens: Vec::new(),
               word_start: None,
               comment_start: None,
               container: None }
    }

    fn run(mut self) -> Result<Scan, TokenizeError> {
        let mut chars = self.text.char_indices().peekable();
        let mut previous: Option<char> = None;

        while let Some((i, c)) = chars.next() {
            let next = chars.peek().map(|&(_, n)| n);

            if self.container.is_some() {
                self.scan_container(i, c)?;
            } else if let Some(start) = self.comment_start {
                if c == '\n' {
                    self.tokens.push(Token::Comment { text: self.text[start..i].to_string() });
                    self.comment_start = None;
                }
            } else {
                self.scan_top_level(i, c, previous, next)?;
            }

            previous = Some(c);
        }

        let end = self.text.len();
        if let Some(start) = self.comment_start.take() {
            self.tokens.push(Token::Comment { text: self.text[start..end].to_string() });
        }
        self.close_word(end);

        match self.container {
            Some(container) => Ok(Scan::Incomplete { tokens:    self.tokens,
                                                     remainder: self.text[container.start..]
                                                                    .to_string(), }),
            None => Ok(Scan::Complete(self.tokens)),
        }
    }

    fn scan_top_level(&mut self,
                      i: usize,
                      c: char,
                      previous: Option<char>,
                      next: Option<char>)
                      -> Result<(), TokenizeError> {
        match c {
            c if c.is_whitespace() => self.close_word(i),
            '[' | '(' => {
                self.close_word(i);
                let kind = if c == '[' { ContainerKind::List } else { ContainerKind::Expression };
                self.container = Some(Container { kind,
                                                  start: i,
                                                  depth: 1,
                                                  in_comment: false });
            },
            ']' | ')' => {
                self.close_word(i);
                return Err(TokenizeError::UnexpectedClose { symbol: c });
            },
            ';' => {
                self.close_word(i);
                self.comment_start = Some(i);
            },
            '-' if self.word_start.is_none()
                   && next.is_some_and(|n| n.is_ascii_digit())
                   && previous.is_none_or(|p| {
                                  p.is_whitespace() || Operator::from_symbol(p).is_some()
                              }) =>
            {
                self.word_start = Some(i);
            },
            '+' | '-' | '*' | '/' | '=' if !self.in_quoted_word() => {
                self.close_word(i);
                if let Some(op) = Operator::from_symbol(c) {
                    self.tokens.push(Token::Operator { op });
                }
            },
            _ => {
                if self.word_start.is_none() {
                    self.word_start = Some(i);
                }
            },
        }
        Ok(())
    }

    fn scan_container(&mut self, i: usize, c: char) -> Result<(), TokenizeError> {
        let Some(container) = self.container.as_mut() else {
            return Ok(());
        };

        if container.in_comment {
            if c == '\n' {
                container.in_comment = false;
            }
            return Ok(());
        }

        if c == ';' {
            container.in_comment = true;
        } else if c == container.kind.open() {
            container.depth += 1;
        } else if c == container.kind.close() {
            container.depth -= 1;
            if container.depth == 0 {
                let kind = container.kind;
                let start = container.start;
                self.container = None;

                let children = tokenize_nested(&self.text[start + c.len_utf8()..i])?;
                self.tokens.push(kind.token(children));
            }
        }
        Ok(())
    }

    fn in_quoted_word(&self) -> bool {
        self.word_start.is_some_and(|start| self.text[start..].starts_with('"'))
    }

    fn close_word(&mut self, end: usize) {
        if let Some(start) = self.word_start.take() {
            self.tokens.push(classify_word(&self.text[start..end]));
        }
    }
}
