use bigdecimal::BigDecimal;
use logos::Logos;

use crate::{
    interpreter::{token::core::Token, value::core::LogoValue},
    util::num::parse_decimal,
};

/// A bare word's shape, as recognized by the lexer.
///
/// The tokenizer finds where words start and end; this lexer then decides
/// what kind of token a finished word becomes. A word only gets a special
/// kind when the whole of it matches one pattern, so `3x` stays a word.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Atom {
    /// Numeric literal words, such as `42`, `3.14`, `.5` or `-2`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"-?\.[0-9]+", parse_number)]
    Number(BigDecimal),
    /// Quoted words, such as `"square`. The quote is not part of the value.
    #[regex(r#""[^ \t\r\n]*"#, |lex| lex.slice()[1..].to_string(), allow_greedy = true)]
    Quoted(String),
    /// Variable references, such as `:size`.
    #[regex(r":[^ \t\r\n]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Variable(String),
}

/// Parses a number literal from the current token slice.
///
/// # Returns
/// - `Some(BigDecimal)`: The parsed number if successful.
/// - `None`: If the slice is not a valid decimal.
fn parse_number(lex: &logos::Lexer<Atom>) -> Option<BigDecimal> {
    parse_decimal(lex.slice())
}

/// Turns a finished bare word into its token.
///
/// # Example
/// ```
/// use logoterp::interpreter::{lexer::classify_word, token::core::Token, value::core::LogoValue};
///
/// assert_eq!(classify_word("print"), Token::word("print"));
/// assert_eq!(classify_word(":x"), Token::Variable { text: ":x".into() });
/// assert_eq!(classify_word("\"hi").value(), Some(&LogoValue::Word("hi".into())));
/// assert_eq!(classify_word("12").value(), Some(&LogoValue::from(12)));
/// ```
#[must_use]
pub fn classify_word(word: &str) -> Token {
    let mut lexer = Atom::lexer(word);

    if let Some(Ok(atom)) = lexer.next()
       && lexer.span().end == word.len()
    {
        return match atom {
            Atom::Number(n) => Token::Literal { text:  word.to_string(),
                                                value: LogoValue::Number(n), },
            Atom::Quoted(s) => Token::Literal { text:  word.to_string(),
                                                value: LogoValue::Word(s), },
            Atom::Variable(text) => Token::Variable { text },
        };
    }

    Token::word(word)
}
