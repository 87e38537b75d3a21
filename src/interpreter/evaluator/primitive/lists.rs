use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::classify_word,
        token::core::Token,
        value::core::LogoValue,
    },
    util::num::{count_to_decimal, decimal_to_count, format_decimal, parse_decimal},
};

/// The characters of a value that can be taken apart as a word.
fn word_text(value: &LogoValue) -> Option<String> {
    match value {
        LogoValue::Text(s) | LogoValue::Word(s) => Some(s.clone()),
        LogoValue::Number(n) => Some(format_decimal(n)),
        LogoValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A piece of a word as a value: digits stay numbers, anything else is a
/// word.
fn word_value(text: String) -> LogoValue {
    parse_decimal(&text).map_or(LogoValue::Word(text), LogoValue::Number)
}

/// Turns a value into a list item.
///
/// Words are stored as the token their text would tokenize to, so a list
/// built from words can be run like one that was typed in.
pub(crate) fn item_token(value: LogoValue) -> Token {
    match value {
        LogoValue::Text(s) | LogoValue::Word(s)
            if !s.is_empty() && !s.contains(char::is_whitespace) =>
        {
            classify_word(&s)
        },
        LogoValue::List(children) => Token::List { children },
        other => Token::literal(other),
    }
}

fn list_token(items: Vec<Token>) -> Option<Token> {
    Some(Token::literal(LogoValue::List(items)))
}

/// Splits a word or list into a piece and the rest, as `first`, `last`,
/// `butfirst` and `butlast` do.
fn take_apart(context: &mut Context,
              procedure: &str,
              value: &LogoValue,
              from_front: bool,
              keep_piece: bool)
              -> EvalResult<Option<Token>> {
    if let Some(items) = value.as_list() {
        let Some((piece, rest)) = (if from_front { items.split_first() } else { items.split_last() })
        else {
            return context.reject(procedure, value);
        };
        return Ok(if keep_piece {
                      Some(Token::literal(piece.as_datum()))
                  } else {
                      list_token(rest.to_vec())
                  });
    }

    let Some(text) = word_text(value).filter(|t| !t.is_empty()) else {
        return context.reject(procedure, value);
    };
    let mut chars = text.chars();
    let piece = if from_front { chars.next() } else { chars.next_back() };
    let result = if keep_piece {
        piece.map(String::from).unwrap_or_default()
    } else {
        chars.as_str().to_string()
    };

    Ok(Some(Token::literal(if keep_piece { word_value(result) } else { LogoValue::Word(result) })))
}

pub fn first(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    take_apart(context, "first", &args[0], true, true)
}

pub fn last(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    take_apart(context, "last", &args[0], false, true)
}

pub fn butfirst(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    take_apart(context, "butfirst", &args[0], true, false)
}

pub fn butlast(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    take_apart(context, "butlast", &args[0], false, false)
}

/// `count thing`: items of a list or characters of a word.
pub fn count(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let length = match (args[0].as_list(), word_text(&args[0])) {
        (Some(items), _) => items.len(),
        (None, Some(text)) => text.chars().count(),
        (None, None) => return context.reject("count", &args[0]),
    };
    Ok(Some(Token::literal(LogoValue::Number(count_to_decimal(length)))))
}

pub fn emptyp(_context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let empty = match &args[0] {
        LogoValue::List(items) => items.is_empty(),
        LogoValue::Text(s) | LogoValue::Word(s) => s.is_empty(),
        _ => false,
    };
    Ok(Some(Token::literal(LogoValue::Bool(empty))))
}

pub fn numberp(_context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    Ok(Some(Token::literal(LogoValue::Bool(args[0].as_number().is_some()))))
}

pub fn wordp(_context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    Ok(Some(Token::literal(LogoValue::Bool(word_text(&args[0]).is_some()))))
}

pub fn listp(_context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    Ok(Some(Token::literal(LogoValue::Bool(args[0].as_list().is_some()))))
}

/// `word a b`
pub fn word(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    match (word_text(&args[0]), word_text(&args[1])) {
        (Some(a), Some(b)) => Ok(Some(Token::literal(LogoValue::Word(a + &b)))),
        (None, _) => context.reject("word", &args[0]),
        (_, None) => context.reject("word", &args[1]),
    }
}

/// `list a b`
pub fn list(_context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    Ok(list_token(args.iter().cloned().map(item_token).collect()))
}

/// `sentence a b`: like `list`, but the items of list inputs are spliced in.
pub fn sentence(_context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let mut items = Vec::new();
    for arg in args {
        match arg {
            LogoValue::List(children) => items.extend(children.iter().cloned()),
            other => items.push(item_token(other.clone())),
        }
    }
    Ok(list_token(items))
}

/// `fput thing list`
pub fn fput(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(items) = args[1].as_list() else {
        return context.reject("fput", &args[1]);
    };

    let mut result = Vec::with_capacity(items.len() + 1);
    result.push(item_token(args[0].clone()));
    result.extend(items.iter().cloned());
    Ok(list_token(result))
}

/// `lput thing list`
pub fn lput(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(items) = args[1].as_list() else {
        return context.reject("lput", &args[1]);
    };

    let mut result = items.to_vec();
    result.push(item_token(args[0].clone()));
    Ok(list_token(result))
}

/// `item position thing`, counting from 1.
///
/// # Errors
/// `InvalidInput` when the position is past either end.
pub fn item(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(position) = args[0].as_number().and_then(decimal_to_count) else {
        return context.reject("item", &args[0]);
    };
    let out_of_range = || RuntimeError::InvalidInput { procedure: "item".to_string(),
                                                       details:   format!("there is no item {position}"), };

    if let Some(items) = args[1].as_list() {
        let found = position.checked_sub(1).and_then(|i| items.get(i)).ok_or_else(out_of_range)?;
        return Ok(Some(Token::literal(found.as_datum())));
    }

    let Some(text) = word_text(&args[1]) else {
        return context.reject("item", &args[1]);
    };
    let found = position.checked_sub(1)
                        .and_then(|i| text.chars().nth(i))
                        .ok_or_else(out_of_range)?;
    Ok(Some(Token::literal(word_value(found.to_string()))))
}
