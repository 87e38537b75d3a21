use bigdecimal::BigDecimal;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::core::Token,
        value::core::LogoValue,
    },
    util::num::checked_divide,
};

/// Applies `op` to two numeric inputs, rejecting anything else.
fn numeric(context: &mut Context,
           procedure: &str,
           args: &[LogoValue],
           op: impl FnOnce(&BigDecimal, &BigDecimal) -> EvalResult<LogoValue>)
           -> EvalResult<Option<Token>> {
    match (args[0].as_number(), args[1].as_number()) {
        (Some(a), Some(b)) => Ok(Some(Token::literal(op(a, b)?))),
        (None, _) => context.reject(procedure, &args[0]),
        (_, None) => context.reject(procedure, &args[1]),
    }
}

/// Applies `op` to boolean inputs, rejecting anything else.
fn logical(context: &mut Context,
           procedure: &str,
           args: &[LogoValue],
           op: impl FnOnce(&[bool]) -> bool)
           -> EvalResult<Option<Token>> {
    let mut flags = Vec::with_capacity(args.len());
    for arg in args {
        match arg.as_bool() {
            Some(flag) => flags.push(flag),
            None => return context.reject(procedure, arg),
        }
    }
    Ok(Some(Token::literal(LogoValue::Bool(op(&flags)))))
}

pub fn sum(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    numeric(context, "sum", args, |a, b| Ok(LogoValue::Number(a + b)))
}

pub fn difference(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    numeric(context, "difference", args, |a, b| Ok(LogoValue::Number(a - b)))
}

pub fn product(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    numeric(context, "product", args, |a, b| Ok(LogoValue::Number(a * b)))
}

/// `quotient a b`
///
/// # Errors
/// `DivisionByZero` when `b` is zero.
pub fn quotient(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    numeric(context, "quotient", args, |a, b| {
        checked_divide(a, b).map(LogoValue::Number)
                            .ok_or(RuntimeError::DivisionByZero)
    })
}

/// `equalp a b`, which accepts any values.
pub fn equalp(_context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    Ok(Some(Token::literal(LogoValue::Bool(args[0].equals(&args[1])))))
}

pub fn lessp(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    numeric(context, "lessp", args, |a, b| Ok(LogoValue::Bool(a < b)))
}

pub fn greaterp(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    numeric(context, "greaterp", args, |a, b| Ok(LogoValue::Bool(a > b)))
}

pub fn not(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    logical(context, "not", args, |flags| !flags[0])
}

pub fn and(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    logical(context, "and", args, |flags| flags.iter().all(|f| *f))
}

pub fn or(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    logical(context, "or", args, |flags| flags.iter().any(|f| *f))
}
