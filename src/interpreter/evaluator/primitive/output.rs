use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    token::core::Token,
    value::core::LogoValue,
};

/// Writes a value on a line of its own.
///
/// A list is printed without its outermost brackets, so `print [a [b] c]`
/// writes `a [b] c`.
pub fn print(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    context.write_line(&args[0].print_form());
    Ok(None)
}

/// Writes a value on a line of its own, keeping a list's brackets.
pub fn show(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    context.write_line(&args[0].to_string());
    Ok(None)
}
