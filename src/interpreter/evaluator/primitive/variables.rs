use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    token::core::Token,
    value::core::LogoValue,
};

/// `make name value`
///
/// Assigns in the innermost frame that already binds the name, otherwise
/// globally.
pub fn make(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(name) = args[0].as_text().filter(|n| !n.is_empty()) else {
        return context.reject("make", &args[0]);
    };
    let name = name.to_string();

    context.set_variable(&name, args[1].clone());
    Ok(None)
}

/// `thing name`
pub fn thing(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(name) = args[0].as_text() else {
        return context.reject("thing", &args[0]);
    };
    let name = name.to_string();

    Ok(Some(Token::literal(context.get_variable(&name))))
}

/// `erase name`
pub fn erase(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(name) = args[0].as_text() else {
        return context.reject("erase", &args[0]);
    };
    let name = name.to_string();

    context.clear_variable(&name);
    Ok(None)
}

/// `erall`
pub fn erall(context: &mut Context, _args: &[LogoValue]) -> EvalResult<Option<Token>> {
    context.clear_all_variables();
    Ok(None)
}
