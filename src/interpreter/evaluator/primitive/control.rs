use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            procedure::Signal,
        },
        token::core::Token,
        value::core::LogoValue,
    },
    util::num::{count_to_decimal, decimal_to_count},
};

/// `repeat count list`
///
/// Runs the list `count` times, stopping early if `output` or `stop` is
/// used inside it. `repcount` reports the current iteration.
pub fn repeat(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(times) = args[0].as_number().and_then(decimal_to_count) else {
        return context.reject("repeat", &args[0]);
    };
    let Some(body) = args[1].as_list() else {
        return context.reject("repeat", &args[1]);
    };

    for iteration in 1..=times {
        context.push_repeat_count(iteration);
        let outcome = context.run_list(body);
        context.pop_repeat_count();
        outcome?;

        if context.is_unwinding() {
            break;
        }
    }
    Ok(None)
}

/// `repcount`
///
/// Outputs `-1` outside of any `repeat`.
pub fn repcount(context: &mut Context, _args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let value = context.repeat_count()
                       .map_or_else(|| LogoValue::from(-1), |n| LogoValue::Number(count_to_decimal(n)));
    Ok(Some(Token::literal(value)))
}

/// `run list`
pub fn run(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(body) = args[0].as_list() else {
        return context.reject("run", &args[0]);
    };

    Ok(context.run_list(body)?.map(Token::literal))
}

/// `if condition list`
pub fn if_then(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(condition) = args[0].as_bool() else {
        return context.reject("if", &args[0]);
    };
    let Some(body) = args[1].as_list() else {
        return context.reject("if", &args[1]);
    };

    if !condition {
        return Ok(None);
    }
    Ok(context.run_list(body)?.map(Token::literal))
}

/// `ifelse condition list list`
pub fn if_else(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(condition) = args[0].as_bool() else {
        return context.reject("ifelse", &args[0]);
    };
    let (Some(then_body), Some(else_body)) = (args[1].as_list(), args[2].as_list()) else {
        let culprit = if args[1].as_list().is_none() { &args[1] } else { &args[2] };
        return context.reject("ifelse", culprit);
    };

    let body = if condition { then_body } else { else_body };
    Ok(context.run_list(body)?.map(Token::literal))
}

/// `output value`
///
/// # Errors
/// `OutputOutsideProcedure` when no procedure is running.
pub fn output(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    if !context.in_procedure() {
        return Err(RuntimeError::OutputOutsideProcedure { procedure: "output".to_string() });
    }

    context.raise_signal(Signal::Output(args[0].clone()));
    Ok(None)
}

/// `stop`
///
/// # Errors
/// `OutputOutsideProcedure` when no procedure is running.
pub fn stop(context: &mut Context, _args: &[LogoValue]) -> EvalResult<Option<Token>> {
    if !context.in_procedure() {
        return Err(RuntimeError::OutputOutsideProcedure { procedure: "stop".to_string() });
    }

    context.raise_signal(Signal::Stop);
    Ok(None)
}
