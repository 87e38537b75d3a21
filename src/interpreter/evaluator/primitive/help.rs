use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            procedure::Procedure,
        },
        token::core::Token,
        value::core::LogoValue,
    },
};

/// Finds the procedure a `help` or `po` input names, reporting unknown names.
fn named_procedure(context: &mut Context,
                   procedure: &str,
                   value: &LogoValue)
                   -> EvalResult<Option<Rc<Procedure>>> {
    let Some(name) = value.as_text() else {
        return context.reject(procedure, value);
    };

    let found = context.lookup(name).and_then(|entries| entries.first().cloned());
    if found.is_none() {
        context.report(&RuntimeError::UndefinedProcedure { name: name.to_string() });
    }
    Ok(found)
}

/// `help name`
///
/// Writes the usage line (name, aliases and example inputs) followed by the
/// help text.
pub fn help(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(procedure) = named_procedure(context, "help", &args[0])? else {
        return Ok(None);
    };

    let usage = procedure.names()
                         .map(|name| {
                             if procedure.example.is_empty() {
                                 name.to_string()
                             } else {
                                 format!("{name} {}", procedure.example)
                             }
                         })
                         .collect::<Vec<_>>()
                         .join(", ");
    context.write_line(&usage);
    if !procedure.help.is_empty() {
        context.write_line(&procedure.help);
    }
    Ok(None)
}

/// `po name`
///
/// Writes a definition's source. Primitives have none.
pub fn po(context: &mut Context, args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let Some(procedure) = named_procedure(context, "po", &args[0])? else {
        return Ok(None);
    };

    match procedure.definition() {
        Some(definition) => context.write_line(&definition.source),
        None => context.write_line(&format!("{} is a primitive.", procedure.name)),
    }
    Ok(None)
}

/// `procedures`
pub fn procedures(context: &mut Context, _args: &[LogoValue]) -> EvalResult<Option<Token>> {
    let names = context.procedure_names()
                       .into_iter()
                       .map(Token::word)
                       .collect::<Vec<_>>();
    Ok(Some(Token::literal(LogoValue::List(names))))
}
