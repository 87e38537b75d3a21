//! # logoterp
//!
//! logoterp is an interpreter for a Logo-family language written in Rust.
//! It tokenizes input a line at a time, carrying unfinished lists,
//! expressions, definitions and calls over to the next line, and evaluates
//! statements by rewriting their tokens in place.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpretError,
    interpreter::{evaluator::core::Status, session::Interpreter},
};

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while splitting input
/// into tokens, evaluating statements, or running a whole script. It
/// standardizes error reporting and carries the details needed for the
/// messages users see.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, evaluator,
///   script runner).
/// - Renders each error as the message written to the user.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenizing, evaluation, values, output sinks
/// and the line-at-a-time session to provide a complete Logo runtime.
///
/// # Responsibilities
/// - Coordinates all core components: tokenizer, evaluator, and value
///   types.
/// - Provides the `interpret(line)` entry point used by the REPL.
/// - Lets hosts plug in command modules and output sinks.
pub mod interpreter;
/// General utilities for decimal numbers.
///
/// This module provides the helpers that turn source text into decimals,
/// render them for users, and convert them to and from counts.
pub mod util;

/// Runs a whole script through an interpreter, one line at a time.
///
/// Execution stops at the first failing statement. The interpreter keeps its
/// variables and procedures afterwards, so it can be reused.
///
/// # Errors
/// Returns the failure of the first statement that fails, or
/// `UnexpectedEndOfInput` if the script ends while input is still open.
///
/// # Examples
/// ```
/// use logoterp::{
///     error::InterpretError,
///     interpreter::{
///         output::{Discard, SharedBuffer, Verbosity},
///         session::Interpreter,
///     },
///     run_script,
/// };
///
/// let out = SharedBuffer::default();
/// let mut interpreter = Interpreter::new(Box::new(out.clone()), Box::new(Discard), Verbosity::Silent);
///
/// let source = "to double :n\n  output :n * 2\nend\nprint double 21";
/// assert!(run_script(&mut interpreter, source).is_ok());
/// assert_eq!(out.lines(), vec!["42".to_string()]);
///
/// // The list is never closed.
/// let res = run_script(&mut interpreter, "print [1 2");
/// assert_eq!(res, Err(InterpretError::UnexpectedEndOfInput));
/// ```
pub fn run_script(interpreter: &mut Interpreter, source: &str) -> Result<(), InterpretError> {
    let mut status = Status::Complete;

    for line in source.lines() {
        status = interpreter.try_interpret(line)?;
    }

    if status == Status::Incomplete {
        interpreter.reset();
        return Err(InterpretError::UnexpectedEndOfInput);
    }
    Ok(())
}
