/// Tokenizer errors.
///
/// Defines the errors raised while scanning nested lists and expressions.
/// They never escape the tokenizer; a failed scan is reported as a
/// [`crate::interpreter::tokenizer::TokenizeResult::Failure`].
pub mod tokenize_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined procedures, malformed expressions, type mismatches and division
/// by zero.
pub mod runtime_error;
/// Errors surfaced by the top-level interpreter entry points.
pub mod interpret_error;

pub use interpret_error::InterpretError;
pub use runtime_error::RuntimeError;
pub use tokenize_error::TokenizeError;
