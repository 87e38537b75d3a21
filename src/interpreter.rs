/// The evaluator module executes token sequences.
///
/// The evaluator rewrites tokens in place, calling procedures, resolving
/// variables and reducing expressions until only literals remain. It owns the
/// execution context with its variables, procedures and command modules.
///
/// # Responsibilities
/// - Evaluates words, variables, lists and expressions.
/// - Registers procedures according to their redefinability.
/// - Reports runtime errors such as undefined procedures or division by zero.
pub mod evaluator;
/// The lexer module classifies finished words.
///
/// Decides whether a bare word is a number, a quoted word, a variable
/// reference or a plain word.
pub mod lexer;
/// Output sinks and verbosity levels.
pub mod output;
/// The session module drives interpretation line by line.
///
/// It holds input that is not yet complete, captures `to ... end`
/// definitions and reports failures to the user.
pub mod session;
/// The token module defines parsed source.
///
/// # Responsibilities
/// - Defines the `Token` enum with its literal, word, variable, operator,
///   comment, list and expression variants.
/// - Defines the infix operators and the order they are reduced in.
/// - Reproduces source text from tokens.
pub mod token;
/// The tokenizer module splits source text into tokens.
///
/// Tracks words, comments and nested lists and expressions, and carries
/// unfinished lists and expressions over to the next line.
pub mod tokenizer;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a Logo program works with: booleans,
/// numbers, words, text, lists and opaque parcels, along with the
/// comparisons and renderings the commands rely on.
pub mod value;
