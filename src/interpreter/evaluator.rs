/// Infix operator semantics.
///
/// Applies `+ - * / =` to two evaluated operands, including the coercion of
/// unassigned operands.
pub mod binary;

/// Core evaluation state.
///
/// Contains the runtime context: variables and their frames, the procedure
/// registry, loaded modules, output sinks and the `output`/`stop` signal.
pub mod core;

/// Statement and word evaluation.
///
/// Rewrites token sequences in place, calling procedures and resolving
/// variables until only literals remain.
pub mod execute;

/// Parenthesized expressions and operator-precedence reduction.
pub mod expression;

/// The command module interface.
pub mod module;

/// The built-in commands.
///
/// Output, variables, control flow, arithmetic, word and list handling, and
/// introspection, loaded into every interpreter as one module.
pub mod primitive;

/// Procedures.
///
/// Native commands and `to ... end` definitions, how definitions are
/// compiled, and how either is invoked.
pub mod procedure;
