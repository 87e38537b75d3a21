/// Arithmetic and logic commands.
///
/// `sum`, `difference`, `product`, `quotient`, comparisons and boolean
/// connectives.
pub mod arithmetic;
/// Control flow commands.
///
/// `repeat`, `repcount`, `run`, `if`, `ifelse`, `output` and `stop`.
pub mod control;
/// The primitive table and the module that registers it.
pub mod core;
/// Introspection commands: `help`, `po` and `procedures`.
pub mod help;
/// Word and list commands.
///
/// Taking words and lists apart, building them, and asking what a value is.
pub mod lists;
/// `print` and `show`.
pub mod output;
/// Variable commands: `make`, `thing`, `erase` and `erall`.
pub mod variables;
