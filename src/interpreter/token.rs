/// Infix operators and their precedence tiers.
pub mod operator;

pub mod core;
