use crate::interpreter::evaluator::{
    module::CommandModule,
    primitive::{arithmetic, control, help, lists, output, variables},
    procedure::{CommandFn, Procedure},
};

/// Defines the primitives by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a name, followed by any aliases separated by `|`,
/// - the number of inputs,
/// - a function pointer implementing the command,
/// - help and example text.
///
/// The macro produces:
/// - `PrimitiveDef` (internal metadata),
/// - `PRIMITIVE_TABLE` (static table for registration).
macro_rules! primitives {
    (
        $(
            $name:literal $(| $alias:literal)* => {
                inputs: $inputs:expr,
                func: $func:expr,
                help: $help:literal,
                example: $example:literal $(,)?
            }
        ),* $(,)?
    ) => {
        struct PrimitiveDef {
            name:    &'static str,
            aliases: &'static [&'static str],
            inputs:  usize,
            func:    CommandFn,
            help:    &'static str,
            example: &'static str,
        }
        static PRIMITIVE_TABLE: &[PrimitiveDef] = &[
            $(
                PrimitiveDef { name: $name,
                               aliases: &[$($alias),*],
                               inputs: $inputs,
                               func: $func,
                               help: $help,
                               example: $example },
            )*
        ];
    };
}

primitives! {
    "print" | "pr"      => { inputs: 1, func: output::print,
                             help: "Prints a value; a list loses its outer brackets.",
                             example: "[hello world]" },
    "show"              => { inputs: 1, func: output::show,
                             help: "Prints a value exactly as it would be written.",
                             example: "[hello world]" },
    "make"              => { inputs: 2, func: variables::make,
                             help: "Gives a variable a value.", example: "\"size 10" },
    "thing"             => { inputs: 1, func: variables::thing,
                             help: "Outputs the value of a variable.", example: "\"size" },
    "erase" | "ern"     => { inputs: 1, func: variables::erase,
                             help: "Removes a variable.", example: "\"size" },
    "erall"             => { inputs: 0, func: variables::erall,
                             help: "Removes every variable in the current scope.", example: "" },
    "repeat"            => { inputs: 2, func: control::repeat,
                             help: "Runs a list a number of times.", example: "4 [print repcount]" },
    "repcount"          => { inputs: 0, func: control::repcount,
                             help: "Outputs the iteration number of the innermost repeat.",
                             example: "" },
    "run"               => { inputs: 1, func: control::run,
                             help: "Runs a list and outputs what it leaves behind.",
                             example: "[print 1]" },
    "if"                => { inputs: 2, func: control::if_then,
                             help: "Runs a list when a condition is true.",
                             example: "true [print \"yes]" },
    "ifelse"            => { inputs: 3, func: control::if_else,
                             help: "Runs the first list when a condition is true, the second otherwise.",
                             example: "false [print \"yes] [print \"no]" },
    "output" | "op"     => { inputs: 1, func: control::output,
                             help: "Leaves the current procedure with a value.", example: ":n * 2" },
    "stop"              => { inputs: 0, func: control::stop,
                             help: "Leaves the current procedure.", example: "" },
    "sum"               => { inputs: 2, func: arithmetic::sum,
                             help: "Outputs the sum of two numbers.", example: "2 3" },
    "difference"        => { inputs: 2, func: arithmetic::difference,
                             help: "Outputs the first number minus the second.", example: "5 3" },
    "product"           => { inputs: 2, func: arithmetic::product,
                             help: "Outputs the product of two numbers.", example: "4 5" },
    "quotient"          => { inputs: 2, func: arithmetic::quotient,
                             help: "Outputs the first number divided by the second.", example: "7 2" },
    "equalp"            => { inputs: 2, func: arithmetic::equalp,
                             help: "Outputs true if two values are equal.", example: "\"a \"a" },
    "lessp"             => { inputs: 2, func: arithmetic::lessp,
                             help: "Outputs true if the first number is smaller.", example: "1 2" },
    "greaterp"          => { inputs: 2, func: arithmetic::greaterp,
                             help: "Outputs true if the first number is larger.", example: "2 1" },
    "not"               => { inputs: 1, func: arithmetic::not,
                             help: "Outputs the opposite of a boolean.", example: "true" },
    "and"               => { inputs: 2, func: arithmetic::and,
                             help: "Outputs true if both inputs are true.", example: "true false" },
    "or"                => { inputs: 2, func: arithmetic::or,
                             help: "Outputs true if either input is true.", example: "true false" },
    "first"             => { inputs: 1, func: lists::first,
                             help: "Outputs the first item of a list or character of a word.",
                             example: "[a b c]" },
    "last"              => { inputs: 1, func: lists::last,
                             help: "Outputs the last item of a list or character of a word.",
                             example: "[a b c]" },
    "butfirst" | "bf"   => { inputs: 1, func: lists::butfirst,
                             help: "Outputs everything but the first item or character.",
                             example: "[a b c]" },
    "butlast" | "bl"    => { inputs: 1, func: lists::butlast,
                             help: "Outputs everything but the last item or character.",
                             example: "[a b c]" },
    "count"             => { inputs: 1, func: lists::count,
                             help: "Outputs the number of items or characters.", example: "[a b c]" },
    "emptyp"            => { inputs: 1, func: lists::emptyp,
                             help: "Outputs true for the empty list and the empty word.",
                             example: "[]" },
    "numberp"           => { inputs: 1, func: lists::numberp,
                             help: "Outputs true if the input is a number.", example: "42" },
    "wordp"             => { inputs: 1, func: lists::wordp,
                             help: "Outputs true if the input is a word.", example: "\"abc" },
    "listp"             => { inputs: 1, func: lists::listp,
                             help: "Outputs true if the input is a list.", example: "[a b]" },
    "word"              => { inputs: 2, func: lists::word,
                             help: "Outputs two words joined into one.", example: "\"sun \"flower" },
    "list"              => { inputs: 2, func: lists::list,
                             help: "Outputs a list of its two inputs.", example: "\"a [b c]" },
    "sentence" | "se"   => { inputs: 2, func: lists::sentence,
                             help: "Outputs a list of its inputs, with list inputs spliced in.",
                             example: "[a b] [c d]" },
    "fput"              => { inputs: 2, func: lists::fput,
                             help: "Outputs a list with a new first item.", example: "\"a [b c]" },
    "lput"              => { inputs: 2, func: lists::lput,
                             help: "Outputs a list with a new last item.", example: "\"c [a b]" },
    "item"              => { inputs: 2, func: lists::item,
                             help: "Outputs the item at a position, counting from 1.",
                             example: "2 [a b c]" },
    "help"              => { inputs: 1, func: help::help,
                             help: "Describes a procedure.", example: "\"repeat" },
    "po"                => { inputs: 1, func: help::po,
                             help: "Prints the definition of a procedure.", example: "\"square" },
    "procedures"        => { inputs: 0, func: help::procedures,
                             help: "Outputs the names of every callable procedure.", example: "" },
}

/// The command module holding every built-in command.
///
/// All primitives are `NonRedefinable`, so a later definition under one of
/// their names never becomes callable.
///
/// # Example
/// ```
/// use logoterp::interpreter::{
///     evaluator::{core::Context, primitive::core::Primitives},
///     output::{Discard, Verbosity},
/// };
///
/// let mut context = Context::new(Box::new(Discard), Box::new(Discard), Verbosity::Silent);
/// context.load_module(Box::new(Primitives));
///
/// assert!(context.is_non_redefinable("print"));
/// assert!(context.is_non_redefinable("PR"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Primitives;

impl CommandModule for Primitives {
    fn name(&self) -> &str {
        "primitives"
    }

    fn register_procedures(&self) -> Vec<Procedure> {
        PRIMITIVE_TABLE.iter()
                       .map(|def| {
                           Procedure::command(def.name, def.inputs, def.func)
                               .with_aliases(def.aliases)
                               .with_help(def.help, def.example)
                       })
                       .collect()
    }
}
