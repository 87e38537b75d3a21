use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Status},
        token::core::Token,
        value::core::{LogoValue, join_tokens},
    },
};

/// Signature of a natively implemented command.
///
/// The callback receives the context and exactly as many input values as the
/// procedure declares. It returns the token that replaces the call, or `None`
/// when the command produces nothing. An `Err` abandons the whole statement;
/// commands that only object to an input report it and return `Ok(None)`.
pub type CommandFn = fn(&mut Context, &[LogoValue]) -> EvalResult<Option<Token>>;

/// What happens when a procedure is registered under a name that is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redefinability {
    /// The first registration wins; later ones never become callable.
    NonRedefinable,
    /// Later registrations are called after the earlier ones, and the last
    /// value any of them produces is the result.
    DefineAlongside,
    /// A later registration supersedes the earlier ones.
    Replace,
}

/// How a procedure is carried out.
#[derive(Debug, Clone)]
pub enum ProcedureKind {
    /// A native callback.
    Command(CommandFn),
    /// A procedure written in Logo with `to ... end`.
    Definition(Definition),
}

/// A named, fixed-arity unit of behavior.
#[derive(Debug, Clone)]
pub struct Procedure {
    /// The primary name.
    pub name:           String,
    /// Other names the procedure answers to.
    pub aliases:        Vec<String>,
    /// How many inputs every call supplies.
    pub param_count:    usize,
    /// Policy for later registrations under the same name.
    pub redefinability: Redefinability,
    /// One-line description shown by `help`.
    pub help:           String,
    /// Sample inputs shown by `help`.
    pub example:        String,
    /// The implementation.
    pub kind:           ProcedureKind,
}

/// The compiled form of a `to ... end` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// Formal parameter names, without colons.
    pub params: Vec<String>,
    /// The body, as tokens ready to execute.
    pub body:   Vec<Token>,
    /// The block's source text, for `po` and later editing.
    pub source: String,
}

impl Procedure {
    /// Creates a native command that cannot be redefined.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::evaluator::procedure::{Procedure, Redefinability};
    ///
    /// let beep = Procedure::command("beep", 0, |_, _| Ok(None)).with_aliases(&["bp"]);
    ///
    /// assert_eq!(beep.names().collect::<Vec<_>>(), vec!["beep", "bp"]);
    /// assert_eq!(beep.redefinability, Redefinability::NonRedefinable);
    /// ```
    #[must_use]
    pub fn command(name: &str, param_count: usize, func: CommandFn) -> Self {
        Self { name: name.to_lowercase(),
               aliases: Vec::new(),
               param_count,
               redefinability: Redefinability::NonRedefinable,
               help: String::new(),
               example: String::new(),
               kind: ProcedureKind::Command(func) }
    }

    /// Adds alternative names.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_lowercase()));
        self
    }

    /// Sets the help and example text.
    #[must_use]
    pub fn with_help(mut self, help: &str, example: &str) -> Self {
        self.help = help.to_string();
        self.example = example.to_string();
        self
    }

    /// Sets the redefinability policy.
    #[must_use]
    pub const fn with_redefinability(mut self, redefinability: Redefinability) -> Self {
        self.redefinability = redefinability;
        self
    }

    /// The primary name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Returns the definition of a Logo-written procedure.
    #[must_use]
    pub const fn definition(&self) -> Option<&Definition> {
        match &self.kind {
            ProcedureKind::Definition(definition) => Some(definition),
            ProcedureKind::Command(_) => None,
        }
    }

    /// Compiles a captured `to` block.
    ///
    /// `tokens` holds everything from `to` up to, but not including, `end`.
    /// The name follows `to`; the `:name` tokens after it are the formal
    /// parameters; a comment right after them becomes the help text; the rest
    /// is the body. A body that is a single bracketed list runs that list's
    /// contents.
    ///
    /// # Errors
    /// Returns `MissingProcedureName` if `to` is not followed by a word.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::{
    ///     evaluator::procedure::{Procedure, Redefinability},
    ///     tokenizer::{TokenizeResult, tokenize},
    /// };
    ///
    /// let TokenizeResult::Complete(tokens) = tokenize("to square :n ; squares n\n output :n * :n")
    /// else {
    ///     panic!("should tokenize");
    /// };
    /// let square = Procedure::define(&tokens).unwrap();
    ///
    /// assert_eq!(square.name, "square");
    /// assert_eq!(square.param_count, 1);
    /// assert_eq!(square.help, "squares n");
    /// assert_eq!(square.example, "n");
    /// assert_eq!(square.redefinability, Redefinability::Replace);
    /// assert_eq!(square.definition().unwrap().body.len(), 4);
    /// ```
    pub fn define(tokens: &[Token]) -> EvalResult<Self> {
        let name = match tokens.get(1) {
            Some(Token::Word { text }) => text.to_lowercase(),
            Some(other) => {
                return Err(RuntimeError::MissingProcedureName { found: other.text() });
            },
            None => return Err(RuntimeError::MissingProcedureName { found: String::new() }),
        };

        let mut rest = tokens.iter().skip(2).peekable();

        let mut params = Vec::new();
        while let Some(param) = rest.peek().and_then(|t| t.variable_name()) {
            params.push(param.to_lowercase());
            rest.next();
        }

        let mut help = String::new();
        let mut example = String::new();
        if let Some(Token::Comment { text }) = rest.peek() {
            help = text.trim_start_matches(';').trim_start().to_string();
            example = params.join(" ");
            rest.next();
        }

        let mut body: Vec<Token> = rest.cloned().collect();
        if let [Token::List { children }] = body.as_slice() {
            body = children.clone();
        }

        let source = format!("{} end", join_tokens(tokens));

        Ok(Self { name,
                  aliases: Vec::new(),
                  param_count: params.len(),
                  redefinability: Redefinability::Replace,
                  help,
                  example,
                  kind: ProcedureKind::Definition(Definition { params,
                                                               body,
                                                               source }) })
    }
}

impl Context {
    /// Runs one registered procedure with already evaluated inputs.
    ///
    /// Commands get a transparent stack frame for the duration of the call.
    /// Definitions bind their parameters in a frame of their own, run their
    /// body to completion and hand back the value given to `output`, or else
    /// the last value left in the body.
    pub fn invoke(&mut self, procedure: &Procedure, args: &[LogoValue]) -> EvalResult<Option<Token>> {
        match &procedure.kind {
            ProcedureKind::Command(func) => {
                self.stack_frame_create();
                let result = func(self, args);
                self.stack_frame_destroy();
                result
            },
            ProcedureKind::Definition(definition) => {
                self.call_definition(&procedure.name, definition, args)
            },
        }
    }

    fn call_definition(&mut self,
                       name: &str,
                       definition: &Definition,
                       args: &[LogoValue])
                       -> EvalResult<Option<Token>> {
        let frame = definition.params
                              .iter()
                              .cloned()
                              .zip(args.iter().cloned())
                              .collect::<HashMap<_, _>>();
        tracing::debug!(procedure = name, inputs = args.len(), "calling definition");

        self.stack_frame_create_with(frame);
        let mut body = definition.body.clone();
        let outcome = self.execute_tokens(&mut body, false);
        self.stack_frame_destroy();
        let signal = self.take_signal();

        if outcome? == Status::Incomplete {
            return Err(RuntimeError::NotEnoughInputs { procedure: pending_word(&body) });
        }

        Ok(match signal {
            Some(Signal::Output(value)) => Some(Token::literal(value)),
            Some(Signal::Stop) => None,
            None => body.into_iter().rev().find(Token::is_literal),
        })
    }
}

/// A request from `output` or `stop` to leave the running procedure.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Leave with this value.
    Output(LogoValue),
    /// Leave without a value.
    Stop,
}

/// The text of the first unevaluated token, which is the call that ran out
/// of inputs when execution ends incomplete.
pub(crate) fn pending_word(tokens: &[Token]) -> String {
    tokens.iter()
          .find(|t| !t.is_literal())
          .map(Token::text)
          .unwrap_or_default()
}
