use std::time::Instant;

use crate::{
    error::{InterpretError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Context, Status},
            module::CommandModule,
            primitive::core::Primitives,
            procedure::Procedure,
        },
        output::{OutputWriter, Verbosity},
        token::core::Token,
        tokenizer::{TokenizeResult, Tokenizer},
    },
};

/// What a call to [`Interpreter::interpret`] achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    /// Everything entered so far has run.
    Complete,
    /// More input is needed: a list, expression, definition or call is open.
    Incomplete,
    /// The statement failed. Its message has been written and the pending
    /// input was discarded.
    Failure,
}

/// A Logo session.
///
/// Feeds lines through the tokenizer, captures `to ... end` definitions and
/// executes everything else, keeping unfinished input until a later line
/// completes it.
///
/// # Example
/// ```
/// use logoterp::interpreter::{
///     output::{Discard, SharedBuffer, Verbosity},
///     session::{Interpretation, Interpreter},
/// };
///
/// let out = SharedBuffer::default();
/// let mut interpreter = Interpreter::new(Box::new(out.clone()), Box::new(Discard), Verbosity::Silent);
///
/// assert_eq!(interpreter.interpret("print ["), Interpretation::Incomplete);
/// assert_eq!(interpreter.interpret("1 2 3]"), Interpretation::Complete);
/// assert_eq!(out.lines(), vec!["1 2 3".to_string()]);
/// ```
pub struct Interpreter {
    context:    Context,
    tokenizer:  Tokenizer,
    buffer:     Vec<Token>,
    definition: Option<Vec<Token>>,
}

impl Interpreter {
    /// Creates a session with the primitive commands loaded.
    #[must_use]
    pub fn new(stdout: Box<dyn OutputWriter>,
               debug: Box<dyn OutputWriter>,
               verbosity: Verbosity)
               -> Self {
        let mut context = Context::new(stdout, debug, verbosity);
        context.load_module(Box::new(Primitives));

        Self { context,
               tokenizer: Tokenizer::default(),
               buffer: Vec::new(),
               definition: None }
    }

    /// Interprets one line of input.
    ///
    /// On failure the error message is written to the standard output sink.
    pub fn interpret(&mut self, line: &str) -> Interpretation {
        match self.try_interpret(line) {
            Ok(Status::Complete) => Interpretation::Complete,
            Ok(Status::Incomplete) => Interpretation::Incomplete,
            Err(e) => {
                self.context.write_line(&e.to_string());
                Interpretation::Failure
            },
        }
    }

    /// Interprets one line of input, returning failures instead of writing
    /// them.
    ///
    /// After an error the session forgets all pending input and any running
    /// procedure state, so the next line starts afresh. Variables and
    /// procedures defined so far are kept.
    pub fn try_interpret(&mut self, line: &str) -> Result<Status, InterpretError> {
        let result = self.feed(line);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "statement failed");
            self.reset();
        }
        result
    }

    /// Returns `true` while earlier input is waiting to be completed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.tokenizer.is_pending() || self.definition.is_some() || !self.buffer.is_empty()
    }

    /// The session's execution context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Loads another command module into the session.
    pub fn load_module(&mut self, module: Box<dyn CommandModule>) {
        self.context.load_module(module);
    }

    fn feed(&mut self, line: &str) -> Result<Status, InterpretError> {
        let started = Instant::now();
        let result = self.tokenizer.tokenize(line);
        let elapsed = started.elapsed();

        self.context.narrate(Verbosity::Verbose, || {
                        let outcome = match &result {
                            TokenizeResult::Complete(tokens) => format!("complete, {} tokens", tokens.len()),
                            TokenizeResult::Incomplete { tokens, .. } => {
                                format!("incomplete, {} tokens", tokens.len())
                            },
                            TokenizeResult::Failure(e) => format!("failed: {e}"),
                        };
                        format!("tokenized in {elapsed:?}: {outcome}")
                    });

        match result {
            TokenizeResult::Complete(tokens) => self.buffer.extend(tokens),
            TokenizeResult::Incomplete { tokens, .. } => {
                self.buffer.extend(tokens);
                return Ok(Status::Incomplete);
            },
            TokenizeResult::Failure(e) => return Err(e.into()),
        }

        self.process_buffer()
    }

    fn process_buffer(&mut self) -> Result<Status, InterpretError> {
        loop {
            if let Some(definition) = self.definition.as_mut() {
                let Some(end) = self.buffer.iter().position(|t| t.is_word_named("end")) else {
                    definition.append(&mut self.buffer);
                    return Ok(Status::Incomplete);
                };
                definition.extend(self.buffer.drain(..end));
                self.buffer.remove(0);

                let captured = self.definition.take().unwrap_or_default();
                self.compile_definition(&captured)?;
                continue;
            }

            let start = self.buffer.iter().position(|t| !t.is_literal() && !t.is_comment());
            match start {
                Some(index) if self.buffer[index].is_word_named("to") => {
                    self.definition = Some(self.buffer.drain(..=index).skip(index).collect());
                },
                _ => break,
            }
        }

        if self.buffer.is_empty() {
            return Ok(Status::Complete);
        }

        let mut tokens = std::mem::take(&mut self.buffer);
        self.context.narrate(Verbosity::Logorrheic, || {
                        tokens.iter()
                              .map(|t| format!("{t:?}"))
                              .collect::<Vec<_>>()
                              .join("\n")
                    });

        let status = self.context.execute_tokens(&mut tokens, false)?;
        if status == Status::Incomplete {
            self.buffer = tokens;
        }
        Ok(status)
    }

    /// Registers a captured `to` block, or explains why it cannot be.
    fn compile_definition(&mut self, captured: &[Token]) -> Result<(), RuntimeError> {
        if let Some(Token::Word { text }) = captured.get(1)
           && (text.eq_ignore_ascii_case("to") || self.context.is_non_redefinable(text))
        {
            self.context.report(&RuntimeError::NonRedefinable { name: text.to_lowercase() });
            return Ok(());
        }

        if captured.len() <= 2 {
            return Ok(());
        }

        let procedure = Procedure::define(captured)?;
        let name = procedure.name.clone();
        tracing::debug!(procedure = %name, inputs = procedure.param_count, "defined procedure");
        self.context.register_procedure(procedure);
        self.context.narrate(Verbosity::Chatty, || format!("{name} defined"));
        Ok(())
    }

    /// Forgets all pending input and running procedure state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.tokenizer.reset();
        self.definition = None;
        self.context.reset_execution();
    }
}
