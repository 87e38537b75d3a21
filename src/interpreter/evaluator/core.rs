use std::{collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            module::CommandModule,
            procedure::{Procedure, Redefinability, Signal},
        },
        output::{OutputWriter, Verbosity},
        value::core::LogoValue,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing why the current statement failed.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Whether an evaluation step finished or ran out of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing more is needed.
    Complete,
    /// The tokens so far are valid but a call is still missing inputs.
    Incomplete,
}

/// A local scope. `None` is a transparent frame that binds nothing.
pub type Frame = Option<HashMap<String, LogoValue>>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one session: global
/// variables, the stack of local frames, every registered procedure, the
/// loaded command modules, and the sinks that output is written to.
///
/// ## Usage
///
/// `Context` is created once and mutated for the whole session. Variable and
/// procedure names are case-insensitive.
pub struct Context {
    /// Global variables.
    pub globals:    HashMap<String, LogoValue>,
    /// Local frames, innermost last.
    pub locals:     Vec<Frame>,
    procedures:     Vec<Rc<Procedure>>,
    lookup:         HashMap<String, Vec<Rc<Procedure>>>,
    modules:        Vec<Box<dyn CommandModule>>,
    stdout:         Box<dyn OutputWriter>,
    debug:          Box<dyn OutputWriter>,
    /// How much is narrated on the debug sink.
    pub verbosity:  Verbosity,
    signal:         Option<Signal>,
    repeat_counts:  Vec<usize>,
}

impl Context {
    /// Creates a context with no variables, procedures or modules.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::{
    ///     evaluator::core::Context,
    ///     output::{Discard, Verbosity},
    ///     value::core::LogoValue,
    /// };
    ///
    /// let mut context = Context::new(Box::new(Discard), Box::new(Discard), Verbosity::Silent);
    /// context.set_variable("x", LogoValue::from(5));
    ///
    /// assert_eq!(context.get_variable("X"), LogoValue::from(5));
    /// ```
    #[must_use]
    pub fn new(stdout: Box<dyn OutputWriter>,
               debug: Box<dyn OutputWriter>,
               verbosity: Verbosity)
               -> Self {
        Self { globals: HashMap::new(),
               locals: Vec::new(),
               procedures: Vec::new(),
               lookup: HashMap::new(),
               modules: Vec::new(),
               stdout,
               debug,
               verbosity,
               signal: None,
               repeat_counts: Vec::new() }
    }

    /// Writes a line to the standard output sink.
    pub fn write_line(&mut self, line: &str) {
        self.stdout.write_line(line);
    }

    /// Writes an error's message to the standard output sink.
    pub fn report(&mut self, error: &RuntimeError) {
        self.stdout.write_line(&error.to_string());
    }

    /// Reports that `procedure` cannot use `value` and produces nothing.
    ///
    /// This is how commands recover from a bad input locally: the message is
    /// written and the statement carries on.
    pub fn reject<T>(&mut self, procedure: &str, value: &LogoValue) -> EvalResult<Option<T>> {
        self.report(&RuntimeError::TypeMismatch { procedure: procedure.to_string(),
                                                  value:     value.describe(), });
        Ok(None)
    }

    /// Writes to the debug sink when the verbosity is at least `level`.
    ///
    /// The message is only built when it will be written.
    pub fn narrate(&mut self, level: Verbosity, message: impl FnOnce() -> String) {
        if level != Verbosity::Silent && self.verbosity >= level {
            self.debug.write_line(&message());
        }
    }

    /// Registers a procedure under its name and aliases.
    ///
    /// The procedure is always recorded in [`Context::procedures`]. It only
    /// becomes callable under a name that no `NonRedefinable` procedure
    /// holds. Under a free name, a `DefineAlongside` procedure is added after
    /// the ones already there and any other procedure replaces them.
    pub fn register_procedure(&mut self, procedure: Procedure) {
        let procedure = Rc::new(procedure);
        self.procedures.push(Rc::clone(&procedure));

        for name in procedure.names() {
            let entries = self.lookup.entry(name.to_string()).or_default();
            if entries.iter().any(|p| p.redefinability == Redefinability::NonRedefinable) {
                tracing::debug!(name, "skipped registration over a non-redefinable procedure");
                continue;
            }
            if procedure.redefinability != Redefinability::DefineAlongside {
                entries.clear();
            }
            entries.push(Rc::clone(&procedure));
        }

        let name = procedure.name.clone();
        let inputs = procedure.param_count;
        self.narrate(Verbosity::Chatty, || format!("registered {name} ({inputs} inputs)"));
    }

    /// Loads a command module and registers everything it provides.
    pub fn load_module(&mut self, module: Box<dyn CommandModule>) {
        let procedures = module.register_procedures();
        let name = module.name().to_string();
        let count = procedures.len();

        for procedure in procedures {
            self.register_procedure(procedure);
        }
        self.modules.push(module);

        tracing::debug!(module = %name, procedures = count, "loaded command module");
        self.narrate(Verbosity::Terse, || format!("loaded module {name} ({count} procedures)"));
    }

    /// Every procedure ever registered, callable or not, in registration
    /// order.
    #[must_use]
    pub fn procedures(&self) -> &[Rc<Procedure>] {
        &self.procedures
    }

    /// The names of the loaded command modules, in load order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name())
    }

    /// The procedures called for `name`, in registration order.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&[Rc<Procedure>]> {
        self.lookup
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .filter(|entries| !entries.is_empty())
    }

    /// Returns `true` if `name` is held by a procedure that cannot be
    /// redefined.
    #[must_use]
    pub fn is_non_redefinable(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|entries| {
                              entries.iter()
                                     .any(|p| p.redefinability == Redefinability::NonRedefinable)
                          })
    }

    /// The names that currently resolve to a procedure, sorted.
    #[must_use]
    pub fn procedure_names(&self) -> Vec<String> {
        let mut names = self.lookup
                            .iter()
                            .filter(|(_, entries)| !entries.is_empty())
                            .map(|(name, _)| name.clone())
                            .collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Reads a variable.
    ///
    /// Frames are searched from the innermost outwards, skipping transparent
    /// ones, before the globals. Reading a name that exists nowhere creates
    /// it as a global holding [`LogoValue::Unknown`].
    pub fn get_variable(&mut self, name: &str) -> LogoValue {
        let key = name.to_lowercase();

        if let Some(value) = self.locals
                                 .iter()
                                 .rev()
                                 .flatten()
                                 .find_map(|frame| frame.get(&key))
        {
            return value.clone();
        }

        self.globals.entry(key).or_default().clone()
    }

    /// Assigns a variable in the innermost frame that binds it, or globally.
    pub fn set_variable(&mut self, name: &str, value: LogoValue) {
        let key = name.to_lowercase();

        if let Some(slot) = self.locals
                                .iter_mut()
                                .rev()
                                .flatten()
                                .find_map(|frame| frame.get_mut(&key))
        {
            *slot = value;
            return;
        }

        self.globals.insert(key, value);
    }

    /// Removes a variable from the innermost frame that binds it, or from the
    /// globals.
    pub fn clear_variable(&mut self, name: &str) {
        let key = name.to_lowercase();

        for frame in self.locals.iter_mut().rev().flatten() {
            if frame.remove(&key).is_some() {
                return;
            }
        }

        self.globals.remove(&key);
    }

    /// Removes every variable of the innermost local frame, or every global
    /// when no local frame exists.
    pub fn clear_all_variables(&mut self) {
        match self.locals.iter_mut().rev().flatten().next() {
            Some(frame) => frame.clear(),
            None => self.globals.clear(),
        }
    }

    /// Pushes a transparent frame.
    pub fn stack_frame_create(&mut self) {
        self.locals.push(None);
    }

    /// Pushes a frame holding `bindings`.
    pub fn stack_frame_create_with(&mut self, bindings: HashMap<String, LogoValue>) {
        self.locals.push(Some(bindings));
    }

    /// Pops the innermost frame.
    pub fn stack_frame_destroy(&mut self) {
        self.locals.pop();
    }

    /// Returns `true` while a Logo-written procedure is running.
    #[must_use]
    pub fn in_procedure(&self) -> bool {
        self.locals.iter().any(Option::is_some)
    }

    /// Asks the running procedure to stop, optionally with a result.
    pub fn raise_signal(&mut self, signal: Signal) {
        self.signal = Some(signal);
    }

    /// Returns `true` while `output` or `stop` is unwinding a procedure.
    #[must_use]
    pub const fn is_unwinding(&self) -> bool {
        self.signal.is_some()
    }

    /// Takes the pending `output` or `stop` request.
    pub fn take_signal(&mut self) -> Option<Signal> {
        self.signal.take()
    }

    /// Enters one iteration of `repeat`.
    pub fn push_repeat_count(&mut self, count: usize) {
        self.repeat_counts.push(count);
    }

    /// Leaves the innermost `repeat` iteration.
    pub fn pop_repeat_count(&mut self) {
        self.repeat_counts.pop();
    }

    /// The iteration number of the innermost running `repeat`.
    #[must_use]
    pub fn repeat_count(&self) -> Option<usize> {
        self.repeat_counts.last().copied()
    }

    /// Forgets everything a failed statement left behind: frames, pending
    /// signals and repeat counters. Variables and procedures are kept.
    pub fn reset_execution(&mut self) {
        self.locals.clear();
        self.signal = None;
        self.repeat_counts.clear();
    }
}
