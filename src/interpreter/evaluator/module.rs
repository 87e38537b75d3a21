use crate::interpreter::evaluator::procedure::Procedure;

/// A bundle of native commands supplied from outside the core.
///
/// Hosts implement this to add commands such as turtle graphics or shell
/// control. [`Context::load_module`] calls [`CommandModule::register_procedures`]
/// once and keeps the module for the rest of the session.
///
/// [`Context::load_module`]: crate::interpreter::evaluator::core::Context::load_module
///
/// # Example
/// ```
/// use logoterp::interpreter::{
///     evaluator::{core::Context, module::CommandModule, procedure::Procedure},
///     output::{Discard, Verbosity},
/// };
///
/// struct Bell;
///
/// impl CommandModule for Bell {
///     fn name(&self) -> &str {
///         "bell"
///     }
///
///     fn register_procedures(&self) -> Vec<Procedure> {
///         vec![Procedure::command("ring", 0, |_, _| Ok(None))]
///     }
/// }
///
/// let mut context = Context::new(Box::new(Discard), Box::new(Discard), Verbosity::Silent);
/// context.load_module(Box::new(Bell));
///
/// assert!(context.lookup("ring").is_some());
/// assert_eq!(context.modules().collect::<Vec<_>>(), vec!["bell"]);
/// ```
pub trait CommandModule {
    /// A short name used in narration.
    fn name(&self) -> &str;

    /// Builds the procedures this module provides.
    fn register_procedures(&self) -> Vec<Procedure>;
}
