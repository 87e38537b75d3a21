use std::collections::HashMap;

use logoterp::interpreter::{
    evaluator::{
        core::Context,
        procedure::{Procedure, Redefinability},
    },
    output::{Discard, SharedBuffer, Verbosity},
    token::core::Token,
    value::core::LogoValue,
};
use pretty_assertions::assert_eq;

fn context() -> Context {
    Context::new(Box::new(Discard), Box::new(Discard), Verbosity::Silent)
}

fn answer(value: i64) -> Procedure {
    Procedure::command("answer", 0, |_, _| Ok(None)).with_help(&value.to_string(), "")
}

#[test]
fn locals_take_precedence_over_globals() {
    let mut context = context();
    context.set_variable("x", LogoValue::from(1));

    context.stack_frame_create_with(HashMap::from([("x".to_string(), LogoValue::from(2))]));
    assert_eq!(context.get_variable("x"), LogoValue::from(2));

    context.stack_frame_destroy();
    assert_eq!(context.get_variable("x"), LogoValue::from(1));
}

#[test]
fn transparent_frames_fall_through() {
    let mut context = context();
    context.set_variable("x", LogoValue::from(1));

    context.stack_frame_create();
    assert_eq!(context.get_variable("x"), LogoValue::from(1));
    assert!(!context.in_procedure());
}

#[test]
fn reading_an_unknown_name_creates_a_global() {
    let mut context = context();

    assert_eq!(context.get_variable("ghost"), LogoValue::Unknown);
    assert!(context.globals.contains_key("ghost"));
}

#[test]
fn assignment_targets_the_binding_frame() {
    let mut context = context();
    context.stack_frame_create_with(HashMap::from([("n".to_string(), LogoValue::from(1))]));

    context.set_variable("N", LogoValue::from(5));
    context.set_variable("fresh", LogoValue::from(6));
    context.stack_frame_destroy();

    assert_eq!(context.globals.get("n"), None);
    assert_eq!(context.globals.get("fresh"), Some(&LogoValue::from(6)));
}

#[test]
fn clearing_variables() {
    let mut context = context();
    context.set_variable("a", LogoValue::from(1));
    context.set_variable("b", LogoValue::from(2));

    context.clear_variable("a");
    assert!(!context.globals.contains_key("a"));

    context.stack_frame_create_with(HashMap::from([("c".to_string(), LogoValue::from(3))]));
    context.clear_all_variables();
    assert_eq!(context.get_variable("c"), LogoValue::Unknown);
    context.stack_frame_destroy();

    assert_eq!(context.globals.get("b"), Some(&LogoValue::from(2)));
    context.clear_all_variables();
    assert!(context.globals.is_empty());
}

#[test]
fn first_non_redefinable_registration_wins() {
    let mut context = context();

    context.register_procedure(answer(1));
    context.register_procedure(answer(2));

    let entries = context.lookup("answer").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].help, "1");
    assert_eq!(context.procedures().len(), 2);
}

#[test]
fn define_alongside_keeps_every_registration() {
    let mut context = context();

    context.register_procedure(answer(1).with_redefinability(Redefinability::DefineAlongside));
    context.register_procedure(answer(2).with_redefinability(Redefinability::DefineAlongside));

    let helps = context.lookup("answer")
                       .unwrap()
                       .iter()
                       .map(|p| p.help.clone())
                       .collect::<Vec<_>>();
    assert_eq!(helps, vec!["1", "2"]);
}

#[test]
fn replace_supersedes_earlier_registrations() {
    let mut context = context();

    context.register_procedure(answer(1).with_redefinability(Redefinability::Replace));
    context.register_procedure(answer(2).with_redefinability(Redefinability::Replace));

    let entries = context.lookup("answer").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].help, "2");
}

#[test]
fn aliases_resolve_case_insensitively() {
    let mut context = context();

    context.register_procedure(answer(1).with_aliases(&["reply"]));

    assert!(context.lookup("REPLY").is_some());
    assert!(context.is_non_redefinable("Answer"));
    assert_eq!(context.procedure_names(), vec!["answer", "reply"]);
}

#[test]
fn alongside_commands_all_run_and_the_last_value_wins() {
    let out = SharedBuffer::default();
    let mut context = Context::new(Box::new(out.clone()), Box::new(Discard), Verbosity::Silent);

    let first = Procedure::command("ping", 0, |context, _| {
                    context.write_line("first");
                    Ok(Some(Token::literal(LogoValue::from(1))))
                });
    let second = Procedure::command("ping", 0, |context, _| {
                     context.write_line("second");
                     Ok(Some(Token::literal(LogoValue::from(2))))
                 });
    context.register_procedure(first.with_redefinability(Redefinability::DefineAlongside));
    context.register_procedure(second.with_redefinability(Redefinability::DefineAlongside));

    let mut tokens = vec![Token::word("ping")];
    context.execute_tokens(&mut tokens, false).unwrap();

    assert_eq!(out.lines(), vec!["first", "second"]);
    assert_eq!(tokens, vec![Token::literal(LogoValue::from(2))]);
}

#[test]
fn narration_respects_verbosity() {
    let debug = SharedBuffer::default();
    let mut context = Context::new(Box::new(Discard), Box::new(debug.clone()), Verbosity::Terse);

    context.narrate(Verbosity::Terse, || "terse".to_string());
    context.narrate(Verbosity::Chatty, || "chatty".to_string());

    assert_eq!(debug.lines(), vec!["terse"]);
}
