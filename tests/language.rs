use std::fs;

use logoterp::{
    interpreter::{
        output::{Discard, SharedBuffer, Verbosity},
        session::{Interpretation, Interpreter},
    },
    run_script,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

fn interpreter() -> (Interpreter, SharedBuffer) {
    let out = SharedBuffer::default();
    let interpreter =
        Interpreter::new(Box::new(out.clone()), Box::new(Discard), Verbosity::Silent);
    (interpreter, out)
}

/// Runs `src` as a script and returns everything it printed.
fn output_of(src: &str) -> Vec<String> {
    let (mut interpreter, out) = interpreter();
    if let Err(e) = run_script(&mut interpreter, src) {
        panic!("Script failed: {e}\n{src}");
    }
    out.take()
}

fn assert_prints(src: &str, expected: &[&str]) {
    assert_eq!(output_of(src), expected);
}

fn assert_failure(src: &str) {
    let (mut interpreter, _) = interpreter();
    if run_script(&mut interpreter, src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

/// What each script under `demos` prints.
fn demo_output(name: &str) -> &'static [&'static str] {
    match name {
        "arithmetic" => &["0.3", "20", "3.142857142857142857142857143", "5", "55", "big"],
        "countdown" => &["5", "4", "3", "2", "1", "liftoff", "round1", "round2", "round3"],
        "factorial" => &["3628800", "fact n", "multiplies the numbers from 1 to n"],
        "lists" => &["red",
                     "green blue",
                     "[red green blue violet]",
                     "3",
                     "[4 3 2 1]",
                     "[a b c d]"],
        other => panic!("No expected output recorded for demo {other:?}"),
    }
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "logo"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let (mut interpreter, out) = interpreter();
        if let Err(e) = run_script(&mut interpreter, &content) {
            panic!("Demo {path:?} failed: {e}");
        }

        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        assert_eq!(out.take(), demo_output(name), "output of {path:?}");
    }

    assert!(count > 0, "No demo scripts found in demos");
}

#[test]
fn make_then_print() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("make \"x 5"), Interpretation::Complete);
    assert_eq!(interpreter.interpret("print :x"), Interpretation::Complete);
    assert_eq!(out.lines(), vec!["5"]);
}

#[test]
fn definition_on_one_line() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("to square :n [output :n * :n] end"),
               Interpretation::Complete);
    assert!(interpreter.context().lookup("square").is_some());
    assert_eq!(interpreter.interpret("print square 4"), Interpretation::Complete);
    assert_eq!(out.lines(), vec!["16"]);
}

#[test]
fn definition_across_lines() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("to square :n"), Interpretation::Incomplete);
    assert_eq!(interpreter.interpret("output :n * :n"), Interpretation::Incomplete);
    assert_eq!(interpreter.interpret("end"), Interpretation::Complete);
    assert_eq!(interpreter.interpret("print square 4"), Interpretation::Complete);
    assert_eq!(out.lines(), vec!["16"]);
}

#[test]
fn open_list_continues_on_next_line() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("print ["), Interpretation::Incomplete);
    assert!(interpreter.is_pending());
    assert_eq!(interpreter.interpret("1 2 3]"), Interpretation::Complete);
    assert_eq!(out.lines(), vec!["1 2 3"]);
}

#[test]
fn call_waits_for_inputs_on_next_line() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("print sum 1"), Interpretation::Incomplete);
    assert_eq!(interpreter.interpret("2"), Interpretation::Complete);
    assert_eq!(out.lines(), vec!["3"]);
}

#[test]
fn undefined_word_fails_with_one_message() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("foo 1 2"), Interpretation::Failure);
    assert_eq!(out.lines(), vec!["I don't know how to foo."]);
    assert!(!interpreter.is_pending());
}

#[test]
fn repeat_prints_in_order() {
    assert_prints("repeat 3 [print \"hi]", &["hi", "hi", "hi"]);
    assert_prints("repeat 3 [print repcount]", &["1", "2", "3"]);
}

#[test]
fn print_and_show() {
    assert_prints("print [a [b c] d]", &["a [b c] d"]);
    assert_prints("show [a [b c] d]", &["[a [b c] d]"]);
    assert_prints("pr \"hello", &["hello"]);
}

#[test]
fn infix_arithmetic_in_arguments() {
    assert_prints("print 2 + 3", &["5"]);
    assert_prints("print 2 + 3 * 4", &["14"]);
    assert_prints("print (10 - 4) / 4", &["1.5"]);
    assert_prints("print 8 / 2 * 2", &["2"]);
    assert_prints("print -3 + 1", &["-2"]);
}

#[test]
fn text_concatenation() {
    assert_prints("print \"abc + \"def", &["abcdef"]);
    assert_prints("print \"n + 1", &["n1"]);
}

#[test]
fn unset_variables_act_as_defaults() {
    assert_prints("print :nothing + 2", &["2"]);
}

#[test]
fn conditionals() {
    assert_prints("if 1 = 1 [print \"yes]", &["yes"]);
    assert_prints("if 1 = 2 [print \"yes]", &[]);
    assert_prints("ifelse lessp 1 2 [print \"less] [print \"more]", &["less"]);
    assert_prints("print not equalp \"a \"b", &["true"]);
}

#[test]
fn recursive_procedure() {
    let src = "to fact :n
                 if :n = 0 [output 1]
                 output :n * fact :n - 1
               end
               print fact 5";
    assert_prints(src, &["120"]);
}

#[test]
fn stop_leaves_procedure_early() {
    let src = "to countdown :n
                 if :n = 0 [stop]
                 print :n
                 countdown :n - 1
               end
               countdown 3";
    assert_prints(src, &["3", "2", "1"]);
}

#[test]
fn locals_shadow_globals() {
    let src = "make \"n 100
               to show.n :n
                 print :n
               end
               show.n 7
               print :n";
    assert_prints(src, &["7", "100"]);
}

#[test]
fn procedures_see_their_callers_variables() {
    let src = "to inner
                 print :x
               end
               to outer :x
                 inner
               end
               outer \"dynamic";
    assert_prints(src, &["dynamic"]);
}

#[test]
fn redefinition_replaces() {
    let src = "to greet [print \"hello] end
               to greet [print \"goodbye] end
               greet";
    assert_prints(src, &["goodbye"]);
}

#[test]
fn primitives_cannot_be_redefined() {
    assert_prints("to print :x [show :x] end\nprint [a]",
                  &["print is a primitive and cannot be redefined.", "a"]);
    assert_prints("to to end", &["to is a primitive and cannot be redefined."]);
}

#[test]
fn definition_help_and_source() {
    let src = "to square :n ; squares a number
                 output :n * :n
               end
               help \"square
               po \"square";
    assert_prints(src,
                  &["square n",
                    "squares a number",
                    "to square :n ; squares a number\noutput :n * :n end"]);
}

#[test]
fn printed_source_can_be_entered_again() {
    let printed = output_of("to square :n ; squares a number
                               output :n * :n
                             end
                             po \"square")
                  .join("\n");

    assert_prints(&format!("{printed}\nprint square 3\nhelp \"square"),
                  &["9", "square n", "squares a number"]);
}

#[test]
fn lists_with_comments_display_on_separate_lines() {
    assert_prints("show [a ; note\n b]", &["[a ; note\nb]"]);
}

#[test]
fn small_numbers_print_in_plain_notation() {
    assert_prints("print 0.0000001", &["0.0000001"]);
    assert_prints("print 1 / 10000000", &["0.0000001"]);
    assert_prints("show list 1 / 10000000 \"x", &["[0.0000001 x]"]);
    assert_prints("print 0.0000001 * 10", &["0.000001"]);
}

#[test]
fn negative_numbers_after_operators() {
    assert_prints("print 3*-2", &["-6"]);
    assert_prints("print 5--3", &["8"]);
}

#[test]
fn unset_operands_are_named_in_errors() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("print :a + :b"), Interpretation::Failure);
    assert_eq!(out.lines(), vec!["+ doesn't like nothing as input."]);
}

#[test]
fn verbose_narrates_tokenizer_results() {
    let debug = SharedBuffer::default();
    let mut interpreter =
        Interpreter::new(Box::new(Discard), Box::new(debug.clone()), Verbosity::Verbose);
    let _ = debug.take();

    assert_eq!(interpreter.interpret("print 1"), Interpretation::Complete);
    let lines = debug.take();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("tokenized in "), "{lines:?}");
    assert!(lines[0].ends_with(": complete, 2 tokens"), "{lines:?}");

    assert_eq!(interpreter.interpret("print [1"), Interpretation::Incomplete);
    let lines = debug.take();
    assert!(lines[0].ends_with(": incomplete, 1 tokens"), "{lines:?}");
}

#[test]
fn logorrheic_dumps_tokens() {
    let debug = SharedBuffer::default();
    let mut interpreter =
        Interpreter::new(Box::new(Discard), Box::new(debug.clone()), Verbosity::Logorrheic);
    let setup = debug.take();
    assert!(setup.iter().any(|l| l.starts_with("loaded module primitives")), "{setup:?}");
    assert!(setup.iter().any(|l| l == "registered print (1 inputs)"), "{setup:?}");

    assert_eq!(interpreter.interpret("print \"hi"), Interpretation::Complete);
    let lines = debug.take();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines[0].starts_with("tokenized in "), "{lines:?}");
    assert_eq!(lines[1].lines().count(), 2, "{lines:?}");
    assert!(lines[1].starts_with("Word { text: \"print\" }"), "{lines:?}");
}

#[test]
fn list_operations() {
    assert_prints("print first [a b c]", &["a"]);
    assert_prints("print last [a b c]", &["c"]);
    assert_prints("show butfirst [a b c]", &["[b c]"]);
    assert_prints("show bl [a b c]", &["[a b]"]);
    assert_prints("print count [a b c]", &["3"]);
    assert_prints("print item 2 [a b c]", &["b"]);
    assert_prints("show fput \"z [a b]", &["[z a b]"]);
    assert_prints("show lput \"z [a b]", &["[a b z]"]);
    assert_prints("show sentence [a b] [c]", &["[a b c]"]);
    assert_prints("show list \"a [b]", &["[a [b]]"]);
    assert_prints("print emptyp []", &["true"]);
}

#[test]
fn word_operations() {
    assert_prints("print first \"hello", &["h"]);
    assert_prints("print butfirst \"hello", &["ello"]);
    assert_prints("print word \"sun \"flower", &["sunflower"]);
    assert_prints("print count \"hello", &["5"]);
    assert_prints("print wordp \"a", &["true"]);
    assert_prints("print listp \"a", &["false"]);
}

#[test]
fn built_lists_can_be_run() {
    assert_prints("run list \"print 3", &["3"]);
}

#[test]
fn type_mismatch_in_command_is_reported_and_recovered() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("print sum \"a 1"), Interpretation::Complete);
    assert_eq!(out.take(), vec!["sum doesn't like a as input.", ""]);
}

#[test]
fn structural_errors_fail() {
    assert_failure("[1 2 3]");
    assert_failure("print (2 +)");
    assert_failure("print (1 2)");
    assert_failure("print 1 / 0");
    assert_failure("print 1 - \"a");
    assert_failure("output 3");
    assert_failure("print ]");
    assert_failure("print [1 2");
}

#[test]
fn session_recovers_after_failure() {
    let (mut interpreter, out) = interpreter();

    assert_eq!(interpreter.interpret("make \"x 1"), Interpretation::Complete);
    assert_eq!(interpreter.interpret("bogus"), Interpretation::Failure);
    assert_eq!(interpreter.interpret("print :x"), Interpretation::Complete);
    assert_eq!(out.lines(), vec!["I don't know how to bogus.", "1"]);
}

#[test]
fn comments_are_ignored() {
    assert_prints("print 1 ; one\n; nothing\nprint 2", &["1", "2"]);
}
