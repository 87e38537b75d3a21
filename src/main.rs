use std::fs;

use clap::Parser;
use logoterp::{
    interpreter::{
        evaluator::{module::CommandModule, procedure::Procedure},
        output::{StandardError, StandardOutput, Verbosity},
        session::{Interpretation, Interpreter},
    },
    run_script,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// logoterp is an interpreter for a Logo-family language, with a REPL that
/// accepts lists, expressions and definitions spread over several lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells logoterp to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// How much the interpreter narrates about itself on standard error.
    #[arg(short, long, value_enum, default_value_t = Verbosity::Silent)]
    verbosity: Verbosity,

    /// A script, or a path with `--file`. Starts the REPL when absent.
    contents: Option<String>,
}

/// Commands that control the host process.
struct Shell;

impl CommandModule for Shell {
    fn name(&self) -> &str {
        "shell"
    }

    fn register_procedures(&self) -> Vec<Procedure> {
        vec![Procedure::command("bye", 0, |_, _| std::process::exit(0))
                 .with_aliases(&["quit"])
                 .with_help("Leaves logoterp.", "")]
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn repl(interpreter: &mut Interpreter) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize the line editor: {e}");
            std::process::exit(1);
        },
    };

    let mut prompt = "? ";
    loop {
        match editor.readline(prompt) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                prompt = match interpreter.interpret(&line) {
                    Interpretation::Incomplete => "~ ",
                    Interpretation::Complete | Interpretation::Failure => "? ",
                };
            },
            Err(ReadlineError::Interrupted) => {
                interpreter.reset();
                prompt = "? ";
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mut interpreter =
        Interpreter::new(Box::new(StandardOutput), Box::new(StandardError), args.verbosity);
    interpreter.load_module(Box::new(Shell));

    let Some(contents) = args.contents else {
        repl(&mut interpreter);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    if let Err(e) = run_script(&mut interpreter, &script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
