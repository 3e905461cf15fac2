//! REPL (Read-Eval-Print Loop) implementation

use crate::cli::Target;
use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use clap::ValueEnum;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// Each complete input is one literal; unbalanced JSON continues on the
/// next line.
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("conversely v{}", conversion::Conversely::version());
    println!("Type a value to convert, .help for commands, or .exit to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == ".exit" || trimmed == "exit" || trimmed == "quit") {
                    break;
                }

                if !in_multiline && handle_repl_command(trimmed, runtime) {
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if is_input_complete(&line_buffer) {
                    in_multiline = false;
                    let _ = editor.add_history_entry(&line_buffer);
                    println!("{}", runtime.execute_string(&line_buffer));
                    line_buffer.clear();
                } else {
                    in_multiline = true;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type .exit to quit");
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
///
/// Returns `false` when `line` is not a command, so literals such as `.5`
/// are converted instead.
fn handle_repl_command(line: &str, runtime: &mut Runtime) -> bool {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some(".help"), _) => {
            println!("REPL Commands:");
            println!("  .help            - Show this help message");
            println!("  .options         - Show the effective options");
            println!("  .to [TARGET]     - Show or set the target (number, string, boolean, all)");
            println!("  .exit            - Exit the REPL");
            println!();
            println!("Values: JSON, undefined, NaN, Infinity, -Infinity, or raw text.");
            println!(r#"Wrappers: {{"valueOf": 1, "toString": "one"}}; functions: {{"$fn": 1}}"#);
        }
        (Some(".options"), _) => println!("{}", runtime.options_json()),
        (Some(".to"), None) => println!("{}", runtime.target().as_str()),
        (Some(".to"), Some(name)) => match parse_target(name) {
            Some(target) => runtime.set_target(target),
            None => println!("Unknown target: {}", name),
        },
        _ => return false,
    }
    true
}

fn parse_target(name: &str) -> Option<Target> {
    Target::from_str(name, true).ok()
}

/// Check if the input appears to be complete
///
/// Only input opening with `{` or `[` can span lines; it is complete once
/// braces and brackets outside of JSON strings balance.
fn is_input_complete(input: &str) -> bool {
    if !input.trim_start().starts_with(['{', '[']) {
        return true;
    }

    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if in_string {
            match c {
                '\\' => escape_next = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => depth -= 1,
            _ => {}
        }
    }

    depth <= 0 && !in_string
}
