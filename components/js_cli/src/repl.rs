//! REPL (Read-Eval-Print Loop) implementation

use crate::driver::Driver;
use crate::error::{CliError, CliResult};
use core_types::{LexError, SyntaxError, TokenKind};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// # Arguments
/// * `driver` - The Driver used to render each complete input
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(driver: &mut Driver) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("jsast v{}", env!("CARGO_PKG_VERSION"));
    println!("Type source to see its syntax tree, '.help' for commands or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    handle_repl_command(trimmed, driver);
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }

                let _ = editor.add_history_entry(&line_buffer);

                match driver.render_string(&line_buffer) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(CliError::Syntax(e)) if is_unexpected_end(&e) => {
                        in_multiline = true;
                        continue;
                    }
                    Err(CliError::Syntax(e)) => eprintln!("Syntax Error: {}", e),
                    Err(e) => eprintln!("Error: {}", e),
                }

                in_multiline = false;
                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, driver: &mut Driver) {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help     - Show this help message");
            println!("  .tokens   - Toggle token stream output");
            println!("  .clear    - Clear the screen");
            println!("  .exit     - Exit the REPL");
            println!("  exit      - Exit the REPL");
            println!("  quit      - Exit the REPL");
        }
        ".tokens" => {
            let enabled = !driver.is_token_mode();
            driver.set_tokens(enabled);
            println!(
                "Token output: {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

/// Check if the input appears to be complete
///
/// This is a simple heuristic that checks for balanced braces/brackets/parens.
/// `//` comments are skipped up to the end of their line.
fn is_input_complete(input: &str) -> bool {
    let mut brace_count = 0;
    let mut bracket_count = 0;
    let mut paren_count = 0;
    let mut in_string = false;
    let mut in_comment = false;
    let mut string_char = ' ';
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
            }
        } else if !in_string {
            match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    in_comment = true;
                }
                '"' | '\'' => {
                    in_string = true;
                    string_char = c;
                }
                '{' => brace_count += 1,
                '}' => brace_count -= 1,
                '[' => bracket_count += 1,
                ']' => bracket_count -= 1,
                '(' => paren_count += 1,
                ')' => paren_count -= 1,
                _ => {}
            }
        } else if c == string_char {
            in_string = false;
        }
    }

    brace_count <= 0 && bracket_count <= 0 && paren_count <= 0 && !in_string
}

/// The source stopped before a construct was finished
fn is_unexpected_end(err: &SyntaxError) -> bool {
    match err {
        SyntaxError::Lex(LexError::UnterminatedString { .. }) => true,
        SyntaxError::Lex(_) => false,
        SyntaxError::Parse(e) => e.token().kind == TokenKind::EOF,
    }
}
