//! jsast CLI
//!
//! Entry point for the syntax tree tool. Parses CLI arguments and
//! delegates to the Driver for scanning, parsing and rendering.

use clap::Parser as ClapParser;
use js_cli::{repl, Cli, CliError, CliResult, Driver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut driver = Driver::new()
        .with_tokens(cli.tokens)
        .with_compact(cli.compact);

    if let Some(file) = cli.file {
        report(driver.render_file(&file), &file);
    } else if let Some(code) = cli.eval {
        report(driver.render_string(&code), "<eval>");
    } else if cli.repl {
        repl::run_repl(&mut driver)?;
    } else {
        // Default: show usage
        println!("jsast v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  jsast --file <FILE>     Print the syntax tree of a file");
        println!("  jsast --eval <CODE>     Print the syntax tree of inline code");
        println!("  jsast --repl            Start interactive REPL");
        println!("  jsast --tokens ...      Print tokens instead of the tree");
        println!();
        println!("Run 'jsast --help' for more options.");
    }

    Ok(())
}

/// Print the rendered output, or the error and exit with status 1
fn report(result: CliResult<String>, origin: &str) {
    match result {
        Ok(rendered) => println!("{}", rendered),
        Err(CliError::Io(e)) => {
            eprintln!("Error: Could not read file '{}': {}", origin, e);
            std::process::exit(1);
        }
        Err(CliError::Syntax(e)) => {
            eprintln!("Syntax Error: {} ({})", e, origin);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
