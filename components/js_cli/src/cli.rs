//! Command-line arguments

use clap::Parser;

/// Scan and parse JavaScript-like source into a syntax tree
#[derive(Parser, Debug)]
#[command(name = "jsast", version, long_about = None)]
pub struct Cli {
    /// Source file to parse
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Inline source to parse
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    pub tokens: bool,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}
