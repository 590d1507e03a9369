//! Command-line front end: renders markup arguments to stdout.

use std::process::ExitCode;

use clap::Parser;

/// Render ANSI markup to the terminal
#[derive(Parser)]
#[command(name = "ansimark")]
#[command(about = "Render ANSI markup to the terminal")]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:\n  ansimark '<b>Bold</b>' '<r>Red</r>'\n  ansimark '<b><r>Bold Red</r></b>'")]
struct Cli {
    /// Markup text; multiple arguments are joined with a space
    text: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match ansimark::parse(&cli.text.join(" ")) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
