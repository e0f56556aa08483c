//! srcpack - packs a Java project's sources into a ZIP archive and lists
//! what went in.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    let silent = cli.quiet || cli.json;

    let (operation, result) = match &cli.command {
        None => (
            "pack",
            commands::pack::execute(&cli::PackArgs::default(), &*formatter, silent),
        ),
        Some(cli::Commands::Pack(args)) => {
            ("pack", commands::pack::execute(args, &*formatter, silent))
        }
        Some(cli::Commands::List(args)) => ("list", commands::list::execute(args, &*formatter)),
        Some(cli::Commands::Completion { shell }) => {
            commands::completion::execute(*shell);
            ("completion", Ok(()))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(operation, &err);
            ExitCode::FAILURE
        }
    }
}
