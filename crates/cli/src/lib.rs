pub mod commands;
pub mod table;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "mercado",
    about = "Mercado point-of-sale CLI",
    long_about = "Run the interactive cart session, inspect the product catalog, and review effective configuration.",
    after_help = "Examples:\n  mercado shop\n  mercado catalog\n  mercado config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Run the interactive cart session on stdin/stdout")]
    Shop,
    #[command(about = "List the product catalog with unit prices")]
    Catalog,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Shop => commands::shop::run(),
        Command::Catalog => {
            commands::CommandResult { exit_code: 0, output: commands::catalog::run() }
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
