//! Venvup - environment bootstrapper for the document-chat agent app
//!
//! A command line tool that prepares the local Python environment the
//! agent application needs: interpreter check, virtual environment,
//! dependencies, working directories, secrets template, NLTK corpora.

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod config;
mod corpus;
mod error;
mod python;
mod ui;
mod venv;
mod workspace;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // `venvup` with no subcommand runs the full setup, matching the
    // original single-entry-point contract.
    let command = cli.command.unwrap_or_default();

    let result = match command {
        Commands::Setup(args) => commands::setup::run(cli.project, cli.verbose, args),
        Commands::Doctor => commands::doctor::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        ui::print_error(&e);
        std::process::exit(1);
    }
}
