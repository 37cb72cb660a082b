//! Main entry point for the cv-pull-request CLI.
//!
//! Gathers the parameters of a CV release from the config file, flags and
//! interactive prompts, saves them back and prints a summary.

mod cli;
mod error;
mod run;
mod utils;

use clap::{CommandFactory, Parser};
use cli::Cli;
use cvpr::TerminalPrompter;
use error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on the debug flag
    let logger = cvpr::init_logger(cli.debug);

    let result = run::execute(&cli, logger, &mut TerminalPrompter::new());

    // Handle errors and set exit code
    match result {
        Ok(_) | Err(CliError::Cancelled) => std::process::exit(0),
        Err(e @ CliError::MissingFields(_)) => {
            println!("{e}");
            println!("{}", Cli::command().render_help());
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
