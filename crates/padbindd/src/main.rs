mod action;
mod app;
mod cli;
mod logging;
mod mapping;
mod runner;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if logging::setup(cli.verbose, cli.no_color).is_err() {
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Command::Run { profile } => app::run(profile.as_deref()),
        Command::Check { profile } => app::check(profile.as_deref()),
        Command::Devices { seconds } => app::devices(*seconds),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
