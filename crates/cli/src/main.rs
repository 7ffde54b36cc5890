//! backups-filter CLI

use anyhow::Result;
use clap::Parser;
use cli_lib::{logging, Cli, Settings};
use owo_colors::{OwoColorize, Stream};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "{} {:#}",
                "Error:".if_supports_color(Stream::Stderr, |t| t.red()),
                err
            );
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let written = cli_lib::run(&settings, stdin.lock(), stdout.lock())?;

    tracing::debug!(written, "done");
    Ok(())
}
