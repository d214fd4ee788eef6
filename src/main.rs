// src/main.rs
use std::{fmt::Display, process::ExitCode};

use clap::{CommandFactory, Parser, error::ErrorKind};
use countline::{app, cli::Args};

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return match e.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        // clap already prefixes its message with "error:"
        Err(e) => return exit_on_error(e.render()),
    };

    match app::run(&args).and_then(|report| app::render(&report, args.format.into())) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => exit_on_error(format_args!("error: {e}")),
    }
}

/// Prints the help text followed by `reason` to stderr.
fn exit_on_error(reason: impl Display) -> ExitCode {
    eprintln!("{}", Args::command().render_help());
    eprintln!("{reason}");
    ExitCode::FAILURE
}
